use std::fs;

use wortgenerator::{WordList, WordSource, WortError};

const CSV: &str = "lemma,pos\n\
Haus,Substantiv\n\
laufen,Verb\n\
Baum,Substantiv\n\
Haus,Substantiv\n\
 Auto ,Substantiv\n\
,Substantiv\n\
schnell,Adjektiv\n";

#[test]
fn keeps_distinct_nouns_in_file_order() {
    let list = WordList::from_reader(CSV.as_bytes(), &WordSource::default()).unwrap();
    assert_eq!(list.as_slice(), ["Haus", "Baum", "Auto"]);
    assert!(list.contains("Baum"));
    assert!(!list.contains("laufen"));
}

#[test]
fn custom_columns_and_tag() {
    let data = "wort,art\nTisch,NN\ngehen,VV\n";
    let source = WordSource {
        pos_column: "art".into(),
        lemma_column: "wort".into(),
        noun_tag: "NN".into(),
        ..WordSource::default()
    };
    let list = WordList::from_reader(data.as_bytes(), &source).unwrap();
    assert_eq!(list.as_slice(), ["Tisch"]);
}

#[test]
fn missing_column_is_config_error() {
    let data = "word,pos\nHaus,Substantiv\n";
    let err = WordList::from_reader(data.as_bytes(), &WordSource::default()).unwrap_err();
    match err {
        WortError::Config(msg) => assert!(msg.contains("lemma")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nouns.csv");
    fs::write(&path, CSV).unwrap();
    let source = WordSource {
        path,
        ..WordSource::default()
    };
    let list = WordList::load(&source).unwrap();
    assert_eq!(list.len(), 3);
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let source = WordSource {
        path: dir.path().join("missing.csv"),
        ..WordSource::default()
    };
    let err = WordList::load(&source).unwrap_err();
    assert!(matches!(err, WortError::Io(_)));
    assert!(err.to_string().contains("missing.csv"));
}

#[test]
fn from_iter_drops_duplicates() {
    let list: WordList = ["Haus", "Haus", "Baum"].into_iter().collect();
    assert_eq!(list.as_slice(), ["Haus", "Baum"]);
}
