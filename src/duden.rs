//! [`Dictionary`] backed by the Duden online dictionary.
//!
//! Duden offers no public API, so entries are read from the HTML of the word
//! pages and the search page. Markup that cannot be understood yields an
//! entry without meaning instead of an error.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::{Captures, Regex};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::DictionaryConfig;
use crate::dictionary::{Dictionary, Entry, MeaningOverview};
use crate::WortError;

/// HTTP client for `duden.de`.
pub struct DudenClient {
    http: Client,
    base_url: String,
}

impl DudenClient {
    pub fn new(config: &DictionaryConfig) -> Result<Self, WortError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| WortError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `path`, mapping 404 to `None`.
    async fn fetch(&self, path: &str) -> Result<Option<String>, WortError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(WortError::LookupUnavailable(format!("{url} answered {status}")));
        }
        Ok(Some(response.text().await?))
    }

    async fn fetch_entry(&self, urlname: &str) -> Result<Option<Entry>, WortError> {
        let page = self
            .fetch(&format!("/rechtschreibung/{}", urlencoding::encode(urlname)))
            .await?;
        Ok(page.map(|html| parse_entry(&html, urlname)))
    }
}

#[async_trait]
impl Dictionary for DudenClient {
    async fn lookup_exact(&self, word: &str) -> Result<Option<Entry>, WortError> {
        self.fetch_entry(&urlname(word)).await
    }

    async fn search(&self, word: &str) -> Result<Vec<Entry>, WortError> {
        let Some(page) = self
            .fetch(&format!("/suchen/dudenonline/{}", urlencoding::encode(word)))
            .await?
        else {
            return Ok(Vec::new());
        };

        let wanted = urlname(word);
        let mut entries = Vec::new();
        for slug in parse_search_results(&page) {
            if !is_exact_result(&slug, &wanted) {
                continue;
            }
            if let Some(entry) = self.fetch_entry(&slug).await? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}

/// Duden's ASCII slug for a word, e.g. `Bär` -> `Baer`.
pub fn urlname(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.trim().chars() {
        match c {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'Ä' => out.push_str("Ae"),
            'Ö' => out.push_str("Oe"),
            'Ü' => out.push_str("Ue"),
            'ß' => out.push_str("sz"),
            ' ' => out.push('_'),
            c => out.push(c),
        }
    }
    out
}

/// Search hits are either the word itself or a homonym such as
/// `Bank_Geldinstitut`.
fn is_exact_result(slug: &str, wanted: &str) -> bool {
    slug == wanted
        || slug
            .strip_prefix(wanted)
            .is_some_and(|rest| rest.starts_with('_'))
}

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern"))
}

/// Slugs of all result links on a search page, in page order, deduplicated.
pub fn parse_search_results(html: &str) -> Vec<String> {
    static TITLE: OnceLock<Regex> = OnceLock::new();
    let re = regex(
        &TITLE,
        r##"(?s)<h2[^>]*class="[^"]*vignette__title[^"]*"[^>]*>.*?href="/rechtschreibung/([^"#?]+)[^"]*""##,
    );
    let mut slugs: Vec<String> = Vec::new();
    for cap in re.captures_iter(html) {
        let slug = cap[1].to_string();
        if !slugs.contains(&slug) {
            slugs.push(slug);
        }
    }
    slugs
}

/// Build an [`Entry`] from a word page. `fallback_name` is used when the
/// page carries no lemma heading.
pub fn parse_entry(html: &str, fallback_name: &str) -> Entry {
    static LEMMA: OnceLock<Regex> = OnceLock::new();
    let name = regex(
        &LEMMA,
        r#"(?s)<span[^>]*class="[^"]*lemma__main[^"]*"[^>]*>(.*?)</span>"#,
    )
    .captures(html)
    .map(|c| clean_text(&c[1]))
    .filter(|n| !n.is_empty())
    .unwrap_or_else(|| fallback_name.to_string());

    Entry {
        name,
        meaning_overview: parse_meaning_overview(html),
        frequency: parse_frequency(html),
    }
}

/// Meaning summary from `#bedeutung` (one meaning) or `#bedeutungen`
/// (enumerated meanings).
pub fn parse_meaning_overview(html: &str) -> Option<MeaningOverview> {
    static PARA: OnceLock<Regex> = OnceLock::new();
    static ITEM: OnceLock<Regex> = OnceLock::new();

    if let Some(body) = section(html, "bedeutung") {
        let text = regex(&PARA, r"(?s)<p[^>]*>(.*?)</p>")
            .captures(body)
            .map(|c| clean_text(&c[1]))?;
        return (!text.is_empty()).then_some(MeaningOverview::Single(text));
    }

    let body = section(html, "bedeutungen")?;
    let items: Vec<String> = regex(
        &ITEM,
        r#"(?s)<div[^>]*class="[^"]*enumeration__text[^"]*"[^>]*>(.*?)</div>"#,
    )
    .captures_iter(body)
    .map(|c| clean_text(&c[1]))
    .filter(|t| !t.is_empty())
    .collect();
    match items.len() {
        0 => None,
        1 => items.into_iter().next().map(MeaningOverview::Single),
        _ => Some(MeaningOverview::Many(items)),
    }
}

/// Number of filled frequency bars, zero when absent.
pub fn parse_frequency(html: &str) -> u8 {
    static SHAFT: OnceLock<Regex> = OnceLock::new();
    regex(
        &SHAFT,
        r#"(?s)<span[^>]*class="[^"]*shaft__full[^"]*"[^>]*>(.*?)</span>"#,
    )
    .captures(html)
    .map(|c| {
        c[1].chars()
            .filter(|ch| !ch.is_whitespace())
            .count()
            .min(u8::MAX as usize) as u8
    })
    .unwrap_or(0)
}

/// Markup of the division with the given id, without its heading.
fn section<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    let marker = format!("id=\"{id}\"");
    let start = html.find(&marker)?;
    let open_end = html[start..].find('>')? + start + 1;
    let rest = &html[open_end..];
    let end = rest.find("<div class=\"division").unwrap_or(rest.len());
    let body = &rest[..end];
    Some(match body.find("</header>") {
        Some(h) => &body[h + "</header>".len()..],
        None => body,
    })
}

/// Strip tags, decode common entities and collapse whitespace.
pub fn clean_text(fragment: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let stripped = regex(&TAG, r"(?s)<[^>]*>").replace_all(fragment, " ");
    let decoded = decode_entities(&stripped);
    decoded
        .replace('\u{ad}', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(text: &str) -> String {
    static NUMERIC: OnceLock<Regex> = OnceLock::new();
    let named = text
        .replace("&shy;", "")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'");
    let re = regex(&NUMERIC, r"&#(x[0-9A-Fa-f]+|[0-9]+);");
    let numeric = re.replace_all(&named, |c: &Captures| {
        let code = &c[1];
        let value = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse().ok(),
        };
        value
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });
    // last so that "&amp;lt;" stays literal
    numeric.replace("&amp;", "&")
}
