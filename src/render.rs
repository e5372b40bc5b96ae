//! HTML for the single page UI.

use crate::resolver::Annotated;

/// What the page shows below the form.
pub enum PageBody<'a> {
    /// Form not submitted yet.
    Prompt,
    /// Generated words with hover definitions.
    Words(&'a [Annotated]),
    /// Request could not be served.
    Error(&'a str),
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// One word with its definition as hover text.
pub fn word_span(item: &Annotated) -> String {
    format!(
        r#"<span title="{}">{}</span>"#,
        escape_html(&item.definition),
        escape_html(&item.word)
    )
}

pub fn page(count: usize, max_count: usize, body: PageBody<'_>) -> String {
    let content = match body {
        PageBody::Prompt => {
            info("Bitte klicke auf 'Generiere Wörter', um die Wörter zu generieren.")
        }
        PageBody::Words(items) => {
            let mut html = String::from("<p>Das sind deine Wörter:</p>\n");
            html.push_str(&info(
                "Bewege deinen Mauszeiger über die Wörter, um die Bedeutung zu sehen.",
            ));
            html.push_str("<ul class=\"words\">\n");
            for item in items {
                html.push_str("<li>");
                html.push_str(&word_span(item));
                html.push_str("</li>\n");
            }
            html.push_str("</ul>\n");
            html
        }
        PageBody::Error(msg) => format!("<div class=\"error\">{}</div>\n", escape_html(msg)),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="de">
<head>
<meta charset="utf-8">
<title>Freestyle-Wortgenerator</title>
<style>
body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}
.info {{ background: #e8f0fe; padding: .75rem; border-radius: .25rem; }}
.error {{ background: #fde8e8; padding: .75rem; border-radius: .25rem; }}
.words span {{ border-bottom: 1px dotted; cursor: help; }}
</style>
</head>
<body>
<h1>Wortgenerator</h1>
<p>Generiere eine zufällige Wortliste z.B. zum Üben von Freestyle-Raps!</p>
<form method="get" action="/">
<label for="count">Wieviele Wörter sollen generiert werden?</label>
<input type="number" id="count" name="count" min="1" max="{max_count}" value="{count}">
<button type="submit">Generiere Wörter</button>
</form>
{content}</body>
</html>
"#
    )
}

fn info(text: &str) -> String {
    format!("<div class=\"info\">{}</div>\n", escape_html(text))
}
