use quotes_core::domain::{ChatLog, Extraction, LineKind};
use quotes_core::parser::parse_line;
use quotes_core::ports::{PageWriter, Result};
use std::fs;
use std::path::Path;

/// Shared `<head>` block emitted at the top of every generated page.
const COMMON_HEADER: &str = r#"
<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <meta name="viewport" content="width=device-width,initial-scale=1">
    <meta name="format-detection" content="telephone=no">
    <meta name="description" content="Funny quotes from the historic #serenityos freenode channel">
    <meta name="keywords" content="Funny, quotes, SerenityOS">
    <meta name="robots" value="index">
    <title>Serenity Freenode Quotes</title>
    <link rel="author" href="https://github.com/BenWiederhake/">
    <link rel="icon" type="image/png" sizes="32x32" href="favicon.png">
    <link rel="stylesheet" href="x.css">
</head>
"#;

/// HTML page writer adapter implementation. Renders one quote page per
/// extraction plus the index into an existing output directory.
pub struct HtmlPageWriter {
    output_dir: String,
}

impl HtmlPageWriter {
    pub fn new(output_dir: String) -> Self {
        Self { output_dir }
    }

    /// Formats one raw log line as an inline fragment: timestamp, speaker
    /// marker, escaped message.
    fn format_line(&self, raw_line: &str) -> Result<String> {
        let parsed = parse_line(raw_line)?;
        let user = escape_html(&parsed.user);
        let content = escape_html(&parsed.content);
        let user_mark = match parsed.kind {
            LineKind::Says => format!("&lt;<span class=\"user\">{}</span>&gt;", user),
            LineKind::Action => format!("* <span class=\"user\">{}</span>", user),
        };
        Ok(format!(
            "<span class=\"mono\"><span class=\"time\">{}</span> {} <span class=\"content\">{}</span></span>",
            parsed.timestamp, user_mark, content
        ))
    }

    /// Formats a run of context lines, one fragment per line.
    fn format_window(&self, lines: &[String]) -> Result<String> {
        let mut fragments = Vec::with_capacity(lines.len());
        for line in lines {
            fragments.push(self.format_line(line)?);
        }
        Ok(fragments.join("<br/>\n"))
    }

    /// Formats the full quote page for one extraction: the windowed context,
    /// the highlighted target line, and the optional context annotation.
    fn format_quote_page(&self, log: &ChatLog, extraction: &Extraction) -> Result<String> {
        let window = log.window_around(extraction.lineno)?;
        let pre = self.format_window(window.before)?;
        let direct = self.format_line(window.target)?;
        let epilog = self.format_window(window.after)?;
        let context = match &extraction.context {
            Some(note) => format!(" <span class=\"context\">({})</span>", escape_html(note)),
            None => String::new(),
        };

        let mut page = String::with_capacity(
            COMMON_HEADER.len() + pre.len() + direct.len() + epilog.len() + 256,
        );
        page.push_str(COMMON_HEADER);
        page.push_str("\n<body>\n");
        page.push_str(&format!("<h1>Quote around line #{}</h1>\n", extraction.lineno));
        page.push_str("<p>\n");
        page.push_str(&pre);
        page.push_str(" <br/>\n");
        page.push_str("<span class=\"highlight\">");
        page.push_str(&direct);
        page.push_str(&context);
        page.push_str("</span><br/>\n");
        page.push_str(&epilog);
        page.push_str("\n</p>\n");
        page.push_str("<p>See also <a href=\"index.html\">all other quotes</a>.</p>\n");
        page.push_str("</body>\n</html>\n");
        Ok(page)
    }

    /// Formats one index entry: speaker, link to the quote page labeled with
    /// the message, timestamp and line number.
    fn format_index_entry(&self, log: &ChatLog, extraction: &Extraction) -> Result<String> {
        let parsed = parse_line(log.line(extraction.lineno)?)?;
        Ok(format!(
            "<li>{}: <a href=\"quote-{}.html\" class=\"mono\">{}</a> ({}, line {})</li>",
            escape_html(&parsed.user),
            extraction.lineno,
            escape_html(&parsed.content),
            parsed.timestamp,
            extraction.lineno
        ))
    }

    /// Formats the index page over the whole extraction list, in list order.
    fn format_index_page(&self, log: &ChatLog, extractions: &[Extraction]) -> Result<String> {
        let mut entries = Vec::with_capacity(extractions.len());
        for extraction in extractions {
            entries.push(self.format_index_entry(log, extraction)?);
        }
        let links = entries.join("\n");

        let mut page = String::with_capacity(COMMON_HEADER.len() + links.len() + 512);
        page.push_str(COMMON_HEADER);
        page.push_str("\n<body>\n");
        page.push_str(
            "<h1>Juicy quotes from the historic <span class=\"mono\">#serenityos</span> Freenode channel</h1>\n",
        );
        page.push_str(&format!(
            "<p>We can't link to all {} lines individually, so here's the best {} of them:</p>\n",
            log.len(),
            extractions.len()
        ));
        page.push_str("<ul>\n");
        page.push_str(&links);
        page.push_str("\n</ul>\n");
        page.push_str(
            "<p>You can also download the <a href=\"serenityos.gz\">raw, compressed archive of <code>#serenityos</code></a>.</p>\n",
        );
        page.push_str("</body>\n</html>\n");
        Ok(page)
    }
}

impl PageWriter for HtmlPageWriter {
    fn write_site(&self, log: &ChatLog, extractions: &[Extraction]) -> Result<()> {
        // The output directory must already exist; a missing one surfaces as
        // an IO error on the first write.
        let output_dir = Path::new(&self.output_dir);

        for extraction in extractions {
            let page = self.format_quote_page(log, extraction)?;
            let file_path = output_dir.join(format!("quote-{}.html", extraction.lineno));
            fs::write(&file_path, page)?;
            tracing::debug!(path = %file_path.display(), "quote page written");
        }

        let index = self.format_index_page(log, extractions)?;
        fs::write(output_dir.join("index.html"), index)?;
        tracing::debug!(pages = extractions.len(), "index page written");

        Ok(())
    }
}

/// Minimal HTML escaping over exactly the five significant characters, each
/// replaced once.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
