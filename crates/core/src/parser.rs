use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{LineKind, ParsedLine};
use crate::error::ExtractError;
use crate::ports::Result;

// The timestamp matcher is era-bound (202x); it is not an ISO-8601 validator.
//
// Chat message, e.g. `2020-11-14T15:04:17 #serenityos <kling> niiice`
static SAYS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(202\d-\d\d-\d\dT\d\d:\d\d:\d\d) #serenityos <([^>]+)> (.+)$").unwrap()
});

// Third-person action, e.g. `2020-11-14T14:13:16 #serenityos * linusg waves`
static ACTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(202\d-\d\d-\d\dT\d\d:\d\d:\d\d) #serenityos \* ([^ ]+) (.+)$").unwrap()
});

/// Classifies one raw log line into a [`ParsedLine`].
///
/// Exactly two line shapes are accepted, chat message first, then
/// third-person action. Anything else is [`ExtractError::MalformedLine`].
pub fn parse_line(raw: &str) -> Result<ParsedLine> {
    if let Some(caps) = SAYS_RE.captures(raw) {
        return Ok(ParsedLine {
            kind: LineKind::Says,
            timestamp: caps[1].to_string(),
            user: caps[2].to_string(),
            content: caps[3].to_string(),
        });
    }
    if let Some(caps) = ACTION_RE.captures(raw) {
        return Ok(ParsedLine {
            kind: LineKind::Action,
            timestamp: caps[1].to_string(),
            user: caps[2].to_string(),
            content: caps[3].to_string(),
        });
    }
    Err(ExtractError::MalformedLine {
        line: raw.to_string(),
    })
}
