//! Transcript line parser
//!
//! Grammar: `<date>, <time> - <user>: <text>`. Lines that do not match are
//! dropped; exported chats routinely contain multi-line continuations.

use crate::core::types::Message;

const DATE_SEPARATOR: &str = " - ";
const USER_SEPARATOR: &str = ": ";
const BOM: char = '\u{feff}';

/// Parse a single line, returning `None` when either separator is missing
pub(crate) fn parse_line(line: &str) -> Option<Message> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (timestamp, rest) = line.split_once(DATE_SEPARATOR)?;
    let (user, text) = rest.split_once(USER_SEPARATOR)?;
    Some(Message {
        timestamp_text: timestamp.to_string(),
        user: user.to_string(),
        text: text.to_string(),
    })
}

/// Parse a whole transcript into messages, preserving line order
pub(crate) fn parse(raw: &str) -> Vec<Message> {
    let raw = raw.strip_prefix(BOM).unwrap_or(raw);
    raw.split('\n').filter_map(parse_line).collect()
}
