//! Canonical encoding of a [`Message`] for signing.
//!
//! Version 1 of the encoding is compact JSON with a fixed key order:
//!
//! ```text
//! {"content":<string>,"timestamp":<string>}
//! ```
//!
//! Strings escape `"`, `\` and control characters (using the short
//! forms `\b`, `\f`, `\n`, `\r` and `\t` where they exist). The HTML
//! sensitive characters `<`, `>` and `&` and the line and paragraph
//! separators U+2028 and U+2029 are also escaped as `\uXXXX` with
//! lowercase hex digits. All other characters are written as UTF-8.
//!
//! Timestamps are RFC 3339 with the offset preserved. Fractional
//! seconds are written to nanosecond precision with trailing zeros
//! removed and omitted when zero; a zero offset is written as `Z`.
//! Offsets that are not a whole number of minutes cannot be written
//! in RFC 3339 so those timestamps are converted to UTC.
//!
//! These rules reproduce the output of common JSON encoders that
//! default to HTML safe escaping, so signers are not required to
//! link against this crate to produce matching bytes.
use time::{OffsetDateTime, UtcOffset};

use crate::Message;

/// Version of the canonical encoding.
pub const CANONICAL_VERSION: u8 = 1;

/// Serialize a message to its canonical bytes.
pub fn serialize(message: &Message) -> Vec<u8> {
    let mut out = String::with_capacity(message.content().len() + 64);
    out.push_str(r#"{"content":"#);
    write_string(&mut out, message.content());
    out.push_str(r#","timestamp":"#);
    out.push('"');
    write_timestamp(&mut out, message.timestamp());
    out.push('"');
    out.push('}');
    out.into_bytes()
}

fn write_string(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str(r#"\""#),
            '\\' => out.push_str(r"\\"),
            '\u{08}' => out.push_str(r"\b"),
            '\u{0c}' => out.push_str(r"\f"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            '<' | '>' | '&' | '\u{2028}' | '\u{2029}' => escape(out, c),
            c if c < ' ' => escape(out, c),
            c => out.push(c),
        }
    }
    out.push('"');
}

fn escape(out: &mut String, c: char) {
    out.push_str(&format!("\\u{:04x}", c as u32));
}

fn write_timestamp(out: &mut String, timestamp: OffsetDateTime) {
    let timestamp = if timestamp.offset().seconds_past_minute() != 0 {
        timestamp.to_offset(UtcOffset::UTC)
    } else {
        timestamp
    };

    let year = timestamp.year();
    if year < 0 {
        out.push('-');
    }
    out.push_str(&format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year.unsigned_abs(),
        u8::from(timestamp.month()),
        timestamp.day(),
        timestamp.hour(),
        timestamp.minute(),
        timestamp.second(),
    ));

    let nanos = timestamp.nanosecond();
    if nanos != 0 {
        let fraction = format!("{:09}", nanos);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    let offset = timestamp.offset();
    if offset.is_utc() {
        out.push('Z');
    } else {
        let (hours, minutes, _) = offset.as_hms();
        let sign = if offset.is_negative() { '-' } else { '+' };
        out.push_str(&format!(
            "{}{:02}:{:02}",
            sign,
            hours.unsigned_abs(),
            minutes.unsigned_abs()
        ));
    }
}
