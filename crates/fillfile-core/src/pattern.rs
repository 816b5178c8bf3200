//! Parsing of decimal and hexadecimal byte-sequence text
//!
//! These parsers turn user-typed digit strings into raw bytes for fill
//! patterns. Almost any US-ASCII punctuation is accepted as a separator, so
//! `12,34,56`, `12.34.56`, and `12 34 56` are interchangeable. Without
//! separators the digits group at a fixed width: every three digits start a
//! new byte in decimal, every two in hex. A trailing partial group still
//! counts as a byte.
//!
//! Both parsers return `None` on a hard failure (a character that is neither
//! a digit nor punctuation, or a decimal value above 255). Empty input is
//! not an error: it yields an empty vector, which callers read as "no
//! explicit pattern given".

/// Parse decimal byte values (000 to 255) with optional separators.
pub fn parse_dec_bytes(input: &str) -> Option<Vec<u8>> {
    parse_bytes(input, 10, 3)
}

/// Parse hexadecimal byte values (00 to FF) with optional separators.
/// Hex digits are case-insensitive.
pub fn parse_hex_bytes(input: &str) -> Option<Vec<u8>> {
    parse_bytes(input, 16, 2)
}

/// ASCII punctuation acts as a byte separator; anything else that is not a
/// digit is a hard parse failure.
fn is_separator(ch: char) -> bool {
    matches!(ch, '\u{00}'..='\u{2F}' | '\u{3A}'..='\u{40}' | '\u{5B}'..='\u{60}' | '\u{7B}'..='\u{7F}')
}

fn parse_bytes(input: &str, radix: u32, group: u32) -> Option<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut value: u32 = 0;
    let mut digit_count: u32 = 0;

    for ch in input.chars() {
        if let Some(digit) = ch.to_digit(radix) {
            value = value * radix + digit;
            digit_count += 1;
        } else if is_separator(ch) {
            // force-close a partially accumulated byte
            if digit_count > 0 {
                digit_count = group;
            }
        } else {
            return None;
        }

        if digit_count >= group {
            if value > 0xFF {
                // only reachable with three decimal digits (256 to 999)
                return None;
            }
            bytes.push(value as u8);
            value = 0;
            digit_count = 0;
        }
    }

    // trailing one or two digits cannot overflow a byte
    if digit_count > 0 {
        bytes.push(value as u8);
    }

    Some(bytes)
}
