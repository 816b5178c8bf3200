//! Parsing of file-size tokens with binary-unit suffixes
//!
//! A size token is a decimal number followed by an optional suffix such as
//! `k`, `kb`, `kib`, `m`, and so on up to exabytes. Suffixes use binary
//! scales: `1k` is 1024 bytes, `1m` is 1048576 bytes.

use crate::error::{Error, Result};

/// Parse a size token like `512`, `32k`, or `4gb` into a byte count.
///
/// The grammar is case-insensitive and tolerates whitespace around the
/// number and between the number and the suffix. A bare number or a `b`
/// suffix means bytes. Fails with [`Error::InvalidSize`] when the token
/// does not match the grammar, the digits do not fit in a `u64`, or the
/// scaled result would overflow.
pub fn parse_size(input: &str) -> Result<u64> {
    let invalid = || Error::InvalidSize(input.to_string());

    let s = input.trim();
    let split = s
        .char_indices()
        .find(|(_, c)| c.is_ascii_alphabetic())
        .map_or(s.len(), |(i, _)| i);
    let digits = s[..split].trim_end();
    let suffix = s[split..].trim_end().to_ascii_lowercase();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let number: u64 = digits.parse().map_err(|_| invalid())?;

    let scale: u64 = match suffix.as_str() {
        "" | "b" => 1,
        "k" | "kb" | "kib" => 1 << 10,
        "m" | "mb" | "mib" => 1 << 20,
        "g" | "gb" | "gib" => 1 << 30,
        "t" | "tb" | "tib" => 1 << 40,
        "p" | "pb" | "pib" => 1 << 50,
        "e" | "eb" | "eib" => 1 << 60,
        _ => return Err(invalid()),
    };

    number.checked_mul(scale).ok_or_else(invalid)
}
