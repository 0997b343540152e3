//! Delimited field value codec.
//!
//! A picker-backed field stores its selections as display texts joined by
//! `;`, each one followed by the delimiter (`alice;bob;`). That trailing
//! delimiter is the legacy storage convention and is always written so
//! existing rows compare equal after a round trip.

/// Separator between stored tokens.
pub const DELIMITER: char = ';';

/// Split a stored field value into its tokens.
///
/// Empty entries (from a trailing delimiter, doubled delimiters, or an empty
/// value) are dropped. Everything else is kept verbatim as an opaque token.
pub fn decode(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(DELIMITER)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tokens into a stored field value, each followed by the delimiter.
pub fn encode<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for token in tokens {
        out.push_str(token.as_ref());
        out.push(DELIMITER);
    }
    out
}
