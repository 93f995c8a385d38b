//! Raw listing bytes to text
//!
//! PowerShell redirects output as UTF-16LE with a byte-order mark, while listings copied
//! out of a terminal are usually UTF-8. The BOM decides; without one the bytes are read
//! as UTF-8. Malformed sequences are replaced rather than rejected so the grammar can
//! report where the text stops making sense.

use encoding_rs::UTF_8;

/// Text recovered from a listing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// Name of the encoding that was used, e.g. `UTF-16LE`
    pub encoding: &'static str,
    /// Whether any malformed sequence was replaced with U+FFFD
    pub had_errors: bool,
}

pub fn decode(bytes: &[u8]) -> Decoded {
    let (text, encoding, had_errors) = UTF_8.decode(bytes);

    tracing::debug!(
        encoding = encoding.name(),
        bytes = bytes.len(),
        lossy = had_errors,
        "decoded listing"
    );

    Decoded {
        text: text.into_owned(),
        encoding: encoding.name(),
        had_errors,
    }
}
