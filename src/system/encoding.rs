//! Console code-page boundary.
//!
//! The Windows command interpreter on the target images runs in the GBK
//! code page: captured tool output arrives as GBK bytes, and command text
//! handed to the interpreter must be GBK as well. All internal logic
//! (pattern matching, comparisons) stays in canonical UTF-8, so the
//! conversion happens exactly twice: decode immediately after capture,
//! encode immediately before dispatch.

use encoding_rs::GBK;

/// Decode raw console output into canonical UTF-8.
///
/// Lossy: undecodable byte sequences become replacement characters, never
/// an error. Pure-ASCII output passes through unchanged.
pub fn decode_console(raw: &[u8]) -> String {
    let (text, _, _) = GBK.decode(raw);
    text.into_owned()
}

/// Encode canonical command text into console bytes.
///
/// Characters without a GBK representation are substituted with numeric
/// character references rather than dropped.
pub fn encode_console(text: &str) -> Vec<u8> {
    let (bytes, _, _) = GBK.encode(text);
    bytes.into_owned()
}
