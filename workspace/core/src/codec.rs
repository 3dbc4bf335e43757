//! Hexadecimal codec for keys and signatures.
use crate::Result;

/// Decode hexadecimal text into bytes.
///
/// Accepts upper and lower case digits. Odd length input or any
/// non-hex character fails without yielding partial output.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

/// Encode bytes as lowercase hexadecimal text.
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}
