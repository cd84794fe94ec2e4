use ec_core::Result;

/// Decode as UTF-8, falling back to Latin-1 when the bytes are not valid UTF-8.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback accepts any input.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(e) => {
            tracing::debug!(
                valid_up_to = e.valid_up_to(),
                "input is not valid UTF-8, decoding as Latin-1"
            );
            Ok(decode_latin1(bytes))
        }
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
