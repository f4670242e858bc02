//! Length-prefixed string list codec.
//!
//! Wire form: for each string, `<byte length in decimal>#<bytes>`,
//! concatenated. Any byte may appear in a payload, `#` included, because the
//! prefix says how far to read.

use log::debug;

use crate::error::CodecError;

pub fn encode<S: AsRef<str>>(strs: &[S]) -> String {
    let mut out = String::new();
    for s in strs {
        let s = s.as_ref();
        out.push_str(&s.len().to_string());
        out.push('#');
        out.push_str(s);
    }
    out
}

pub fn decode(encoded: &str) -> Result<Vec<String>, CodecError> {
    decode_chunks(encoded).map_err(|err| {
        debug!("rejecting encoded string list: {err}");
        err
    })
}

fn decode_chunks(encoded: &str) -> Result<Vec<String>, CodecError> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < encoded.len() {
        let rest = &encoded[i..];
        let hash = rest.find('#').ok_or(CodecError::MissingDelimiter(i))?;
        let digits = &rest[..hash];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::InvalidLength(digits.to_string()));
        }
        let len: usize = digits
            .parse()
            .map_err(|_| CodecError::InvalidLength(digits.to_string()))?;

        let start = i + hash + 1;
        let end = start
            .checked_add(len)
            .filter(|&end| end <= encoded.len())
            .ok_or(CodecError::Truncated { offset: start, len })?;
        let chunk = encoded
            .get(start..end)
            .ok_or(CodecError::SplitCharacter(start))?;
        out.push(chunk.to_string());
        i = end;
    }
    Ok(out)
}
