//! Binary KeyValue decoding.

use super::value::{VdfMap, VdfValue};
use super::{tag, MAX_DEPTH};
use crate::error::{ShortcutError, Result};
use tracing::{debug, warn};

/// Parse a binary KeyValue document into an ordered tree.
///
/// The whole input must be consumed: the last byte has to be the end marker
/// that closes the root object.
pub fn decode(bytes: &[u8]) -> Result<VdfMap> {
    let mut reader = Reader::new(bytes);
    let root = reader.read_object_body(0)?;

    if reader.pos != bytes.len() {
        return Err(ShortcutError::format(
            format!("{} trailing bytes after end of document", bytes.len() - reader.pos),
            reader.pos,
        ));
    }

    debug!("Decoded {} bytes into {} top-level keys", bytes.len(), root.len());
    Ok(root)
}

/// Cursor over the input buffer.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Read entries until the end marker of the current object.
    fn read_object_body(&mut self, depth: usize) -> Result<VdfMap> {
        if depth > MAX_DEPTH {
            return Err(ShortcutError::format("objects nested too deep", self.pos));
        }

        let mut map = VdfMap::new();
        loop {
            let tag_offset = self.pos;
            let type_tag = self.read_u8()?;

            let (key, value) = match type_tag {
                tag::END => return Ok(map),
                tag::OBJECT => {
                    let key = self.read_cstring()?;
                    (key, VdfValue::Map(self.read_object_body(depth + 1)?))
                }
                tag::STRING => {
                    let key = self.read_cstring()?;
                    (key, VdfValue::String(self.read_cstring()?))
                }
                tag::INT => {
                    let key = self.read_cstring()?;
                    (key, VdfValue::Int(self.read_u32()?))
                }
                other => {
                    return Err(ShortcutError::format(
                        format!("unknown type tag 0x{:02x}", other),
                        tag_offset,
                    ))
                }
            };

            if map.contains_key(&key) {
                warn!("Duplicate key {:?} at byte {}, keeping the last value", key, tag_offset);
            }
            map.insert(key, value);
        }
    }

    fn read_u8(&mut self) -> Result<u8> {
        let byte = *self
            .bytes
            .get(self.pos)
            .ok_or_else(|| ShortcutError::format("unexpected end of data", self.pos))?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_u32(&mut self) -> Result<u32> {
        let end = self.pos + 4;
        let raw = self
            .bytes
            .get(self.pos..end)
            .ok_or_else(|| ShortcutError::format("truncated integer", self.pos))?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(raw);
        self.pos = end;
        Ok(u32::from_le_bytes(buf))
    }

    /// Read a NUL-terminated UTF-8 string.
    fn read_cstring(&mut self) -> Result<String> {
        let start = self.pos;
        let len = self.bytes[start..]
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| ShortcutError::format("unterminated string", start))?;

        let raw = &self.bytes[start..start + len];
        let s = std::str::from_utf8(raw)
            .map_err(|_| ShortcutError::format("invalid UTF-8 in string", start))?;

        self.pos = start + len + 1;
        Ok(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `{"shortcuts": {"0": {"appid": 3417544970, "AppName": "Insomnia"}}}`
    fn insomnia_bytes() -> Vec<u8> {
        let mut b = Vec::new();
        b.push(0x00);
        b.extend_from_slice(b"shortcuts\0");
        b.push(0x00);
        b.extend_from_slice(b"0\0");
        b.push(0x02);
        b.extend_from_slice(b"appid\0");
        b.extend_from_slice(&3_417_544_970u32.to_le_bytes());
        b.push(0x01);
        b.extend_from_slice(b"AppName\0Insomnia\0");
        b.extend_from_slice(&[0x08, 0x08, 0x08]);
        b
    }

    #[test]
    fn test_decode_nested_document() {
        let root = decode(&insomnia_bytes()).unwrap();
        let entry = root["shortcuts"].as_map().unwrap()["0"].as_map().unwrap();

        assert_eq!(entry["appid"], VdfValue::Int(3_417_544_970));
        assert_eq!(entry["AppName"], VdfValue::String("Insomnia".into()));
        // File order is kept.
        let keys: Vec<&str> = entry.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["appid", "AppName"]);
    }

    #[test]
    fn test_decode_empty_document() {
        assert!(decode(&[0x08]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_truncated_input() {
        let bytes = insomnia_bytes();
        for cut in [0, 5, 14, 25, bytes.len() - 1] {
            let err = decode(&bytes[..cut]).unwrap_err();
            assert!(matches!(err, ShortcutError::Format { .. }), "cut at {}", cut);
        }
    }

    #[test]
    fn test_decode_unknown_tag() {
        let bytes = [0x07, b'k', 0x00, 0, 0, 0, 0, 0, 0, 0, 0, 0x08];
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, ShortcutError::Format { offset: 0, .. }));
        assert!(err.to_string().contains("0x07"));
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut bytes = insomnia_bytes();
        bytes.push(0x08);
        let err = decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("trailing"));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let bytes = [0x01, 0xff, 0xfe, 0x00, b'v', 0x00, 0x08];
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, ShortcutError::Format { offset: 1, .. }));
    }

    #[test]
    fn test_decode_depth_limit() {
        let mut bytes = Vec::new();
        for _ in 0..=MAX_DEPTH + 1 {
            bytes.extend_from_slice(&[0x00, b'a', 0x00]);
        }
        bytes.extend(std::iter::repeat(0x08).take(MAX_DEPTH + 3));
        let err = decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("nested too deep"));
    }
}
