//! Binary KeyValue encoding.

use super::value::{VdfMap, VdfValue};
use super::{tag, MAX_DEPTH};
use crate::error::{ShortcutError, Result};
use tracing::debug;

/// Serialize a tree into the binary KeyValue layout.
///
/// Fails if a key or string contains a NUL byte (the format has no escape
/// for it) or if objects nest deeper than the decoder accepts.
pub fn encode(root: &VdfMap) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_object_body(&mut out, root, 0)?;
    debug!("Encoded {} top-level keys into {} bytes", root.len(), out.len());
    Ok(out)
}

fn write_object_body(out: &mut Vec<u8>, map: &VdfMap, depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(ShortcutError::format("objects nested too deep", out.len()));
    }

    for (key, value) in map {
        match value {
            VdfValue::Map(child) => {
                out.push(tag::OBJECT);
                write_cstring(out, key)?;
                write_object_body(out, child, depth + 1)?;
            }
            VdfValue::String(s) => {
                out.push(tag::STRING);
                write_cstring(out, key)?;
                write_cstring(out, s)?;
            }
            VdfValue::Int(n) => {
                out.push(tag::INT);
                write_cstring(out, key)?;
                out.extend_from_slice(&n.to_le_bytes());
            }
        }
    }

    out.push(tag::END);
    Ok(())
}

fn write_cstring(out: &mut Vec<u8>, s: &str) -> Result<()> {
    if s.as_bytes().contains(&0) {
        return Err(ShortcutError::format(
            format!("string {:?} contains a NUL byte", s),
            out.len(),
        ));
    }
    out.extend_from_slice(s.as_bytes());
    out.push(0);
    Ok(())
}
