//! Generic value tree produced and consumed by the codec.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered object: keys keep the order they had in the file.
pub type VdfMap = IndexMap<String, VdfValue>;

/// A node of the binary KeyValue tree.
///
/// The format has exactly three kinds of node, so anything that cannot be
/// expressed as one of these is rejected before it reaches the encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VdfValue {
    Int(u32),
    String(String),
    Map(VdfMap),
}

impl VdfValue {
    /// Short name of the node kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            VdfValue::Int(_) => "integer",
            VdfValue::String(_) => "string",
            VdfValue::Map(_) => "object",
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            VdfValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            VdfValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&VdfMap> {
        match self {
            VdfValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<u32> for VdfValue {
    fn from(n: u32) -> Self {
        VdfValue::Int(n)
    }
}

impl From<String> for VdfValue {
    fn from(s: String) -> Self {
        VdfValue::String(s)
    }
}

impl From<&str> for VdfValue {
    fn from(s: &str) -> Self {
        VdfValue::String(s.to_string())
    }
}

impl From<VdfMap> for VdfValue {
    fn from(m: VdfMap) -> Self {
        VdfValue::Map(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_kind() {
        let n = VdfValue::from(7u32);
        assert_eq!(n.as_u32(), Some(7));
        assert_eq!(n.as_str(), None);
        assert_eq!(n.kind(), "integer");

        let s = VdfValue::from("hello");
        assert_eq!(s.as_str(), Some("hello"));
        assert!(s.as_map().is_none());

        let m = VdfValue::from(VdfMap::new());
        assert_eq!(m.kind(), "object");
        assert!(m.as_map().unwrap().is_empty());
    }

    #[test]
    fn test_json_uses_plain_values() {
        let mut map = VdfMap::new();
        map.insert("0".into(), "Steam Deck".into());
        map.insert("count".into(), 3u32.into());
        let json = serde_json::to_string(&VdfValue::Map(map)).unwrap();
        assert_eq!(json, r#"{"0":"Steam Deck","count":3}"#);
    }

    #[test]
    fn test_json_rejects_unrepresentable_numbers() {
        assert!(serde_json::from_str::<VdfValue>("-1").is_err());
        assert!(serde_json::from_str::<VdfValue>("4294967296").is_err());
        assert!(serde_json::from_str::<VdfValue>("1.5").is_err());
        assert_eq!(
            serde_json::from_str::<VdfValue>("4294967295").unwrap(),
            VdfValue::Int(u32::MAX)
        );
    }
}
