//! Value types used by profiles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A YAML scalar used where the document expects free-form text.
///
/// YAML reads `soc_model: 60` as a number; this keeps such values usable
/// without forcing the author to quote them. Decimals are parsed but
/// rejected by [`Profile::validate`](super::Profile::validate), since YAML
/// does not keep their original spelling; write them as quoted strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// The string stored in the document. Booleans use the `"1"`/`"0"` flag encoding.
    pub fn encode(&self) -> String {
        match self {
            Scalar::Bool(true) => "1".to_string(),
            Scalar::Bool(false) => "0".to_string(),
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(x) => x.to_string(),
            Scalar::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}
