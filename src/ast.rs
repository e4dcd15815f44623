use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered mapping of keys to values; the body of a `name { ... }` group.
pub type Block = IndexMap<String, Value>;

/// A single slot in a configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// One statement value. Empty for flag statements such as `vlan-tagging;`.
    Scalar(String),
    /// Values of a key repeated at one level, in source order.
    List(Vec<String>),
    Block(Block),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&str> {
        if let Value::Scalar(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        if let Value::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        if let Value::Block(block) = self {
            Some(block)
        } else {
            None
        }
    }

    pub fn as_block_mut(&mut self) -> Option<&mut Block> {
        if let Value::Block(block) = self {
            Some(block)
        } else {
            None
        }
    }

    /// True for a flag statement (`key;`).
    pub fn is_flag(&self) -> bool {
        matches!(self, Value::Scalar(s) if s.is_empty())
    }

    /// Statement values held by this slot; a scalar counts as a list of one.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Value::Scalar(s) => vec![s.as_str()],
            Value::List(items) => items.iter().map(String::as_str).collect(),
            Value::Block(_) => Vec::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::List(_) => "list",
            Value::Block(_) => "block",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<Block> for Value {
    fn from(block: Block) -> Self {
        Value::Block(block)
    }
}
