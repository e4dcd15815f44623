//! Convert Junos-style brace-delimited configuration text to a nested tree and back.
//!
//! ```
//! use juniper_cfg::{parse, serialize};
//!
//! let text = "interfaces {\n  ge-0/0/0 {\n    unit 0;\n  }\n}\n";
//! let tree = parse(text);
//! assert_eq!(parse(&serialize(&tree)), tree);
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod parser;
pub mod serializer;

pub use ast::{Block, Value};
pub use config::JuniperConfig;
pub use error::JuniperError;
pub use parser::{ParseOptions, Parser, parse, parse_with};
pub use serializer::{serialize, serialize_block};
