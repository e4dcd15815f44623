use std::fs;

use crate::ast::Block;
use crate::parser::parse;
use crate::JuniperError;

/// Export a configuration tree to pretty-printed JSON.
///
/// Values map directly onto JSON:
/// - scalars → strings (flags become `""`)
/// - lists → arrays of strings
/// - blocks → objects, keys in source order
///
/// # Examples
/// ```
/// use juniper_cfg::{parse, export::export_to_json};
///
/// let json = export_to_json(&parse("system {\n  host-name r1;\n}\n")).unwrap();
/// assert!(json.contains("\"host-name\": \"r1\""));
/// ```
pub fn export_to_json(tree: &Block) -> Result<String, JuniperError> {
    serde_json::to_string_pretty(tree).map_err(|e| JuniperError::JsonError {
        message: format!("Failed to serialize tree: {}", e),
        hint: None,
        code: Some(501),
    })
}

/// Build a configuration tree from JSON produced by [`export_to_json`].
///
/// # Errors
/// Returns error if the input is not a JSON object whose values are strings,
/// arrays of strings, or nested objects of the same shape.
pub fn import_from_json(json: &str) -> Result<Block, JuniperError> {
    serde_json::from_str(json).map_err(|e| JuniperError::JsonError {
        message: format!("Failed to read tree: {}", e),
        hint: Some("Expected an object of strings, string arrays and nested objects".into()),
        code: Some(502),
    })
}

/// Read, parse, and export a configuration file in one call.
///
/// # Errors
/// Returns error if the file can't be read.
pub fn export_file_to_json(path: &str) -> Result<String, JuniperError> {
    let input = fs::read_to_string(path).map_err(|e| JuniperError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string(),
        hint: None,
        code: Some(300),
    })?;

    export_to_json(&parse(&input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Value;
    use std::io::Write;

    #[test]
    fn test_export_shapes() {
        let tree = parse("vlan-tagging;\nmember a;\nmember b;\nsystem {\n  host-name r1;\n}\n");
        let json_output = export_to_json(&tree).expect("Failed to export tree to JSON");
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert_eq!(v["vlan-tagging"], "");
        assert_eq!(v["member"], serde_json::json!(["a", "b"]));
        assert_eq!(v["system"]["host-name"], "r1");
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let tree = parse("b 1;\na {\n  z;\n  y 2;\n}\nc 3;\nc 4;\n");
        let back = import_from_json(&export_to_json(&tree).unwrap()).unwrap();
        assert_eq!(back, tree);

        let keys: Vec<&str> = back.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(back["a"].as_block().unwrap()["z"], Value::Scalar(String::new()));
    }

    #[test]
    fn test_import_rejects_non_string_leaves() {
        let err = import_from_json(r#"{"mtu": 9192}"#).unwrap_err();
        assert!(matches!(err, JuniperError::JsonError { code: Some(502), .. }));

        assert!(import_from_json("[\"a\"]").is_err());
    }

    #[test]
    fn test_export_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "interfaces {{\n  lo0 {{\n    unit 0;\n  }}\n}}\n").unwrap();

        let json = export_file_to_json(file.path().to_str().unwrap()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["interfaces"]["lo0"]["unit"], "0");

        assert!(matches!(
            export_file_to_json("/nonexistent/juniper.conf"),
            Err(JuniperError::FileError { .. })
        ));
    }
}
