use super::*;
use crate::ast::Value;

impl JuniperConfig {
    /// Look up a value by its key path.
    ///
    /// Each segment is one key, exactly as written in the source, so block names
    /// with spaces or dots work as-is.
    ///
    /// # Examples
    /// ```
    /// # use juniper_cfg::JuniperConfig;
    /// let config = JuniperConfig::from_str("interfaces {\n  ge-0/0/0 {\n    unit 0 {\n      vlan-id 10;\n    }\n  }\n}\n");
    /// let vlan = config.get_value(&["interfaces", "ge-0/0/0", "unit 0", "vlan-id"]).unwrap();
    /// assert_eq!(vlan.as_scalar(), Some("10"));
    /// ```
    ///
    /// # Errors
    /// Returns `PathNotFound` if any segment is missing or passes through a
    /// non-block value.
    pub fn get_value(&self, path: &[&str]) -> Result<&Value, JuniperError> {
        let Some((last, parents)) = path.split_last() else {
            return Err(JuniperError::PathNotFound {
                path: String::new(),
                line: 0,
                hint: Some("Use tree() or get_block(&[]) for the document root".into()),
                code: Some(304),
            });
        };

        let mut block = &self.tree;
        for segment in parents {
            block = match block.get(*segment).and_then(Value::as_block) {
                Some(child) => child,
                None => return Err(self.not_found(path)),
            };
        }
        block.get(*last).ok_or_else(|| self.not_found(path))
    }

    /// Look up a block by its key path; the empty path is the document root.
    pub fn get_block(&self, path: &[&str]) -> Result<&Block, JuniperError> {
        if path.is_empty() {
            return Ok(&self.tree);
        }
        match self.get_value(path)? {
            Value::Block(block) => Ok(block),
            other => Err(type_error(path, "block", other)),
        }
    }

    /// Get a single statement value. Flags yield `""`.
    pub fn get_scalar(&self, path: &[&str]) -> Result<&str, JuniperError> {
        match self.get_value(path)? {
            Value::Scalar(s) => Ok(s.as_str()),
            other => Err(type_error(path, "scalar", other)),
        }
    }

    /// Get every value of a statement, whether it appeared once or many times.
    pub fn get_values(&self, path: &[&str]) -> Result<Vec<String>, JuniperError> {
        match self.get_value(path)? {
            block @ Value::Block(_) => Err(type_error(path, "scalar or list", block)),
            other => Ok(other.values().into_iter().map(String::from).collect()),
        }
    }

    /// Get a statement value, or `default` if the path is missing or not a scalar.
    pub fn get_or(&self, path: &[&str], default: &str) -> String {
        self.get_scalar(path).unwrap_or(default).to_string()
    }

    /// Keys of the block at `path`, in source order.
    ///
    /// # Examples
    /// ```
    /// # use juniper_cfg::JuniperConfig;
    /// let config = JuniperConfig::from_str("system {\n  host-name r1;\n  services {\n    ssh;\n  }\n}\n");
    /// assert_eq!(config.get_keys(&["system"]).unwrap(), vec!["host-name", "services"]);
    /// ```
    pub fn get_keys(&self, path: &[&str]) -> Result<Vec<String>, JuniperError> {
        Ok(self.get_block(path)?.keys().cloned().collect())
    }

    pub fn has(&self, path: &[&str]) -> bool {
        self.get_value(path).is_ok()
    }

    fn not_found(&self, path: &[&str]) -> JuniperError {
        let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
        JuniperError::PathNotFound {
            path: path.join(" > "),
            line,
            hint: if line > 0 {
                Some(format!("Closest match: {}", snippet))
            } else {
                Some("Check that the path exists in your config file".into())
            },
            code: Some(304),
        }
    }
}

fn type_error(path: &[&str], expected: &str, found: &Value) -> JuniperError {
    JuniperError::TypeError {
        message: format!("Expected {} at '{}', got {}", expected, path.join(" > "), found.kind()),
        hint: None,
        code: Some(401),
    }
}
