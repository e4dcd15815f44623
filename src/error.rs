use std::fmt;

/// The main error type for strict parsing, lookups and file loading.
///
/// Permissive parsing (`parse`) never produces one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum JuniperError {
    /// A `}` without a matching `{`, or a block left open at end of input.
    UnbalancedBraces {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A statement line that does not end in `;`.
    MissingTerminator {
        statement: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// One key holding a block in one place and a statement value in another.
    ConflictingValue {
        key: String,
        existing: &'static str,
        incoming: &'static str,
        hint: Option<String>,
        code: Option<u32>,
    },
    NestingTooDeep {
        block: String,
        depth: usize,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    PathNotFound {
        path: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    JsonError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for JuniperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JuniperError::UnbalancedBraces { message, line, hint, code } =>
                write!(f, "[JUNIPER] Unbalanced braces at line {}: {}{}",
                    line, message, suffix(hint, code)),
            JuniperError::MissingTerminator { statement, line, hint, code } =>
                write!(f, "[JUNIPER] Missing ';' at line {}: '{}'{}",
                    line, statement, suffix(hint, code)),
            JuniperError::ConflictingValue { key, existing, incoming, hint, code } =>
                write!(f, "[JUNIPER] Key '{}' is a {} here but a {} earlier{}",
                    key, incoming, existing, suffix(hint, code)),
            JuniperError::NestingTooDeep { block, depth, line, hint, code } =>
                write!(f, "[JUNIPER] Block '{}' at line {} exceeds nesting depth {}{}",
                    block, line, depth, suffix(hint, code)),
            JuniperError::PathNotFound { path, line, hint, code } => {
                if *line > 0 {
                    write!(f, "[JUNIPER] Path '{}' not resolvable (closest match on line {}){}",
                        path, line, suffix(hint, code))
                } else {
                    write!(f, "[JUNIPER] Path '{}' not found{}", path, suffix(hint, code))
                }
            }
            JuniperError::TypeError { message, hint, code } =>
                write!(f, "[JUNIPER] Type Error: {}{}", message, suffix(hint, code)),
            JuniperError::FileError { message, path, hint, code } =>
                write!(f, "[JUNIPER] File Error '{}': {}{}", path, message, suffix(hint, code)),
            JuniperError::JsonError { message, hint, code } =>
                write!(f, "[JUNIPER] JSON Error: {}{}", message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for JuniperError {}

impl JuniperError {
    /// Numeric code attached to the error, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            JuniperError::UnbalancedBraces { code, .. }
            | JuniperError::MissingTerminator { code, .. }
            | JuniperError::ConflictingValue { code, .. }
            | JuniperError::NestingTooDeep { code, .. }
            | JuniperError::PathNotFound { code, .. }
            | JuniperError::TypeError { code, .. }
            | JuniperError::FileError { code, .. }
            | JuniperError::JsonError { code, .. } => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_hint_and_code() {
        let err = JuniperError::MissingTerminator {
            statement: "host-name r1".into(),
            line: 3,
            hint: Some("End statements with ';'".into()),
            code: Some(102),
        };
        let text = err.to_string();
        assert!(text.starts_with("[JUNIPER] Missing ';' at line 3"));
        assert!(text.contains("Hint: End statements with ';'"));
        assert!(text.ends_with("Code: 102"));
        assert_eq!(err.code(), Some(102));
    }
}
