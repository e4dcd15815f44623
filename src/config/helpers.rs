use std::path::PathBuf;

use crate::JuniperError;
use crate::parser::parse_statement;

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_home(raw_path: &str) -> Result<PathBuf, JuniperError> {
    match raw_path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| JuniperError::FileError {
                message: "Could not determine home directory for ~ expansion".into(),
                path: raw_path.to_string(),
                hint: Some("Set HOME or use an absolute path".into()),
                code: Some(300),
            })?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(raw_path)),
    }
}

/// Find the source line best matching `path`.
///
/// Returns the 1-based line number and the trimmed line, or `(0, ..)` when
/// nothing matches. An exact scope match wins; otherwise the first line whose
/// key equals the last path segment is used.
pub(super) fn find_config_line(path: &[&str], raw_content: &str) -> (usize, String) {
    let mut scope: Vec<String> = Vec::new();
    let mut fallback: Option<(usize, String)> = None;
    let last = path.last().copied().unwrap_or_default();

    for (idx, line) in raw_content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let opens = trimmed.contains('{');
        let closes = trimmed.contains('}');

        let key = if opens {
            trimmed.replace(['{', '}'], "").trim().to_string()
        } else if closes {
            scope.pop();
            continue;
        } else {
            parse_statement(trimmed).0
        };

        let matches_scope = scope.len() + 1 == path.len()
            && scope.iter().zip(path.iter()).all(|(s, p)| s == p)
            && key == last;
        if matches_scope {
            return (idx + 1, trimmed.to_string());
        }
        if fallback.is_none() && key == last {
            fallback = Some((idx + 1, trimmed.to_string()));
        }

        if opens && !closes {
            scope.push(key);
        }
    }

    fallback.unwrap_or((0, "<key not found>".into()))
}
