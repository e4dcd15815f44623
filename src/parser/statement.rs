/// Split one statement line into its key and value.
///
/// The key is everything up to the first run of whitespace, the value is the
/// rest with one trailing `;` removed. A line with no value is a flag
/// statement and yields an empty value. Never fails: an empty line yields an
/// empty key.
///
/// ```
/// use juniper_cfg::parser::parse_statement;
///
/// assert_eq!(parse_statement("  instance-type vrf;"), ("instance-type".into(), "vrf".into()));
/// assert_eq!(parse_statement("vlan-tagging;"), ("vlan-tagging".into(), String::new()));
/// ```
pub fn parse_statement(line: &str) -> (String, String) {
    let trimmed = line.trim();

    match trimmed.split_once(char::is_whitespace) {
        Some((key, rest)) => {
            let rest = rest.trim();
            let value = rest.strip_suffix(';').unwrap_or(rest);
            (key.trim().to_string(), value.trim().to_string())
        }
        None => {
            let key = trimmed.strip_suffix(';').unwrap_or(trimmed);
            (key.to_string(), String::new())
        }
    }
}

pub(super) fn is_terminated(line: &str) -> bool {
    line.trim_end().ends_with(';')
}
