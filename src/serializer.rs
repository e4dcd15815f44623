use tracing::debug;

use crate::ast::{Block, Value};

const INDENT: &str = "  ";

/// Render a document root as configuration text.
///
/// The root has no enclosing braces; an empty tree renders as `""`.
///
/// ```
/// use juniper_cfg::{parse, serialize};
///
/// let text = "system {\n  host-name r1;\n}\n";
/// assert_eq!(serialize(&parse(text)), text);
/// ```
pub fn serialize(tree: &Block) -> String {
    debug!(entries = tree.len(), "serializing configuration");
    serialize_block(tree, None, 0)
}

/// Render `block` at `indent_level` (two spaces per level).
///
/// With a `name`, the output is wrapped in `name {` / `}` lines at
/// `indent_level` and the entries are indented one level further.
pub fn serialize_block(block: &Block, name: Option<&str>, indent_level: usize) -> String {
    let mut out = String::new();
    write_block(&mut out, block, name, indent_level);
    out
}

fn write_block(out: &mut String, block: &Block, name: Option<&str>, level: usize) {
    let level = match name {
        Some(name) => {
            push_line(out, level, &format!("{} {{", name));
            level + 1
        }
        None => level,
    };

    for (key, value) in block {
        match value {
            Value::Scalar(v) if v.is_empty() => push_line(out, level, &format!("{};", key)),
            Value::Scalar(v) => push_line(out, level, &format!("{} {};", key, v)),
            Value::List(values) => {
                for v in values {
                    push_line(out, level, &format!("{} {};", key, v));
                }
            }
            Value::Block(child) => write_block(out, child, Some(key.as_str()), level),
        }
    }

    if name.is_some() {
        push_line(out, level - 1, "}");
    }
}

fn push_line(out: &mut String, level: usize, text: &str) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_and_scalar() {
        let mut tree = Block::new();
        tree.insert("vlan-tagging".into(), Value::Scalar(String::new()));
        tree.insert("instance-type".into(), Value::Scalar("vrf".into()));
        assert_eq!(serialize(&tree), "vlan-tagging;\ninstance-type vrf;\n");
    }

    #[test]
    fn test_list_emits_one_line_per_value() {
        let mut tree = Block::new();
        tree.insert(
            "member".into(),
            Value::List(vec!["ge-0/0/0".into(), "ge-0/0/1".into(), String::new()]),
        );
        assert_eq!(serialize(&tree), "member ge-0/0/0;\nmember ge-0/0/1;\nmember ;\n");
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(serialize(&Block::new()), "");
    }

    #[test]
    fn test_two_level_indentation() {
        let mut unit = Block::new();
        unit.insert("unit".into(), Value::Scalar("0".into()));
        unit.insert("mtu".into(), Value::Scalar("9192".into()));
        let mut ifaces = Block::new();
        ifaces.insert("ge-0/0/0".into(), Value::Block(unit));
        let mut tree = Block::new();
        tree.insert("interfaces".into(), Value::Block(ifaces));

        let expected = "\
interfaces {
  ge-0/0/0 {
    unit 0;
    mtu 9192;
  }
}
";
        assert_eq!(serialize(&tree), expected);
    }

    #[test]
    fn test_named_block_at_indent_level() {
        let mut body = Block::new();
        body.insert("ssh".into(), Value::Scalar(String::new()));
        assert_eq!(
            serialize_block(&body, Some("services"), 1),
            "  services {\n    ssh;\n  }\n"
        );
        assert_eq!(serialize_block(&body, None, 2), "    ssh;\n");
    }

    #[test]
    fn test_empty_named_block() {
        let mut tree = Block::new();
        tree.insert("groups".into(), Value::Block(Block::new()));
        assert_eq!(serialize(&tree), "groups {\n}\n");
    }
}
