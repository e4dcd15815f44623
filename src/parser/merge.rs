use tracing::warn;

use super::ParseOptions;
use crate::ast::{Block, Value};
use crate::JuniperError;

/// Insert `incoming` under `key`, folding repeated keys together.
///
/// - a new key is stored as given;
/// - statement values (scalar or list) on an existing scalar or list are
///   appended, turning the slot into a [`Value::List`];
/// - a block on an existing block is merged entry by entry with these same rules.
///
/// A block meeting a statement value (either way round) is a conflict: strict
/// mode reports [`JuniperError::ConflictingValue`], permissive mode lets the
/// later value replace the earlier one in place.
pub fn merge_value(
    block: &mut Block,
    key: &str,
    incoming: Value,
    options: &ParseOptions,
) -> Result<(), JuniperError> {
    let Some(existing) = block.get_mut(key) else {
        block.insert(key.to_string(), incoming);
        return Ok(());
    };

    match incoming {
        Value::Block(theirs) => {
            if let Value::Block(ours) = existing {
                for (k, v) in theirs {
                    merge_value(ours, &k, v, options)?;
                }
                Ok(())
            } else {
                replace_conflicting(existing, key, Value::Block(theirs), options)
            }
        }
        Value::Scalar(s) => push_values(existing, key, vec![s], options),
        Value::List(items) => push_values(existing, key, items, options),
    }
}

fn push_values(
    slot: &mut Value,
    key: &str,
    mut values: Vec<String>,
    options: &ParseOptions,
) -> Result<(), JuniperError> {
    match slot {
        Value::Scalar(old) => {
            let mut items = vec![std::mem::take(old)];
            items.append(&mut values);
            *slot = Value::List(items);
        }
        Value::List(items) => items.append(&mut values),
        Value::Block(_) => {
            let incoming = if values.len() == 1 {
                Value::Scalar(values.remove(0))
            } else {
                Value::List(values)
            };
            return replace_conflicting(slot, key, incoming, options);
        }
    }
    Ok(())
}

fn replace_conflicting(
    slot: &mut Value,
    key: &str,
    incoming: Value,
    options: &ParseOptions,
) -> Result<(), JuniperError> {
    if options.strict {
        return Err(JuniperError::ConflictingValue {
            key: key.to_string(),
            existing: slot.kind(),
            incoming: incoming.kind(),
            hint: Some("A key cannot be both a block and a statement at the same level".into()),
            code: Some(103),
        });
    }

    warn!(
        key,
        existing = slot.kind(),
        incoming = incoming.kind(),
        "conflicting values for key, keeping the later one"
    );
    *slot = incoming;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> Value {
        Value::Scalar(s.to_string())
    }

    fn list(items: &[&str]) -> Value {
        Value::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_new_key_is_stored_directly() {
        let mut block = Block::new();
        merge_value(&mut block, "mtu", scalar("9192"), &ParseOptions::default()).unwrap();
        assert_eq!(block["mtu"], scalar("9192"));
    }

    #[test]
    fn test_scalar_then_scalar_becomes_list() {
        let opts = ParseOptions::default();
        let mut block = Block::new();
        merge_value(&mut block, "member", scalar("ge-0/0/0"), &opts).unwrap();
        merge_value(&mut block, "member", scalar("ge-0/0/1"), &opts).unwrap();
        merge_value(&mut block, "member", scalar("ge-0/0/2"), &opts).unwrap();
        assert_eq!(block["member"], list(&["ge-0/0/0", "ge-0/0/1", "ge-0/0/2"]));
    }

    #[test]
    fn test_list_onto_scalar_extends_in_order() {
        let opts = ParseOptions::default();
        let mut block = Block::new();
        merge_value(&mut block, "k", scalar("a"), &opts).unwrap();
        merge_value(&mut block, "k", list(&["b", "c"]), &opts).unwrap();
        assert_eq!(block["k"], list(&["a", "b", "c"]));
    }

    #[test]
    fn test_repeated_block_merges_bodies() {
        let opts = ParseOptions::default();
        let mut first = Block::new();
        first.insert("unit".into(), scalar("0"));
        first.insert("mtu".into(), scalar("1500"));
        let mut second = Block::new();
        second.insert("unit".into(), scalar("1"));
        second.insert("description".into(), scalar("uplink"));

        let mut block = Block::new();
        merge_value(&mut block, "ge-0/0/0", Value::Block(first), &opts).unwrap();
        merge_value(&mut block, "ge-0/0/0", Value::Block(second), &opts).unwrap();

        let merged = block["ge-0/0/0"].as_block().unwrap();
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["unit", "mtu", "description"]);
        assert_eq!(merged["unit"], list(&["0", "1"]));
    }

    #[test]
    fn test_conflict_permissive_keeps_later_in_place() {
        let opts = ParseOptions::default();
        let mut block = Block::new();
        merge_value(&mut block, "a", scalar("1"), &opts).unwrap();
        merge_value(&mut block, "ssh", scalar(""), &opts).unwrap();
        merge_value(&mut block, "ssh", Value::Block(Block::new()), &opts).unwrap();

        assert_eq!(block.get_index_of("ssh"), Some(1));
        assert_eq!(block["ssh"], Value::Block(Block::new()));
        assert_eq!(block["a"], scalar("1"));
    }

    #[test]
    fn test_conflict_strict_is_reported() {
        let opts = ParseOptions { strict: true, ..ParseOptions::default() };
        let mut block = Block::new();
        merge_value(&mut block, "ssh", Value::Block(Block::new()), &opts).unwrap();
        let err = merge_value(&mut block, "ssh", scalar(""), &opts).unwrap_err();

        match err {
            JuniperError::ConflictingValue { key, existing, incoming, .. } => {
                assert_eq!(key, "ssh");
                assert_eq!(existing, "block");
                assert_eq!(incoming, "scalar");
            }
            other => panic!("Expected ConflictingValue, got {:?}", other),
        }
    }
}
