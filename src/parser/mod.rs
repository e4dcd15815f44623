use tracing::{debug, trace, warn};

use crate::ast::{Block, Value};
use crate::JuniperError;

mod extract;
mod merge;
mod statement;

pub use merge::merge_value;
pub use statement::parse_statement;

use extract::Section;

/// Default cap on block nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for [`Parser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Report malformed input as errors instead of recovering.
    pub strict: bool,
    /// Blocks nested deeper than this are not descended into.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// A source line and its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

pub struct Parser {
    options: ParseOptions,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a whole document into its root block.
    pub fn parse_document(&self, text: &str) -> Result<Block, JuniperError> {
        let lines = strip_comments(text);
        debug!(
            lines = lines.len(),
            strict = self.options.strict,
            "parsing configuration"
        );
        self.build_block(&lines, 0)
    }

    fn build_block(&self, lines: &[Line<'_>], depth: usize) -> Result<Block, JuniperError> {
        let has_braces = lines
            .iter()
            .any(|l| l.text.contains('{') || l.text.contains('}'));
        if !has_braces {
            return self.build_flat(lines);
        }

        let mut block = Block::new();
        for section in extract::extract_sections(lines, self.options.strict)? {
            match section {
                Section::Statement(line) => self.insert_statement(&mut block, line)?,
                Section::Block { name, line, body } => {
                    let child = if depth + 1 > self.options.max_depth {
                        self.flatten_too_deep(&name, line, &body)?
                    } else {
                        trace!(block = %name, depth = depth + 1, "descending");
                        self.build_block(&body, depth + 1)?
                    };
                    merge_value(&mut block, &name, Value::Block(child), &self.options)?;
                }
            }
        }
        Ok(block)
    }

    fn build_flat(&self, lines: &[Line<'_>]) -> Result<Block, JuniperError> {
        let mut block = Block::new();
        for line in lines.iter().filter(|l| !l.text.trim().is_empty()) {
            self.insert_statement(&mut block, *line)?;
        }
        Ok(block)
    }

    fn flatten_too_deep(
        &self,
        name: &str,
        line: usize,
        body: &[Line<'_>],
    ) -> Result<Block, JuniperError> {
        if self.options.strict {
            return Err(JuniperError::NestingTooDeep {
                block: name.to_string(),
                depth: self.options.max_depth,
                line,
                hint: Some("Raise ParseOptions::max_depth if this nesting is intended".into()),
                code: Some(104),
            });
        }

        warn!(
            block = name,
            line,
            max_depth = self.options.max_depth,
            "nesting too deep, flattening block body"
        );
        let statements: Vec<Line<'_>> = body
            .iter()
            .filter(|l| !l.text.contains('{') && !l.text.contains('}'))
            .copied()
            .collect();
        self.build_flat(&statements)
    }

    fn insert_statement(&self, block: &mut Block, line: Line<'_>) -> Result<(), JuniperError> {
        if self.options.strict && !statement::is_terminated(line.text) {
            return Err(JuniperError::MissingTerminator {
                statement: line.text.trim().to_string(),
                line: line.number,
                hint: Some("End statements with ';'".into()),
                code: Some(102),
            });
        }

        let (key, value) = parse_statement(line.text);
        merge_value(block, &key, Value::Scalar(value), &self.options)
    }
}

/// Split `text` into numbered lines, dropping full-line `#` comments.
fn strip_comments(text: &str) -> Vec<Line<'_>> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim_start().starts_with('#'))
        .map(|(i, text)| Line { number: i + 1, text })
        .collect()
}

/// Parse configuration text into a tree, recovering from malformed input.
///
/// ```
/// use juniper_cfg::{parse, Value};
///
/// let tree = parse("interfaces {\n  ge-0/0/0 {\n    unit 0;\n  }\n}\n");
/// let iface = tree["interfaces"].as_block().unwrap()["ge-0/0/0"].as_block().unwrap();
/// assert_eq!(iface["unit"], Value::Scalar("0".into()));
/// ```
pub fn parse(text: &str) -> Block {
    // Permissive parsing has no error paths; fall back to an empty tree regardless.
    Parser::new().parse_document(text).unwrap_or_else(|e| {
        warn!(error = %e, "permissive parse reported an error");
        Block::new()
    })
}

/// Parse configuration text with explicit options.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Block, JuniperError> {
    Parser::with_options(options.clone()).parse_document(text)
}
