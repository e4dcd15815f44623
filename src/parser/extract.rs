use tracing::{trace, warn};

use super::Line;
use crate::JuniperError;

/// One top-level piece of a line sequence.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Section<'a> {
    /// A statement line at depth 0.
    Statement(Line<'a>),
    /// A named group and the lines between its opening and closing braces.
    Block {
        name: String,
        line: usize,
        body: Vec<Line<'a>>,
    },
}

#[derive(Debug)]
struct OpenBlock<'a> {
    name: String,
    line: usize,
    body: Vec<Line<'a>>,
}

impl<'a> OpenBlock<'a> {
    fn into_section(self) -> Section<'a> {
        Section::Block {
            name: self.name,
            line: self.line,
            body: self.body,
        }
    }
}

/// Brace-depth scan state threaded through [`extract_sections`].
#[derive(Debug, Default)]
struct ScanState<'a> {
    depth: usize,
    current: Option<OpenBlock<'a>>,
    sections: Vec<Section<'a>>,
}

impl<'a> ScanState<'a> {
    fn step(mut self, line: Line<'a>, strict: bool) -> Result<Self, JuniperError> {
        let text = line.text;
        if text.trim().is_empty() {
            return Ok(self);
        }

        // Each brace kind counts at most once per line.
        let opens = text.contains('{');
        let closes = text.contains('}');

        if opens {
            self.depth += 1;
        }
        if closes {
            if self.depth == 0 {
                if strict {
                    return Err(JuniperError::UnbalancedBraces {
                        message: "'}' without a matching '{'".into(),
                        line: line.number,
                        hint: Some("Remove the extra closing brace".into()),
                        code: Some(101),
                    });
                }
                warn!(line = line.number, "ignoring '}}' without a matching '{{'");
                return Ok(self);
            }
            self.depth -= 1;
        }

        match self.current.take() {
            Some(mut open) => {
                if self.depth == 0 {
                    trace!(block = %open.name, lines = open.body.len(), "closed block");
                    self.sections.push(open.into_section());
                } else {
                    open.body.push(line);
                    self.current = Some(open);
                }
            }
            None if self.depth > 0 => {
                self.current = Some(OpenBlock {
                    name: block_name(text),
                    line: line.number,
                    body: Vec::new(),
                });
            }
            None if !closes => self.sections.push(Section::Statement(line)),
            None => {
                // `name { }` opened and closed on one line.
                self.sections.push(Section::Block {
                    name: block_name(text),
                    line: line.number,
                    body: Vec::new(),
                });
            }
        }

        Ok(self)
    }

    fn finish(mut self, strict: bool) -> Result<Vec<Section<'a>>, JuniperError> {
        if let Some(open) = self.current.take() {
            if strict {
                return Err(JuniperError::UnbalancedBraces {
                    message: format!("block '{}' is never closed", open.name),
                    line: open.line,
                    hint: Some("Add the missing '}'".into()),
                    code: Some(101),
                });
            }
            warn!(block = %open.name, line = open.line, "block left open at end of input");
            self.sections.push(open.into_section());
        }
        Ok(self.sections)
    }
}

fn block_name(text: &str) -> String {
    text.replace(['{', '}'], "").trim().to_string()
}

/// Partition `lines` into depth-0 statements and named blocks, in source order.
///
/// Blank lines are skipped. The line that opens a block names it and the line
/// that brings the depth back to zero closes it; neither is part of the body.
pub(super) fn extract_sections<'a>(
    lines: &[Line<'a>],
    strict: bool,
) -> Result<Vec<Section<'a>>, JuniperError> {
    lines
        .iter()
        .try_fold(ScanState::default(), |state, line| state.step(*line, strict))?
        .finish(strict)
}
