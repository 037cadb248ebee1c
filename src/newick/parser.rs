use log::debug;

use crate::data_structs::typedef::{TaxonLabel, ROOT_LABEL};
use crate::data_structs::PhyloTree;
use crate::error::ParseError;

/// Characters that terminate a label.
const LABEL_DELIMITERS: &[u8] = b"()[],:; \t\r\n";

/// Node of the raw syntax tree, before labels are checked and the graph
/// is assembled.
struct RawClade {
    label:    Option<String>,
    children: Vec<RawClade>,
}

/// Single-use recursive-descent parser over one Newick string.
///
/// The input must start at the outermost `(`. Branch lengths and `[...]`
/// comment blocks are consumed but dropped; the resulting [PhyloTree]
/// records topology and labels only.
pub(crate) struct NewickParser<'a> {
    bytes: &'a [u8],
    pos:   usize,
}

impl<'a> NewickParser<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos:   0,
        }
    }

    pub(crate) fn parse(mut self) -> Result<PhyloTree, ParseError> {
        self.skip_trivia()?;
        match self.peek() {
            Some(b'(') => {},
            Some(found) => {
                return Err(ParseError::UnexpectedChar {
                    found:    found as char,
                    offset:   self.pos,
                    expected: "'(' starting a tree",
                })
            },
            None => {
                return Err(ParseError::UnexpectedEof {
                    expected: "'(' starting a tree",
                })
            },
        }

        let outermost = self.parse_clade()?;

        self.skip_trivia()?;
        self.consume_if(b';');
        self.skip_trivia()?;
        if self.pos < self.bytes.len() {
            return Err(ParseError::TrailingInput { offset: self.pos });
        }

        build_tree(outermost)
    }

    // ------------------------------------------------------------------
    // Grammar
    // ------------------------------------------------------------------

    fn parse_node(&mut self) -> Result<RawClade, ParseError> {
        self.skip_trivia()?;
        if self.peek() == Some(b'(') {
            self.parse_clade()
        }
        else {
            self.parse_leaf()
        }
    }

    /// `(` node (`,` node)* `)` optional-label, branch length dropped.
    fn parse_clade(&mut self) -> Result<RawClade, ParseError> {
        self.pos += 1; // opening parenthesis, checked by the caller
        self.skip_trivia()?;
        if self.peek() == Some(b')') {
            return Err(ParseError::EmptyChildList { offset: self.pos });
        }

        let mut children = vec![self.parse_node()?];
        loop {
            self.skip_trivia()?;
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    children.push(self.parse_node()?);
                },
                Some(b')') => {
                    self.pos += 1;
                    break;
                },
                Some(found) => {
                    return Err(ParseError::UnexpectedChar {
                        found:    found as char,
                        offset:   self.pos,
                        expected: "',' or ')'",
                    })
                },
                None => {
                    return Err(ParseError::UnexpectedEof {
                        expected: "',' or ')'",
                    })
                },
            }
        }

        self.skip_trivia()?;
        let label = self.take_label();
        self.skip_branch_length()?;

        Ok(RawClade {
            label:    (!label.is_empty()).then_some(label),
            children,
        })
    }

    /// A bare label, branch length dropped.
    fn parse_leaf(&mut self) -> Result<RawClade, ParseError> {
        let offset = self.pos;
        let label = self.take_label();
        if label.is_empty() {
            return Err(ParseError::MissingLabel { offset });
        }
        self.skip_branch_length()?;
        Ok(RawClade {
            label:    Some(label),
            children: Vec::new(),
        })
    }

    // ------------------------------------------------------------------
    // Lexing
    // ------------------------------------------------------------------

    fn peek(&self) -> Option<u8> { self.bytes.get(self.pos).copied() }

    fn consume_if(
        &mut self,
        expected: u8,
    ) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        }
        else {
            false
        }
    }

    /// Skips whitespace and `[...]` comment blocks.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                Some(byte) if byte.is_ascii_whitespace() => self.pos += 1,
                Some(b'[') => {
                    let offset = self.pos;
                    while self.peek() != Some(b']') {
                        if self.pos >= self.bytes.len() {
                            return Err(ParseError::UnterminatedComment {
                                offset,
                            });
                        }
                        self.pos += 1;
                    }
                    self.pos += 1;
                },
                _ => return Ok(()),
            }
        }
    }

    fn take_label(&mut self) -> String {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if LABEL_DELIMITERS.contains(&byte) {
                break;
            }
            self.pos += 1;
        }
        String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned()
    }

    /// Consumes an optional `:number`, dropping the value.
    fn skip_branch_length(&mut self) -> Result<(), ParseError> {
        self.skip_trivia()?;
        if !self.consume_if(b':') {
            return Ok(());
        }
        self.skip_trivia()?;
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if byte.is_ascii_digit()
                || matches!(byte, b'.' | b'-' | b'+' | b'e' | b'E')
            {
                self.pos += 1;
            }
            else {
                break;
            }
        }
        if self.pos == start {
            return Err(ParseError::MalformedBranchLength { offset: start });
        }
        Ok(())
    }
}

/// Assembles the checked tree from the raw syntax tree.
///
/// The outermost node is relabeled to the reserved root identifier; any
/// label it carried in the text is discarded. Unlabeled internal nodes
/// receive a synthesized unique label.
fn build_tree(outermost: RawClade) -> Result<PhyloTree, ParseError> {
    let mut tree = PhyloTree::new(ROOT_LABEL);
    let mut synthesized = 0usize;

    // Children are pushed in reverse so the depth-first walk inserts
    // nodes in their original text order.
    let mut stack: Vec<(TaxonLabel, RawClade)> = Vec::new();
    for child in outermost.children.into_iter().rev() {
        stack.push((ROOT_LABEL, child));
    }

    while let Some((parent, clade)) = stack.pop() {
        let label: TaxonLabel = match clade.label {
            Some(label) => label.into(),
            None => {
                synthesized += 1;
                uuid::Uuid::new_v4().to_string().into()
            },
        };
        tree.add_child(parent.as_str(), label.clone())
            .ok_or_else(|| ParseError::DuplicateLabel(label.clone()))?;
        for child in clade.children.into_iter().rev() {
            stack.push((label.clone(), child));
        }
    }

    debug!(
        "parsed newick tree: {} nodes, {} leaves, {} synthesized labels",
        tree.len(),
        tree.leaves().count(),
        synthesized
    );
    Ok(tree)
}
