use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

mod listing;

pub use listing::parse_listing;

static HEAD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\S+)\s+::=\s+(.*\S)\s*$").unwrap());

static CONTINUATION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:\|(?:\s+|$))?(.*?)\s*$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("continuation line {line} appears before any production head: '{text}'")]
    UnboundContinuation { line: usize, text: String },
    #[error("continuation line {line} has no alternative after '|'")]
    EmptyAlternative { line: usize },
    #[error("line {line} is not of the form '<index> <head> ::= <alternative>'")]
    MalformedListing { line: usize },
    #[error("line {line} carries index {found}, expected {expected}")]
    UnexpectedIndex {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl InputError {
    /// 1-based line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            InputError::UnboundContinuation { line, .. }
            | InputError::EmptyAlternative { line }
            | InputError::MalformedListing { line }
            | InputError::UnexpectedIndex { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarLine<'src> {
    Head { lhs: &'src str, rhs: &'src str },
    Continuation { rhs: &'src str },
    Blank,
}

impl<'src> GrammarLine<'src> {
    pub fn classify(line: &'src str, line_number: usize) -> Result<Self, InputError> {
        if line.trim().is_empty() {
            return Ok(GrammarLine::Blank);
        }
        if let Some(captures) = HEAD_LINE.captures(line) {
            let (_, [lhs, rhs]) = captures.extract();
            return Ok(GrammarLine::Head { lhs, rhs });
        }
        // matches every non-blank line
        let captures = CONTINUATION_LINE
            .captures(line)
            .ok_or(InputError::EmptyAlternative { line: line_number })?;
        let rhs = captures.get(1).map_or("", |m| m.as_str());
        if rhs.is_empty() {
            return Err(InputError::EmptyAlternative { line: line_number });
        }
        Ok(GrammarLine::Continuation { rhs })
    }
}

/// Strips the first and last character of a head symbol, `<izraz>` becomes `izraz`.
pub fn strip_delimiters(lhs: &str) -> &str {
    let mut chars = lhs.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

pub fn symbolic_name(lhs: &str, ordinal: usize) -> String {
    format!("{}_{}", strip_delimiters(lhs), ordinal)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production<'src> {
    /// Position in the whole grammar, starting at 0.
    pub index: usize,
    pub lhs: &'src str,
    pub rhs: &'src str,
    /// Position among the alternatives of one head line, starting at 1.
    pub ordinal: usize,
    pub line: usize,
}

impl<'src> Production<'src> {
    pub fn symbolic_name(&self) -> String {
        symbolic_name(self.lhs, self.ordinal)
    }

    pub fn rhs_symbols(&self) -> impl Iterator<Item = &'src str> {
        self.rhs.split_whitespace()
    }
}

impl<'src> Display for Production<'src> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ::= {}", self.lhs, self.rhs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductionSet<'src> {
    productions: Vec<Production<'src>>,
}

impl<'src> ProductionSet<'src> {
    pub fn new(productions: Vec<Production<'src>>) -> Self {
        ProductionSet { productions }
    }

    pub fn productions(&self) -> &[Production<'src>] {
        &self.productions
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Runs of productions introduced by one head line each, in input order.
    pub fn groups(&self) -> impl Iterator<Item = &[Production<'src>]> {
        self.productions.chunk_by(|_, next| next.ordinal != 1)
    }

    /// Symbolic names that are produced more than once, in order of their second occurrence.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for production in &self.productions {
            let name = production.symbolic_name();
            if !seen.insert(name.clone()) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState<'src> {
    NoHeadYet,
    HaveHead { lhs: &'src str, ordinal: usize },
}

impl<'src> ParseState<'src> {
    /// Returns the head, alternative and ordinal of the record the line produces, if any.
    fn advance(
        &mut self,
        line: GrammarLine<'src>,
        line_number: usize,
        text: &str,
    ) -> Result<Option<(&'src str, &'src str, usize)>, InputError> {
        match line {
            GrammarLine::Blank => {
                debug!("skipping blank line {}", line_number);
                Ok(None)
            }
            GrammarLine::Head { lhs, rhs } => {
                debug!("line {}: new head {}", line_number, lhs);
                *self = ParseState::HaveHead { lhs, ordinal: 1 };
                Ok(Some((lhs, rhs, 1)))
            }
            GrammarLine::Continuation { rhs } => match self {
                ParseState::NoHeadYet => Err(InputError::UnboundContinuation {
                    line: line_number,
                    text: text.trim().to_string(),
                }),
                ParseState::HaveHead { lhs, ordinal } => {
                    *ordinal += 1;
                    Ok(Some((*lhs, rhs, *ordinal)))
                }
            },
        }
    }
}

pub fn parse_grammar(source: &str) -> Result<ProductionSet<'_>, InputError> {
    let mut state = ParseState::NoHeadYet;
    let mut productions = Vec::new();
    for (i, text) in source.lines().enumerate() {
        let line_number = i + 1;
        let line = GrammarLine::classify(text, line_number)?;
        if let Some((lhs, rhs, ordinal)) = state.advance(line, line_number, text)? {
            productions.push(Production {
                index: productions.len(),
                lhs,
                rhs,
                ordinal,
                line: line_number,
            });
        }
    }
    Ok(ProductionSet::new(productions))
}
