use once_cell::sync::Lazy;
use regex::Regex;

use crate::{InputError, Production, ProductionSet};

static LISTING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+) (\S+) ::= (.+)$").unwrap());

/// Reads back a listing of `<index> <head> ::= <alternative>` lines.
///
/// The listing does not record where head lines started, so ordinals restart
/// whenever the head differs from the previous line's head.
pub fn parse_listing(source: &str) -> Result<ProductionSet<'_>, InputError> {
    let mut productions: Vec<Production> = Vec::new();
    for (i, text) in source.lines().enumerate() {
        let line = i + 1;
        if text.trim().is_empty() {
            continue;
        }
        let captures = LISTING_LINE
            .captures(text)
            .ok_or(InputError::MalformedListing { line })?;
        let (_, [index, lhs, rhs]) = captures.extract();
        let found = index
            .parse::<usize>()
            .map_err(|_| InputError::MalformedListing { line })?;
        let expected = productions.len();
        if found != expected {
            return Err(InputError::UnexpectedIndex {
                line,
                expected,
                found,
            });
        }
        let ordinal = match productions.last() {
            Some(previous) if previous.lhs == lhs => previous.ordinal + 1,
            _ => 1,
        };
        productions.push(Production {
            index: found,
            lhs,
            rhs,
            ordinal,
            line,
        });
    }
    Ok(ProductionSet::new(productions))
}
