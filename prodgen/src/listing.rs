use std::io::{Error, Write};

use prodgen_input::ProductionSet;

/// Writes one `<index> <head> ::= <alternative>` line per production.
pub fn write_listing(productions: &ProductionSet, output: &mut dyn Write) -> Result<(), Error> {
    for production in productions.productions() {
        writeln!(output, "{} {}", production.index, production)?;
    }
    Ok(())
}
