use std::{
    collections::HashMap,
    io::{Error, Write},
};

use log::debug;
use prodgen_input::ProductionSet;

mod preamble;
mod templating;

pub use preamble::write_preamble;
pub use templating::Template;
pub use templating::TemplateWriter;

/// Flat listing of indexed productions.
pub const ARTIFACT_LISTING: &str = "listing";
/// Enumeration with one symbolic name per production.
pub const ARTIFACT_ENUM: &str = "enum";
/// Dispatcher skeleton over the enumeration.
pub const ARTIFACT_DISPATCHER: &str = "dispatcher";

type DefaultWriterFun<'writer> =
    Box<dyn (Fn(&'static str) -> Result<Box<dyn Write + 'writer>, Error>) + 'writer>;

/// Routes generated artifacts to their outputs by artifact key.
///
/// Keys registered with [`add_target`](Self::add_target) are written to the
/// given writer, every other key goes through the default writer function.
pub struct GeneratedCodeWriter<'writer> {
    targets: HashMap<&'static str, &'writer mut dyn Write>,
    default_writer_fun: DefaultWriterFun<'writer>,
}

impl<'writer> GeneratedCodeWriter<'writer> {
    pub fn new() -> Self {
        GeneratedCodeWriter::with_default(|_| Ok(std::io::sink()))
    }

    pub fn with_default<F, W>(writer_fun: F) -> Self
    where
        W: Write + 'writer,
        F: (Fn(&'static str) -> Result<W, Error>) + 'writer,
    {
        GeneratedCodeWriter {
            targets: HashMap::new(),
            default_writer_fun: Box::new(move |key| {
                let writer = writer_fun(key)?;
                Ok(Box::new(writer) as Box<dyn Write + 'writer>)
            }),
        }
    }

    pub fn add_target<W>(&mut self, key: &'static str, writer: &'writer mut W)
    where
        W: Write,
    {
        self.targets.insert(key, writer);
    }

    pub fn generate_code<G>(&mut self, key: &'static str, code_generator: G) -> Result<(), Error>
    where
        G: FnOnce(&mut dyn Write) -> Result<(), Error>,
    {
        debug!("generating artifact '{}'", key);
        if let Some(writer) = self.targets.get_mut(key) {
            code_generator(&mut **writer)?;
            writer.flush()
        } else {
            let mut sink = (self.default_writer_fun)(key)?;
            code_generator(&mut sink)?;
            sink.flush()
        }
    }
}

impl<'writer> Default for GeneratedCodeWriter<'writer> {
    fn default() -> Self {
        Self::new()
    }
}

/// Names the generated code refers to, shared by all backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldNames {
    /// Grammar file the scaffold was generated from, mentioned in the preamble.
    pub source: String,
    pub package: Option<String>,
    pub enum_name: String,
    /// Module (file stem) the enumeration lives in.
    pub enum_module: String,
    pub dispatcher_name: String,
}

pub trait ScaffoldCodeGen {
    /// Checks that the productions can be expressed in the target language
    /// before any artifact is written.
    fn validate(&self, _productions: &ProductionSet) -> Result<(), Error> {
        Ok(())
    }

    fn generate_enum(
        &self,
        productions: &ProductionSet,
        gen: &mut GeneratedCodeWriter,
    ) -> Result<(), Error>;

    fn generate_dispatcher(
        &self,
        productions: &ProductionSet,
        gen: &mut GeneratedCodeWriter,
    ) -> Result<(), Error>;
}

/// Writes one `name, // production` entry per production, each run of a head
/// preceded by a blank line and a `// <head>` marker.
pub fn write_enum_variants(
    productions: &ProductionSet,
    indent: &str,
    output: &mut dyn Write,
) -> Result<(), Error> {
    for group in productions.groups() {
        writeln!(output)?;
        writeln!(output, "{}// {}", indent, group[0].lhs)?;
        for production in group {
            writeln!(
                output,
                "{}{}, // {}",
                indent,
                production.symbolic_name(),
                production
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
