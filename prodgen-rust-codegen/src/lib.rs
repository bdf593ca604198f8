use std::io::{Error, ErrorKind};

use proc_macro2::{Ident, TokenStream, TokenTree};
use prodgen_codegen::{
    GeneratedCodeWriter, ScaffoldCodeGen, ScaffoldNames, ARTIFACT_DISPATCHER, ARTIFACT_ENUM,
};
use prodgen_input::ProductionSet;

mod dispatcher;
mod enums;

const PREAMBLE_TEMPLATE: &str = include_str!("preamble.tpl");

pub struct RustScaffoldCodeGen {
    names: ScaffoldNames,
}

impl RustScaffoldCodeGen {
    pub fn new(names: ScaffoldNames) -> Self {
        RustScaffoldCodeGen { names }
    }
}

impl ScaffoldCodeGen for RustScaffoldCodeGen {
    fn validate(&self, productions: &ProductionSet) -> Result<(), Error> {
        rust_ident(&self.names.enum_name)?;
        rust_ident(&self.names.enum_module)?;
        for production in productions.productions() {
            rust_ident(&production.symbolic_name())?;
        }
        Ok(())
    }

    fn generate_enum(
        &self,
        productions: &ProductionSet,
        gen: &mut GeneratedCodeWriter,
    ) -> Result<(), Error> {
        let code_writer = enums::EnumCodeWriter::new(&self.names, productions);
        gen.generate_code(ARTIFACT_ENUM, |output| code_writer.write_enum(output))
    }

    fn generate_dispatcher(
        &self,
        productions: &ProductionSet,
        gen: &mut GeneratedCodeWriter,
    ) -> Result<(), Error> {
        let code_writer = dispatcher::DispatcherCodeWriter::new(&self.names, productions);
        gen.generate_code(ARTIFACT_DISPATCHER, |output| {
            code_writer.write_dispatcher(output)
        })
    }
}

/// Parses `name` as exactly one Rust identifier.
fn rust_ident(name: &str) -> Result<Ident, Error> {
    let invalid = || {
        Error::new(
            ErrorKind::InvalidData,
            format!("'{}' is not a valid Rust identifier", name),
        )
    };
    let tokens: TokenStream = name.parse().map_err(|_| invalid())?;
    let mut tokens = tokens.into_iter();
    match (tokens.next(), tokens.next()) {
        (Some(TokenTree::Ident(ident)), None) => Ok(ident),
        _ => Err(invalid()),
    }
}
