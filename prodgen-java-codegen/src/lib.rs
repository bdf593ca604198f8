use std::io::Error;

use prodgen_codegen::{
    GeneratedCodeWriter, ScaffoldCodeGen, ScaffoldNames, ARTIFACT_DISPATCHER, ARTIFACT_ENUM,
};
use prodgen_input::ProductionSet;

mod dispatcher;
mod enums;

const PREAMBLE_TEMPLATE: &str = include_str!("preamble.tpl");

pub struct JavaScaffoldCodeGen {
    names: ScaffoldNames,
}

impl JavaScaffoldCodeGen {
    pub fn new(names: ScaffoldNames) -> Self {
        JavaScaffoldCodeGen { names }
    }
}

impl ScaffoldCodeGen for JavaScaffoldCodeGen {
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

#[cfg(test)]
mod tests;
