use std::io::{Error, Write};

use prodgen_codegen::{write_enum_variants, write_preamble, ScaffoldNames, Template};
use prodgen_input::ProductionSet;

use crate::PREAMBLE_TEMPLATE;

pub(crate) struct EnumCodeWriter<'gen> {
    names: &'gen ScaffoldNames,
    productions: &'gen ProductionSet<'gen>,
    enum_template: Template<'static>,
}

impl<'gen> EnumCodeWriter<'gen> {
    pub fn new(names: &'gen ScaffoldNames, productions: &'gen ProductionSet<'gen>) -> Self {
        EnumCodeWriter {
            names,
            productions,
            enum_template: Template::new(include_str!("enum.tpl")),
        }
    }

    pub fn write_enum(&self, output: &mut dyn Write) -> Result<(), Error> {
        let mut writer = self.enum_template.writer();
        writer.substitute("preamble", |w| {
            write_preamble(PREAMBLE_TEMPLATE, self.names, w)
        });
        writer.substitute_text("enum_name", self.names.enum_name.as_str());
        writer.substitute("enum_variants", |w| {
            write_enum_variants(self.productions, "", w)
        });
        writer.write(output)
    }
}
