use std::io::{Error, Write};

use prodgen_codegen::{write_preamble, ScaffoldNames, Template};
use prodgen_input::ProductionSet;

use crate::PREAMBLE_TEMPLATE;

pub(crate) struct DispatcherCodeWriter<'gen> {
    names: &'gen ScaffoldNames,
    productions: &'gen ProductionSet<'gen>,
    dispatcher_template: Template<'static>,
}

impl<'gen> DispatcherCodeWriter<'gen> {
    pub fn new(names: &'gen ScaffoldNames, productions: &'gen ProductionSet<'gen>) -> Self {
        DispatcherCodeWriter {
            names,
            productions,
            dispatcher_template: Template::new(include_str!("dispatcher.tpl")),
        }
    }

    fn write_dispatch_branches(&self, output: &mut dyn Write) -> Result<(), Error> {
        if self.productions.is_empty() {
            return writeln!(output, "    let _ = production;");
        }
        for (i, production) in self.productions.productions().iter().enumerate() {
            let keyword = if i == 0 { "if" } else { "} else if" };
            writeln!(
                output,
                "    {} production == {}::{} {{",
                keyword,
                self.names.enum_name,
                production.symbolic_name()
            )?;
            writeln!(output, "        // {}", production)?;
        }
        writeln!(output, "    }}")
    }

    pub fn write_dispatcher(&self, output: &mut dyn Write) -> Result<(), Error> {
        let mut writer = self.dispatcher_template.writer();
        writer.substitute("preamble", |w| {
            write_preamble(PREAMBLE_TEMPLATE, self.names, w)
        });
        writer.substitute_text("enum_module", self.names.enum_module.as_str());
        writer.substitute_text("enum_name", self.names.enum_name.as_str());
        writer.substitute("dispatch_branches", |w| self.write_dispatch_branches(w));
        writer.write(output)
    }
}
