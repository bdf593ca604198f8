use std::io::{Error, Write};

use proc_macro2::{Ident, TokenStream};
use prodgen_codegen::{write_enum_variants, write_preamble, ScaffoldNames, Template};
use prodgen_input::ProductionSet;
use quote::quote;

use crate::{rust_ident, PREAMBLE_TEMPLATE};

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

    /// Lookups over the enumeration: by index, by production text and by
    /// head plus right-hand symbols.
    fn write_enum_impl(&self, output: &mut dyn Write) -> Result<(), Error> {
        let enum_name = rust_ident(&self.names.enum_name)?;
        let productions = self.productions.productions();
        let variants = productions
            .iter()
            .map(|production| rust_ident(&production.symbolic_name()))
            .collect::<Result<Vec<Ident>, Error>>()?;
        let indices: Vec<usize> = productions.iter().map(|p| p.index).collect();
        let texts: Vec<String> = productions.iter().map(|p| p.to_string()).collect();
        let count = productions.len();
        let find_arms: Vec<TokenStream> = productions
            .iter()
            .zip(&variants)
            .map(|(production, variant)| {
                let lhs = production.lhs;
                let rhs: Vec<&str> = production.rhs_symbols().collect();
                quote! { (#lhs, [#(#rhs),*]) => Some(#enum_name::#variant) }
            })
            .collect();

        let tokens = quote! {
            impl #enum_name {
                pub const ALL: [#enum_name; #count] = [#(#enum_name::#variants),*];

                pub fn index(self) -> usize {
                    match self {
                        #(#enum_name::#variants => #indices,)*
                    }
                }

                pub fn text(self) -> &'static str {
                    match self {
                        #(#enum_name::#variants => #texts,)*
                    }
                }

                pub fn from_index(index: usize) -> Option<Self> {
                    Self::ALL.get(index).copied()
                }

                pub fn find(lhs: &str, rhs: &[&str]) -> Option<Self> {
                    match (lhs, rhs) {
                        #(#find_arms,)*
                        _ => None,
                    }
                }
            }
        };
        write!(output, "{}", tokens)
    }

    pub fn write_enum(&self, output: &mut dyn Write) -> Result<(), Error> {
        let mut writer = self.enum_template.writer();
        writer.substitute("preamble", |w| {
            write_preamble(PREAMBLE_TEMPLATE, self.names, w)
        });
        writer.substitute_text("enum_name", self.names.enum_name.as_str());
        writer.substitute("enum_variants", |w| {
            write_enum_variants(self.productions, "    ", w)
        });
        writer.substitute("enum_impl", |w| self.write_enum_impl(w));
        writer.write(output)
    }
}
