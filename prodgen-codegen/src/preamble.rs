use std::io::{Error, ErrorKind, Write};

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::ScaffoldNames;

#[derive(Serialize)]
struct PreambleContext<'names> {
    source: &'names str,
    package: Option<&'names str>,
    enum_name: &'names str,
    dispatcher_name: &'names str,
}

/// Renders a file preamble template against the scaffold names.
///
/// The template sees `source`, `package` (may be absent), `enum_name` and
/// `dispatcher_name`.
pub fn write_preamble(
    template_source: &'static str,
    names: &ScaffoldNames,
    output: &mut dyn Write,
) -> Result<(), Error> {
    let mut template = TinyTemplate::new();
    template.set_default_formatter(&tinytemplate::format_unescaped);
    template
        .add_template("preamble", template_source)
        .map_err(|e| Error::new(ErrorKind::Other, e))?;
    let context = PreambleContext {
        source: &names.source,
        package: names.package.as_deref(),
        enum_name: &names.enum_name,
        dispatcher_name: &names.dispatcher_name,
    };
    let rendered = template
        .render("preamble", &context)
        .map_err(|e| Error::new(ErrorKind::Other, e))?;
    write!(output, "{}", rendered)
}
