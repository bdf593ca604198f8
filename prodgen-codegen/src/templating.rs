use std::{
    collections::HashMap,
    io::{Error, ErrorKind, Write},
};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SUBSTITUTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*\{(.*?)\}\*/").unwrap());

/// Source text with `/*{ key }*/` markers. Markers are valid comments in the
/// generated languages, so templates stay readable as Java or Rust files.
pub struct Template<'src> {
    source: &'src str,
}

impl<'src> Template<'src> {
    pub fn new(source: &'src str) -> Self {
        Template { source }
    }

    pub fn writer<'writer>(&self) -> TemplateWriter<'writer, 'src> {
        TemplateWriter {
            template: self.source,
            substitutions: HashMap::new(),
        }
    }

    /// Keys of all markers in order of appearance.
    pub fn keys(&self) -> Vec<&'src str> {
        SUBSTITUTION_MARKER
            .captures_iter(self.source)
            .filter_map(|captures| captures.get(1))
            .map(|key| key.as_str().trim())
            .collect()
    }
}

type Substitution<'writer> = Box<dyn Fn(&mut dyn Write) -> Result<(), Error> + 'writer>;

pub struct TemplateWriter<'writer, 'template> {
    template: &'template str,
    substitutions: HashMap<&'static str, Substitution<'writer>>,
}

impl<'writer, 'template> TemplateWriter<'writer, 'template> {
    pub fn substitute<F>(&mut self, key: &'static str, writer: F)
    where
        F: Fn(&mut dyn Write) -> Result<(), Error> + 'writer,
    {
        self.substitutions.insert(key, Box::new(writer));
    }

    /// Substitutes a fixed piece of text.
    pub fn substitute_text(&mut self, key: &'static str, text: impl Into<String>) {
        let text = text.into();
        self.substitute(key, move |w| write!(w, "{}", text));
    }

    fn insert_substitution(&self, key: &str, writer: &mut dyn Write) -> Result<(), Error> {
        match self.substitutions.get(key) {
            Some(substitution) => substitution(writer),
            None => Err(missing_substitution(key)),
        }
    }

    /// Writes the template with all markers substituted. Nothing is written if
    /// a marker has no substitution.
    pub fn write(&self, f: &mut dyn Write) -> Result<(), Error> {
        let keys = Template::new(self.template).keys();
        if let Some(key) = keys
            .into_iter()
            .find(|key| !self.substitutions.contains_key(*key))
        {
            return Err(missing_substitution(key));
        }
        replace_all_streaming(
            &SUBSTITUTION_MARKER,
            self.template,
            |captures, writer| {
                let key = captures.get(1).map_or("", |m| m.as_str()).trim();
                self.insert_substitution(key, writer)
            },
            f,
        )
    }
}

fn missing_substitution(key: &str) -> Error {
    Error::new(
        ErrorKind::InvalidInput,
        format!("no substitution supplied for template key '{}'", key),
    )
}

fn replace_all_streaming<R>(
    regex: &Regex,
    haystack: &str,
    rep: R,
    writer: &mut dyn Write,
) -> Result<(), Error>
where
    R: Fn(&Captures, &mut dyn Write) -> Result<(), Error>,
{
    let mut last_match = 0;
    for captures in regex.captures_iter(haystack) {
        let Some(m) = captures.get(0) else {
            continue;
        };
        write!(writer, "{}", &haystack[last_match..m.start()])?;
        rep(&captures, writer)?;
        last_match = m.end();
    }
    write!(writer, "{}", &haystack[last_match..])
}
