use std::{
    fmt::Display,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use log::{info, warn};
use prodgen_codegen::{
    GeneratedCodeWriter, ScaffoldCodeGen, ScaffoldNames, ARTIFACT_DISPATCHER, ARTIFACT_ENUM,
    ARTIFACT_LISTING,
};
use prodgen_input::{parse_grammar, ProductionSet};
use prodgen_java_codegen::JavaScaffoldCodeGen;
use prodgen_rust_codegen::RustScaffoldCodeGen;

pub use errors::ProdgenError;
pub use listing::write_listing;

mod errors;
mod listing;

pub const DEFAULT_GRAMMAR_FILE: &str = "produkcije_bnf.txt";
pub const DEFAULT_LISTING_FILE: &str = "produkcije_sve.txt";
pub const DEFAULT_JAVA_PACKAGE: &str = "hr.fer.zemris.ppj.semantic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Java,
    Rust,
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Language::Java => "java",
                Language::Rust => "rust",
            }
        )
    }
}

impl Language {
    fn default_enum_name(self) -> &'static str {
        match self {
            Language::Java => "ProductionEnum",
            Language::Rust => "Production",
        }
    }

    fn default_enum_file(self) -> &'static str {
        match self {
            Language::Java => "ProductionEnum.java",
            Language::Rust => "production_enum.rs",
        }
    }

    fn default_dispatcher_file(self) -> &'static str {
        match self {
            Language::Java => "SemanticAnalyzer.java",
            Language::Rust => "semantic_analyzer.rs",
        }
    }

    fn codegen(self, names: ScaffoldNames) -> Box<dyn ScaffoldCodeGen> {
        match self {
            Language::Java => Box::new(JavaScaffoldCodeGen::new(names)),
            Language::Rust => Box::new(RustScaffoldCodeGen::new(names)),
        }
    }
}

/// Knobs of a generator run. The defaults reproduce the fixed file names of
/// the Java scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub language: Language,
    /// Also emit the dispatcher skeleton.
    pub dispatcher: bool,
    /// Directory all output files are placed in.
    pub target: PathBuf,
    pub listing_file: PathBuf,
    pub enum_file: Option<PathBuf>,
    pub dispatcher_file: Option<PathBuf>,
    pub package: Option<String>,
    pub enum_name: Option<String>,
    pub dispatcher_name: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            language: Language::Java,
            dispatcher: true,
            target: PathBuf::from("."),
            listing_file: PathBuf::from(DEFAULT_LISTING_FILE),
            enum_file: None,
            dispatcher_file: None,
            package: Some(DEFAULT_JAVA_PACKAGE.to_string()),
            enum_name: None,
            dispatcher_name: None,
        }
    }
}

impl GeneratorOptions {
    pub fn enum_file(&self) -> PathBuf {
        self.enum_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.language.default_enum_file()))
    }

    pub fn dispatcher_file(&self) -> PathBuf {
        self.dispatcher_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.language.default_dispatcher_file()))
    }

    /// Path the artifact with the given key is written to.
    pub fn output_path(&self, key: &str) -> PathBuf {
        let file = match key {
            ARTIFACT_ENUM => self.enum_file(),
            ARTIFACT_DISPATCHER => self.dispatcher_file(),
            _ => self.listing_file.clone(),
        };
        self.target.join(file)
    }

    pub fn scaffold_names(&self, grammar_path: &Path) -> ScaffoldNames {
        let enum_name = self
            .enum_name
            .clone()
            .unwrap_or_else(|| self.language.default_enum_name().to_string());
        let enum_module = self
            .enum_file()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| enum_name.clone());
        ScaffoldNames {
            source: grammar_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| grammar_path.display().to_string()),
            package: self.package.clone(),
            enum_name,
            enum_module,
            dispatcher_name: self
                .dispatcher_name
                .clone()
                .unwrap_or_else(|| "SemanticAnalyzer".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub productions: usize,
    pub heads: usize,
    pub files: Vec<PathBuf>,
}

fn written(
    options: &GeneratorOptions,
    key: &'static str,
    result: Result<(), std::io::Error>,
) -> Result<&'static str, ProdgenError> {
    result
        .map(|_| key)
        .map_err(|e| ProdgenError::write(&options.output_path(key), e))
}

fn validate(
    codegen: &dyn ScaffoldCodeGen,
    productions: &ProductionSet,
    options: &GeneratorOptions,
) -> Result<(), ProdgenError> {
    codegen
        .validate(productions)
        .map_err(|e| ProdgenError::write(&options.output_path(ARTIFACT_ENUM), e))
}

/// Writes the listing, the enumeration and, unless disabled, the dispatcher
/// through `gen`. Returns the keys of the written artifacts.
///
/// The backend validates the productions first, so a rejected grammar reaches
/// none of the writers.
pub fn generate_scaffold(
    productions: &ProductionSet,
    grammar_path: &Path,
    options: &GeneratorOptions,
    gen: &mut GeneratedCodeWriter,
) -> Result<Vec<&'static str>, ProdgenError> {
    let codegen = options.language.codegen(options.scaffold_names(grammar_path));
    validate(codegen.as_ref(), productions, options)?;
    let mut artifacts = vec![written(
        options,
        ARTIFACT_LISTING,
        gen.generate_code(ARTIFACT_LISTING, |output| {
            write_listing(productions, output)
        }),
    )?];
    artifacts.push(written(
        options,
        ARTIFACT_ENUM,
        codegen.generate_enum(productions, gen),
    )?);
    if options.dispatcher {
        artifacts.push(written(
            options,
            ARTIFACT_DISPATCHER,
            codegen.generate_dispatcher(productions, gen),
        )?);
    }
    for key in &artifacts {
        info!(
            "wrote {} ({} productions) to {}",
            key,
            productions.len(),
            options.output_path(key).display()
        );
    }
    Ok(artifacts)
}

pub fn generate(
    grammar_path: &Path,
    options: &GeneratorOptions,
) -> Result<GenerationSummary, ProdgenError> {
    let contents = std::fs::read_to_string(grammar_path)
        .map_err(|e| ProdgenError::read(grammar_path, e))?;
    let productions = parse_grammar(&contents)
        .map_err(|e| ProdgenError::input(grammar_path, &contents, e))?;
    for name in productions.duplicate_names() {
        warn!("symbolic name {} is generated for more than one production", name);
    }

    std::fs::create_dir_all(&options.target)
        .map_err(|e| ProdgenError::write(&options.target, e))?;
    let mut gen = GeneratedCodeWriter::with_default(|key| {
        let file = File::create(options.output_path(key))?;
        Ok::<_, std::io::Error>(BufWriter::new(file))
    });
    let artifacts = generate_scaffold(&productions, grammar_path, options, &mut gen)?;

    Ok(GenerationSummary {
        productions: productions.len(),
        heads: productions.groups().count(),
        files: artifacts
            .iter()
            .map(|key| options.output_path(key))
            .collect(),
    })
}
