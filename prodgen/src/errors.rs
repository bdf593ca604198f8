use std::{
    error::Error,
    fmt::Display,
    path::{Path, PathBuf},
};

use owo_colors::OwoColorize;
use prodgen_input::InputError;

#[derive(Debug)]
pub enum Severity {
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "{}", "error".bright_red().bold()),
        }
    }
}

#[derive(Debug)]
pub struct Location {
    line: usize,
    file: PathBuf,
    text: String,
}

impl Location {
    fn from_line(line: usize, file: &Path, contents: &str) -> Option<Location> {
        let text = contents.lines().nth(line.checked_sub(1)?)?;
        Some(Location {
            line,
            file: file.to_path_buf(),
            text: text.trim_end().to_string(),
        })
    }
}

#[derive(Debug)]
pub struct ProdgenError {
    severity: Severity,
    error: ProdgenErrorType,
}

#[derive(Debug)]
enum ProdgenErrorType {
    Read {
        file: PathBuf,
        error: std::io::Error,
    },
    Write {
        file: PathBuf,
        error: std::io::Error,
    },
    Input {
        file: PathBuf,
        location: Option<Location>,
        error: InputError,
    },
}

impl ProdgenError {
    pub fn read(file: &Path, error: std::io::Error) -> Self {
        ProdgenError {
            severity: Severity::Error,
            error: ProdgenErrorType::Read {
                file: file.to_path_buf(),
                error,
            },
        }
    }

    pub fn write(file: &Path, error: std::io::Error) -> Self {
        ProdgenError {
            severity: Severity::Error,
            error: ProdgenErrorType::Write {
                file: file.to_path_buf(),
                error,
            },
        }
    }

    pub fn input(file: &Path, contents: &str, error: InputError) -> Self {
        ProdgenError {
            severity: Severity::Error,
            error: ProdgenErrorType::Input {
                file: file.to_path_buf(),
                location: Location::from_line(error.line(), file, contents),
                error,
            },
        }
    }

    pub fn input_error(&self) -> Option<&InputError> {
        match &self.error {
            ProdgenErrorType::Input { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn io_error(&self) -> Option<&std::io::Error> {
        match &self.error {
            ProdgenErrorType::Read { error, .. } | ProdgenErrorType::Write { error, .. } => {
                Some(error)
            }
            ProdgenErrorType::Input { .. } => None,
        }
    }
}

impl ProdgenErrorType {
    fn message(&self) -> &'static str {
        match self {
            ProdgenErrorType::Read { .. } => "failed to read grammar file",
            ProdgenErrorType::Write { .. } => "failed to write generated file",
            ProdgenErrorType::Input { .. } => "malformed grammar",
        }
    }
}

impl Display for ProdgenErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProdgenErrorType::Read { file, error } | ProdgenErrorType::Write { file, error } => {
                write!(f, "     file: {}\n     reason: {}", file.display(), error)
            }
            ProdgenErrorType::Input {
                location: Some(location),
                error,
                ..
            } => write_section(location, error.bold(), f),
            ProdgenErrorType::Input {
                file,
                location: None,
                error,
            } => write!(f, "     file: {}\n     reason: {}", file.display(), error),
        }
    }
}

impl Error for ProdgenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.error {
            ProdgenErrorType::Read { error, .. } | ProdgenErrorType::Write { error, .. } => {
                Some(error)
            }
            ProdgenErrorType::Input { error, .. } => Some(error),
        }
    }
}

fn write_section<D: Display>(
    location: &Location,
    contents: D,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(
        f,
        " {} {}:{}",
        "-->".blue().bold(),
        location.file.display(),
        location.line,
    )?;
    let trimmed = location.text.trim_start();
    let indent = &location.text[..location.text.len() - trimmed.len()];
    let formatted = format!(
        "{}\n{}{}\n\n{}",
        location.text,
        indent,
        "~".repeat(trimmed.chars().count()).bright_red().bold(),
        contents
    );
    let lines_iter_padded = std::iter::once("").chain(formatted.lines().chain(std::iter::once("")));
    let lines: Vec<String> = lines_iter_padded
        .map(|l| format!("  {}  {}", "|".blue().bold(), l))
        .collect();
    write!(f, "{}", lines.join("\n"))
}

impl Display for ProdgenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}: {}", self.severity, self.error.message())?;
        write!(f, "{}", self.error)
    }
}
