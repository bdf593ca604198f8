use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use prodgen::{generate, GeneratorOptions, Language};
use prodgen_input::{parse_grammar, parse_listing, InputError};
use tempdir::TempDir;

const GRAMMAR: &str = "<primarni_izraz> ::= IDN
\t| BROJ
\t| L_ZAGRADA <izraz> D_ZAGRADA

<izraz> ::= <izraz_pridruzivanja>
\t| <izraz> ZAREZ <izraz_pridruzivanja>
";

fn write_grammar(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("produkcije_bnf.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_generate_java_scaffold() {
    let dir = TempDir::new("prodgen").unwrap();
    let grammar = write_grammar(&dir, GRAMMAR);
    let options = GeneratorOptions {
        target: dir.path().join("out"),
        ..GeneratorOptions::default()
    };
    let summary = generate(&grammar, &options).unwrap();
    assert_eq!(5, summary.productions);
    assert_eq!(2, summary.heads);
    assert_eq!(3, summary.files.len());

    let listing = fs::read_to_string(dir.path().join("out/produkcije_sve.txt")).unwrap();
    assert_eq!(
        "0 <primarni_izraz> ::= IDN
1 <primarni_izraz> ::= BROJ
2 <primarni_izraz> ::= L_ZAGRADA <izraz> D_ZAGRADA
3 <izraz> ::= <izraz_pridruzivanja>
4 <izraz> ::= <izraz> ZAREZ <izraz_pridruzivanja>
",
        listing
    );

    let enumeration = fs::read_to_string(dir.path().join("out/ProductionEnum.java")).unwrap();
    assert!(enumeration.starts_with("package hr.fer.zemris.ppj.semantic;\n"));
    assert!(enumeration.contains("public enum ProductionEnum{\n// <primarni_izraz>\n"));
    assert!(enumeration.contains("izraz_2, // <izraz> ::= <izraz> ZAREZ <izraz_pridruzivanja>\n"));
    assert!(enumeration.ends_with("\n}\n"));

    let dispatcher = fs::read_to_string(dir.path().join("out/SemanticAnalyzer.java")).unwrap();
    assert!(dispatcher.contains("public class SemanticAnalyzer {"));
    assert!(dispatcher.contains("        if (pe == ProductionEnum.primarni_izraz_1) {\n"));
    assert!(dispatcher.contains("        } else if (pe == ProductionEnum.izraz_2) {\n"));
}

#[test]
fn test_listing_round_trip() {
    let dir = TempDir::new("prodgen").unwrap();
    let grammar = write_grammar(&dir, GRAMMAR);
    let options = GeneratorOptions {
        target: dir.path().to_path_buf(),
        dispatcher: false,
        ..GeneratorOptions::default()
    };
    generate(&grammar, &options).unwrap();
    assert!(!dir.path().join("SemanticAnalyzer.java").exists());

    let listing = fs::read_to_string(dir.path().join("produkcije_sve.txt")).unwrap();
    let parsed = parse_listing(&listing).unwrap();
    let original = parse_grammar(GRAMMAR).unwrap();
    let records = |set: &prodgen_input::ProductionSet| -> Vec<(usize, String, String, usize)> {
        set.productions()
            .iter()
            .map(|p| (p.index, p.lhs.to_string(), p.rhs.to_string(), p.ordinal))
            .collect()
    };
    assert_eq!(records(&original), records(&parsed));
}

#[test]
fn test_generate_rust_scaffold() {
    let dir = TempDir::new("prodgen").unwrap();
    let grammar = write_grammar(&dir, GRAMMAR);
    let options = GeneratorOptions {
        language: Language::Rust,
        target: dir.path().to_path_buf(),
        ..GeneratorOptions::default()
    };
    generate(&grammar, &options).unwrap();

    let enumeration = fs::read_to_string(dir.path().join("production_enum.rs")).unwrap();
    assert!(enumeration.contains("pub enum Production {\n    // <primarni_izraz>\n"));
    assert!(enumeration.contains("    primarni_izraz_3, // <primarni_izraz> ::= L_ZAGRADA <izraz> D_ZAGRADA\n"));
    let dispatcher = fs::read_to_string(dir.path().join("semantic_analyzer.rs")).unwrap();
    assert!(dispatcher.contains("use super::production_enum::Production;"));
    assert!(dispatcher.contains("    } else if production == Production::izraz_1 {\n"));
}

#[test]
fn test_missing_grammar_file() {
    let dir = TempDir::new("prodgen").unwrap();
    let options = GeneratorOptions {
        target: dir.path().to_path_buf(),
        ..GeneratorOptions::default()
    };
    let error = generate(&dir.path().join("missing.txt"), &options).unwrap_err();
    assert_eq!(
        Some(ErrorKind::NotFound),
        error.io_error().map(|e| e.kind())
    );
    assert!(error.to_string().contains("failed to read grammar file"));
    assert!(!dir.path().join("produkcije_sve.txt").exists());
}

#[test]
fn test_continuation_before_head() {
    let dir = TempDir::new("prodgen").unwrap();
    let grammar = write_grammar(&dir, "\t| BROJ\n<a> ::= X\n");
    let options = GeneratorOptions {
        target: dir.path().to_path_buf(),
        ..GeneratorOptions::default()
    };
    let error = generate(&grammar, &options).unwrap_err();
    assert_eq!(
        Some(&InputError::UnboundContinuation {
            line: 1,
            text: "| BROJ".to_string()
        }),
        error.input_error()
    );
    assert!(!dir.path().join("ProductionEnum.java").exists());
}

#[test]
fn test_empty_grammar() {
    let dir = TempDir::new("prodgen").unwrap();
    let grammar = write_grammar(&dir, "");
    let options = GeneratorOptions {
        target: dir.path().to_path_buf(),
        package: None,
        ..GeneratorOptions::default()
    };
    let summary = generate(&grammar, &options).unwrap();
    assert_eq!(0, summary.productions);
    assert_eq!(
        "",
        fs::read_to_string(dir.path().join("produkcije_sve.txt")).unwrap()
    );
    let enumeration = fs::read_to_string(dir.path().join("ProductionEnum.java")).unwrap();
    assert!(enumeration.ends_with("public enum ProductionEnum{\n}\n"));
}

#[test]
fn test_invalid_rust_identifier_writes_nothing() {
    let dir = TempDir::new("prodgen").unwrap();
    let grammar = write_grammar(&dir, "<lista-izraza> ::= X\n");
    let options = GeneratorOptions {
        language: Language::Rust,
        target: dir.path().join("out"),
        package: None,
        ..GeneratorOptions::default()
    };
    let error = generate(&grammar, &options).unwrap_err();
    assert_eq!(
        Some(ErrorKind::InvalidData),
        error.io_error().map(|e| e.kind())
    );
    assert!(error.to_string().contains("'lista-izraza_1' is not a valid Rust identifier"));
    assert!(!dir.path().join("out/produkcije_sve.txt").exists());
    assert!(!dir.path().join("out/production_enum.rs").exists());
    assert!(!dir.path().join("out/semantic_analyzer.rs").exists());
}
