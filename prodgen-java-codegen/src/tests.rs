use prodgen_codegen::{
    GeneratedCodeWriter, ScaffoldCodeGen, ScaffoldNames, ARTIFACT_DISPATCHER, ARTIFACT_ENUM,
};
use prodgen_input::parse_grammar;

use crate::JavaScaffoldCodeGen;

fn codegen(package: Option<&str>) -> JavaScaffoldCodeGen {
    JavaScaffoldCodeGen::new(ScaffoldNames {
        source: "produkcije_bnf.txt".to_string(),
        package: package.map(str::to_string),
        enum_name: "ProductionEnum".to_string(),
        enum_module: "ProductionEnum".to_string(),
        dispatcher_name: "SemanticAnalyzer".to_string(),
    })
}

fn generate(source: &str, package: Option<&str>) -> (String, String) {
    let grammar = parse_grammar(source).unwrap();
    let codegen = codegen(package);
    let mut enum_output = Vec::new();
    let mut dispatcher_output = Vec::new();
    {
        let mut gen = GeneratedCodeWriter::new();
        gen.add_target(ARTIFACT_ENUM, &mut enum_output);
        gen.add_target(ARTIFACT_DISPATCHER, &mut dispatcher_output);
        codegen.generate_enum(&grammar, &mut gen).unwrap();
        codegen.generate_dispatcher(&grammar, &mut gen).unwrap();
    }
    (
        String::from_utf8(enum_output).unwrap(),
        String::from_utf8(dispatcher_output).unwrap(),
    )
}

#[test]
fn test_generate_enum() {
    let (enum_code, _) = generate(
        "<primarni_izraz> ::= IDN\n\t| BROJ\n<cast_izraz> ::= <unarni_izraz>\n",
        Some("hr.fer.zemris.ppj.semantic"),
    );
    let expected = "package hr.fer.zemris.ppj.semantic;

/**
 * Generated by prodgen from produkcije_bnf.txt.
 */
public enum ProductionEnum{
// <primarni_izraz>
primarni_izraz_1, // <primarni_izraz> ::= IDN
primarni_izraz_2, // <primarni_izraz> ::= BROJ

// <cast_izraz>
cast_izraz_1, // <cast_izraz> ::= <unarni_izraz>

}
";
    assert_eq!(expected, enum_code);
}

#[test]
fn test_generate_enum_empty_grammar() {
    let (enum_code, dispatcher_code) = generate("", None);
    assert_eq!(
        "/**\n * Generated by prodgen from produkcije_bnf.txt.\n */\npublic enum ProductionEnum{\n}\n",
        enum_code
    );
    assert!(dispatcher_code.ends_with("    public void check(ProductionEnum pe) {\n    }\n\n}\n"));
}

#[test]
fn test_generate_dispatcher() {
    let (_, dispatcher_code) = generate("<a> ::= X\n\t| Y\n<b> ::= <a> Z\n", None);
    let expected = "/**
 * Generated by prodgen from produkcije_bnf.txt.
 */
public class SemanticAnalyzer {

    public void check(ProductionEnum pe) {
        if (pe == ProductionEnum.a_1) {
            // <a> ::= X

        } else if (pe == ProductionEnum.a_2) {
            // <a> ::= Y

        } else if (pe == ProductionEnum.b_1) {
            // <b> ::= <a> Z

        }
    }

}
";
    assert_eq!(expected, dispatcher_code);
}

#[test]
fn test_enum_entry_count_matches_productions() {
    let (enum_code, dispatcher_code) =
        generate("<a> ::= X\n\t| Y\n\t| Z\n<b> ::= W\n<c> ::= V\n", None);
    let entries = enum_code.lines().filter(|l| l.contains(", // ")).count();
    assert_eq!(5, entries);
    let branches = dispatcher_code
        .lines()
        .filter(|l| l.contains("(pe == ProductionEnum."))
        .count();
    assert_eq!(5, branches);
}
