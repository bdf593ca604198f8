use std::io::{Error, ErrorKind};

use prodgen_input::parse_grammar;

use crate::{
    write_enum_variants, write_preamble, GeneratedCodeWriter, ScaffoldNames, Template,
    ARTIFACT_DISPATCHER, ARTIFACT_ENUM,
};

fn names() -> ScaffoldNames {
    ScaffoldNames {
        source: "grammar.txt".to_string(),
        package: Some("demo.semantic".to_string()),
        enum_name: "ProductionEnum".to_string(),
        enum_module: "production_enum".to_string(),
        dispatcher_name: "SemanticAnalyzer".to_string(),
    }
}

#[test]
fn test_template_substitution() {
    let template = Template::new("enum /*{ name }*/ {/*{body}*/}\n");
    assert_eq!(vec!["name", "body"], template.keys());
    let mut writer = template.writer();
    writer.substitute_text("name", "Production");
    writer.substitute("body", |w| write!(w, " A_1, "));
    let mut output = Vec::new();
    writer.write(&mut output).unwrap();
    assert_eq!(
        "enum Production { A_1, }\n",
        String::from_utf8(output).unwrap()
    );
}

#[test]
fn test_template_without_markers() {
    let template = Template::new("public enum X{\n}");
    let mut output = Vec::new();
    template.writer().write(&mut output).unwrap();
    assert_eq!("public enum X{\n}", String::from_utf8(output).unwrap());
}

#[test]
fn test_template_missing_substitution() {
    let template = Template::new("a /*{ missing }*/ b");
    let mut output = Vec::new();
    let err = template.writer().write(&mut output).unwrap_err();
    assert_eq!(ErrorKind::InvalidInput, err.kind());
    assert!(err.to_string().contains("'missing'"));
    assert!(output.is_empty());
}

#[test]
fn test_generated_code_writer_targets() {
    let mut enum_output = Vec::new();
    {
        let mut gen = GeneratedCodeWriter::new();
        gen.add_target(ARTIFACT_ENUM, &mut enum_output);
        gen.generate_code(ARTIFACT_ENUM, |w| write!(w, "enum")).unwrap();
        gen.generate_code(ARTIFACT_DISPATCHER, |w| write!(w, "discarded")).unwrap();
    }
    assert_eq!(b"enum".to_vec(), enum_output);
}

#[test]
fn test_generated_code_writer_default_error() {
    let mut gen = GeneratedCodeWriter::with_default(|key| {
        Err::<Vec<u8>, Error>(Error::new(ErrorKind::NotFound, key))
    });
    let err = gen
        .generate_code(ARTIFACT_ENUM, |w| write!(w, "never written"))
        .unwrap_err();
    assert_eq!(ErrorKind::NotFound, err.kind());
}

#[test]
fn test_write_enum_variants() {
    let grammar = parse_grammar("<a> ::= X\n\t| Y\n<b> ::= <a>\n").unwrap();
    let mut output = Vec::new();
    write_enum_variants(&grammar, "    ", &mut output).unwrap();
    assert_eq!(
        "\n    // <a>\n    a_1, // <a> ::= X\n    a_2, // <a> ::= Y\n\n    // <b>\n    b_1, // <b> ::= <a>\n",
        String::from_utf8(output).unwrap()
    );
}

#[test]
fn test_write_preamble() {
    let mut output = Vec::new();
    write_preamble(
        "{{ if package }}package {package};\n\n{{ endif }}// {enum_name} from {source}\n",
        &names(),
        &mut output,
    )
    .unwrap();
    assert_eq!(
        "package demo.semantic;\n\n// ProductionEnum from grammar.txt\n",
        String::from_utf8(output).unwrap()
    );

    let mut output = Vec::new();
    let names = ScaffoldNames {
        package: None,
        ..names()
    };
    write_preamble(
        "{{ if package }}package {package};\n\n{{ endif }}// {enum_name} from {source}\n",
        &names,
        &mut output,
    )
    .unwrap();
    assert_eq!(
        "// ProductionEnum from grammar.txt\n",
        String::from_utf8(output).unwrap()
    );
}
