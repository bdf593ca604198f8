use std::env;
use std::path::Path;

use prodgen::{generate, GeneratorOptions, Language};

const GRAMMARS: [&str; 2] = ["expressions", "empty"];

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    for grammar in GRAMMARS {
        let grammar_path = Path::new("grammars").join(format!("{}.txt", grammar));
        let options = GeneratorOptions {
            language: Language::Rust,
            target: Path::new(&out_dir).join("generated_prodgen").join(grammar),
            package: None,
            ..GeneratorOptions::default()
        };
        generate(&grammar_path, &options).unwrap();
        println!("cargo:rerun-if-changed={}", grammar_path.display());
    }
    println!("cargo:rerun-if-changed=build.rs");
}
