//! Scaffolds generated by `build.rs` from the grammars under `grammars/`,
//! compiled as ordinary modules.

macro_rules! generated_scaffold {
    ($name:ident, $grammar:literal) => {
        #[allow(dead_code)]
        pub mod $name {
            pub mod production_enum {
                include!(concat!(
                    env!("OUT_DIR"),
                    "/generated_prodgen/",
                    $grammar,
                    "/production_enum.rs"
                ));
            }
            pub mod semantic_analyzer {
                include!(concat!(
                    env!("OUT_DIR"),
                    "/generated_prodgen/",
                    $grammar,
                    "/semantic_analyzer.rs"
                ));
            }

            pub const LISTING: &str = include_str!(concat!(
                env!("OUT_DIR"),
                "/generated_prodgen/",
                $grammar,
                "/produkcije_sve.txt"
            ));
        }
    };
}

generated_scaffold!(expressions, "expressions");
generated_scaffold!(empty, "empty");
