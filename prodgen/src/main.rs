use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::info;
use prodgen::{
    generate, GeneratorOptions, Language, DEFAULT_GRAMMAR_FILE, DEFAULT_JAVA_PACKAGE,
    DEFAULT_LISTING_FILE,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLine {
    #[arg(default_value = DEFAULT_GRAMMAR_FILE, help = "The grammar file to read")]
    grammar: PathBuf,
    #[arg(
        long,
        help = "The directory to write the generated files to",
        default_value = "."
    )]
    target: PathBuf,
    #[arg(short, long, help = "The language to generate code for", default_value_t = Language::Java)]
    language: Language,
    #[arg(long, help = "Do not generate the dispatcher skeleton")]
    no_dispatcher: bool,
    #[arg(long, help = "File name of the production listing", default_value = DEFAULT_LISTING_FILE)]
    listing: PathBuf,
    #[arg(long, help = "File name of the production enumeration")]
    enum_file: Option<PathBuf>,
    #[arg(long, help = "File name of the dispatcher skeleton")]
    dispatcher_file: Option<PathBuf>,
    #[arg(long, help = "Package of the generated Java sources", default_value = DEFAULT_JAVA_PACKAGE)]
    package: String,
    #[arg(long, help = "Name of the generated enumeration")]
    enum_name: Option<String>,
    #[arg(long, help = "Class name of the generated Java dispatcher")]
    dispatcher_name: Option<String>,
}

impl From<CommandLine> for GeneratorOptions {
    fn from(cli: CommandLine) -> Self {
        GeneratorOptions {
            language: cli.language,
            dispatcher: !cli.no_dispatcher,
            target: cli.target,
            listing_file: cli.listing,
            enum_file: cli.enum_file,
            dispatcher_file: cli.dispatcher_file,
            package: Some(cli.package).filter(|package| !package.is_empty()),
            enum_name: cli.enum_name,
            dispatcher_name: cli.dispatcher_name,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = CommandLine::parse();
    let grammar = cli.grammar.clone();
    let options = GeneratorOptions::from(cli);
    match generate(&grammar, &options) {
        Ok(summary) => {
            info!(
                "generated {} productions of {} heads into {} files",
                summary.productions,
                summary.heads,
                summary.files.len()
            );
        }
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    }
}
