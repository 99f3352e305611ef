use anthology_lib::{parse_rule_source, AnthologyClient, ExtractOptions};
use clap::Parser;
use std::fs;

const ANTHOLOGY_INTRO: &str = r#"
       ___          __  __          __
      /   |  ____  / /_/ /_  ____  / /___  ____ ___  __
     / /| | / __ \/ __/ __ \/ __ \/ / __ \/ __ `/ / / /
    / ___ |/ / / / /_/ / / / /_/ / / /_/ / /_/ / /_/ /
   /_/  |_/_/ /_/\__/_/ /_/\____/_/\____/\__, /\__, /
                                        /____//____/

    Resolve generator-emitted CSS rules from the command line.
"#;

#[derive(Parser)]
#[command(name = "Anthology")]
#[command(about = "Look up anthology-generated CSS rules by semantic tokens")]
struct Args {
    /// Stylesheet produced by the anthology generator.
    stylesheet: String,

    /// Shorthand token, e.g. "bg".
    shorthand: String,

    /// Adjective token, e.g. "red".
    adjective: String,

    /// Match the !important variant.
    #[arg(long)]
    important: bool,

    /// Theme name, e.g. "dark".
    #[arg(long)]
    theme: Option<String>,

    /// Breakpoint name, e.g. "medium".
    #[arg(long)]
    breakpoint: Option<String>,

    /// Pseudo token, e.g. "hover".
    #[arg(long)]
    pseudo: Option<String>,
}

fn main() {
    println!("{}", ANTHOLOGY_INTRO);
    env_logger::init();

    let args: Args = Args::parse();

    let css_text = match fs::read_to_string(&args.stylesheet) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading stylesheet: {}", e);
            std::process::exit(1);
        }
    };

    let options = ExtractOptions {
        important: args.important,
        theme: args.theme,
        breakpoint: args.breakpoint,
        pseudo: args.pseudo,
    };

    let result = parse_rule_source(&css_text)
        .and_then(AnthologyClient::new)
        .and_then(|client| client.extract(&args.shorthand, &args.adjective, options));

    match result {
        Ok(rule) => {
            println!("selector:         {}", rule.selector);
            println!("selector-escaped: {}", rule.selector_escaped);
            println!();
            print!("{}", rule.rule);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
