//! varformat CLI
//!
//! Usage:
//!   varformat [OPTIONS] format TEMPLATE [--arg NAME=VALUE]... [--args-file FILE]
//!   varformat [OPTIONS] parse TEMPLATE STRING
//!   varformat [OPTIONS] vars TEMPLATE
//!
//! Options:
//!   --syntax <SYNTAX>    Placeholder syntax: permissive, posix-shell, python
//!   --pattern <REGEX>    Custom placeholder regex, first group is the name
//!   -v, --verbose        Log engine decisions to stderr
//!   -h, --help           Print help

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use varformat::formats;
use varformat::{ArgsFile, FormatError, FormatOptions, Formatter, ParseOptions};

#[derive(Parser)]
#[command(name = "varformat")]
#[command(about = "Format and parse strings with named placeholders")]
struct Cli {
    /// Placeholder syntax
    #[arg(long, value_enum, default_value_t = Syntax::Permissive, global = true)]
    syntax: Syntax,

    /// Custom placeholder regex whose first group is the name (overrides --syntax)
    #[arg(long, global = true)]
    pattern: Option<String>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Substitute arguments into a template
    Format {
        /// Template text, or - to read from stdin
        template: String,

        /// Argument as NAME=VALUE (repeatable)
        #[arg(short, long = "arg", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        args: Vec<(String, String)>,

        /// TOML file with a [vars] table
        #[arg(long)]
        args_file: Option<PathBuf>,

        /// Leave placeholders without an argument untouched
        #[arg(long)]
        partial: bool,

        /// Fail when an argument is not used
        #[arg(long)]
        strict: bool,

        /// Refuse output that could not be parsed back unambiguously
        #[arg(long)]
        check_ambiguity: bool,
    },

    /// Recover arguments from a formatted string, printed as TOML
    Parse {
        /// Template text, or - to read from stdin
        template: String,

        /// Formatted string, or - to read from stdin
        string: String,

        /// Accept the first match even if another split is possible
        #[arg(long)]
        no_ambiguity_check: bool,
    },

    /// List the placeholders of a template
    Vars {
        /// Template text, or - to read from stdin
        template: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Syntax {
    /// ${name}, any word characters or spaces inside
    Permissive,
    /// $name and ${name} with shell identifiers
    PosixShell,
    /// {name} with identifiers
    Python,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let formatter = match &cli.pattern {
        Some(pattern) => match Formatter::from_pattern(pattern) {
            Ok(f) => f,
            Err(e) => fail(&format!("Error: {}", e)),
        },
        None => match cli.syntax {
            Syntax::Permissive => formats::permissive().clone(),
            Syntax::PosixShell => formats::posix_shell().clone(),
            Syntax::Python => formats::python().clone(),
        },
    };

    match cli.command {
        Command::Format {
            template,
            args,
            args_file,
            partial,
            strict,
            check_ambiguity,
        } => {
            let template = read_input(template);

            // Inline arguments override the file
            let mut vars = match &args_file {
                Some(path) => match ArgsFile::from_file(path) {
                    Ok(file) => file,
                    Err(e) => fail(&format!(
                        "Error loading argument file '{}': {}",
                        path.display(),
                        e
                    )),
                },
                None => ArgsFile::default(),
            };
            for (name, value) in &args {
                vars.set(name, value);
            }

            let options = FormatOptions::new()
                .with_partial_ok(partial)
                .with_extra_ok(!strict)
                .with_ambiguity_check(check_ambiguity);
            match formatter.vformat(&template, vars.vars, &options) {
                Ok(text) => println!("{}", text),
                Err(e) => fail_format(&e, &template),
            }
        }
        Command::Parse {
            template,
            string,
            no_ambiguity_check,
        } => {
            let template = read_input(template);
            let string = read_input(string);

            let options = ParseOptions::new().with_ambiguity_check(!no_ambiguity_check);
            match formatter.parse_with(&template, &string, &options) {
                Ok(Some(values)) => match toml::to_string(&values) {
                    Ok(doc) => print!("{}", doc),
                    Err(e) => fail(&format!("Error: {}", e)),
                },
                Ok(None) => fail("no match"),
                Err(e) => fail_format(&e, &template),
            }
        }
        Command::Vars { template } => {
            let template = read_input(template);
            for (name, occurrences) in formatter.references(&template).iter() {
                let spans: Vec<String> = occurrences
                    .iter()
                    .map(|o| format!("{}..{}", o.span.start, o.span.end))
                    .collect();
                println!("{}\t{}", name, spans.join(" "));
            }
        }
    }
}

/// Read stdin when the argument is `-`
fn read_input(arg: String) -> String {
    if arg != "-" {
        return arg;
    }
    let mut buffer = String::new();
    match io::stdin().read_to_string(&mut buffer) {
        Ok(_) => buffer,
        Err(e) => fail(&format!("Error reading from stdin: {}", e)),
    }
}

fn fail_format(error: &FormatError, template: &str) -> ! {
    match error {
        FormatError::MissingKey { .. } => {
            eprint!("{}", error.report(template, "<template>"));
            std::process::exit(1);
        }
        _ => fail(&format!("Error: {}", error)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
