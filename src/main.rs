use clap::{Parser as ClapParser, Subcommand};
use heluna::cli::{self, CheckOptions, CheckResult, CliError, OutputFormat};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "heluna")]
#[command(about = "Heluna - parse and inspect Heluna expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression and print its syntax tree
    Parse {
        /// The Heluna source (reads from stdin if not provided)
        source: Option<String>,

        /// Print the tree as JSON
        #[arg(short, long)]
        json: bool,

        /// Pretty-print the JSON output
        #[arg(short, long, requires = "json")]
        pretty: bool,
    },

    /// Print the tokens of an expression
    Tokens {
        /// The Heluna source (reads from stdin if not provided)
        source: Option<String>,
    },

    /// Only validate syntax
    Check {
        /// The Heluna source (reads from stdin if not provided)
        source: Option<String>,
    },
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            source,
            json,
            pretty,
        } => {
            let format = match (json, pretty) {
                (true, true) => OutputFormat::JsonPretty,
                (true, false) => OutputFormat::Json,
                _ => OutputFormat::Tree,
            };
            run_parse(source, format)
        }
        Commands::Tokens { source } => run_tokens(source),
        Commands::Check { source } => run_check(source),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_source(source: Option<String>) -> Result<Option<String>, CliError> {
    match source {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_parse(source: Option<String>, format: OutputFormat) -> Result<(), CliError> {
    let options = CheckOptions {
        source: read_source(source)?,
    };
    let result = cli::execute_check(&options)?;
    println!("{}", cli::render_ast(result.expr(), format));
    Ok(())
}

fn run_tokens(source: Option<String>) -> Result<(), CliError> {
    let source = read_source(source)?.ok_or(CliError::NoInput)?;
    let tokens = heluna::tokenize(&source)?;
    println!("{}", cli::render_tokens(&tokens));
    Ok(())
}

fn run_check(source: Option<String>) -> Result<(), CliError> {
    let options = CheckOptions {
        source: read_source(source)?,
    };
    match cli::execute_check(&options)? {
        CheckResult::Valid(_) => println!("Syntax is valid"),
        CheckResult::TrailingInput { trailing, .. } => {
            println!("Syntax is valid ({} trailing tokens ignored)", trailing.len())
        }
    }
    Ok(())
}
