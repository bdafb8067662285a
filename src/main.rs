//! Intl Address CLI
//!
//! Usage:
//!   intl-address [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <MODE>        Output mode: string, html or element
//!   -c, --country <CODE>       Override the request's country code
//!   -t, --templates <FILE>     Template overrides (TOML format)
//!   -l, --list                 List countries with their own template
//!       --check                Lint all templates
//!       --realize              Realize element output into markup
//!   -v, --verbose              Debug logging
//!   -h, --help                 Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use intl_address::template::DEFAULT_KEY;
use intl_address::{AddressFormatter, FormatRequest, Formatted, OutputMode, TemplateRegistry};

#[derive(Parser)]
#[command(name = "intl-address")]
#[command(about = "Format postal addresses by country")]
struct Cli {
    /// JSON request file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output mode, overriding the request
    #[arg(short, long, value_enum)]
    output: Option<OutputMode>,

    /// Country code, overriding the request
    #[arg(short, long)]
    country: Option<String>,

    /// Template overrides merged over the built-in table (TOML format)
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// List countries that have their own template
    #[arg(short, long)]
    list: bool,

    /// Lint all templates and print warnings
    #[arg(long)]
    check: bool,

    /// For element output, realize the element and print its content
    #[arg(long)]
    realize: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = match &cli.templates {
        Some(path) => match TemplateRegistry::builtin().clone().with_override_file(path) {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("Error loading templates '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => TemplateRegistry::builtin().clone(),
    };

    if cli.list {
        for code in registry.country_codes() {
            println!("{}", code);
        }
        return;
    }

    if cli.check {
        let warnings = registry.lint();
        for (code, warning) in &warnings {
            let source = if code == DEFAULT_KEY {
                registry.default_template().source()
            } else {
                registry.lookup(code).source()
            };
            eprint!("{}", warning.format(source, code));
        }
        if !warnings.is_empty() {
            std::process::exit(1);
        }
        println!("{} templates OK", registry.len());
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut request: FormatRequest = match serde_json::from_str(&source) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: invalid request: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(output) = cli.output {
        request.output = output;
    }
    if let Some(country) = cli.country {
        request.country_code = country;
    }
    tracing::debug!(country_code = %request.country_code, output = ?request.output, "formatting request");

    let formatted = AddressFormatter::new(&registry).format(&request);
    match formatted {
        Formatted::Element(descriptor) if cli.realize => match descriptor.realize_with(&registry) {
            Ok(host) => println!("{}", host.content()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        other => println!("{}", other),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_intro() {
    println!(
        r#"Intl Address - format postal addresses by country

USAGE:
    intl-address [OPTIONS] [FILE]
    echo '<request json>' | intl-address

OPTIONS:
    -o, --output       string, html or element
    -c, --country      Override the country code
    -t, --templates    Template overrides (TOML file)
    -l, --list         List countries with their own template
    --check            Lint all templates
    --realize          Realize element output into markup
    -v, --verbose      Debug logging
    -h, --help         Print help

QUICK START:
    echo '{{"countryCode": "DE", "address": {{"street": "Hauptstraße", "houseNumber": "42", "postalCode": "10115", "city": "Berlin"}}}}' | intl-address

REQUEST:
    countryCode   required, case-insensitive
    locale        optional
    address       name, company, houseNumber, street, street2, city,
                  state, postalCode, country, taxNumber
    output        string (default), html or element"#
    );
}
