//! markdown2html CLI
//!
//! `markdown2html <input> <output>` converts one Markdown file to HTML.

mod cli;

use clap::Parser;
use env_logger::Env;
use markdown2html_core::{ConvertError, Converter, convert_file};

use cli::Cli;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit 1; help and version exit 0.
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ConvertError> {
    log::debug!(
        "converting {} to {}",
        cli.input.display(),
        cli.output.display()
    );
    convert_file(&cli.input, &cli.output, &Converter::default())
}
