use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use chartag::cli::{Action, Cli, validate_pdf_path};
use chartag::{print_properties, read_properties, write_properties};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> chartag::Result<()> {
    let file = cli.action.file();
    validate_pdf_path(file)?;

    let props = match &cli.action {
        Action::Read { .. } => read_properties(file)?,
        Action::Write(args) => {
            write_properties(file, &args.tags().to_properties(), args.strategy())?;
            read_properties(file)?
        }
    };
    print_properties(&mut io::stdout().lock(), file, &props)?;
    Ok(())
}
