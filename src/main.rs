use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;

#[derive(Parser, Debug)]
#[command(author, version, about = "Internal assessment marks calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one form and print the breakdown.
    Calc(cmd::calc::CalcArgs),
    /// List the fields of a scheme's form.
    Fields(cmd::fields::FieldsArgs),
    /// Fill in and score forms interactively.
    Session(cmd::session::SessionArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    let outcome = match cli.command {
        Commands::Calc(args) => cmd::calc::run(args),
        Commands::Fields(args) => cmd::fields::run(args),
        Commands::Session(args) => cmd::session::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
