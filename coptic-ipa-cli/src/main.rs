use clap::Parser;
use coptic_ipa_cli::commands::Commands;
use std::process::ExitCode;

/// Dialect-aware Coptic phonetic transcription and syllabification
#[derive(Debug, Parser)]
#[command(name = "coptic-ipa")]
#[command(about = "Dialect-aware Coptic phonetic transcription and syllabification")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
