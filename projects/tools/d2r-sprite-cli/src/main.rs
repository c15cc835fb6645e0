mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Inspect, export and import Diablo II: Resurrected sprite files.
/// Set RUST_LOG (e.g. RUST_LOG=debug) for more detailed output.
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Info(commands::info::InfoCmd),
    Export(commands::export::ExportCmd),
    Import(commands::import::ImportCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Info(cmd) => {
            commands::info::handle_info_command(cmd)?;
        }
        Commands::Export(cmd) => {
            commands::export::handle_export_command(cmd)?;
        }
        Commands::Import(cmd) => {
            commands::import::handle_import_command(cmd)?;
        }
    }

    Ok(())
}
