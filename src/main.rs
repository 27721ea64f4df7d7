use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finledger::cli::{handle_record_command, run_menu, RecordCommands};
use finledger::config::{LedgerPaths, DATA_FILE_ENV};
use finledger::logging::init_tracing;
use finledger::storage::{LoadStatus, RecordStore};

#[derive(Parser)]
#[command(
    name = "finledger",
    version,
    about = "Personal finance ledger backed by a CSV file",
    long_about = "finledger records income (доход) and expense (расход) entries in a \
                  CSV file, lets you edit them by number, shows the running balance \
                  and searches by category, date or amount. Run without a subcommand \
                  for the interactive menu."
)]
struct Cli {
    /// Ledger CSV file
    #[arg(short, long, global = true, env = DATA_FILE_ENV)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    #[command(alias = "ui")]
    Menu,

    #[command(flatten)]
    Record(RecordCommands),

    /// Show the resolved ledger file
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = LedgerPaths::resolve(cli.file);

    if let Some(Commands::Config) = cli.command {
        println!("finledger configuration");
        println!("=======================");
        println!("Ledger file: {}", paths.data_file().display());
        println!("Exists:      {}", paths.is_initialized());
        return Ok(());
    }

    let (mut store, status) = RecordStore::open_paths(&paths)?;
    if status == LoadStatus::Missing {
        eprintln!(
            "Ledger file {} not found; starting with an empty ledger.",
            paths.data_file().display()
        );
    }

    match cli.command {
        Some(Commands::Record(cmd)) => handle_record_command(&mut store, cmd)?,
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            run_menu(&mut store, stdin.lock(), &mut io::stdout())?;
        }
        Some(Commands::Config) => {}
    }

    Ok(())
}
