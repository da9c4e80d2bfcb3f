use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendtrack::config::DataPaths;
use spendtrack::shell::Shell;
use spendtrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendtrack",
    version,
    about = "Flat-file personal expense tracker",
    long_about = "spendtrack is a single-user personal finance tracker. Register or \
                  log in, record dated expenses by category, and review spending \
                  against fixed budget thresholds. All data lives in flat CSV files."
)]
struct Cli {
    /// Data directory (overrides SPENDTRACK_DATA_DIR and the ./data default)
    #[arg(long, value_name = "DIR", env = "SPENDTRACK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved data paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => DataPaths::with_base_dir(dir),
        None => DataPaths::new(),
    };

    match cli.command {
        Some(Commands::Config) => {
            println!("spendtrack configuration");
            println!("========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Users file:     {}", paths.users_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
        }
        None => {
            let storage = Storage::new(paths)?;
            let outcome = storage.load_all()?;
            if outcome.is_degraded() {
                eprintln!(
                    "warning: skipped {} malformed line(s) in data files",
                    outcome.skipped
                );
            }

            let stdin = io::stdin();
            let password_from_tty = stdin.is_terminal();
            let mut shell = Shell::new(storage, stdin.lock(), io::stdout(), password_from_tty);
            shell.run()?;
        }
    }

    Ok(())
}
