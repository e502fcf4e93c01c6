//! Payroll CLI
//!
//! Interactive payroll record-keeper backed by SQLite

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use payroll_core::logging_facility;
use payroll_store::{db, seed, EmployeeRepo};
use rusqlite::Connection;

mod commands;
mod config;
mod menu;
mod prompt;

use config::{AppConfig, LogProfileArg, DEFAULT_DB_PATH};

#[derive(Debug, Parser)]
#[command(name = "payroll")]
#[command(about = "Employee payroll record-keeper", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "PAYROLL_DB", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Do not insert demonstration rows into an empty table
    #[arg(long, global = true, env = "PAYROLL_NO_SEED")]
    no_seed: bool,

    /// Log output format and default verbosity
    #[arg(
        long,
        global = true,
        env = "PAYROLL_LOG_PROFILE",
        value_enum,
        default_value_t = LogProfileArg::Console
    )]
    log_profile: LogProfileArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print employee reports without entering the menu
    Report(commands::report::ReportArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::new(cli.db, cli.no_seed, cli.log_profile);
    logging_facility::init(config.log_profile);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_store(config)?;

    match command {
        Some(Commands::Report(args)) => commands::report::execute(args, &conn),
        None => {
            println!("Connected to the database!");
            let stdin = std::io::stdin();
            let mut session = menu::Session::new(conn, stdin.lock(), std::io::stdout());
            session.run()
        }
    }
}

/// Open the database, bring the schema up to date, and seed an empty table
fn open_store(config: &AppConfig) -> Result<Connection, Box<dyn std::error::Error>> {
    let mut conn = db::open(&config.db_path)?;
    EmployeeRepo::ensure_schema(&mut conn)?;

    if config.seed_on_empty && seed::seed_if_empty(&mut conn)? {
        tracing::info!(db = %config.db_path.display(), "seeded empty employee table");
    }

    Ok(conn)
}
