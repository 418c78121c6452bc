//! Campus activity ledger demo CLI.
//!
//! Every invocation starts a fresh session: one ledger is created, seeded
//! with the portal's mock history, and then queried.
//!
//! Usage:
//!   cargo run -p demo -- show
//!   cargo run -p demo -- history --author student-001
//!   cargo run -p demo -- category leave
//!   cargo run -p demo -- verify
//!   cargo run -p demo -- --config ledger.toml --format json show
//!   cargo run -p demo -- tamper

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campus_activity::mock_data;
use campus_contracts::{Category, LedgerError, LedgerResult, Record};
use campus_ledger::{hash_record, verify_chain, Ledger, LedgerConfig};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Campus activity ledger demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Campus activity ledger demo",
    long_about = "Seeds an in-memory activity ledger with the portal's mock history and\n\
                  shows the chain, filtered history, and chain verification."
)]
struct Cli {
    /// TOML ledger configuration (e.g. `digest = "checksum"`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Print the whole chain, genesis first.
    Show,
    /// Print the records written by one author.
    History {
        #[arg(long)]
        author: String,
    },
    /// Print the records in one category (leave, event, resource).
    Category { name: String },
    /// Verify the chain; exits with status 1 when it is compromised.
    Verify,
    /// Edit an exported copy of the chain and show that verification catches it.
    Tamper,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see every append.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but the chain failed to verify.
fn run(cli: &Cli) -> LedgerResult<bool> {
    let config = match &cli.config {
        Some(path) => LedgerConfig::from_file(path)?,
        None => LedgerConfig::default(),
    };

    let ledger = Ledger::with_config(config);
    let seeded = mock_data::seed_session(&ledger)?;
    info!(seeded = seeded.len(), "session ledger ready");

    match &cli.command {
        Command::Show => print_records(&ledger.chain(), cli.format)?,
        Command::History { author } => print_records(&ledger.records_by_author(author), cli.format)?,
        Command::Category { name } => {
            let category: Category = name.parse()?;
            print_records(&ledger.records_by_category(category), cli.format)?;
        }
        Command::Verify => return print_verification(&ledger, cli.format),
        Command::Tamper => run_tamper(&ledger)?,
    }

    Ok(true)
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn print_records(records: &[Record], format: Format) -> LedgerResult<()> {
    match format {
        Format::Json => println!("{}", to_json(&records)?),
        Format::Text => {
            if records.is_empty() {
                println!("(no records)");
            }
            for record in records {
                print_record(record);
            }
        }
    }
    Ok(())
}

fn print_record(record: &Record) {
    println!(
        "#{:<3} {}  [{}] {}",
        record.sequence_id,
        record.timestamp.format("%Y-%m-%d %H:%M:%S"),
        record.category,
        record.action
    );
    println!("     by   {} ({})", record.author_name, record.author_id);
    println!("     data {}", record.payload);
    println!("     hash {}", record.hash);
    println!("     prev {}", record.previous_hash);
}

fn print_verification(ledger: &Ledger, format: Format) -> LedgerResult<bool> {
    let result = ledger.verify_detailed();
    let valid = result.is_ok();

    match format {
        Format::Json => {
            let report = json!({
                "valid": valid,
                "records": ledger.len(),
                "head_hash": ledger.head_hash(),
                "violation": result.err().map(|v| v.to_string()),
            });
            println!("{}", to_json(&report)?);
        }
        Format::Text => match result {
            Ok(()) => println!(
                "Chain verified: {} records, head {}",
                ledger.len(),
                ledger.head_hash()
            ),
            Err(violation) => println!("Chain compromised: {}", violation),
        },
    }

    Ok(valid)
}

fn run_tamper(ledger: &Ledger) -> LedgerResult<()> {
    let digest = ledger.digest();
    let mut chain = ledger.chain();
    if chain.len() < 3 {
        return Err(LedgerError::Validation {
            reason: "tamper demo needs at least two records after genesis".to_string(),
        });
    }

    println!("Original chain: {}", describe(verify_chain(&chain, digest)));

    chain[1].payload = json!({ "leaveId": "leave-001", "status": "rejected" });
    println!("Edited payload of record 1: {}", describe(verify_chain(&chain, digest)));

    chain[1].hash = hash_record(digest, &chain[1]);
    println!("Also recomputed its hash:   {}", describe(verify_chain(&chain, digest)));

    println!("Session ledger untouched:   {}", describe(ledger.verify_detailed()));
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn describe(result: Result<(), campus_ledger::ChainViolation>) -> String {
    match result {
        Ok(()) => "valid".to_string(),
        Err(violation) => format!("INVALID ({})", violation),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> LedgerResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| LedgerError::Serialization {
        reason: e.to_string(),
    })
}
