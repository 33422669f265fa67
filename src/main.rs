use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use vendo::loader::load_catalog;
use vendo::machine::Machine;
use vendo::reader::{Request, SessionReader};
use vendo::writer::StateWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Inventory CSV file seeding the catalog
    inventory: PathBuf,

    /// Session script CSV of deposit/vend requests
    session: PathBuf,

    /// Balance already held by the machine before the session starts
    #[arg(long)]
    balance: Option<Decimal>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = load_catalog(&cli.inventory).into_diagnostic()?;
    let mut machine = Machine::new(catalog);
    if let Some(amount) = cli.balance {
        machine.deposit(amount).into_diagnostic()?;
    }

    // Apply the session script
    let file = File::open(&cli.session).into_diagnostic()?;
    let reader = SessionReader::new(file);
    for request in reader.requests() {
        match request {
            Ok(Request::Deposit { amount }) => {
                if let Err(e) = machine.deposit(amount) {
                    eprintln!("Request rejected: {}", e);
                }
            }
            Ok(Request::Vend {
                selection,
                quantity,
            }) => {
                if let Err(e) = machine.vend(selection, quantity) {
                    eprintln!("Request rejected: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading request: {}", e);
            }
        }
    }

    // Output final state
    let stdout = io::stdout();
    let mut writer = StateWriter::new(stdout.lock());
    writer.write_state(&machine).into_diagnostic()?;
    eprintln!("unspent balance: {}", machine.balance());

    Ok(())
}
