use std::io;
use std::process::exit;
use structopt::StructOpt;

use cash_register_engine::currency::Amount;
use cash_register_engine::rand::generate_random_register_feed;
use cash_register_engine::types::TransactionId;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "generate-register-feed",
    version = "0.1",
    about = "Generate random register transactions for the change engine."
)]
struct CliOpts {
    /// Number of records to generate.
    /// Defaults to infinite (run until cancelled)
    #[structopt(short, long)]
    records: Option<TransactionId>,

    /// Maximum purchase price.
    #[structopt(short, long, default_value = "200.00")]
    price: Amount,

    /// Maximum units of each denomination stocked in the drawer.
    #[structopt(short, long, default_value = "50")]
    stock: u32,
}

fn generate_feed(num_records: Option<TransactionId>, max_price: Amount, max_stock: u32) {
    // Write to stdout
    let output = io::stdout();
    let mut writer = csv::Writer::from_writer(output);

    let seq = generate_random_register_feed(num_records, max_price, max_stock);
    let mut num_generated = 0;
    for record in seq {
        if let Err(err) = writer.serialize(record) {
            log::error!("Error writing generated record: {}", err);
        } else {
            num_generated += 1;
        }
    }

    if let Some(desired) = num_records {
        if num_generated < desired {
            log::error!("Only generated {} / {} records.", num_generated, desired);
            exit(1);
        }
    }
}

fn main() {
    // Allow log level to be set via env vars without recompiling
    env_logger::init();

    // Parse arguments
    let CliOpts {
        records,
        price,
        stock,
    } = CliOpts::from_args();

    generate_feed(records, price, stock);
}
