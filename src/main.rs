use std::fs;
use std::io;
use std::path;

use structopt::StructOpt;

use cash_register_engine::{configure_deserialize_workers, process_register_feed};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "cash-register-engine",
    version = "0.1",
    about = "Compute exact change for a feed of register transactions and write drawer statuses as output"
)]
struct CliOpts {
    /// Path to register feed CSV file
    #[structopt(parse(from_os_str))]
    input_csv_path: path::PathBuf,

    /// Number of feed records to deserialize per batch
    #[structopt(short, long, default_value = "1000")]
    batch_size: usize,

    /// Number of worker threads to dedicate to CSV deserialization.
    /// Defaults to half of the available logical cores.
    #[structopt(short, long)]
    workers: Option<usize>,
}

fn main() {
    // Allow log level to be set via env vars without recompiling
    env_logger::init();

    let opts = CliOpts::from_args();

    configure_deserialize_workers(opts.workers);

    // Open file and process the feed, writing to stdout
    if let Ok(input_file) = fs::File::open(&opts.input_csv_path) {
        process_register_feed(input_file, &mut io::stdout(), opts.batch_size);
    } else {
        log::error!(
            "Could not open input file '{}'",
            &opts.input_csv_path.to_str().unwrap_or("<invalid path>")
        );
    }
}
