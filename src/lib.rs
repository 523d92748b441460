mod conversions;
pub mod currency;
pub mod drawer;
mod handlers;
pub mod rand;
pub mod register;
pub mod test_utils;
pub mod types;
mod validate;

use csv::StringRecord;
use rayon::prelude::*;
use std::error::Error;
use std::io;
use std::sync::mpsc::{sync_channel, SyncSender};
use std::thread;

use types::{OutputRecord, RegisterRecord};

/// Default number of feed records deserialized per batch.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Read CSV string records from a stream and send them
/// across a channel to be deserialized elsewhere.
fn read_string_records_inner<R: io::Read + Send>(
    input: R,
    headers_snd: SyncSender<StringRecord>,
    records_snd: SyncSender<Vec<StringRecord>>,
    batch_size: usize,
) -> Result<(), Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?;
    headers_snd.send(headers.clone())?;

    let mut records_iter = reader.records();

    loop {
        let batch: Vec<_> = (&mut records_iter)
            .take(batch_size)
            .filter_map(Result::ok)
            .collect();
        if batch.len() > 0 {
            records_snd.send(batch)?;
        } else {
            break;
        }
    }

    Ok(())
}

/// Thin error-handling wrapper around `read_string_records_inner`
fn read_string_records<R: io::Read + Send>(
    input: R,
    headers_snd: SyncSender<StringRecord>,
    records_snd: SyncSender<Vec<StringRecord>>,
    batch_size: usize,
) {
    if let Err(err) = read_string_records_inner(input, headers_snd, records_snd, batch_size) {
        log::error!("Error while reading: {}", err);
    }
}

/// Deserialize a single CSV string record.
fn deserialize_record(record: StringRecord, headers: &StringRecord) -> Option<RegisterRecord> {
    match record.deserialize(Some(headers)) {
        Ok(rec) => Some(rec),
        Err(err) => {
            log::error!("Error while deserializing: {}", err);
            None
        }
    }
}

/// Set the number of workers in rayon's global
/// thread pool to dedicate to CSV deserialization.
pub fn configure_deserialize_workers(num_workers: Option<usize>) {
    // Default to half of the available logical cores
    let num_threads = num_workers.unwrap_or_else(|| num_cpus::get() / 2);

    let config_result = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global();

    if let Err(err) = config_result {
        log::error!("Error configuring rayon thread pool: {}", err);
    }
}

/// Read register feed records from an input stream and write one change
/// result per record to an output stream. Records are deserialized in
/// parallel, but computed serially in feed order.
///
/// A record that fails to deserialize or validate is logged and skipped;
/// it never aborts the rest of the feed.
pub fn process_register_feed<R: io::Read + Send + 'static, W: io::Write>(
    input_stream: R,
    output_stream: &mut W,
    batch_size: usize,
) {
    // Maximum number of batches to keep in the channel at once.
    // Once this limit is reached, IO will pause until one is processed.
    let max_batches = 1;

    let (records_snd, records_rcv) = sync_channel::<Vec<StringRecord>>(max_batches);
    let (headers_snd, headers_rcv) = sync_channel::<StringRecord>(1);

    let reader_handle = thread::spawn(move || {
        read_string_records(input_stream, headers_snd, records_snd, batch_size)
    });

    let mut writer = csv::Writer::from_writer(output_stream);

    if let Ok(headers) = headers_rcv.recv() {
        for batch in records_rcv {
            let record_batch: Vec<_> = batch
                .into_par_iter()
                .filter_map(|record| deserialize_record(record, &headers))
                .collect();

            for record in record_batch {
                match handlers::handle_record(&record) {
                    Ok(output) => write_result(&mut writer, &output),
                    Err(err) => {
                        log::error!("Error while handling record {}: {}", record.tx_id, err)
                    }
                }
            }
        }
    } else {
        log::error!("Failed to get CSV headers from reader thread");
    }

    if let Err(err) = writer.flush() {
        log::error!("error flushing serialized change results: {}", err);
    }

    // Should already have finished, but wait just in case
    if let Err(err) = reader_handle.join() {
        log::error!("Failed to join reader thread: {:?}", err);
    }
}

/// Write a single change result to the output stream.
fn write_result<W: io::Write>(writer: &mut csv::Writer<W>, output: &OutputRecord) {
    if let Err(err) = writer.serialize(output) {
        log::error!("error writing serialized change result: {}", err);
    }
}
