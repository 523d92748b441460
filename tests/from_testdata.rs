use cash_register_engine::types::OutputRecord;
use cash_register_engine::{process_register_feed, DEFAULT_BATCH_SIZE};
use std::error::Error;
use std::fs;
use std::io;
use std::path;

fn run_test_from_directory(directory: path::PathBuf) -> Result<(), Box<dyn Error>> {
    let feed_path = directory.join("feed.csv");
    let results_path = directory.join("results.csv");

    let feed_file = fs::File::open(&feed_path).expect(&format!(
        "Failed to open feed file '{}'",
        feed_path.to_str().unwrap_or("<invalid path>")
    ));

    // Write results to in-memory buffer
    let mut output_buf = io::Cursor::new(Vec::new());
    process_register_feed(feed_file, &mut output_buf, DEFAULT_BATCH_SIZE);

    // Re-deserialize actual results from output buffer
    output_buf.set_position(0);
    let actual_results_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(&mut output_buf);

    // Read expected results from file
    let expected_results_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&results_path)
        .expect(&format!(
            "Failed to open results file '{}'",
            results_path.to_str().unwrap_or("<invalid path>")
        ));

    // Be reckless: deserialize whole files into memory, failing if any error is encountered
    let mut expected_results: Vec<OutputRecord> = expected_results_reader
        .into_deserialize()
        .collect::<Result<Vec<_>, _>>()?;
    let mut actual_results: Vec<OutputRecord> = actual_results_reader
        .into_deserialize()
        .collect::<Result<Vec<_>, _>>()?;

    // Sort rows by tx id before comparing since the order of rows is not significant
    expected_results.sort_by_key(|rec| rec.tx);
    actual_results.sort_by_key(|rec| rec.tx);

    assert_eq!(
        expected_results,
        actual_results,
        "test failure in {:?}",
        directory.to_str().unwrap_or("<invalid path>")
    );

    Ok(())
}

#[test]
fn run_tests_from_testdata() -> Result<(), Box<dyn Error>> {
    let testdata_path = path::Path::new("testdata");

    for directory in fs::read_dir(testdata_path).unwrap() {
        let test_path = directory.unwrap().path();
        println!(
            "Running test from directory: {}",
            test_path.to_str().unwrap_or("<invalid path>")
        );
        run_test_from_directory(test_path)?;
    }

    Ok(())
}
