//! Basic Pipeline Example
//!
//! This example demonstrates the most basic usage of sheetsift:
//! uploading a spreadsheet into a session, previewing the records,
//! and saving the CSV download artifact.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example basic_pipeline -- input.xlsx
//! cargo run --example basic_pipeline -- input.csv alice
//! ```
//!
//! The optional second argument searches all fields for the given text.

use std::fs::File;

use sheetsift::{IngestorBuilder, Query, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get input file path from command line arguments or use default
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample.xlsx".to_string());

    println!("Loading {}...", input_path);

    // Create an ingestor with default settings and an empty session
    let ingestor = IngestorBuilder::new().build()?;
    let mut session = Session::new();

    // Open input file
    let input = File::open(&input_path).map_err(|e| {
        eprintln!("Error: Could not open input file '{}'", input_path);
        eprintln!("  {}", e);
        eprintln!("\nHint: Provide a path to an existing Excel or CSV file.");
        e
    })?;

    // Upload into the session
    let added = session.upload(&ingestor, input, &input_path)?;
    println!("Loaded {} record(s) from {}", added, input_path);

    // Show the first few records as a markdown table
    println!("\n{}", session.preview(5));

    // Optionally search all fields for the second argument
    if let Some(term) = std::env::args().nth(2) {
        let hits = session.search(&Query::all(term.clone()));
        println!("\n{} record(s) match \"{}\"", hits.len(), term);
    }

    // Save the CSV download artifact
    let download = session.export_csv();
    std::fs::write(download.filename, &download.body)?;
    println!("\nOutput written to: {}", download.filename);

    Ok(())
}
