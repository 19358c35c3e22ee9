//! Custom Configuration Example
//!
//! This example demonstrates how to use custom configuration options
//! such as the date output format and the input size ceiling.

use std::fs::File;

use sheetsift::{to_json_string, DateFormat, IngestorBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get input file path from command line arguments or use default
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample.xlsx".to_string());

    println!("Loading {} with custom settings...", input_path);

    // Create an ingestor with custom settings
    let ingestor = IngestorBuilder::new()
        // Use Japanese date format for date cells
        .with_date_format(DateFormat::Custom("%Y年%m月%d日".to_string()))
        // Reject inputs above 16 MB before decoding
        .with_max_input_size(16 * 1024 * 1024)
        .build()?;

    // Open and ingest the input file
    let input = File::open(&input_path)?;
    let records = ingestor.ingest(input, &input_path)?;

    println!("Loaded {} record(s)\n", records.len());
    println!("{}", to_json_string(&records)?);

    println!("\nCustom settings used:");
    println!("  - Date format: Japanese (YYYY年MM月DD日)");
    println!("  - Input size ceiling: 16 MB");

    Ok(())
}
