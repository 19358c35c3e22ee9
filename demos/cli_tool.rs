//! CLI Tool Example
//!
//! This example demonstrates how to build a command-line tool
//! using sheetsift for extracting records from Excel and CSV files.

use std::fs::File;
use std::io::{self, Write};
use std::process;

use sheetsift::{
    export_to_writer, filter, render_preview, ExportFormat, IngestError, IngestorBuilder, Query,
    QueryField,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input.xlsx|input.csv> [options]", args[0]);
        eprintln!("\nOptions:");
        eprintln!("  --find <text>       Keep only records matching the text");
        eprintln!("  --column <name>     Restrict the search to one column ('all' = every field)");
        eprintln!("  --json              Output JSON instead of CSV");
        eprintln!("  --preview <n>       Print a markdown preview of n records and exit");
        eprintln!("  --output <path>     Write output to a file instead of stdout");
        eprintln!("\nExamples:");
        eprintln!("  {} input.xlsx", args[0]);
        eprintln!("  {} input.csv --find tokyo --column city", args[0]);
        eprintln!("  {} input.xlsx --json --output records.json", args[0]);
        eprintln!("  {} input.xlsx --preview 10", args[0]);
        process::exit(1);
    }

    let input_path = &args[1];

    // Parse options
    let mut format = ExportFormat::Csv;
    let mut find: Option<String> = None;
    let mut field = QueryField::All;
    let mut preview_rows: Option<usize> = None;
    let mut output_path: Option<String> = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--find" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --find requires a value");
                    process::exit(1);
                }
                find = Some(args[i + 1].clone());
                i += 2;
            }
            "--column" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --column requires a value");
                    process::exit(1);
                }
                field = QueryField::from_label(&args[i + 1]);
                i += 2;
            }
            "--json" => {
                format = ExportFormat::Json;
                i += 1;
            }
            "--csv" => {
                format = ExportFormat::Csv;
                i += 1;
            }
            "--preview" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --preview requires a value");
                    process::exit(1);
                }
                let rows = args[i + 1].parse::<usize>().unwrap_or_else(|_| {
                    eprintln!("Error: Invalid preview row count: {}", args[i + 1]);
                    process::exit(1);
                });
                preview_rows = Some(rows);
                i += 2;
            }
            "--output" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --output requires a value");
                    process::exit(1);
                }
                output_path = Some(args[i + 1].clone());
                i += 2;
            }
            _ => {
                eprintln!("Error: Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
    }

    match run(input_path, find, field, format, preview_rows, &output_path) {
        Ok(_) => {
            if let Some(path) = output_path {
                eprintln!("Output written to: {}", path);
            }
        }
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    }
}

fn run(
    input_path: &str,
    find: Option<String>,
    field: QueryField,
    format: ExportFormat,
    preview_rows: Option<usize>,
    output_path: &Option<String>,
) -> Result<(), IngestError> {
    // Build ingestor with default settings
    let ingestor = IngestorBuilder::new().build()?;

    // Open and ingest the input file
    let input = File::open(input_path)?;
    let records = ingestor.ingest(input, input_path)?;

    // Apply the search filter if requested
    let selected = match find {
        Some(text) => filter(&records, &Query::new(text, field)),
        None => records,
    };

    // Preview mode prints a markdown table and skips the export
    if let Some(rows) = preview_rows {
        println!("{}", render_preview(&selected, rows));
        return Ok(());
    }

    // Handle output
    if let Some(path) = output_path {
        let mut output = File::create(path)?;
        export_to_writer(&selected, format, &mut output)?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        export_to_writer(&selected, format, &mut handle)?;
        handle.flush()?;
    }

    Ok(())
}

fn handle_error(error: IngestError) {
    match error {
        IngestError::IoFailure(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        IngestError::MalformedDocument(msg) => {
            eprintln!("Parse Error: {}", msg);
            eprintln!("The file may not be a valid Excel or CSV file, or may be corrupted.");
        }
        IngestError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
            eprintln!("The file exceeds the configured input size ceiling.");
        }
        IngestError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
            eprintln!("Please check the builder settings.");
        }
    }
}
