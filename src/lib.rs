#![cfg_attr(not(feature = "std"), no_std)]

//! sheetsift - Spreadsheet ingestion, filtering and export for chat-style data sessions
//!
//! This crate turns uploaded Excel/CSV bytes into ordered records, lets you
//! search them with case-insensitive substring queries, and serializes the
//! accumulated set back out as CSV or JSON. Format detection is content-based
//! (magic numbers), never filename-based.
//!
//! # Quick Start
//!
//! ```rust
//! use sheetsift::{IngestorBuilder, Query, Session};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create an ingestor with default settings
//!     let ingestor = IngestorBuilder::new().build()?;
//!
//!     // A session accumulates records across uploads
//!     let mut session = Session::new();
//!     session.upload_bytes(&ingestor, b"name,city\nAlice,Tokyo\nBob,Osaka", "people.csv")?;
//!
//!     // Search all fields, case-insensitively
//!     let hits = session.search(&Query::all("tokyo".to_string()));
//!     assert_eq!(hits.len(), 1);
//!
//!     // Export the full accumulated set as a CSV download artifact
//!     let download = session.export_csv();
//!     assert_eq!(download.filename, "extracted_data.csv");
//!
//!     Ok(())
//! }
//! ```
//!
//! For file sources, pass any `Read` implementation:
//!
//! ```rust,no_run
//! use std::fs::File;
//! use sheetsift::{IngestorBuilder, Session};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ingestor = IngestorBuilder::new().build()?;
//! let mut session = Session::new();
//!
//! let input = File::open("report.xlsx")?;
//! session.upload(&ingestor, input, "report.xlsx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust
//! use sheetsift::{DateFormat, IngestorBuilder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Render Excel date cells in a custom format, cap inputs at 10 MiB
//!     let ingestor = IngestorBuilder::new()
//!         .with_date_format(DateFormat::Custom("%Y年%m月%d日".to_string()))
//!         .with_max_input_size(10 * 1024 * 1024)
//!         .build()?;
//!     # let _ = ingestor;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Standalone Pieces
//!
//! The filter, serializers and preview renderer are plain functions over
//! record slices and can be used without a session:
//!
//! ```rust
//! use sheetsift::{filter, render_preview, to_csv_string, Query};
//!
//! # fn main() -> Result<(), sheetsift::IngestError> {
//! let ingestor = sheetsift::IngestorBuilder::new().build()?;
//! let records = ingestor.ingest_bytes(b"item,price\npen,120\nbook,980", "items.csv")?;
//!
//! let hits = filter(&records, &Query::all("pen".to_string()));
//! assert_eq!(to_csv_string(&hits), "item,price\npen,120");
//!
//! let table = render_preview(&records, 10);
//! assert!(table.contains("| pen"));
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod error;
mod export;
mod filter;
mod formatter;
mod ingest;
mod preview;
mod security;
mod session;
mod types;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod wasm;

// 公開API
pub use api::{DateFormat, ExportFormat, Query, QueryField, SourceFormat};
pub use builder::{Ingestor, IngestorBuilder};
pub use error::IngestError;
pub use export::{
    export_string, export_to_writer, to_csv_string, to_json_string, write_csv, write_json,
    Download, DOWNLOAD_CONTENT_TYPE, DOWNLOAD_FILENAME,
};
pub use filter::filter;
pub use ingest::detect_format;
pub use preview::render_preview;
pub use session::{Message, MessageRole, Session};
pub use types::{Record, RecordSet, Value};

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use wasm::WasmSession;
