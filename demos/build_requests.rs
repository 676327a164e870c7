//! Example: Building read requests
//!
//! Run with: RUST_LOG=plc_read_request=trace cargo run --example build_requests
//!
//! This example demonstrates:
//! - How the builder picks single, typed bulk, or generic requests
//! - Checked finalizers and the errors they return
//! - Handing a request to a reader

use std::fmt;

use plc_read_request::{
    DataType, PlcReader, ReadItems, ReadRequest, ReadRequestBuilder, RequestError,
};
use tracing_subscriber::EnvFilter;

/// Word address in a PLC memory area, e.g. `DM100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WordAddress {
    area: &'static str,
    word: u16,
}

impl WordAddress {
    fn new(area: &'static str, word: u16) -> Self {
        Self { area, word }
    }
}

impl fmt::Display for WordAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.area, self.word)
    }
}

/// Prints each item instead of talking to a device.
struct PrintingReader;

impl PlcReader<WordAddress> for PrintingReader {
    type Response = usize;
    type Error = RequestError;

    fn read(&self, request: &ReadRequest<WordAddress>) -> Result<usize, RequestError> {
        println!("  executing {} request", request.kind());
        for (index, item) in request.items().iter().enumerate() {
            println!("    [{}] {}", index, item);
        }
        Ok(request.item_count())
    }
}

fn main() -> plc_read_request::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let reader = PrintingReader;

    // =========================================================================
    // Shape selection
    // =========================================================================

    println!("=== Shape selection ===\n");

    let single = ReadRequest::builder()
        .add_item(DataType::Float32, WordAddress::new("DM", 100))
        .finalize()?;
    reader.read(&single)?;

    let bulk = ReadRequest::builder()
        .add_item(DataType::Int16, WordAddress::new("DM", 0))
        .add_item(DataType::Int16, WordAddress::new("DM", 1))
        .add_array_item(DataType::Int16, WordAddress::new("DM", 10), 4)?
        .finalize()?;
    reader.read(&bulk)?;

    let mixed = ReadRequest::builder()
        .add_item(DataType::Bool, WordAddress::new("CIO", 0))
        .add_item(DataType::Int32, WordAddress::new("DM", 200))
        .add_item(DataType::String, WordAddress::new("DM", 300))
        .finalize()?;
    reader.read(&mixed)?;

    // =========================================================================
    // Checked finalizers
    // =========================================================================

    println!("\n=== Checked finalizers ===\n");

    let temperature = ReadRequestBuilder::new()
        .add_item(DataType::Float32, WordAddress::new("DM", 100))
        .finalize_as::<f32>()?;
    println!("  single {} read from {}", temperature.data_type(), temperature.item());

    let counters = ReadRequestBuilder::new()
        .add_item(DataType::UInt32, WordAddress::new("HR", 0))
        .add_item(DataType::UInt32, WordAddress::new("HR", 2))
        .finalize_bulk_as::<u32>()?;
    println!("  {} {} counters", counters.item_count(), counters.data_type());

    let attempts: [(&str, plc_read_request::Result<()>); 3] = [
        (
            "empty builder",
            ReadRequestBuilder::<WordAddress>::new().finalize().map(drop),
        ),
        (
            "wrong expected type",
            ReadRequestBuilder::new()
                .add_item(DataType::Int16, WordAddress::new("DM", 0))
                .finalize_as::<f64>()
                .map(drop),
        ),
        (
            "mixed typed bulk",
            ReadRequestBuilder::new()
                .add_item(DataType::Int16, WordAddress::new("DM", 0))
                .add_item(DataType::Bool, WordAddress::new("CIO", 1))
                .finalize_bulk_as::<i16>()
                .map(drop),
        ),
    ];

    for (label, result) in attempts {
        match result {
            Ok(()) => println!("  {}: ok", label),
            Err(e) => println!("  {}: {}", label, e),
        }
    }

    Ok(())
}
