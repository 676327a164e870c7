//! # PLC Read Request Library
//!
//! Type-checked construction of read requests for PLC client libraries.
//!
//! This is a **construction-only** library: no I/O, no address parsing, no
//! wire encoding. A caller adds `(data type, address[, count])` items to a
//! builder and finalizes it into an immutable request, which a protocol
//! client then executes through the [`PlcReader`] trait.
//!
//! ## Features
//!
//! - **Narrowest shape** — one item becomes a [`SingleReadRequest`], two or
//!   more items of one type a [`TypedBulkReadRequest`], mixed types a
//!   [`GenericReadRequest`]
//! - **Checked finalizers** — assert the expected shape and type up front and
//!   fail early with a descriptive error
//! - **Opaque addresses** — any address type the protocol layer uses
//! - **No panics** — all errors returned as `Result<T, RequestError>`
//!
//! ## Quick Start
//!
//! ```
//! use plc_read_request::{DataType, ReadItems, ReadRequest};
//!
//! fn main() -> plc_read_request::Result<()> {
//!     // Two INT16 reads: a typed bulk request
//!     let request = ReadRequest::builder()
//!         .add_item(DataType::Int16, "DM100")
//!         .add_item(DataType::Int16, "DM101")
//!         .finalize()?;
//!
//!     match &request {
//!         ReadRequest::Single(single) => println!("one {}", single.data_type()),
//!         ReadRequest::TypedBulk(bulk) => println!("{} x {}", bulk.item_count(), bulk.data_type()),
//!         ReadRequest::Generic(generic) => println!("{} mixed items", generic.item_count()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Checked Finalizers
//!
//! | Finalizer | Items | Returns |
//! |-----------|-------|---------|
//! | [`finalize`](ReadRequestBuilder::finalize) | 1+ | [`ReadRequest`] |
//! | [`finalize_bulk`](ReadRequestBuilder::finalize_bulk) | 2+ | [`ReadRequest`] |
//! | [`finalize_typed`](ReadRequestBuilder::finalize_typed) | exactly 1 | [`SingleReadRequest`] |
//! | [`finalize_typed_bulk`](ReadRequestBuilder::finalize_typed_bulk) | 2+, one type | [`TypedBulkReadRequest`] |
//!
//! ```
//! use plc_read_request::{DataType, ReadRequestBuilder};
//!
//! // Expected type taken from the Rust type
//! let request = ReadRequestBuilder::new()
//!     .add_item(DataType::Float32, "DM200")
//!     .finalize_as::<f32>()?;
//! # Ok::<(), plc_read_request::RequestError>(())
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use plc_read_request::{DataType, ReadRequestBuilder, RequestError};
//!
//! let result = ReadRequestBuilder::new()
//!     .add_item(DataType::Int16, "DM0")
//!     .add_item(DataType::Bool, "CIO0.05")
//!     .finalize_typed_bulk(DataType::Int16);
//!
//! match result {
//!     Ok(request) => println!("bulk of {}", request.data_type()),
//!     Err(RequestError::InvalidState { reason }) => println!("invalid state: {}", reason),
//!     Err(RequestError::TypeMismatch { expected, actual }) => {
//!         println!("expected {}, got {}", expected, actual);
//!     }
//!     Err(e) => println!("error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Events are emitted through [`tracing`]: `TRACE` for each added item,
//! `DEBUG` when a builder turns mixed and when a request is finalized. No
//! subscriber is installed by this crate.
//!
//! ## Cargo Features
//!
//! - `serde` — `Serialize`/`Deserialize` for [`DataType`] and [`ReadItem`],
//!   `Serialize` for the request types

#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod builder;
mod data_type;
mod error;
mod item;
mod reader;
mod request;

// Public re-exports
pub use builder::ReadRequestBuilder;
pub use data_type::{DataType, PlcType};
pub use error::{RequestError, Result};
pub use item::ReadItem;
pub use reader::PlcReader;
pub use request::{
    GenericReadRequest, ReadItems, ReadRequest, RequestKind, SingleReadRequest,
    TypedBulkReadRequest,
};
