//! Hand-off point between request construction and a protocol transport.
//!
//! This crate performs no I/O. A protocol client implements [`PlcReader`] to
//! execute finalized requests against a device and returns its own response
//! type, with results in the same order as the request's items.
//!
//! # Example
//!
//! ```
//! use plc_read_request::{DataType, PlcReader, ReadItems, ReadRequest, RequestError};
//!
//! /// Answers every item with zeroes; stands in for a real transport.
//! struct ZeroReader;
//!
//! impl PlcReader<&'static str> for ZeroReader {
//!     type Response = Vec<(&'static str, Vec<u16>)>;
//!     type Error = RequestError;
//!
//!     fn read(&self, request: &ReadRequest<&'static str>) -> Result<Self::Response, Self::Error> {
//!         Ok(request
//!             .items()
//!             .iter()
//!             .map(|item| (*item.address(), vec![0; item.element_count() as usize]))
//!             .collect())
//!     }
//! }
//!
//! let request = ReadRequest::builder()
//!     .add_item(DataType::UInt16, "DM0")
//!     .add_array_item(DataType::UInt16, "DM10", 3)?
//!     .finalize()?;
//!
//! let response = ZeroReader.read(&request)?;
//! assert_eq!(response[1], ("DM10", vec![0, 0, 0]));
//! # Ok::<(), RequestError>(())
//! ```

use crate::request::ReadRequest;

/// Executes read requests.
///
/// Requests are borrowed, not consumed: the caller keeps ownership and may
/// resubmit the same request.
pub trait PlcReader<A> {
    /// Result of a successful read.
    type Response;
    /// Transport or device error.
    type Error;

    /// Executes `request` and returns the device's response.
    fn read(&self, request: &ReadRequest<A>) -> Result<Self::Response, Self::Error>;
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::data_type::DataType;
    use crate::request::{ReadItems, RequestKind};

    /// Records the shape and addresses of every request it sees.
    #[derive(Default)]
    struct RecordingReader {
        seen: RefCell<Vec<(RequestKind, Vec<u16>)>>,
    }

    impl PlcReader<u16> for RecordingReader {
        type Response = usize;
        type Error = std::convert::Infallible;

        fn read(&self, request: &ReadRequest<u16>) -> Result<usize, Self::Error> {
            let addresses = request.items().iter().map(|item| *item.address()).collect();
            self.seen.borrow_mut().push((request.kind(), addresses));
            Ok(request.item_count())
        }
    }

    #[test]
    fn test_reader_receives_items_in_order() {
        let reader = RecordingReader::default();
        let request = ReadRequest::builder()
            .add_item(DataType::Int16, 300)
            .add_item(DataType::Bool, 100)
            .add_item(DataType::Int16, 200)
            .finalize()
            .unwrap();

        assert_eq!(reader.read(&request).unwrap(), 3);
        assert_eq!(
            reader.seen.borrow()[0],
            (RequestKind::Generic, vec![300, 100, 200])
        );
    }

    #[test]
    fn test_request_can_be_resubmitted() {
        let reader = RecordingReader::default();
        let request = ReadRequest::builder()
            .add_item(DataType::Float32, 10)
            .finalize()
            .unwrap();

        reader.read(&request).unwrap();
        reader.read(&request).unwrap();
        assert_eq!(reader.seen.borrow().len(), 2);
        assert_eq!(request.kind(), RequestKind::Single);
    }
}
