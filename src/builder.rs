//! Read request builder.
//!
//! [`ReadRequestBuilder`] accumulates read items and, when finalized, picks the
//! narrowest request shape that fits what was added:
//!
//! | Items added | Types | Result |
//! |-------------|-------|--------|
//! | 0 | - | `InvalidState` error |
//! | 1 | - | [`ReadRequest::Single`] |
//! | 2+ | all equal | [`ReadRequest::TypedBulk`] |
//! | 2+ | mixed | [`ReadRequest::Generic`] |
//!
//! The shape is chosen at finalize time because later items may still
//! introduce a different type. Type uniformity is tracked incrementally: the
//! first item's type is recorded and every later item is compared against it,
//! so no second pass over the items is needed.
//!
//! # Example
//!
//! ```
//! use plc_read_request::{DataType, ReadRequest, ReadRequestBuilder};
//!
//! let request = ReadRequestBuilder::new()
//!     .add_item(DataType::Int16, "DM100")
//!     .add_item(DataType::Bool, "CIO0.05")
//!     .add_array_item(DataType::Float32, "DM200", 4)?
//!     .finalize()?;
//!
//! assert!(matches!(request, ReadRequest::Generic(_)));
//!
//! // Assert the expected type at compile time
//! let single = ReadRequestBuilder::new()
//!     .add_item(DataType::Float32, "DM300")
//!     .finalize_as::<f32>()?;
//! assert_eq!(single.data_type(), DataType::Float32);
//! # Ok::<(), plc_read_request::RequestError>(())
//! ```
//!
//! # Reuse
//!
//! Every finalizer consumes the builder, whether it succeeds or fails. Build a
//! new one to try again.

use tracing::{debug, trace};

use crate::data_type::{DataType, PlcType};
use crate::error::{RequestError, Result};
use crate::item::ReadItem;
use crate::request::{
    GenericReadRequest, ReadItems, ReadRequest, SingleReadRequest, TypedBulkReadRequest,
};

/// Owned accumulator that finalizes into one [`ReadRequest`] shape.
///
/// Not shared between threads; give each thread its own builder.
#[derive(Debug, Clone)]
pub struct ReadRequestBuilder<A> {
    first_type: Option<DataType>,
    mixed: bool,
    items: Vec<ReadItem<A>>,
}

impl<A> Default for ReadRequestBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ReadRequestBuilder<A> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty builder with room for `capacity` items.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_read_request::ReadRequestBuilder;
    ///
    /// let builder: ReadRequestBuilder<u16> = ReadRequestBuilder::with_capacity(32);
    /// assert!(builder.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            first_type: None,
            mixed: false,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Adds a scalar item.
    pub fn add_item(self, data_type: DataType, address: A) -> Self {
        self.add_read_item(ReadItem::new(data_type, address))
    }

    /// Adds an item reading `count` consecutive values.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::InvalidArgument` if `count` is 0.
    pub fn add_array_item(self, data_type: DataType, address: A, count: u32) -> Result<Self> {
        let item = ReadItem::with_count(data_type, address, count)?;
        Ok(self.add_read_item(item))
    }

    /// Adds a prebuilt item.
    pub fn add_read_item(mut self, item: ReadItem<A>) -> Self {
        self.track_type(item.data_type());
        trace!(
            data_type = %item.data_type(),
            element_count = item.element_count(),
            index = self.items.len(),
            "added read item"
        );
        self.items.push(item);
        self
    }

    fn track_type(&mut self, data_type: DataType) {
        match self.first_type {
            None => self.first_type = Some(data_type),
            Some(first) if !self.mixed && first != data_type => {
                debug!(first = %first, other = %data_type, "read request now has mixed types");
                self.mixed = true;
            }
            Some(_) => {}
        }
    }

    /// Returns the number of items added so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items have been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the type of the first item added.
    pub fn first_type(&self) -> Option<DataType> {
        self.first_type
    }

    /// Returns `true` once any item's type has differed from the first one.
    ///
    /// Never resets, even if later items match the first type again.
    pub fn is_mixed(&self) -> bool {
        self.mixed
    }

    /// Finalizes into the narrowest fitting request shape.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::InvalidState` if no items were added.
    pub fn finalize(self) -> Result<ReadRequest<A>> {
        let Some(first_type) = self.first_type else {
            return Err(RequestError::invalid_state("no requests added"));
        };

        let request = match <[ReadItem<A>; 1]>::try_from(self.items) {
            Ok([item]) => ReadRequest::Single(SingleReadRequest::new(item)),
            Err(items) if self.mixed => {
                ReadRequest::Generic(GenericReadRequest::from_items(items))
            }
            Err(items) => {
                ReadRequest::TypedBulk(TypedBulkReadRequest::new(first_type, items))
            }
        };

        debug!(
            kind = %request.kind(),
            items = request.item_count(),
            shared_type = ?request.shared_data_type(),
            "finalized read request"
        );
        Ok(request)
    }

    /// Finalizes a request that must hold more than one item.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::InvalidState` if fewer than two items were added.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_read_request::{DataType, ReadRequestBuilder};
    ///
    /// let result = ReadRequestBuilder::new()
    ///     .add_item(DataType::Int16, "DM0")
    ///     .finalize_bulk();
    /// assert!(result.is_err());
    /// ```
    pub fn finalize_bulk(self) -> Result<ReadRequest<A>> {
        if self.items.len() < 2 {
            return Err(RequestError::invalid_state(
                "bulk request needs more than one request",
            ));
        }
        self.finalize()
    }

    /// Finalizes a single-item request whose item must be of type `expected`.
    ///
    /// # Errors
    ///
    /// - `RequestError::InvalidState` if the item count is not exactly one
    /// - `RequestError::TypeMismatch` if the item's type is not `expected`
    pub fn finalize_typed(self, expected: DataType) -> Result<SingleReadRequest<A>> {
        if self.items.len() != 1 {
            return Err(RequestError::invalid_state(
                "checked request needs exactly one request",
            ));
        }
        self.check_first_type(expected)?;

        match self.finalize()? {
            ReadRequest::Single(request) => Ok(request),
            other => Err(RequestError::invalid_state(format!(
                "checked request built as {}",
                other.kind()
            ))),
        }
    }

    /// Finalizes a bulk request whose items must all be of type `expected`.
    ///
    /// # Errors
    ///
    /// - `RequestError::InvalidState` if fewer than two items were added
    /// - `RequestError::TypeMismatch` if the first item's type is not `expected`
    /// - `RequestError::InvalidState` if the items have mixed types
    pub fn finalize_typed_bulk(self, expected: DataType) -> Result<TypedBulkReadRequest<A>> {
        if self.items.len() < 2 {
            return Err(RequestError::invalid_state(
                "checked bulk request needs more than one request",
            ));
        }
        self.check_first_type(expected)?;
        if self.mixed {
            return Err(RequestError::invalid_state("mixed types contained"));
        }

        match self.finalize()? {
            ReadRequest::TypedBulk(request) => Ok(request),
            other => Err(RequestError::invalid_state(format!(
                "checked bulk request built as {}",
                other.kind()
            ))),
        }
    }

    /// Same as [`finalize_typed`](Self::finalize_typed) with the expected type
    /// taken from `T`.
    pub fn finalize_as<T: PlcType>(self) -> Result<SingleReadRequest<A>> {
        self.finalize_typed(T::DATA_TYPE)
    }

    /// Same as [`finalize_typed_bulk`](Self::finalize_typed_bulk) with the
    /// expected type taken from `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_read_request::{DataType, ReadItems, ReadRequestBuilder};
    ///
    /// let request = ReadRequestBuilder::new()
    ///     .add_item(DataType::Int32, "DM0")
    ///     .add_item(DataType::Int32, "DM2")
    ///     .finalize_bulk_as::<i32>()?;
    /// assert_eq!(request.item_count(), 2);
    /// # Ok::<(), plc_read_request::RequestError>(())
    /// ```
    pub fn finalize_bulk_as<T: PlcType>(self) -> Result<TypedBulkReadRequest<A>> {
        self.finalize_typed_bulk(T::DATA_TYPE)
    }

    fn check_first_type(&self, expected: DataType) -> Result<()> {
        match self.first_type {
            Some(actual) if actual != expected => {
                Err(RequestError::type_mismatch(expected, actual))
            }
            _ => Ok(()),
        }
    }
}
