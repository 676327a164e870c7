//! Read items: one `(type, address[, count])` unit of a read request.

use std::fmt;
use std::num::NonZeroU32;

use crate::data_type::DataType;
use crate::error::{RequestError, Result};

/// A single value, or array of values, to read from a device.
///
/// The address is opaque to this crate; it is whatever the protocol layer
/// uses to locate a value (a tag name, a `(area, word)` pair, ...).
///
/// # Example
///
/// ```
/// use plc_read_request::{DataType, ReadItem};
///
/// let scalar = ReadItem::new(DataType::Int16, "DM100");
/// assert_eq!(scalar.element_count(), 1);
///
/// let array = ReadItem::with_count(DataType::Float32, "DM200", 4).unwrap();
/// assert!(array.is_array());
/// assert_eq!(array.to_string(), "FLOAT32 DM200[4]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadItem<A> {
    data_type: DataType,
    address: A,
    element_count: NonZeroU32,
}

impl<A> ReadItem<A> {
    /// Creates a scalar item (element count 1).
    pub fn new(data_type: DataType, address: A) -> Self {
        Self {
            data_type,
            address,
            element_count: NonZeroU32::MIN,
        }
    }

    /// Creates an item reading `count` consecutive values starting at `address`.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::InvalidArgument` if `count` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_read_request::{DataType, ReadItem};
    ///
    /// assert!(ReadItem::with_count(DataType::Bool, "CIO0.00", 16).is_ok());
    /// assert!(ReadItem::with_count(DataType::Bool, "CIO0.00", 0).is_err());
    /// ```
    pub fn with_count(data_type: DataType, address: A, count: u32) -> Result<Self> {
        let element_count = NonZeroU32::new(count).ok_or_else(|| {
            RequestError::invalid_argument("element_count", "must be greater than 0")
        })?;
        Ok(Self {
            data_type,
            address,
            element_count,
        })
    }

    /// Returns the data type tag.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the address.
    pub fn address(&self) -> &A {
        &self.address
    }

    /// Returns the number of values to read.
    pub fn element_count(&self) -> u32 {
        self.element_count.get()
    }

    /// Returns `true` if more than one value is read.
    pub fn is_array(&self) -> bool {
        self.element_count.get() > 1
    }

    /// Consumes the item and returns its address.
    pub fn into_address(self) -> A {
        self.address
    }
}

impl<A: fmt::Display> fmt::Display for ReadItem<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.data_type, self.address)?;
        if self.is_array() {
            write!(f, "[{}]", self.element_count)?;
        }
        Ok(())
    }
}
