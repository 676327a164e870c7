//! Read request shapes.
//!
//! A read request is an ordered sequence of [`ReadItem`]s. The order is the
//! read order, and the protocol layer returns results in the same order.
//!
//! # Request Types
//!
//! | Type | Items | Shared type |
//! |------|-------|:-----------:|
//! | [`SingleReadRequest`] | exactly 1 | ✓ |
//! | [`TypedBulkReadRequest`] | 2 or more | ✓ |
//! | [`GenericReadRequest`] | any | ✗ |
//!
//! [`ReadRequest`] is the tagged union returned by
//! [`ReadRequestBuilder::finalize`](crate::ReadRequestBuilder::finalize), so callers
//! can match on the concrete shape. All shapes implement [`ReadItems`].
//!
//! # Example
//!
//! ```
//! use plc_read_request::{DataType, ReadItems, ReadRequest, RequestKind};
//!
//! let request = ReadRequest::builder()
//!     .add_item(DataType::Int16, "DM100")
//!     .add_item(DataType::Int16, "DM101")
//!     .finalize()?;
//!
//! assert_eq!(request.kind(), RequestKind::TypedBulk);
//! assert_eq!(request.shared_data_type(), Some(DataType::Int16));
//! assert_eq!(request.item_count(), 2);
//! # Ok::<(), plc_read_request::RequestError>(())
//! ```

use std::fmt;

use crate::builder::ReadRequestBuilder;
use crate::data_type::DataType;
use crate::error::{RequestError, Result};
use crate::item::ReadItem;

/// Ordered sequence of read items.
///
/// Implemented by every request shape so protocol code can walk the items
/// without caring which shape it was handed.
pub trait ReadItems<A> {
    /// Returns the items in read order.
    fn items(&self) -> &[ReadItem<A>];

    /// Returns the number of items.
    fn item_count(&self) -> usize {
        self.items().len()
    }

    /// Returns `true` if there are no items.
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Returns the sole item of a request expected to hold at most one.
    ///
    /// `Ok(None)` when empty, `Ok(Some(item))` for exactly one item.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::InvalidState` if there is more than one item.
    fn single_item(&self) -> Result<Option<&ReadItem<A>>> {
        match self.items() {
            [] => Ok(None),
            [item] => Ok(Some(item)),
            items => Err(RequestError::invalid_state(format!(
                "too many items: {}",
                items.len()
            ))),
        }
    }

    /// Returns the data type of each item, in read order.
    fn data_types<'a>(&'a self) -> impl Iterator<Item = DataType> + 'a
    where
        A: 'a,
    {
        self.items().iter().map(ReadItem::data_type)
    }
}

/// Request with items of any, possibly mixed, data types.
///
/// Results must be inspected per item at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GenericReadRequest<A> {
    items: Vec<ReadItem<A>>,
}

impl<A> GenericReadRequest<A> {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a request holding one scalar item.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_read_request::{DataType, GenericReadRequest, ReadItems};
    ///
    /// let request = GenericReadRequest::with_item(DataType::Bool, "CIO0.05");
    /// assert_eq!(request.item_count(), 1);
    /// ```
    pub fn with_item(data_type: DataType, address: A) -> Self {
        Self::from_items(vec![ReadItem::new(data_type, address)])
    }

    /// Creates a request holding one array item.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::InvalidArgument` if `count` is 0.
    pub fn with_array_item(data_type: DataType, address: A, count: u32) -> Result<Self> {
        Ok(Self::from_items(vec![ReadItem::with_count(
            data_type, address, count,
        )?]))
    }

    /// Creates a request from an existing list of items, keeping their order.
    pub fn from_items(items: Vec<ReadItem<A>>) -> Self {
        Self { items }
    }

    /// Appends an item. No type restriction applies.
    pub fn add_item(&mut self, item: ReadItem<A>) {
        self.items.push(item);
    }

    /// Consumes the request and returns its items.
    pub fn into_items(self) -> Vec<ReadItem<A>> {
        self.items
    }
}

impl<A> Default for GenericReadRequest<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ReadItems<A> for GenericReadRequest<A> {
    fn items(&self) -> &[ReadItem<A>] {
        &self.items
    }
}

/// Request for exactly one item.
///
/// The item's type is known up front, so its result can be decoded without
/// runtime inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SingleReadRequest<A> {
    item: ReadItem<A>,
}

impl<A> SingleReadRequest<A> {
    pub(crate) fn new(item: ReadItem<A>) -> Self {
        Self { item }
    }

    /// Returns the item.
    pub fn item(&self) -> &ReadItem<A> {
        &self.item
    }

    /// Returns the item's data type.
    pub fn data_type(&self) -> DataType {
        self.item.data_type()
    }

    /// Consumes the request and returns its item.
    pub fn into_item(self) -> ReadItem<A> {
        self.item
    }
}

impl<A> ReadItems<A> for SingleReadRequest<A> {
    fn items(&self) -> &[ReadItem<A>] {
        std::slice::from_ref(&self.item)
    }
}

/// Request for two or more items that all share one data type.
///
/// Results can be decoded as a homogeneous collection of that type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypedBulkReadRequest<A> {
    data_type: DataType,
    items: Vec<ReadItem<A>>,
}

impl<A> TypedBulkReadRequest<A> {
    pub(crate) fn new(data_type: DataType, items: Vec<ReadItem<A>>) -> Self {
        debug_assert!(items.len() >= 2);
        debug_assert!(items.iter().all(|item| item.data_type() == data_type));
        Self { data_type, items }
    }

    /// Returns the data type shared by every item.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Consumes the request and returns its items.
    pub fn into_items(self) -> Vec<ReadItem<A>> {
        self.items
    }
}

impl<A> ReadItems<A> for TypedBulkReadRequest<A> {
    fn items(&self) -> &[ReadItem<A>] {
        &self.items
    }
}

/// Shape of a finalized request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Exactly one item.
    Single,
    /// Two or more items of one type.
    TypedBulk,
    /// Items of mixed types.
    Generic,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Single => write!(f, "single"),
            RequestKind::TypedBulk => write!(f, "typed-bulk"),
            RequestKind::Generic => write!(f, "generic"),
        }
    }
}

/// A finalized read request, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum ReadRequest<A> {
    /// Exactly one item.
    Single(SingleReadRequest<A>),
    /// Two or more items of one type.
    TypedBulk(TypedBulkReadRequest<A>),
    /// Items of mixed types.
    Generic(GenericReadRequest<A>),
}

impl<A> ReadRequest<A> {
    /// Returns an empty builder.
    pub fn builder() -> ReadRequestBuilder<A> {
        ReadRequestBuilder::new()
    }

    /// Returns the shape of this request.
    pub fn kind(&self) -> RequestKind {
        match self {
            ReadRequest::Single(_) => RequestKind::Single,
            ReadRequest::TypedBulk(_) => RequestKind::TypedBulk,
            ReadRequest::Generic(_) => RequestKind::Generic,
        }
    }

    /// Returns the type shared by all items, if the shape guarantees one.
    pub fn shared_data_type(&self) -> Option<DataType> {
        match self {
            ReadRequest::Single(request) => Some(request.data_type()),
            ReadRequest::TypedBulk(request) => Some(request.data_type()),
            ReadRequest::Generic(_) => None,
        }
    }

    /// Consumes the request and returns its items in read order.
    pub fn into_items(self) -> Vec<ReadItem<A>> {
        match self {
            ReadRequest::Single(request) => vec![request.into_item()],
            ReadRequest::TypedBulk(request) => request.into_items(),
            ReadRequest::Generic(request) => request.into_items(),
        }
    }
}

impl<A> ReadItems<A> for ReadRequest<A> {
    fn items(&self) -> &[ReadItem<A>] {
        match self {
            ReadRequest::Single(request) => request.items(),
            ReadRequest::TypedBulk(request) => request.items(),
            ReadRequest::Generic(request) => request.items(),
        }
    }
}

impl<A> From<SingleReadRequest<A>> for ReadRequest<A> {
    fn from(request: SingleReadRequest<A>) -> Self {
        ReadRequest::Single(request)
    }
}

impl<A> From<TypedBulkReadRequest<A>> for ReadRequest<A> {
    fn from(request: TypedBulkReadRequest<A>) -> Self {
        ReadRequest::TypedBulk(request)
    }
}

impl<A> From<GenericReadRequest<A>> for ReadRequest<A> {
    fn from(request: GenericReadRequest<A>) -> Self {
        ReadRequest::Generic(request)
    }
}
