//! Data type tags for read items.
//!
//! This module defines the [`DataType`] enum, which tells the response decoder
//! how the value(s) at an address should be interpreted, and the [`PlcType`]
//! trait, which ties a Rust value type to its tag.
//!
//! # Data Types Overview
//!
//! | Tag | Rust type | Description |
//! |-----|-----------|-------------|
//! | BOOL | `bool` | Single bit |
//! | BYTE | `u8` | Unsigned 8-bit |
//! | INT16 | `i16` | Signed 16-bit (INT) |
//! | UINT16 | `u16` | Unsigned 16-bit (WORD) |
//! | INT32 | `i32` | Signed 32-bit (DINT) |
//! | UINT32 | `u32` | Unsigned 32-bit (DWORD) |
//! | INT64 | `i64` | Signed 64-bit (LINT) |
//! | UINT64 | `u64` | Unsigned 64-bit (LWORD) |
//! | FLOAT32 | `f32` | IEEE 754 single (REAL) |
//! | FLOAT64 | `f64` | IEEE 754 double (LREAL) |
//! | STRING | `String` | Character string |
//!
//! # Example
//!
//! ```
//! use plc_read_request::DataType;
//!
//! assert_eq!(DataType::of::<f32>(), DataType::Float32);
//! assert_eq!(DataType::Int16.to_string(), "INT16");
//! assert_eq!("uint32".parse::<DataType>().unwrap(), DataType::UInt32);
//! ```

use std::str::FromStr;

use crate::error::{RequestError, Result};

/// Semantic type of the value(s) read from an address.
///
/// Tags compare by value, so two items share a type exactly when their
/// tags are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum DataType {
    /// Single bit.
    Bool,
    /// Unsigned 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Character string.
    String,
}

impl DataType {
    /// All supported tags, in declaration order.
    pub const ALL: [DataType; 11] = [
        DataType::Bool,
        DataType::Byte,
        DataType::Int16,
        DataType::UInt16,
        DataType::Int32,
        DataType::UInt32,
        DataType::Int64,
        DataType::UInt64,
        DataType::Float32,
        DataType::Float64,
        DataType::String,
    ];

    /// Returns the tag for the Rust type `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_read_request::DataType;
    ///
    /// assert_eq!(DataType::of::<bool>(), DataType::Bool);
    /// assert_eq!(DataType::of::<String>(), DataType::String);
    /// ```
    pub fn of<T: PlcType>() -> Self {
        T::DATA_TYPE
    }

    /// Returns the canonical upper-case name of this tag.
    pub fn name(self) -> &'static str {
        match self {
            DataType::Bool => "BOOL",
            DataType::Byte => "BYTE",
            DataType::Int16 => "INT16",
            DataType::UInt16 => "UINT16",
            DataType::Int32 => "INT32",
            DataType::UInt32 => "UINT32",
            DataType::Int64 => "INT64",
            DataType::UInt64 => "UINT64",
            DataType::Float32 => "FLOAT32",
            DataType::Float64 => "FLOAT64",
            DataType::String => "STRING",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self> {
        DataType::ALL
            .into_iter()
            .find(|data_type| data_type.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                RequestError::invalid_argument("data_type", format!("unknown type '{s}'"))
            })
    }
}

/// A Rust value type that a read item can be decoded into.
///
/// Used by the builder's `finalize_as` / `finalize_bulk_as` to assert the
/// expected type at compile time.
pub trait PlcType {
    /// Tag identifying this type on the request.
    const DATA_TYPE: DataType;
}

macro_rules! impl_plc_type {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl PlcType for $ty {
                const DATA_TYPE: DataType = DataType::$tag;
            }
        )*
    };
}

impl_plc_type! {
    bool => Bool,
    u8 => Byte,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    String => String,
}
