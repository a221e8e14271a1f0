//! Resource record data.
//!
//! Each resource record type has it’s own definition of the content and
//! formatting of its data. This module provides the basics for implementing
//! specific types for this record data. The concrete implementations for
//! well-known record types live in the top-level [`rdata`][crate::rdata]
//! module.
//!
//! Any type that represents record data implements [`RecordData`]. Record
//! data taken from a message is kept behind a trait object so that new
//! types can be added at runtime through the
//! [`Registry`][super::registry::Registry]. Types that implement exactly
//! one record type and can be parsed also implement [`RtypeRecordData`],
//! which is all that is needed to register them.
//!
//! Data of record types nobody registered is kept as
//! [`UnknownRecordData`]. [`RecordDataOutcome`] tells the two apart.

use super::iana::Rtype;
use super::wire::ParseError;
use bytes::Bytes;
use core::any::Any;
use core::fmt;
use octseq::parse::Parser;
use std::sync::Arc;

//----------- RecordData -----------------------------------------------------

/// A type that represents record data.
///
/// The type needs to be able to provide the record type of a record with
/// a value’s data via the [`rtype`][Self::rtype] method. Values are
/// shared between threads as trait objects and can be turned back into
/// their concrete type through [`downcast_ref`][Self::downcast_ref].
pub trait RecordData: AsAny + fmt::Debug + fmt::Display + Send + Sync {
    /// Returns the record type associated with this record data instance.
    fn rtype(&self) -> Rtype;
}

impl dyn RecordData {
    /// Returns whether the record data is of type `T`.
    pub fn is<T: RecordData>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns a reference to the concrete record data if it is a `T`.
    pub fn downcast_ref<T: RecordData>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}

//----------- AsAny ----------------------------------------------------------

/// Access to a value as [`Any`].
///
/// This is implemented for all suitable types and allows downcasting
/// record data trait objects.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

//----------- RtypeRecordData ------------------------------------------------

/// A type for record data for a single specific record type.
pub trait RtypeRecordData: RecordData + Sized {
    /// The record type of a value of this type.
    const RTYPE: Rtype;

    /// Parses the record data.
    ///
    /// The parser is limited to the record data. Its octets are the
    /// complete message, so compressed names can be followed.
    fn parse_rdata(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError>;
}

//------------ UnknownRecordData ---------------------------------------------

/// The raw data of a record whose type has no registered decoder.
///
/// The data is a slice of the message it was taken from. Record types that
/// allow compressed names in their data are all known, so the raw data
/// is meaningful on its own.
#[derive(Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnknownRecordData {
    /// The record type of this data.
    rtype: Rtype,

    /// The record data.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_hex"))]
    data: Bytes,
}

impl UnknownRecordData {
    /// Creates generic record data from a bytes value contain the data.
    pub fn from_octets(rtype: Rtype, data: Bytes) -> Self {
        UnknownRecordData { rtype, data }
    }

    /// Returns the record type this data is for.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

//--- Display and Debug

impl fmt::Display for UnknownRecordData {
    /// Formats the data in the generic notation of RFC 3597.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        for ch in self.data.as_ref() {
            write!(f, " {:02x}", *ch)?
        }
        Ok(())
    }
}

impl fmt::Debug for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("UnknownRecordData(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

#[cfg(feature = "serde")]
fn serialize_hex<S: serde::Serializer>(
    data: &Bytes,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use core::fmt::Write;

    let mut res = String::with_capacity(data.len() * 2);
    for ch in data.as_ref() {
        let _ = write!(res, "{:02x}", ch);
    }
    serializer.serialize_str(&res)
}

//------------ RecordDataOutcome ---------------------------------------------

/// The data of a record taken from a message.
///
/// Either a registered decoder recognized the data or the record type is
/// unknown and the raw octets are kept.
#[derive(Clone, Debug)]
pub enum RecordDataOutcome {
    /// The data was decoded by a registered decoder.
    Known(Arc<dyn RecordData>),

    /// No decoder was registered for the record type.
    Unknown(UnknownRecordData),
}

impl RecordDataOutcome {
    /// Returns the record type of the data.
    pub fn rtype(&self) -> Rtype {
        match *self {
            RecordDataOutcome::Known(ref data) => data.rtype(),
            RecordDataOutcome::Unknown(ref data) => data.rtype(),
        }
    }

    /// Returns whether the data was decoded.
    pub fn is_known(&self) -> bool {
        matches!(*self, RecordDataOutcome::Known(_))
    }

    /// Returns the decoded data if there is any.
    pub fn known(&self) -> Option<&dyn RecordData> {
        match *self {
            RecordDataOutcome::Known(ref data) => Some(data.as_ref()),
            RecordDataOutcome::Unknown(_) => None,
        }
    }

    /// Returns the raw data if the record type was unknown.
    pub fn unknown(&self) -> Option<&UnknownRecordData> {
        match *self {
            RecordDataOutcome::Known(_) => None,
            RecordDataOutcome::Unknown(ref data) => Some(data),
        }
    }

    /// Returns the decoded data if it is exactly of type `T`.
    pub fn downcast_ref<T: RecordData>(&self) -> Option<&T> {
        self.known().and_then(|data| data.downcast_ref())
    }
}

//--- Display

impl fmt::Display for RecordDataOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordDataOutcome::Known(ref data) => fmt::Display::fmt(data, f),
            RecordDataOutcome::Unknown(ref data) => {
                fmt::Display::fmt(data, f)
            }
        }
    }
}

//--- Serialize

#[cfg(feature = "serde")]
impl serde::Serialize for RecordDataOutcome {
    /// Known data is serialized in its presentation format.
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match *self {
            RecordDataOutcome::Known(ref data) => {
                serializer.collect_str(data)
            }
            RecordDataOutcome::Unknown(ref data) => {
                serde::Serialize::serialize(data, serializer)
            }
        }
    }
}

//============ Testing =======================================================
