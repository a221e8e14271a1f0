//! Resource Records.
//!
//! This module defines the types for resource records as found in the
//! answer, authority, and additional sections of a DNS message.
//!
//! A record consists of a header with the owner name, record type, class,
//! TTL, and the length of the record data followed by that data. The
//! header is represented by [`RecordHeader`], a complete record with its
//! decoded data by [`Record`].

use super::iana::{Class, Rtype};
use super::name::Name;
use super::rdata::{RecordData, RecordDataOutcome, UnknownRecordData};
use super::registry::Registry;
use super::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;
use std::time::Duration;
use tracing::debug;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// The record data is either decoded into a type registered for the
/// record type or kept as raw octets, see [`RecordDataOutcome`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    /// The owner of the record.
    owner: Name,

    /// The class of the record.
    class: Class,

    /// The time-to-live value of the record in seconds.
    ttl: u32,

    /// The record data.
    data: RecordDataOutcome,
}

/// # Creation and Element Access
///
impl Record {
    /// Creates a new record from its parts.
    pub fn new(
        owner: Name,
        class: Class,
        ttl: u32,
        data: RecordDataOutcome,
    ) -> Self {
        Record {
            owner,
            class,
            ttl,
            data,
        }
    }

    /// Returns a reference to the owner domain name.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }

    /// Returns the record class.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the record’s time-to-live in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns the record’s time-to-live as a duration.
    pub fn ttl_duration(&self) -> Duration {
        Duration::from_secs(self.ttl.into())
    }

    /// Return a reference to the record data.
    pub fn data(&self) -> &RecordDataOutcome {
        &self.data
    }

    /// Returns the record data if it was decoded into a `T`.
    pub fn data_as<T: RecordData>(&self) -> Option<&T> {
        self.data.downcast_ref()
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> RecordDataOutcome {
        self.data
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.owner.display_absolute(),
            self.ttl,
            self.class,
            self.rtype(),
            self.data
        )
    }
}

//------------ RecordHeader --------------------------------------------------

/// The header of a resource record.
///
/// This type can be used to look at the record type, class, and TTL of a
/// record before deciding how to deal with its data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordHeader {
    owner: Name,
    rtype: Rtype,
    class: Class,
    ttl: u32,
    rdlen: u16,
}

impl RecordHeader {
    /// Creates a new record header from its components.
    pub fn new(
        owner: Name,
        rtype: Rtype,
        class: Class,
        ttl: u32,
        rdlen: u16,
    ) -> Self {
        RecordHeader {
            owner,
            rtype,
            class,
            ttl,
            rdlen,
        }
    }

    /// Returns a reference to the owner of the record.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type of the record.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the TTL of the record in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns the data length of the record.
    pub fn rdlen(&self) -> u16 {
        self.rdlen
    }

    /// Takes a record header from the beginning of the parser.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        Ok(RecordHeader::new(
            Name::parse(parser)?,
            Rtype::parse(parser)?,
            Class::parse(parser)?,
            parser.parse_u32_be()?,
            parser.parse_u16_be()?,
        ))
    }

    /// Parses the remainder of the record and returns it.
    ///
    /// The method assumes that the parser is currently positioned right
    /// after the end of the record header. The record data is handed to
    /// the decoder registered for the record type in `registry`. The
    /// decoder only sees the record data and has to consume all of it.
    /// If there is no decoder for the type, the data is kept raw.
    ///
    /// In either case, the parser ends up right behind the record data.
    pub fn parse_into_record(
        self,
        parser: &mut Parser<'_, Bytes>,
        registry: &Registry,
    ) -> Result<Record, ParseError> {
        let len = usize::from(self.rdlen);
        let mut rdata = parser.parse_parser(len)?;
        let data = match registry.lookup(self.rtype) {
            Some(decoder) => {
                let data = decoder(&self, &mut rdata).map_err(|err| match err {
                    ParseError::ShortInput => {
                        ParseError::form_error("record data overrun")
                    }
                    err => err,
                })?;
                if rdata.remaining() > 0 {
                    return Err(ParseError::form_error("trailing record data"));
                }
                RecordDataOutcome::Known(data)
            }
            None => {
                debug!(
                    rtype = %self.rtype,
                    rdlen = self.rdlen,
                    "keeping record data of unknown type"
                );
                let pos = rdata.pos();
                let raw = rdata.octets_ref().slice(pos..pos + len);
                RecordDataOutcome::Unknown(UnknownRecordData::from_octets(
                    self.rtype, raw,
                ))
            }
        };
        Ok(Record::new(self.owner, self.class, self.ttl, data))
    }
}

//============ Testing =======================================================
