//! Record data for the SOA record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::rdata::{RecordData, RtypeRecordData};
use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Soa ----------------------------------------------------------

/// Soa record data.
///
/// Soa records mark the top of a zone and contain information pertinent to
/// name server maintenance operations.
///
/// The Soa record type is defined in [RFC 1035, section 3.3.13][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.13
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Soa {
    mname: Name,
    rname: Name,
    serial: u32,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

impl Soa {
    /// Creates new Soa record data from content.
    pub fn new(
        mname: Name,
        rname: Name,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// The primary name server for the zone.
    pub fn mname(&self) -> &Name {
        &self.mname
    }

    /// The mailbox for the person responsible for this zone.
    pub fn rname(&self) -> &Name {
        &self.rname
    }

    /// The serial number of the original copy of the zone.
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// The time interval in seconds before the zone should be refreshed.
    pub fn refresh(&self) -> u32 {
        self.refresh
    }

    /// The time in seconds before a failed refresh is retried.
    pub fn retry(&self) -> u32 {
        self.retry
    }

    /// The upper limit of time in seconds the zone is authoritative.
    pub fn expire(&self) -> u32 {
        self.expire
    }

    /// The minimum TTL to be exported with any RR from this zone.
    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        Ok(Self::new(
            Name::parse(parser)?,
            Name::parse(parser)?,
            u32::parse(parser)?,
            u32::parse(parser)?,
            u32::parse(parser)?,
            u32::parse(parser)?,
            u32::parse(parser)?,
        ))
    }
}

//--- RecordData and RtypeRecordData

impl RecordData for Soa {
    fn rtype(&self) -> Rtype {
        Rtype::SOA
    }
}

impl RtypeRecordData for Soa {
    const RTYPE: Rtype = Rtype::SOA;

    fn parse_rdata(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Self::parse(parser)
    }
}

//--- Display

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname.display_absolute(),
            self.rname.display_absolute(),
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn parse_and_display() {
        let bytes = Bytes::from_static(
            b"\x03ns1\x07example\x03com\0\
              \x0ahostmaster\xc0\x04\
              \x78\x48\xb8\x12\x00\x00\x1c\x20\x00\x00\x0e\x10\
              \x00\x12\x75\x00\x00\x00\x0e\x10",
        );
        let mut parser = Parser::from_ref(&bytes);
        let soa = Soa::parse_rdata(&mut parser).unwrap();
        assert_eq!(soa.mname(), &Name::from_str("ns1.example.com").unwrap());
        assert_eq!(
            soa.rname(),
            &Name::from_str("hostmaster.example.com").unwrap()
        );
        assert_eq!(soa.serial(), 2018031634);
        assert_eq!(soa.refresh(), 7200);
        assert_eq!(soa.retry(), 3600);
        assert_eq!(soa.expire(), 1209600);
        assert_eq!(soa.minimum(), 3600);
        assert_eq!(
            soa.to_string(),
            "ns1.example.com. hostmaster.example.com. \
             2018031634 7200 3600 1209600 3600"
        );
        assert_eq!(parser.remaining(), 0);
    }
}
