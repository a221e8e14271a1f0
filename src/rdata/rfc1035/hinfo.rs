//! Record data for the HINFO record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::charstr::CharStr;
use crate::base::iana::Rtype;
use crate::base::rdata::{RecordData, RtypeRecordData};
use crate::base::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Hinfo --------------------------------------------------------

/// Hinfo record data.
///
/// Hinfo records are used to acquire general information about a host,
/// specifically the CPU type and operating system type.
///
/// The Hinfo type is defined in [RFC 1035, section 3.3.2][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.2
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hinfo {
    cpu: CharStr,
    os: CharStr,
}

impl Hinfo {
    /// Creates a new Hinfo record data from the components.
    pub fn new(cpu: CharStr, os: CharStr) -> Self {
        Hinfo { cpu, os }
    }

    /// The CPU type of the host.
    pub fn cpu(&self) -> &CharStr {
        &self.cpu
    }

    /// The operating system type of the host.
    pub fn os(&self) -> &CharStr {
        &self.os
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Ok(Self::new(CharStr::parse(parser)?, CharStr::parse(parser)?))
    }
}

//--- RecordData and RtypeRecordData

impl RecordData for Hinfo {
    fn rtype(&self) -> Rtype {
        Rtype::HINFO
    }
}

impl RtypeRecordData for Hinfo {
    const RTYPE: Rtype = Rtype::HINFO;

    fn parse_rdata(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Self::parse(parser)
    }
}

//--- Display

impl fmt::Display for Hinfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.cpu, self.os)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_and_display() {
        let bytes = Bytes::from_static(b"\x05amd64\x05Linux");
        let mut parser = Parser::from_ref(&bytes);
        let hinfo = Hinfo::parse_rdata(&mut parser).unwrap();
        assert_eq!(hinfo.cpu().as_slice(), b"amd64");
        assert_eq!(hinfo.os().as_slice(), b"Linux");
        assert_eq!(hinfo.to_string(), "\"amd64\" \"Linux\"");
    }
}
