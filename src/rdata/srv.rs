//! Record data from [RFC 2782]: SRV records.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::rdata::{RecordData, RtypeRecordData};
use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Srv ---------------------------------------------------------

/// SRV record data.
///
/// An SRV record names a host and port providing a service. When there are
/// several records for a service, the client picks among them by priority
/// and then randomly weighted by weight.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Srv {
    priority: u16,
    weight: u16,
    port: u16,
    target: Name,
}

impl Srv {
    pub fn new(priority: u16, weight: u16, port: u16, target: Name) -> Self {
        Srv {
            priority,
            weight,
            port,
            target,
        }
    }

    /// The priority of the target host. Lower values are preferred.
    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// The relative weight among targets of equal priority.
    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The domain name of the target host.
    ///
    /// The root name signals that the service is decidedly not available.
    pub fn target(&self) -> &Name {
        &self.target
    }

    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        Ok(Self::new(
            u16::parse(parser)?,
            u16::parse(parser)?,
            u16::parse(parser)?,
            Name::parse(parser)?,
        ))
    }
}

//--- RecordData and RtypeRecordData

impl RecordData for Srv {
    fn rtype(&self) -> Rtype {
        Rtype::SRV
    }
}

impl RtypeRecordData for Srv {
    const RTYPE: Rtype = Rtype::SRV;

    fn parse_rdata(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Self::parse(parser)
    }
}

//--- Display

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority,
            self.weight,
            self.port,
            self.target.display_absolute()
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
            b"\x00\x0a\x00\x3c\x14\x95\x04sip1\x07example\x03com\0",
        );
        let mut parser = Parser::from_ref(&bytes);
        let srv = Srv::parse_rdata(&mut parser).unwrap();
        assert_eq!(srv.priority(), 10);
        assert_eq!(srv.weight(), 60);
        assert_eq!(srv.port(), 5269);
        assert_eq!(srv.target(), &Name::from_str("sip1.example.com").unwrap());
        assert_eq!(srv.to_string(), "10 60 5269 sip1.example.com.");
    }
}
