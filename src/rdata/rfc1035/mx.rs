//! Record data for the MX record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::rdata::{RecordData, RtypeRecordData};
use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Mx -----------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
///
/// The Mx record type is defined in [RFC 1035, section 3.3.9][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.9
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mx {
    preference: u16,
    exchange: Name,
}

impl Mx {
    /// Creates a new Mx record data from the components.
    pub fn new(preference: u16, exchange: Name) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same owner.
    /// Lower values are preferred.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    pub fn exchange(&self) -> &Name {
        &self.exchange
    }

    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        Ok(Self::new(u16::parse(parser)?, Name::parse(parser)?))
    }
}

//--- RecordData and RtypeRecordData

impl RecordData for Mx {
    fn rtype(&self) -> Rtype {
        Rtype::MX
    }
}

impl RtypeRecordData for Mx {
    const RTYPE: Rtype = Rtype::MX;

    fn parse_rdata(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Self::parse(parser)
    }
}

//--- Display

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange.display_absolute())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn parse_compressed_exchange() {
        let bytes =
            Bytes::from_static(b"\x07example\x03com\0\x00\x0a\x04mail\xc0\x00");
        let mut parser = Parser::from_ref(&bytes);
        parser.advance(13).unwrap();
        let mx = Mx::parse_rdata(&mut parser).unwrap();
        assert_eq!(mx.preference(), 10);
        assert_eq!(mx.exchange(), &Name::from_str("mail.example.com").unwrap());
        assert_eq!(mx.to_string(), "10 mail.example.com.");
    }

    #[test]
    fn parse_short() {
        let bytes = Bytes::from_static(b"\x00");
        let mut parser = Parser::from_ref(&bytes);
        assert_eq!(Mx::parse_rdata(&mut parser), Err(ParseError::ShortInput));
    }
}
