//! Record data from [RFC 3596]: AAAA records.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::iana::Rtype;
use crate::base::rdata::{RecordData, RtypeRecordData};
use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::{fmt, str};
use octseq::parse::Parser;
use std::net::Ipv6Addr;

//------------ Aaaa ---------------------------------------------------------

/// AAAA record data.
///
/// AAAA records convey the IPv6 address of a host.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    pub fn new(addr: Ipv6Addr) -> Aaaa {
        Aaaa { addr }
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    pub fn set_addr(&mut self, addr: Ipv6Addr) {
        self.addr = addr
    }

    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        Ipv6Addr::parse(parser).map(Self::new)
    }
}

//--- From and FromStr

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr)
    }
}

impl From<Aaaa> for Ipv6Addr {
    fn from(data: Aaaa) -> Self {
        data.addr
    }
}

impl str::FromStr for Aaaa {
    type Err = <Ipv6Addr as str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv6Addr::from_str(s).map(Aaaa::new)
    }
}

//--- RecordData and RtypeRecordData

impl RecordData for Aaaa {
    fn rtype(&self) -> Rtype {
        Rtype::AAAA
    }
}

impl RtypeRecordData for Aaaa {
    const RTYPE: Rtype = Rtype::AAAA;

    fn parse_rdata(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Self::parse(parser)
    }
}

//--- Display

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_and_display() {
        let bytes = Bytes::from_static(
            b"\x20\x01\x0d\xb8\0\0\0\0\0\0\0\0\0\0\0\x01",
        );
        let mut parser = Parser::from_ref(&bytes);
        let data = Aaaa::parse_rdata(&mut parser).unwrap();
        assert_eq!(data.to_string(), "2001:db8::1");
        assert_eq!("2001:db8::1".parse::<Aaaa>().unwrap(), data);
    }

    #[test]
    fn parse_short() {
        let bytes = Bytes::from_static(b"\x20\x01\x0d\xb8");
        let mut parser = Parser::from_ref(&bytes);
        assert_eq!(Aaaa::parse_rdata(&mut parser), Err(ParseError::ShortInput));
    }
}
