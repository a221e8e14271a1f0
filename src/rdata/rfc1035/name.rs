//! Record data type from RFC 1035 that consist of a single domain name.
//!
//! This is a private module. It’s content is re-exported by the parent.

//------------ Cname --------------------------------------------------------

name_type! {
    /// CNAME record data.
    ///
    /// The CNAME record specifies the canonical or primary name for domain
    /// name alias.
    ///
    /// The CNAME type is defined in [RFC 1035, section 3.3.1][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.1
    (Cname, CNAME, cname)
}

//------------ Ns -----------------------------------------------------------

name_type! {
    /// NS record data.
    ///
    /// NS records specify hosts that are authoritative for a class and domain.
    ///
    /// The NS record type is defined in [RFC 1035, section 3.3.11][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.11
    (Ns, NS, nsdname)
}

//------------ Ptr ----------------------------------------------------------

name_type! {
    /// PTR record data.
    ///
    /// PRT records are used in special domains to point to some other
    /// location in the domain space.
    ///
    /// The PTR record type is defined in [RFC 1035, section 3.3.12][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.12
    (Ptr, PTR, ptrdname)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::name::Name;
    use crate::base::rdata::RecordData;
    use bytes::Bytes;
    use core::str::FromStr;
    use octseq::parse::Parser;

    #[test]
    fn parse_compressed() {
        let bytes = Bytes::from_static(b"\x07example\x03com\0\x02ns\xc0\x00");
        let mut parser = Parser::from_ref(&bytes);
        parser.advance(13).unwrap();
        let ns = Ns::parse(&mut parser).unwrap();
        assert_eq!(ns.nsdname(), &Name::from_str("ns.example.com").unwrap());
        assert_eq!(ns.rtype(), crate::base::iana::Rtype::NS);
        assert_eq!(ns.to_string(), "ns.example.com.");
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn rtypes() {
        let root = Name::root();
        assert_eq!(Cname::new(root.clone()).rtype().to_string(), "CNAME");
        assert_eq!(Ptr::new(root).rtype().to_string(), "PTR");
    }
}
