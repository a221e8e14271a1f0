//! Taking domain names out of DNS messages.
//!
//! This is a private module. It adds parsing to [`Name`].

use super::absolute::Name;
use super::{NameError, MAX_COMPRESSION_HOPS, MAX_NAME_LEN};
use crate::base::wire::ParseError;
use octseq::parse::Parser;

//------------ Name Parsing --------------------------------------------------

impl Name {
    /// Takes a possibly compressed name from the beginning of `parser`.
    ///
    /// Compression pointers are followed and the resulting name is
    /// flattened. Afterwards, `parser` is positioned right behind the first
    /// compression pointer or, if there was none, the root label.
    ///
    /// Every pointer must point to a position before itself. At most
    /// [`MAX_COMPRESSION_HOPS`] pointers are followed.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        let mut octets = Vec::new();

        // Phase One: No compression pointers have been found yet.
        //
        // The labels are right here and the parser advances over them. If
        // we hit the root label, we are done.
        let mut ptr = loop {
            match LabelType::parse(parser)? {
                LabelType::Normal(0) => {
                    octets.push(0);
                    return Ok(Name::from_bytes_unchecked(octets.into()));
                }
                LabelType::Normal(len) => {
                    push_label(&mut octets, parser, len)?;
                }
                LabelType::Compressed(ptr) => break ptr,
            }
        };

        // Phase Two: Follow the pointers on a copy of the parser. The
        // caller’s parser already sits behind the first pointer.
        let mut parser = *parser;
        let mut hops = 0;
        loop {
            // The parser is behind the two pointer octets, so anything at
            // or after `pos - 2` points at the pointer itself or forward.
            if ptr >= parser.pos() - 2 {
                return Err(NameError::BadPointer.into());
            }
            hops += 1;
            if hops > MAX_COMPRESSION_HOPS {
                return Err(NameError::ExcessiveCompression.into());
            }
            parser.seek(ptr)?;

            loop {
                match LabelType::parse(&mut parser)? {
                    LabelType::Normal(0) => {
                        octets.push(0);
                        return Ok(Name::from_bytes_unchecked(octets.into()));
                    }
                    LabelType::Normal(len) => {
                        push_label(&mut octets, &mut parser, len)?;
                    }
                    LabelType::Compressed(new_ptr) => {
                        ptr = new_ptr;
                        break;
                    }
                }
            }
        }
    }
}

/// Appends a label of `len` octets from `parser` to a flat name.
fn push_label<Octs: AsRef<[u8]> + ?Sized>(
    octets: &mut Vec<u8>,
    parser: &mut Parser<'_, Octs>,
    len: usize,
) -> Result<(), ParseError> {
    octets.push(len as u8);
    octets.extend_from_slice(parser.peek(len)?);
    parser.advance(len)?;
    // There still needs to be space for the root label.
    if octets.len() >= MAX_NAME_LEN {
        return Err(NameError::LongName.into());
    }
    Ok(())
}

//------------ LabelType -----------------------------------------------------

/// The type of a label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LabelType {
    /// A normal label with its size in octets.
    Normal(usize),

    /// A compressed label with the position of where to continue.
    Compressed(usize),
}

impl LabelType {
    /// Takes a label type from the beginning of `parser`.
    fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        let ltype = parser.parse_u8()?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(ltype.into())),
            0xC0..=0xFF => {
                let res = usize::from(parser.parse_u8()?);
                let res = res | ((usize::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            _ => Err(NameError::BadLabelType.into()),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    fn p(slice: &[u8], pos: usize) -> Parser<[u8]> {
        let mut res = Parser::from_ref(slice);
        res.advance(pos).unwrap();
        res
    }

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    #[test]
    fn parse_flat() {
        let mut parser = p(b"\x03www\x07example\x03com\0\x12", 0);
        assert_eq!(Name::parse(&mut parser), Ok(name("www.example.com")));
        assert_eq!(parser.pos(), 17);

        let mut parser = p(b"\0\x12", 0);
        assert_eq!(Name::parse(&mut parser), Ok(Name::root()));
        assert_eq!(parser.pos(), 1);
    }

    #[test]
    fn parse_compressed() {
        let buf = b"\x03www\x07example\x03com\0\xc0\x04\x03foo\xc0\x11\x12";

        // A bare pointer.
        let mut parser = p(buf, 17);
        assert_eq!(Name::parse(&mut parser), Ok(name("example.com")));
        assert_eq!(parser.pos(), 19);

        // A label followed by a pointer to a pointer.
        let mut parser = p(buf, 19);
        assert_eq!(
            Name::parse(&mut parser),
            Ok(name("foo.example.com"))
        );
        assert_eq!(parser.pos(), 25);
        assert_eq!(parser.remaining(), 1);
    }

    #[test]
    fn parse_in_limited_parser() {
        // A name in record data pointing back before the data.
        let buf = b"\x07example\x03com\0\x00\x04\x03www\xc0\x00";
        let mut parser = p(buf, 15);
        let mut rdata = parser.parse_parser(6).unwrap();
        assert_eq!(Name::parse(&mut rdata), Ok(name("www.example.com")));
        assert_eq!(rdata.remaining(), 0);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn short_input() {
        assert_eq!(
            Name::parse(&mut p(b"\x03www\x07exam", 0)),
            Err(ParseError::ShortInput)
        );
        assert_eq!(
            Name::parse(&mut p(b"\x03www\x07example", 0)),
            Err(ParseError::ShortInput)
        );
        assert_eq!(
            Name::parse(&mut p(b"\x03www\xc0", 0)),
            Err(ParseError::ShortInput)
        );
    }

    #[test]
    fn bad_pointers() {
        // Pointer beyond the end of the buffer.
        assert_eq!(
            Name::parse(&mut p(b"\x03www\xc0\xee12", 0)),
            Err(NameError::BadPointer.into())
        );

        // Pointer to itself.
        assert_eq!(
            Name::parse(&mut p(b"\x03www\xc0\x0412", 4)),
            Err(NameError::BadPointer.into())
        );

        // Pointer forward.
        assert_eq!(
            Name::parse(&mut p(b"\x03www\xc0\x0612", 4)),
            Err(NameError::BadPointer.into())
        );

        // Single-step loop.
        assert_eq!(
            Name::parse(&mut p(b"\xc0\x0012", 0)),
            Err(NameError::BadPointer.into())
        );

        // Two-step loop.
        assert_eq!(
            Name::parse(&mut p(b"\xc0\x02\xc0\x0012", 2)),
            Err(NameError::BadPointer.into())
        );

        // Loop through a label.
        assert!(Name::parse(&mut p(b"\x03www\xc0\x0012", 0)).is_err());
    }

    #[test]
    fn bad_label_type() {
        assert_eq!(
            Name::parse(&mut p(b"\x03www\x07example\xbffoo", 0)),
            Err(NameError::BadLabelType.into())
        );
    }

    #[test]
    fn long_names() {
        // 255 octets are fine.
        let mut buf = Vec::from(&b"\x03123\0"[..]);
        for _ in 0..25 {
            buf.extend_from_slice(b"\x09123456789");
        }
        buf.extend_from_slice(b"\xc0\x0012");
        let mut parser = p(&buf, 5);
        let parsed = Name::parse(&mut parser).unwrap();
        assert_eq!(parsed.compose_len(), 255);
        assert_eq!(parser.remaining(), 2);

        // 256 octets are not.
        let mut buf = Vec::from(&b"\x041234\x00"[..]);
        for _ in 0..25 {
            buf.extend_from_slice(b"\x09123456789");
        }
        buf.extend_from_slice(b"\xc0\x0012");
        assert_eq!(
            Name::parse(&mut p(&buf, 6)),
            Err(NameError::LongName.into())
        );
    }

    #[test]
    fn compression_hops() {
        // A chain of `hops` pointers, each one pointing to the one before,
        // ending in the root label at position 0.
        fn chain(hops: usize) -> Vec<u8> {
            let mut buf = vec![0];
            for i in 0..hops {
                let target = if i == 0 { 0 } else { 1 + 2 * (i - 1) };
                buf.extend_from_slice(&[0xc0, target as u8]);
            }
            buf
        }

        let buf = chain(MAX_COMPRESSION_HOPS);
        let mut parser = p(&buf, buf.len() - 2);
        assert_eq!(Name::parse(&mut parser), Ok(Name::root()));
        assert_eq!(parser.remaining(), 0);

        let buf = chain(MAX_COMPRESSION_HOPS + 1);
        assert_eq!(
            Name::parse(&mut p(&buf, buf.len() - 2)),
            Err(NameError::ExcessiveCompression.into())
        );
    }

    #[test]
    fn compose_parse_round_trip() {
        let long_label = "a".repeat(63);
        let longest = format!(
            "{0}.{0}.{0}.{1}",
            long_label,
            "b".repeat(61)
        );
        for s in [
            ".",
            "a",
            "www.example.com",
            "x\\.y.\\000.\\255",
            long_label.as_str(),
            longest.as_str(),
        ] {
            let name = name(s);
            let mut buf = Vec::new();
            name.compose(&mut buf).unwrap();
            let mut parser = Parser::from_ref(&buf[..]);
            assert_eq!(Name::parse(&mut parser), Ok(name));
            assert_eq!(parser.remaining(), 0);
        }
        assert_eq!(name(&longest).compose_len(), 255);
    }
}
