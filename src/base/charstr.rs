//! Character strings.
//!
//! The somewhat ill-named `<character-string>` is defined in [RFC 1035] as
//! binary information of up to 255 octets. In wire format it is preceded by
//! a single octet with its length. It appears in record data such as TXT
//! and HINFO.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ CharStr -------------------------------------------------------

/// The content of a DNS character string.
///
/// The value keeps a slice of the message it was parsed from.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct CharStr(Bytes);

impl CharStr {
    /// Creates a character string from a slice of at most 255 octets.
    pub fn from_slice(slice: &[u8]) -> Result<Self, CharStrError> {
        if slice.len() > 255 {
            Err(CharStrError)
        } else {
            Ok(CharStr(Bytes::copy_from_slice(slice)))
        }
    }

    /// Returns the content of the string.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Returns the length of the content in octets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Takes a length-prefixed character string from the parser.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let len = usize::from(parser.parse_u8()?);
        let pos = parser.pos();
        parser.advance(len)?;
        Ok(CharStr(parser.octets_ref().slice(pos..pos + len)))
    }
}

//--- AsRef

impl AsRef<[u8]> for CharStr {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- Display and Debug

impl fmt::Display for CharStr {
    /// Formats the string in quotes, escaping quotes, backslashes, and
    /// non-printable octets.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"")?;
        for &ch in self.as_slice() {
            if ch == b'"' || ch == b'\\' {
                write!(f, "\\{}", ch as char)?;
            } else if !(0x20..0x7F).contains(&ch) {
                write!(f, "\\{:03}", ch)?;
            } else {
                write!(f, "{}", ch as char)?;
            }
        }
        f.write_str("\"")
    }
}

impl fmt::Debug for CharStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CharStr({})", self)
    }
}

//--- Serialize

#[cfg(feature = "serde")]
impl serde::Serialize for CharStr {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(self.as_slice()))
    }
}

//------------ CharStrError --------------------------------------------------

/// A character string would be longer than 255 octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CharStrError;

impl fmt::Display for CharStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("long character string")
    }
}

impl std::error::Error for CharStrError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let bytes = Bytes::from_static(b"\x03foo\x00\x02");
        let mut parser = Parser::from_ref(&bytes);
        assert_eq!(CharStr::parse(&mut parser).unwrap().as_slice(), b"foo");
        assert!(CharStr::parse(&mut parser).unwrap().is_empty());
        assert_eq!(CharStr::parse(&mut parser), Err(ParseError::ShortInput));
    }

    #[test]
    fn display() {
        let s = CharStr::from_slice(b"say \"hi\"\\\n").unwrap();
        assert_eq!(s.to_string(), "\"say \\\"hi\\\"\\\\\\010\"");
        assert_eq!(CharStr::from_slice(&[0; 256]), Err(CharStrError));
    }
}
