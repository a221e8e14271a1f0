//! Record data for the TXT record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::charstr::CharStr;
use crate::base::iana::Rtype;
use crate::base::rdata::{RecordData, RtypeRecordData};
use crate::base::wire::ParseError;
use bytes::Bytes;
use core::{fmt, slice};
use octseq::parse::Parser;

//------------ Txt ----------------------------------------------------------

/// TXT record data.
///
/// TXT records hold descriptive text. The record data consists of one or
/// more character strings.
///
/// The TXT record type is defined in [RFC 1035, section 3.3.14][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.14
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Txt {
    strings: Vec<CharStr>,
}

impl Txt {
    /// Creates new TXT record data from a list of character strings.
    ///
    /// Returns `None` if the list is empty.
    pub fn new(strings: Vec<CharStr>) -> Option<Self> {
        if strings.is_empty() {
            None
        } else {
            Some(Txt { strings })
        }
    }

    /// Returns an iterator over the character strings.
    pub fn iter(&self) -> slice::Iter<CharStr> {
        self.strings.iter()
    }

    /// Returns the character strings as a slice.
    pub fn strings(&self) -> &[CharStr] {
        &self.strings
    }

    /// Returns the content of all strings concatenated.
    pub fn text(&self) -> Vec<u8> {
        self.strings
            .iter()
            .flat_map(|s| s.as_slice().iter().copied())
            .collect()
    }

    /// Takes the strings from the remainder of the parser.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let mut strings = Vec::new();
        while parser.remaining() > 0 {
            strings.push(CharStr::parse(parser)?);
        }
        Self::new(strings)
            .ok_or_else(|| ParseError::form_error("empty TXT record"))
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a Txt {
    type Item = &'a CharStr;
    type IntoIter = slice::Iter<'a, CharStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- RecordData and RtypeRecordData

impl RecordData for Txt {
    fn rtype(&self) -> Rtype {
        Rtype::TXT
    }
}

impl RtypeRecordData for Txt {
    const RTYPE: Rtype = Rtype::TXT;

    fn parse_rdata(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Self::parse(parser)
    }
}

//--- Display

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for string in &self.strings {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            fmt::Display::fmt(string, f)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_several_strings() {
        let bytes = Bytes::from_static(b"\x05v=spf\x0a1 -all moo\x00");
        let mut parser = Parser::from_ref(&bytes);
        let txt = Txt::parse_rdata(&mut parser).unwrap();
        assert_eq!(txt.iter().count(), 3);
        assert_eq!(txt.text(), b"v=spf1 -all moo");
        assert_eq!(txt.to_string(), "\"v=spf\" \"1 -all moo\" \"\"");
    }

    #[test]
    fn parse_empty() {
        let bytes = Bytes::new();
        let mut parser = Parser::from_ref(&bytes);
        assert!(matches!(
            Txt::parse_rdata(&mut parser),
            Err(ParseError::Form(_))
        ));
        assert!(Txt::new(Vec::new()).is_none());
    }

    #[test]
    fn parse_overlong_string() {
        let bytes = Bytes::from_static(b"\x05abc");
        let mut parser = Parser::from_ref(&bytes);
        assert_eq!(Txt::parse_rdata(&mut parser), Err(ParseError::ShortInput));
    }
}
