//! A single question in a DNS message.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::ParseError;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class.
///
/// Two questions are equal if their names are equal ignoring ASCII case
/// and their types and classes are identical.
#[derive(Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Question {
    /// The domain name of the question.
    qname: Name,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the quesiton.
    qclass: Class,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its three componets.
    pub fn new(qname: Name, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname,
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming class IN.
    pub fn new_in(qname: Name, qtype: Rtype) -> Self {
        Self::new(qname, qtype, Class::IN)
    }

    /// Converts the question into the qname.
    pub fn into_qname(self) -> Name {
        self.qname
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain nmae in the question,
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

/// # Parsing and Composing
///
impl Question {
    /// Takes a question from the beginning of `parser`.
    ///
    /// The name may be compressed.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        Ok(Question::new(
            Name::parse(parser)?,
            Rtype::parse(parser)?,
            Class::parse(parser)?,
        ))
    }

    /// Appends the question with an uncompressed name.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.qname.compose(target)?;
        self.qtype.compose(target)?;
        self.qclass.compose(target)
    }
}

//--- From

impl From<(Name, Rtype, Class)> for Question {
    fn from((name, rtype, class): (Name, Rtype, Class)) -> Self {
        Question::new(name, rtype, class)
    }
}

impl From<(Name, Rtype)> for Question {
    fn from((name, rtype): (Name, Rtype)) -> Self {
        Question::new_in(name, rtype)
    }
}

//--- Display and Debug

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.qname, self.qclass, self.qtype)
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Question")
            .field("qname", &self.qname)
            .field("qtype", &self.qtype)
            .field("qclass", &self.qclass)
            .finish()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn parse_compose() {
        let question = Question::new_in(
            Name::from_str("example.com").unwrap(),
            Rtype::MX,
        );
        let mut buf = Vec::new();
        question.compose(&mut buf).unwrap();
        assert_eq!(buf, b"\x07example\x03com\0\x00\x0f\x00\x01");

        let mut parser = Parser::from_ref(&buf[..]);
        assert_eq!(Question::parse(&mut parser), Ok(question.clone()));
        assert_eq!(parser.remaining(), 0);
        assert_eq!(question.to_string(), "example.com\tIN\tMX");
    }

    #[test]
    fn eq_ignores_name_case() {
        let lower = Question::new_in(
            Name::from_str("example.com").unwrap(),
            Rtype::A,
        );
        let upper = Question::new_in(
            Name::from_str("EXAMPLE.com").unwrap(),
            Rtype::A,
        );
        assert_eq!(lower, upper);
        assert_ne!(
            lower,
            Question::new_in(Name::from_str("example.com").unwrap(), Rtype::AAAA)
        );
    }

    #[test]
    fn short_question() {
        let mut parser = Parser::from_ref(&b"\x07example\x03com\0\x00\x0f"[..]);
        assert_eq!(Question::parse(&mut parser), Err(ParseError::ShortInput));
    }
}
