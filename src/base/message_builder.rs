//! Building query messages.
//!
//! A query consists of the header section and the question section only.
//! The [`QueryBuilder`] collects the questions and produces the wire
//! format with uncompressed names.

use super::header::{Header, HeaderCounts, HeaderSection};
use super::iana::Opcode;
use super::question::Question;
use super::wire::ComposeError;
use octseq::builder::{OctetsBuilder, ShortBuf};

//------------ QueryBuilder --------------------------------------------------

/// A builder for a query message.
///
/// A new builder starts out with a random message ID, the opcode QUERY,
/// and all flags cleared.
#[derive(Clone, Debug)]
pub struct QueryBuilder {
    header: Header,
    questions: Vec<Question>,
}

impl QueryBuilder {
    /// Creates a new builder without questions.
    pub fn new() -> Self {
        let mut header = Header::new();
        header.set_random_id();
        header.set_opcode(Opcode::QUERY);
        QueryBuilder {
            header,
            questions: Vec::new(),
        }
    }

    /// Returns the header of the query.
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns a mutable reference to the header of the query.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Sets whether the server should resolve the query recursively.
    pub fn set_rd(&mut self, rd: bool) -> &mut Self {
        self.header.set_rd(rd);
        self
    }

    /// Appends a question.
    pub fn push(&mut self, question: impl Into<Question>) -> &mut Self {
        self.questions.push(question.into());
        self
    }

    /// Returns the questions added so far.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Appends the wire format of the query to `target`.
    ///
    /// Fails with [`ComposeError::LongData`] if there are more than 65535
    /// questions.
    pub fn compose<Target>(&self, target: &mut Target) -> Result<(), ComposeError>
    where
        Target: OctetsBuilder + ?Sized,
        Target::AppendError: Into<ShortBuf>,
    {
        let mut counts = HeaderCounts::new();
        counts.set_qdcount(
            u16::try_from(self.questions.len())
                .map_err(|_| ComposeError::LongData)?,
        );
        let mut section = HeaderSection::new();
        *section.header_mut() = self.header;
        *section.counts_mut() = counts;
        section.compose(target)?;
        for question in &self.questions {
            question.compose(target)?;
        }
        Ok(())
    }

    /// Returns the wire format of the query.
    pub fn finish(&self) -> Result<Vec<u8>, ComposeError> {
        let mut res = Vec::with_capacity(512);
        self.compose(&mut res)?;
        Ok(res)
    }
}

//--- Default

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;
    use crate::base::name::Name;
    use core::str::FromStr;

    #[test]
    fn single_question() {
        let mut builder = QueryBuilder::new();
        builder.header_mut().set_id(0x1234);
        builder
            .set_rd(true)
            .push((Name::from_str("example.com").unwrap(), Rtype::A));
        assert_eq!(
            builder.finish().unwrap(),
            b"\x12\x34\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
              \x07example\x03com\x00\x00\x01\x00\x01"
        );
    }

    #[test]
    fn question_per_type() {
        let name = Name::from_str("example.com").unwrap();
        let mut builder = QueryBuilder::new();
        builder.push((name.clone(), Rtype::A));
        builder.push((name, Rtype::AAAA));
        let wire = builder.finish().unwrap();
        assert_eq!(&wire[2..6], b"\x00\x00\x00\x02");
        assert_eq!(wire.len(), 12 + 2 * 17);
        assert_eq!(&wire[wire.len() - 4..], b"\x00\x1c\x00\x01");
    }

    #[test]
    fn random_id() {
        // Two random IDs are equal once in 65536 tries. Three are not.
        let ids = [
            QueryBuilder::new().header().id(),
            QueryBuilder::new().header().id(),
            QueryBuilder::new().header().id(),
        ];
        assert!(ids[0] != ids[1] || ids[1] != ids[2]);
    }
}
