//! Decoding DNS messages.
//!
//! A response datagram is decoded in one go into a [`Message`]: the
//! header, the question section, and the records of the answer, authority,
//! and additional sections in this order. The record data is decoded with
//! the decoders of a [`Registry`].
//!
//! Decoding is strict. If any part of the message can’t be decoded, the
//! whole message is rejected. Records of unknown types are not an error,
//! their data is kept raw.

use super::header::{Flags, Header, HeaderSection};
use super::iana::{Opcode, Rcode};
use super::question::Question;
use super::rdata::RecordData;
use super::record::{Record, RecordHeader};
use super::registry::Registry;
use super::wire::ParseError;
use bytes::Bytes;
use octseq::parse::Parser;

//------------ Message -------------------------------------------------------

/// A decoded DNS message.
///
/// The value is created once from a received datagram and can’t be
/// changed afterwards.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Message {
    id: u16,
    opcode: Opcode,
    flags: Flags,
    rcode: Rcode,
    questions: Vec<Question>,
    answers: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,
}

/// # Decoding
///
impl Message {
    /// Decodes a complete message.
    ///
    /// Octets following the additional section are ignored.
    pub fn from_octets(
        octets: Bytes,
        registry: &Registry,
    ) -> Result<Self, ParseError> {
        let mut parser = Parser::from_ref(&octets);
        let section = HeaderSection::parse(&mut parser)?;
        let header = *section.header();
        let counts = *section.counts();

        let mut questions = Vec::new();
        for _ in 0..counts.qdcount() {
            questions.push(Question::parse(&mut parser)?);
        }
        let answers = parse_records(&mut parser, counts.ancount(), registry)?;
        let authority =
            parse_records(&mut parser, counts.nscount(), registry)?;
        let additional =
            parse_records(&mut parser, counts.arcount(), registry)?;

        Ok(Message {
            id: header.id(),
            opcode: header.opcode(),
            flags: header.flags(),
            rcode: header.rcode(),
            questions,
            answers,
            authority,
            additional,
        })
    }

    /// Returns the header of a message without decoding the rest.
    ///
    /// This allows checking a datagram before decoding all of it. Fails
    /// if the octets are shorter than the header section.
    pub fn peek_header(octets: &[u8]) -> Result<Header, ParseError> {
        HeaderSection::parse(&mut Parser::from_ref(octets))
            .map(|section| *section.header())
    }
}

fn parse_records(
    parser: &mut Parser<'_, Bytes>,
    count: u16,
    registry: &Registry,
) -> Result<Vec<Record>, ParseError> {
    let mut res = Vec::with_capacity(usize::from(count).min(64));
    for _ in 0..count {
        res.push(
            RecordHeader::parse(parser)?.parse_into_record(parser, registry)?,
        );
    }
    Ok(res)
}

/// # Header Access
///
impl Message {
    /// Returns the transaction ID.
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Returns whether the message is a response.
    pub fn qr(&self) -> bool {
        self.flags.qr
    }

    /// Returns the opcode.
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Returns all header flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns whether the answer is authoritative.
    pub fn aa(&self) -> bool {
        self.flags.aa
    }

    /// Returns whether the message was truncated.
    pub fn tc(&self) -> bool {
        self.flags.tc
    }

    /// Returns whether recursion was desired.
    pub fn rd(&self) -> bool {
        self.flags.rd
    }

    /// Returns whether recursion is available at the server.
    pub fn ra(&self) -> bool {
        self.flags.ra
    }

    /// Returns the response code.
    pub fn rcode(&self) -> Rcode {
        self.rcode
    }
}

/// # Sections
///
impl Message {
    /// Returns the question section.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the answer section.
    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    /// Returns the authority section.
    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    /// Returns the additional section.
    pub fn additional(&self) -> &[Record] {
        &self.additional
    }

    /// Returns the record data of all answers of type `T`.
    ///
    /// Answers of other types, including unknown ones, are skipped.
    pub fn answers_of<T: RecordData>(&self) -> impl Iterator<Item = &T> {
        self.answers.iter().filter_map(|record| record.data_as())
    }

    /// Returns whether the question section equals `questions`.
    ///
    /// Names are compared ignoring ASCII case.
    pub fn has_questions(&self, questions: &[Question]) -> bool {
        self.questions == questions
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;
    use crate::base::name::Name;
    use crate::rdata::{Cname, A};
    use core::str::FromStr;
    use std::net::Ipv4Addr;

    // A response for www.example.com A with a CNAME and an A record, an
    // unknown record in the authority section, and no additional records.
    const RESPONSE: &[u8] = b"\
        \xbe\xef\x81\x80\x00\x01\x00\x02\x00\x01\x00\x00\
        \x03www\x07example\x03com\x00\x00\x01\x00\x01\
        \xc0\x0c\x00\x05\x00\x01\x00\x00\x00\x3c\x00\x02\xc0\x10\
        \xc0\x10\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\x5d\xb8\xd8\x22\
        \xc0\x10\x00\x41\x00\x01\x00\x00\x00\x00\x00\x02\xab\xcd";

    fn decode(wire: &'static [u8]) -> Result<Message, ParseError> {
        Message::from_octets(
            Bytes::from_static(wire),
            &Registry::with_defaults(),
        )
    }

    #[test]
    fn decode_response() {
        let msg = decode(RESPONSE).unwrap();
        assert_eq!(msg.id(), 0xbeef);
        assert!(msg.qr());
        assert!(msg.rd());
        assert!(msg.ra());
        assert!(!msg.aa());
        assert!(!msg.tc());
        assert_eq!(msg.opcode(), Opcode::QUERY);
        assert_eq!(msg.rcode(), Rcode::NOERROR);

        let www = Name::from_str("www.example.com").unwrap();
        assert!(msg.has_questions(&[Question::new_in(www.clone(), Rtype::A)]));

        assert_eq!(msg.answers().len(), 2);
        let cname = msg.answers()[0].data_as::<Cname>().unwrap();
        assert_eq!(cname.cname(), &Name::from_str("example.com").unwrap());
        assert_eq!(msg.answers()[0].owner(), &www);
        assert_eq!(msg.answers()[0].ttl(), 60);

        let addrs: Vec<_> = msg.answers_of::<A>().map(A::addr).collect();
        assert_eq!(addrs, [Ipv4Addr::new(93, 184, 216, 34)]);

        assert_eq!(msg.authority().len(), 1);
        assert_eq!(msg.authority()[0].rtype(), Rtype::from_int(65));
        assert!(!msg.authority()[0].data().is_known());
        assert!(msg.additional().is_empty());
    }

    #[test]
    fn counts_beyond_message() {
        // The header claims one more additional record.
        let mut wire = RESPONSE.to_vec();
        wire[11] = 1;
        let res = Message::from_octets(wire.into(), &Registry::with_defaults());
        assert_eq!(res.unwrap_err(), ParseError::ShortInput);

        assert_eq!(decode(&RESPONSE[..11]).unwrap_err(), ParseError::ShortInput);
    }

    #[test]
    fn peek_header() {
        let header = Message::peek_header(RESPONSE).unwrap();
        assert_eq!(header.id(), 0xbeef);
        assert!(header.qr());
        assert!(Message::peek_header(&RESPONSE[..3]).is_err());
    }

    #[test]
    fn empty_registry_keeps_everything_raw() {
        let msg = Message::from_octets(
            Bytes::from_static(RESPONSE),
            &Registry::new(),
        )
        .unwrap();
        assert_eq!(msg.answers().len(), 2);
        assert!(msg.answers().iter().all(|r| !r.data().is_known()));
        assert_eq!(msg.answers_of::<A>().count(), 0);
    }
}
