//! Basics.
//!
//! This module provides the types for working with DNS data in wire
//! format: domain names, message headers, questions, and resource records,
//! plus the means to take a complete response message apart and to build
//! a query message.
//!
//! ## Parsing and Composing Messages
//!
//! We use the term *parsing* for extracting data from a wire-format
//! representation and *composing* for producing such a representation.
//! Parsing happens with an [`octseq::parse::Parser`] over the octets of the
//! complete message, since domain names in a message may reference other
//! parts of the message. Composing appends to anything that implements
//! [`octseq::builder::OctetsBuilder`].
//!
//! A [`Message`] decodes a received response in one go. The data of its
//! records is decoded by the decoders of a [`Registry`]. A
//! [`QueryBuilder`] produces the query to send.
//!
//! # Types for DNS Data
//!
//! * [charstr] for DNS character strings,
//! * [header] for the header of DNS messages,
//! * [name] for domain names,
//! * [iana] for the various well-defined numeric values,
//! * [question] for questions,
//! * [rdata] for the basics of record data,
//! * [record] for resource records, and
//! * [registry] for the record data decoders.

pub use self::charstr::CharStr;
pub use self::header::{Flags, Header, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::Message;
pub use self::message_builder::QueryBuilder;
pub use self::name::Name;
pub use self::question::Question;
pub use self::rdata::{
    RecordData, RecordDataOutcome, RtypeRecordData, UnknownRecordData,
};
pub use self::record::{Record, RecordHeader};
pub use self::registry::{RecordDecoder, Registry};
pub use self::wire::{ComposeError, FormError, ParseError};

pub mod charstr;
pub mod header;
pub mod iana;
pub mod message;
pub mod message_builder;
pub mod name;
pub mod question;
pub mod rdata;
pub mod record;
pub mod registry;
pub mod wire;
