//! A DNS resolver client for Rust.
//!
//! This crate sends queries to a name server over UDP and decodes the
//! responses into strongly typed records. The set of record types that is
//! decoded can be extended at runtime.
//!
//! # Modules
//!
//! * [base] contains the types to deal with DNS data in wire format:
//!   domain names, messages, questions, records, and the registry of
//!   record data decoders,
//! * [rdata] contains types and implementations for the record data of
//!   common record types, and
//! * [resolv] contains the resolver client and its configuration.
//!
//! # Example
//!
//! ```no_run
//! use hermod_dns::base::Name;
//! use hermod_dns::rdata::A;
//! use hermod_dns::resolv::ResolverClient;
//! use std::str::FromStr;
//!
//! let client = ResolverClient::from_server("192.0.2.53".parse().unwrap());
//! let name = Name::from_str("example.com").unwrap();
//! for a in client.query_typed::<A>(&name).unwrap() {
//!     println!("{}", a);
//! }
//! ```
//!
//! # Feature Flags
//!
//! * `serde`: `Serialize` for names, messages, records, and the record
//!   data of this crate.
//! * `tokio`: asynchronous queries on the Tokio runtime.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod rdata;
pub mod resolv;
