//! The registry of record data decoders.
//!
//! When a record is taken from a message, its record type determines how
//! the record data is to be decoded. The [`Registry`] maps record types to
//! [`RecordDecoder`]s. Types without a decoder are kept as raw data.
//!
//! A registry with decoders for all the record data types of this crate is
//! available through [`Registry::with_defaults`]. Further types are added
//! via [`Registry::register_type`] for types implementing
//! [`RtypeRecordData`] or via [`Registry::register_fn`] for anything else.

use super::iana::Rtype;
use super::rdata::{RecordData, RtypeRecordData};
use super::record::RecordHeader;
use super::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;
use std::collections::HashMap;
use std::sync::Arc;

//------------ RecordDecoder -------------------------------------------------

/// A function decoding record data.
///
/// The function receives the header of the record and a parser limited to
/// the record data. It must consume exactly all of the data.
pub type RecordDecoder = Arc<
    dyn Fn(
            &RecordHeader,
            &mut Parser<'_, Bytes>,
        ) -> Result<Arc<dyn RecordData>, ParseError>
        + Send
        + Sync,
>;

//------------ Registry ------------------------------------------------------

/// A mapping from record types to record data decoders.
#[derive(Clone, Default)]
pub struct Registry {
    decoders: HashMap<Rtype, RecordDecoder>,
}

impl Registry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with all record data types of this crate.
    pub fn with_defaults() -> Self {
        let mut res = Self::new();
        crate::rdata::register_defaults(&mut res);
        res
    }

    /// Registers a decoder for a record type.
    ///
    /// If there already was a decoder for the type, it is replaced and
    /// returned.
    pub fn register(
        &mut self,
        rtype: Rtype,
        decoder: RecordDecoder,
    ) -> Option<RecordDecoder> {
        self.decoders.insert(rtype, decoder)
    }

    /// Registers a function as the decoder for a record type.
    pub fn register_fn<F>(&mut self, rtype: Rtype, decoder: F)
    where
        F: Fn(
                &RecordHeader,
                &mut Parser<'_, Bytes>,
            ) -> Result<Arc<dyn RecordData>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        self.register(rtype, Arc::new(decoder));
    }

    /// Registers the record data type `T` for its record type.
    pub fn register_type<T: RtypeRecordData>(&mut self) {
        self.register(T::RTYPE, Arc::new(decode_rtype_record_data::<T>));
    }

    /// Returns the decoder for a record type if there is one.
    pub fn lookup(&self, rtype: Rtype) -> Option<&RecordDecoder> {
        self.decoders.get(&rtype)
    }

    /// Returns whether there is a decoder for the record type.
    pub fn contains(&self, rtype: Rtype) -> bool {
        self.decoders.contains_key(&rtype)
    }

    /// Returns the number of registered record types.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Returns an iterator over the registered record types.
    pub fn rtypes(&self) -> impl Iterator<Item = Rtype> + '_ {
        self.decoders.keys().copied()
    }
}

fn decode_rtype_record_data<T: RtypeRecordData>(
    _header: &RecordHeader,
    parser: &mut Parser<'_, Bytes>,
) -> Result<Arc<dyn RecordData>, ParseError> {
    T::parse_rdata(parser).map(|data| Arc::new(data) as Arc<dyn RecordData>)
}

//--- Debug

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rtypes: Vec<_> = self.rtypes().collect();
        rtypes.sort();
        f.debug_struct("Registry").field("rtypes", &rtypes).finish()
    }
}

//============ Testing =======================================================
