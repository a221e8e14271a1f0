//! The resolver client.
//!
//! A [`ResolverClient`] sends a query to a name server and decodes the
//! response into a [`Message`]. Each query is a single exchange of
//! datagrams over a socket of its own, so a client can be shared between
//! threads freely.

use super::conf::{ResolvConf, ServerDiscovery, DEFAULT_PORT};
use super::error::{Error, ProtocolError};
use super::transport::{DgramConnect, DgramConnection, UdpConnect};
use crate::base::iana::Rtype;
use crate::base::message::Message;
use crate::base::message_builder::QueryBuilder;
use crate::base::name::Name;
use crate::base::rdata::RtypeRecordData;
use crate::base::registry::{RecordDecoder, Registry};
use arc_swap::ArcSwap;
use bytes::Bytes;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use std::{fmt, io};
use tracing::{debug, trace, warn};

/// The maximum size of a datagram sent or received.
pub const MAX_DGRAM_LEN: usize = 512;

//------------ ResolverClient ------------------------------------------------

/// A client for querying a name server.
///
/// The client keeps a list of servers but all queries go to the first
/// one. There is no fail-over to the others and no retrying. Both are left
/// to the caller.
///
/// The record data in responses is decoded by the client’s [`Registry`].
/// It starts out with all record data types of this crate. Further types
/// can be added at any time, even while queries are in flight.
pub struct ResolverClient<C = UdpConnect> {
    /// The name servers. Only the first is used.
    servers: Vec<SocketAddr>,

    /// How long to wait for a response.
    timeout: Duration,

    /// Whether to set the RD bit in queries.
    recursion_desired: bool,

    /// The record data decoders.
    registry: ArcSwap<Registry>,

    /// Creates the sockets for queries.
    connect: C,
}

/// # Creation
///
impl ResolverClient<UdpConnect> {
    /// Creates a new client from a configuration.
    ///
    /// The configuration is used as is. If it should fall back to the
    /// local host, call [`ResolvConf::finalize`] first.
    pub fn new(conf: ResolvConf) -> Self {
        Self::with_connect(conf, UdpConnect::new())
    }

    /// Creates a new client for a single server on the default port.
    pub fn from_server(addr: IpAddr) -> Self {
        Self::from_server_port(addr, DEFAULT_PORT)
    }

    /// Creates a new client for a single server on the given port.
    pub fn from_server_port(addr: IpAddr, port: u16) -> Self {
        Self::from_socket_addrs([SocketAddr::new(addr, port)])
    }

    /// Creates a new client for a list of servers sharing a port.
    pub fn from_addrs(
        addrs: impl IntoIterator<Item = IpAddr>,
        port: u16,
    ) -> Self {
        Self::from_socket_addrs(
            addrs.into_iter().map(|addr| SocketAddr::new(addr, port)),
        )
    }

    /// Creates a new client for a list of server socket addresses.
    pub fn from_socket_addrs(
        addrs: impl IntoIterator<Item = SocketAddr>,
    ) -> Self {
        let mut conf = ResolvConf::new();
        conf.servers.extend(addrs);
        Self::new(conf)
    }

    /// Creates a new client with the system’s servers.
    ///
    /// The servers from the system configuration selected by `discovery`
    /// are appended to the `manual` servers.
    pub fn with_discovery(
        manual: impl IntoIterator<Item = SocketAddr>,
        discovery: ServerDiscovery,
    ) -> Self {
        Self::from_socket_addrs(
            manual.into_iter().chain(discovery.discover()),
        )
    }
}

impl<C> ResolverClient<C> {
    /// Creates a new client that uses `connect` for its sockets.
    pub fn with_connect(conf: ResolvConf, connect: C) -> Self {
        ResolverClient {
            servers: conf.servers,
            timeout: conf.timeout,
            recursion_desired: conf.options.recurse,
            registry: ArcSwap::from_pointee(Registry::with_defaults()),
            connect,
        }
    }
}

/// # Configuration
///
impl<C> ResolverClient<C> {
    /// Returns the configured servers.
    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }

    /// Returns the time to wait for a response.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sets the time to wait for a response.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout
    }

    /// Returns whether queries ask for recursion.
    pub fn recursion_desired(&self) -> bool {
        self.recursion_desired
    }

    /// Sets whether queries ask for recursion.
    pub fn set_recursion_desired(&mut self, value: bool) {
        self.recursion_desired = value
    }

    /// Returns a snapshot of the current registry.
    pub fn registry(&self) -> std::sync::Arc<Registry> {
        self.registry.load_full()
    }

    /// Registers the record data type `T` for decoding responses.
    ///
    /// Replaces a decoder previously registered for the record type.
    /// Queries already in flight keep using the previous registry.
    pub fn register_record_type<T: RtypeRecordData>(&self) {
        self.registry.rcu(|registry| {
            let mut registry = Registry::clone(registry);
            registry.register_type::<T>();
            registry
        });
    }

    /// Registers a decoder for a record type.
    pub fn register_decoder(&self, rtype: Rtype, decoder: RecordDecoder) {
        self.registry.rcu(|registry| {
            let mut registry = Registry::clone(registry);
            registry.register(rtype, decoder.clone());
            registry
        });
    }
}

/// # Queries
///
impl<C: DgramConnect> ResolverClient<C> {
    /// Queries the first server for records of the given types.
    ///
    /// A question is added for each record type. If `rtypes` is empty,
    /// a single question for `ANY` is asked.
    ///
    /// A response with an error response code or with the TC bit set is
    /// still returned successfully. Check the message for these.
    pub fn query(
        &self,
        qname: &Name,
        rtypes: &[Rtype],
    ) -> Result<Message, Error> {
        let (server, builder, query) = self.prepare(qname, rtypes)?;
        let conn = self
            .connect
            .connect(server, self.timeout)
            .map_err(Error::from_io)?;
        conn.send(&query).map_err(Error::from_io)?;
        let response =
            conn.recv(vec![0; MAX_DGRAM_LEN]).map_err(Error::from_io)?;
        self.decode_response(&builder, response)
    }

    /// Queries for records of type `T` and returns their data.
    ///
    /// Only answers that were decoded into a `T` are returned.
    pub fn query_typed<T: RtypeRecordData + Clone>(
        &self,
        qname: &Name,
    ) -> Result<Vec<T>, Error> {
        self.query_map(qname, T::clone)
    }

    /// Queries for records of type `T` and returns the first one.
    ///
    /// Returns `Ok(None)` if the response has no such answer.
    pub fn query_first<T: RtypeRecordData + Clone>(
        &self,
        qname: &Name,
    ) -> Result<Option<T>, Error> {
        let response = self.query(qname, &[T::RTYPE])?;
        let first = response.answers_of::<T>().next().cloned();
        Ok(first)
    }

    /// Queries for records of type `T` and maps their data with `op`.
    pub fn query_map<T, U, F>(&self, qname: &Name, op: F) -> Result<Vec<U>, Error>
    where
        T: RtypeRecordData,
        F: FnMut(&T) -> U,
    {
        let response = self.query(qname, &[T::RTYPE])?;
        Ok(response.answers_of::<T>().map(op).collect())
    }
}

#[cfg(feature = "tokio")]
impl<C> ResolverClient<C> {
    /// Queries the first server using the Tokio runtime.
    ///
    /// This behaves like [`query`][ResolverClient::query] but does not
    /// block the thread while waiting.
    pub async fn query_async(
        &self,
        qname: &Name,
        rtypes: &[Rtype],
    ) -> Result<Message, Error> {
        use super::transport::AsyncUdpDgram;

        let (server, builder, query) = self.prepare(qname, rtypes)?;
        let exchange = async {
            let conn = AsyncUdpDgram::connect(server).await?;
            conn.send(&query).await?;
            conn.recv(vec![0; MAX_DGRAM_LEN]).await
        };
        let response = match tokio::time::timeout(self.timeout, exchange).await
        {
            Ok(res) => res.map_err(Error::from_io)?,
            Err(_) => return Err(Error::Timeout),
        };
        self.decode_response(&builder, response)
    }
}

impl<C> ResolverClient<C> {
    /// Picks the server and produces the query.
    fn prepare(
        &self,
        qname: &Name,
        rtypes: &[Rtype],
    ) -> Result<(SocketAddr, QueryBuilder, Vec<u8>), Error> {
        let server = match self.servers.first() {
            Some(server) => *server,
            None => {
                return Err(Error::Transport(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no server configured",
                )))
            }
        };

        let mut builder = QueryBuilder::new();
        builder.set_rd(self.recursion_desired);
        if rtypes.is_empty() {
            builder.push((qname.clone(), Rtype::ANY));
        } else {
            for rtype in rtypes {
                builder.push((qname.clone(), *rtype));
            }
        }
        let query = builder.finish()?;
        if query.len() > MAX_DGRAM_LEN {
            return Err(ProtocolError::LongQuery.into());
        }
        debug!(
            %server,
            id = builder.header().id(),
            %qname,
            qtypes = ?rtypes,
            "sending query"
        );
        Ok((server, builder, query))
    }

    /// Checks and decodes a response to the query from `builder`.
    fn decode_response(
        &self,
        builder: &QueryBuilder,
        response: Vec<u8>,
    ) -> Result<Message, Error> {
        trace!(len = response.len(), "received response");
        let header = Message::peek_header(&response)?;
        if !header.qr() {
            warn!(id = header.id(), "rejecting message without QR bit");
            return Err(ProtocolError::NotAResponse.into());
        }
        if header.id() != builder.header().id() {
            warn!(
                expected = builder.header().id(),
                received = header.id(),
                "rejecting response with wrong ID"
            );
            return Err(ProtocolError::IdMismatch.into());
        }
        let registry = self.registry.load();
        let message = Message::from_octets(Bytes::from(response), &registry)?;
        if !message.has_questions(builder.questions()) {
            warn!(id = message.id(), "rejecting response with wrong question");
            return Err(ProtocolError::QuestionMismatch.into());
        }
        Ok(message)
    }
}

//--- Debug

impl<C: fmt::Debug> fmt::Debug for ResolverClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ResolverClient")
            .field("servers", &self.servers)
            .field("timeout", &self.timeout)
            .field("recursion_desired", &self.recursion_desired)
            .field("registry", &*self.registry.load())
            .field("connect", &self.connect)
            .finish()
    }
}

//============ Testing =======================================================
