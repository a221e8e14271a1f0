//! A stub resolver client.
//!
//! The [`ResolverClient`] asks a single configured name server by sending
//! one query datagram and waiting for one response datagram. The response
//! is checked against the query and decoded into a
//! [`Message`][crate::base::Message].
//!
//! The client is configured through a [`ResolvConf`] which can be read from
//! the system’s `/etc/resolv.conf` on request.
//!
//! With the `tokio` feature, queries can also be made asynchronously via
//! [`ResolverClient::query_async`].

pub use self::client::ResolverClient;
pub use self::conf::{ResolvConf, ResolvOptions, ServerDiscovery};
pub use self::error::{Error, ProtocolError};

pub mod client;
pub mod conf;
pub mod error;
pub mod transport;
