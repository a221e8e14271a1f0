//! Underlying transport protocols.
//!
//! A query is a single exchange of datagrams with a server over an
//! ephemeral socket that is dropped once the exchange is complete. The
//! [`DgramConnect`] trait creates such sockets and [`DgramConnection`]
//! does the exchanging. [`UdpConnect`] provides both over the standard
//! library’s UDP sockets.

use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;

/// How many times do we try a new random port if we get ‘address in use.’
const RETRY_RANDOM_PORT: usize = 10;

//------------ DgramConnect --------------------------------------------------

/// Establish a datagram connection.
pub trait DgramConnect {
    /// The type of an established connection.
    type Connection: DgramConnection;

    /// Creates a connection to `addr`.
    ///
    /// Both sending and receiving on the connection must fail if they take
    /// longer than `timeout`.
    fn connect(
        &self,
        addr: SocketAddr,
        timeout: Duration,
    ) -> Result<Self::Connection, io::Error>;
}

//------------ DgramConnection -----------------------------------------------

/// Send and receive datagrams on a connection.
pub trait DgramConnection {
    /// Sends a datagram.
    fn send(&self, buf: &[u8]) -> Result<usize, io::Error>;

    /// Receives a single datagram into `buf`.
    ///
    /// Returns the buffer truncated to the size of the datagram. Expiry
    /// of the timeout is reported as an error of kind `WouldBlock` or
    /// `TimedOut`.
    fn recv(&self, buf: Vec<u8>) -> Result<Vec<u8>, io::Error>;
}

//------------ UdpConnect ----------------------------------------------------

/// Create new UDP connections.
#[derive(Clone, Copy, Debug, Default)]
pub struct UdpConnect;

impl UdpConnect {
    /// Create new UDP connections.
    pub fn new() -> Self {
        UdpConnect
    }
}

impl DgramConnect for UdpConnect {
    type Connection = UdpDgram;

    fn connect(
        &self,
        addr: SocketAddr,
        timeout: Duration,
    ) -> Result<Self::Connection, io::Error> {
        UdpDgram::new(addr, timeout)
    }
}

/// A single UDP 'connection'.
#[derive(Debug)]
pub struct UdpDgram {
    /// Underlying UDP socket
    sock: UdpSocket,
}

impl UdpDgram {
    /// Create a new UdpDgram object.
    fn new(addr: SocketAddr, timeout: Duration) -> Result<Self, io::Error> {
        let sock = Self::udp_bind(addr.is_ipv4())?;
        sock.set_read_timeout(Some(timeout))?;
        sock.set_write_timeout(Some(timeout))?;
        sock.connect(addr)?;
        Ok(Self { sock })
    }

    /// Bind to a local UDP port.
    fn udp_bind(v4: bool) -> Result<UdpSocket, io::Error> {
        let mut i = 0;
        loop {
            let local: SocketAddr = if v4 {
                ([0u8; 4], 0).into()
            } else {
                ([0u16; 8], 0).into()
            };
            match UdpSocket::bind(local) {
                Ok(sock) => return Ok(sock),
                Err(err) => {
                    if i == RETRY_RANDOM_PORT {
                        return Err(err);
                    } else {
                        i += 1
                    }
                }
            }
        }
    }

    /// Returns the local address of the socket.
    pub fn local_addr(&self) -> Result<SocketAddr, io::Error> {
        self.sock.local_addr()
    }
}

impl DgramConnection for UdpDgram {
    fn send(&self, buf: &[u8]) -> Result<usize, io::Error> {
        self.sock.send(buf)
    }

    fn recv(&self, mut buf: Vec<u8>) -> Result<Vec<u8>, io::Error> {
        let len = self.sock.recv(&mut buf)?;
        buf.truncate(len);
        Ok(buf)
    }
}

//------------ AsyncUdpDgram -------------------------------------------------

/// A single UDP 'connection' on the Tokio runtime.
#[cfg(feature = "tokio")]
#[derive(Debug)]
pub struct AsyncUdpDgram {
    sock: tokio::net::UdpSocket,
}

#[cfg(feature = "tokio")]
impl AsyncUdpDgram {
    /// Creates a new connection to `addr`.
    pub async fn connect(addr: SocketAddr) -> Result<Self, io::Error> {
        let mut i = 0;
        let sock = loop {
            let local: SocketAddr = if addr.is_ipv4() {
                ([0u8; 4], 0).into()
            } else {
                ([0u16; 8], 0).into()
            };
            match tokio::net::UdpSocket::bind(local).await {
                Ok(sock) => break sock,
                Err(err) => {
                    if i == RETRY_RANDOM_PORT {
                        return Err(err);
                    } else {
                        i += 1
                    }
                }
            }
        };
        sock.connect(addr).await?;
        Ok(Self { sock })
    }

    /// Sends a datagram.
    pub async fn send(&self, buf: &[u8]) -> Result<usize, io::Error> {
        self.sock.send(buf).await
    }

    /// Receives a single datagram into `buf`.
    pub async fn recv(&self, mut buf: Vec<u8>) -> Result<Vec<u8>, io::Error> {
        let len = self.sock.recv(&mut buf).await?;
        buf.truncate(len);
        Ok(buf)
    }
}

//============ Testing =======================================================
