//! Helpers for the integration tests.
//!
//! The tests talk to a fake name server on the loopback interface that
//! answers each query with a datagram produced by a function.

#![allow(dead_code)]

use std::net::{SocketAddr, UdpSocket};
use std::sync::Once;
use std::thread;
use std::time::Duration;

/// Sets up logging to stderr according to `RUST_LOG`.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env(),
            )
            .with_test_writer()
            .try_init();
    });
}

//------------ FakeServer ----------------------------------------------------

/// A name server answering queries with canned responses.
///
/// The server runs in a thread of its own. It answers each query by
/// calling its reply function with the query. If the function returns
/// `None`, the query is dropped.
pub struct FakeServer {
    addr: SocketAddr,
}

impl FakeServer {
    /// Starts a new server.
    ///
    /// The server stops after it has received `count` queries.
    pub fn start<F>(count: usize, reply: F) -> Self
    where
        F: Fn(&[u8]) -> Option<Vec<u8>> + Send + 'static,
    {
        let sock = UdpSocket::bind("127.0.0.1:0").unwrap();
        sock.set_read_timeout(Some(Duration::from_secs(10))).unwrap();
        let addr = sock.local_addr().unwrap();
        thread::spawn(move || {
            let mut buf = [0u8; 512];
            for _ in 0..count {
                let (len, peer) = match sock.recv_from(&mut buf) {
                    Ok(some) => some,
                    Err(_) => return,
                };
                if let Some(response) = reply(&buf[..len]) {
                    let _ = sock.send_to(&response, peer);
                }
            }
        });
        FakeServer { addr }
    }

    /// Returns the address of the server.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

//------------ Responses -----------------------------------------------------

/// Turns a query into a response carrying the given records.
///
/// The records are appended to the question section. Their owner names
/// can point to the query name at offset 12. The counts are those of the
/// answer, authority, and additional sections.
pub fn respond(query: &[u8], counts: [u16; 3], records: &[u8]) -> Vec<u8> {
    let mut res = query.to_vec();
    res[2] |= 0x80; // QR
    res[3] |= 0x80; // RA
    res[6..8].copy_from_slice(&counts[0].to_be_bytes());
    res[8..10].copy_from_slice(&counts[1].to_be_bytes());
    res[10..12].copy_from_slice(&counts[2].to_be_bytes());
    res.extend_from_slice(records);
    res
}

/// Returns the wire format of a record owned by the query name.
pub fn record(rtype: u16, ttl: u32, data: &[u8]) -> Vec<u8> {
    let mut res = vec![0xc0, 0x0c];
    res.extend_from_slice(&rtype.to_be_bytes());
    res.extend_from_slice(&1u16.to_be_bytes());
    res.extend_from_slice(&ttl.to_be_bytes());
    res.extend_from_slice(&(data.len() as u16).to_be_bytes());
    res.extend_from_slice(data);
    res
}
