//! Resolver configuration
//!
//! The configuration collects the name servers to query, the time to wait
//! for a response, and the options that go into each query. It is normally
//! assembled by hand but can also be read from a glibc-style configuration
//! file, commonly known as `/etc/resolv.conf`.
//!
//! The resolver never reads host configuration by itself. Server discovery
//! only happens when [`ResolvConf::system`] or
//! [`ServerDiscovery::discover`] are called explicitly.

use std::io::{self, BufRead, Read};
use std::net::{IpAddr, Ipv4Addr, SocketAddr, SocketAddrV6};
use std::path::Path;
use std::str::SplitWhitespace;
use std::time::Duration;
use std::{error, fmt, fs};
use tracing::{debug, warn};

/// The default port of a name server.
pub const DEFAULT_PORT: u16 = 53;

/// How long to wait for a response by default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(23_500);

/// The location of the system’s configuration file.
pub const SYSTEM_CONF: &str = "/etc/resolv.conf";

//------------ ResolvOptions ------------------------------------------------

/// Options for the resolver configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvOptions {
    /// Set the recursion desired bit in queries.
    ///
    /// Enabled by default.
    pub recurse: bool,
}

impl Default for ResolvOptions {
    fn default() -> Self {
        ResolvOptions { recurse: true }
    }
}

//------------ ResolvConf ---------------------------------------------------

/// Resolver configuration.
///
/// The type follows the builder pattern. After creating a value with
/// `ResolvConf::new()` you can manipulate the members. Once you are happy
/// with them, you call `finalize()` to make sure the configuration is
/// usable. It just fixes the `servers`.
///
/// Additionally, the type can parse a glibc-style configuration file
/// through the `parse()` and `parse_file()` methods. You still need to
/// call `finalize()` after parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvConf {
    /// Addresses of servers to query.
    ///
    /// Queries only ever go to the first server.
    pub servers: Vec<SocketAddr>,

    /// How long to wait for a response before returning a timeout error.
    pub timeout: Duration,

    /// Default options.
    pub options: ResolvOptions,
}

/// # Management
///
impl ResolvConf {
    /// Creates a new, empty configuration.
    ///
    /// Using an empty configuration will fail since it does not contain
    /// any name servers. Call `self.finalize()` to make it usable.
    pub fn new() -> Self {
        ResolvConf {
            servers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            options: ResolvOptions::default(),
        }
    }

    /// Creates a configuration with a single server.
    pub fn with_server(addr: SocketAddr) -> Self {
        let mut res = Self::new();
        res.servers.push(addr);
        res
    }

    /// Finalizes the configuration for actual use.
    ///
    /// If `servers` is empty, adds `127.0.0.1:53`. This is exactly what
    /// glibc does.
    pub fn finalize(&mut self) {
        if self.servers.is_empty() {
            self.servers.push(SocketAddr::new(
                IpAddr::V4(Ipv4Addr::LOCALHOST),
                DEFAULT_PORT,
            ));
        }
    }

    /// Creates the configuration for this system.
    ///
    /// Parses the system’s configuration file, keeping the servers
    /// selected by `discovery`. If the file cannot be read, the result is
    /// the finalized empty configuration.
    pub fn system(discovery: ServerDiscovery) -> Self {
        let mut res = ResolvConf::new();
        if let Err(err) = res.parse_file(SYSTEM_CONF) {
            debug!(%err, path = SYSTEM_CONF, "cannot read resolver configuration");
        }
        res.servers.retain(|addr| discovery.accepts(addr));
        res.finalize();
        res
    }
}

/// # Parsing Configuration File
///
impl ResolvConf {
    /// Parses the configuration from a file.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let mut file = fs::File::open(path)?;
        self.parse(&mut file)
    }

    /// Parses the configuration from a reader.
    ///
    /// The format is that of the /etc/resolv.conf file. The `domain`,
    /// `search`, and `sortlist` keywords are accepted but have no effect.
    ///
    /// A `nameserver` line whose address cannot be used is skipped, just
    /// like glibc does. IPv6 addresses may carry a zone index, such as in
    /// `fe80::1%eth0`.
    ///
    /// If an error occurs, the servers of the lines before it have been
    /// added already.
    pub fn parse<R: Read>(&mut self, reader: &mut R) -> Result<(), Error> {
        for line in io::BufReader::new(reader).lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with(';') || line.starts_with('#')
            {
                continue;
            }

            let mut words = line.split_whitespace();
            let keyword = words.next();
            match keyword {
                Some("nameserver") => self.parse_nameserver(words)?,
                Some("domain") | Some("search") | Some("sortlist") => {}
                Some("options") => self.parse_options(words)?,
                _ => return Err(Error::ParseError),
            }
        }
        Ok(())
    }

    fn parse_nameserver(
        &mut self,
        mut words: SplitWhitespace,
    ) -> Result<(), Error> {
        let word = next_word(&mut words)?;
        no_more_words(words)?;
        match server_addr(word) {
            Some(addr) => self.servers.push(addr),
            None => warn!(nameserver = word, "skipping unusable name server"),
        }
        Ok(())
    }

    fn parse_options(&mut self, words: SplitWhitespace) -> Result<(), Error> {
        for word in words {
            match split_arg(word)? {
                ("timeout", Some(n)) => self.timeout = Duration::from_secs(n),
                ("no-recurse", None) => self.options.recurse = false,
                // Ignore unknown or misformated options.
                _ => {}
            }
        }
        Ok(())
    }
}

//--- Default

impl Default for ResolvConf {
    fn default() -> Self {
        Self::new()
    }
}

//--- Display

impl fmt::Display for ResolvConf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for server in &self.servers {
            if server.port() == DEFAULT_PORT {
                match server {
                    SocketAddr::V6(addr) if addr.scope_id() != 0 => writeln!(
                        f,
                        "nameserver {}%{}",
                        addr.ip(),
                        addr.scope_id()
                    )?,
                    _ => writeln!(f, "nameserver {}", server.ip())?,
                }
            } else {
                writeln!(f, "nameserver {}", server)?;
            }
        }

        let mut options = Vec::new();
        if self.timeout != DEFAULT_TIMEOUT {
            // XXX This ignores fractional seconds.
            options.push(format!("timeout:{}", self.timeout.as_secs()));
        }
        if !self.options.recurse {
            options.push("no-recurse".into())
        }
        if !options.is_empty() {
            writeln!(f, "options {}", options.join(" "))?;
        }
        Ok(())
    }
}

//------------ ServerDiscovery -----------------------------------------------

/// Which name servers to pick up from the system configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServerDiscovery {
    /// Use servers with an IPv4 address.
    pub ipv4: bool,

    /// Use servers with an IPv6 address.
    pub ipv6: bool,
}

impl ServerDiscovery {
    /// Discovery of both IPv4 and IPv6 servers.
    pub const ALL: Self = ServerDiscovery {
        ipv4: true,
        ipv6: true,
    };

    /// Discovery of IPv4 servers only.
    pub const IPV4: Self = ServerDiscovery {
        ipv4: true,
        ipv6: false,
    };

    /// Returns whether the server address should be used.
    pub fn accepts(self, addr: &SocketAddr) -> bool {
        match addr {
            SocketAddr::V4(_) => self.ipv4,
            SocketAddr::V6(_) => self.ipv6,
        }
    }

    /// Returns the servers of the system configuration.
    ///
    /// Unlike [`ResolvConf::system`], this does not fall back to the
    /// local host if there are none.
    pub fn discover(self) -> Vec<SocketAddr> {
        match fs::File::open(SYSTEM_CONF) {
            Ok(mut file) => self.discover_from(&mut file),
            Err(err) => {
                debug!(
                    %err,
                    path = SYSTEM_CONF,
                    "cannot read resolver configuration"
                );
                Vec::new()
            }
        }
    }

    /// Returns the servers of a configuration read from `reader`.
    ///
    /// The servers are returned in the order they appear. Those found
    /// before an error in the configuration are kept.
    pub fn discover_from<R: Read>(self, reader: &mut R) -> Vec<SocketAddr> {
        let mut conf = ResolvConf::new();
        if let Err(err) = conf.parse(reader) {
            debug!(%err, "error in resolver configuration");
        }
        conf.servers.retain(|addr| self.accepts(addr));
        conf.servers
    }
}

impl Default for ServerDiscovery {
    fn default() -> Self {
        Self::ALL
    }
}

//------------ Private Helpers -----------------------------------------------
//
// These are here to wrap stuff into Results.

/// Returns the address of a name server given in the configuration.
///
/// The zone index of an IPv6 address can be an interface name or number.
fn server_addr(word: &str) -> Option<SocketAddr> {
    let (addr, zone) = match word.split_once('%') {
        Some((addr, zone)) => (addr, Some(zone)),
        None => (word, None),
    };
    match (addr.parse::<IpAddr>().ok()?, zone) {
        (IpAddr::V4(addr), None) => {
            Some(SocketAddr::new(addr.into(), DEFAULT_PORT))
        }
        (IpAddr::V4(_), Some(_)) => None,
        (IpAddr::V6(addr), zone) => {
            let scope_id = match zone {
                Some(zone) => zone_index(zone)?,
                None => 0,
            };
            Some(SocketAddrV6::new(addr, DEFAULT_PORT, 0, scope_id).into())
        }
    }
}

/// Returns the index of a zone given by number or interface name.
fn zone_index(zone: &str) -> Option<u32> {
    match zone.parse() {
        Ok(index) => Some(index),
        Err(_) => interface_index(zone),
    }
}

#[cfg(unix)]
fn interface_index(name: &str) -> Option<u32> {
    let name = std::ffi::CString::new(name).ok()?;
    // SAFETY: `name` is a valid NUL terminated string.
    match unsafe { libc::if_nametoindex(name.as_ptr()) } {
        0 => None,
        index => Some(index),
    }
}

#[cfg(not(unix))]
fn interface_index(_name: &str) -> Option<u32> {
    None
}

/// Returns a reference to the next word or an error.
fn next_word<'a>(words: &mut SplitWhitespace<'a>) -> Result<&'a str, Error> {
    match words.next() {
        Some(word) => Ok(word),
        None => Err(Error::ParseError),
    }
}

/// Returns nothing but errors out if there are words left.
fn no_more_words(mut words: SplitWhitespace) -> Result<(), Error> {
    match words.next() {
        Some(..) => Err(Error::ParseError),
        None => Ok(()),
    }
}

/// Splits the name and argument from an option with arguments.
///
/// These options consist of a name followed by a colon followed by a
/// value, which so far is only a number, so we do that.
fn split_arg(s: &str) -> Result<(&str, Option<u64>), Error> {
    match s.find(':') {
        Some(idx) => {
            let (left, right) = s.split_at(idx);
            Ok((left, Some(right[1..].parse()?)))
        }
        None => Ok((s, None)),
    }
}

//------------ Error --------------------------------------------------------

/// The error that can happen when parsing `resolv.conf`.
#[derive(Debug)]
pub enum Error {
    /// The file is not a proper file.
    ParseError,

    /// Something happend while reading.
    Io(io::Error),
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::ParseError => None,
            Error::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::Io(error)
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(_: std::num::ParseIntError) -> Error {
        Error::ParseError
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ParseError => f.write_str("error parsing configuration"),
            Error::Io(err) => fmt::Display::fmt(err, f),
        }
    }
}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_resolv_conf() {
        let mut conf = ResolvConf::new();
        let data = "# generated\n\
                    nameserver 192.0.2.0\n\
                    ; comment\n\
                    nameserver 2001:db8::53\n\
                    search example.com example.net\n\
                    options ndots:2 timeout:3 no-recurse\n"
            .to_string();
        conf.parse(&mut io::Cursor::new(data)).unwrap();
        assert_eq!(
            conf.servers,
            vec![
                "192.0.2.0:53".parse::<SocketAddr>().unwrap(),
                "[2001:db8::53]:53".parse().unwrap(),
            ]
        );
        assert_eq!(conf.timeout, Duration::from_secs(3));
        assert!(!conf.options.recurse);
    }

    #[test]
    fn parse_errors() {
        for data in [
            "nameserver\n",
            "nameserver 192.0.2.1 192.0.2.2\n",
            "frobnicate\n",
            "options timeout:soon\n",
        ] {
            let mut conf = ResolvConf::new();
            assert!(
                matches!(
                    conf.parse(&mut io::Cursor::new(data)),
                    Err(Error::ParseError)
                ),
                "{:?}",
                data
            );
        }
    }

    #[test]
    fn scoped_and_unusable_nameservers() {
        let mut conf = ResolvConf::new();
        let data = "nameserver 192.0.2.1\n\
                    nameserver fe80::1%2\n\
                    nameserver fe80::2%no-such-interface0\n\
                    nameserver ns.example.com\n\
                    nameserver 192.0.2.3%2\n\
                    nameserver 192.0.2.2\n";
        conf.parse(&mut io::Cursor::new(data)).unwrap();
        assert_eq!(
            conf.servers,
            vec![
                "192.0.2.1:53".parse::<SocketAddr>().unwrap(),
                SocketAddrV6::new("fe80::1".parse().unwrap(), 53, 0, 2).into(),
                "192.0.2.2:53".parse().unwrap(),
            ]
        );
        assert_eq!(
            conf.to_string(),
            "nameserver 192.0.2.1\n\
             nameserver fe80::1%2\n\
             nameserver 192.0.2.2\n"
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn nameserver_with_interface_name() {
        let mut conf = ResolvConf::new();
        conf.parse(&mut io::Cursor::new("nameserver fe80::1%lo\n"))
            .unwrap();
        match conf.servers.as_slice() {
            [SocketAddr::V6(addr)] => assert_ne!(addr.scope_id(), 0),
            servers => panic!("unexpected servers {:?}", servers),
        }
    }

    #[test]
    fn defaults_and_finalize() {
        let mut conf = ResolvConf::default();
        assert_eq!(conf.timeout, Duration::from_millis(23_500));
        assert!(conf.options.recurse);
        assert!(conf.servers.is_empty());
        conf.finalize();
        assert_eq!(conf.servers, vec!["127.0.0.1:53".parse().unwrap()]);
        conf.finalize();
        assert_eq!(conf.servers.len(), 1);
    }

    #[test]
    fn display() {
        let mut conf = ResolvConf::with_server("192.0.2.1:53".parse().unwrap());
        conf.servers.push("192.0.2.2:5353".parse().unwrap());
        conf.timeout = Duration::from_secs(2);
        conf.options.recurse = false;
        assert_eq!(
            conf.to_string(),
            "nameserver 192.0.2.1\n\
             nameserver 192.0.2.2:5353\n\
             options timeout:2 no-recurse\n"
        );
    }

    #[test]
    fn discovery_filter() {
        let v4: SocketAddr = "192.0.2.1:53".parse().unwrap();
        let v6: SocketAddr = "[2001:db8::1]:53".parse().unwrap();
        assert!(ServerDiscovery::ALL.accepts(&v4));
        assert!(ServerDiscovery::ALL.accepts(&v6));
        assert!(ServerDiscovery::IPV4.accepts(&v4));
        assert!(!ServerDiscovery::IPV4.accepts(&v6));
    }

    #[test]
    fn discover_from() {
        let data = "nameserver 2001:db8::1\n\
                    nameserver 192.0.2.1\n\
                    nameserver fe80::1%2\n\
                    nameserver 192.0.2.2\n";
        let all =
            ServerDiscovery::ALL.discover_from(&mut io::Cursor::new(data));
        assert_eq!(
            all,
            vec![
                "[2001:db8::1]:53".parse::<SocketAddr>().unwrap(),
                "192.0.2.1:53".parse().unwrap(),
                SocketAddrV6::new("fe80::1".parse().unwrap(), 53, 0, 2).into(),
                "192.0.2.2:53".parse().unwrap(),
            ]
        );
        assert_eq!(
            ServerDiscovery::IPV4.discover_from(&mut io::Cursor::new(data)),
            vec![
                "192.0.2.1:53".parse::<SocketAddr>().unwrap(),
                "192.0.2.2:53".parse().unwrap(),
            ]
        );
        let v6_only = ServerDiscovery {
            ipv4: false,
            ipv6: true,
        };
        assert_eq!(
            v6_only.discover_from(&mut io::Cursor::new(data)),
            all.iter()
                .copied()
                .filter(SocketAddr::is_ipv6)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn discover_from_keeps_servers_before_error() {
        let data = "nameserver 192.0.2.1\n\
                    nameserver fe80::1%2\n\
                    frobnicate\n\
                    nameserver 192.0.2.2\n";
        assert_eq!(
            ServerDiscovery::ALL.discover_from(&mut io::Cursor::new(data)),
            vec![
                "192.0.2.1:53".parse::<SocketAddr>().unwrap(),
                SocketAddrV6::new("fe80::1".parse().unwrap(), 53, 0, 2).into(),
            ]
        );
    }
}
