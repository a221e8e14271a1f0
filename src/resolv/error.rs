//! Errors of the resolver client.

use crate::base::name::NameError;
use crate::base::wire::{ComposeError, FormError, ParseError};
use std::{error, fmt, io};

//------------ Error ---------------------------------------------------------

/// A query has failed.
#[derive(Debug)]
pub enum Error {
    /// A domain name was malformed.
    ///
    /// This happens when a name given to a query cannot be encoded or
    /// when a name in the response cannot be decoded.
    Format(NameError),

    /// The response was not acceptable.
    Protocol(ProtocolError),

    /// No response arrived in time.
    Timeout,

    /// Sending the query or receiving the response failed.
    Transport(io::Error),
}

impl Error {
    /// Returns whether the error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout)
    }

    /// Converts an error from the socket.
    ///
    /// Sockets with a read timeout report expiry as `WouldBlock` on Unix
    /// and as `TimedOut` on Windows.
    pub(super) fn from_io(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
                Error::Timeout
            }
            _ => Error::Transport(err),
        }
    }
}

//--- From

impl From<NameError> for Error {
    fn from(err: NameError) -> Self {
        Error::Format(err)
    }
}

impl From<ProtocolError> for Error {
    fn from(err: ProtocolError) -> Self {
        Error::Protocol(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::ShortInput => ProtocolError::ShortMessage.into(),
            ParseError::Form(err) => ProtocolError::Malformed(err).into(),
            ParseError::Name(err) => Error::Format(err),
        }
    }
}

impl From<ComposeError> for Error {
    fn from(_: ComposeError) -> Self {
        ProtocolError::LongQuery.into()
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Format(err) => write!(f, "bad domain name: {}", err),
            Error::Protocol(err) => write!(f, "bad response: {}", err),
            Error::Timeout => f.write_str("no response within timeout"),
            Error::Transport(err) => write!(f, "transport error: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Format(err) => Some(err),
            Error::Protocol(err) => Some(err),
            Error::Timeout => None,
            Error::Transport(err) => Some(err),
        }
    }
}

//------------ ProtocolError -------------------------------------------------

/// A response violates the protocol or does not belong to the query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProtocolError {
    /// The message ended before all announced data was read.
    ShortMessage,

    /// The message is structurally invalid.
    Malformed(FormError),

    /// The QR bit of the message is not set.
    NotAResponse,

    /// The message ID differs from that of the query.
    IdMismatch,

    /// The question section differs from that of the query.
    QuestionMismatch,

    /// The query does not fit into a single datagram.
    LongQuery,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProtocolError::ShortMessage => f.write_str("short message"),
            ProtocolError::Malformed(err) => fmt::Display::fmt(err, f),
            ProtocolError::NotAResponse => f.write_str("not a response"),
            ProtocolError::IdMismatch => f.write_str("message ID mismatch"),
            ProtocolError::QuestionMismatch => {
                f.write_str("question section mismatch")
            }
            ProtocolError::LongQuery => f.write_str("query too long"),
        }
    }
}

impl error::Error for ProtocolError {}

//============ Testing =======================================================
