//! Domain names.
//!
//! Domain names are a sequence of *labels* which are in turn a sequence of
//! up to 63 octets. While they are limited to a subset of ASCII by
//! convention, all octet values are allowed. In their wire-format
//! representation labels are prefixed with an octet containing the number
//! of octets in the label. The last label of every name that appears in a
//! DNS message is the empty *root label.*
//!
//! In order to save space in DNS messages, a name can end in a pointer to
//! another name stored earlier in the message. When a name is taken from a
//! message, this module follows these pointers and assembles a flat,
//! self-contained [`Name`]. Because a crafted message can contain pointers
//! that form a loop or point outside of the message, pointers are only
//! followed if they point strictly backwards and only up to
//! [`MAX_COMPRESSION_HOPS`] times per name.
//!
//! Names are always absolute. The string representation of a name may or
//! may not end in a dot, the root label is implied either way.

pub use self::absolute::Name;
pub use self::label::{Label, LabelIter};

mod absolute;
mod label;
mod parsed;

use core::fmt;

//------------ Module Configuration ------------------------------------------

/// The maximum length of a single label in octets.
pub const MAX_LABEL_LEN: usize = 63;

/// The maximum length of a name in wire format, including the root label.
pub const MAX_NAME_LEN: usize = 255;

/// The maximum number of compression pointers followed for a single name.
pub const MAX_COMPRESSION_HOPS: usize = 16;

//------------ NameError -----------------------------------------------------

/// A domain name was malformed.
///
/// This error is used both when creating a name from its string
/// representation and when taking a name out of a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// An empty label appeared in the middle of a name.
    EmptyLabel,

    /// A label was longer than 63 octets.
    LongLabel,

    /// The name was longer than 255 octets in wire format.
    LongName,

    /// A label header used one of the reserved label types.
    BadLabelType,

    /// A compression pointer pointed to itself, forward, or outside the
    /// message.
    BadPointer,

    /// More than [`MAX_COMPRESSION_HOPS`] pointers were encountered.
    ExcessiveCompression,

    /// An escape sequence in a string was invalid.
    BadEscape,

    /// A string contained a non-ASCII character.
    IllegalCharacter,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            NameError::EmptyLabel => "empty label",
            NameError::LongLabel => "long label",
            NameError::LongName => "long domain name",
            NameError::BadLabelType => "invalid label type",
            NameError::BadPointer => "invalid compression pointer",
            NameError::ExcessiveCompression => {
                "too many compression pointers"
            }
            NameError::BadEscape => "invalid escape sequence",
            NameError::IllegalCharacter => "illegal character",
        })
    }
}

impl std::error::Error for NameError {}
