//! Owned absolute domain names.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::label::LabelIter;
use super::{NameError, MAX_LABEL_LEN, MAX_NAME_LEN};
use bytes::Bytes;
use core::{fmt, hash, str};
use octseq::builder::OctetsBuilder;

//------------ Name ----------------------------------------------------------

/// An uncompressed, absolute domain name.
///
/// The name is kept in its wire format: a sequence of length-prefixed
/// labels ending in the root label. Names taken from a message have their
/// compression pointers resolved, so a `Name` never refers back into the
/// message it came from.
///
/// Comparison and hashing ignore ASCII case.
#[derive(Clone)]
pub struct Name {
    octets: Bytes,
}

impl Name {
    /// Creates a name from octets without checking them.
    ///
    /// The octets must be a valid uncompressed name in wire format.
    pub(super) fn from_bytes_unchecked(octets: Bytes) -> Self {
        Name { octets }
    }

    /// Returns the root name.
    pub fn root() -> Self {
        Self::from_bytes_unchecked(Bytes::from_static(b"\0"))
    }

    /// Creates a name from a sequence of label contents.
    ///
    /// The root label is appended automatically and must not be part of
    /// `labels`.
    pub fn from_labels<'a, I>(labels: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut octets = Vec::new();
        for label in labels {
            if label.is_empty() {
                return Err(NameError::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(NameError::LongLabel);
            }
            octets.push(label.len() as u8);
            octets.extend_from_slice(label);
            if octets.len() >= MAX_NAME_LEN {
                return Err(NameError::LongName);
            }
        }
        octets.push(0);
        Ok(Self::from_bytes_unchecked(octets.into()))
    }

    /// Returns the wire format of the name.
    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Returns whether the name is the root name.
    pub fn is_root(&self) -> bool {
        self.octets.len() == 1
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The root label is not included.
    pub fn iter_labels(&self) -> LabelIter {
        LabelIter::new(self.as_slice())
    }

    /// Returns the number of labels, not counting the root label.
    pub fn label_count(&self) -> usize {
        self.iter_labels().count()
    }

    /// Returns the length of the name in wire format.
    pub fn compose_len(&self) -> u16 {
        self.octets.len() as u16
    }

    /// Appends the uncompressed wire format of the name to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.as_slice())
    }
}

//--- FromStr

impl str::FromStr for Name {
    type Err = NameError;

    /// Parses a name from its presentation format.
    ///
    /// Labels are separated by dots, a final dot is optional. A dot or
    /// backslash can be part of a label through the escape `\X`, arbitrary
    /// octets through `\DDD` with a three digit decimal value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "." {
            return Ok(Self::root());
        }
        let mut octets = Vec::with_capacity(s.len() + 2);
        let mut start = 0;
        octets.push(0);
        let mut chars = s.chars();
        loop {
            match chars.next() {
                Some('.') => {
                    close_label(&mut octets, start)?;
                    if chars.as_str().is_empty() {
                        break;
                    }
                    start = octets.len();
                    octets.push(0);
                }
                Some('\\') => octets.push(parse_escape(&mut chars)?),
                Some(ch) if ch.is_ascii() => octets.push(ch as u8),
                Some(_) => return Err(NameError::IllegalCharacter),
                None => {
                    close_label(&mut octets, start)?;
                    break;
                }
            }
        }
        octets.push(0);
        if octets.len() > MAX_NAME_LEN {
            return Err(NameError::LongName);
        }
        Ok(Self::from_bytes_unchecked(octets.into()))
    }
}

/// Fills in the length octet of the label starting at `start`.
fn close_label(octets: &mut [u8], start: usize) -> Result<(), NameError> {
    let len = octets.len() - start - 1;
    if len == 0 {
        return Err(NameError::EmptyLabel);
    }
    if len > MAX_LABEL_LEN {
        return Err(NameError::LongLabel);
    }
    octets[start] = len as u8;
    Ok(())
}

/// Parses the remainder of an escape sequence after the backslash.
fn parse_escape(chars: &mut str::Chars) -> Result<u8, NameError> {
    let ch = chars.next().ok_or(NameError::BadEscape)?;
    if let Some(first) = ch.to_digit(10) {
        let mut res = first;
        for _ in 0..2 {
            let digit = chars
                .next()
                .and_then(|ch| ch.to_digit(10))
                .ok_or(NameError::BadEscape)?;
            res = res * 10 + digit;
        }
        u8::try_from(res).map_err(|_| NameError::BadEscape)
    } else if ch.is_ascii() {
        Ok(ch as u8)
    } else {
        Err(NameError::IllegalCharacter)
    }
}

//--- PartialEq, Eq, and Hash

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        // Length octets are never ASCII letters, so this compares labels.
        self.as_slice().eq_ignore_ascii_case(other.as_slice())
    }
}

impl Eq for Name {}

impl hash::Hash for Name {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for ch in self.as_slice() {
            state.write_u8(ch.to_ascii_lowercase())
        }
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        let mut labels = self.iter_labels();
        if let Some(label) = labels.next() {
            fmt::Display::fmt(label, f)?;
        }
        for label in labels {
            f.write_str(".")?;
            fmt::Display::fmt(label, f)?;
        }
        Ok(())
    }
}

impl Name {
    /// Returns a value that displays the name followed by a final dot.
    ///
    /// The root name is displayed as a single dot.
    pub fn display_absolute(&self) -> impl fmt::Display + '_ {
        DisplayAbsolute(self)
    }
}

struct DisplayAbsolute<'a>(&'a Name);

impl<'a> fmt::Display for DisplayAbsolute<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_root() {
            f.write_str(".")
        } else {
            write!(f, "{}.", self.0)
        }
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

//--- Serialize

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

//============ Testing =======================================================
