//! Domain name labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::{NameError, MAX_LABEL_LEN};
use core::{fmt, hash};

//------------ Label ---------------------------------------------------------

/// An octets slice with the content of a domain name label.
///
/// This is an unsized type wrapping the content of a label, i.e., without
/// its length octet. Labels compare and hash ignoring ASCII case.
#[repr(transparent)]
pub struct Label([u8]);

impl Label {
    /// Creates a label from the underlying slice without any checking.
    ///
    /// # Safety
    ///
    /// The `slice` must be at most 63 octets long.
    pub(super) unsafe fn from_slice_unchecked(slice: &[u8]) -> &Self {
        &*(slice as *const [u8] as *const Label)
    }

    /// Converts a slice into a label.
    ///
    /// Fails if the slice is longer than 63 octets.
    pub fn from_slice(slice: &[u8]) -> Result<&Self, NameError> {
        if slice.len() > MAX_LABEL_LEN {
            Err(NameError::LongLabel)
        } else {
            Ok(unsafe { Self::from_slice_unchecked(slice) })
        }
    }

    /// Returns a reference to the label’s content.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the label’s content in octets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether this is the empty root label.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

//--- AsRef

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- PartialEq, Eq, and Hash

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Label {}

impl hash::Hash for Label {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_u8(self.len() as u8);
        for ch in self.as_slice() {
            state.write_u8(ch.to_ascii_lowercase())
        }
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.as_slice() {
            if ch == b' ' || ch == b'.' || ch == b'\\' {
                write!(f, "\\{}", ch as char)?;
            } else if !(0x20..0x7F).contains(&ch) {
                write!(f, "\\{:03}", ch)?;
            } else {
                write!(f, "{}", ch as char)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Label(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//------------ LabelIter -----------------------------------------------------

/// An iterator over the labels of a name in wire format.
///
/// The iterator stops before the root label.
#[derive(Clone, Debug)]
pub struct LabelIter<'a> {
    slice: &'a [u8],
}

impl<'a> LabelIter<'a> {
    /// Creates an iterator over a valid, uncompressed name.
    pub(super) fn new(slice: &'a [u8]) -> Self {
        LabelIter { slice }
    }
}

impl<'a> Iterator for LabelIter<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, tail) = self.slice.split_first()?;
        let len = usize::from(len);
        if len == 0 || len > tail.len() {
            self.slice = &[];
            return None;
        }
        let (label, tail) = tail.split_at(len);
        self.slice = tail;
        Some(unsafe { Label::from_slice_unchecked(label) })
    }
}

//============ Testing =======================================================
