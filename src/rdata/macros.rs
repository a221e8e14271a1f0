//! Macros for use in rdata definitions.

/// Creates record data that consists of a single domain name.
macro_rules! name_type {
    ( $(#[$attr:meta])* ( $target:ident, $rtype:ident, $field:ident ) ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub struct $target {
            $field: $crate::base::name::Name,
        }

        impl $target {
            /// Creates new record data from a domain name.
            pub fn new($field: $crate::base::name::Name) -> Self {
                $target { $field }
            }

            /// Returns a reference to the domain name.
            pub fn $field(&self) -> &$crate::base::name::Name {
                &self.$field
            }

            /// Parses the record data from its wire format.
            pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
                parser: &mut octseq::parse::Parser<'_, Octs>,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                $crate::base::name::Name::parse(parser).map(Self::new)
            }
        }

        //--- RecordData and RtypeRecordData

        impl $crate::base::rdata::RecordData for $target {
            fn rtype(&self) -> $crate::base::iana::Rtype {
                $crate::base::iana::Rtype::$rtype
            }
        }

        impl $crate::base::rdata::RtypeRecordData for $target {
            const RTYPE: $crate::base::iana::Rtype =
                $crate::base::iana::Rtype::$rtype;

            fn parse_rdata(
                parser: &mut octseq::parse::Parser<'_, bytes::Bytes>,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                Self::parse(parser)
            }
        }

        //--- Display

        impl core::fmt::Display for $target {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.$field.display_absolute(), f)
            }
        }
    };
}
