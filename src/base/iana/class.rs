//! DNS CLASSes.

use super::FromStrError;

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. In practice, only the IN class is really
    /// relevant and it is the class every query sent by this crate uses.
    ///
    /// In addition, there are query classes that can only appear in
    /// questions, namely NONE and ANY (or *).
    =>
    Class, u16;

    /// Internet (IN).
    (IN => 1, "IN")

    /// Chaosnet (CH).
    (CH => 3, "CH")

    /// Hesiod (HS).
    (HS => 4, "HS")

    /// Query class None.
    (NONE => 0xFE, "NONE")

    /// Query class * (ANY).
    (ANY => 0xFF, "*")
}

int_enum_str_with_prefix!(Class, "CLASS", u16, "unknown class");

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn class_str() {
        assert_eq!(Class::from_str("in"), Ok(Class::IN));
        assert_eq!(Class::from_str("CLASS1"), Ok(Class::IN));
        assert_eq!(Class::from_str("CLASS7"), Ok(Class::from_int(7)));
        assert!(Class::from_str("CLASS").is_err());
        assert_eq!(format!("{}", Class::from_int(7)), "CLASS7");
        assert_eq!(format!("{:?}", Class::IN), "Class::IN");
    }
}
