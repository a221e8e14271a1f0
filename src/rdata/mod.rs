//! Record data implementations.
//!
//! This module contains implementations for the record data of the common
//! record types a stub resolver needs to look at.
//!
//! The types are named identically to the [`Rtype`] constant they
//! implement. They are grouped into submodules for the RFCs they are
//! defined in. All types are also re-exported at the top level here. Ie.,
//! for the AAAA record type, you can simple `use hermod_dns::rdata::Aaaa`.
//!
//! All types are registered with a registry created via
//! [`Registry::with_defaults`].
//!
//! [`Rtype`]: crate::base::iana::Rtype

#[macro_use]
mod macros;

pub mod aaaa;
pub mod rfc1035;
pub mod srv;

pub use self::aaaa::Aaaa;
pub use self::rfc1035::{Cname, Hinfo, Mx, Ns, Ptr, Soa, Txt, A};
pub use self::srv::Srv;

use crate::base::registry::Registry;

/// Registers all record data types of this module with `registry`.
pub fn register_defaults(registry: &mut Registry) {
    registry.register_type::<A>();
    registry.register_type::<Ns>();
    registry.register_type::<Cname>();
    registry.register_type::<Soa>();
    registry.register_type::<Ptr>();
    registry.register_type::<Hinfo>();
    registry.register_type::<Mx>();
    registry.register_type::<Txt>();
    registry.register_type::<Aaaa>();
    registry.register_type::<Srv>();
}
