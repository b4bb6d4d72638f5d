//! Internal bridge between the type-erased [`ip::any`] wrappers and the
//! compile-time-generic [`Trie<A, E>`](crate::Trie).
//!
//! [`Trie<A, E>`] is generic over `A: Afi` so its hot paths stay
//! monomorphic, but [`RangerEntry::network`](crate::RangerEntry::network)
//! returns a type-erased [`ip::any::Prefix`] (per spec, the entry carries a
//! plain CIDR, not one tied to a particular family). Bridging the two
//! requires recovering a concrete `Prefix<A>` from an `any::Prefix` for
//! whichever `A` the trie happens to be instantiated with; only [`Ipv4`] and
//! [`Ipv6`] ever implement this, so it stays crate-private.

use ip::{any, Address, Afi, Ipv4, Ipv6, Prefix};

use crate::error::Error;

pub(crate) trait Family: Afi {
    fn downcast_prefix(prefix: any::Prefix) -> Result<Prefix<Self>, Error>;
    fn downcast_address(addr: any::Address) -> Result<Address<Self>, Error>;
}

impl Family for Ipv4 {
    fn downcast_prefix(prefix: any::Prefix) -> Result<Prefix<Self>, Error> {
        prefix.as_ipv4().copied().ok_or(Error::VersionMismatch)
    }

    fn downcast_address(addr: any::Address) -> Result<Address<Self>, Error> {
        match addr {
            any::Address::Ipv4(addr) => Ok(addr),
            any::Address::Ipv6(_) => Err(Error::VersionMismatch),
        }
    }
}

impl Family for Ipv6 {
    fn downcast_prefix(prefix: any::Prefix) -> Result<Prefix<Self>, Error> {
        prefix.as_ipv6().copied().ok_or(Error::VersionMismatch)
    }

    fn downcast_address(addr: any::Address) -> Result<Address<Self>, Error> {
        match addr {
            any::Address::Ipv6(addr) => Ok(addr),
            any::Address::Ipv4(_) => Err(Error::VersionMismatch),
        }
    }
}
