//! Address-family-erased wrappers, for callers that only discover whether
//! they are holding an IPv4 or IPv6 value at runtime.

use std::fmt;
use std::str::FromStr;

use crate::addr;
use crate::error::Error;
use crate::prefix;
use crate::{Afi, Ipv4, Ipv6, Version};

/// Either an `Address<Ipv4>` or an `Address<Ipv6>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Address {
    /// An IPv4 address.
    Ipv4(addr::Address<Ipv4>),
    /// An IPv6 address.
    Ipv6(addr::Address<Ipv6>),
}

impl Address {
    /// The address family of the wrapped value.
    #[must_use]
    pub const fn version(&self) -> Version {
        match self {
            Self::Ipv4(_) => Version::Ipv4,
            Self::Ipv6(_) => Version::Ipv6,
        }
    }
}

impl From<addr::Address<Ipv4>> for Address {
    fn from(addr: addr::Address<Ipv4>) -> Self {
        Self::Ipv4(addr)
    }
}

impl From<addr::Address<Ipv6>> for Address {
    fn from(addr: addr::Address<Ipv6>) -> Self {
        Self::Ipv6(addr)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<addr::Address<Ipv4>>()
            .map(Self::from)
            .or_else(|_| s.parse::<addr::Address<Ipv6>>().map(Self::from))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ipv4(addr) => addr.fmt(f),
            Self::Ipv6(addr) => addr.fmt(f),
        }
    }
}

/// Either a `Prefix<Ipv4>` or a `Prefix<Ipv6>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// An IPv4 prefix.
    Ipv4(prefix::Prefix<Ipv4>),
    /// An IPv6 prefix.
    Ipv6(prefix::Prefix<Ipv6>),
}

impl Prefix {
    /// The address family of the wrapped value.
    #[must_use]
    pub const fn version(&self) -> Version {
        match self {
            Self::Ipv4(_) => Version::Ipv4,
            Self::Ipv6(_) => Version::Ipv6,
        }
    }

    /// The network address of the wrapped prefix, erased to [`Address`].
    #[must_use]
    pub const fn network(&self) -> Address {
        match self {
            Self::Ipv4(p) => Address::Ipv4(p.network()),
            Self::Ipv6(p) => Address::Ipv6(p.network()),
        }
    }

    /// The prefix length of the wrapped prefix.
    #[must_use]
    pub fn prefix_len(&self) -> u8 {
        match self {
            Self::Ipv4(p) => p.prefix_len().into_primitive(),
            Self::Ipv6(p) => p.prefix_len().into_primitive(),
        }
    }

    /// Downcast to `Prefix<Ipv4>`, if `self` is that variant.
    #[must_use]
    pub const fn as_ipv4(&self) -> Option<&prefix::Prefix<Ipv4>> {
        match self {
            Self::Ipv4(p) => Some(p),
            Self::Ipv6(_) => None,
        }
    }

    /// Downcast to `Prefix<Ipv6>`, if `self` is that variant.
    #[must_use]
    pub const fn as_ipv6(&self) -> Option<&prefix::Prefix<Ipv6>> {
        match self {
            Self::Ipv6(p) => Some(p),
            Self::Ipv4(_) => None,
        }
    }
}

impl From<prefix::Prefix<Ipv4>> for Prefix {
    fn from(prefix: prefix::Prefix<Ipv4>) -> Self {
        Self::Ipv4(prefix)
    }
}

impl From<prefix::Prefix<Ipv6>> for Prefix {
    fn from(prefix: prefix::Prefix<Ipv6>) -> Self {
        Self::Ipv6(prefix)
    }
}

impl FromStr for Prefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<prefix::Prefix<Ipv4>>()
            .map(Self::from)
            .or_else(|_| s.parse::<prefix::Prefix<Ipv6>>().map(Self::from))
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ipv4(p) => p.fmt(f),
            Self::Ipv6(p) => p.fmt(f),
        }
    }
}
