use std::fmt;
use std::marker::PhantomData;
use std::net::{AddrParseError, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::af::Primitive as _;
use crate::error::{err, Error, ErrorKind};
use crate::{Afi, Ipv4, Ipv6};

/// An IP address, generic over address family `A`.
///
/// `Address<A>` is a thin, copyable wrapper around the fixed-width integer
/// representation of an address (`u32` for [`Ipv4`], `u128` for [`Ipv6`]),
/// giving callers bit-level access without ever having to branch on address
/// family themselves.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address<A: Afi> {
    value: A::Primitive,
    _af: PhantomData<A>,
}

impl<A: Afi> Address<A> {
    /// Construct an [`Address<A>`] from its primitive integer representation.
    #[must_use]
    pub const fn new(value: A::Primitive) -> Self {
        Self {
            value,
            _af: PhantomData,
        }
    }

    /// Get the primitive integer representation of this address.
    #[must_use]
    pub const fn into_primitive(self) -> A::Primitive {
        self.value
    }

    /// Returns the bit at position `i`, counting from the most significant
    /// bit (`i == 0`). `i` must be less than `A::WIDTH`.
    #[must_use]
    pub fn bit(&self, i: u8) -> bool {
        self.value.bit(i, A::WIDTH)
    }

    /// Zero every bit beyond `len`, returning the canonical network address
    /// for a prefix of that length.
    #[must_use]
    pub fn mask(&self, len: u8) -> Self {
        if len >= A::WIDTH {
            return *self;
        }
        let shift = u32::from(A::WIDTH - len);
        let mask = A::Primitive::ONES << shift;
        Self::new(self.value & mask)
    }

    /// Length of the longest common bit-prefix shared with `other`, capped
    /// at `limit`.
    #[must_use]
    pub fn common_prefix_len(&self, other: &Self, limit: u8) -> u8 {
        let differing = (self.value ^ other.value).leading_zeros();
        let differing = u8::try_from(differing).unwrap_or(A::WIDTH);
        differing.min(limit).min(A::WIDTH)
    }
}

impl<A: Afi> fmt::Debug for Address<A>
where
    Self: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address<{:?}>({})", A::version(), self)
    }
}

impl FromStr for Address<Ipv4> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr: Ipv4Addr = s.parse().map_err(map_parse_err)?;
        Ok(Self::new(u32::from(addr)))
    }
}

impl FromStr for Address<Ipv6> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr: Ipv6Addr = s.parse().map_err(map_parse_err)?;
        Ok(Self::new(u128::from(addr)))
    }
}

fn map_parse_err(_: AddrParseError) -> Error {
    err!(ErrorKind::Parser, "not a valid IP address")
}

impl fmt::Display for Address<Ipv4> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ipv4Addr::from(self.value).fmt(f)
    }
}

impl fmt::Display for Address<Ipv6> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ipv6Addr::from(self.value).fmt(f)
    }
}

impl From<Ipv4Addr> for Address<Ipv4> {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(u32::from(addr))
    }
}

impl From<Address<Ipv4>> for Ipv4Addr {
    fn from(addr: Address<Ipv4>) -> Self {
        Self::from(addr.value)
    }
}

impl From<Ipv6Addr> for Address<Ipv6> {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(u128::from(addr))
    }
}

impl From<Address<Ipv6>> for Ipv6Addr {
    fn from(addr: Address<Ipv6>) -> Self {
        Self::from(addr.value)
    }
}

#[cfg(feature = "arbitrary")]
use proptest::{
    arbitrary::{Arbitrary, StrategyFor},
    strategy::{BoxedStrategy, Strategy},
};

#[cfg(feature = "arbitrary")]
impl<A: Afi> Arbitrary for Address<A>
where
    A::Primitive: Arbitrary + 'static,
    StrategyFor<A::Primitive>: 'static,
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::arbitrary::any::<A::Primitive>()
            .prop_map(Self::new)
            .boxed()
    }
}
