use std::fmt;

use ip::{any, Afi, Prefix};

/// A payload a [`Trie`](crate::Trie) can store, exposing the single
/// observable attribute the trie ever reads: the network it carries.
///
/// Implementations are free to carry arbitrary additional data (a next-hop,
/// an ACL action, a geo-IP region) — the trie only ever calls `network()`.
pub trait RangerEntry: Clone {
    /// The network this entry is stored under.
    fn network(&self) -> any::Prefix;
}

/// The default [`RangerEntry`] carrier: a network and nothing else.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasicRangerEntry {
    network: any::Prefix,
}

impl BasicRangerEntry {
    /// Construct a new carrier for `network`.
    #[must_use]
    pub const fn new(network: any::Prefix) -> Self {
        Self { network }
    }
}

impl RangerEntry for BasicRangerEntry {
    fn network(&self) -> any::Prefix {
        self.network
    }
}

impl fmt::Debug for BasicRangerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BasicRangerEntry({})", self.network)
    }
}

impl fmt::Display for BasicRangerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.network.fmt(f)
    }
}

impl From<any::Prefix> for BasicRangerEntry {
    fn from(network: any::Prefix) -> Self {
        Self::new(network)
    }
}

impl<A: Afi> From<Prefix<A>> for BasicRangerEntry
where
    any::Prefix: From<Prefix<A>>,
{
    fn from(network: Prefix<A>) -> Self {
        Self::new(network.into())
    }
}
