use ip::{any, Address, Afi, Ipv4, Ipv6, Prefix, Version};

use crate::entry::RangerEntry;
use crate::error::Error;
use crate::family::Family;
use crate::iter::DepthWalk;
use crate::node::Node;

/// A longest-prefix-match radix trie over networks of a single, statically
/// known address family.
///
/// The five operations mirror spec.md §4.3.1. Methods taking a typed
/// [`Prefix<A>`]/[`Address<A>`] can never disagree with the trie's own
/// family — the type system already rules it out — so only [`insert`]
/// returns a fallible [`Result`]: it is handed an opaque [`RangerEntry`]
/// whose [`network()`](RangerEntry::network) is type-erased, so the version
/// check has to happen at runtime.
///
/// [`insert`]: Trie::insert
pub struct Trie<A: Afi, E: RangerEntry> {
    root: Node<A, E>,
}

impl<A: Afi, E: RangerEntry> Trie<A, E> {
    /// Construct an empty trie, rooted at the zero-length prefix for `A`.
    #[must_use]
    pub fn new() -> Self {
        let root_network = Prefix::new(Address::new(Default::default()), ip::PrefixLength::ZERO);
        Self {
            root: Node::new(root_network),
        }
    }

    /// `true` iff some stored network contains `addr`.
    #[must_use]
    pub fn contains(&self, addr: &Address<A>) -> bool {
        self.root.contains(addr)
    }

    /// Every stored entry whose network contains `addr`, shortest prefix
    /// (least specific) first.
    #[must_use]
    pub fn containing_networks(&self, addr: &Address<A>) -> Vec<E> {
        let mut refs = Vec::new();
        self.root.containing_networks(addr, &mut refs);
        refs.into_iter().cloned().collect()
    }

    /// Remove the entry stored at exactly `network`, returning it if one
    /// was present.
    pub fn remove(&mut self, network: &Prefix<A>) -> Option<E> {
        self.root.remove(network)
    }

    /// Every stored entry whose network is contained by `query`, in
    /// depth-first pre-order.
    #[must_use]
    pub fn covered_networks(&self, query: &Prefix<A>) -> Vec<E> {
        let mut refs = Vec::new();
        self.root.covered_networks(query, &mut refs);
        refs.into_iter().cloned().collect()
    }

    /// A pre-order walk of every stored entry, used internally by
    /// [`covered_networks`](Self::covered_networks) and exposed for tests.
    pub fn iter(&self) -> DepthWalk<'_, A, E> {
        DepthWalk::new(&self.root)
    }

    /// Panics if the structural compaction invariant (spec.md §8 property
    /// 6) is violated anywhere in the tree.
    #[cfg(test)]
    pub(crate) fn assert_compacted(&self) {
        self.root.check_compacted(true);
    }
}

impl<A: Afi, E: RangerEntry> Default for Trie<A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Family, E: RangerEntry> Trie<A, E> {
    /// Insert `entry`, keyed by its own [`network()`](RangerEntry::network).
    ///
    /// Returns the entry previously stored at that exact network, if any
    /// (inserting over an existing network overwrites it — see
    /// `DESIGN.md`). Fails with [`Error::VersionMismatch`] if `entry`'s
    /// network belongs to a different address family than this trie.
    pub fn insert(&mut self, entry: E) -> Result<Option<E>, Error> {
        let network = A::downcast_prefix(entry.network())?;
        Ok(self.root.insert(network, entry))
    }
}

/// A [`Trie`] whose address family is selected at runtime rather than via
/// the type parameter `A`, for callers that only learn it when a network is
/// first presented to them (implements `NewPrefixTree(version)` from
/// spec.md §6).
pub enum AnyTrie<E: RangerEntry> {
    /// An IPv4 trie.
    Ipv4(Trie<Ipv4, E>),
    /// An IPv6 trie.
    Ipv6(Trie<Ipv6, E>),
}

impl<E: RangerEntry> AnyTrie<E> {
    /// Construct an empty trie for the given address family.
    #[must_use]
    pub fn new(version: Version) -> Self {
        match version {
            Version::Ipv4 => Self::Ipv4(Trie::new()),
            Version::Ipv6 => Self::Ipv6(Trie::new()),
        }
    }

    /// The address family this trie was constructed for.
    #[must_use]
    pub const fn version(&self) -> Version {
        match self {
            Self::Ipv4(_) => Version::Ipv4,
            Self::Ipv6(_) => Version::Ipv6,
        }
    }

    /// See [`Trie::insert`].
    pub fn insert(&mut self, entry: E) -> Result<Option<E>, Error> {
        match self {
            Self::Ipv4(trie) => trie.insert(entry),
            Self::Ipv6(trie) => trie.insert(entry),
        }
    }

    /// See [`Trie::remove`].
    pub fn remove(&mut self, network: &any::Prefix) -> Result<Option<E>, Error> {
        match self {
            Self::Ipv4(trie) => Ok(trie.remove(&Ipv4::downcast_prefix(*network)?)),
            Self::Ipv6(trie) => Ok(trie.remove(&Ipv6::downcast_prefix(*network)?)),
        }
    }

    /// See [`Trie::contains`].
    pub fn contains(&self, addr: &any::Address) -> Result<bool, Error> {
        match self {
            Self::Ipv4(trie) => Ok(trie.contains(&Ipv4::downcast_address(*addr)?)),
            Self::Ipv6(trie) => Ok(trie.contains(&Ipv6::downcast_address(*addr)?)),
        }
    }

    /// See [`Trie::containing_networks`].
    pub fn containing_networks(&self, addr: &any::Address) -> Result<Vec<E>, Error> {
        match self {
            Self::Ipv4(trie) => Ok(trie.containing_networks(&Ipv4::downcast_address(*addr)?)),
            Self::Ipv6(trie) => Ok(trie.containing_networks(&Ipv6::downcast_address(*addr)?)),
        }
    }

    /// See [`Trie::covered_networks`].
    pub fn covered_networks(&self, query: &any::Prefix) -> Result<Vec<E>, Error> {
        match self {
            Self::Ipv4(trie) => Ok(trie.covered_networks(&Ipv4::downcast_prefix(*query)?)),
            Self::Ipv6(trie) => Ok(trie.covered_networks(&Ipv6::downcast_prefix(*query)?)),
        }
    }
}
