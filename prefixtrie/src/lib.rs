//! A longest-prefix-match radix trie over IPv4/IPv6 CIDR blocks.
//!
//! [`Trie<A, E>`] stores networks of a single, statically known address
//! family `A` (either [`ip::Ipv4`] or [`ip::Ipv6`]), each carrying an
//! opaque payload `E: `[`RangerEntry`]. [`AnyTrie<E>`] wraps either variant
//! for callers that only learn the address family at runtime.
//!
//! ```
//! use ip::Ipv4;
//! use prefixtrie::{BasicRangerEntry, Trie};
//!
//! let mut trie: Trie<Ipv4, _> = Trie::new();
//! trie.insert(BasicRangerEntry::new("192.0.2.0/24".parse().unwrap()))
//!     .unwrap();
//!
//! let addr = "192.0.2.17".parse().unwrap();
//! assert!(trie.contains(&addr));
//! ```

mod entry;
mod error;
mod family;
mod iter;
mod node;
mod trie;

pub use self::entry::{BasicRangerEntry, RangerEntry};
pub use self::error::Error;
pub use self::iter::DepthWalk;
pub use self::trie::{AnyTrie, Trie};

#[cfg(test)]
mod proptests;
