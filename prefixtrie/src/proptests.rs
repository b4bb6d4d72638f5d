//! Property-based tests for the eight invariants of spec.md §8, run for
//! both address families via [`paste!`](paste::paste).

use ip::{Address, Afi, Ipv4, Ipv6, Prefix, PrefixLength};
use paste::paste;
use proptest::prelude::*;

use crate::family::Family;
use crate::{BasicRangerEntry, RangerEntry, Trie};

fn arb_prefix<A: Afi>() -> impl Strategy<Item = Prefix<A>>
where
    Address<A>: Arbitrary,
{
    (any::<Address<A>>(), 0..=A::WIDTH)
        .prop_map(|(addr, len)| Prefix::new(addr, PrefixLength::from_primitive(len).unwrap()))
}

fn arb_entries<A: Family>(max: usize) -> impl Strategy<Item = Vec<BasicRangerEntry>>
where
    Address<A>: Arbitrary,
    ip::any::Prefix: From<Prefix<A>>,
{
    proptest::collection::vec(arb_prefix::<A>(), 0..max)
        .prop_map(|nets| nets.into_iter().map(|n| BasicRangerEntry::new(n.into())).collect())
}

fn downcast<A: Family>(network: ip::any::Prefix) -> Prefix<A> {
    A::downcast_prefix(network).expect("entry generated for this family")
}

macro_rules! family_props {
    ($af:ident) => {
        paste! {
            proptest! {
                #[test]
                fn [<insert_contains_consistency_ $af:lower>](entries in arb_entries::<$af>(16)) {
                    let mut trie: Trie<$af, _> = Trie::new();
                    for e in &entries {
                        trie.insert(e.clone()).unwrap();
                    }
                    for e in &entries {
                        let network: Prefix<$af> = downcast(e.network());
                        prop_assert!(trie.contains(&network.network()));
                        let found = trie.containing_networks(&network.network());
                        prop_assert!(found.iter().any(|f| f.network() == e.network()));
                    }
                }

                #[test]
                fn [<hierarchy_order_ $af:lower>](entries in arb_entries::<$af>(16), probe in any::<Address<$af>>()) {
                    let mut trie: Trie<$af, _> = Trie::new();
                    for e in &entries {
                        trie.insert(e.clone()).unwrap();
                    }
                    let found = trie.containing_networks(&probe);
                    let lengths: Vec<u8> = found.iter().map(|e| e.network().prefix_len()).collect();
                    let mut sorted = lengths.clone();
                    sorted.sort_unstable();
                    prop_assert_eq!(lengths, sorted);
                }

                #[test]
                fn [<covered_closure_ $af:lower>](entries in arb_entries::<$af>(16), query in arb_prefix::<$af>()) {
                    let mut trie: Trie<$af, _> = Trie::new();
                    for e in &entries {
                        trie.insert(e.clone()).unwrap();
                    }
                    let covered = trie.covered_networks(&query);
                    for found in &covered {
                        let found_net: Prefix<$af> = downcast(found.network());
                        prop_assert!(query.contains(&found_net));
                    }
                    for e in &entries {
                        let net: Prefix<$af> = downcast(e.network());
                        if query.contains(&net) {
                            prop_assert!(covered.iter().any(|f| f.network() == e.network()));
                        }
                    }
                }

                #[test]
                fn [<remove_idempotence_ $af:lower>](network in arb_prefix::<$af>()) {
                    let mut trie: Trie<$af, _> = Trie::new();
                    trie.insert(BasicRangerEntry::new(network.into())).unwrap();
                    prop_assert!(trie.remove(&network).is_some());
                    prop_assert!(trie.remove(&network).is_none());
                }

                #[test]
                fn [<structural_compaction_ $af:lower>](
                    inserts in arb_entries::<$af>(16),
                    removes in arb_entries::<$af>(16),
                ) {
                    let mut trie: Trie<$af, _> = Trie::new();
                    for e in &inserts {
                        trie.insert(e.clone()).unwrap();
                    }
                    for e in &removes {
                        let net: Prefix<$af> = downcast(e.network());
                        let _ = trie.remove(&net);
                    }
                    trie.assert_compacted();
                }

                #[test]
                fn [<round_trip_ $af:lower>](entries in arb_entries::<$af>(16)) {
                    use std::collections::BTreeSet;

                    let mut forward: Trie<$af, _> = Trie::new();
                    for e in &entries {
                        forward.insert(e.clone()).unwrap();
                    }
                    let mut backward: Trie<$af, _> = Trie::new();
                    for e in entries.iter().rev() {
                        backward.insert(e.clone()).unwrap();
                    }
                    let forward_set: BTreeSet<String> =
                        forward.iter().map(|e| e.network().to_string()).collect();
                    let backward_set: BTreeSet<String> =
                        backward.iter().map(|e| e.network().to_string()).collect();
                    prop_assert_eq!(forward_set, backward_set);
                }

                #[test]
                fn [<duplicate_tolerance_ $af:lower>](network in arb_prefix::<$af>()) {
                    let mut trie: Trie<$af, _> = Trie::new();
                    trie.insert(BasicRangerEntry::new(network.into())).unwrap();
                    trie.insert(BasicRangerEntry::new(network.into())).unwrap();
                    let count = trie
                        .iter()
                        .filter(|e| downcast::<$af>(e.network()) == network)
                        .count();
                    prop_assert_eq!(count, 1);
                }
            }
        }
    };
}

family_props!(Ipv4);
family_props!(Ipv6);

proptest! {
    #[test]
    fn boundary_exclusion_ipv4(entries in arb_entries::<Ipv4>(16)) {
        let mut trie: Trie<Ipv4, _> = Trie::new();
        for e in &entries {
            trie.insert(e.clone()).unwrap();
        }
        for e in &entries {
            let net: Prefix<Ipv4> = downcast(e.network());
            let len = net.prefix_len().into_primitive();
            if len == 0 {
                // the zero-length prefix has no addresses outside it.
                continue;
            }
            let first = net.network().into_primitive();
            let last = first | (u32::MAX >> u32::from(len));
            if let Some(before_raw) = first.checked_sub(1) {
                let before: Address<Ipv4> = Address::new(before_raw);
                let covered = entries
                    .iter()
                    .any(|o| downcast::<Ipv4>(o.network()).contains_address(&before));
                prop_assert_eq!(trie.contains(&before), covered);
            }
            if let Some(after_raw) = last.checked_add(1) {
                let after: Address<Ipv4> = Address::new(after_raw);
                let covered = entries
                    .iter()
                    .any(|o| downcast::<Ipv4>(o.network()).contains_address(&after));
                prop_assert_eq!(trie.contains(&after), covered);
            }
        }
    }

    #[test]
    fn boundary_exclusion_ipv6(entries in arb_entries::<Ipv6>(16)) {
        let mut trie: Trie<Ipv6, _> = Trie::new();
        for e in &entries {
            trie.insert(e.clone()).unwrap();
        }
        for e in &entries {
            let net: Prefix<Ipv6> = downcast(e.network());
            let len = net.prefix_len().into_primitive();
            if len == 0 {
                continue;
            }
            let first = net.network().into_primitive();
            let last = first | (u128::MAX >> u32::from(len));
            if let Some(before_raw) = first.checked_sub(1) {
                let before: Address<Ipv6> = Address::new(before_raw);
                let covered = entries
                    .iter()
                    .any(|o| downcast::<Ipv6>(o.network()).contains_address(&before));
                prop_assert_eq!(trie.contains(&before), covered);
            }
            if let Some(after_raw) = last.checked_add(1) {
                let after: Address<Ipv6> = Address::new(after_raw);
                let covered = entries
                    .iter()
                    .any(|o| downcast::<Ipv6>(o.network()).contains_address(&after));
                prop_assert_eq!(trie.contains(&after), covered);
            }
        }
    }
}
