use ip::{Address, Afi, Prefix, PrefixLength};

use crate::entry::RangerEntry;

/// A node in a [`Trie`](crate::Trie)'s binary radix tree.
///
/// `network` is the prefix represented by the path from the root to this
/// node. `entry` is present iff this node has its own stored network,
/// as opposed to existing purely as a branching point between two more
/// specific subtrees.
pub(crate) struct Node<A: Afi, E> {
    pub(crate) network: Prefix<A>,
    pub(crate) entry: Option<E>,
    pub(crate) children: [Option<Box<Node<A, E>>>; 2],
}

impl<A: Afi, E: RangerEntry> Node<A, E> {
    pub(crate) fn new(network: Prefix<A>) -> Self {
        Self {
            network,
            entry: None,
            children: [None, None],
        }
    }

    fn leaf(network: Prefix<A>, entry: E) -> Self {
        let mut node = Self::new(network);
        node.entry = Some(entry);
        node
    }

    /// Insert `entry` at `network`, returning the previously stored entry
    /// at that exact network, if any.
    pub(crate) fn insert(&mut self, network: Prefix<A>, entry: E) -> Option<E> {
        if network == self.network {
            return self.entry.replace(entry);
        }
        let p = self.network.prefix_len().into_primitive();
        let b = usize::from(network.network().bit(p));
        match &mut self.children[b] {
            None => {
                self.children[b] = Some(Box::new(Self::leaf(network, entry)));
                None
            }
            Some(child) => {
                let child_len = child.network.prefix_len().into_primitive();
                let q = network.prefix_len().into_primitive();
                let limit = child_len.min(q);
                let m = child
                    .network
                    .network()
                    .common_prefix_len(&network.network(), limit);
                if m == child_len {
                    // `child` is an ancestor (or exact match) of `network`; recurse.
                    child.insert(network, entry)
                } else if m == q {
                    // `network` sits strictly between `self` and `child`: splice it in
                    // as the new parent of `child`.
                    let mut parent = Self::leaf(network, entry);
                    let grandchild_bit = usize::from(child.network.network().bit(q));
                    let old_child = self.children[b].take().expect("matched Some above");
                    parent.children[grandchild_bit] = Some(old_child);
                    self.children[b] = Some(Box::new(parent));
                    None
                } else {
                    // `network` and `child` diverge at depth `m`; create a branching
                    // node with no entry of its own.
                    let branch_len =
                        PrefixLength::from_primitive(m).expect("m is bounded by two valid lengths");
                    let branch_network = Prefix::new(network.network().mask(m), branch_len);
                    let mut branch = Self::new(branch_network);
                    let old_child = self.children[b].take().expect("matched Some above");
                    let child_bit = usize::from(old_child.network.network().bit(m));
                    let leaf_bit = usize::from(network.network().bit(m));
                    debug_assert_ne!(child_bit, leaf_bit);
                    branch.children[child_bit] = Some(old_child);
                    branch.children[leaf_bit] = Some(Box::new(Self::leaf(network, entry)));
                    self.children[b] = Some(Box::new(branch));
                    None
                }
            }
        }
    }

    /// Remove the entry stored at exactly `target`, compacting the tree
    /// below `self` as needed. Returns the removed entry, if any.
    pub(crate) fn remove(&mut self, target: &Prefix<A>) -> Option<E> {
        if *target == self.network {
            return self.entry.take();
        }
        if self.network.prefix_len() >= target.prefix_len() {
            return None;
        }
        let p = self.network.prefix_len().into_primitive();
        let b = usize::from(target.network().bit(p));
        let removed = self.children[b].as_deref_mut().and_then(|child| {
            if child.network.contains(target) {
                child.remove(target)
            } else {
                None
            }
        });
        if removed.is_some() {
            self.compact_child(b);
        }
        removed
    }

    /// Collapse `self.children[b]` if it no longer needs to exist as its
    /// own node: an entry-less node with fewer than two children is either
    /// spliced out (one child) or dropped entirely (no children).
    fn compact_child(&mut self, b: usize) {
        let should_collapse = match &self.children[b] {
            None => return,
            Some(child) => {
                child.entry.is_none() && child.children.iter().filter(|c| c.is_some()).count() < 2
            }
        };
        if !should_collapse {
            return;
        }
        let mut child = self.children[b].take().expect("checked Some above");
        let remaining = child.children[0].take().or_else(|| child.children[1].take());
        self.children[b] = remaining;
    }

    /// `true` iff some network stored in this subtree contains `addr`.
    pub(crate) fn contains(&self, addr: &Address<A>) -> bool {
        if self.entry.is_some() && self.network.contains_address(addr) {
            return true;
        }
        self.descend_for(addr).is_some_and(|child| child.contains(addr))
    }

    /// Every stored entry along the path to `addr`, root-most (shortest
    /// prefix) first.
    pub(crate) fn containing_networks<'a>(&'a self, addr: &Address<A>, out: &mut Vec<&'a E>) {
        if let Some(entry) = &self.entry {
            if self.network.contains_address(addr) {
                out.push(entry);
            }
        }
        if let Some(child) = self.descend_for(addr) {
            child.containing_networks(addr, out);
        }
    }

    /// The child that might hold networks containing `addr`, if any.
    fn descend_for(&self, addr: &Address<A>) -> Option<&Self> {
        let p = self.network.prefix_len().into_primitive();
        if p >= A::WIDTH {
            return None;
        }
        let b = usize::from(addr.bit(p));
        let child = self.children[b].as_deref()?;
        child.network.contains_address(addr).then_some(child)
    }

    /// Every stored entry in the subtree contained by `query`, in
    /// depth-first pre-order.
    pub(crate) fn covered_networks<'a>(&'a self, query: &Prefix<A>, out: &mut Vec<&'a E>) {
        if self.network.prefix_len() >= query.prefix_len() {
            if query.contains(&self.network) {
                out.extend(crate::iter::DepthWalk::new(self));
            }
            return;
        }
        let p = self.network.prefix_len().into_primitive();
        let b = usize::from(query.network().bit(p));
        if let Some(child) = self.children[b].as_deref() {
            child.covered_networks(query, out);
        }
    }

    /// Panics if any non-root, entry-less node below `self` has fewer than
    /// two children. Used by property tests to check spec.md §8 property 6.
    #[cfg(test)]
    pub(crate) fn check_compacted(&self, is_root: bool) {
        let child_count = self.children.iter().filter(|c| c.is_some()).count();
        assert!(
            is_root || self.entry.is_some() || child_count == 2,
            "entry-less non-root node {:?} has {} children",
            self.network,
            child_count,
        );
        for child in self.children.iter().flatten() {
            child.check_compacted(false);
        }
    }
}
