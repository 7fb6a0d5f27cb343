//! Undirected link storage.
//!
//! One adjacency list per node, updated on both endpoints at insertion,
//! so degree and neighbor queries cost O(degree) instead of a scan over
//! every link.

/// Link store: `adjacency[n]` holds the neighbors of node `n`.
///
/// Invariants (validated by `Network` before insertion):
/// - no entry equals its own list index
/// - every entry is `< node_count()`
/// - `a` appears in `b`'s list iff `b` appears in `a`'s list
#[derive(Debug, Clone, Default)]
pub struct LinkStore {
    adjacency: Vec<Vec<usize>>,
}

impl LinkStore {
    /// Create an empty store (zero nodes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes the store is sized for.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Match the store to a new node count.
    ///
    /// Shrinking drops the lists of removed nodes, then filters the
    /// surviving lists in a second pass; no list is mutated while it is
    /// being walked.
    pub fn resize(&mut self, n: usize) {
        if n < self.adjacency.len() {
            self.adjacency.truncate(n);
            for list in &mut self.adjacency {
                list.retain(|&peer| peer < n);
            }
        } else {
            self.adjacency.resize_with(n, Vec::new);
        }
    }

    /// Drop every link, keeping the node count.
    pub fn clear_links(&mut self) {
        for list in &mut self.adjacency {
            list.clear();
        }
    }

    /// Whether `a` and `b` are already linked.
    ///
    /// Symmetric by construction: checking one endpoint's list suffices.
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.adjacency.get(a).is_some_and(|list| list.contains(&b))
    }

    /// Record an undirected link between validated endpoints.
    pub fn insert(&mut self, a: usize, b: usize) {
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// Number of distinct neighbors of `n` (0 when out of range).
    pub fn degree(&self, n: usize) -> usize {
        self.adjacency.get(n).map_or(0, Vec::len)
    }

    /// Neighbors of `n`, sorted descending (empty when out of range).
    pub fn neighbors(&self, n: usize) -> Vec<usize> {
        let mut result = self.adjacency.get(n).cloned().unwrap_or_default();
        result.sort_unstable_by(|a, b| b.cmp(a));
        result
    }

    /// Number of undirected links currently stored.
    pub fn link_count(&self) -> usize {
        // Every link contributes one entry to each endpoint's list.
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_visible_from_both_endpoints() {
        let mut store = LinkStore::new();
        store.resize(4);
        store.insert(1, 3);

        assert!(store.contains(1, 3));
        assert!(store.contains(3, 1));
        assert_eq!(store.degree(1), 1);
        assert_eq!(store.degree(3), 1);
        assert_eq!(store.link_count(), 1);
    }

    #[test]
    fn neighbors_sorted_descending() {
        let mut store = LinkStore::new();
        store.resize(5);
        store.insert(2, 0);
        store.insert(2, 4);
        store.insert(2, 1);

        assert_eq!(store.neighbors(2), vec![4, 1, 0]);
    }

    #[test]
    fn out_of_range_queries_are_empty() {
        let store = LinkStore::new();
        assert_eq!(store.degree(0), 0);
        assert!(store.neighbors(7).is_empty());
        assert!(!store.contains(0, 1));
    }

    #[test]
    fn shrink_prunes_links_past_the_new_count() {
        let mut store = LinkStore::new();
        store.resize(5);
        store.insert(0, 4);
        store.insert(1, 2);
        store.insert(3, 2);

        store.resize(3);

        assert_eq!(store.node_count(), 3);
        assert_eq!(store.degree(0), 0);
        assert!(store.contains(1, 2));
        assert!(!store.contains(2, 3));
        assert_eq!(store.link_count(), 1);
    }

    #[test]
    fn grow_keeps_existing_links() {
        let mut store = LinkStore::new();
        store.resize(2);
        store.insert(0, 1);

        store.resize(6);

        assert_eq!(store.node_count(), 6);
        assert!(store.contains(0, 1));
        assert_eq!(store.degree(5), 0);
    }

    #[test]
    fn clear_links_keeps_node_count() {
        let mut store = LinkStore::new();
        store.resize(3);
        store.insert(0, 1);
        store.insert(1, 2);

        store.clear_links();

        assert_eq!(store.node_count(), 3);
        assert_eq!(store.link_count(), 0);
        assert_eq!(store.degree(1), 0);
    }
}
