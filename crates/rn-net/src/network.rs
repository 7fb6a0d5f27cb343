//! The network: value store, link store and the random-graph generator.

use rn_core::Real;
use rn_rand::RandomSource;

use crate::links::LinkStore;

/// Undirected network of dense-indexed nodes, one real value per node.
///
/// Nodes have no identity beyond their index in `0..size()`. All
/// randomness flows through the injected [`RandomSource`], so a seeded
/// source replays a run exactly.
///
/// Failure is never an error here: invalid link requests return `false`,
/// out-of-range reads return `0.0`, bulk copies are bounded and pruning
/// is silent.
#[derive(Debug, Clone)]
pub struct Network<R: RandomSource> {
    values: Vec<Real>,
    links: LinkStore,
    rng: R,
}

impl<R: RandomSource> Network<R> {
    /// Create an empty network (zero nodes) around a random source.
    pub fn new(rng: R) -> Self {
        Self {
            values: Vec::new(),
            links: LinkStore::new(),
            rng,
        }
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.links.link_count()
    }

    /// Set the node count to `n`.
    ///
    /// Shrinking prunes every link with an endpoint at or past `n`.
    /// Afterwards *every* node value, surviving ones included, is
    /// overwritten with a fresh normal draw; callers that need the old
    /// values across a resize must copy them out first.
    pub fn resize(&mut self, n: usize) {
        self.values.resize(n, 0.0);
        self.links.resize(n);
        self.rng.fill_normal(&mut self.values);
    }

    /// Value of node `n`, or `0.0` when `n` is out of range.
    pub fn value(&self, n: usize) -> Real {
        self.values.get(n).copied().unwrap_or(0.0)
    }

    /// Positionally copy values in, bounded by the shorter side.
    ///
    /// Returns how many entries were copied. Entries past the copied
    /// prefix keep their previous values; a length mismatch is not an
    /// error.
    pub fn set_values(&mut self, new_values: &[Real]) -> usize {
        let count = self.values.len().min(new_values.len());
        self.values[..count].copy_from_slice(&new_values[..count]);
        count
    }

    /// All node values as a new vector, sorted descending.
    pub fn sorted_values(&self) -> Vec<Real> {
        let mut ordered = self.values.clone();
        ordered.sort_unstable_by(|a, b| b.total_cmp(a));
        ordered
    }

    /// Insert an undirected link between `n1` and `n2`.
    ///
    /// Returns `false`, with no mutation, for a self-link, an
    /// out-of-range endpoint, or a pair that is already linked (the
    /// check sees both insertion directions).
    pub fn add_link(&mut self, n1: usize, n2: usize) -> bool {
        if n1 == n2 {
            return false;
        }
        if n1 >= self.size() || n2 >= self.size() {
            return false;
        }
        if self.links.contains(n1, n2) {
            return false;
        }
        self.links.insert(n1, n2);
        true
    }

    /// Number of distinct neighbors of `n` (0 when out of range).
    pub fn degree(&self, n: usize) -> usize {
        self.links.degree(n)
    }

    /// Neighbors of `n`, sorted descending (empty when out of range).
    pub fn neighbors(&self, n: usize) -> Vec<usize> {
        self.links.neighbors(n)
    }

    /// Rebuild the link set from scratch with Poisson-distributed degrees.
    ///
    /// Existing links are discarded unconditionally. Each node in index
    /// order draws a degree target with mean `mean_deg`, clamped to
    /// `size() - 1`, then links to uniformly chosen peers until the
    /// target is met; draws that land on the node itself or an existing
    /// neighbor are retried with fresh draws. Links inherited from
    /// earlier nodes' passes count toward the target.
    ///
    /// Returns the number of successful insertions. A network of one
    /// node or fewer can hold no links and yields 0.
    pub fn random_connect(&mut self, mean_deg: f64) -> usize {
        self.links.clear_links();
        let size = self.size();
        if size <= 1 {
            return 0;
        }

        let mut inserted = 0;
        for node in 0..size {
            let drawn = self.rng.poisson(mean_deg);
            // A node cannot out-degree the rest of the network; the
            // clamp also bounds the retry loop below.
            let target = drawn.min(size - 1);
            while self.links.degree(node) < target {
                let candidate = self.rng.uniform_int(0, size - 1);
                if self.add_link(node, candidate) {
                    inserted += 1;
                }
            }
        }
        inserted
    }
}
