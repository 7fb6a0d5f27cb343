//! rn-net: the network model for randnet.
//!
//! Provides:
//! - [`Network`]: dense-indexed nodes carrying real values, connected by
//!   undirected links
//! - Poisson-driven random link generation with duplicate/self-loop
//!   rejection
//! - Degree, neighbor and value-ranking queries, plus reporting
//!   statistics
//!
//! # Example
//!
//! ```
//! use rn_net::Network;
//! use rn_rand::PcgSource;
//!
//! let mut network = Network::new(PcgSource::seeded(7));
//! network.resize(5);
//! assert!(network.add_link(0, 1));
//! assert!(network.add_link(0, 2));
//! assert_eq!(network.degree(0), 2);
//! assert_eq!(network.neighbors(0), vec![2, 1]);
//! ```

pub mod links;
pub mod network;
pub mod stats;

// Re-exports for ergonomics
pub use links::LinkStore;
pub use network::Network;
