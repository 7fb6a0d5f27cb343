//! rn-rand: random-number collaborator for randnet.
//!
//! The network core never touches a global RNG. It receives a
//! [`RandomSource`] at construction, so every run is reproducible under a
//! seeded source and every test can script the exact draws it wants.
//!
//! Provides:
//! - [`RandomSource`]: the three primitives the core consumes
//! - [`PcgSource`]: PCG-64 production source (seedable or entropy-seeded)
//! - [`SequenceSource`]: scripted source replaying fixed draw sequences

pub mod pcg;
pub mod sequence;
pub mod source;

// Re-exports for ergonomics
pub use pcg::PcgSource;
pub use sequence::SequenceSource;
pub use source::RandomSource;
