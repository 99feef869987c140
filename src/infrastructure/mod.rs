//! Adapters for the domain ports.

pub mod random;
