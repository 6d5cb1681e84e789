//! Core data structures representing the solar system.
//!
//! - [`body`] – Shared physical-body geometry with the one-time derivation pass.
//! - [`system`] – The rooted tree of [`Sun`], [`Planet`], and [`Moon`].
//!
//! Every body is constructed once from input data, mutated exactly once by
//! its derivation pass, and immutable thereafter.
//!
//! [`Sun`]: system::Sun
//! [`Planet`]: system::Planet
//! [`Moon`]: system::Moon

pub mod body;
pub mod system;
