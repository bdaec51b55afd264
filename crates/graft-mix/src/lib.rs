//! # graft-mix
//!
//! Compose subclass factories onto a base class. `mix(&[f1, f2, f3], base)`
//! builds `f1(f2(f3(base)))`: the first listed factory is the most-derived
//! layer, and `call_super` from its members walks down the list toward the
//! base.

pub mod error;
pub mod mixin;

pub use error::MixError;
pub use mixin::{EMPTY_BASE, Labeled, Mixin, labeled, mix};
