//! # graft-delegate
//!
//! Forward named members from the object held in a host's slot onto the
//! host itself:
//! - [`Descriptor`]: one member to forward, optionally renamed
//! - [`Host`]: a class (prototype installation) or a labeled object
//! - [`delegate()`]: fail-fast installation with an opt-in overwrite policy
//! - [`Delegation`]: the same call as a serde-loadable plan

pub mod delegate;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod options;
pub mod plan;

pub use delegate::{delegate, forwarding_member};
pub use descriptor::Descriptor;
pub use error::DelegateError;
pub use host::Host;
pub use options::DelegateOptions;
pub use plan::Delegation;
