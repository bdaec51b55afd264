//! Subclass factories and the fold that layers them.

use crate::error::MixError;
use graft_kernel::{Class, KernelError};

/// Name of the class used when `mix` is given no base.
pub const EMPTY_BASE: &str = "Base";

/// A subclass factory: given a class, produce a class layered on top of it.
///
/// Factories are expected to return a fresh subclass of their input rather
/// than mutate it; nothing checks this.
pub trait Mixin {
    fn apply(&self, base: Class) -> Result<Class, KernelError>;

    /// Name used in logs and errors.
    fn label(&self) -> &str {
        "mixin"
    }
}

impl<F> Mixin for F
where
    F: Fn(Class) -> Result<Class, KernelError>,
{
    fn apply(&self, base: Class) -> Result<Class, KernelError> {
        self(base)
    }
}

/// A factory with a name attached.
pub struct Labeled<F> {
    label: String,
    factory: F,
}

/// Attach a label to a factory closure.
pub fn labeled<F>(label: impl Into<String>, factory: F) -> Labeled<F>
where
    F: Fn(Class) -> Result<Class, KernelError>,
{
    Labeled {
        label: label.into(),
        factory,
    }
}

impl<F> Mixin for Labeled<F>
where
    F: Fn(Class) -> Result<Class, KernelError>,
{
    fn apply(&self, base: Class) -> Result<Class, KernelError> {
        (self.factory)(base)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Fold `mixins` onto `base`, last listed first.
///
/// Each factory runs exactly once, receiving the class accumulated so far.
/// The first failure stops the fold. With no mixins the base comes back
/// unchanged; with no base an empty root class named [`EMPTY_BASE`] is used.
pub fn mix(mixins: &[&dyn Mixin], base: Option<Class>) -> Result<Class, MixError> {
    let mut composed = base.unwrap_or_else(|| Class::new(EMPTY_BASE));
    for (index, mixin) in mixins.iter().enumerate().rev() {
        composed = mixin
            .apply(composed)
            .map_err(|source| MixError::Factory {
                index,
                label: mixin.label().to_string(),
                source,
            })?;
        tracing::trace!(
            index,
            mixin = mixin.label(),
            class = composed.name(),
            "applied mixin"
        );
    }
    Ok(composed)
}
