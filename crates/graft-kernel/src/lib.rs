//! # Graft Kernel
//!
//! A small dispatch-table object model: the common ground on which members
//! are forwarded between objects and classes are layered into chains.
//!
//! Nothing here is reflective. A class is a named member table with an
//! optional parent; an object is a member table with an optional class. Every
//! method receives its receiver explicitly, so "who is `this`" is decided by
//! whoever performs the call rather than by where the member is stored.
//!
//! ## Architecture
//!
//! ```text
//! Value                 ← Scalars, object handles, bound functions
//!     │
//! Member                ← Data | Method | Getter, stored by name
//!     │
//! Class                 ← Prototype table + parent + instance initializers
//!     │
//! ObjectRef             ← Own table, then the class chain
//!     │
//! Receiver              ← `this` of a running member, with super resolution
//! ```

pub mod class;
pub mod error;
pub mod member;
pub mod object;
pub mod value;

pub use class::{Class, ClassBuilder};
pub use error::KernelError;
pub use member::{GetterFn, Member, MemberKind, MethodFn, Receiver};
pub use object::ObjectRef;
pub use value::{Function, NativeFn, Value, argument};
