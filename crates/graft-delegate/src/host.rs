//! Where forwarding members are installed.

use graft_kernel::{Class, Member, ObjectRef};

/// A delegation host.
///
/// Class hosts receive members on their shared prototype, so every instance
/// sees them. Object hosts receive own members and must carry an explicit
/// label, since an object has no type name to report in errors.
#[derive(Debug, Clone, Copy)]
pub enum Host<'a> {
    Class(&'a Class),
    Object {
        object: &'a ObjectRef,
        label: &'a str,
    },
}

impl<'a> Host<'a> {
    pub fn class(class: &'a Class) -> Self {
        Host::Class(class)
    }

    pub fn object(object: &'a ObjectRef, label: &'a str) -> Self {
        Host::Object { object, label }
    }

    /// Name reported in duplicate-member errors.
    pub fn display_name(&self) -> &'a str {
        match *self {
            Host::Class(class) => class.name(),
            Host::Object { label, .. } => label,
        }
    }

    /// Whether the installation target itself owns `name`. Inherited members
    /// do not count.
    pub fn has_own(&self, name: &str) -> bool {
        match self {
            Host::Class(class) => class.has_own(name),
            Host::Object { object, .. } => object.has_own(name),
        }
    }

    pub(crate) fn install(&self, name: &str, member: Member) -> Option<Member> {
        match self {
            Host::Class(class) => class.define(name, member),
            Host::Object { object, .. } => object.define(name, member),
        }
    }
}

impl<'a> From<&'a Class> for Host<'a> {
    fn from(class: &'a Class) -> Self {
        Host::Class(class)
    }
}
