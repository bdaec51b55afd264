//! Error types for delegation.

/// Errors raised while installing forwarding members.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DelegateError {
    /// The installation target already owns a member with the target name
    /// and overwriting was not requested.
    #[error("Property '{property}' is already defined on {host}")]
    DuplicateProperty { property: String, host: String },

    /// The delegatee slot name is blank.
    #[error("delegatee slot name must be non-empty")]
    EmptySlot,

    /// A descriptor names a blank member on either side.
    #[error("descriptor '{descriptor}' names an empty member")]
    EmptyMember { descriptor: String },

    /// A descriptor would install its forwarder over the slot that holds
    /// the delegatee.
    #[error("cannot install '{member}' on {host}: it names the delegatee slot")]
    TargetIsSlot { member: String, host: String },

    /// A delegation plan could not be read.
    #[error("invalid delegation plan: {message}")]
    InvalidPlan { message: String },
}
