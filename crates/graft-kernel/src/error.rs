//! Error types for object model operations.

/// Errors raised while reading, writing, or invoking members.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    /// No member with this name exists on the object or its class chain.
    #[error("member '{member}' is not defined on {owner}")]
    UnknownMember { owner: String, member: String },

    /// The member resolves to a getter with no setter.
    #[error("member '{member}' on {owner} is read-only")]
    ReadOnlyMember { owner: String, member: String },

    /// The member was invoked but does not resolve to something callable.
    #[error("member '{member}' on {owner} is not callable")]
    NotCallable { owner: String, member: String },

    /// A slot expected to hold an object holds some other value.
    #[error("slot '{slot}' on {owner} does not hold an object")]
    NotAnObject { owner: String, slot: String },

    /// A super call found no implementation above the home class.
    #[error("no superclass of {class} defines '{member}'")]
    NoSuperMember { class: String, member: String },

    /// An error raised by user code running inside a method, getter, or
    /// initializer.
    #[error("{0}")]
    Raised(String),
}

impl KernelError {
    /// Raise an error from inside a method body.
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised(message.into())
    }
}
