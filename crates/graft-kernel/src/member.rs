//! Member table entries and the receiver they run against.

use crate::class::Class;
use crate::error::KernelError;
use crate::object::ObjectRef;
use crate::value::{Function, Value};
use std::fmt;
use std::rc::Rc;

/// Body of a method: receives the running receiver and positional arguments.
pub type MethodFn = dyn Fn(&Receiver, &[Value]) -> Result<Value, KernelError>;

/// Body of a getter.
pub type GetterFn = dyn Fn(&Receiver) -> Result<Value, KernelError>;

/// One entry of a prototype or an object's own member table.
#[derive(Clone)]
pub enum Member {
    /// A plain value, read and written directly.
    Data(Value),
    /// A method, invoked with the object it was looked up on as receiver.
    Method(Rc<MethodFn>),
    /// A computed, read-only member.
    Getter(Rc<GetterFn>),
}

/// Discriminant of [`Member`], for introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Data,
    Method,
    Getter,
}

impl Member {
    pub fn data(value: impl Into<Value>) -> Self {
        Member::Data(value.into())
    }

    pub fn method(
        body: impl Fn(&Receiver, &[Value]) -> Result<Value, KernelError> + 'static,
    ) -> Self {
        Member::Method(Rc::new(body))
    }

    pub fn getter(body: impl Fn(&Receiver) -> Result<Value, KernelError> + 'static) -> Self {
        Member::Getter(Rc::new(body))
    }

    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Data(_) => MemberKind::Data,
            Member::Method(_) => MemberKind::Method,
            Member::Getter(_) => MemberKind::Getter,
        }
    }

    /// Getters have no setter; writes through them are rejected.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Member::Getter(_))
    }

    /// Read this member as seen from `this`. Methods come back as functions
    /// bound to `this`.
    pub(crate) fn read(
        &self,
        this: &ObjectRef,
        home: Option<&Class>,
        name: &str,
    ) -> Result<Value, KernelError> {
        match self {
            Member::Data(value) => Ok(value.clone()),
            Member::Getter(body) => body(&Receiver::new(this.clone(), home.cloned())),
            Member::Method(body) => {
                let receiver = Receiver::new(this.clone(), home.cloned());
                let body = Rc::clone(body);
                Ok(Value::Function(Function::new(name, move |args| {
                    body(&receiver, args)
                })))
            }
        }
    }

    /// Invoke this member with `this` as receiver.
    pub(crate) fn invoke(
        &self,
        this: &ObjectRef,
        home: Option<&Class>,
        name: &str,
        args: &[Value],
    ) -> Result<Value, KernelError> {
        match self {
            Member::Method(body) => body(&Receiver::new(this.clone(), home.cloned()), args),
            other => match other.read(this, home, name)? {
                Value::Function(function) => function.call(args),
                _ => Err(KernelError::NotCallable {
                    owner: this.display_name(),
                    member: name.to_string(),
                }),
            },
        }
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Data(value) => f.debug_tuple("Data").field(value).finish(),
            Member::Method(_) => f.write_str("Method"),
            Member::Getter(_) => f.write_str("Getter"),
        }
    }
}

/// The `this` of a running method, getter, or initializer.
///
/// `home` is the class whose prototype owns the running member. Super calls
/// resolve from its parent; members owned by the object itself have no home
/// and resolve super calls from the object's class.
#[derive(Debug, Clone)]
pub struct Receiver {
    this: ObjectRef,
    home: Option<Class>,
}

impl Receiver {
    pub(crate) fn new(this: ObjectRef, home: Option<Class>) -> Self {
        Self { this, home }
    }

    pub fn this(&self) -> &ObjectRef {
        &self.this
    }

    pub fn home(&self) -> Option<&Class> {
        self.home.as_ref()
    }

    pub fn get(&self, name: &str) -> Result<Value, KernelError> {
        self.this.get(name)
    }

    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<(), KernelError> {
        self.this.set(name, value)
    }

    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, KernelError> {
        self.this.call(name, args)
    }

    /// Invoke the next implementation of `name` above the home class, keeping
    /// the same receiver.
    pub fn call_super(&self, name: &str, args: &[Value]) -> Result<Value, KernelError> {
        let start = match &self.home {
            Some(home) => home.parent(),
            None => self.this.class(),
        };
        match start.and_then(|class| class.lookup(name)) {
            Some((owner, member)) => member.invoke(&self.this, Some(&owner), name, args),
            None => Err(KernelError::NoSuperMember {
                class: self
                    .home
                    .as_ref()
                    .map(|home| home.name().to_string())
                    .unwrap_or_else(|| self.this.display_name()),
                member: name.to_string(),
            }),
        }
    }
}
