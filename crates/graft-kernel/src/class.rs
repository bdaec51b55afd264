//! Classes: a shared prototype plus the initializers every instance runs.
//!
//! A class is a cheap, clonable handle. Its prototype is mutable after
//! construction so members can be installed on every instance at once, which
//! is what delegation onto a class relies on.

use crate::error::KernelError;
use crate::member::{Member, Receiver};
use crate::object::ObjectRef;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

type FieldInit = Rc<dyn Fn() -> Value>;
type InitBody = Rc<dyn Fn(&Receiver) -> Result<(), KernelError>>;

#[derive(Clone)]
enum Initializer {
    Field(String, FieldInit),
    Body(InitBody),
}

struct ClassInner {
    name: String,
    parent: Option<Class>,
    prototype: RefCell<BTreeMap<String, Member>>,
    initializers: Vec<Initializer>,
}

/// Shared handle to a class.
#[derive(Clone)]
pub struct Class(Rc<ClassInner>);

impl Class {
    /// A root class with no members.
    pub fn new(name: impl Into<String>) -> Self {
        ClassBuilder::new(name).build()
    }

    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn parent(&self) -> Option<Class> {
        self.0.parent.clone()
    }

    /// This class followed by every superclass, most-derived first.
    pub fn ancestors(&self) -> impl Iterator<Item = Class> {
        std::iter::successors(Some(self.clone()), Class::parent)
    }

    /// Whether `other` appears in this class's chain. A class counts as its
    /// own subclass.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self.ancestors().any(|class| class.ptr_eq(other))
    }

    pub fn ptr_eq(&self, other: &Class) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Whether the prototype itself (not an ancestor) defines `name`.
    pub fn has_own(&self, name: &str) -> bool {
        self.0.prototype.borrow().contains_key(name)
    }

    pub fn own_member(&self, name: &str) -> Option<Member> {
        self.0.prototype.borrow().get(name).cloned()
    }

    /// Prototype member names in sorted order.
    pub fn own_member_names(&self) -> Vec<String> {
        self.0.prototype.borrow().keys().cloned().collect()
    }

    /// Install `member` on the prototype, returning whatever it replaced.
    pub fn define(&self, name: impl Into<String>, member: Member) -> Option<Member> {
        self.0.prototype.borrow_mut().insert(name.into(), member)
    }

    pub fn remove(&self, name: &str) -> Option<Member> {
        self.0.prototype.borrow_mut().remove(name)
    }

    /// Resolve `name` along the chain, returning the owning class with the
    /// member.
    pub fn lookup(&self, name: &str) -> Option<(Class, Member)> {
        self.ancestors()
            .find_map(|class| class.own_member(name).map(|member| (class, member)))
    }

    /// Create an instance and run initializers from the root class down to
    /// this one. Within a class, field initializers and constructor bodies run
    /// in declaration order.
    pub fn instantiate(&self) -> Result<ObjectRef, KernelError> {
        let object = ObjectRef::instance_of(self.clone());
        let chain: Vec<Class> = self.ancestors().collect();
        for class in chain.iter().rev() {
            for initializer in &class.0.initializers {
                match initializer {
                    Initializer::Field(name, make) => {
                        object.define(name.clone(), Member::Data(make()));
                    }
                    Initializer::Body(body) => {
                        body(&Receiver::new(object.clone(), Some(class.clone())))?;
                    }
                }
            }
        }
        Ok(object)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Class").field(&self.0.name).finish()
    }
}

/// Declarative construction of a [`Class`].
pub struct ClassBuilder {
    name: String,
    parent: Option<Class>,
    members: BTreeMap<String, Member>,
    initializers: Vec<Initializer>,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            members: BTreeMap::new(),
            initializers: Vec::new(),
        }
    }

    pub fn extends(mut self, parent: &Class) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Per-instance field; `init` runs once for every new instance.
    pub fn field(
        mut self,
        name: impl Into<String>,
        init: impl Fn() -> Value + 'static,
    ) -> Self {
        self.initializers
            .push(Initializer::Field(name.into(), Rc::new(init)));
        self
    }

    /// Data member shared through the prototype.
    pub fn data(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name.into(), Member::data(value));
        self
    }

    pub fn method(
        mut self,
        name: impl Into<String>,
        body: impl Fn(&Receiver, &[Value]) -> Result<Value, KernelError> + 'static,
    ) -> Self {
        self.members.insert(name.into(), Member::method(body));
        self
    }

    pub fn getter(
        mut self,
        name: impl Into<String>,
        body: impl Fn(&Receiver) -> Result<Value, KernelError> + 'static,
    ) -> Self {
        self.members.insert(name.into(), Member::getter(body));
        self
    }

    /// Constructor body, run after this class's fields are initialized.
    pub fn init(
        mut self,
        body: impl Fn(&Receiver) -> Result<(), KernelError> + 'static,
    ) -> Self {
        self.initializers.push(Initializer::Body(Rc::new(body)));
        self
    }

    pub fn build(self) -> Class {
        Class(Rc::new(ClassInner {
            name: self.name,
            parent: self.parent,
            prototype: RefCell::new(self.members),
            initializers: self.initializers,
        }))
    }
}
