//! Objects: own members plus an optional class whose prototype chain is
//! consulted after them.

use crate::class::Class;
use crate::error::KernelError;
use crate::member::Member;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Object {
    label: Option<String>,
    class: Option<Class>,
    members: BTreeMap<String, Member>,
}

/// Shared handle to an object.
///
/// Member bodies never run while the object's table is borrowed, so a method
/// may read and write its own receiver freely.
#[derive(Clone, Default)]
pub struct ObjectRef(Rc<RefCell<Object>>);

impl ObjectRef {
    /// A plain object with no class and no label.
    pub fn new() -> Self {
        Self::default()
    }

    /// A plain object carrying an explicit display name.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(Object {
            label: Some(label.into()),
            ..Object::default()
        })))
    }

    pub(crate) fn instance_of(class: Class) -> Self {
        Self(Rc::new(RefCell::new(Object {
            class: Some(class),
            ..Object::default()
        })))
    }

    /// Builder-style own member definition, for object literals.
    pub fn with(self, name: impl Into<String>, member: Member) -> Self {
        self.define(name, member);
        self
    }

    pub fn label(&self) -> Option<String> {
        self.0.borrow().label.clone()
    }

    /// Explicit label, else the class name, else `Object`.
    pub fn display_name(&self) -> String {
        let object = self.0.borrow();
        match (&object.label, &object.class) {
            (Some(label), _) => label.clone(),
            (None, Some(class)) => class.name().to_string(),
            (None, None) => "Object".to_string(),
        }
    }

    pub fn class(&self) -> Option<Class> {
        self.0.borrow().class.clone()
    }

    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.class()
            .is_some_and(|own_class| own_class.is_subclass_of(class))
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn has_own(&self, name: &str) -> bool {
        self.0.borrow().members.contains_key(name)
    }

    pub fn own_member_names(&self) -> Vec<String> {
        self.0.borrow().members.keys().cloned().collect()
    }

    /// Install an own member, returning whatever it replaced.
    pub fn define(&self, name: impl Into<String>, member: Member) -> Option<Member> {
        self.0.borrow_mut().members.insert(name.into(), member)
    }

    pub fn remove(&self, name: &str) -> Option<Member> {
        self.0.borrow_mut().members.remove(name)
    }

    /// Own member first, then the class chain. The home class is `None` for
    /// own members.
    fn resolve(&self, name: &str) -> Option<(Option<Class>, Member)> {
        let own = self.0.borrow().members.get(name).cloned();
        if let Some(member) = own {
            return Some((None, member));
        }
        self.class()?
            .lookup(name)
            .map(|(owner, member)| (Some(owner), member))
    }

    fn unknown(&self, name: &str) -> KernelError {
        KernelError::UnknownMember {
            owner: self.display_name(),
            member: name.to_string(),
        }
    }

    /// Read a member. Getters run with this object as receiver; methods come
    /// back as functions bound to this object.
    pub fn get(&self, name: &str) -> Result<Value, KernelError> {
        let (home, member) = self.resolve(name).ok_or_else(|| self.unknown(name))?;
        member.read(self, home.as_ref(), name)
    }

    /// Write an own data member. Members that resolve to a getter are
    /// read-only.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<(), KernelError> {
        if self
            .resolve(name)
            .is_some_and(|(_, member)| member.is_read_only())
        {
            return Err(KernelError::ReadOnlyMember {
                owner: self.display_name(),
                member: name.to_string(),
            });
        }
        self.define(name, Member::Data(value.into()));
        Ok(())
    }

    /// Invoke a member with this object as receiver.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, KernelError> {
        let (home, member) = self.resolve(name).ok_or_else(|| self.unknown(name))?;
        member.invoke(self, home.as_ref(), name, args)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(object) => f
                .debug_struct("ObjectRef")
                .field("label", &object.label)
                .field("class", &object.class)
                .field("members", &object.members.keys().collect::<Vec<_>>())
                .finish(),
            Err(_) => f.write_str("ObjectRef(<borrowed>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::argument;

    fn counter() -> Class {
        Class::builder("Counter")
            .field("count", || Value::Int(0))
            .method("increment", |this, args| {
                let step = argument(args, 0).as_int().unwrap_or(1);
                let count = this.get("count")?.as_int().unwrap_or_default() + step;
                this.set("count", count)?;
                Ok(Value::Int(count))
            })
            .getter("doubled", |this| {
                let count = this.get("count")?.as_int().unwrap_or_default();
                Ok(Value::Int(count * 2))
            })
            .build()
    }

    #[test]
    fn methods_mutate_their_receiver() {
        let object = counter().instantiate().expect("instantiate");
        assert_eq!(object.call("increment", &[]), Ok(Value::Int(1)));
        assert_eq!(object.call("increment", &[Value::Int(5)]), Ok(Value::Int(6)));
        assert_eq!(object.get("count"), Ok(Value::Int(6)));
        assert_eq!(object.get("doubled"), Ok(Value::Int(12)));
    }

    #[test]
    fn reading_a_method_yields_a_bound_function() {
        let object = counter().instantiate().expect("instantiate");
        let increment = object.get("increment").expect("read method");
        let function = increment.as_function().expect("callable");
        function.call(&[Value::Int(2)]).expect("call");
        assert_eq!(object.get("count"), Ok(Value::Int(2)));
    }

    #[test]
    fn getters_reject_writes() {
        let object = counter().instantiate().expect("instantiate");
        assert_eq!(
            object.set("doubled", Value::Int(1)),
            Err(KernelError::ReadOnlyMember {
                owner: "Counter".to_string(),
                member: "doubled".to_string(),
            })
        );
    }

    #[test]
    fn unknown_members_and_non_callables_are_errors() {
        let object = ObjectRef::labeled("config").with("depth", Member::data(Value::Int(3)));
        assert_eq!(
            object.get("width"),
            Err(KernelError::UnknownMember {
                owner: "config".to_string(),
                member: "width".to_string(),
            })
        );
        assert_eq!(
            object.call("depth", &[]),
            Err(KernelError::NotCallable {
                owner: "config".to_string(),
                member: "depth".to_string(),
            })
        );
    }

    #[test]
    fn own_members_shadow_the_prototype() {
        let class = counter();
        let object = class.instantiate().expect("instantiate");
        object.define("doubled", Member::data("shadowed"));
        assert_eq!(object.get("doubled"), Ok(Value::from("shadowed")));
        assert!(object.has_own("doubled"));
        assert!(class.has_own("doubled"));
    }

    #[test]
    fn display_name_prefers_label_then_class() {
        assert_eq!(ObjectRef::new().display_name(), "Object");
        assert_eq!(ObjectRef::labeled("host").display_name(), "host");
        let instance = counter().instantiate().expect("instantiate");
        assert_eq!(instance.display_name(), "Counter");
        assert!(instance.is_instance_of(&instance.class().expect("class")));
    }

    #[test]
    fn super_calls_from_own_members_start_at_the_class() {
        let class = Class::builder("Greeter")
            .method("greet", |_, _| Ok(Value::from("hello")))
            .build();
        let object = class.instantiate().expect("instantiate");
        object.define(
            "greet",
            Member::method(|this, args| {
                let base = this.call_super("greet", args)?;
                Ok(Value::from(format!("{base}, world")))
            }),
        );
        assert_eq!(object.call("greet", &[]), Ok(Value::from("hello, world")));
    }
}
