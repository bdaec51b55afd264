//! Composition scenarios with and without an explicit base class.

use graft_kernel::{Class, KernelError, Value};
use graft_mix::{Mixin, mix};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn startable(base: Class) -> Result<Class, KernelError> {
    Ok(Class::builder("Startable")
        .extends(&base)
        .method("start", |_, _| Ok(Value::from("vroom")))
        .build())
}

fn stoppable(base: Class) -> Result<Class, KernelError> {
    Ok(Class::builder("Stoppable")
        .extends(&base)
        .method("stop", |_, _| Ok(Value::from("screech")))
        .build())
}

fn superable1(base: Class) -> Result<Class, KernelError> {
    Ok(Class::builder("Superable1")
        .extends(&base)
        .method("superAwesome", |_, _| Ok(Value::from("Superable1")))
        .build())
}

fn chained(name: &'static str) -> impl Fn(Class) -> Result<Class, KernelError> {
    move |base: Class| {
        Ok(Class::builder(name)
            .extends(&base)
            .method("superAwesome", move |this, args| {
                let below = this.call_super("superAwesome", args)?;
                Ok(Value::from(format!("{below} -> {name}")))
            })
            .build())
    }
}

fn constructable(base: Class) -> Result<Class, KernelError> {
    Ok(Class::builder("Constructable")
        .extends(&base)
        .init(|this| this.set("constructableProperty", "set in constructor"))
        .build())
}

fn vehicle() -> Class {
    Class::builder("Vehicle")
        .init(|this| this.set("vehicleConstructableProperty", "set in constructor"))
        .method("move", |_, _| Ok(Value::from("moving")))
        .build()
}

mod without_base {
    use super::*;

    #[test]
    fn applies_a_mixin() {
        init_tracing();
        let car = mix(&[&startable], None).expect("mix");
        let car = car.instantiate().expect("instantiate");
        assert_eq!(car.call("start", &[]), Ok(Value::from("vroom")));
    }

    #[test]
    fn applies_multiple_mixins() {
        let car = mix(&[&startable, &stoppable], None).expect("mix");
        let car = car.instantiate().expect("instantiate");
        assert_eq!(car.call("start", &[]), Ok(Value::from("vroom")));
        assert_eq!(car.call("stop", &[]), Ok(Value::from("screech")));
    }

    #[test]
    fn chains_super_calls_in_list_order() {
        let (superable2, superable3) = (chained("Superable2"), chained("Superable3"));
        let car = mix(&[&superable3, &superable2, &superable1], None).expect("mix");
        let car = car.instantiate().expect("instantiate");
        assert_eq!(
            car.call("superAwesome", &[]),
            Ok(Value::from("Superable1 -> Superable2 -> Superable3"))
        );
    }

    #[test]
    fn runs_constructors() {
        let car = mix(&[&constructable], None).expect("mix");
        let car = car.instantiate().expect("instantiate");
        assert_eq!(
            car.get("constructableProperty"),
            Ok(Value::from("set in constructor"))
        );
    }
}

mod with_base {
    use super::*;

    #[test]
    fn applies_a_mixin() {
        let car = mix(&[&startable], Some(vehicle())).expect("mix");
        let car = car.instantiate().expect("instantiate");
        assert_eq!(car.call("move", &[]), Ok(Value::from("moving")));
        assert_eq!(car.call("start", &[]), Ok(Value::from("vroom")));
    }

    #[test]
    fn applies_multiple_mixins() {
        let car = mix(&[&startable, &stoppable], Some(vehicle())).expect("mix");
        let car = car.instantiate().expect("instantiate");
        assert_eq!(car.call("move", &[]), Ok(Value::from("moving")));
        assert_eq!(car.call("start", &[]), Ok(Value::from("vroom")));
        assert_eq!(car.call("stop", &[]), Ok(Value::from("screech")));
    }

    #[test]
    fn chains_super_calls_in_list_order() {
        let (superable2, superable3) = (chained("Superable2"), chained("Superable3"));
        let car =
            mix(&[&superable3, &superable2, &superable1], Some(vehicle())).expect("mix");
        let car = car.instantiate().expect("instantiate");
        assert_eq!(car.call("move", &[]), Ok(Value::from("moving")));
        assert_eq!(
            car.call("superAwesome", &[]),
            Ok(Value::from("Superable1 -> Superable2 -> Superable3"))
        );
    }

    #[test]
    fn runs_base_and_mixin_constructors() {
        let car = mix(&[&constructable], Some(vehicle())).expect("mix");
        let car = car.instantiate().expect("instantiate");
        assert_eq!(car.call("move", &[]), Ok(Value::from("moving")));
        assert_eq!(
            car.get("vehicleConstructableProperty"),
            Ok(Value::from("set in constructor"))
        );
        assert_eq!(
            car.get("constructableProperty"),
            Ok(Value::from("set in constructor"))
        );
    }

    #[test]
    fn first_listed_mixin_is_most_derived() {
        let base = vehicle();
        let car = mix(&[&startable, &stoppable], Some(base.clone())).expect("mix");

        assert_eq!(car.name(), "Startable");
        assert_eq!(car.parent().map(|p| p.name().to_string()).as_deref(), Some("Stoppable"));
        assert!(car.is_subclass_of(&base));
    }

    #[test]
    fn closest_override_wins() {
        let loud = |base: Class| -> Result<Class, KernelError> {
            Ok(Class::builder("Loud")
                .extends(&base)
                .method("move", |_, _| Ok(Value::from("MOVING")))
                .build())
        };
        let mixins: [&dyn Mixin; 2] = [&loud, &startable];
        let car = mix(&mixins, Some(vehicle())).expect("mix");
        let car = car.instantiate().expect("instantiate");
        assert_eq!(car.call("move", &[]), Ok(Value::from("MOVING")));
    }
}
