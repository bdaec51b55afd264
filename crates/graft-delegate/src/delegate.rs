//! Installing forwarding members.

use crate::descriptor::Descriptor;
use crate::error::DelegateError;
use crate::host::Host;
use crate::options::DelegateOptions;
use graft_kernel::{Function, KernelError, Member, ObjectRef, Value};

/// Install one forwarding member per descriptor on `host`.
///
/// Each installed member is a read-only getter. On every access it reads
/// `slot` through the receiver and then reads the source member on whatever
/// object currently sits there. Callable members come back as functions that
/// re-read the slot when invoked and run with the delegatee as receiver;
/// anything else is returned as a live value.
///
/// The slot and every descriptor are checked before anything is installed:
/// blank names and a target equal to `slot` are rejected up front, whatever
/// `overwrite` says. Descriptors are then installed in order. Without
/// `overwrite`, the first target name the installation target already owns
/// aborts the call with [`DelegateError::DuplicateProperty`]; members
/// installed before it stay in place.
pub fn delegate<D>(
    host: Host<'_>,
    slot: &str,
    descriptors: impl IntoIterator<Item = D>,
    options: DelegateOptions,
) -> Result<(), DelegateError>
where
    D: Into<Descriptor>,
{
    let descriptors: Vec<Descriptor> = descriptors.into_iter().map(Into::into).collect();
    validate(host, slot, &descriptors)?;

    for descriptor in &descriptors {
        let member = descriptor.target();

        if !options.overwrite && host.has_own(member) {
            tracing::debug!(
                host = host.display_name(),
                member,
                "refusing to shadow an existing member"
            );
            return Err(DelegateError::DuplicateProperty {
                property: member.to_string(),
                host: host.display_name().to_string(),
            });
        }

        let replaced = host.install(
            member,
            forwarding_member(host.display_name(), slot, descriptor.source()),
        );
        tracing::debug!(
            host = host.display_name(),
            slot,
            source = descriptor.source(),
            member,
            replaced = replaced.is_some(),
            "installed forwarding member"
        );
    }
    Ok(())
}

fn validate(host: Host<'_>, slot: &str, descriptors: &[Descriptor]) -> Result<(), DelegateError> {
    if slot.trim().is_empty() {
        return Err(DelegateError::EmptySlot);
    }
    for descriptor in descriptors {
        if descriptor.source().trim().is_empty() || descriptor.target().trim().is_empty() {
            return Err(DelegateError::EmptyMember {
                descriptor: descriptor.to_string(),
            });
        }
        // A forwarder stored in the slot would read itself on every access.
        if descriptor.target() == slot {
            return Err(DelegateError::TargetIsSlot {
                member: slot.to_string(),
                host: host.display_name().to_string(),
            });
        }
    }
    Ok(())
}

/// The getter installed for a single descriptor. `host` names the host in
/// access-time errors.
///
/// Functions read through the getter hold a strong handle to the receiver.
/// Storing one back on that same receiver forms a reference cycle that is
/// never freed.
pub fn forwarding_member(host: &str, slot: &str, source: &str) -> Member {
    let host_name = host.to_string();
    let slot = slot.to_string();
    let source = source.to_string();
    Member::getter(move |receiver| {
        let host = receiver.this();
        match delegatee_of(host, &host_name, &slot)?.get(&source)? {
            Value::Function(_) => Ok(Value::Function(forwarder(
                host.clone(),
                host_name.clone(),
                slot.clone(),
                source.clone(),
            ))),
            value => Ok(value),
        }
    })
}

/// A callable that resolves the delegatee at call time, not at read time.
fn forwarder(host: ObjectRef, host_name: String, slot: String, source: String) -> Function {
    Function::new(source.clone(), move |args| {
        delegatee_of(&host, &host_name, &slot)?.call(&source, args)
    })
}

fn delegatee_of(host: &ObjectRef, host_name: &str, slot: &str) -> Result<ObjectRef, KernelError> {
    match host.get(slot)? {
        Value::Object(delegatee) => Ok(delegatee),
        _ => Err(KernelError::NotAnObject {
            owner: host_name.to_string(),
            slot: slot.to_string(),
        }),
    }
}
