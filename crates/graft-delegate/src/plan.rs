//! Declarative delegation plans.
//!
//! A plan names the delegatee slot, the members to forward, and the
//! collision policy. Plans can be built in code or read from JSON:
//!
//! ```json
//! { "slot": "engine", "members": ["start", { "halt": "stop" }], "overwrite": false }
//! ```

use crate::delegate::delegate;
use crate::descriptor::Descriptor;
use crate::error::DelegateError;
use crate::host::Host;
use crate::options::DelegateOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegation {
    /// Member on the host that holds the delegatee.
    pub slot: String,
    /// Members to forward, installed in order.
    #[serde(default)]
    pub members: Vec<Descriptor>,
    #[serde(flatten)]
    pub options: DelegateOptions,
}

impl Delegation {
    /// Start a plan forwarding to the delegatee held in `slot`.
    pub fn to(slot: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            members: Vec::new(),
            options: DelegateOptions::default(),
        }
    }

    pub fn member(mut self, descriptor: impl Into<Descriptor>) -> Self {
        self.members.push(descriptor.into());
        self
    }

    pub fn rename(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.members.push(Descriptor::rename(source, target));
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.options.overwrite = overwrite;
        self
    }

    pub fn from_json(text: &str) -> Result<Self, DelegateError> {
        let plan: Self =
            serde_json::from_str(text).map_err(|error| DelegateError::InvalidPlan {
                message: error.to_string(),
            })?;
        if plan.slot.trim().is_empty() {
            return Err(DelegateError::InvalidPlan {
                message: "slot must be non-empty".to_string(),
            });
        }
        Ok(plan)
    }

    /// Apply the plan to `host`; see [`delegate()`].
    pub fn install(&self, host: Host<'_>) -> Result<(), DelegateError> {
        delegate(host, &self.slot, self.members.iter().cloned(), self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_json_agree() {
        let built = Delegation::to("engine")
            .member("start")
            .rename("halt", "stop")
            .overwrite(true);
        let parsed = Delegation::from_json(
            r#"{"slot": "engine", "members": ["start", {"halt": "stop"}], "overwrite": true}"#,
        )
        .expect("parse");
        assert_eq!(built, parsed);
    }

    #[test]
    fn members_and_overwrite_are_optional() {
        let plan = Delegation::from_json(r#"{"slot": "engine"}"#).expect("parse");
        assert!(plan.members.is_empty());
        assert!(!plan.options.overwrite);
    }

    #[test]
    fn rejects_blank_slot_and_bad_descriptors() {
        assert_eq!(
            Delegation::from_json(r#"{"slot": " "}"#),
            Err(DelegateError::InvalidPlan {
                message: "slot must be non-empty".to_string(),
            })
        );
        assert!(matches!(
            Delegation::from_json(r#"{"slot": "engine", "members": [{}]}"#),
            Err(DelegateError::InvalidPlan { .. })
        ));
    }

    #[test]
    fn plans_built_in_code_are_checked_on_install() {
        let car = graft_kernel::ObjectRef::new();
        assert_eq!(
            Delegation::to(" ").member("rpm").install(Host::object(&car, "car")),
            Err(DelegateError::EmptySlot)
        );
        assert!(car.own_member_names().is_empty());
    }

    #[test]
    fn serialized_plan_shape() {
        let plan = Delegation::to("engine").member("start").rename("halt", "stop");
        insta::assert_json_snapshot!(plan, @r###"
        {
          "slot": "engine",
          "members": [
            "start",
            {
              "halt": "stop"
            }
          ],
          "overwrite": false
        }
        "###);
    }
}
