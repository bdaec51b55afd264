//! Delegation descriptors: which delegatee member to forward, and under
//! which name.
//!
//! Wire form is either a bare member name or a single-entry map from the
//! delegatee's member name to the name installed on the host:
//!
//! ```json
//! ["start", { "halt": "stop" }]
//! ```

use serde::de::{self, MapAccess, Unexpected, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One member to forward.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// Forward `name` to `name`.
    Same(String),
    /// Read `source` on the delegatee, install it as `target` on the host.
    Rename { source: String, target: String },
}

impl Descriptor {
    pub fn same(name: impl Into<String>) -> Self {
        Descriptor::Same(name.into())
    }

    pub fn rename(source: impl Into<String>, target: impl Into<String>) -> Self {
        Descriptor::Rename {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Member name read on the delegatee.
    pub fn source(&self) -> &str {
        match self {
            Descriptor::Same(name) => name,
            Descriptor::Rename { source, .. } => source,
        }
    }

    /// Member name installed on the host.
    pub fn target(&self) -> &str {
        match self {
            Descriptor::Same(name) => name,
            Descriptor::Rename { target, .. } => target,
        }
    }

    pub fn is_rename(&self) -> bool {
        matches!(self, Descriptor::Rename { .. })
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Same(name) => write!(f, "{name}"),
            Descriptor::Rename { source, target } => write!(f, "{source} -> {target}"),
        }
    }
}

impl From<&str> for Descriptor {
    fn from(name: &str) -> Self {
        Descriptor::same(name)
    }
}

impl From<String> for Descriptor {
    fn from(name: String) -> Self {
        Descriptor::Same(name)
    }
}

impl From<(&str, &str)> for Descriptor {
    fn from((source, target): (&str, &str)) -> Self {
        Descriptor::rename(source, target)
    }
}

impl From<(String, String)> for Descriptor {
    fn from((source, target): (String, String)) -> Self {
        Descriptor::Rename { source, target }
    }
}

impl Serialize for Descriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Descriptor::Same(name) => serializer.serialize_str(name),
            Descriptor::Rename { source, target } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(source, target)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Descriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DescriptorVisitor)
    }
}

struct DescriptorVisitor;

impl DescriptorVisitor {
    fn member_name<E: de::Error>(&self, name: String) -> Result<String, E> {
        if name.trim().is_empty() {
            return Err(E::invalid_value(Unexpected::Str(&name), self));
        }
        Ok(name)
    }
}

impl<'de> Visitor<'de> for DescriptorVisitor {
    type Value = Descriptor;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a member name or a single-entry {source: target} map")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Descriptor, E> {
        self.member_name(value.to_string()).map(Descriptor::Same)
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Descriptor, E> {
        self.member_name(value).map(Descriptor::Same)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Descriptor, A::Error> {
        let Some((source, target)) = map.next_entry::<String, String>()? else {
            return Err(<A::Error as de::Error>::invalid_length(0, &self));
        };
        if map.next_key::<de::IgnoredAny>()?.is_some() {
            return Err(<A::Error as de::Error>::invalid_length(2, &self));
        }
        Ok(Descriptor::Rename {
            source: self.member_name(source)?,
            target: self.member_name(target)?,
        })
    }
}
