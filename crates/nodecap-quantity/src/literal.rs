//! Serde adapters for quantity literals in snapshot documents.
//!
//! Snapshot fields carry Kubernetes-style strings ("500m", "1Gi"). The
//! field position fixes the unit family, so each family gets its own
//! adapter module for use with `#[serde(with = "...")]`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::quantity::{Quantity, ResourceKind};

fn parse_with<'de, D>(kind: ResourceKind, deserializer: D) -> Result<Quantity, D::Error>
where
    D: Deserializer<'de>,
{
    let literal = String::deserialize(deserializer)?;
    Quantity::parse(kind, &literal).map_err(D::Error::custom)
}

fn parse_opt_with<'de, D>(
    kind: ResourceKind,
    deserializer: D,
) -> Result<Option<Quantity>, D::Error>
where
    D: Deserializer<'de>,
{
    let literal = Option::<String>::deserialize(deserializer)?;
    literal
        .map(|value| Quantity::parse(kind, &value).map_err(D::Error::custom))
        .transpose()
}

pub mod cpu {
    use super::*;

    pub fn serialize<S>(value: &Quantity, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Quantity, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse_with(ResourceKind::Cpu, deserializer)
    }
}

pub mod memory {
    use super::*;

    pub fn serialize<S>(value: &Quantity, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Quantity, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse_with(ResourceKind::Memory, deserializer)
    }
}

pub mod cpu_opt {
    use super::*;

    pub fn serialize<S>(value: &Option<Quantity>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(quantity) => serializer.collect_str(quantity),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Quantity>, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse_opt_with(ResourceKind::Cpu, deserializer)
    }
}

pub mod memory_opt {
    use super::*;

    pub fn serialize<S>(value: &Option<Quantity>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(quantity) => serializer.collect_str(quantity),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Quantity>, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse_opt_with(ResourceKind::Memory, deserializer)
    }
}
