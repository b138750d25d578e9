//! Registered-Surface Export
//!
//! Serializable snapshot of the placed tweaks: what registration forwards,
//! plus the current values. External dashboards can consume this as JSON.

use serde::Serialize;

use crate::tweak::{EnumChoice, TweakDef, TweakRegistry, TweakValue};

/// Kind tag of an exported tweak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TweakKind {
    Bool,
    String,
    Int,
    Double,
    Enum,
    Action,
}

/// One exported tweak descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct TweakExport {
    pub category: String,
    pub subcategory: String,
    pub name: String,
    pub kind: TweakKind,
    /// Absent for actions, which carry no value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<TweakValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<TweakValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<EnumChoice>>,
}

/// Snapshot of every placed tweak, in declaration order. Unplaced tweaks are
/// excluded, same as in registration.
pub fn export_registry(registry: &TweakRegistry) -> Vec<TweakExport> {
    let mut exports = Vec::new();

    for def in registry.iter() {
        let Some(path) = def.path() else { continue };

        let (kind, default, current, choices) = match def {
            TweakDef::Bool(tweak) => (
                TweakKind::Bool,
                Some(TweakValue::Bool(tweak.default_value())),
                Some(TweakValue::Bool(tweak.value())),
                None,
            ),
            TweakDef::String(tweak) => (
                TweakKind::String,
                Some(TweakValue::String(tweak.default_value().to_string())),
                Some(TweakValue::String(tweak.value())),
                None,
            ),
            TweakDef::Int(tweak) => (
                TweakKind::Int,
                Some(TweakValue::Int(tweak.default_value())),
                Some(TweakValue::Int(tweak.value())),
                None,
            ),
            TweakDef::Double(tweak) => (
                TweakKind::Double,
                Some(TweakValue::Double(tweak.default_value())),
                Some(TweakValue::Double(tweak.value())),
                None,
            ),
            TweakDef::Enum(tweak) => (
                TweakKind::Enum,
                Some(tweak.default_value().clone()),
                Some(tweak.value()),
                Some(tweak.choices().to_vec()),
            ),
            TweakDef::Action(_) => (TweakKind::Action, None, None, None),
        };

        exports.push(TweakExport {
            category: path.category.clone(),
            subcategory: path.subcategory.clone(),
            name: path.name.clone(),
            kind,
            default,
            current,
            choices,
        });
    }

    exports
}
