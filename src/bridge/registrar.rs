//! Registrar
//!
//! Walks every declared tweak and forwards it to the sink. Pure
//! discovery-and-forwarding: no retry, no dedup, no failure path surfaced to
//! callers.

use std::sync::Arc;

use super::sink::{ActionRegistration, TweakSink, ValueRegistration};
use crate::tweak::{TweakDef, TweakPath, TweakRegistry, TweakValue};

/// Registers every placed tweak with the sink, in declaration order.
///
/// Tweaks without a path are skipped. Should be called once at startup;
/// calling it again forwards identical descriptors whose setters write the
/// same live values, leaving any dedup of repeats to the sink.
pub fn register_all(registry: &TweakRegistry, sink: &mut dyn TweakSink) {
    for def in registry.iter() {
        let Some(path) = def.path() else { continue };
        let path = path.clone();

        match def {
            TweakDef::Bool(tweak) => {
                let handle = tweak.clone();
                let at = path.clone();
                sink.register_value(ValueRegistration {
                    path,
                    default: TweakValue::Bool(tweak.default_value()),
                    choices: None,
                    setter: Arc::new(move |value| match value {
                        TweakValue::Bool(v) => handle.track(v),
                        other => warn_kind_mismatch(&at, "bool", &other),
                    }),
                });
            }
            TweakDef::String(tweak) => {
                let handle = tweak.clone();
                let at = path.clone();
                sink.register_value(ValueRegistration {
                    path,
                    default: TweakValue::String(tweak.default_value().to_string()),
                    choices: None,
                    setter: Arc::new(move |value| match value {
                        TweakValue::String(v) => handle.track(v),
                        other => warn_kind_mismatch(&at, "string", &other),
                    }),
                });
            }
            TweakDef::Int(tweak) => {
                let handle = tweak.clone();
                let at = path.clone();
                sink.register_value(ValueRegistration {
                    path,
                    default: TweakValue::Int(tweak.default_value()),
                    choices: None,
                    setter: Arc::new(move |value| match value {
                        TweakValue::Int(v) => handle.track(v),
                        other => warn_kind_mismatch(&at, "int", &other),
                    }),
                });
            }
            TweakDef::Double(tweak) => {
                let handle = tweak.clone();
                let at = path.clone();
                sink.register_value(ValueRegistration {
                    path,
                    default: TweakValue::Double(tweak.default_value()),
                    choices: None,
                    setter: Arc::new(move |value| match value {
                        TweakValue::Double(v) => handle.track(v),
                        other => warn_kind_mismatch(&at, "double", &other),
                    }),
                });
            }
            TweakDef::Enum(tweak) => {
                let handle = tweak.clone();
                let at = path.clone();
                sink.register_value(ValueRegistration {
                    path,
                    default: tweak.default_value().clone(),
                    choices: Some(tweak.choices().to_vec()),
                    setter: Arc::new(move |value| {
                        // Membership stays the caller's responsibility, as at
                        // declaration time.
                        if !handle.choices().iter().any(|choice| choice.value == value) {
                            log::warn!("{}: value {} is not among the choices", at, value);
                        }
                        handle.track(value);
                    }),
                });
            }
            TweakDef::Action(tweak) => {
                sink.register_action(ActionRegistration {
                    path,
                    action: tweak.clone(),
                });
            }
        }
    }
}

fn warn_kind_mismatch(path: &TweakPath, expected: &str, got: &TweakValue) {
    log::warn!(
        "{}: ignoring {} value {} for a {} tweak",
        path,
        got.kind_name(),
        got,
        expected
    );
}
