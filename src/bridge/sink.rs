//! Sink Boundary
//!
//! The registration API surface of the external tweaks UI. The external
//! library owns presentation, the registration namespace and persistence of
//! edited values; this crate only forwards descriptors into it.

use std::fmt;
use std::sync::Arc;

use crate::tweak::{ActionTweak, EnumChoice, TweakPath, TweakValue};

/// Callback the external UI invokes when the user edits a value.
pub type ValueSetter = Arc<dyn Fn(TweakValue) + Send + Sync>;

/// Descriptor of one editable tweak handed to the sink.
#[derive(Clone)]
pub struct ValueRegistration {
    pub path: TweakPath,
    pub default: TweakValue,
    /// Present for enum tweaks only.
    pub choices: Option<Vec<EnumChoice>>,
    /// Pushes an edited value back into the live tweak.
    pub setter: ValueSetter,
}

impl ValueRegistration {
    /// Pushes an edited value through the setter.
    pub fn set(&self, value: TweakValue) {
        (self.setter)(value);
    }
}

impl fmt::Debug for ValueRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueRegistration")
            .field("path", &self.path)
            .field("default", &self.default)
            .field("choices", &self.choices)
            .finish_non_exhaustive()
    }
}

/// Descriptor of one action tweak handed to the sink. The handle invokes the
/// underlying callback and no-ops when there is none.
#[derive(Debug, Clone)]
pub struct ActionRegistration {
    pub path: TweakPath,
    pub action: ActionTweak,
}

/// Registration API of the external tweaks UI.
///
/// Repeated registration of the same path is the sink's business; the
/// registrar forwards identical descriptors every time it runs.
pub trait TweakSink {
    fn register_value(&mut self, registration: ValueRegistration);
    fn register_action(&mut self, registration: ActionRegistration);
}

/// Sink retaining every registration in arrival order.
///
/// The reference sink for tests and for external sides that want to drive
/// values themselves (the overrides loader pushes through it). Lookups return
/// the most recent registration of a path, so re-registration replaces.
#[derive(Debug, Default)]
pub struct RecordingSink {
    values: Vec<ValueRegistration>,
    actions: Vec<ActionRegistration>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every value registration received, in arrival order.
    pub fn values(&self) -> &[ValueRegistration] {
        &self.values
    }

    /// Every action registration received, in arrival order.
    pub fn actions(&self) -> &[ActionRegistration] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.values.len() + self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.actions.is_empty()
    }

    /// Latest value registration at the given path.
    pub fn value_by_path(&self, path: &TweakPath) -> Option<&ValueRegistration> {
        self.values.iter().rev().find(|reg| reg.path == *path)
    }

    /// Latest action registration at the given path.
    pub fn action_by_path(&self, path: &TweakPath) -> Option<&ActionRegistration> {
        self.actions.iter().rev().find(|reg| reg.path == *path)
    }

    /// Pushes a value through the setter registered at `path`. Returns false
    /// when no value tweak is registered there.
    pub fn set(&self, path: &TweakPath, value: TweakValue) -> bool {
        match self.value_by_path(path) {
            Some(registration) => {
                registration.set(value);
                true
            }
            None => false,
        }
    }
}

impl TweakSink for RecordingSink {
    fn register_value(&mut self, registration: ValueRegistration) {
        self.values.push(registration);
    }

    fn register_action(&mut self, registration: ActionRegistration) {
        self.actions.push(registration);
    }
}

/// Sink that only logs what would be registered. Useful as a smoke target
/// when no UI is wired up.
#[derive(Debug, Default)]
pub struct LogSink;

impl TweakSink for LogSink {
    fn register_value(&mut self, registration: ValueRegistration) {
        match &registration.choices {
            Some(choices) => log::info!(
                "registered {} (default {}, {} choices)",
                registration.path,
                registration.default,
                choices.len()
            ),
            None => log::info!(
                "registered {} (default {})",
                registration.path,
                registration.default
            ),
        }
    }

    fn register_action(&mut self, registration: ActionRegistration) {
        log::info!("registered action {}", registration.path);
    }
}
