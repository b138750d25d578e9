//! Tweak Schema Types
//!
//! Paths, scalar values and the closed set of tweak variants. Variants are
//! constructed through `TweakRegistry` factories only; handles are cheap
//! clones sharing one underlying core.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};

/// Where a tweak should appear in the UI: category / subcategory / name.
///
/// Purely a UI locator; nothing in this crate looks tweaks up by path except
/// on behalf of an external caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TweakPath {
    pub category: String,
    pub subcategory: String,
    pub name: String,
}

impl TweakPath {
    pub fn new(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TweakPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.category, self.subcategory, self.name)
    }
}

/// Scalar value carried by an editable tweak.
///
/// Serializes untagged, so defaults and overrides read as plain scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TweakValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl TweakValue {
    /// Short name of the carried kind, for log messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TweakValue::Bool(_) => "bool",
            TweakValue::Int(_) => "int",
            TweakValue::Double(_) => "double",
            TweakValue::String(_) => "string",
        }
    }
}

impl fmt::Display for TweakValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TweakValue::Bool(v) => write!(f, "{}", v),
            TweakValue::Int(v) => write!(f, "{}", v),
            TweakValue::Double(v) => write!(f, "{}", v),
            TweakValue::String(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for TweakValue {
    fn from(v: bool) -> Self {
        TweakValue::Bool(v)
    }
}

impl From<i64> for TweakValue {
    fn from(v: i64) -> Self {
        TweakValue::Int(v)
    }
}

impl From<f64> for TweakValue {
    fn from(v: f64) -> Self {
        TweakValue::Double(v)
    }
}

impl From<&str> for TweakValue {
    fn from(v: &str) -> Self {
        TweakValue::String(v.to_string())
    }
}

impl From<String> for TweakValue {
    fn from(v: String) -> Self {
        TweakValue::String(v)
    }
}

/// One selectable option of an enum tweak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumChoice {
    pub value: TweakValue,
    pub title: String,
}

impl EnumChoice {
    pub fn new(value: impl Into<TweakValue>, title: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
        }
    }
}

/// Callback attached to an action tweak.
pub type TweakAction = Arc<dyn Fn() + Send + Sync>;

/// Shared state of one value-carrying tweak: immutable path and default plus
/// the externally tracked current value.
#[derive(Debug)]
struct TweakCore<T> {
    path: Option<TweakPath>,
    default: T,
    tracked: RwLock<Option<T>>,
}

impl<T: Clone> TweakCore<T> {
    fn new(path: Option<TweakPath>, default: T) -> Self {
        Self {
            path,
            default,
            tracked: RwLock::new(None),
        }
    }

    /// Tracked value if the external side pushed one, default otherwise.
    /// A poisoned cell degrades to the default instead of panicking.
    fn current(&self) -> T {
        self.tracked
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .unwrap_or_else(|| self.default.clone())
    }

    fn track(&self, value: T) {
        if let Ok(mut guard) = self.tracked.write() {
            *guard = Some(value);
        }
    }
}

/// A tweakable boolean value.
#[derive(Debug, Clone)]
pub struct BoolTweak {
    core: Arc<TweakCore<bool>>,
}

impl BoolTweak {
    pub(crate) fn new(path: Option<TweakPath>, default: bool) -> Self {
        Self {
            core: Arc::new(TweakCore::new(path, default)),
        }
    }

    /// UI placement; `None` keeps the tweak out of registration.
    pub fn path(&self) -> Option<&TweakPath> {
        self.core.path.as_ref()
    }

    /// Constructed default. Registration-facing; ordinary reads go through
    /// [`Self::value`].
    pub fn default_value(&self) -> bool {
        self.core.default
    }

    /// Current value: externally tracked once registered and edited, the
    /// default before that.
    pub fn value(&self) -> bool {
        self.core.current()
    }

    /// Alias for [`Self::value`] reading closer to call sites guarding on a
    /// switch.
    pub fn is_on(&self) -> bool {
        self.value()
    }

    pub(crate) fn track(&self, value: bool) {
        self.core.track(value);
    }
}

/// A tweakable string value.
#[derive(Debug, Clone)]
pub struct StringTweak {
    core: Arc<TweakCore<String>>,
}

impl StringTweak {
    pub(crate) fn new(path: Option<TweakPath>, default: String) -> Self {
        Self {
            core: Arc::new(TweakCore::new(path, default)),
        }
    }

    pub fn path(&self) -> Option<&TweakPath> {
        self.core.path.as_ref()
    }

    pub fn default_value(&self) -> &str {
        &self.core.default
    }

    pub fn value(&self) -> String {
        self.core.current()
    }

    pub(crate) fn track(&self, value: String) {
        self.core.track(value);
    }
}

/// A tweakable integer value.
#[derive(Debug, Clone)]
pub struct IntTweak {
    core: Arc<TweakCore<i64>>,
}

impl IntTweak {
    pub(crate) fn new(path: Option<TweakPath>, default: i64) -> Self {
        Self {
            core: Arc::new(TweakCore::new(path, default)),
        }
    }

    pub fn path(&self) -> Option<&TweakPath> {
        self.core.path.as_ref()
    }

    pub fn default_value(&self) -> i64 {
        self.core.default
    }

    pub fn value(&self) -> i64 {
        self.core.current()
    }

    pub(crate) fn track(&self, value: i64) {
        self.core.track(value);
    }
}

/// A tweakable double value.
#[derive(Debug, Clone)]
pub struct DoubleTweak {
    core: Arc<TweakCore<f64>>,
}

impl DoubleTweak {
    pub(crate) fn new(path: Option<TweakPath>, default: f64) -> Self {
        Self {
            core: Arc::new(TweakCore::new(path, default)),
        }
    }

    pub fn path(&self) -> Option<&TweakPath> {
        self.core.path.as_ref()
    }

    pub fn default_value(&self) -> f64 {
        self.core.default
    }

    pub fn value(&self) -> f64 {
        self.core.current()
    }

    pub(crate) fn track(&self, value: f64) {
        self.core.track(value);
    }
}

/// A tweakable value restricted to a fixed list of choices.
#[derive(Debug, Clone)]
pub struct EnumTweak {
    inner: Arc<EnumInner>,
}

#[derive(Debug)]
struct EnumInner {
    core: TweakCore<TweakValue>,
    choices: Vec<EnumChoice>,
}

impl EnumTweak {
    /// Membership of the default among the choices is the caller's
    /// responsibility; a mismatch is only logged.
    pub(crate) fn new(
        path: Option<TweakPath>,
        default: TweakValue,
        choices: Vec<EnumChoice>,
    ) -> Self {
        if !choices.iter().any(|choice| choice.value == default) {
            let place = path
                .as_ref()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "<unplaced>".to_string());
            log::warn!(
                "enum tweak {}: default {} is not among its choices",
                place,
                default
            );
        }
        Self {
            inner: Arc::new(EnumInner {
                core: TweakCore::new(path, default),
                choices,
            }),
        }
    }

    pub fn path(&self) -> Option<&TweakPath> {
        self.inner.core.path.as_ref()
    }

    pub fn default_value(&self) -> &TweakValue {
        &self.inner.core.default
    }

    pub fn value(&self) -> TweakValue {
        self.inner.core.current()
    }

    /// Choices in the order they are presented in the UI.
    pub fn choices(&self) -> &[EnumChoice] {
        &self.inner.choices
    }

    pub(crate) fn track(&self, value: TweakValue) {
        self.inner.core.track(value);
    }
}

/// A tweak invoking a callback when activated in the UI. Carries no value.
#[derive(Clone)]
pub struct ActionTweak {
    inner: Arc<ActionInner>,
}

struct ActionInner {
    path: Option<TweakPath>,
    callback: Option<TweakAction>,
}

impl ActionTweak {
    pub(crate) fn new(path: Option<TweakPath>, callback: Option<TweakAction>) -> Self {
        Self {
            inner: Arc::new(ActionInner { path, callback }),
        }
    }

    pub fn path(&self) -> Option<&TweakPath> {
        self.inner.path.as_ref()
    }

    pub fn has_callback(&self) -> bool {
        self.inner.callback.is_some()
    }

    /// Runs the callback; a missing callback is a no-op.
    pub fn invoke(&self) {
        if let Some(callback) = &self.inner.callback {
            callback();
        }
    }
}

impl fmt::Debug for ActionTweak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionTweak")
            .field("path", &self.inner.path)
            .field("has_callback", &self.has_callback())
            .finish()
    }
}
