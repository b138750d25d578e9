//! Tweak Registry
//!
//! Explicit, ordered collection of declared tweaks. This replaces runtime
//! reflection: application modules declare their tweaks here during startup
//! and keep the returned handles for reads.

use super::schema::{
    ActionTweak, BoolTweak, DoubleTweak, EnumChoice, EnumTweak, IntTweak, StringTweak, TweakAction,
    TweakPath, TweakValue,
};

/// One declared tweak. A closed set, so consumers can match exhaustively.
#[derive(Debug, Clone)]
pub enum TweakDef {
    Bool(BoolTweak),
    String(StringTweak),
    Int(IntTweak),
    Double(DoubleTweak),
    Enum(EnumTweak),
    Action(ActionTweak),
}

impl TweakDef {
    /// UI placement of the declared tweak, `None` for unplaced ones.
    pub fn path(&self) -> Option<&TweakPath> {
        match self {
            TweakDef::Bool(tweak) => tweak.path(),
            TweakDef::String(tweak) => tweak.path(),
            TweakDef::Int(tweak) => tweak.path(),
            TweakDef::Double(tweak) => tweak.path(),
            TweakDef::Enum(tweak) => tweak.path(),
            TweakDef::Action(tweak) => tweak.path(),
        }
    }
}

/// In-memory declaration registry, iterated in declaration order.
#[derive(Debug, Clone)]
pub struct TweakRegistry {
    tweaks: Vec<TweakDef>,
}

impl Default for TweakRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TweakRegistry {
    pub fn new() -> Self {
        Self { tweaks: Vec::new() }
    }

    /// Declare a boolean tweak.
    pub fn declare_bool(&mut self, path: Option<TweakPath>, default: bool) -> BoolTweak {
        let tweak = BoolTweak::new(effective_path(path), default);
        self.tweaks.push(TweakDef::Bool(tweak.clone()));
        tweak
    }

    /// Declare a string tweak.
    pub fn declare_string(
        &mut self,
        path: Option<TweakPath>,
        default: impl Into<String>,
    ) -> StringTweak {
        let tweak = StringTweak::new(effective_path(path), default.into());
        self.tweaks.push(TweakDef::String(tweak.clone()));
        tweak
    }

    /// Declare an integer tweak.
    pub fn declare_int(&mut self, path: Option<TweakPath>, default: i64) -> IntTweak {
        let tweak = IntTweak::new(effective_path(path), default);
        self.tweaks.push(TweakDef::Int(tweak.clone()));
        tweak
    }

    /// Declare a double tweak.
    pub fn declare_double(&mut self, path: Option<TweakPath>, default: f64) -> DoubleTweak {
        let tweak = DoubleTweak::new(effective_path(path), default);
        self.tweaks.push(TweakDef::Double(tweak.clone()));
        tweak
    }

    /// Declare a tweak with a fixed list of choices. The default should be
    /// among the choices' values; this is not enforced, only logged.
    pub fn declare_choice(
        &mut self,
        path: Option<TweakPath>,
        default: impl Into<TweakValue>,
        choices: Vec<EnumChoice>,
    ) -> EnumTweak {
        let tweak = EnumTweak::new(effective_path(path), default.into(), choices);
        self.tweaks.push(TweakDef::Enum(tweak.clone()));
        tweak
    }

    /// Declare an action tweak. A `None` callback makes activation a no-op.
    pub fn declare_action(
        &mut self,
        path: Option<TweakPath>,
        callback: Option<TweakAction>,
    ) -> ActionTweak {
        let tweak = ActionTweak::new(effective_path(path), callback);
        self.tweaks.push(TweakDef::Action(tweak.clone()));
        tweak
    }

    /// Declared tweaks in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TweakDef> {
        self.tweaks.iter()
    }

    pub fn len(&self) -> usize {
        self.tweaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweaks.is_empty()
    }

    /// First declared tweak at the given path. The registry does not enforce
    /// path uniqueness.
    pub fn find(&self, path: &TweakPath) -> Option<&TweakDef> {
        self.tweaks
            .iter()
            .find(|def| def.path().is_some_and(|p| p == path))
    }
}

/// In tweaks-free builds the placement is dropped at declaration time and
/// only the default survives.
#[cfg(feature = "bridge")]
fn effective_path(path: Option<TweakPath>) -> Option<TweakPath> {
    path
}

#[cfg(not(feature = "bridge"))]
fn effective_path(_path: Option<TweakPath>) -> Option<TweakPath> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = TweakRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[cfg(feature = "bridge")]
    #[test]
    fn test_declaration_order_is_preserved() {
        let mut registry = TweakRegistry::new();
        registry.declare_bool(Some(TweakPath::new("A", "B", "first")), true);
        registry.declare_int(Some(TweakPath::new("A", "B", "second")), 2);
        registry.declare_action(Some(TweakPath::new("A", "B", "third")), None);

        let names: Vec<_> = registry
            .iter()
            .map(|def| def.path().expect("declared with a path").name.clone())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_handles_read_defaults() {
        let mut registry = TweakRegistry::new();
        let flag = registry.declare_bool(Some(TweakPath::new("Core", "Misc", "Flag")), true);
        let level = registry.declare_int(None, 3);
        let host = registry.declare_string(None, "localhost");

        assert!(flag.is_on());
        assert_eq!(level.value(), 3);
        assert_eq!(host.value(), "localhost");
        assert_eq!(registry.len(), 3);
    }

    #[cfg(feature = "bridge")]
    #[test]
    fn test_find_by_path() {
        let mut registry = TweakRegistry::new();
        let path = TweakPath::new("Core", "Network", "Timeout");
        registry.declare_double(Some(path.clone()), 1.5);

        let found = registry.find(&path).expect("declared tweak");
        match found {
            TweakDef::Double(tweak) => assert_eq!(tweak.default_value(), 1.5),
            other => panic!("unexpected tweak kind: {:?}", other),
        }

        assert!(
            registry
                .find(&TweakPath::new("Core", "Network", "Retries"))
                .is_none()
        );
    }

    #[test]
    fn test_unplaced_tweak_still_reads() {
        let mut registry = TweakRegistry::new();
        let hidden = registry.declare_bool(None, true);

        assert!(hidden.value());
        assert!(hidden.path().is_none());
        assert!(registry.iter().next().expect("declared").path().is_none());
    }

    #[cfg(feature = "bridge")]
    #[test]
    fn test_paths_are_kept_when_bridged() {
        let mut registry = TweakRegistry::new();
        let tweak = registry.declare_bool(Some(TweakPath::new("A", "B", "C")), false);
        assert_eq!(tweak.path(), Some(&TweakPath::new("A", "B", "C")));
    }

    #[cfg(not(feature = "bridge"))]
    #[test]
    fn test_paths_are_dropped_without_bridge() {
        let mut registry = TweakRegistry::new();
        let tweak = registry.declare_bool(Some(TweakPath::new("A", "B", "C")), false);
        assert!(tweak.path().is_none());
        assert!(!tweak.value());
    }
}
