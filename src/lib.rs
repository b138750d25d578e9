//! Tweak Registry
//!
//! Declare tweakable runtime values (booleans, strings, numbers, enums,
//! actions) in application code and register them with an external
//! debug-tweaks UI.
//!
//! This library provides:
//! - Typed tweak declarations with live-read handles
//! - An explicit, ordered registry populated at startup
//! - A registrar forwarding declared tweaks into a pluggable sink
//! - TOML value overrides and a JSON export of the registered surface

#[cfg(feature = "bridge")]
pub mod bridge;
#[cfg(feature = "bridge")]
pub mod config;
#[cfg(feature = "bridge")]
pub mod overrides;
pub mod tweak;

// Re-exports for clean public API
#[cfg(feature = "bridge")]
pub use bridge::{RecordingSink, TweakSink, register_all};
#[cfg(feature = "bridge")]
pub use config::Config;
pub use tweak::{
    ActionTweak, BoolTweak, DoubleTweak, EnumChoice, EnumTweak, IntTweak, StringTweak, TweakDef,
    TweakPath, TweakRegistry, TweakValue,
};
