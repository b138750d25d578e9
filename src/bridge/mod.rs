//! UI Bridge
//!
//! Everything facing the external tweaks UI: the sink trait the registrar
//! forwards into, the registrar itself, and a serializable export of the
//! registered surface.

pub mod export;
pub mod registrar;
pub mod sink;

pub use export::{TweakExport, TweakKind, export_registry};
pub use registrar::register_all;
pub use sink::{
    ActionRegistration, LogSink, RecordingSink, TweakSink, ValueRegistration, ValueSetter,
};
