//! Tweak Declarations
//!
//! Typed tweak variants and the explicit registry they are declared into.

pub mod registry;
pub mod schema;

pub use registry::{TweakDef, TweakRegistry};
pub use schema::{
    ActionTweak, BoolTweak, DoubleTweak, EnumChoice, EnumTweak, IntTweak, StringTweak, TweakAction,
    TweakPath, TweakValue,
};
