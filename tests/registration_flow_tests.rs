//! End-to-end registration flow: declare, register, edit through the sink.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tweak_registry::bridge::{self, RecordingSink};
use tweak_registry::tweak::{EnumChoice, TweakPath, TweakRegistry, TweakValue};

#[test]
fn test_values_default_until_edited() {
    let mut registry = TweakRegistry::new();
    let flag = registry.declare_bool(Some(TweakPath::new("Core", "Misc", "Flag")), true);
    let host = registry.declare_string(Some(TweakPath::new("Core", "Net", "Host")), "localhost");
    let retries = registry.declare_int(Some(TweakPath::new("Core", "Net", "Retries")), 3);
    let speed = registry.declare_double(Some(TweakPath::new("UI", "Anim", "Speed")), 1.0);

    // Before registration every read is the declared default.
    assert!(flag.is_on());
    assert_eq!(host.value(), "localhost");
    assert_eq!(retries.value(), 3);
    assert_eq!(speed.value(), 1.0);

    let mut sink = RecordingSink::new();
    bridge::register_all(&registry, &mut sink);

    // Still defaults: registration alone edits nothing.
    assert!(flag.is_on());
    assert_eq!(retries.value(), 3);

    // Edits arrive through the registered setters.
    assert!(sink.set(&TweakPath::new("Core", "Net", "Retries"), TweakValue::Int(7)));
    assert!(sink.set(
        &TweakPath::new("Core", "Net", "Host"),
        TweakValue::from("staging.example.com")
    ));
    assert_eq!(retries.value(), 7);
    assert_eq!(host.value(), "staging.example.com");

    // Defaults stay what they were constructed with.
    assert_eq!(retries.default_value(), 3);
    assert_eq!(host.default_value(), "localhost");
}

#[test]
fn test_unplaced_tweaks_never_reach_the_sink() {
    let mut registry = TweakRegistry::new();
    let hidden = registry.declare_int(None, 10);
    registry.declare_bool(Some(TweakPath::new("Core", "Misc", "Visible")), false);

    let mut sink = RecordingSink::new();
    bridge::register_all(&registry, &mut sink);

    assert_eq!(sink.len(), 1);
    assert_eq!(sink.values()[0].path.name, "Visible");
    assert_eq!(hidden.value(), 10);
}

#[test]
fn test_double_registration_is_idempotent() {
    let mut registry = TweakRegistry::new();
    let path = TweakPath::new("UI", "Appearance", "Color scheme");
    let scheme = registry.declare_choice(
        Some(path.clone()),
        "system",
        vec![
            EnumChoice::new("system", "Follow system"),
            EnumChoice::new("dark", "Dark"),
        ],
    );

    let mut sink = RecordingSink::new();
    bridge::register_all(&registry, &mut sink);
    bridge::register_all(&registry, &mut sink);

    assert_eq!(sink.values().len(), 2);
    let first = &sink.values()[0];
    let second = &sink.values()[1];
    assert_eq!(first.path, second.path);
    assert_eq!(first.default, second.default);
    assert_eq!(first.choices, second.choices);

    // Both rounds drive the same live value; the latest registration wins
    // lookups, matching a sink that replaces repeats.
    first.set(TweakValue::from("dark"));
    assert_eq!(scheme.value(), TweakValue::from("dark"));
    sink.set(&path, TweakValue::from("system"));
    assert_eq!(scheme.value(), TweakValue::from("system"));
}

#[test]
fn test_actions_flow_through_registration() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let mut registry = TweakRegistry::new();
    let path = TweakPath::new("Core", "Cache", "Clear caches");
    registry.declare_action(
        Some(path.clone()),
        Some(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })),
    );
    let silent = registry.declare_action(Some(TweakPath::new("Core", "Cache", "Noop")), None);

    let mut sink = RecordingSink::new();
    bridge::register_all(&registry, &mut sink);

    sink.action_by_path(&path)
        .expect("registered action")
        .action
        .invoke();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Missing callback: activation is a no-op, not an error.
    sink.action_by_path(&TweakPath::new("Core", "Cache", "Noop"))
        .expect("registered action")
        .action
        .invoke();
    assert!(!silent.has_callback());
}
