//! Value Overrides
//!
//! TOML file of tweak values pushed through the registered setters, standing
//! in for the external side in setups without a tweaks UI wired up. This
//! seeds live values at startup; it does not persist anything back.

use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::Deserialize;

use crate::bridge::RecordingSink;
use crate::tweak::{TweakPath, TweakValue};

/// Root overrides file structure (matches TOML).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OverridesFile {
    #[serde(default)]
    pub tweak: Vec<OverrideEntry>,
}

/// One `[[tweak]]` entry: a placement plus the value to push.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OverrideEntry {
    pub category: String,
    pub subcategory: String,
    pub name: String,
    pub value: TweakValue,
}

impl OverrideEntry {
    pub fn path(&self) -> TweakPath {
        TweakPath::new(
            self.category.clone(),
            self.subcategory.clone(),
            self.name.clone(),
        )
    }
}

/// Load an overrides file from disk.
pub fn load_overrides(path: &Path) -> Result<OverridesFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading overrides file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing overrides file {}", path.display()))
}

/// Push every entry through the matching registered setter. Entries without a
/// registered tweak are logged and skipped. Returns the applied count.
pub fn apply_overrides(overrides: &OverridesFile, sink: &RecordingSink) -> usize {
    let mut applied = 0;

    for entry in &overrides.tweak {
        let path = entry.path();
        if sink.set(&path, entry.value.clone()) {
            log::debug!("override applied: {} = {}", path, entry.value);
            applied += 1;
        } else {
            log::warn!("no registered tweak at {}, override skipped", path);
        }
    }

    applied
}

/// Blocking watch loop: reloads and re-applies the overrides file whenever it
/// changes. Runs until the process exits; reload and watcher errors are
/// logged and watching continues.
pub fn watch_overrides(path: &Path, sink: &RecordingSink) -> Result<()> {
    let (tx, rx) = mpsc::channel();

    let mut watcher = RecommendedWatcher::new(
        move |res: std::result::Result<Event, notify::Error>| {
            let _ = tx.send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(1)),
    )?;

    // Watch the containing directory; editors replace files rather than
    // modify them in place.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    watcher.watch(dir, RecursiveMode::NonRecursive)?;

    log::info!("watching {} for value changes", path.display());

    for res in rx {
        match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                    continue;
                }
                let ours = event
                    .paths
                    .iter()
                    .any(|changed| changed.file_name() == path.file_name());
                if !ours {
                    continue;
                }

                match load_overrides(path) {
                    Ok(overrides) => {
                        let applied = apply_overrides(&overrides, sink);
                        log::info!("overrides reloaded, {} applied", applied);
                    }
                    Err(e) => log::warn!("overrides reload failed: {:#}", e),
                }
            }
            Err(e) => log::warn!("overrides watcher error: {}", e),
        }
    }

    Ok(())
}
