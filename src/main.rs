use std::sync::Arc;

use anyhow::{Result, bail};

use tweak_registry::bridge::{self, RecordingSink};
use tweak_registry::config::Config;
use tweak_registry::overrides;
use tweak_registry::tweak::{
    ActionTweak, BoolTweak, DoubleTweak, EnumChoice, EnumTweak, IntTweak, StringTweak, TweakPath,
    TweakRegistry,
};

/// Handles kept by the demo for reads, the way application modules would keep
/// theirs.
struct DemoTweaks {
    mock_devices: BoolTweak,
    api_host: StringTweak,
    retry_count: IntTweak,
    animation_speed: DoubleTweak,
    color_scheme: EnumTweak,
    clear_caches: ActionTweak,
    /// Declared without a path: readable but never registered.
    experimental: BoolTweak,
}

fn declare_demo_tweaks(registry: &mut TweakRegistry) -> DemoTweaks {
    DemoTweaks {
        mock_devices: registry.declare_bool(
            Some(TweakPath::new("Core", "Misc", "Always mock devices")),
            false,
        ),
        api_host: registry.declare_string(
            Some(TweakPath::new("Core", "Network", "API host")),
            "api.example.com",
        ),
        retry_count: registry.declare_int(Some(TweakPath::new("Core", "Network", "Retries")), 3),
        animation_speed: registry.declare_double(
            Some(TweakPath::new("UI", "Animations", "Speed factor")),
            1.0,
        ),
        color_scheme: registry.declare_choice(
            Some(TweakPath::new("UI", "Appearance", "Color scheme")),
            "system",
            vec![
                EnumChoice::new("system", "Follow system"),
                EnumChoice::new("light", "Light"),
                EnumChoice::new("dark", "Dark"),
            ],
        ),
        clear_caches: registry.declare_action(
            Some(TweakPath::new("Core", "Cache", "Clear caches")),
            Some(Arc::new(|| log::info!("caches cleared"))),
        ),
        experimental: registry.declare_bool(None, false),
    }
}

fn print_values(tweaks: &DemoTweaks) {
    println!("Always mock devices: {}", tweaks.mock_devices.value());
    println!("API host:            {}", tweaks.api_host.value());
    println!("Retries:             {}", tweaks.retry_count.value());
    println!("Speed factor:        {}", tweaks.animation_speed.value());
    println!("Color scheme:        {}", tweaks.color_scheme.value());
    println!(
        "Clear caches:        {}",
        if tweaks.clear_caches.has_callback() {
            "available"
        } else {
            "no-op"
        }
    );
    println!("Experimental:        {}", tweaks.experimental.value());
}

fn main() -> Result<()> {
    // Parse configuration from command line and environment
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let mut registry = TweakRegistry::new();
    let tweaks = declare_demo_tweaks(&mut registry);

    let mut sink = RecordingSink::new();
    bridge::register_all(&registry, &mut sink);
    log::info!(
        "{} of {} declared tweaks registered",
        sink.len(),
        registry.len()
    );

    if let Some(path) = &config.overrides_path {
        match overrides::load_overrides(path) {
            Ok(file) => {
                let applied = overrides::apply_overrides(&file, &sink);
                log::info!("applied {} overrides from {}", applied, path.display());
            }
            Err(e) => log::warn!("overrides not applied: {:#}", e),
        }
    }

    if config.export_json {
        let exports = bridge::export_registry(&registry);
        println!("{}", serde_json::to_string_pretty(&exports)?);
        return Ok(());
    }

    print_values(&tweaks);

    if config.watch {
        let Some(path) = &config.overrides_path else {
            bail!("--watch needs an overrides file (pass --overrides)");
        };
        overrides::watch_overrides(path, &sink)?;
    }

    Ok(())
}
