/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    // Load configuration from rune.toml
    let config = rune_config::EffectsConfig::load();

    println!("=== Rune Effects Configuration ===\n");

    println!("Bootstrap Settings:");
    println!("  Poll Interval (ms): {}", config.bootstrap.poll_interval_ms);
    println!("  Max Wait (ms): {:?}", config.bootstrap.max_wait_ms);
    println!();

    println!("Effect Toggles:");
    println!("  Fade Up: {}", config.effects.fade_up);
    println!("  Stagger: {}", config.effects.stagger);
    println!("  Parallax: {}", config.effects.parallax);
    println!("  Scale In: {}", config.effects.scale_in);
    println!("  Reveal: {}", config.effects.reveal);
    println!("  Hero: {}", config.effects.hero);
    println!("  Counters: {}", config.effects.counters);
    println!();

    // Try to serialize to TOML for verification
    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
