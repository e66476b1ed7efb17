use std::env;
use std::fs;
use std::path::Path;

/// Keys read by `src/config.rs` through option_env!
const CONFIG_KEYS: [&str; 2] = ["API_BASE_URL", "LOG_LEVEL"];
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!(
            "cargo:warning=No .env found, API_BASE_URL and LOG_LEVEL use their defaults (see .env.example)"
        );
        return;
    };

    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=.env line {} is not KEY=VALUE", number + 1);
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env key {} is not used by the app", key);
            continue;
        }
        if key == "LOG_LEVEL" && !LOG_LEVELS.contains(&value.to_ascii_lowercase().as_str()) {
            println!("cargo:warning=LOG_LEVEL={} is not a log level, falling back to info", value);
        }

        // The build environment overrides .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
