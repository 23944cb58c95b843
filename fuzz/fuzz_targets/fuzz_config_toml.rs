#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and validating a config must never panic
        if let Ok(config) = toml::from_str::<scengen::GeneratorConfig>(content) {
            if config.validate().is_ok() {
                // A config that validates must render its first and last ids
                for index in [1, config.scenario_count.max(1)] {
                    let id = config.scenario_id(index);
                    let _ = config.output_path(&id, config.templates[0].suffix);
                    let _ = scengen::render("SCN_001", &config.substitutions, &id);
                }
            }
        }
    }
});
