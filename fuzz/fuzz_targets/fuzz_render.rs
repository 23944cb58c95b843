#![no_main]

use libfuzzer_sys::fuzz_target;
use scengen::{render, GeneratorConfig, ScenarioId};

fuzz_target!(|data: &[u8]| {
    let Some((&index, rest)) = data.split_first() else {
        return;
    };
    if let Ok(content) = std::str::from_utf8(rest) {
        let config = GeneratorConfig::default();
        let id = ScenarioId::new(&config.id_prefix, config.id_width, u32::from(index));
        let output = render(content, &config.substitutions, &id);
        assert!(!output.contains(scengen::config::DIRTY_PLACEHOLDER));
    }
});
