//! Property tests for config parsing.

use proptest::prelude::*;

use scengen::GeneratorConfig;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary input never panics.
    #[test]
    fn property_config_parse_never_panics(input in ".{0,300}") {
        let _ = toml::from_str::<GeneratorConfig>(&input);
    }

    /// PROPERTY: Any count written to TOML is what the config reports.
    #[test]
    fn property_scenario_count_is_honored(count in 0u32..500) {
        let config: GeneratorConfig =
            toml::from_str(&format!("scenario_count = {count}\n")).unwrap();

        prop_assert_eq!(config.scenario_count, count);
        prop_assert_eq!(config.scenario_ids().count(), count as usize);
        prop_assert_eq!(config.expected_file_count(), count as usize * 3);
    }
}
