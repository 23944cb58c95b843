//! Property tests for scenario id formatting.

use proptest::prelude::*;

use scengen::{ConditionSuffix, ScenarioId};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The numeric part is zero-padded to the width and parses back
    /// to the index.
    #[test]
    fn property_scenario_id_pads_and_round_trips(
        prefix in "[A-Z]{1,4}_",
        width in 0usize..6,
        index in 0u32..100_000,
    ) {
        let id = ScenarioId::new(&prefix, width, index);
        let digits = id.as_str().strip_prefix(prefix.as_str()).unwrap();

        prop_assert!(digits.len() >= width);
        prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(digits.parse::<u32>().unwrap(), index);
        prop_assert_eq!(id.index(), index);
    }

    /// PROPERTY: Ids of the same width sort in index order.
    #[test]
    fn property_scenario_ids_sort_by_index(a in 1u32..1000, b in 1u32..1000) {
        let ida = ScenarioId::new("SCN_", 3, a);
        let idb = ScenarioId::new("SCN_", 3, b);

        prop_assert_eq!(ida.as_str().cmp(idb.as_str()), a.cmp(&b));
    }

    /// PROPERTY: File names are `<id>_<suffix>.<ext>`.
    #[test]
    fn property_file_name_shape(index in 1u32..1000, ext in "[a-z]{1,5}") {
        let id = ScenarioId::new("SCN_", 3, index);
        for suffix in ConditionSuffix::ALL {
            let name = id.file_name(suffix, &ext);
            prop_assert_eq!(name, format!("{}_{}.{}", id, suffix, ext));
        }
    }
}
