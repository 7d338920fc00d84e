//! Property-based tests for analyzer configuration
//!
//! Tests invariants that should hold for ALL possible inputs:
//! - Roundtrip: from_yaml_str(to_yaml(x)) == x
//! - Validity: every depth inside the bound validates, everything outside fails
//! - Rejection: blank target fields and duplicate builder types never validate

use privsec_ir::config::*;
use privsec_ir::shared::constants::resolution::{MAX_DEPTH, MIN_DEPTH};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_array_order() -> impl Strategy<Value = ArrayOrder> {
    prop_oneof![Just(ArrayOrder::Index), Just(ArrayOrder::UseSite)]
}

fn arb_config() -> impl Strategy<Value = AnalyzerConfig> {
    (
        MIN_DEPTH..=MAX_DEPTH,
        arb_array_order(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(depth, order, include_structure, parallel)| AnalyzerConfig {
            resolver: ResolverConfig::default().max_depth(depth).array_order(order),
            graph: GraphConfig {
                include_structure,
                parallel,
            },
            ..AnalyzerConfig::default()
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_valid_depth_always_validates(depth in MIN_DEPTH..=MAX_DEPTH) {
        let mut config = AnalyzerConfig::default();
        config.resolver.max_depth = depth;

        prop_assert!(config.validate().is_ok());
    }

    #[test]
    fn prop_depth_out_of_range_is_range_error(
        depth in prop_oneof![Just(0usize), (MAX_DEPTH + 1)..=(MAX_DEPTH * 4)]
    ) {
        let mut config = AnalyzerConfig::default();
        config.resolver.max_depth = depth;

        let err = config.validate().unwrap_err();
        prop_assert!(matches!(err, ConfigError::Range { .. }), "got {}", err);
    }

    #[test]
    fn prop_yaml_roundtrip(config in arb_config()) {
        let yaml = config.to_yaml().unwrap();
        let back = AnalyzerConfig::from_yaml_str(&yaml).unwrap();

        prop_assert_eq!(back, config);
    }

    #[test]
    fn prop_blank_target_field_rejected(field in 0usize..6, blank in "[ \t]{0,4}") {
        let mut config = AnalyzerConfig::default();
        let target = &mut config.target;
        match field {
            0 => target.package_prefix = blank,
            1 => target.entry_point_class = blank,
            2 => target.listener_signature = blank,
            3 => target.stream_type = blank,
            4 => target.stream_marker = blank,
            _ => target.opening_setter = blank,
        }

        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn prop_duplicate_builder_rejected(index in 0usize..5) {
        let mut config = AnalyzerConfig::default();
        let builders = &mut config.target.event_builders;
        let duplicate = builders[index % builders.len()].clone();
        builders.push(duplicate);

        prop_assert!(config.validate().is_err());
    }
}

#[test]
fn test_validation_is_idempotent() {
    let config = AnalyzerConfig::default();

    assert!(config.validate().is_ok());
    assert!(config.validate().is_ok());
}
