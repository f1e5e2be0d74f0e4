//! Property tests for service discovery.

use std::collections::BTreeSet;
use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use doxy::infrastructure::{find_all_services, find_disabled_services, find_services};

fn service_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,11}").unwrap()
}

/// Descriptor file name for (enabled, use_yaml)
fn descriptor(enabled: bool, yaml: bool) -> String {
    let base = if yaml {
        "docker-compose.yaml"
    } else {
        "docker-compose.yml"
    };
    if enabled {
        base.to_string()
    } else {
        format!("{}.disabled", base)
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the enabled and disabled scans partition the services exactly.
    #[test]
    fn property_scans_partition_services(
        services in proptest::collection::btree_map(service_name(), (any::<bool>(), any::<bool>()), 0..8),
        stray_dirs in proptest::collection::btree_set(service_name(), 0..3),
    ) {
        let root = tempdir().unwrap();
        for (name, (enabled, yaml)) in &services {
            let dir = root.path().join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(descriptor(*enabled, *yaml)), "services: {}\n").unwrap();
        }
        for name in stray_dirs.iter().filter(|n| !services.contains_key(*n)) {
            fs::create_dir_all(root.path().join(name)).unwrap();
        }

        let expected_enabled: BTreeSet<String> = services
            .iter()
            .filter(|(_, (enabled, _))| *enabled)
            .map(|(name, _)| name.clone())
            .collect();
        let expected_disabled: BTreeSet<String> = services
            .iter()
            .filter(|(_, (enabled, _))| !*enabled)
            .map(|(name, _)| name.clone())
            .collect();

        let enabled: Vec<String> = find_services(root.path(), false)
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        let disabled: Vec<String> = find_disabled_services(root.path(), false)
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();

        prop_assert_eq!(enabled.iter().cloned().collect::<BTreeSet<_>>(), expected_enabled);
        prop_assert_eq!(disabled.iter().cloned().collect::<BTreeSet<_>>(), expected_disabled);

        // Sorted, and no directory reported twice.
        let mut sorted = enabled.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&sorted, &enabled);

        let all = find_all_services(root.path(), false).unwrap();
        prop_assert_eq!(all.len(), services.len());
        prop_assert!(all.iter().all(|s| s.sub_services().is_none()));
    }
}
