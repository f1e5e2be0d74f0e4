//! Property tests for enable/disable renames.

use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use doxy::infrastructure::{descriptor_path, disable, enable, exists, service_state};
use doxy::{DoxyError, ServiceState};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: enable(disable(S)) restores S byte for byte.
    #[test]
    fn property_toggle_round_trip_preserves_bytes(
        content in proptest::collection::vec(any::<u8>(), 0..512),
        yaml in any::<bool>(),
    ) {
        let dir = tempdir().unwrap();
        let name = if yaml { "docker-compose.yaml" } else { "docker-compose.yml" };
        let original = dir.path().join(name);
        fs::write(&original, &content).unwrap();

        let parked = disable(dir.path()).unwrap();
        prop_assert_eq!(service_state(dir.path()).unwrap(), ServiceState::Disabled);
        prop_assert!(!original.exists());
        prop_assert_eq!(fs::read(&parked).unwrap(), content.clone());

        // Disabling twice is an error, not a no-op.
        let twice = matches!(disable(dir.path()), Err(DoxyError::NotFound { .. }));
        prop_assert!(twice);

        let restored = enable(dir.path()).unwrap();
        prop_assert_eq!(&restored, &original);
        prop_assert_eq!(fs::read(&restored).unwrap(), content);
        prop_assert!(exists(dir.path()));
        prop_assert_eq!(descriptor_path(dir.path()).unwrap(), original);
    }
}
