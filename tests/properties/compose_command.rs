//! Property tests for compose command tokenisation.

use std::ffi::OsString;
use std::path::Path;

use proptest::prelude::*;

use doxy::ComposeCommand;

fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._/-]{1,12}").unwrap()
}

fn separator() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ \t]{1,3}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: tokens survive arbitrary whitespace and lead the argv.
    #[test]
    fn property_tokens_then_file_then_args(
        tokens in proptest::collection::vec(token(), 1..4),
        seps in proptest::collection::vec(separator(), 4),
        args in proptest::collection::vec(token(), 0..4),
    ) {
        let mut raw = seps[0].clone();
        for (i, t) in tokens.iter().enumerate() {
            raw.push_str(t);
            raw.push_str(&seps[(i + 1) % seps.len()]);
        }

        let command = ComposeCommand::parse(&raw).unwrap();
        prop_assert_eq!(command.tokens(), tokens.as_slice());
        prop_assert_eq!(command.program(), tokens[0].as_str());

        let descriptor = Path::new("/srv/svc/docker-compose.yml");
        let argv = command.argv(descriptor, &args);
        let mut expected: Vec<OsString> = tokens.iter().map(OsString::from).collect();
        expected.push("-f".into());
        expected.push("/srv/svc/docker-compose.yml".into());
        expected.extend(args.iter().map(OsString::from));
        prop_assert_eq!(argv, expected);
    }

    /// PROPERTY: whitespace-only commands are rejected.
    #[test]
    fn property_blank_command_rejected(blank in "[ \t\n]{0,8}") {
        prop_assert!(ComposeCommand::parse(&blank).is_err());
    }
}
