#![cfg(unix)]

mod common;

use common::TestEnv;

#[test]
fn test_config_prints_defaults_with_env_overrides() {
    let env = TestEnv::new();

    let result = env.run(&["config"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.starts_with("# no config file found"));
    assert!(result.stdout.contains(&format!(
        "root_directory = \"{}\"",
        env.root.path().display()
    )));
    assert!(result
        .stdout
        .contains(&format!("compose_executable = \"{}\"", env.compose_executable())));
    assert!(result.stdout.contains("format = \"fancy\""));
    assert!(result.stdout.contains("log_lines = 10"));
}

#[test]
fn test_config_file_values_and_source() {
    let env = TestEnv::new();
    let path = env.write_config("[output]\nformat = \"simple\"\n[status]\nlog_lines = 42\n");

    let result = env.run(&["config"]);

    assert!(result.success);
    assert!(result
        .stdout
        .starts_with(&format!("# loaded from {}", path.display())));
    assert!(result.stdout.contains("format = \"simple\""));
    assert!(result.stdout.contains("log_lines = 42"));
}

#[test]
fn test_flags_beat_environment_and_file() {
    let env = TestEnv::new();
    env.write_config("[output]\nformat = \"simple\"\n");

    let result = env.run_with_env(
        &["config", "--format", "fancy", "--root", "/srv/flag"],
        &[("DOXY_FORMAT", "simple")],
    );

    assert!(result.stdout.contains("format = \"fancy\""));
    assert!(result.stdout.contains("root_directory = \"/srv/flag\""));
}

#[test]
fn test_explicit_config_path() {
    let env = TestEnv::new();
    let path = env.root_path("doxy.toml");
    std::fs::write(&path, "[status]\nlog_lines = 5\n").unwrap();

    let via_flag = env.run(&["config", "--config", path.to_str().unwrap()]);
    assert!(via_flag.stdout.contains("log_lines = 5"));

    let via_env = env.run_with_env(&["config"], &[("DOXY_CONFIG", path.to_str().unwrap())]);
    assert!(via_env.stdout.contains("log_lines = 5"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let env = TestEnv::new();

    let result = env.run(&["config", "--config", "/nonexistent/doxy.toml"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stderr
            .contains("config file not found: /nonexistent/doxy.toml"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(!result.stderr.contains("compose file"));
}

#[test]
fn test_error_output_follows_color_flag() {
    let env = TestEnv::new();

    let colored = env.run(&["--color", "always", "config", "--config", "/nonexistent/doxy.toml"]);
    assert_eq!(colored.exit_code, 1);
    assert!(colored.stderr.contains("\u{1b}["), "stderr:\n{}", colored.stderr);

    let plain = env.run(&["--color", "never", "config", "--config", "/nonexistent/doxy.toml"]);
    assert_eq!(plain.exit_code, 1);
    assert!(!plain.stderr.contains("\u{1b}["), "stderr:\n{}", plain.stderr);
}

#[test]
fn test_error_output_follows_configured_color() {
    let env = TestEnv::new();
    env.service("web", "docker-compose.yml");
    env.write_config("[output]\ncolor = \"always\"\n");

    let result = env.run(&["status", "nope"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("service 'nope' not found"));
    assert!(result.stderr.contains("\u{1b}["), "stderr:\n{}", result.stderr);
}

#[test]
fn test_unknown_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write_config("[output]\ncolour = \"never\"\n");

    let result = env.run(&["config"]);

    assert!(result.success);
    assert!(
        result.stderr.contains("unknown config key 'colour'"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'color'?"));
}

#[test]
fn test_malformed_config_fails() {
    let env = TestEnv::new();
    env.write_config("[output\n");

    let result = env.run(&["list"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid config"), "stderr:\n{}", result.stderr);
}
