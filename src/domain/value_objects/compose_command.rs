//! Compose Command Value Object
//!
//! The configured compose executable, e.g. `docker compose` or
//! `docker-compose`, split into argument tokens.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::DoxyError;

/// Default invocation when nothing is configured
pub const DEFAULT_COMPOSE_COMMAND: &str = "docker compose";

/// Whitespace-separated compose executable tokens (never empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCommand {
    tokens: Vec<String>,
}

impl ComposeCommand {
    pub fn parse(value: &str) -> Result<Self, DoxyError> {
        let tokens: Vec<String> = value.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            return Err(DoxyError::InvalidComposeCommand {
                value: value.to_string(),
            });
        }
        Ok(Self { tokens })
    }

    /// First token, the program that gets spawned.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Full argument vector: `<tokens...> -f <descriptor> <args...>`.
    ///
    /// The descriptor path is passed through as raw OS bytes.
    pub fn argv<S: AsRef<str>>(&self, descriptor: &Path, args: &[S]) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.tokens.len() + 2 + args.len());
        argv.extend(self.tokens.iter().map(OsString::from));
        argv.push(OsString::from("-f"));
        argv.push(descriptor.as_os_str().to_os_string());
        argv.extend(args.iter().map(|a| OsString::from(a.as_ref())));
        argv
    }
}

impl Default for ComposeCommand {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_COMPOSE_COMMAND
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl FromStr for ComposeCommand {
    type Err = DoxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ComposeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_for_multi_token_command() {
        let cmd = ComposeCommand::parse("docker compose").unwrap();
        let argv = cmd.argv(Path::new("/root/svc/docker-compose.yml"), &["ps"]);
        assert_eq!(
            argv,
            vec!["docker", "compose", "-f", "/root/svc/docker-compose.yml", "ps"]
        );
    }

    #[test]
    fn argv_for_single_binary() {
        let cmd = ComposeCommand::parse("docker-compose").unwrap();
        let argv = cmd.argv(Path::new("/s/docker-compose.yaml"), &["up", "-d"]);
        assert_eq!(
            argv,
            vec!["docker-compose", "-f", "/s/docker-compose.yaml", "up", "-d"]
        );
        assert_eq!(cmd.program(), "docker-compose");
    }

    #[cfg(unix)]
    #[test]
    fn argv_keeps_non_utf8_descriptor_path() {
        use std::os::unix::ffi::OsStrExt;

        let raw = b"/srv/caf\xe9/docker-compose.yml";
        let descriptor = Path::new(std::ffi::OsStr::from_bytes(raw));
        let argv = ComposeCommand::default().argv(descriptor, &["ps"]);
        assert_eq!(argv[3].as_bytes(), raw);
        assert_eq!(argv[4], "ps");
    }

    #[test]
    fn extra_whitespace_is_collapsed() {
        let cmd = ComposeCommand::parse("  sudo\t docker   compose ").unwrap();
        assert_eq!(cmd.tokens(), &["sudo", "docker", "compose"]);
        assert_eq!(cmd.to_string(), "sudo docker compose");
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(matches!(
            ComposeCommand::parse("   "),
            Err(DoxyError::InvalidComposeCommand { .. })
        ));
    }

    #[test]
    fn default_is_docker_compose_plugin() {
        assert_eq!(ComposeCommand::default().tokens(), &["docker", "compose"]);
    }
}
