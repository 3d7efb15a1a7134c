//! Launch configuration read from the environment
//!
//! Every setting has a default, so an empty environment starts the bundled
//! demo session. Unreadable or malformed files are logged and replaced by the
//! demo data rather than aborting the launch.

use std::path::{Path, PathBuf};

use anyhow::Context;
use gmvoice_domain::{ChatMessage, GameSnapshot};

use crate::ui::{InitialSession, ShellKind};

pub const SNAPSHOT_PATH_VAR: &str = "GMVOICE_SNAPSHOT_PATH";
pub const TRANSCRIPT_PATH_VAR: &str = "GMVOICE_TRANSCRIPT_PATH";
pub const START_LABEL_VAR: &str = "GMVOICE_START_LABEL";
pub const SHELL_VAR: &str = "GMVOICE_SHELL";

pub const DEFAULT_START_LABEL: &str = "Start Adventure";

const DEMO_SNAPSHOT: &str = include_str!("../assets/demo_snapshot.json");
const DEMO_TRANSCRIPT: &str = include_str!("../assets/demo_transcript.json");

/// Settings for one launch of the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub snapshot_path: Option<PathBuf>,
    pub transcript_path: Option<PathBuf>,
    pub start_label: String,
    /// Explicit shell override; `None` lets the runner decide
    pub shell: Option<ShellKind>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            transcript_path: None,
            start_label: DEFAULT_START_LABEL.to_string(),
            shell: None,
        }
    }
}

impl PlayerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let shell = read(SHELL_VAR).and_then(|raw| {
            let parsed = ShellKind::parse(&raw);
            if parsed.is_none() {
                tracing::warn!(var = SHELL_VAR, value = %raw, "Unknown shell kind, ignoring");
            }
            parsed
        });

        Self {
            snapshot_path: read(SNAPSHOT_PATH_VAR).map(PathBuf::from),
            transcript_path: read(TRANSCRIPT_PATH_VAR).map(PathBuf::from),
            start_label: read(START_LABEL_VAR).unwrap_or_else(|| DEFAULT_START_LABEL.to_string()),
            shell,
        }
    }

    /// Snapshot from the configured file, or the bundled demo
    pub fn load_snapshot(&self) -> GameSnapshot {
        let loaded = match &self.snapshot_path {
            Some(path) => read_snapshot(path),
            None => demo_snapshot(),
        };
        loaded.unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{e:#}"), "Failed to load snapshot, using demo data");
            demo_snapshot().unwrap_or_default()
        })
    }

    /// Transcript from the configured file, or the bundled demo
    pub fn load_transcript(&self) -> Vec<ChatMessage> {
        let loaded = match &self.transcript_path {
            Some(path) => read_transcript(path),
            None => demo_transcript(),
        };
        loaded.unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{e:#}"), "Failed to load transcript, using demo data");
            demo_transcript().unwrap_or_default()
        })
    }

    pub fn initial_session(&self) -> InitialSession {
        InitialSession {
            snapshot: self.load_snapshot(),
            transcript: self.load_transcript(),
            start_label: self.start_label.clone(),
        }
    }
}

pub fn read_snapshot(path: &Path) -> anyhow::Result<GameSnapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    GameSnapshot::from_json(&text).with_context(|| format!("parsing snapshot {}", path.display()))
}

pub fn read_transcript(path: &Path) -> anyhow::Result<Vec<ChatMessage>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading transcript {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing transcript {}", path.display()))
}

pub fn demo_snapshot() -> anyhow::Result<GameSnapshot> {
    GameSnapshot::from_json(DEMO_SNAPSHOT).context("parsing bundled demo snapshot")
}

pub fn demo_transcript() -> anyhow::Result<Vec<ChatMessage>> {
    serde_json::from_str(DEMO_TRANSCRIPT).context("parsing bundled demo transcript")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    mod from_lookup_tests {
        use super::*;

        #[test]
        fn empty_environment_uses_defaults() {
            let config = PlayerConfig::from_lookup(|_| None);
            assert_eq!(config, PlayerConfig::default());
            assert_eq!(config.start_label, DEFAULT_START_LABEL);
        }

        #[test]
        fn reads_every_variable() {
            let config = PlayerConfig::from_lookup(lookup_from(&[
                (SNAPSHOT_PATH_VAR, "/tmp/snap.json"),
                (TRANSCRIPT_PATH_VAR, "/tmp/chat.json"),
                (START_LABEL_VAR, "Begin"),
                (SHELL_VAR, "MOBILE"),
            ]));
            assert_eq!(config.snapshot_path, Some(PathBuf::from("/tmp/snap.json")));
            assert_eq!(config.transcript_path, Some(PathBuf::from("/tmp/chat.json")));
            assert_eq!(config.start_label, "Begin");
            assert_eq!(config.shell, Some(ShellKind::Mobile));
        }

        #[test]
        fn blank_values_are_unset() {
            let config = PlayerConfig::from_lookup(lookup_from(&[
                (START_LABEL_VAR, "   "),
                (SNAPSHOT_PATH_VAR, ""),
            ]));
            assert_eq!(config.start_label, DEFAULT_START_LABEL);
            assert!(config.snapshot_path.is_none());
        }

        #[test]
        fn unknown_shell_is_ignored() {
            let config = PlayerConfig::from_lookup(lookup_from(&[(SHELL_VAR, "tablet")]));
            assert!(config.shell.is_none());
        }
    }

    mod loading_tests {
        use super::*;

        #[test]
        fn bundled_demo_data_parses() {
            let snapshot = demo_snapshot().unwrap();
            assert!(snapshot.player.is_some());
            assert_eq!(snapshot.current_location_or_default(), "dark_forest");
            assert!(!demo_transcript().unwrap().is_empty());
        }

        #[test]
        fn missing_file_falls_back_to_demo() {
            let config = PlayerConfig {
                snapshot_path: Some(PathBuf::from("/nonexistent/gmvoice/snapshot.json")),
                transcript_path: Some(PathBuf::from("/nonexistent/gmvoice/transcript.json")),
                ..PlayerConfig::default()
            };
            assert_eq!(config.load_snapshot(), demo_snapshot().unwrap());
            assert_eq!(config.load_transcript(), demo_transcript().unwrap());
        }

        #[test]
        fn read_snapshot_reports_the_path() {
            let err = read_snapshot(Path::new("/nonexistent/gmvoice/snapshot.json")).unwrap_err();
            assert!(format!("{err:#}").contains("/nonexistent/gmvoice/snapshot.json"));
        }

        #[test]
        fn initial_session_carries_the_label() {
            let config = PlayerConfig {
                start_label: "Roll Initiative".to_string(),
                ..PlayerConfig::default()
            };
            let session = config.initial_session();
            assert_eq!(session.start_label, "Roll Initiative");
            assert!(session.snapshot.npcs.is_some());
        }
    }
}
