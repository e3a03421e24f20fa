//! @acp:module "Configuration"
//! @acp:summary "Persisted setup record and preset answer files"
//! @acp:domain cli
//! @acp:layer config

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::answers::{Answers, PartialAnswers};
use crate::error::{Result, WizardError};
use crate::selection::SelectedComponents;

/// Location of the record, relative to the target directory
pub const RECORD_PATH: &str = ".claude/setup.json";

fn default_version() -> String {
    "1.0.0".to_string()
}

/// What a completed setup wrote, kept for the next run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupRecord {
    #[serde(default = "default_version")]
    pub version: String,

    pub generated_at: DateTime<Utc>,

    pub answers: Answers,

    #[serde(default)]
    pub components: SelectedComponents,
}

impl SetupRecord {
    pub fn new(answers: Answers, components: SelectedComponents) -> Self {
        Self {
            version: default_version(),
            generated_at: Utc::now(),
            answers,
            components,
        }
    }

    pub fn path_in(target: &Path) -> PathBuf {
        target.join(RECORD_PATH)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the record of an earlier setup in `target`, if any
    ///
    /// An unreadable record is logged and ignored.
    pub fn load_from(target: &Path) -> Option<Self> {
        let path = Self::path_in(target);
        if !path.exists() {
            return None;
        }
        match Self::load(&path) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable setup record");
                None
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content + "\n")?;
        Ok(())
    }
}

/// Read preset answers from a JSON or YAML file, chosen by extension
pub fn load_preset(path: &Path) -> Result<PartialAnswers> {
    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "json" => Ok(serde_json::from_str(&content)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
        other => Err(WizardError::UnknownValue {
            field: "preset file extension",
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{FrontendFramework, ProjectGoal};
    use crate::selection::fixtures::baseline;
    use crate::selection::map_answers_to_components;
    use tempfile::TempDir;

    #[test]
    fn test_record_round_trips_through_target() {
        let dir = TempDir::new().unwrap();
        let answers = baseline();
        let record = SetupRecord::new(answers.clone(), map_answers_to_components(&answers));
        record.save(SetupRecord::path_in(dir.path())).unwrap();

        let loaded = SetupRecord::load_from(dir.path()).unwrap();
        assert_eq!(loaded.answers, answers);
        assert_eq!(loaded.version, "1.0.0");
        assert_eq!(loaded.generated_at, record.generated_at);
    }

    #[test]
    fn test_corrupt_record_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = SetupRecord::path_in(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(SetupRecord::load_from(dir.path()).is_none());
    }

    #[test]
    fn test_yaml_preset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preset.yml");
        std::fs::write(&path, "projectName: shop\nprojectGoal: production\nfrontendFramework: vue\n")
            .unwrap();

        let preset = load_preset(&path).unwrap();
        assert_eq!(preset.project_name.as_deref(), Some("shop"));
        assert_eq!(preset.project_goal, Some(ProjectGoal::Production));
        assert_eq!(preset.frontend_framework, Some(FrontendFramework::Vue));
        assert_eq!(preset.database, None);
    }

    #[test]
    fn test_json_preset_rejects_unknown_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preset.json");
        std::fs::write(&path, r#"{"projectGoal": "hobby"}"#).unwrap();

        assert!(matches!(load_preset(&path), Err(WizardError::Json(_))));
    }

    #[test]
    fn test_unknown_preset_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preset.toml");
        std::fs::write(&path, "").unwrap();

        assert!(matches!(
            load_preset(&path),
            Err(WizardError::UnknownValue { .. })
        ));
    }
}
