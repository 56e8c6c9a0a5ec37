use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
}

impl Settings {
    pub fn base_url(&self, requested: Option<&str>, source: &str) -> AppResult<String> {
        requested
            .or(self.base_url.as_deref())
            .map(ToOwned::to_owned)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "missing nightscout base url; pass it as the first argument or set `base_url` in {source}"
                ))
            })
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("nightscout-openaps-missing/settings.json");
        let settings = load(path).expect("missing file is not an error");
        assert!(settings.base_url.is_none());
        assert!(settings.profile.is_none());
    }

    #[test]
    fn loads_settings_and_ignores_unknown_keys() {
        let dir = std::env::temp_dir().join(format!("nightscout-openaps-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("settings.json");
        fs::write(
            &path,
            r#"{"base_url":"https://ns.example","profile":"Night","extra":true}"#,
        )
        .expect("write settings");

        let settings = load(path).expect("settings should parse");
        assert_eq!(settings.base_url.as_deref(), Some("https://ns.example"));
        assert_eq!(settings.profile.as_deref(), Some("Night"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn argument_url_overrides_settings() {
        let settings = Settings {
            base_url: Some("https://configured.example".to_string()),
            profile: None,
        };
        let url = settings
            .base_url(Some("https://arg.example"), "settings.json")
            .expect("url resolves");
        assert_eq!(url, "https://arg.example");
    }

    #[test]
    fn configured_url_fills_in_missing_argument() {
        let settings = Settings {
            base_url: Some("https://configured.example".to_string()),
            profile: None,
        };
        let url = settings
            .base_url(None, "settings.json")
            .expect("url resolves");
        assert_eq!(url, "https://configured.example");
    }

    #[test]
    fn malformed_settings_file_is_json_error() {
        let dir = std::env::temp_dir().join(format!(
            "nightscout-openaps-malformed-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("settings.json");
        fs::write(&path, "{not json").expect("write settings");

        let result = load(path);
        let _ = fs::remove_dir_all(dir);

        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn missing_url_is_usage_error() {
        let error = Settings::default()
            .base_url(None, "settings.json")
            .expect_err("no url anywhere");
        match error {
            AppError::InvalidInput(message) => assert!(message.contains("base url")),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }
}
