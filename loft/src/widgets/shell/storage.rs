use std::path::{Path, PathBuf};

use super::errors::ShellStorageError;
use super::model::ShellSettings;

/// Return the path to the shell settings JSON file.
fn shell_settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("loft")
            .join("shell.json");
    }
    std::env::temp_dir().join("loft").join("shell.json")
}

/// Load shell settings from disk.
pub(crate) fn load_shell_settings()
-> Result<ShellSettings, ShellStorageError> {
    let path = shell_settings_path();
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ShellSettings::default());
        },
        Err(err) => return Err(err.into()),
    };
    let settings: ShellSettings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Save shell settings to disk atomically.
pub(crate) fn save_shell_settings(
    settings: &ShellSettings,
) -> Result<(), ShellStorageError> {
    let path = shell_settings_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let payload = serde_json::to_string_pretty(settings)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, payload.as_bytes())?;
    std::fs::rename(tmp_path, path)?;
    Ok(())
}

/// Load initial settings from disk, falling back to defaults on error.
pub(crate) fn load_initial_shell_settings() -> ShellSettings {
    match load_shell_settings() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Failed to load shell settings, using defaults: {err}");
            ShellSettings::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::widgets::shell::model::{Route, ShellSettings};

    #[test]
    fn given_valid_json_when_deserialized_then_structure_is_correct() {
        let payload = r#"{ "last_route": "Today" }"#;
        let settings: ShellSettings =
            serde_json::from_str(payload).expect("settings should parse");
        assert_eq!(settings.last_route, Route::Today);
    }

    #[test]
    fn given_settings_when_serialized_then_they_round_trip() {
        let settings = ShellSettings {
            last_route: Route::ProjectAtlas,
        };
        let payload = serde_json::to_string(&settings)
            .expect("settings should serialize");
        let parsed: ShellSettings =
            serde_json::from_str(&payload).expect("settings should parse");
        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_garbage_json_when_deserialized_then_an_error_is_returned() {
        let result =
            serde_json::from_str::<ShellSettings>(r#"{ "last_route": 7 }"#);
        assert!(result.is_err());
    }
}
