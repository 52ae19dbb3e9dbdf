use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_FOLDER_NAME: &str = "Sunlyt";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StudentProfile {
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub class_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UiSettings {
    #[serde(default)]
    pub last_theme: Option<String>,
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
}

/// Persisted app configuration. Workspace state (hint, draft, submission)
/// deliberately never lands here; every run starts the practice area fresh.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    pub version: String,
    pub base_path: String,
    pub mode: String,
    #[serde(default)]
    pub student: StudentProfile,
    #[serde(default)]
    pub ui: UiSettings,
}

pub fn default_base_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    if let Some(dir) = exe_dir {
        return dir.join("data");
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_FOLDER_NAME)
}

pub fn ensure_base_folders(base: &Path) -> io::Result<()> {
    let dirs = [base.to_path_buf(), base.join("config"), base.join("themes")];

    for d in dirs {
        if !d.exists() {
            fs::create_dir_all(&d)?;
        }
    }

    Ok(())
}

pub fn settings_path(base: &Path) -> PathBuf {
    base.join("config").join("settings.json")
}

pub fn load_or_init_settings(base: &Path) -> io::Result<Settings> {
    let config_path = settings_path(base);

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("JSON parse error: {e}")))?;

        // Keep base_path in sync when launched with a different --base-path
        if settings.base_path != base.to_string_lossy() {
            settings.base_path = base.to_string_lossy().to_string();
        }
        return Ok(settings);
    }

    let settings = Settings {
        version: "0.1.0".to_string(),
        base_path: base.to_string_lossy().to_string(),
        mode: "gui".to_string(),
        student: StudentProfile {
            student_name: "Student Name".to_string(),
            class_id: "algebra-ii".to_string(),
        },
        ui: UiSettings::default(),
    };

    let json = serde_json::to_string_pretty(&settings)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("JSON encode error: {e}")))?;
    fs::write(&config_path, json)?;

    Ok(settings)
}

pub fn save_settings(settings: &Settings, base: &Path) -> io::Result<()> {
    let config_path = settings_path(base);
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("JSON encode error: {e}")))?;
    fs::write(&config_path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sunlyt-test-{tag}-{}", std::process::id()))
    }

    #[test]
    fn init_writes_defaults_and_reload_round_trips() {
        let base = temp_base("settings");
        ensure_base_folders(&base).unwrap();

        let created = load_or_init_settings(&base).unwrap();
        assert_eq!(created.mode, "gui");
        assert!(settings_path(&base).exists());

        let mut edited = created.clone();
        edited.ui.last_theme = Some("chalkboard_dark".to_string());
        save_settings(&edited, &base).unwrap();

        let reloaded = load_or_init_settings(&base).unwrap();
        assert_eq!(reloaded.ui.last_theme.as_deref(), Some("chalkboard_dark"));

        fs::remove_dir_all(&base).ok();
    }
}
