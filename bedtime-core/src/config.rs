use anyhow::{Context, Result, bail};
use directories::BaseDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::daily_note::{DEFAULT_DATE_FORMAT, DailyNoteConvention};
use crate::sexagesimal::{clamp_to_valid_minutes, encode};

/// 04:00
pub const DEFAULT_CUTOFF_MINUTES: u32 = 4 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where the notes tree lives.
    pub notes_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Daily-note folder (relative to `notes_dir`) and file name date format.
    pub convention: DailyNoteConvention,
    /// Times up to this many minutes after midnight still count as the previous day.
    /// Always within `0..=1439`; change it through [`Config::set_cutoff`].
    pub cutoff_minutes: u32,
    /// Ask before creating today's note when it doesn't exist yet.
    pub confirm_before_create: bool,
    /// Where the settings came from, and so where [`Config::save`] may write.
    pub source: SettingsFile,
}

/// The settings file behind a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsFile {
    /// No file exists yet; saving creates the XDG one.
    Missing,
    Loaded(PathBuf),
    /// The file exists but couldn't be read or parsed. Saving over it would
    /// throw away whatever the user wrote, so [`Config::save`] refuses.
    Invalid(PathBuf),
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct FileConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    notes_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    editor: Option<String>,
    /// Daily-note folder, e.g. "Daily". Empty means the notes root.
    #[serde(skip_serializing_if = "Option::is_none")]
    folder: Option<String>,
    /// chrono strftime pattern, e.g. "%Y-%m-%d".
    #[serde(skip_serializing_if = "Option::is_none")]
    date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minutes_after_midnight_cutoff: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm_before_creating_nonexistent_daily_note: Option<bool>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_paths())
    }

    /// Loads the first existing file of `candidates`. An unreadable file is
    /// reported and replaced by defaults, but remembered as invalid.
    fn load_from(candidates: &[PathBuf]) -> Result<Self> {
        let (file_config, source) = Self::read_file_config(candidates);
        Self::from_file_config(file_config, source)
    }

    fn from_file_config(file_config: FileConfig, source: SettingsFile) -> Result<Self> {
        let cutoff_minutes = match file_config.minutes_after_midnight_cutoff {
            Some(raw) => {
                let clamped = clamp_to_valid_minutes(raw);
                if i64::from(clamped) != raw {
                    warn!("cutoff of {raw} minutes is out of range, using {}", encode(clamped));
                }
                clamped
            }
            None => DEFAULT_CUTOFF_MINUTES,
        };

        let convention = DailyNoteConvention::new(
            file_config.folder.unwrap_or_default(),
            file_config
                .date_format
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
        )
        .context("reading daily note settings")?;

        let notes_dir = file_config
            .notes_dir
            .unwrap_or_else(Self::default_notes_dir);

        Ok(Self {
            notes_dir,
            editor: file_config.editor,
            convention,
            cutoff_minutes,
            confirm_before_create: file_config
                .confirm_before_creating_nonexistent_daily_note
                .unwrap_or(true),
            source,
        })
    }

    /// Default notes root: `{data_dir}/bedtime`
    /// - macOS:   `~/Library/Application Support/bedtime`
    /// - Linux:   `$XDG_DATA_HOME/bedtime` or `~/.local/share/bedtime`
    /// - Windows: `%APPDATA%\bedtime`
    fn default_notes_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("bedtime")
        } else {
            PathBuf::from("./bedtime")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("bedtime")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("bedtime").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config(candidates: &[PathBuf]) -> (FileConfig, SettingsFile) {
        let Some(path) = candidates.iter().find(|p| p.exists()) else {
            return (FileConfig::default(), SettingsFile::Missing);
        };
        match Self::read_file(path) {
            Ok(fc) => {
                debug!("loaded settings from {}", path.display());
                (fc, SettingsFile::Loaded(path.clone()))
            }
            Err(e) => {
                warn!("ignoring unreadable config: {e:#}");
                (FileConfig::default(), SettingsFile::Invalid(path.clone()))
            }
        }
    }

    fn read_file(path: &Path) -> Result<FileConfig> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Sets the cutoff, clamped to `00:00..=23:59`.
    pub fn set_cutoff(&mut self, minutes: i64) {
        self.cutoff_minutes = clamp_to_valid_minutes(minutes);
    }

    /// Writes the settings back to where they came from, or to the XDG path
    /// when there was no file. Returns the file written.
    ///
    /// Fails without touching anything if the settings file is invalid.
    pub fn save(&self) -> Result<PathBuf> {
        let path = match &self.source {
            SettingsFile::Loaded(p) => p.clone(),
            SettingsFile::Invalid(p) => {
                bail!("settings file {} is invalid, not overwriting it", p.display())
            }
            SettingsFile::Missing => Self::config_file_paths()
                .into_iter()
                .next()
                .context("no home directory to save settings in")?,
        };
        self.save_to(&path)?;
        Ok(path)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config dir {}", parent.display()))?;
        }
        let s = toml::to_string_pretty(&self.to_file_config()).context("serializing settings")?;
        fs::write(path, s).with_context(|| format!("writing {}", path.display()))?;
        debug!("saved settings to {}", path.display());
        Ok(())
    }

    fn to_file_config(&self) -> FileConfig {
        FileConfig {
            notes_dir: Some(self.notes_dir.clone()),
            editor: self.editor.clone(),
            folder: Some(self.convention.folder().to_string()),
            date_format: Some(self.convention.format().to_string()),
            minutes_after_midnight_cutoff: Some(i64::from(self.cutoff_minutes)),
            confirm_before_creating_nonexistent_daily_note: Some(self.confirm_before_create),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::mk_config;
    use tempfile::tempdir;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("bedtime")
                .join("config.toml");
            let expected_native = b.config_dir().join("bedtime").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.get(0), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_all_keys() {
        let toml = r#"
            notes_dir = "/tmp/my-notes"
            editor = "hx"
            folder = "Daily"
            date_format = "%d.%m.%Y"
            minutes_after_midnight_cutoff = 150
            confirm_before_creating_nonexistent_daily_note = false
        "#;
        let fc = Config::parse_file(toml).unwrap();
        assert_eq!(fc.notes_dir.as_deref(), Some(Path::new("/tmp/my-notes")));
        assert_eq!(fc.editor.as_deref(), Some("hx"));

        let config = Config::from_file_config(fc, SettingsFile::Missing).unwrap();
        assert_eq!(config.cutoff_minutes, 150);
        assert!(!config.confirm_before_create);
        assert_eq!(config.convention.folder(), "Daily");
        assert_eq!(config.convention.format(), "%d.%m.%Y");
    }

    #[test]
    fn missing_keys_use_defaults() {
        let fc = Config::parse_file("").unwrap();
        let config = Config::from_file_config(fc, SettingsFile::Missing).unwrap();
        assert_eq!(config.cutoff_minutes, DEFAULT_CUTOFF_MINUTES);
        assert!(config.confirm_before_create);
        assert_eq!(config.convention, DailyNoteConvention::default());
        assert!(config.editor.is_none());
    }

    #[test]
    fn out_of_range_cutoff_is_clamped() {
        let fc = Config::parse_file("minutes_after_midnight_cutoff = 5000").unwrap();
        assert_eq!(Config::from_file_config(fc, SettingsFile::Missing).unwrap().cutoff_minutes, 1439);

        let fc = Config::parse_file("minutes_after_midnight_cutoff = -10").unwrap();
        assert_eq!(Config::from_file_config(fc, SettingsFile::Missing).unwrap().cutoff_minutes, 0);
    }

    #[test]
    fn bad_date_format_is_an_error() {
        let fc = Config::parse_file(r#"date_format = "%Y-%Q""#).unwrap();
        assert!(Config::from_file_config(fc, SettingsFile::Missing).is_err());
    }

    #[test]
    fn set_cutoff_clamps() {
        let tmp = tempdir().unwrap();
        let mut config = mk_config(tmp.path().to_path_buf());
        config.set_cutoff(1500);
        assert_eq!(config.cutoff_minutes, 1439);
        config.set_cutoff(-1);
        assert_eq!(config.cutoff_minutes, 0);
        config.set_cutoff(90);
        assert_eq!(config.cutoff_minutes, 90);
    }

    #[test]
    fn saved_settings_read_back() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");
        let mut config = mk_config(tmp.path().join("notes"));
        config.set_cutoff(75);
        config.confirm_before_create = false;
        config.editor = Some("nano".into());
        config.save_to(&path).unwrap();

        let s = fs::read_to_string(&path).unwrap();
        let reread = Config::from_file_config(Config::parse_file(&s).unwrap(), SettingsFile::Loaded(path))
                .unwrap();
        assert_eq!(reread.cutoff_minutes, 75);
        assert!(!reread.confirm_before_create);
        assert_eq!(reread.editor.as_deref(), Some("nano"));
        assert_eq!(reread.notes_dir, tmp.path().join("notes"));
        assert_eq!(reread.convention, config.convention);
    }

    #[test]
    fn save_writes_to_source() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let mut config = mk_config(tmp.path().to_path_buf());
        config.source = SettingsFile::Loaded(path.clone());
        assert_eq!(config.save().unwrap(), path);
        assert!(path.exists());
    }

    #[test]
    fn load_picks_first_existing_file() {
        let tmp = tempdir().unwrap();
        let first = tmp.path().join("missing.toml");
        let second = tmp.path().join("config.toml");
        fs::write(&second, "minutes_after_midnight_cutoff = 30").unwrap();

        let config = Config::load_from(&[first, second.clone()]).unwrap();
        assert_eq!(config.cutoff_minutes, 30);
        assert_eq!(config.source, SettingsFile::Loaded(second));
    }

    #[test]
    fn no_file_loads_defaults() {
        let tmp = tempdir().unwrap();
        let config = Config::load_from(&[tmp.path().join("config.toml")]).unwrap();
        assert_eq!(config.source, SettingsFile::Missing);
        assert_eq!(config.cutoff_minutes, DEFAULT_CUTOFF_MINUTES);
    }

    #[test]
    fn broken_settings_file_is_never_overwritten() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let original = "notes_dir = \"/srv/notes\"\nfolder = \"Daily\"\neditor = hx\n";
        fs::write(&path, original).unwrap();

        let mut config = Config::load_from(&[path.clone()]).unwrap();
        assert_eq!(config.source, SettingsFile::Invalid(path.clone()));
        assert_eq!(config.cutoff_minutes, DEFAULT_CUTOFF_MINUTES);

        config.set_cutoff(300);
        let err = config.save().unwrap_err();
        assert!(err.to_string().contains("not overwriting"));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
