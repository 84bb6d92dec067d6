//! Persistent user settings: remembered login and theme.
//!
//! Settings live behind the [`SettingsBackend`] trait so the store can be
//! swapped for an in-memory one in tests. The real backend persists a small
//! JSON document to disk.

use std::io::Write;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bookhive_core::Email;

/// Errors from reading or writing the settings store.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("stored email is invalid: {0}")]
    InvalidEmail(#[from] bookhive_core::EmailError),
}

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme, for a toggle control.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid theme: {s} (expected light or dark)")),
        }
    }
}

/// Credentials saved by the "remember me" checkbox.
pub struct RememberedLogin {
    pub email: Email,
    pub password: SecretString,
}

impl std::fmt::Debug for RememberedLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RememberedLogin")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// On-disk shape of the settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSettings {
    #[serde(default)]
    theme: Theme,
    #[serde(default)]
    remembered_email: Option<String>,
    #[serde(default)]
    remembered_password: Option<String>,
}

/// Storage for the raw settings document.
pub trait SettingsBackend: Send + Sync {
    /// Read the stored document, or `None` if nothing was ever written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn read(&self) -> Result<Option<String>, SettingsError>;

    /// Overwrite the stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn write(&self, document: &str) -> Result<(), SettingsError>;

    /// Remove the stored document entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared.
    fn clear(&self) -> Result<(), SettingsError>;
}

/// In-memory backend for tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: std::sync::Mutex<Option<String>>,
}

impl SettingsBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, SettingsError> {
        Ok(self
            .document
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn write(&self, document: &str) -> Result<(), SettingsError> {
        *self
            .document
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(document.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), SettingsError> {
        *self
            .document
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}

/// File-backed settings store.
///
/// Writes go to a temporary file first and are renamed into place so a
/// crash mid-write never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsBackend for JsonFileBackend {
    fn read(&self) -> Result<Option<String>, SettingsError> {
        match std::fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SettingsError::Io(e)),
        }
    }

    fn write(&self, document: &str) -> Result<(), SettingsError> {
        let tmp = self.path.with_extension("tmp");
        {
            let mut file = std::fs::File::create(&tmp)?;
            file.write_all(document.as_bytes())?;
            file.sync_all()?;
        }
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SettingsError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SettingsError::Io(e)),
        }
    }
}

/// Typed settings over a [`SettingsBackend`].
pub struct Settings<B: SettingsBackend> {
    backend: B,
}

impl<B: SettingsBackend> Settings<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    fn load(&self) -> Result<StoredSettings, SettingsError> {
        match self.backend.read()? {
            Some(document) => Ok(serde_json::from_str(&document)?),
            None => Ok(StoredSettings::default()),
        }
    }

    fn store(&self, settings: &StoredSettings) -> Result<(), SettingsError> {
        self.backend.write(&serde_json::to_string(settings)?)
    }

    /// The saved theme, defaulting to light.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn theme(&self) -> Result<Theme, SettingsError> {
        Ok(self.load()?.theme)
    }

    /// Save the theme preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn set_theme(&self, theme: Theme) -> Result<(), SettingsError> {
        let mut settings = self.load()?;
        settings.theme = theme;
        self.store(&settings)
    }

    /// Save credentials for the login form to prefill.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn remember_login(&self, login: &RememberedLogin) -> Result<(), SettingsError> {
        let mut settings = self.load()?;
        settings.remembered_email = Some(login.email.as_str().to_owned());
        settings.remembered_password = Some(login.password.expose_secret().to_owned());
        self.store(&settings)
    }

    /// The saved credentials, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds a bad email.
    pub fn remembered_login(&self) -> Result<Option<RememberedLogin>, SettingsError> {
        let settings = self.load()?;
        let (Some(email), Some(password)) =
            (settings.remembered_email, settings.remembered_password)
        else {
            return Ok(None);
        };

        Ok(Some(RememberedLogin {
            email: Email::parse(&email)?,
            password: SecretString::from(password),
        }))
    }

    /// Drop saved credentials; the theme preference survives.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn forget_login(&self) -> Result<(), SettingsError> {
        let mut settings = self.load()?;
        settings.remembered_email = None;
        settings.remembered_password = None;
        self.store(&settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn settings() -> Settings<MemoryBackend> {
        Settings::new(MemoryBackend::default())
    }

    #[test]
    fn test_theme_defaults_to_light() {
        assert_eq!(settings().theme().unwrap(), Theme::Light);
    }

    #[test]
    fn test_theme_round_trip() {
        let settings = settings();
        settings.set_theme(Theme::Dark).unwrap();
        assert_eq!(settings.theme().unwrap(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_remember_and_forget_login() {
        let settings = settings();
        assert!(settings.remembered_login().unwrap().is_none());

        settings
            .remember_login(&RememberedLogin {
                email: Email::parse("reader@example.com").unwrap(),
                password: SecretString::from("hunter2"),
            })
            .unwrap();

        let login = settings.remembered_login().unwrap().unwrap();
        assert_eq!(login.email.as_str(), "reader@example.com");
        assert_eq!(login.password.expose_secret(), "hunter2");

        settings.forget_login().unwrap();
        assert!(settings.remembered_login().unwrap().is_none());
    }

    #[test]
    fn test_forget_login_keeps_theme() {
        let settings = settings();
        settings.set_theme(Theme::Dark).unwrap();
        settings
            .remember_login(&RememberedLogin {
                email: Email::parse("reader@example.com").unwrap(),
                password: SecretString::from("hunter2"),
            })
            .unwrap();

        settings.forget_login().unwrap();
        assert_eq!(settings.theme().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_debug_redacts_password() {
        let login = RememberedLogin {
            email: Email::parse("reader@example.com").unwrap(),
            password: SecretString::from("hunter2"),
        };
        let debug_output = format!("{login:?}");
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = std::env::temp_dir().join("bookhive-settings-test");
        std::fs::create_dir_all(&dir).unwrap();
        let backend = JsonFileBackend::new(dir.join("settings.json"));
        backend.clear().unwrap();

        let settings = Settings::new(backend);
        assert_eq!(settings.theme().unwrap(), Theme::Light);
        settings.set_theme(Theme::Dark).unwrap();
        assert_eq!(settings.theme().unwrap(), Theme::Dark);

        settings.backend.clear().unwrap();
    }
}
