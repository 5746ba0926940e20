//! Light/dark theme preference.
//!
//! Resolution order: persisted value, then the ambient
//! `prefers-color-scheme` signal. Persistence failures are logged and
//! otherwise ignored, leaving the theme session-only.

use crate::error::FolioError;
use crate::store::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme implied by the environment's `prefers-color-scheme: dark` match.
    pub fn ambient(prefers_dark: bool) -> Theme {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(FolioError::UnknownTheme(other.to_owned())),
        }
    }
}

/// Owns the persisted preference and the currently applied theme.
pub struct ThemeController<S> {
    store: S,
    key: String,
    prefers_dark: bool,
    current: Option<Theme>,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, key: impl Into<String>, prefers_dark: bool) -> Self {
        Self {
            store,
            key: key.into(),
            prefers_dark,
            current: None,
        }
    }

    /// Theme that was last applied, if any.
    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    pub fn preferred_theme(&self) -> Theme {
        match self.store.load(&self.key) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => return theme,
                Err(err) => tracing::warn!(%err, "ignoring stored theme"),
            },
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "theme storage read failed"),
        }
        Theme::ambient(self.prefers_dark)
    }

    /// Record `theme` as effective and persist it. Returns the theme so the
    /// caller can render it.
    pub fn apply_theme(&mut self, theme: Theme) -> Theme {
        self.current = Some(theme);
        if let Err(err) = self.store.save(&self.key, theme.as_str()) {
            tracing::warn!(%err, %theme, "theme not persisted; keeping it for this session");
        }
        tracing::debug!(%theme, "theme applied");
        theme
    }

    /// Resolve the preferred theme and apply it. Call before anything else
    /// paints.
    pub fn initialize(&mut self) -> Theme {
        let theme = self.preferred_theme();
        self.apply_theme(theme)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let effective = self.current.unwrap_or_else(|| self.preferred_theme());
        self.apply_theme(effective.toggled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryStore;

    const KEY: &str = "portfolio-theme";

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write("quota exceeded".to_owned()))
        }
    }

    #[test]
    fn parses_only_known_names() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(FolioError::UnknownTheme("Dark".to_owned()))
        );
    }

    #[test]
    fn applied_theme_survives_reload() {
        for theme in [Theme::Light, Theme::Dark] {
            let store = MemoryStore::new();
            let mut first = ThemeController::new(store.clone(), KEY, theme == Theme::Light);
            first.apply_theme(theme);

            let reloaded = ThemeController::new(store, KEY, theme == Theme::Light);
            assert_eq!(reloaded.preferred_theme(), theme);
        }
    }

    #[test]
    fn falls_back_to_ambient_signal() {
        let dark = ThemeController::new(MemoryStore::new(), KEY, true);
        let light = ThemeController::new(MemoryStore::new(), KEY, false);

        assert_eq!(dark.preferred_theme(), Theme::Dark);
        assert_eq!(light.preferred_theme(), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_uses_ambient() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        store.save(KEY, "sepia")?;

        let controller = ThemeController::new(store, KEY, true);
        assert_eq!(controller.preferred_theme(), Theme::Dark);
        Ok(())
    }

    #[test]
    fn initialize_persists_resolved_theme() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let mut controller = ThemeController::new(store.clone(), KEY, true);

        assert_eq!(controller.initialize(), Theme::Dark);
        assert_eq!(controller.current(), Some(Theme::Dark));
        assert_eq!(store.load(KEY)?.as_deref(), Some("dark"));
        Ok(())
    }

    #[test]
    fn toggle_twice_is_identity() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let mut controller = ThemeController::new(store.clone(), KEY, false);
        let start = controller.initialize();

        assert_eq!(controller.toggle_theme(), start.toggled());
        assert_eq!(store.load(KEY)?.as_deref(), Some(start.toggled().as_str()));
        assert_eq!(controller.toggle_theme(), start);
        assert_eq!(store.load(KEY)?.as_deref(), Some(start.as_str()));
        Ok(())
    }

    #[test]
    fn storage_failure_keeps_session_theme() {
        let mut controller = ThemeController::new(FailingStore, KEY, false);

        assert_eq!(controller.initialize(), Theme::Light);
        assert_eq!(controller.toggle_theme(), Theme::Dark);
        assert_eq!(controller.current(), Some(Theme::Dark));
        assert_eq!(controller.toggle_theme(), Theme::Light);
    }
}
