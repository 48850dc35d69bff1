//! Light/dark presentation mode: the persisted preference and its toggle
//! rules. Storage sits behind [`PreferenceStore`] so the manager runs
//! anywhere; the browser adapter lives in the frontend.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const THEME_KEY: &str = "portfolio-theme";

const FULL_EMPHASIS: &str = "1";
const DIM_EMPHASIS: &str = "0.5";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Dark mode dims the sun indicator and emphasizes the moon.
    pub fn sun_opacity(self) -> &'static str {
        match self {
            Self::Light => FULL_EMPHASIS,
            Self::Dark => DIM_EMPHASIS,
        }
    }

    pub fn moon_opacity(self) -> &'static str {
        match self {
            Self::Light => DIM_EMPHASIS,
            Self::Dark => FULL_EMPHASIS,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme::Dark;

/// A preference write failed. Writes are best-effort; the in-memory mode is
/// kept either way so the current session stays visually correct.
#[derive(Debug)]
pub struct StoreError;

/// Durable key-value storage scoped to the site origin.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Single source of truth for the active presentation mode.
pub struct ThemeManager<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Reads the stored preference. Absent, unreadable, or unrecognized
    /// values fall back to [`DEFAULT_THEME`].
    pub fn initialize(store: S) -> Self {
        let theme = store
            .get(THEME_KEY)
            .as_deref()
            .and_then(Theme::from_str)
            .unwrap_or(DEFAULT_THEME);

        Self { store, theme }
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Records the mode and persists it. The store write must not block the
    /// in-memory update, so its failure is swallowed here.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        let _ = self.store.set(THEME_KEY, theme.as_str());
    }

    /// Flips the mode and returns the new one for the caller to apply.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set(next);
        next
    }
}
