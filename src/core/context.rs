// src/core/context.rs
use console::Style;

use crate::core::config::Config;
use crate::core::debounce::{HashDebouncer, HashEvent};
use crate::core::preferences::{PreferencesStore, Result as PreferencesResult};
use crate::models::Theme;
use tokio::sync::mpsc::UnboundedReceiver;

/// Colors for one theme.
#[derive(Debug, Clone)]
pub struct Palette {
    pub heading: Style,
    pub output: Style,
    pub muted: Style,
    pub success: Style,
    pub warning: Style,
    pub danger: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                heading: Style::new().cyan().bold(),
                output: Style::new().white().bold(),
                muted: Style::new().white().dim(),
                success: Style::new().green(),
                warning: Style::new().yellow(),
                danger: Style::new().red(),
            },
            Theme::Light => Palette {
                heading: Style::new().blue().bold(),
                output: Style::new().black().bold(),
                muted: Style::new().black().dim(),
                success: Style::new().green().bold(),
                warning: Style::new().magenta(),
                danger: Style::new().red().bold(),
            },
        }
    }
}

/// State shared by every handler for the lifetime of one run.
pub struct PageContext {
    pub config: Config,
    store: PreferencesStore,
    theme: Theme,
    palette: Palette,
    debouncer: Option<HashDebouncer>,
}

impl PageContext {
    pub fn new(config: Config) -> Self {
        let store = PreferencesStore::new(config.preferences_file());
        let theme = store.load_theme();
        log::debug!("Loaded theme preference {} from {:?}", theme, store.path());

        Self {
            config,
            store,
            theme,
            palette: Palette::for_theme(theme),
            debouncer: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    // Applies to this run only; nothing is written
    pub fn override_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
    }

    pub fn set_theme(&mut self, theme: Theme) -> PreferencesResult<Theme> {
        self.override_theme(theme);
        self.store.save_theme(theme)?;
        log::info!("Theme set to {}", theme);
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) -> PreferencesResult<Theme> {
        self.set_theme(self.theme.toggled())
    }

    /// Show a short-lived message, the terminal's stand-in for a toast.
    pub fn notify(&self, message: &str) {
        eprintln!("{} {}", self.palette.warning.apply_to("⚠"), message);
    }

    pub fn confirm(&self, message: &str) {
        eprintln!("{} {}", self.palette.success.apply_to("✔"), message);
    }

    // Replaces any previous debouncer, cancelling its pending work
    pub fn start_live_hashing(&mut self) -> UnboundedReceiver<HashEvent> {
        let (debouncer, rx) = HashDebouncer::new(self.config.hash_debounce, self.config.hash_variant);
        self.debouncer = Some(debouncer);
        rx
    }

    pub fn live_input(&mut self, password: &str) {
        if let Some(debouncer) = self.debouncer.as_mut() {
            debouncer.input(password);
        }
    }

    pub fn live_pending(&self) -> bool {
        self.debouncer
            .as_ref()
            .map_or(false, |debouncer| debouncer.is_pending())
    }

    pub fn stop_live_hashing(&mut self) {
        if let Some(mut debouncer) = self.debouncer.take() {
            debouncer.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_in(dir: &tempfile::TempDir) -> PageContext {
        PageContext::new(Config {
            preferences_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        })
    }

    #[test]
    fn toggle_persists_between_contexts() {
        let dir = tempfile::tempdir().unwrap();

        let mut ctx = context_in(&dir);
        assert_eq!(ctx.theme(), Theme::Dark);
        assert_eq!(ctx.toggle_theme().unwrap(), Theme::Light);

        let reloaded = context_in(&dir);
        assert_eq!(reloaded.theme(), Theme::Light);
    }

    #[test]
    fn override_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();

        let mut ctx = context_in(&dir);
        ctx.override_theme(Theme::Light);
        assert_eq!(ctx.theme(), Theme::Light);

        assert_eq!(context_in(&dir).theme(), Theme::Dark);
    }

    #[tokio::test]
    async fn live_hashing_goes_through_context() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = PageContext::new(Config {
            preferences_dir: Some(dir.path().to_path_buf()),
            hash_debounce: std::time::Duration::from_millis(10),
            ..Config::default()
        });

        let mut rx = ctx.start_live_hashing();
        ctx.live_input("abc");
        let event = tokio::time::timeout(std::time::Duration::from_secs(30), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(event, HashEvent::Computed(_)));

        ctx.stop_live_hashing();
        assert!(rx.recv().await.is_none());
    }
}
