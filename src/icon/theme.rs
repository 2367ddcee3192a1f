use super::IconTheme;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

static DESKTOP_THEME: OnceLock<Option<String>> = OnceLock::new();

/// Icon lookup through the freedesktop icon theme specification.
///
/// Results, including misses, are memoized per name so repeated lookups
/// within one process are stable and cheap.
pub struct FreedesktopTheme {
    size: u16,
    preferred: Option<String>,
    cache: RefCell<HashMap<String, Option<PathBuf>>>,
}

impl FreedesktopTheme {
    /// `preferred` overrides the theme read from the desktop settings.
    pub fn new(size: u16, preferred: Option<String>) -> Self {
        Self {
            size,
            preferred,
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn theme_name(&self) -> Option<&str> {
        match self.preferred.as_deref() {
            Some(theme) => Some(theme),
            None => desktop_icon_theme(),
        }
    }

    fn find(&self, name: &str) -> Option<PathBuf> {
        // Absolute path - use directly
        if name.starts_with('/') {
            let path = PathBuf::from(name);
            return path.exists().then_some(path);
        }

        if let Some(theme) = self.theme_name() {
            let icon = freedesktop_icons::lookup(name)
                .with_size(self.size)
                .with_theme(theme)
                .find();
            if icon.is_some() {
                return icon;
            }
        }

        let icon = freedesktop_icons::lookup(name)
            .with_size(self.size)
            .with_theme("hicolor")
            .find();
        if icon.is_some() {
            return icon;
        }

        freedesktop_icons::lookup(name).with_size(self.size).find()
    }
}

impl IconTheme for FreedesktopTheme {
    fn lookup(&self, name: &str) -> Option<PathBuf> {
        if let Some(cached) = self.cache.borrow().get(name) {
            return cached.clone();
        }

        let path = self.find(name);
        self.cache
            .borrow_mut()
            .insert(name.to_string(), path.clone());
        path
    }
}

/// The icon theme configured in KDE or GTK settings, read once.
fn desktop_icon_theme() -> Option<&'static str> {
    DESKTOP_THEME
        .get_or_init(|| {
            let config_dir = dirs::config_dir()?;

            let kde = fs::read_to_string(config_dir.join("kdeglobals")).ok();
            if let Some(theme) = kde.as_deref().and_then(parse_kde_icon_theme) {
                return Some(theme);
            }

            ["gtk-3.0/settings.ini", "gtk-4.0/settings.ini"]
                .iter()
                .filter_map(|file| fs::read_to_string(config_dir.join(file)).ok())
                .find_map(|content| parse_gtk_icon_theme(&content))
        })
        .as_deref()
}

fn parse_kde_icon_theme(content: &str) -> Option<String> {
    let mut in_icons_section = false;
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_icons_section = line == "[Icons]";
            continue;
        }
        if in_icons_section && let Some(theme) = line.strip_prefix("Theme=") {
            return Some(theme.trim().to_string());
        }
    }
    None
}

fn parse_gtk_icon_theme(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("gtk-icon-theme-name"))
        .and_then(|rest| rest.trim_start().strip_prefix('='))
        .map(|theme| theme.trim().trim_matches('"').to_string())
        .filter(|theme| !theme.is_empty())
}
