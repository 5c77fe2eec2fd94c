//! Page chrome around the gallery: theme flag, mobile menu, in-page anchors,
//! back-to-top control, footer year.

use chrono::Datelike;

use crate::models::settings::Settings;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Stored value if valid, otherwise `theme_default`, otherwise dark.
    pub fn from_stored(stored: Option<&str>, settings: &Settings) -> Self {
        stored
            .and_then(Self::parse)
            .or_else(|| Self::parse(&settings.get_or("theme_default", "dark")))
            .unwrap_or(Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    pub fn aria_pressed(self) -> &'static str {
        match self {
            Theme::Dark => "true",
            Theme::Light => "false",
        }
    }
}

/// Attribute values the menu toggle button should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToggleAttrs {
    pub aria_expanded: bool,
    pub aria_label: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> NavToggleAttrs {
        self.open = !self.open;
        self.attrs()
    }

    /// Following a menu link closes the menu.
    pub fn close(&mut self) -> NavToggleAttrs {
        self.open = false;
        self.attrs()
    }

    pub fn attrs(&self) -> NavToggleAttrs {
        NavToggleAttrs {
            aria_expanded: self.open,
            aria_label: if self.open { "Close menu" } else { "Open menu" },
        }
    }
}

/// Fragment id for a smooth-scroll link; bare `#` is left alone.
pub fn in_page_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackToTop {
    offset: i64,
}

impl BackToTop {
    pub fn from_settings(settings: &Settings) -> Self {
        BackToTop {
            offset: settings.get_i64("back_to_top_offset"),
        }
    }

    pub fn is_visible(&self, scroll_y: i64) -> bool {
        scroll_y > self.offset
    }
}

pub fn footer_year() -> i32 {
    chrono::Local::now().year()
}
