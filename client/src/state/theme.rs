//! Light/dark theme state for the page chrome.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Class placed on `<body>` while dark mode is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Theme state shared through context. Starts in light mode on every load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

impl ThemeState {
    /// Flip the theme and return the new dark-mode flag.
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Label for the toggle button; names the mode a click switches to.
    pub fn button_label(self) -> &'static str {
        if self.dark_mode {
            "Switch to Light Mode"
        } else {
            "Switch to Dark Mode"
        }
    }
}
