//! Icon service for managing different icon themes
//!
//! Goals, journals, tabs and dialogs all ask the service for their glyphs so the
//! whole UI switches together when the theme is cycled with `i`.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl IconTheme {
    /// Parse a theme name as written in the config file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "emoji" => Some(Self::Emoji),
            "unicode" => Some(Self::Unicode),
            "ascii" => Some(Self::Ascii),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Emoji => "emoji",
            Self::Unicode => "unicode",
            Self::Ascii => "ascii",
        }
    }
}

/// Goal status icons
#[derive(Debug, Clone)]
pub struct GoalIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// Tab title icons
#[derive(Debug, Clone)]
pub struct TabIcons {
    pub home: &'static str,
    pub ponders: &'static str,
    pub progress: &'static str,
    pub resources: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub journal: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub sheet_handle: &'static str,
    pub streak: &'static str,
    pub today: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub goal: GoalIcons,
    pub tabs: TabIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            goal: GoalIcons {
                pending: "🔳",
                completed: "✅",
            },
            tabs: TabIcons {
                home: "🏡",
                ponders: "💭",
                progress: "📈",
                resources: "📚",
            },
            ui: UiIcons {
                journal: "📓",
                error: "❌",
                warning: "⚠️",
                sheet_handle: "━━━━",
                streak: "🔥",
                today: "📅",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            goal: GoalIcons {
                pending: "○",
                completed: "●",
            },
            tabs: TabIcons {
                home: "⌂",
                ponders: "◌",
                progress: "▲",
                resources: "≡",
            },
            ui: UiIcons {
                journal: "✎",
                error: "✗",
                warning: "⚠",
                sheet_handle: "━━━━",
                streak: "✦",
                today: "◷",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            goal: GoalIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            tabs: TabIcons {
                home: "H",
                ponders: "?",
                progress: "%",
                resources: "R",
            },
            ui: UiIcons {
                journal: "#",
                error: "X",
                warning: "!",
                sheet_handle: "====",
                streak: "*",
                today: "@",
            },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn goal_pending(&self) -> &'static str {
        self.icons().goal.pending
    }

    #[must_use]
    pub fn goal_completed(&self) -> &'static str {
        self.icons().goal.completed
    }

    /// Checkbox glyph for a goal's completion state
    #[must_use]
    pub fn goal_status(&self, completed: bool) -> &'static str {
        if completed {
            self.goal_completed()
        } else {
            self.goal_pending()
        }
    }

    #[must_use]
    pub fn journal(&self) -> &'static str {
        self.icons().ui.journal
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn sheet_handle(&self) -> &'static str {
        self.icons().ui.sheet_handle
    }

    #[must_use]
    pub fn streak(&self) -> &'static str {
        self.icons().ui.streak
    }

    #[must_use]
    pub fn today(&self) -> &'static str {
        self.icons().ui.today
    }

    #[must_use]
    pub fn tab(&self, tab: crate::ui::core::Tab) -> &'static str {
        use crate::ui::core::Tab;
        let tabs = self.icons().tabs;
        match tab {
            Tab::Home => tabs.home,
            Tab::Ponders => tabs.ponders,
            Tab::Progress => tabs.progress,
            Tab::Resources => tabs.resources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Unicode);
    }

    #[test]
    fn test_theme_names_round_trip() {
        for theme in [IconTheme::Emoji, IconTheme::Unicode, IconTheme::Ascii] {
            assert_eq!(IconTheme::from_name(theme.name()), Some(theme));
        }
        assert_eq!(IconTheme::from_name(" ASCII "), Some(IconTheme::Ascii));
        assert_eq!(IconTheme::from_name("nerdfont"), None);
    }
}
