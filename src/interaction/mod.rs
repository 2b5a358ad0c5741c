use serde::{Deserialize, Serialize};

/// Key-press event forwarded by the host's document-level listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyEvent {
    /// Logical key value as reported by the browser (`"r"`, `"Enter"`, ...).
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyEvent {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Ctrl on most platforms, Cmd on macOS.
    #[must_use]
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Named actions reachable through keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortcutAction {
    Refresh,
    Export,
    ToggleFullscreen,
}

/// Outcome of a key press handed to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyDisposition {
    /// Recognized; the host must prevent the browser's default handling.
    Handled(ShortcutAction),
    /// Not a shortcut; the browser handles it unchanged.
    PassThrough,
}

impl KeyDisposition {
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

/// Maps a key press onto a shortcut action, if any.
#[must_use]
pub fn resolve_shortcut(event: &KeyEvent) -> Option<ShortcutAction> {
    if !event.has_command_modifier() {
        return None;
    }
    match event.key.as_str() {
        "r" => Some(ShortcutAction::Refresh),
        "e" => Some(ShortcutAction::Export),
        "f" => Some(ShortcutAction::ToggleFullscreen),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FullscreenState {
    Normal,
    Fullscreen,
}

impl FullscreenState {
    #[must_use]
    pub fn from_is_fullscreen(is_fullscreen: bool) -> Self {
        if is_fullscreen {
            Self::Fullscreen
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Fullscreen,
            Self::Fullscreen => Self::Normal,
        }
    }
}

/// Entries of the slide-out navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuAction {
    Export,
    Refresh,
    Fullscreen,
    Automation,
    Settings,
}

impl MenuAction {
    pub const ALL: [Self; 5] = [
        Self::Export,
        Self::Refresh,
        Self::Fullscreen,
        Self::Automation,
        Self::Settings,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Export => "Export Data",
            Self::Refresh => "Refresh",
            Self::Fullscreen => "Fullscreen",
            Self::Automation => "Automation",
            Self::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}
