//! Page-session UI state: theme preference, video controls, zoom toggle.
//! Kept free of web-sys so the transition rules are testable on the host.

/// Persisted theme preference. Stored under one localStorage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// localStorage key holding the theme flag.
pub const THEME_KEY: &str = "theme";
/// Body class that marks dark mode.
pub const DARK_CLASS: &str = "dark-mode";

impl Theme {
    /// Anything other than the stored `"dark"` flag falls back to light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle button for this theme.
    pub fn icon_src(self) -> &'static str {
        match self {
            Theme::Light => "images/1.png",
            Theme::Dark => "images/2-1.png",
        }
    }
}

/// One of the three width presets for the showcase video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSize {
    Small,
    Normal,
    Big,
}

impl VideoSize {
    pub const ALL: [VideoSize; 3] = [VideoSize::Small, VideoSize::Normal, VideoSize::Big];

    pub fn css_width(self) -> &'static str {
        match self {
            VideoSize::Small => "320px",
            VideoSize::Normal => "100%",
            VideoSize::Big => "560px",
        }
    }

    pub fn button_id(self) -> &'static str {
        match self {
            VideoSize::Small => "smallBtn",
            VideoSize::Normal => "normalBtn",
            VideoSize::Big => "bigBtn",
        }
    }

    /// Active-state of every size button for a given preset; the DOM layer
    /// applies these flags verbatim, so exactly one button ends up `active`.
    pub fn active_flags(current: VideoSize) -> [(&'static str, bool); 3] {
        VideoSize::ALL.map(|size| (size.button_id(), size == current))
    }
}

/// Play state and current width preset of the showcase video.
#[derive(Debug, Clone, Copy)]
pub struct VideoState {
    pub is_playing: bool,
    pub current_size: VideoSize,
}

impl Default for VideoState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_size: VideoSize::Normal,
        }
    }
}

impl VideoState {
    /// Label and ARIA text for the play/pause button.
    pub fn play_button_text(&self) -> (&'static str, &'static str) {
        if self.is_playing {
            ("⏸ Pause", "Pause video")
        } else {
            ("▶ Play", "Play video")
        }
    }
}

/// Whether the decorative zoom object's CSS animation is running.
#[derive(Debug, Clone, Copy)]
pub struct ZoomState {
    pub animating: bool,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { animating: true }
    }
}

impl ZoomState {
    pub fn toggle(&mut self) {
        self.animating = !self.animating;
    }

    /// CSS `animation-play-state` value for the current state.
    pub fn play_state(&self) -> &'static str {
        if self.animating {
            "running"
        } else {
            "paused"
        }
    }

    /// Glyph shown on the toggle button.
    pub fn glyph(&self) -> &'static str {
        if self.animating {
            "⏸"
        } else {
            "▶"
        }
    }
}
