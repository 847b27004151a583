//! Per-tab session state: visual mode, site theme, window drag, mini-game.
//!
//! Everything here is transient. The admin flag is deliberately absent — it
//! persists across reloads and lives in `local_store::Preferences`.

/// The terminal widget's cosmetic style scheme. Distinct from the site-wide
/// theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualMode {
    Matrix,
    Cyber,
    Classic,
    Amber,
}

impl VisualMode {
    pub const ALL: [VisualMode; 4] = [
        VisualMode::Matrix,
        VisualMode::Cyber,
        VisualMode::Classic,
        VisualMode::Amber,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            VisualMode::Matrix => "matrix",
            VisualMode::Cyber => "cyber",
            VisualMode::Classic => "classic",
            VisualMode::Amber => "amber",
        }
    }

    /// The next mode in declaration order, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Resolves a user-supplied argument: a mode name (case-insensitive) or
    /// its 1-based numeric alias.
    #[must_use]
    pub fn from_arg(arg: &str) -> Option<Self> {
        let lowered = arg.to_lowercase();
        if let Ok(alias) = lowered.parse::<usize>() {
            return (1..=Self::ALL.len())
                .contains(&alias)
                .then(|| Self::ALL[alias - 1]);
        }
        Self::ALL.iter().copied().find(|mode| mode.name() == lowered)
    }

    #[must_use]
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|mode| mode.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The overall page color scheme, toggled independently of the terminal's
/// visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteTheme {
    Dark,
    Light,
}

impl SiteTheme {
    pub const ALL: [SiteTheme; 2] = [SiteTheme::Dark, SiteTheme::Light];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SiteTheme::Dark => "dark",
            SiteTheme::Light => "light",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SiteTheme::Dark => SiteTheme::Light,
            SiteTheme::Light => SiteTheme::Dark,
        }
    }

    #[must_use]
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_lowercase().as_str() {
            "dark" | "1" => Some(SiteTheme::Dark),
            "light" | "2" => Some(SiteTheme::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|theme| theme.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Pixel offset of the floating terminal window. Unset means the fixed
/// corner anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragState {
    grab_x: i32,
    grab_y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub is_open: bool,
    pub is_minimized: bool,
    pub visual_mode: VisualMode,
    pub site_theme: SiteTheme,
    pub window_position: Option<WindowPosition>,
    /// Secret of a running `/guess` game. Left dangling if the session ends
    /// mid-game; that is accepted behavior, not a leak to fix.
    pub guess_target: Option<u32>,
    drag: Option<DragState>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_open: false,
            is_minimized: false,
            visual_mode: VisualMode::Matrix,
            site_theme: SiteTheme::Dark,
            window_position: None,
            guess_target: None,
            drag: None,
        }
    }
}

impl SessionState {
    /// Pointer-down on the window header. Captures the grab offset relative
    /// to the window's current position (the corner anchor when unset).
    pub fn begin_drag(&mut self, pointer_x: i32, pointer_y: i32) {
        let origin = self.window_position.unwrap_or_default();
        self.drag = Some(DragState {
            grab_x: pointer_x - origin.x,
            grab_y: pointer_y - origin.y,
        });
    }

    /// Pointer-move while dragging. A no-op when no drag is active.
    pub fn drag_to(&mut self, pointer_x: i32, pointer_y: i32) {
        let Some(drag) = self.drag else {
            return;
        };
        self.window_position = Some(WindowPosition {
            x: pointer_x - drag.grab_x,
            y: pointer_y - drag.grab_y,
        });
    }

    /// Pointer-up. The window keeps its last dragged position.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionState, SiteTheme, VisualMode, WindowPosition};

    #[test]
    fn visual_mode_cycle_wraps_back_to_the_start() {
        let mut mode = VisualMode::Matrix;
        for _ in 0..VisualMode::ALL.len() {
            mode = mode.next();
        }
        assert_eq!(mode, VisualMode::Matrix);
    }

    #[test]
    fn visual_mode_resolves_names_and_numeric_aliases() {
        assert_eq!(VisualMode::from_arg("cyber"), Some(VisualMode::Cyber));
        assert_eq!(VisualMode::from_arg("AMBER"), Some(VisualMode::Amber));
        assert_eq!(VisualMode::from_arg("1"), Some(VisualMode::Matrix));
        assert_eq!(VisualMode::from_arg("4"), Some(VisualMode::Amber));
        assert_eq!(VisualMode::from_arg("0"), None);
        assert_eq!(VisualMode::from_arg("5"), None);
        assert_eq!(VisualMode::from_arg("neon"), None);
    }

    #[test]
    fn site_theme_toggles_between_dark_and_light() {
        assert_eq!(SiteTheme::Dark.next(), SiteTheme::Light);
        assert_eq!(SiteTheme::Light.next(), SiteTheme::Dark);
        assert_eq!(SiteTheme::from_arg("Light"), Some(SiteTheme::Light));
        assert_eq!(SiteTheme::from_arg("2"), Some(SiteTheme::Light));
        assert_eq!(SiteTheme::from_arg("blue"), None);
    }

    #[test]
    fn drag_keeps_the_grab_offset_stable() {
        let mut session = SessionState::default();
        assert_eq!(session.window_position, None);

        // Grab the header 10,5 into the window while anchored at the corner.
        session.begin_drag(10, 5);
        assert!(session.is_dragging());

        session.drag_to(110, 55);
        assert_eq!(session.window_position, Some(WindowPosition { x: 100, y: 50 }));

        session.drag_to(60, 30);
        assert_eq!(session.window_position, Some(WindowPosition { x: 50, y: 25 }));

        session.end_drag();
        assert!(!session.is_dragging());
        assert_eq!(session.window_position, Some(WindowPosition { x: 50, y: 25 }));
    }

    #[test]
    fn drag_to_without_pointer_down_moves_nothing() {
        let mut session = SessionState::default();
        session.drag_to(300, 200);
        assert_eq!(session.window_position, None);
    }

    #[test]
    fn second_drag_starts_from_the_previous_position() {
        let mut session = SessionState::default();
        session.begin_drag(0, 0);
        session.drag_to(40, 20);
        session.end_drag();

        session.begin_drag(45, 25);
        session.drag_to(50, 30);
        assert_eq!(session.window_position, Some(WindowPosition { x: 45, y: 25 }));
    }
}
