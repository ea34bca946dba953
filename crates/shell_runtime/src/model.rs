use serde::{Deserialize, Serialize};
use shell_contract::AppId;

/// Minimum allowed window width during resize.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum allowed window height during resize.
pub const MIN_WINDOW_HEIGHT: i32 = 150;
pub const DEFAULT_WINDOW_WIDTH: i32 = 480;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 360;

/// Render-time z tier for maximized windows, above every normal-mode rank.
pub const MAXIMIZED_Z_TIER: u64 = 9_000;
/// Render-time z tier for fullscreen windows, above maximized ones.
pub const FULLSCREEN_Z_TIER: u64 = 9_900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            width: self.width + dx,
            height: self.height + dy,
        }
    }

    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Layout mode of a managed window. The variants are mutually exclusive by
/// construction; `Fullscreen` supersedes `Maximized`.
pub enum WindowMode {
    #[default]
    Normal,
    Maximized,
    Fullscreen,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Active gesture of a managed window. Dragging and resizing are mutually
/// exclusive by construction and only ever entered from `Normal` mode.
pub enum WindowInteraction {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Geometry and mode record for one window instance.
///
/// `position` and `size` are authoritative only while `mode` is `Normal`.
/// Maximized and fullscreen windows derive viewport-filling geometry at
/// render time and leave the stored fields untouched, so restoring returns
/// to the pre-maximize geometry exactly.
pub struct WindowState {
    pub position: WindowPosition,
    pub size: WindowSize,
    pub mode: WindowMode,
    pub interaction: WindowInteraction,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            position: WindowPosition { x: 64, y: 48 },
            size: WindowSize {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT,
            },
            mode: WindowMode::Normal,
            interaction: WindowInteraction::Idle,
        }
    }
}

impl WindowState {
    pub fn is_normal(&self) -> bool {
        self.mode == WindowMode::Normal
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Live registry record for one open window.
pub struct OpenWindow {
    pub app_id: AppId,
    pub window: WindowState,
    /// Stacking rank; higher renders above lower. Ranks only ever grow.
    pub z_index: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ephemeral bookkeeping for one continuous drag or resize gesture.
///
/// Captured at pointer-down and discarded at pointer-up (or capture loss)
/// regardless of whether any movement occurred. The two variants make drag
/// and resize structurally exclusive for the single pointer.
pub enum PointerSession {
    Drag {
        app_id: AppId,
        pointer_start: PointerPosition,
        position_start: WindowPosition,
    },
    Resize {
        app_id: AppId,
        pointer_start: PointerPosition,
        size_start: WindowSize,
    },
}

impl PointerSession {
    /// App whose window this gesture targets.
    pub fn app_id(&self) -> &AppId {
        match self {
            Self::Drag { app_id, .. } | Self::Resize { app_id, .. } => app_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clamped_min_enforces_the_floor_componentwise() {
        let size = WindowSize {
            width: 120,
            height: 900,
        };
        assert_eq!(
            size.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
            WindowSize {
                width: MIN_WINDOW_WIDTH,
                height: 900,
            }
        );
    }

    #[test]
    fn default_state_is_normal_and_idle() {
        let state = WindowState::default();
        assert_eq!(state.mode, WindowMode::Normal);
        assert_eq!(state.interaction, WindowInteraction::Idle);
        assert!(state.size.width >= MIN_WINDOW_WIDTH);
        assert!(state.size.height >= MIN_WINDOW_HEIGHT);
    }
}
