//! Shell actions and the window state machine.
//!
//! [`window_transition`] is the pure per-window transition function;
//! [`reduce_shell`] routes UI-level actions through it and commits results
//! via the registry operations. Invalid transitions (a drag-move with no open
//! session, a drag-start on a maximized window, any action naming an app
//! that is no longer open) are caller-timing races, not bugs: they reduce to
//! no-ops so the shell never throws under fast open/close/focus churn.

use shell_contract::AppId;

use crate::model::{
    PointerPosition, PointerSession, WindowInteraction, WindowMode, WindowPosition, WindowSize,
    WindowState, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::registry::ShellState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Per-window actions accepted by [`window_transition`].
///
/// Move deltas are measured from session start and anchored at the geometry
/// captured when the session opened, so any chunking of pointer events that
/// sums to the same delta lands on the same result.
pub enum WindowAction {
    /// Begin a title-bar drag; only honored in normal mode while idle.
    DragStart,
    /// Reposition to the session-start position plus the given delta.
    DragMove {
        origin: WindowPosition,
        dx: i32,
        dy: i32,
    },
    /// Close the drag gesture unconditionally.
    DragEnd,
    /// Begin a corner resize; only honored in normal mode while idle.
    ResizeStart,
    /// Resize to the session-start size plus the given delta, floored.
    ResizeMove {
        origin: WindowSize,
        dx: i32,
        dy: i32,
    },
    /// Close the resize gesture unconditionally.
    ResizeEnd,
    /// Enter maximized mode from normal mode; geometry is retained.
    Maximize,
    /// Return a maximized or fullscreen window to its retained geometry.
    Restore,
    /// Enter fullscreen from any mode; supersedes maximized.
    EnterFullscreen,
    /// Leave fullscreen back to normal mode.
    ExitFullscreen,
    /// Title-bar double activation: maximize when normal, restore otherwise.
    ToggleMaximize,
}

/// Applies one [`WindowAction`] to a [`WindowState`].
///
/// Pure function: the caller owns committing the result. Stored geometry is
/// never mutated by mode changes, which is what makes restore an exact
/// round-trip.
pub fn window_transition(state: WindowState, action: WindowAction) -> WindowState {
    match action {
        WindowAction::DragStart => match (state.mode, state.interaction) {
            (WindowMode::Normal, WindowInteraction::Idle) => WindowState {
                interaction: WindowInteraction::Dragging,
                ..state
            },
            _ => state,
        },
        WindowAction::DragMove { origin, dx, dy } => {
            if state.mode == WindowMode::Normal && state.interaction == WindowInteraction::Dragging
            {
                // Unclamped: windows may be dragged partially out of the viewport.
                WindowState {
                    position: origin.offset(dx, dy),
                    ..state
                }
            } else {
                state
            }
        }
        WindowAction::ResizeStart => match (state.mode, state.interaction) {
            (WindowMode::Normal, WindowInteraction::Idle) => WindowState {
                interaction: WindowInteraction::Resizing,
                ..state
            },
            _ => state,
        },
        WindowAction::ResizeMove { origin, dx, dy } => {
            if state.mode == WindowMode::Normal && state.interaction == WindowInteraction::Resizing
            {
                WindowState {
                    size: origin
                        .offset(dx, dy)
                        .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
                    ..state
                }
            } else {
                state
            }
        }
        // Gestures close on every exit path, movement or not.
        WindowAction::DragEnd | WindowAction::ResizeEnd => WindowState {
            interaction: WindowInteraction::Idle,
            ..state
        },
        WindowAction::Maximize => match state.mode {
            WindowMode::Normal => WindowState {
                mode: WindowMode::Maximized,
                interaction: WindowInteraction::Idle,
                ..state
            },
            // Fullscreen supersedes maximized; a racing maximize never
            // downgrades the window.
            WindowMode::Maximized | WindowMode::Fullscreen => state,
        },
        WindowAction::Restore => match state.mode {
            WindowMode::Maximized | WindowMode::Fullscreen => WindowState {
                mode: WindowMode::Normal,
                ..state
            },
            WindowMode::Normal => state,
        },
        WindowAction::EnterFullscreen => WindowState {
            mode: WindowMode::Fullscreen,
            interaction: WindowInteraction::Idle,
            ..state
        },
        WindowAction::ExitFullscreen => match state.mode {
            WindowMode::Fullscreen => WindowState {
                mode: WindowMode::Normal,
                ..state
            },
            WindowMode::Normal | WindowMode::Maximized => state,
        },
        WindowAction::ToggleMaximize => match state.mode {
            WindowMode::Normal => window_transition(state, WindowAction::Maximize),
            WindowMode::Maximized | WindowMode::Fullscreen => {
                window_transition(state, WindowAction::Restore)
            }
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// UI-level actions accepted by [`reduce_shell`].
pub enum ShellAction {
    /// Open an app window, surfacing the existing one when already open.
    OpenApp { app_id: AppId },
    /// Close an app window.
    CloseApp { app_id: AppId },
    /// Raise an app window to the top of the stack.
    FocusApp { app_id: AppId },
    /// Begin dragging a window from its title bar.
    BeginDrag {
        app_id: AppId,
        pointer: PointerPosition,
    },
    /// Begin resizing a window from its corner grip.
    BeginResize {
        app_id: AppId,
        pointer: PointerPosition,
    },
    /// Route a pointer movement into the active gesture, if any.
    PointerMoved { pointer: PointerPosition },
    /// End the active gesture (pointer up, cancel, or capture loss).
    PointerReleased,
    /// Maximize a window.
    Maximize { app_id: AppId },
    /// Restore a maximized or fullscreen window.
    Restore { app_id: AppId },
    /// Put a window into fullscreen.
    EnterFullscreen { app_id: AppId },
    /// Take a window out of fullscreen.
    ExitFullscreen { app_id: AppId },
    /// Title-bar double activation.
    ToggleMaximize { app_id: AppId },
    /// Show the app search overlay.
    OpenSearch,
    /// Hide the app search overlay.
    CloseSearch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_shell`] for the shell to execute.
pub enum RuntimeEffect {
    /// Move DOM focus onto the window surface for the given app.
    FocusWindowSurface(AppId),
}

/// Applies a [`ShellAction`] to the registry state and the active pointer
/// session, collecting resulting side effects.
///
/// This is the authoritative transition engine for window lifecycle and
/// geometry; the registry collection is mutated nowhere else.
pub fn reduce_shell(
    state: &mut ShellState,
    session: &mut Option<PointerSession>,
    action: ShellAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        ShellAction::OpenApp { app_id } => {
            state.open(app_id.clone());
            state.search_open = false;
            effects.push(RuntimeEffect::FocusWindowSurface(app_id));
        }
        ShellAction::CloseApp { app_id } => {
            if session.as_ref().is_some_and(|s| s.app_id() == &app_id) {
                *session = None;
            }
            state.close(&app_id);
        }
        ShellAction::FocusApp { app_id } => {
            if state.window(&app_id).is_some() {
                state.focus(&app_id);
                effects.push(RuntimeEffect::FocusWindowSurface(app_id));
            }
        }
        ShellAction::BeginDrag { app_id, pointer } => {
            if session.is_none() {
                if let Some(current) = window_state(state, &app_id) {
                    let next = window_transition(current, WindowAction::DragStart);
                    if next.interaction == WindowInteraction::Dragging {
                        *session = Some(PointerSession::Drag {
                            app_id: app_id.clone(),
                            pointer_start: pointer,
                            position_start: current.position,
                        });
                        state.focus(&app_id);
                        state.update_window(&app_id, next);
                    }
                }
            }
        }
        ShellAction::BeginResize { app_id, pointer } => {
            if session.is_none() {
                if let Some(current) = window_state(state, &app_id) {
                    let next = window_transition(current, WindowAction::ResizeStart);
                    if next.interaction == WindowInteraction::Resizing {
                        *session = Some(PointerSession::Resize {
                            app_id: app_id.clone(),
                            pointer_start: pointer,
                            size_start: current.size,
                        });
                        state.focus(&app_id);
                        state.update_window(&app_id, next);
                    }
                }
            }
        }
        ShellAction::PointerMoved { pointer } => match session.as_ref() {
            Some(PointerSession::Drag {
                app_id,
                pointer_start,
                position_start,
            }) => {
                if let Some(current) = window_state(state, app_id) {
                    let next = window_transition(
                        current,
                        WindowAction::DragMove {
                            origin: *position_start,
                            dx: pointer.x - pointer_start.x,
                            dy: pointer.y - pointer_start.y,
                        },
                    );
                    state.update_window(app_id, next);
                }
            }
            Some(PointerSession::Resize {
                app_id,
                pointer_start,
                size_start,
            }) => {
                if let Some(current) = window_state(state, app_id) {
                    let next = window_transition(
                        current,
                        WindowAction::ResizeMove {
                            origin: *size_start,
                            dx: pointer.x - pointer_start.x,
                            dy: pointer.y - pointer_start.y,
                        },
                    );
                    state.update_window(app_id, next);
                }
            }
            None => {}
        },
        ShellAction::PointerReleased => {
            if let Some(active) = session.take() {
                let end = match &active {
                    PointerSession::Drag { .. } => WindowAction::DragEnd,
                    PointerSession::Resize { .. } => WindowAction::ResizeEnd,
                };
                let app_id = active.app_id().clone();
                if let Some(current) = window_state(state, &app_id) {
                    state.update_window(&app_id, window_transition(current, end));
                }
            }
        }
        ShellAction::Maximize { app_id } => {
            apply_mode_action(state, session, &mut effects, app_id, WindowAction::Maximize);
        }
        ShellAction::Restore { app_id } => {
            apply_mode_action(state, session, &mut effects, app_id, WindowAction::Restore);
        }
        ShellAction::EnterFullscreen { app_id } => {
            apply_mode_action(
                state,
                session,
                &mut effects,
                app_id,
                WindowAction::EnterFullscreen,
            );
        }
        ShellAction::ExitFullscreen { app_id } => {
            apply_mode_action(
                state,
                session,
                &mut effects,
                app_id,
                WindowAction::ExitFullscreen,
            );
        }
        ShellAction::ToggleMaximize { app_id } => {
            apply_mode_action(
                state,
                session,
                &mut effects,
                app_id,
                WindowAction::ToggleMaximize,
            );
        }
        ShellAction::OpenSearch => {
            state.search_open = true;
        }
        ShellAction::CloseSearch => {
            state.search_open = false;
        }
    }
    effects
}

fn window_state(state: &ShellState, app_id: &AppId) -> Option<WindowState> {
    state.window(app_id).map(|entry| entry.window)
}

/// Commits a mode-changing action and raises the window.
///
/// Leaving normal mode force-closes a gesture targeting the window: a drag
/// or resize session has no meaning once geometry stops being authoritative.
fn apply_mode_action(
    state: &mut ShellState,
    session: &mut Option<PointerSession>,
    effects: &mut Vec<RuntimeEffect>,
    app_id: AppId,
    action: WindowAction,
) {
    let Some(current) = window_state(state, &app_id) else {
        return;
    };
    let next = window_transition(current, action);
    if !next.is_normal() && session.as_ref().is_some_and(|s| s.app_id() == &app_id) {
        *session = None;
    }
    state.update_window(&app_id, next);
    state.focus(&app_id);
    effects.push(RuntimeEffect::FocusWindowSurface(app_id));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> AppId {
        AppId::trusted(raw)
    }

    fn open(state: &mut ShellState, session: &mut Option<PointerSession>, raw: &str) {
        let _ = reduce_shell(state, session, ShellAction::OpenApp { app_id: id(raw) });
    }

    fn window(state: &ShellState, raw: &str) -> WindowState {
        state.window(&id(raw)).expect("window open").window
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn drag_deltas_are_chunking_independent() {
        let mut chunked = ShellState::default();
        let mut single = ShellState::default();
        let mut chunked_session = None;
        let mut single_session = None;
        open(&mut chunked, &mut chunked_session, "notes");
        open(&mut single, &mut single_session, "notes");

        for state_session in [
            (&mut chunked, &mut chunked_session),
            (&mut single, &mut single_session),
        ] {
            let _ = reduce_shell(
                state_session.0,
                state_session.1,
                ShellAction::BeginDrag {
                    app_id: id("notes"),
                    pointer: pointer(10, 10),
                },
            );
        }
        for p in [pointer(12, 14), pointer(25, -5), pointer(40, 50)] {
            let _ = reduce_shell(
                &mut chunked,
                &mut chunked_session,
                ShellAction::PointerMoved { pointer: p },
            );
        }
        let _ = reduce_shell(
            &mut single,
            &mut single_session,
            ShellAction::PointerMoved {
                pointer: pointer(40, 50),
            },
        );

        assert_eq!(window(&chunked, "notes").position, window(&single, "notes").position);
    }

    #[test]
    fn resize_never_drops_below_the_floor() {
        let mut state = ShellState::default();
        let mut session = None;
        open(&mut state, &mut session, "notes");

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::BeginResize {
                app_id: id("notes"),
                pointer: pointer(0, 0),
            },
        );
        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::PointerMoved {
                pointer: pointer(-10_000, -10_000),
            },
        );

        assert_eq!(
            window(&state, "notes").size,
            WindowSize {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }
        );

        // Deltas anchor at session start, so moving the pointer back up
        // recovers the original size instead of accumulating the clamp.
        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::PointerMoved {
                pointer: pointer(10, 10),
            },
        );
        let _ = reduce_shell(&mut state, &mut session, ShellAction::PointerReleased);
        let expected = WindowState::default().size.offset(10, 10);
        assert_eq!(window(&state, "notes").size, expected);
        assert_eq!(window(&state, "notes").interaction, WindowInteraction::Idle);
    }

    #[test]
    fn maximize_then_restore_round_trips_geometry_exactly() {
        let mut state = ShellState::default();
        let mut session = None;
        open(&mut state, &mut session, "notes");
        let before = window(&state, "notes");

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::Maximize { app_id: id("notes") },
        );
        let maximized = window(&state, "notes");
        assert_eq!(maximized.mode, WindowMode::Maximized);
        assert_eq!(maximized.position, before.position);
        assert_eq!(maximized.size, before.size);

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::Restore { app_id: id("notes") },
        );
        let restored = window(&state, "notes");
        assert_eq!(restored.mode, WindowMode::Normal);
        assert_eq!(restored.position, before.position);
        assert_eq!(restored.size, before.size);
    }

    #[test]
    fn drag_start_is_suppressed_outside_normal_mode() {
        let mut state = ShellState::default();
        let mut session = None;
        open(&mut state, &mut session, "notes");
        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::Maximize { app_id: id("notes") },
        );
        let before = window(&state, "notes");

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::BeginDrag {
                app_id: id("notes"),
                pointer: pointer(5, 5),
            },
        );

        assert_eq!(session, None);
        assert_eq!(window(&state, "notes"), before);
    }

    #[test]
    fn fullscreen_supersedes_maximized_and_force_closes_gestures() {
        let mut state = ShellState::default();
        let mut session = None;
        open(&mut state, &mut session, "notes");

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::BeginDrag {
                app_id: id("notes"),
                pointer: pointer(0, 0),
            },
        );
        assert!(session.is_some());

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::EnterFullscreen { app_id: id("notes") },
        );
        assert_eq!(session, None);
        let win = window(&state, "notes");
        assert_eq!(win.mode, WindowMode::Fullscreen);
        assert_eq!(win.interaction, WindowInteraction::Idle);

        // A racing maximize never downgrades a fullscreen window.
        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::Maximize { app_id: id("notes") },
        );
        assert_eq!(window(&state, "notes").mode, WindowMode::Fullscreen);

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::ExitFullscreen { app_id: id("notes") },
        );
        let restored = window(&state, "notes");
        assert_eq!(restored.mode, WindowMode::Normal);
        assert_eq!(restored.position, WindowState::default().position);
        assert_eq!(restored.size, WindowState::default().size);
    }

    #[test]
    fn toggle_maximize_cycles_and_restores_fullscreen_windows() {
        let mut state = ShellState::default();
        let mut session = None;
        open(&mut state, &mut session, "notes");

        let toggle = ShellAction::ToggleMaximize { app_id: id("notes") };
        let _ = reduce_shell(&mut state, &mut session, toggle.clone());
        assert_eq!(window(&state, "notes").mode, WindowMode::Maximized);
        let _ = reduce_shell(&mut state, &mut session, toggle.clone());
        assert_eq!(window(&state, "notes").mode, WindowMode::Normal);

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::EnterFullscreen { app_id: id("notes") },
        );
        let _ = reduce_shell(&mut state, &mut session, toggle);
        assert_eq!(window(&state, "notes").mode, WindowMode::Normal);
    }

    #[test]
    fn pointer_events_without_a_session_are_ignored() {
        let mut state = ShellState::default();
        let mut session = None;
        open(&mut state, &mut session, "notes");
        let before = state.clone();

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::PointerMoved {
                pointer: pointer(500, 500),
            },
        );
        let _ = reduce_shell(&mut state, &mut session, ShellAction::PointerReleased);

        assert_eq!(state, before);
    }

    #[test]
    fn a_second_gesture_cannot_start_while_one_is_active() {
        let mut state = ShellState::default();
        let mut session = None;
        open(&mut state, &mut session, "notes");
        open(&mut state, &mut session, "gallery");

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::BeginDrag {
                app_id: id("notes"),
                pointer: pointer(0, 0),
            },
        );
        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::BeginResize {
                app_id: id("gallery"),
                pointer: pointer(0, 0),
            },
        );

        assert!(matches!(
            session,
            Some(PointerSession::Drag { ref app_id, .. }) if app_id == &id("notes")
        ));
        assert_eq!(
            window(&state, "gallery").interaction,
            WindowInteraction::Idle
        );
    }

    #[test]
    fn closing_the_dragged_window_discards_the_session() {
        let mut state = ShellState::default();
        let mut session = None;
        open(&mut state, &mut session, "notes");
        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::BeginDrag {
                app_id: id("notes"),
                pointer: pointer(0, 0),
            },
        );

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::CloseApp { app_id: id("notes") },
        );

        assert_eq!(session, None);
        assert_eq!(state.windows().len(), 0);
    }

    #[test]
    fn settings_drag_and_maximize_scenario() {
        let mut state = ShellState::default();
        let mut session = None;
        open(&mut state, &mut session, "settings");
        let mut win = window(&state, "settings");
        win.position = WindowPosition { x: 50, y: 50 };
        state.update_window(&id("settings"), win);

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::BeginDrag {
                app_id: id("settings"),
                pointer: pointer(100, 100),
            },
        );
        assert_eq!(
            window(&state, "settings").interaction,
            WindowInteraction::Dragging
        );

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::PointerMoved {
                pointer: pointer(130, 140),
            },
        );
        assert_eq!(
            window(&state, "settings").position,
            WindowPosition { x: 80, y: 90 }
        );

        let _ = reduce_shell(&mut state, &mut session, ShellAction::PointerReleased);
        let after_drag = window(&state, "settings");
        assert_eq!(after_drag.interaction, WindowInteraction::Idle);
        assert_eq!(after_drag.position, WindowPosition { x: 80, y: 90 });

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::Maximize {
                app_id: id("settings"),
            },
        );
        assert_eq!(window(&state, "settings").mode, WindowMode::Maximized);

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::Restore {
                app_id: id("settings"),
            },
        );
        let restored = window(&state, "settings");
        assert_eq!(restored.mode, WindowMode::Normal);
        assert_eq!(restored.position, WindowPosition { x: 80, y: 90 });
    }

    #[test]
    fn open_focus_close_stacking_scenario() {
        let mut state = ShellState::default();
        let mut session = None;
        open(&mut state, &mut session, "a");
        open(&mut state, &mut session, "b");
        open(&mut state, &mut session, "c");

        let effects = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::FocusApp { app_id: id("a") },
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowSurface(id("a"))]);
        assert_eq!(state.focused(), Some(&id("a")));
        let rank = |raw: &str| state.window(&id(raw)).unwrap().z_index;
        assert!(rank("b") < rank("c"));

        let _ = reduce_shell(
            &mut state,
            &mut session,
            ShellAction::CloseApp { app_id: id("a") },
        );
        assert_eq!(state.focused(), Some(&id("c")));
    }
}
