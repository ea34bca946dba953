//! Window manager registry: the collection of open windows and its stacking
//! order.
//!
//! The registry is the single writer for the entry collection. Trackers and
//! the per-window state machine only produce a next [`WindowState`] that gets
//! committed through [`ShellState::update_window`]; nothing else mutates the
//! entries. Every operation on an unknown app id is a deliberate no-op:
//! pointer events and close buttons race each other freely in the event loop,
//! and the manager must stay interactive through that churn.

use shell_contract::AppId;

use crate::model::{OpenWindow, WindowState};

const CASCADE_STEP_PX: i32 = 24;
const CASCADE_SLOTS: usize = 8;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Shell-owned state: open window entries plus overlay flags.
pub struct ShellState {
    windows: Vec<OpenWindow>,
    pub search_open: bool,
}

impl ShellState {
    /// All open entries in insertion order. Display order is `z_index`, not
    /// position in this slice.
    pub fn windows(&self) -> &[OpenWindow] {
        &self.windows
    }

    /// Looks up the entry for `app_id`.
    pub fn window(&self, app_id: &AppId) -> Option<&OpenWindow> {
        self.windows.iter().find(|entry| &entry.app_id == app_id)
    }

    /// Opens a window for `app_id`, or surfaces the existing one.
    ///
    /// A fresh entry starts with default geometry cascaded by open count and
    /// the top stacking rank. Opening an already-open app behaves exactly
    /// like [`ShellState::focus`].
    pub fn open(&mut self, app_id: AppId) {
        if self.window(&app_id).is_some() {
            self.focus(&app_id);
            return;
        }

        let slot = (self.windows.len() % CASCADE_SLOTS) as i32;
        let base = WindowState::default();
        let window = WindowState {
            position: base.position.offset(slot * CASCADE_STEP_PX, slot * CASCADE_STEP_PX),
            ..base
        };
        let z_index = self.next_rank();
        self.windows.push(OpenWindow {
            app_id,
            window,
            z_index,
        });
    }

    /// Closes the window for `app_id`; no effect when it is not open.
    pub fn close(&mut self, app_id: &AppId) {
        self.windows.retain(|entry| &entry.app_id != app_id);
    }

    /// Raises `app_id` to the top stacking rank.
    ///
    /// Only the focused entry's rank changes; every other entry keeps its
    /// rank, so relative order among the rest is preserved and the rank work
    /// per focus event stays constant.
    pub fn focus(&mut self, app_id: &AppId) {
        let next = self.next_rank();
        if let Some(entry) = self
            .windows
            .iter_mut()
            .find(|entry| &entry.app_id == app_id)
        {
            entry.z_index = next;
        }
    }

    /// Replaces the window state for `app_id`; no-op when the entry is gone.
    ///
    /// The no-op guards state updates racing a close: a pointer event may
    /// resolve after its window was removed.
    pub fn update_window(&mut self, app_id: &AppId, next: WindowState) {
        if let Some(entry) = self
            .windows
            .iter_mut()
            .find(|entry| &entry.app_id == app_id)
        {
            entry.window = next;
        }
    }

    /// App id holding the top stacking rank, or `None` when nothing is open.
    pub fn focused(&self) -> Option<&AppId> {
        self.windows
            .iter()
            .max_by_key(|entry| entry.z_index)
            .map(|entry| &entry.app_id)
    }

    fn next_rank(&self) -> u64 {
        self.windows
            .iter()
            .map(|entry| entry.z_index)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> AppId {
        AppId::trusted(raw)
    }

    #[test]
    fn open_is_idempotent_and_acts_as_focus() {
        let mut state = ShellState::default();
        state.open(id("notes"));
        state.open(id("gallery"));
        assert_eq!(state.focused(), Some(&id("gallery")));

        state.open(id("notes"));

        let entries: Vec<_> = state.windows().iter().map(|e| &e.app_id).collect();
        assert_eq!(entries, vec![&id("notes"), &id("gallery")]);
        assert_eq!(state.focused(), Some(&id("notes")));
    }

    #[test]
    fn close_unknown_app_leaves_registry_unchanged() {
        let mut state = ShellState::default();
        state.open(id("notes"));
        let before = state.clone();

        state.close(&id("gallery"));

        assert_eq!(state, before);
    }

    #[test]
    fn focus_raises_one_entry_and_preserves_relative_order_of_the_rest() {
        let mut state = ShellState::default();
        state.open(id("a"));
        state.open(id("b"));
        state.open(id("c"));
        let rank = |state: &ShellState, raw: &str| state.window(&id(raw)).unwrap().z_index;

        let b_before = rank(&state, "b");
        let c_before = rank(&state, "c");
        state.focus(&id("a"));

        assert_eq!(state.focused(), Some(&id("a")));
        assert_eq!(rank(&state, "b"), b_before);
        assert_eq!(rank(&state, "c"), c_before);
        assert!(rank(&state, "b") < rank(&state, "c"));
        assert!(rank(&state, "a") > rank(&state, "c"));
    }

    #[test]
    fn focus_and_update_on_unknown_app_are_no_ops() {
        let mut state = ShellState::default();
        state.open(id("notes"));
        let before = state.clone();

        state.focus(&id("gallery"));
        state.update_window(&id("gallery"), WindowState::default());

        assert_eq!(state, before);
    }

    #[test]
    fn focused_is_none_on_empty_registry() {
        let state = ShellState::default();
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn open_cascades_default_positions() {
        let mut state = ShellState::default();
        state.open(id("a"));
        state.open(id("b"));

        let a = state.window(&id("a")).unwrap().window.position;
        let b = state.window(&id("b")).unwrap().window.position;
        assert_eq!(b.x - a.x, CASCADE_STEP_PX);
        assert_eq!(b.y - a.y, CASCADE_STEP_PX);
    }
}
