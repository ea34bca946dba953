//! Runtime provider and context wiring for the shell.
//!
//! This module owns the long-lived reducer container and runtime effect
//! queue. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    config::ShellConfig,
    model::PointerSession,
    reducer::{reduce_shell, RuntimeEffect, ShellAction},
    registry::ShellState,
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`] values.
pub struct ShellRuntimeContext {
    /// Reactive window registry state.
    pub state: RwSignal<ShellState>,
    /// Active drag or resize gesture, at most one shell-wide.
    pub session: RwSignal<Option<PointerSession>>,
    /// Queue of runtime effects emitted by the reducer and drained by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Validated app registry handed in at mount time.
    pub config: StoredValue<ShellConfig>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components.
pub fn ShellProvider(
    /// Validated app registry for this shell instance.
    config: ShellConfig,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(ShellState::default());
    let session = create_rw_signal(Option::<PointerSession>::None);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let config = store_value(config);

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut shell = state.get_untracked();
        let mut gesture = session.get_untracked();
        let previous_shell = shell.clone();
        let previous_gesture = gesture.clone();

        let new_effects = reduce_shell(&mut shell, &mut gesture, action);
        // Only write back on real change; pointer-move storms would
        // otherwise re-render every frame even when clamped to a no-op.
        if shell != previous_shell {
            state.set(shell);
        }
        if gesture != previous_gesture {
            session.set(gesture);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    provide_context(ShellRuntimeContext {
        state,
        session,
        effects,
        config,
        dispatch,
    });

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
