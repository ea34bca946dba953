//! Shell UI composition and interaction surfaces.

mod launcher;
mod search;
mod window;

use std::time::Duration;

use leptos::*;
use wasm_bindgen::JsCast;

use self::{launcher::Dock, search::SearchOverlay, window::WindowSurface};
use crate::{
    model::PointerPosition,
    reducer::{RuntimeEffect, ShellAction},
    runtime_context::use_shell_runtime,
};
use shell_contract::AppId;
use shell_ui::{DesktopBackdrop, DesktopWindowLayer, HeaderBar, Heading, PageMain};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Presentation variants of the shell.
pub enum ShellVariant {
    /// Full desktop: draggable windows, dock, and search overlay.
    #[default]
    Desktop,
    /// Chrome-only single page that renders app content inline, for embeds
    /// and hosts without room for a window stack.
    Page,
}

#[component]
/// Mounts the shell in the requested presentation variant.
///
/// Must be rendered inside [`ShellProvider`].
pub fn Shell(#[prop(optional)] variant: ShellVariant) -> impl IntoView {
    match variant {
        ShellVariant::Desktop => view! { <DesktopShell/> }.into_view(),
        ShellVariant::Page => view! { <PageShell/> }.into_view(),
    }
}

fn window_surface_dom_id(app_id: &AppId) -> String {
    format!("window-surface-{app_id}")
}

fn focus_element_by_id(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = element.focus();
    true
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Drains reducer-emitted runtime effects in order.
fn install_effect_executor() {
    let runtime = use_shell_runtime();
    // Clear the queue before processing so nested dispatches enqueue a fresh
    // batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            match effect {
                RuntimeEffect::FocusWindowSurface(app_id) => {
                    let _ = focus_element_by_id(&window_surface_dom_id(&app_id));
                }
            }
        }
    });
}

#[component]
/// Renders the full desktop shell UI and processes queued [`RuntimeEffect`] values.
fn DesktopShell() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    install_effect_executor();

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if state.get_untracked().search_open {
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(ShellAction::CloseSearch);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.session.get_untracked().is_some() {
            runtime.dispatch_action(ShellAction::PointerMoved {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.session.get_untracked().is_some() {
            runtime.dispatch_action(ShellAction::PointerReleased);
        }
    };

    view! {
        <div
            id="shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <HeaderBar>
                <span data-ui-slot="shell-title">"Shell"</span>
                <ShellClock/>
            </HeaderBar>
            <DesktopBackdrop>
                <div
                    data-ui-slot="dismiss-layer"
                    on:mousedown=move |_| {
                        if state.get_untracked().search_open {
                            runtime.dispatch_action(ShellAction::CloseSearch);
                        }
                    }
                />
                <DesktopWindowLayer>
                    <For
                        each=move || {
                            state
                                .get()
                                .windows()
                                .iter()
                                .map(|entry| entry.app_id.clone())
                                .collect::<Vec<_>>()
                        }
                        key=|app_id| app_id.clone()
                        let:app_id
                    >
                        <WindowSurface app_id=app_id/>
                    </For>
                </DesktopWindowLayer>
                <SearchOverlay/>
            </DesktopBackdrop>
            <Dock/>
        </div>
    }
}

#[component]
/// Chrome-only variant: header plus every configured app rendered inline.
fn PageShell() -> impl IntoView {
    let runtime = use_shell_runtime();
    let apps = runtime.config.get_value().apps().to_vec();

    view! {
        <div class="page-shell" data-ui-kind="page-root">
            <HeaderBar>
                <span data-ui-slot="shell-title">"Shell"</span>
                <ShellClock/>
            </HeaderBar>
            <PageMain>
                {apps
                    .into_iter()
                    .map(|app| {
                        let title = app.title.clone();
                        let body = app.render.call(());
                        view! {
                            <section class="page-app" data-app-id=app.id.to_string()>
                                <Heading>{title}</Heading>
                                {body}
                            </section>
                        }
                    })
                    .collect_view()}
            </PageMain>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }

    fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[component]
fn ShellClock() -> impl IntoView {
    let snapshot = create_rw_signal(ClockSnapshot::now());
    if let Ok(handle) = set_interval_with_handle(
        move || snapshot.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || handle.clear());
    }

    view! {
        <time class="shell-clock" data-ui-slot="clock">
            {move || snapshot.get().label()}
        </time>
    }
}
