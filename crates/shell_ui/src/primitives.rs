//! Structural, typography, and control primitives for the shell chrome.

use leptos::ev::MouseEvent;
use leptos::*;

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

#[component]
/// Desktop wallpaper and backdrop host.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Persistent top chrome bar.
pub fn HeaderBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("shell-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="header-bar"
        >
            {children()}
        </header>
    }
}

#[component]
/// Bottom dock/launcher bar.
pub fn DockBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("shell-dock", layout_class)
            data-ui-primitive="true"
            data-ui-kind="dock-bar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Dock launcher button.
pub fn DockButton(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    /// Marks the button for the currently focused app.
    #[prop(optional, into)]
    active: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="dock-button"
            title=title
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="dock-button"
            data-active=move || active.get().to_string()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Dimmed click-to-dismiss layer behind overlays.
pub fn OverlayScrim(
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="overlay-scrim"
            data-ui-primitive="true"
            data-ui-kind="overlay-scrim"
            on:mousedown=move |ev| {
                if let Some(on_dismiss) = on_dismiss.as_ref() {
                    on_dismiss.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Main content region for the single-page shell variant.
pub fn PageMain(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Whether the region scrolls its own overflow.
    #[prop(default = true)]
    scrollable: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <main
            class=merge_layout_class("shell-page-main", layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-main"
            data-scrollable=scrollable.to_string()
        >
            {children()}
        </main>
    }
}

#[component]
/// Section heading text.
pub fn Heading(children: Children) -> impl IntoView {
    view! {
        <h2 class="ui-heading" data-ui-primitive="true" data-ui-kind="heading">
            {children()}
        </h2>
    }
}

#[component]
/// Body copy text.
pub fn Text(children: Children) -> impl IntoView {
    view! {
        <p class="ui-text" data-ui-primitive="true" data-ui-kind="text">
            {children()}
        </p>
    }
}

#[component]
/// Labeled on/off switch row.
pub fn ToggleRow(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="ui-toggle-row" data-ui-primitive="true" data-ui-kind="toggle-row">
            <span class="ui-toggle-label">{label}</span>
            <button
                type="button"
                role="switch"
                class="ui-switch"
                aria-checked=move || checked.get().to_string()
                on:click=move |_| on_toggle.call(!checked.get_untracked())
            >
                <span class="ui-switch-thumb" aria-hidden="true"></span>
            </button>
        </div>
    }
}
