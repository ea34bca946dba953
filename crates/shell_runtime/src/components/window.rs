use super::*;
use crate::model::{WindowMode, FULLSCREEN_Z_TIER, MAXIMIZED_Z_TIER};
use shell_ui::{Icon, IconName, IconSize};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn accepts_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn WindowSurface(app_id: AppId) -> impl IntoView {
    let runtime = use_shell_runtime();
    let surface_id = window_surface_dom_id(&app_id);

    let entry = {
        let app_id = app_id.clone();
        Signal::derive(move || runtime.state.get().window(&app_id).cloned())
    };
    let is_focused = {
        let app_id = app_id.clone();
        Signal::derive(move || runtime.state.get().focused() == Some(&app_id))
    };
    let definition = runtime.config.get_value().app(&app_id).cloned();
    let title = definition
        .as_ref()
        .map(|app| app.title.clone())
        .unwrap_or_else(|| app_id.to_string());

    let focus = {
        let app_id = app_id.clone();
        move |_| {
            if !is_focused.get_untracked() {
                runtime.dispatch_action(ShellAction::FocusApp {
                    app_id: app_id.clone(),
                });
            }
        }
    };
    let close = {
        let app_id = app_id.clone();
        move |_| {
            runtime.dispatch_action(ShellAction::CloseApp {
                app_id: app_id.clone(),
            })
        }
    };
    let toggle_maximize = {
        let app_id = app_id.clone();
        move |_| {
            runtime.dispatch_action(ShellAction::ToggleMaximize {
                app_id: app_id.clone(),
            })
        }
    };
    let toggle_fullscreen = {
        let app_id = app_id.clone();
        move |_| {
            let mode = entry.get_untracked().map(|win| win.window.mode);
            let action = if mode == Some(WindowMode::Fullscreen) {
                ShellAction::ExitFullscreen {
                    app_id: app_id.clone(),
                }
            } else {
                ShellAction::EnterFullscreen {
                    app_id: app_id.clone(),
                }
            };
            runtime.dispatch_action(action);
        }
    };
    let begin_move = {
        let app_id = app_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !accepts_primary_pointer(&ev) {
                return;
            }
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(ShellAction::BeginDrag {
                app_id: app_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let titlebar_double_click = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(ShellAction::ToggleMaximize {
                app_id: app_id.clone(),
            });
        }
    };

    let body = definition
        .as_ref()
        .map(|app| app.render.call(()))
        .unwrap_or_else(|| view! { <p>"Unknown app"</p> }.into_view());

    // Unmounting mid-gesture must release the pointer session too.
    let cleanup_app_id = app_id.clone();
    on_cleanup(move || {
        let owns_session = runtime
            .session
            .try_get_untracked()
            .flatten()
            .is_some_and(|session| session.app_id() == &cleanup_app_id);
        if owns_session {
            runtime.dispatch_action(ShellAction::PointerReleased);
        }
    });

    view! {
        <Show when=move || entry.get().is_some() fallback=|| ()>
            {
                let focus = focus.clone();
                let close = close.clone();
                let toggle_maximize = toggle_maximize.clone();
                let toggle_fullscreen = toggle_fullscreen.clone();
                let begin_move = begin_move.clone();
                let titlebar_double_click = titlebar_double_click.clone();
                let resize_app_id = app_id.clone();
                let surface_id = surface_id.clone();
                let title = title.clone();
                let body = body.clone();
                move || {
                    let win = entry.get().expect("window exists while shown");
                    // Stored geometry stays authoritative in every mode;
                    // maximized and fullscreen fill the viewport via CSS only.
                    let style = match win.window.mode {
                        WindowMode::Normal => format!(
                            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                            win.window.position.x,
                            win.window.position.y,
                            win.window.size.width,
                            win.window.size.height,
                            win.z_index
                        ),
                        WindowMode::Maximized => format!("z-index:{MAXIMIZED_Z_TIER};"),
                        WindowMode::Fullscreen => format!("z-index:{FULLSCREEN_Z_TIER};"),
                    };
                    let mode_token = match win.window.mode {
                        WindowMode::Normal => "normal",
                        WindowMode::Maximized => "maximized",
                        WindowMode::Fullscreen => "fullscreen",
                    };
                    let is_fullscreen = win.window.mode == WindowMode::Fullscreen;
                    let is_maximized = win.window.mode == WindowMode::Maximized;

                    let focus = focus.clone();
                    let close = close.clone();
                    let toggle_maximize = toggle_maximize.clone();
                    let toggle_fullscreen = toggle_fullscreen.clone();
                    let begin_move = begin_move.clone();
                    let titlebar_double_click = titlebar_double_click.clone();
                    let resize_app_id = resize_app_id.clone();
                    let surface_id = surface_id.clone();
                    let title = title.clone();
                    let body = body.clone();
                    view! {
                        <section
                            id=surface_id
                            class="window-surface"
                            style=style
                            tabindex="-1"
                            role="dialog"
                            aria-label=title.clone()
                            data-mode=mode_token
                            data-focused=is_focused.get().to_string()
                            on:pointerdown=focus
                        >
                            <header
                                class="titlebar"
                                on:pointerdown=begin_move
                                on:dblclick=titlebar_double_click
                            >
                                <span class="titlebar-title">{title}</span>
                                <div class="titlebar-controls">
                                    <button
                                        aria-label=if is_fullscreen {
                                            "Exit fullscreen"
                                        } else {
                                            "Enter fullscreen"
                                        }
                                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                        }
                                        on:mousedown=move |ev| stop_mouse_event(&ev)
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            toggle_fullscreen(ev);
                                        }
                                    >
                                        <Icon
                                            icon=if is_fullscreen {
                                                IconName::FullscreenExit
                                            } else {
                                                IconName::FullscreenEnter
                                            }
                                            size=IconSize::Xs
                                        />
                                    </button>
                                    <button
                                        aria-label=if is_maximized {
                                            "Restore window"
                                        } else {
                                            "Maximize window"
                                        }
                                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                        }
                                        on:mousedown=move |ev| stop_mouse_event(&ev)
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            toggle_maximize(ev);
                                        }
                                    >
                                        <Icon
                                            icon=if is_maximized {
                                                IconName::WindowRestore
                                            } else {
                                                IconName::WindowMaximize
                                            }
                                            size=IconSize::Xs
                                        />
                                    </button>
                                    <button
                                        aria-label="Close window"
                                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                        }
                                        on:mousedown=move |ev| stop_mouse_event(&ev)
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            close(ev);
                                        }
                                    >
                                        <Icon icon=IconName::Dismiss size=IconSize::Xs/>
                                    </button>
                                </div>
                            </header>
                            <div class="window-body">{body}</div>
                            <Show
                                when=move || {
                                    entry
                                        .get()
                                        .map(|win| win.window.is_normal())
                                        .unwrap_or(false)
                                }
                                fallback=|| ()
                            >
                                <ResizeGrip app_id=resize_app_id.clone()/>
                            </Show>
                        </section>
                    }
                        .into_view()
                }
            }
        </Show>
    }
}

#[component]
fn ResizeGrip(app_id: AppId) -> impl IntoView {
    let runtime = use_shell_runtime();

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !accepts_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(ShellAction::BeginResize {
            app_id: app_id.clone(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class="window-resize-grip"
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
