use super::*;
use shell_ui::OverlayScrim;

fn matches_query(query: &str, title: &str, app_id: &AppId) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&query) || app_id.as_str().contains(&query)
}

#[component]
/// Modal app search overlay, dismissed by scrim click or Escape.
pub(super) fn SearchOverlay() -> impl IntoView {
    let runtime = use_shell_runtime();
    let search_open = create_memo(move |_| runtime.state.get().search_open);
    let query = create_rw_signal(String::new());

    // Stale queries would flash on reopen.
    create_effect(move |_| {
        if search_open.get() {
            query.set(String::new());
        }
    });

    let results = move || {
        let query = query.get();
        runtime
            .config
            .get_value()
            .apps()
            .iter()
            .filter(|app| matches_query(&query, &app.title, &app.id))
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || search_open.get() fallback=|| ()>
            <OverlayScrim on_dismiss=Callback::new(move |_| {
                runtime.dispatch_action(ShellAction::CloseSearch);
            })>
                <div
                    class="search-panel"
                    role="dialog"
                    aria-label="App search"
                    on:mousedown=move |ev| ev.stop_propagation()
                >
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search apps"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <ul class="search-results" role="listbox">
                        {move || {
                            results()
                                .into_iter()
                                .map(|app| {
                                    let app_id = app.id.clone();
                                    view! {
                                        <li role="option">
                                            <button
                                                class="search-result"
                                                on:click=move |_| {
                                                    runtime.dispatch_action(ShellAction::OpenApp {
                                                        app_id: app_id.clone(),
                                                    });
                                                }
                                            >
                                                {app.icon.call(())}
                                                <span>{app.title.clone()}</span>
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </OverlayScrim>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query("", "Notes", &AppId::trusted("notes")));
        assert!(matches_query("   ", "Notes", &AppId::trusted("notes")));
    }

    #[test]
    fn query_matches_title_case_insensitively_and_raw_id() {
        let id = AppId::trusted("photo-viewer");
        assert!(matches_query("PHOTO", "Photos", &id));
        assert!(matches_query("viewer", "Photos", &id));
        assert!(!matches_query("terminal", "Photos", &id));
    }
}
