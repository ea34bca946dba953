use super::*;
use shell_ui::{DockBar, DockButton, Icon, IconName, IconSize};

#[component]
/// Bottom dock: one launcher button per configured app plus the search toggle.
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_shell_runtime();
    let apps = runtime.config.get_value().apps().to_vec();

    view! {
        <DockBar>
            {apps
                .into_iter()
                .map(|app| {
                    let app_id = app.id.clone();
                    let active = {
                        let app_id = app_id.clone();
                        Signal::derive(move || {
                            runtime.state.get().focused() == Some(&app_id)
                        })
                    };
                    let on_click = Callback::new(move |_| {
                        runtime.dispatch_action(ShellAction::OpenApp {
                            app_id: app_id.clone(),
                        });
                    });
                    view! {
                        <DockButton
                            title=app.title.clone()
                            aria_label=format!("Open {}", app.title)
                            active=active
                            on_click=on_click
                        >
                            {app.icon.call(())}
                        </DockButton>
                    }
                })
                .collect_view()}
            <DockButton
                aria_label="Search apps"
                on_click=Callback::new(move |_| {
                    runtime.dispatch_action(ShellAction::OpenSearch);
                })
            >
                <Icon icon=IconName::Search size=IconSize::Md/>
            </DockButton>
        </DockBar>
    }
}
