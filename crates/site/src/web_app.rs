use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use shell_contract::{AppDefinition, AppId};
use shell_runtime::{Shell, ShellConfig, ShellProvider, ShellVariant};
use shell_ui::{Heading, Icon, IconName, IconSize, Text};

fn notes_app() -> AppDefinition {
    AppDefinition::new(
        AppId::trusted("notes"),
        "Notes",
        Callback::new(|()| {
            view! { <Icon icon=IconName::AppTile size=IconSize::Md/> }.into_view()
        }),
        Callback::new(|()| {
            view! {
                <div class="notes-app">
                    <Heading>"Notes"</Heading>
                    <Text>"Scratchpad content lives here."</Text>
                </div>
            }
            .into_view()
        }),
    )
}

fn about_app() -> AppDefinition {
    AppDefinition::new(
        AppId::trusted("about"),
        "About",
        Callback::new(|()| {
            view! { <Icon icon=IconName::AppTile size=IconSize::Md/> }.into_view()
        }),
        Callback::new(|()| {
            view! {
                <div class="about-app">
                    <Heading>"About this shell"</Heading>
                    <Text>"A small windowed desktop built with Leptos."</Text>
                </div>
            }
            .into_view()
        }),
    )
}

fn site_shell_config() -> ShellConfig {
    match ShellConfig::new(vec![notes_app(), about_app()]) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("shell config rejected: {err}");
            ShellConfig::default()
        }
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Shell"/>
        <Meta name="description" content="A desktop-style shell with draggable app windows."/>

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry/>
                    <Route path="/page" view=PageEntry/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <ShellProvider config=site_shell_config()>
            <Shell variant=ShellVariant::Desktop/>
        </ShellProvider>
    }
}

#[component]
/// Windowless fallback route for small viewports and embeds.
pub fn PageEntry() -> impl IntoView {
    view! {
        <ShellProvider config=site_shell_config()>
            <Shell variant=ShellVariant::Page/>
        </ShellProvider>
    }
}
