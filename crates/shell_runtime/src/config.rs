//! Shell configuration: the set of launchable apps.

use leptos::*;
use shell_contract::{AppDefinition, AppId};
use thiserror::Error;

use shell_ui::{Icon, IconName, IconSize};

/// App id reserved for the built-in settings app.
pub const SETTINGS_APP_ID: &str = "settings";

#[derive(Debug, Error, PartialEq, Eq)]
/// Rejected shell configuration.
pub enum ShellConfigError {
    /// Two apps were registered under the same id.
    #[error("duplicate app id `{0}`")]
    DuplicateApp(AppId),
}

#[derive(Clone)]
/// Validated, ordered app registry handed to the shell at mount time.
///
/// The built-in settings app is always present and always first; host apps
/// follow in registration order. Order is what the dock and search render.
pub struct ShellConfig {
    apps: Vec<AppDefinition>,
}

impl ShellConfig {
    /// Builds a configuration from host-provided apps plus the built-ins.
    pub fn new(apps: Vec<AppDefinition>) -> Result<Self, ShellConfigError> {
        let mut all = vec![settings_app()];
        all.extend(apps);
        for (index, app) in all.iter().enumerate() {
            if all[..index].iter().any(|other| other.id == app.id) {
                return Err(ShellConfigError::DuplicateApp(app.id.clone()));
            }
        }
        Ok(Self { apps: all })
    }

    /// All registered apps in dock order.
    pub fn apps(&self) -> &[AppDefinition] {
        &self.apps
    }

    /// Looks up one app by id.
    pub fn app(&self, app_id: &AppId) -> Option<&AppDefinition> {
        self.apps.iter().find(|app| &app.id == app_id)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            apps: vec![settings_app()],
        }
    }
}

fn settings_app() -> AppDefinition {
    AppDefinition::new(
        AppId::trusted(SETTINGS_APP_ID),
        "Settings",
        Callback::new(|()| {
            view! { <Icon icon=IconName::Settings size=IconSize::Md/> }.into_view()
        }),
        Callback::new(|()| view! { <shell_app_settings::SettingsApp/> }.into_view()),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn stub_app(raw: &str) -> AppDefinition {
        use leptos::IntoView;
        AppDefinition::new(
            AppId::trusted(raw),
            raw.to_owned(),
            Callback::new(|()| ().into_view()),
            Callback::new(|()| ().into_view()),
        )
    }

    #[test]
    fn settings_is_always_registered_first() {
        let config = ShellConfig::new(vec![stub_app("notes")]).unwrap();
        let ids: Vec<&str> = config.apps().iter().map(|app| app.id.as_str()).collect();
        assert_eq!(ids, vec![SETTINGS_APP_ID, "notes"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = ShellConfig::new(vec![stub_app("notes"), stub_app("notes")]);
        assert_eq!(
            result.err(),
            Some(ShellConfigError::DuplicateApp(AppId::trusted("notes")))
        );
    }

    #[test]
    fn reregistering_the_builtin_id_is_rejected() {
        let result = ShellConfig::new(vec![stub_app(SETTINGS_APP_ID)]);
        assert!(result.is_err());
    }
}
