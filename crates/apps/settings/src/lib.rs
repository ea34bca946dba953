//! Built-in Settings app: shell appearance and behavior preferences.
//!
//! Preferences are window-local signals for now; the shell owns no settings
//! persistence layer, so the app is a self-contained preference surface.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use serde::{Deserialize, Serialize};
use shell_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum SettingsSection {
    Appearance,
    Behavior,
}

impl SettingsSection {
    fn label(self) -> &'static str {
        match self {
            Self::Appearance => "Appearance",
            Self::Behavior => "Behavior",
        }
    }
}

const SECTIONS: [SettingsSection; 2] = [SettingsSection::Appearance, SettingsSection::Behavior];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct ShellPreferences {
    reduced_motion: bool,
    high_contrast: bool,
    show_clock_seconds: bool,
    snap_double_click: bool,
}

impl Default for ShellPreferences {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            high_contrast: false,
            show_clock_seconds: false,
            snap_double_click: true,
        }
    }
}

#[component]
/// Settings app window contents.
pub fn SettingsApp() -> impl IntoView {
    let active_section = create_rw_signal(SettingsSection::Appearance);
    let preferences = create_rw_signal(ShellPreferences::default());

    view! {
        <div class="settings-app" data-app="settings">
            <nav class="settings-nav" aria-label="Settings sections">
                {SECTIONS
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="settings-nav-item"
                                data-active=move || (active_section.get() == section).to_string()
                                on:click=move |_| active_section.set(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="settings-body">
                <Show
                    when=move || active_section.get() == SettingsSection::Appearance
                    fallback=move || view! { <BehaviorSection preferences=preferences/> }
                >
                    <AppearanceSection preferences=preferences/>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn AppearanceSection(preferences: RwSignal<ShellPreferences>) -> impl IntoView {
    view! {
        <section>
            <Heading>"Appearance"</Heading>
            <Text>"Adjust how the shell chrome looks and moves."</Text>
            <ToggleRow
                label="Reduced motion"
                checked=Signal::derive(move || preferences.get().reduced_motion)
                on_toggle=Callback::new(move |value| {
                    preferences.update(|prefs| prefs.reduced_motion = value)
                })
            />
            <ToggleRow
                label="High contrast"
                checked=Signal::derive(move || preferences.get().high_contrast)
                on_toggle=Callback::new(move |value| {
                    preferences.update(|prefs| prefs.high_contrast = value)
                })
            />
            <ToggleRow
                label="Show seconds in clock"
                checked=Signal::derive(move || preferences.get().show_clock_seconds)
                on_toggle=Callback::new(move |value| {
                    preferences.update(|prefs| prefs.show_clock_seconds = value)
                })
            />
        </section>
    }
}

#[component]
fn BehaviorSection(preferences: RwSignal<ShellPreferences>) -> impl IntoView {
    view! {
        <section>
            <Heading>"Behavior"</Heading>
            <Text>"Control how windows respond to input."</Text>
            <ToggleRow
                label="Double-click title bar to maximize"
                checked=Signal::derive(move || preferences.get().snap_double_click)
                on_toggle=Callback::new(move |value| {
                    preferences.update(|prefs| prefs.snap_double_click = value)
                })
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preferences_default_to_motion_on_and_snap_enabled() {
        let prefs = ShellPreferences::default();
        assert_eq!(prefs.reduced_motion, false);
        assert_eq!(prefs.snap_double_click, true);
    }

    #[test]
    fn section_labels_are_stable() {
        let labels: Vec<&str> = SECTIONS.into_iter().map(SettingsSection::label).collect();
        assert_eq!(labels, vec!["Appearance", "Behavior"]);
    }
}
