//! Centralized icon abstraction for the shell chrome.
//!
//! Shell components reference semantic [`IconName`] values instead of
//! embedding raw SVG snippets; [`Icon`] is the single renderer. The catalog
//! covers the window controls, launcher affordances, and the built-in apps.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Close-window control glyph.
    Dismiss,
    /// Maximize-window control glyph.
    WindowMaximize,
    /// Restore-window control glyph.
    WindowRestore,
    /// Enter-fullscreen control glyph.
    FullscreenEnter,
    /// Exit-fullscreen control glyph.
    FullscreenExit,
    /// Search overlay affordance glyph.
    Search,
    /// Built-in Settings app glyph.
    Settings,
    /// Generic application tile glyph.
    AppTile,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Dismiss => "dismiss",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::FullscreenEnter => "fullscreen-enter",
            Self::FullscreenExit => "fullscreen-exit",
            Self::Search => "search",
            Self::Settings => "settings",
            Self::AppTile => "app-tile",
        }
    }

    /// Raw SVG body markup for the icon (24px grid, `currentColor` fill).
    fn svg_body(self) -> &'static str {
        match self {
            Self::Dismiss => {
                r#"<path d="M5.3 5.3a.75.75 0 0 1 1.06 0L12 10.94l5.64-5.64a.75.75 0 1 1 1.06 1.06L13.06 12l5.64 5.64a.75.75 0 1 1-1.06 1.06L12 13.06l-5.64 5.64a.75.75 0 0 1-1.06-1.06L10.94 12 5.3 6.36a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::FullscreenEnter => {
                r#"<path d="M13.75 3a.75.75 0 0 0 0 1.5h4.69l-5.47 5.47a.75.75 0 1 0 1.06 1.06l5.47-5.47v4.69a.75.75 0 0 0 1.5 0V3.75a.75.75 0 0 0-.75-.75h-6.5Zm-3.78 9.97a.75.75 0 0 1 1.06 1.06L5.56 19.5h4.69a.75.75 0 0 1 0 1.5H3.75a.75.75 0 0 1-.75-.75v-6.5a.75.75 0 0 1 1.5 0v4.69l5.47-5.47Z"/>"#
            }
            Self::FullscreenExit => {
                r#"<path d="M19.78 3.16a.75.75 0 0 1 1.06 1.06l-5.47 5.47h4.69a.75.75 0 0 1 0 1.5h-6.5a.75.75 0 0 1-.75-.75v-6.5a.75.75 0 0 1 1.5 0v4.69l5.47-5.47ZM3.19 13.56a.75.75 0 0 1 .75-.75h6.5c.41 0 .75.34.75.75v6.5a.75.75 0 0 1-1.5 0v-4.69l-5.47 5.47a.75.75 0 0 1-1.06-1.06l5.47-5.47H3.94a.75.75 0 0 1-.75-.75Z"/>"#
            }
            Self::Search => {
                r#"<path d="M10 2.5a7.5 7.5 0 1 0 4.55 13.46l4.75 4.75a.75.75 0 1 0 1.06-1.06l-4.75-4.75A7.5 7.5 0 0 0 10 2.5ZM4 10a6 6 0 1 1 12 0 6 6 0 0 1-12 0Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M12 2a1 1 0 0 1 .98.8l.25 1.2a8.1 8.1 0 0 1 1.74.72l1.06-.64a1 1 0 0 1 1.24.15l1.58 1.58a1 1 0 0 1 .15 1.24l-.64 1.06c.3.55.54 1.13.72 1.74l1.2.25a1 1 0 0 1 .8.98v2.24a1 1 0 0 1-.8.98l-1.2.25a8.1 8.1 0 0 1-.72 1.74l.64 1.06a1 1 0 0 1-.15 1.24l-1.58 1.58a1 1 0 0 1-1.24.15l-1.06-.64a8.1 8.1 0 0 1-1.74.72l-.25 1.2a1 1 0 0 1-.98.8H9.76a1 1 0 0 1-.98-.8l-.25-1.2a8.1 8.1 0 0 1-1.74-.72l-1.06.64a1 1 0 0 1-1.24-.15l-1.58-1.58a1 1 0 0 1-.15-1.24l.64-1.06a8.1 8.1 0 0 1-.72-1.74l-1.2-.25a1 1 0 0 1-.8-.98V9.76a1 1 0 0 1 .8-.98l1.2-.25c.18-.61.42-1.19.72-1.74l-.64-1.06a1 1 0 0 1 .15-1.24l1.58-1.58a1 1 0 0 1 1.24-.15l1.06.64c.55-.3 1.13-.54 1.74-.72l.25-1.2A1 1 0 0 1 9.76 2H12Zm-1 6a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#
            }
            Self::AppTile => {
                r#"<path d="M5.25 3A2.25 2.25 0 0 0 3 5.25v4.5C3 10.99 4 12 5.25 12h4.5C10.99 12 12 11 12 9.75v-4.5C12 4.01 11 3 9.75 3h-4.5ZM4.5 5.25c0-.41.34-.75.75-.75h4.5c.41 0 .75.34.75.75v4.5c0 .41-.34.75-.75.75h-4.5a.75.75 0 0 1-.75-.75v-4.5ZM5.25 13A2.25 2.25 0 0 0 3 15.25v3.5C3 19.99 4 21 5.25 21h3.5C9.99 21 11 20 11 18.75v-3.5C11 14.01 10 13 8.75 13h-3.5Zm-.75 2.25c0-.41.34-.75.75-.75h3.5c.41 0 .75.34.75.75v3.5c0 .41-.34.75-.75.75h-3.5a.75.75 0 0 1-.75-.75v-3.5ZM13 15.25A2.25 2.25 0 0 1 15.25 13h3.5C19.99 13 21 14 21 15.25v3.5C21 19.99 20 21 18.75 21h-3.5A2.25 2.25 0 0 1 13 18.75v-3.5Zm2.25-.75a.75.75 0 0 0-.75.75v3.5c0 .41.34.75.75.75h3.5c.41 0 .75-.34.75-.75v-3.5a.75.75 0 0 0-.75-.75h-3.5ZM17.25 4a.75.75 0 0 1 .75.75V7h2.25a.75.75 0 0 1 0 1.5H18v2.25a.75.75 0 0 1-1.5 0V8.5h-2.25a.75.75 0 0 1 0-1.5h2.25V4.75a.75.75 0 0 1 .75-.75Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (window controls).
    Xs,
    /// 16px standard icon (overlay rows).
    #[default]
    Sm,
    /// 20px medium icon (prominent controls).
    Md,
    /// 24px large icon (dock launchers).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an SVG icon from the shell icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
