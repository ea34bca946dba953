//! Presentational Leptos primitives for the shell chrome.
//!
//! The crate owns a small icon catalog and the structural markup primitives
//! the desktop shell composes: backdrop, window layer, header, dock, and
//! overlay surfaces. Everything here is declarative; state and interaction
//! logic live in `shell_runtime`. Each primitive emits a stable `data-ui-*`
//! DOM contract consumed by the shell CSS layers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopWindowLayer, DockBar, DockButton, HeaderBar, Heading, OverlayScrim,
    PageMain, Text, ToggleRow,
};

/// Convenience imports for crates composing the shell primitive set.
pub mod prelude {
    pub use crate::{
        DesktopBackdrop, DesktopWindowLayer, DockBar, DockButton, HeaderBar, Heading, Icon,
        IconName, IconSize, OverlayScrim, PageMain, Text, ToggleRow,
    };
}
