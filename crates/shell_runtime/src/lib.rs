pub mod components;
pub mod config;
pub mod model;
pub mod reducer;
pub mod registry;
pub mod runtime_context;

pub use components::{Shell, ShellVariant};
pub use config::{ShellConfig, ShellConfigError, SETTINGS_APP_ID};
pub use model::*;
pub use reducer::{reduce_shell, window_transition, RuntimeEffect, ShellAction, WindowAction};
pub use registry::ShellState;
pub use runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};
