pub mod apps;
pub mod components;
pub mod host;
pub mod icons;
pub mod runtime_context;

pub use components::DesktopShell;
pub use runtime_context::{use_shell_runtime, DesktopProvider, ShellRuntimeContext};
