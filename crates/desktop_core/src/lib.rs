//! Pure window-management core for the desktop shell: the reducer that owns
//! window stacking, focus, icon selection, and power state, plus the derived
//! focus arbiter and marquee-selection geometry. No UI dependency; the shell
//! runtime binds this to the browser.

pub mod focus;
pub mod launcher;
pub mod model;
pub mod reducer;
pub mod selection;

pub use focus::{focused_window_id, top_window_id};
pub use launcher::{start_menu_action, taskbar_action, APPLICATION_NOT_FOUND_MESSAGE};
pub use model::*;
pub use reducer::{reduce_shell, ShellAction, ShellEffect, ShellError};
pub use selection::{IconRectStore, SelectionBounds};
