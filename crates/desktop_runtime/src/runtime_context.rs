//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the icon geometry
//! side store, and exposes the single dispatch entry point every component
//! goes through. UI composition stays in [`crate::components`].

use leptos::*;

use desktop_app_contract::Transports;
use desktop_core::{
    model::{Point, ShellState},
    reducer::{reduce_shell, ShellAction, ShellEffect},
    selection::IconRectStore,
};

use crate::{apps, host};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`]s.
pub struct ShellRuntimeContext {
    /// Reactive committed shell state snapshot.
    pub state: RwSignal<ShellState>,
    /// Measured icon rectangles; side collection, never part of the snapshot.
    pub icon_rects: StoredValue<IconRectStore>,
    /// Live pointer position in document coordinates.
    pub pointer: RwSignal<Point>,
    /// Injected application transports.
    pub transports: StoredValue<Transports>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }
}

fn run_effects(effects: Vec<ShellEffect>) {
    for effect in effects {
        match effect {
            ShellEffect::FocusWindowChrome(instance_id) => {
                host::focus_element_by_id(&crate::components::window_dom_id(instance_id));
            }
        }
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected transport bundle assembled by the entry layer.
    transports: Transports,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(ShellState::with_icons(apps::default_icons()));
    let icon_rects = store_value(IconRectStore::new());
    let pointer = create_rw_signal(Point { x: 0, y: 0 });
    let transports = store_value(transports);

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut shell = state.get_untracked();
        let previous = shell.clone();

        match reduce_shell(&mut shell, action) {
            Ok(effects) => {
                if shell != previous {
                    state.set(shell);
                }
                run_effects(effects);
            }
            // Invalid targets are expected UI event races; drop the action
            // and keep the previous snapshot.
            Err(err) => logging::warn!("shell reducer: {err}"),
        }
    });

    let runtime = ShellRuntimeContext {
        state,
        icon_rects,
        pointer,
        transports,
        dispatch,
    };

    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
