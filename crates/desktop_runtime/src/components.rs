//! Desktop shell UI composition and interaction surfaces.

mod icons_layer;
mod power_modal;
mod selection_box;
mod start_menu;
mod taskbar;
mod window;

use leptos::*;

use desktop_core::{
    model::{InstanceId, Point, PowerState},
    reducer::ShellAction,
};

use self::{
    icons_layer::IconsLayer, power_modal::PowerModal, selection_box::SelectionBox,
    taskbar::Taskbar, window::DesktopWindow,
};
use crate::runtime_context::use_shell_runtime;

pub(crate) const TASKBAR_HEIGHT_PX: i32 = 30;

pub(crate) fn window_dom_id(instance_id: InstanceId) -> String {
    format!("shell-window-{}", instance_id.0)
}

pub(crate) fn point_from_mouse_event(ev: &web_sys::MouseEvent) -> Point {
    Point {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

pub(crate) fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// Renders the full desktop shell: backdrop, icon layer, window stack,
/// marquee selection box, taskbar, and the power-off modal.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    // Live pointer tracking doubles as the marquee driver: while a selection
    // is active every move recomputes the overlapped icon set and dispatches
    // it, so icon focus always matches the last committed rectangle.
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = Point {
            x: ev.client_x(),
            y: ev.client_y(),
        };
        runtime.pointer.set(pointer);

        if let Some(origin) = state.get_untracked().selection_origin {
            let selected = runtime
                .icon_rects
                .with_value(|store| store.selected_ids(origin, pointer));
            runtime.dispatch_action(ShellAction::SelectIcons { icon_ids: selected });
        }
    };

    let on_pointer_up = move |_| {
        if state.get_untracked().selection_origin.is_some() {
            runtime.dispatch_action(ShellAction::EndSelect);
        }
    };

    let on_backdrop_down = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        runtime.dispatch_action(ShellAction::StartSelect {
            origin: point_from_mouse_event(&ev),
        });
    };

    let power_class = move || {
        if state.get().power_state == PowerState::Running {
            "desktop-shell"
        } else {
            "desktop-shell powering-down"
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class=power_class
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
        >
            <div class="desktop-backdrop" on:mousedown=on_backdrop_down></div>

            <IconsLayer />
            <SelectionBox />

            <div class="window-layer">
                <For
                    each=move || state.get().instances
                    key=|instance| instance.id.0
                    let:instance
                >
                    <DesktopWindow instance_id=instance.id />
                </For>
            </div>

            <Taskbar />
            <PowerModal />
        </div>
    }
}
