use super::*;
use desktop_core::model::{FocusTarget, IconId, IconState};

use crate::{
    apps, host,
    icons::{IconSize, ShellIcon},
};

#[component]
pub(super) fn IconsLayer() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    view! {
        <div class="icons-layer">
            <For
                each=move || state.get().icons
                key=|icon| icon.id.0
                let:icon
            >
                <DesktopIcon icon_id=icon.id />
            </For>
        </div>
    }
}

#[component]
fn DesktopIcon(icon_id: IconId) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let icon = Signal::derive(move || {
        state
            .get()
            .icons
            .into_iter()
            .find(|icon| icon.id == icon_id)
    });
    // Selection highlight only renders while icons own the focus target, the
    // way a real desktop dims selection when a window takes focus.
    let display_focus = Signal::derive(move || {
        let shell = state.get();
        shell.focus_target == FocusTarget::Icon
            && shell
                .icons
                .iter()
                .any(|icon| icon.id == icon_id && icon.is_focus)
    });

    let node_ref = create_node_ref::<html::Div>();

    // First layout report; the store keeps the first write, and the resize
    // listener below refreshes it when the grid actually moves.
    create_effect(move |_| {
        if let Some(element) = node_ref.get() {
            let rect = host::element_rect(&element);
            runtime
                .icon_rects
                .update_value(|store| store.measure(icon_id, rect));
        }
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        if let Some(element) = node_ref.get_untracked() {
            let rect = host::element_rect(&element);
            runtime
                .icon_rects
                .update_value(|store| store.remeasure(icon_id, rect));
        }
    });
    on_cleanup(move || resize_listener.remove());

    let select = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(ShellAction::FocusIcon { icon_id });
    };
    let activate = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        if let Some(IconState { app, .. }) = icon.get_untracked() {
            runtime.dispatch_action(apps::open_action(app));
        }
    };

    view! {
        <Show when=move || icon.get().is_some() fallback=|| ()>
            {move || {
                let current = icon.get().expect("icon exists while shown");
                let focus_class = if display_focus.get() { " focused" } else { "" };

                view! {
                    <div
                        class=format!("desktop-icon{}", focus_class)
                        node_ref=node_ref
                        on:mousedown=select
                        on:dblclick=activate
                    >
                        <span class="desktop-icon-art">
                            <ShellIcon icon=apps::app_icon_name(current.app) size=IconSize::Lg />
                        </span>
                        <span class="desktop-icon-label">{current.label.clone()}</span>
                    </div>
                }
                    .into_view()
            }}
        </Show>
    }
}
