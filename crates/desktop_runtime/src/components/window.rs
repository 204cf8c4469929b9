use super::*;
use desktop_app_contract::AppMountContext;
use desktop_core::focus::focused_window_id;

use crate::{
    apps,
    icons::{IconName, IconSize, ShellIcon},
};

/// Ephemeral titlebar drag session; lives only in this component and is fully
/// reset on pointer-up/cancel, so an interrupted drag never leaves partial
/// position state anywhere shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragSession {
    pointer_start: Point,
    position_start: Point,
}

fn cascade_position(instance_id: InstanceId) -> Point {
    let step = ((instance_id.0 % 8) as i32) * 26;
    Point {
        x: 60 + step,
        y: 48 + step,
    }
}

#[component]
pub(super) fn DesktopWindow(instance_id: InstanceId) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let instance = Signal::derive(move || {
        state
            .get()
            .instances
            .into_iter()
            .find(|inst| inst.id == instance_id)
    });
    let is_active = Signal::derive(move || focused_window_id(&state.get()) == Some(instance_id));

    // Window position is visual-only and component-local; the store tracks
    // stacking and flags, never pixel coordinates.
    let position = create_rw_signal(cascade_position(instance_id));
    let drag = create_rw_signal(None::<DragSession>);

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if let Some(session) = drag.get_untracked() {
            position.set(Point {
                x: session.position_start.x + (ev.client_x() - session.pointer_start.x),
                y: session.position_start.y + (ev.client_y() - session.pointer_start.y),
            });
        }
    });
    let up_listener = window_event_listener(ev::pointerup, move |_| drag.set(None));
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| drag.set(None));
    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
    });

    let focus = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(ShellAction::Focus { instance_id });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let maximized = instance.get_untracked().map(|i| i.maximized).unwrap_or(true);
        if maximized {
            return;
        }
        drag.set(Some(DragSession {
            pointer_start: Point {
                x: ev.client_x(),
                y: ev.client_y(),
            },
            position_start: position.get_untracked(),
        }));
    };

    // Chrome buttons act only for the derived active window, so a stale
    // handler on a background window cannot hit the foreground one.
    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        if is_active.get_untracked() {
            runtime.dispatch_action(ShellAction::Minimize { instance_id });
        }
    };
    let toggle_maximize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        if is_active.get_untracked() {
            runtime.dispatch_action(ShellAction::ToggleMaximize { instance_id });
        }
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        if is_active.get_untracked() {
            runtime.dispatch_action(ShellAction::Close { instance_id });
        }
    };

    view! {
        <Show when=move || instance.get().is_some() fallback=|| ()>
            {move || {
                let inst = instance.get().expect("window exists while shown");
                let pos = position.get();
                let style = if inst.maximized {
                    format!(
                        "left:0;top:0;width:100%;height:calc(100% - {TASKBAR_HEIGHT_PX}px);z-index:{};",
                        inst.z_index
                    )
                } else {
                    format!(
                        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                        pos.x,
                        pos.y,
                        inst.descriptor.default_size.w,
                        inst.descriptor.default_size.h,
                        inst.z_index
                    )
                };
                let active_class = if is_active.get() { " active" } else { "" };
                let minimized_class = if inst.minimized { " minimized" } else { "" };
                let maximized_class = if inst.maximized { " maximized" } else { "" };

                view! {
                    <section
                        id=window_dom_id(instance_id)
                        class=format!(
                            "desktop-window app-{}{}{}{}",
                            inst.descriptor.component.token(),
                            active_class,
                            minimized_class,
                            maximized_class
                        )
                        style=style
                        tabindex="-1"
                        role="dialog"
                        aria-label=inst.descriptor.title
                        on:mousedown=focus
                    >
                        <header class="titlebar" on:pointerdown=begin_move>
                            <div class="titlebar-title">
                                <ShellIcon
                                    icon=apps::app_icon_name(inst.descriptor.component)
                                    size=IconSize::Sm
                                />
                                <span>{inst.descriptor.title}</span>
                            </div>
                            <div class="titlebar-controls">
                                <button
                                    aria-label="Minimize window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:click=minimize
                                >
                                    <ShellIcon icon=IconName::WindowMinimize size=IconSize::Xs />
                                </button>
                                <button
                                    aria-label=if inst.maximized {
                                        "Restore window"
                                    } else {
                                        "Maximize window"
                                    }
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:click=toggle_maximize
                                >
                                    <ShellIcon
                                        icon=if inst.maximized {
                                            IconName::WindowRestore
                                        } else {
                                            IconName::WindowMaximize
                                        }
                                        size=IconSize::Xs
                                    />
                                </button>
                                <button
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:click=close
                                >
                                    <ShellIcon icon=IconName::Dismiss size=IconSize::Xs />
                                </button>
                            </div>
                        </header>
                        <div class="window-body">
                            <WindowBody instance_id=instance_id />
                        </div>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
fn WindowBody(instance_id: InstanceId) -> impl IntoView {
    let runtime = use_shell_runtime();

    let contents = runtime
        .state
        .get_untracked()
        .instances
        .iter()
        .find(|inst| inst.id == instance_id)
        .map(|inst| {
            apps::render_app(
                inst,
                AppMountContext {
                    instance_id: inst.id.0,
                    inject_props: inst.inject_props.clone(),
                    transports: runtime.transports.get_value(),
                },
            )
        })
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! { <div class="window-body-content">{contents}</div> }
}
