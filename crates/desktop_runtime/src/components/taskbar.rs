use super::*;
use std::time::Duration;

use desktop_core::{focus::focused_window_id, launcher::taskbar_action};

use super::start_menu::StartMenu;
use crate::{
    apps,
    icons::{IconName, IconSize, ShellIcon},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClock {
    hour: u32,
    minute: u32,
}

impl TaskbarClock {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        Self { hour: 0, minute: 0 }
    }
}

fn format_clock(clock: TaskbarClock) -> String {
    let mut hour = clock.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if clock.hour >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, clock.minute, suffix)
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let menu_open = create_rw_signal(false);

    let clock = create_rw_signal(TaskbarClock::now());
    if let Ok(handle) = set_interval_with_handle(
        move || clock.set(TaskbarClock::now()),
        Duration::from_secs(30),
    ) {
        on_cleanup(move || handle.clear());
    }

    // Any press outside the start button/menu dismisses the menu; the button
    // and menu items stop propagation before this fires.
    let dismiss_listener = window_event_listener(ev::mousedown, move |_| {
        if menu_open.get_untracked() {
            menu_open.set(false);
        }
    });
    on_cleanup(move || dismiss_listener.remove());

    let on_bar_down = move |_| runtime.dispatch_action(ShellAction::FocusDesktop);
    let toggle_menu = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        menu_open.update(|open| *open = !*open);
    };

    view! {
        <footer
            class="taskbar"
            style=format!("height:{TASKBAR_HEIGHT_PX}px;")
            on:mousedown=on_bar_down
        >
            <button
                class=move || {
                    if menu_open.get() {
                        "start-button open"
                    } else {
                        "start-button"
                    }
                }
                aria-label="Start"
                on:mousedown=toggle_menu
            >
                <ShellIcon icon=IconName::Launcher size=IconSize::Sm />
                <span>"start"</span>
            </button>

            <StartMenu open=menu_open />

            <div class="taskbar-windows">
                <For
                    each=move || state.get().instances
                    key=|instance| instance.id.0
                    let:instance
                >
                    {{
                        let instance_id = instance.id;
                        let kind = instance.descriptor.component;
                        let title = instance.descriptor.title;
                        let active = Signal::derive(move || {
                            focused_window_id(&state.get()) == Some(instance_id)
                        });
                        let on_down = move |ev: web_sys::MouseEvent| {
                            stop_mouse_event(&ev);
                            let action =
                                taskbar_action(&state.get_untracked(), instance_id);
                            runtime.dispatch_action(action);
                        };
                        view! {
                            <button
                                class=move || {
                                    if active.get() {
                                        "taskbar-window-button active"
                                    } else {
                                        "taskbar-window-button"
                                    }
                                }
                                on:mousedown=on_down
                            >
                                <ShellIcon icon=apps::app_icon_name(kind) size=IconSize::Sm />
                                <span>{title}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-tray">
                <span class="taskbar-clock">{move || format_clock(clock.get())}</span>
            </div>
        </footer>
    }
}
