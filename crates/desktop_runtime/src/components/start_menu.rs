use super::*;
use desktop_core::launcher::start_menu_action;

use crate::apps;

#[component]
pub(super) fn StartMenu(open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_shell_runtime();

    let activate = move |symbol: &'static str| {
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            open.set(false);
            runtime.dispatch_action(start_menu_action(apps::app_registry(), symbol));
        }
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <nav class="start-menu" on:mousedown=|ev| ev.stop_propagation()>
                <ul class="start-menu-items">
                    {apps::START_MENU_ITEMS
                        .iter()
                        .copied()
                        .map(|symbol| {
                            view! {
                                <li>
                                    <button on:mousedown=activate(symbol)>{symbol}</button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <ul class="start-menu-power">
                    <li>
                        <button on:mousedown=activate("Log Off")>"Log Off"</button>
                    </li>
                    <li>
                        <button on:mousedown=activate("Turn Off Computer")>
                            "Turn Off Computer"
                        </button>
                    </li>
                </ul>
            </nav>
        </Show>
    }
}
