use super::*;

fn modal_copy(power_state: PowerState) -> Option<(&'static str, &'static str)> {
    match power_state {
        PowerState::Running => None,
        PowerState::ConfirmLogOff => Some(("Log Off Windows", "Log Off")),
        PowerState::ConfirmTurnOff => Some(("Turn off computer", "Turn Off")),
    }
}

#[component]
pub(super) fn PowerModal() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    // Confirming keeps the chosen power state; the shell root's
    // `powering-down` class carries the visual from there. Only this local
    // flag hides the dialog, and it resets whenever the flow restarts.
    let confirmed = create_rw_signal(false);
    create_effect(move |_| {
        if state.get().power_state == PowerState::Running {
            confirmed.set(false);
        }
    });

    let copy = Signal::derive(move || modal_copy(state.get().power_state));
    let visible = move || copy.get().is_some() && !confirmed.get();

    let cancel = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(ShellAction::CancelPowerOff);
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        confirmed.set(true);
    };

    view! {
        <Show when=visible fallback=|| ()>
            {move || {
                let (title, confirm_label) = copy.get().expect("copy exists while shown");
                view! {
                    <div class="power-modal-backdrop">
                        <div class="power-modal" role="alertdialog" aria-label=title>
                            <header class="power-modal-title">{title}</header>
                            <div class="power-modal-buttons">
                                <button on:click=confirm>{confirm_label}</button>
                                <button on:click=cancel>"Cancel"</button>
                            </div>
                        </div>
                    </div>
                }
                    .into_view()
            }}
        </Show>
    }
}
