//! Browser entry for the portfolio desktop shell.

use leptos::*;

use desktop_runtime::{apps, DesktopProvider, DesktopShell};

#[component]
fn App() -> impl IntoView {
    view! {
        <DesktopProvider transports=apps::canned_transports()>
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Mounts the shell into the document body.
pub fn mount() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
