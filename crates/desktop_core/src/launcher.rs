//! Taskbar and start-menu bindings that translate launcher gestures into
//! reducer actions.

use serde_json::json;

use desktop_app_contract::{AppDescriptor, AppKind, FALLBACK_ERROR_DESCRIPTOR};

use crate::focus::focused_window_id;
use crate::model::{InstanceId, PowerMode, ShellState};
use crate::reducer::ShellAction;

/// Message shown by the error window when a start-menu entry resolves to
/// nothing.
pub const APPLICATION_NOT_FOUND_MESSAGE: &str = "C:\\\nApplication not found";

/// Action for a click on a window's taskbar button: the active window's own
/// button hides it, any other button brings that window to the front.
pub fn taskbar_action(state: &ShellState, instance_id: InstanceId) -> ShellAction {
    if focused_window_id(state) == Some(instance_id) {
        ShellAction::Minimize { instance_id }
    } else {
        ShellAction::Focus { instance_id }
    }
}

/// Resolves a start-menu entry by its symbolic name.
///
/// Known application symbols open their descriptor; the power entries enter
/// the confirmation flow; anything else opens the generic error window with a
/// "file not found"-style message rather than failing.
pub fn start_menu_action(registry: &[AppDescriptor], symbol: &str) -> ShellAction {
    match symbol {
        "Log Off" => {
            return ShellAction::PowerOff {
                mode: PowerMode::LogOff,
            }
        }
        "Turn Off Computer" => {
            return ShellAction::PowerOff {
                mode: PowerMode::TurnOff,
            }
        }
        _ => {}
    }

    match resolve_symbol(symbol) {
        Some(kind) => ShellAction::Open {
            descriptor: descriptor_for(registry, kind)
                .unwrap_or(FALLBACK_ERROR_DESCRIPTOR),
            inject_props: None,
        },
        None => ShellAction::Open {
            descriptor: descriptor_for(registry, AppKind::ErrorBox)
                .unwrap_or(FALLBACK_ERROR_DESCRIPTOR),
            inject_props: Some(json!({ "message": APPLICATION_NOT_FOUND_MESSAGE })),
        },
    }
}

/// Looks up the startup descriptor for an application kind.
pub fn descriptor_for(registry: &[AppDescriptor], kind: AppKind) -> Option<AppDescriptor> {
    registry
        .iter()
        .find(|descriptor| descriptor.component == kind)
        .copied()
}

fn resolve_symbol(symbol: &str) -> Option<AppKind> {
    match symbol {
        "Internet" | "Internet Explorer" => Some(AppKind::InternetExplorer),
        "E-mail" | "Outlook Express" => Some(AppKind::OutlookExpress),
        "Minesweeper" => Some(AppKind::Minesweeper),
        "My Computer" => Some(AppKind::MyComputer),
        "Notepad" => Some(AppKind::Notepad),
        "Winamp" => Some(AppKind::Winamp),
        "Paint" => Some(AppKind::Paint),
        "Command Prompt" | "Cmd" => Some(AppKind::CommandPrompt),
        "ClippyChat" | "AI Expert Clippy" => Some(AppKind::ClippyChat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::reduce_shell;
    use desktop_app_contract::WindowSize;

    fn registry() -> Vec<AppDescriptor> {
        vec![
            AppDescriptor {
                component: AppKind::Notepad,
                title: "Notepad",
                icon: "notepad",
                default_size: WindowSize { w: 660, h: 500 },
                multi_instance: false,
            },
            AppDescriptor {
                component: AppKind::ErrorBox,
                title: "C:\\",
                icon: "error-box",
                default_size: WindowSize { w: 380, h: 150 },
                multi_instance: true,
            },
        ]
    }

    #[test]
    fn taskbar_click_on_active_window_minimizes_it() {
        let mut state = ShellState::default();
        let registry = registry();
        reduce_shell(&mut state, start_menu_action(&registry, "Notepad")).expect("open");
        let win = state.instances[0].id;

        assert_eq!(
            taskbar_action(&state, win),
            ShellAction::Minimize { instance_id: win }
        );
    }

    #[test]
    fn taskbar_click_on_background_window_focuses_it() {
        let mut state = ShellState::default();
        let registry = registry();
        reduce_shell(&mut state, start_menu_action(&registry, "Notepad")).expect("open");
        let win = state.instances[0].id;
        reduce_shell(&mut state, ShellAction::FocusDesktop).expect("desktop");

        assert_eq!(
            taskbar_action(&state, win),
            ShellAction::Focus { instance_id: win }
        );
    }

    #[test]
    fn known_symbols_resolve_to_their_descriptor() {
        let registry = registry();
        let action = start_menu_action(&registry, "Notepad");
        match action {
            ShellAction::Open {
                descriptor,
                inject_props,
            } => {
                assert_eq!(descriptor.component, AppKind::Notepad);
                assert_eq!(inject_props, None);
            }
            other => panic!("expected open, got {other:?}"),
        }
    }

    #[test]
    fn symbol_aliases_share_a_kind() {
        let registry = registry();
        let by_short = start_menu_action(&registry, "Cmd");
        let by_long = start_menu_action(&registry, "Command Prompt");
        assert_eq!(by_short, by_long);
    }

    #[test]
    fn power_symbols_enter_the_confirmation_flow() {
        let registry = registry();
        assert_eq!(
            start_menu_action(&registry, "Log Off"),
            ShellAction::PowerOff {
                mode: PowerMode::LogOff
            }
        );
        assert_eq!(
            start_menu_action(&registry, "Turn Off Computer"),
            ShellAction::PowerOff {
                mode: PowerMode::TurnOff
            }
        );
    }

    #[test]
    fn unknown_symbol_opens_the_error_window() {
        let registry = registry();
        match start_menu_action(&registry, "Solitaire") {
            ShellAction::Open {
                descriptor,
                inject_props,
            } => {
                assert_eq!(descriptor.component, AppKind::ErrorBox);
                let props = inject_props.expect("inject props");
                assert_eq!(
                    props["message"].as_str(),
                    Some(APPLICATION_NOT_FOUND_MESSAGE)
                );
            }
            other => panic!("expected error open, got {other:?}"),
        }
    }
}
