//! Reducer actions, side-effect intents, and transition logic for the shell.

use serde_json::Value;
use thiserror::Error;

use desktop_app_contract::AppDescriptor;

use crate::model::{
    AppInstance, FocusTarget, IconId, InstanceId, Point, PowerMode, PowerState, ShellState,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_shell`] to mutate [`ShellState`].
pub enum ShellAction {
    /// Open a window for `descriptor`, or bring the existing instance to the
    /// front when the descriptor is single-instance and already open.
    Open {
        /// Descriptor of the application kind to open.
        descriptor: AppDescriptor,
        /// Per-instance props injected into the hosted view.
        inject_props: Option<Value>,
    },
    /// Close the focused window by id.
    Close {
        /// Window to close.
        instance_id: InstanceId,
    },
    /// Focus (and raise) a window by id.
    Focus {
        /// Window to focus.
        instance_id: InstanceId,
    },
    /// Minimize the focused window.
    Minimize {
        /// Window to minimize.
        instance_id: InstanceId,
    },
    /// Toggle the maximized flag on the focused window.
    ToggleMaximize {
        /// Window to maximize or restore.
        instance_id: InstanceId,
    },
    /// Focus a single desktop icon exclusively.
    FocusIcon {
        /// Icon to focus.
        icon_id: IconId,
    },
    /// Replace icon focus with exactly the given set (marquee result).
    SelectIcons {
        /// Icons inside the live selection rectangle.
        icon_ids: Vec<IconId>,
    },
    /// Focus the desktop background, clearing all icon focus.
    FocusDesktop,
    /// Begin a marquee selection anchored at `origin`.
    StartSelect {
        /// Pointer position at mouse-down on the empty desktop.
        origin: Point,
    },
    /// End the marquee selection, keeping whatever icon focus it produced.
    EndSelect,
    /// Enter the shutdown/log-off confirmation flow.
    PowerOff {
        /// Requested power-off mode.
        mode: PowerMode,
    },
    /// Dismiss the confirmation flow and return to running.
    CancelPowerOff,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_shell`] for the shell runtime.
pub enum ShellEffect {
    /// Move DOM focus into the chrome of the newly raised window.
    FocusWindowChrome(InstanceId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference a missing target.
///
/// The dispatch layer logs these and keeps the previous snapshot, so to every
/// consumer an invalid id is a silent no-op; UI event races must never crash
/// the shell.
pub enum ShellError {
    /// The target instance id was not found.
    #[error("instance not found")]
    InstanceNotFound,
    /// The target icon id was not found.
    #[error("icon not found")]
    IconNotFound,
}

/// Applies a [`ShellAction`] to the shell state and collects side effects.
///
/// This is the sole mutation path for window stacking, focus, icon selection,
/// and power state. Guard-violating actions (window operations while the
/// focus target is not a window) return `Ok` without touching state; only a
/// missing target id is an error, and the state is untouched in that case
/// too.
///
/// # Errors
///
/// Returns [`ShellError`] when an action references an instance or icon that
/// is not present.
pub fn reduce_shell(
    state: &mut ShellState,
    action: ShellAction,
) -> Result<Vec<ShellEffect>, ShellError> {
    let mut effects = Vec::new();
    match action {
        ShellAction::Open {
            descriptor,
            inject_props,
        } => {
            let existing = (!descriptor.multi_instance)
                .then(|| {
                    state
                        .instances
                        .iter()
                        .position(|inst| inst.descriptor.component == descriptor.component)
                })
                .flatten();

            let raised_z = state.next_z_index;
            let raised_id = match existing {
                Some(index) => {
                    let instance = &mut state.instances[index];
                    instance.z_index = raised_z;
                    instance.minimized = false;
                    instance.id
                }
                None => {
                    let id = InstanceId(state.next_instance_id);
                    state.instances.push(AppInstance {
                        id,
                        descriptor,
                        z_index: raised_z,
                        minimized: false,
                        maximized: false,
                        inject_props: inject_props.unwrap_or(Value::Null),
                    });
                    state.next_instance_id = state.next_instance_id.saturating_add(1);
                    id
                }
            };
            state.next_z_index = state.next_z_index.saturating_add(1);
            state.focus_target = FocusTarget::Window;
            effects.push(ShellEffect::FocusWindowChrome(raised_id));
        }
        ShellAction::Close { instance_id } => {
            if state.focus_target != FocusTarget::Window {
                return Ok(effects);
            }
            let index = state
                .instances
                .iter()
                .position(|inst| inst.id == instance_id)
                .ok_or(ShellError::InstanceNotFound)?;
            state.instances.remove(index);
            state.focus_target = if !state.instances.is_empty() {
                FocusTarget::Window
            } else if state.any_icon_focused() {
                FocusTarget::Icon
            } else {
                FocusTarget::Desktop
            };
        }
        ShellAction::Focus { instance_id } => {
            let raised_z = state.next_z_index;
            let instance = find_instance_mut(state, instance_id)?;
            instance.z_index = raised_z;
            instance.minimized = false;
            state.next_z_index = state.next_z_index.saturating_add(1);
            state.focus_target = FocusTarget::Window;
            effects.push(ShellEffect::FocusWindowChrome(instance_id));
        }
        ShellAction::Minimize { instance_id } => {
            if state.focus_target != FocusTarget::Window {
                return Ok(effects);
            }
            // z_index and focus_target stay put; the focus arbiter skips
            // minimized instances when deriving the active window.
            find_instance_mut(state, instance_id)?.minimized = true;
        }
        ShellAction::ToggleMaximize { instance_id } => {
            if state.focus_target != FocusTarget::Window {
                return Ok(effects);
            }
            let instance = find_instance_mut(state, instance_id)?;
            instance.maximized = !instance.maximized;
        }
        ShellAction::FocusIcon { icon_id } => {
            if !state.icons.iter().any(|icon| icon.id == icon_id) {
                return Err(ShellError::IconNotFound);
            }
            for icon in &mut state.icons {
                icon.is_focus = icon.id == icon_id;
            }
            state.focus_target = FocusTarget::Icon;
        }
        ShellAction::SelectIcons { icon_ids } => {
            for icon in &mut state.icons {
                icon.is_focus = icon_ids.contains(&icon.id);
            }
            state.focus_target = if state.any_icon_focused() {
                FocusTarget::Icon
            } else {
                FocusTarget::Desktop
            };
        }
        ShellAction::FocusDesktop => {
            clear_icon_focus(state);
            state.focus_target = FocusTarget::Desktop;
        }
        ShellAction::StartSelect { origin } => {
            clear_icon_focus(state);
            state.focus_target = FocusTarget::Desktop;
            state.selection_origin = Some(origin);
        }
        ShellAction::EndSelect => {
            state.selection_origin = None;
        }
        ShellAction::PowerOff { mode } => {
            state.power_state = match mode {
                PowerMode::LogOff => PowerState::ConfirmLogOff,
                PowerMode::TurnOff => PowerState::ConfirmTurnOff,
            };
        }
        ShellAction::CancelPowerOff => {
            state.power_state = PowerState::Running;
        }
    }

    Ok(effects)
}

fn find_instance_mut(
    state: &mut ShellState,
    instance_id: InstanceId,
) -> Result<&mut AppInstance, ShellError> {
    state
        .instances
        .iter_mut()
        .find(|inst| inst.id == instance_id)
        .ok_or(ShellError::InstanceNotFound)
}

fn clear_icon_focus(state: &mut ShellState) {
    for icon in &mut state.icons {
        icon.is_focus = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::focus::focused_window_id;
    use crate::model::IconState;
    use desktop_app_contract::{AppDescriptor, AppKind, WindowSize};

    const NOTEPAD: AppDescriptor = AppDescriptor {
        component: AppKind::Notepad,
        title: "Notepad",
        icon: "notepad",
        default_size: WindowSize { w: 660, h: 500 },
        multi_instance: false,
    };
    const PAINT: AppDescriptor = AppDescriptor {
        component: AppKind::Paint,
        title: "Paint",
        icon: "paint",
        default_size: WindowSize { w: 660, h: 500 },
        multi_instance: false,
    };
    const ERROR_BOX: AppDescriptor = AppDescriptor {
        component: AppKind::ErrorBox,
        title: "C:\\",
        icon: "error-box",
        default_size: WindowSize { w: 380, h: 150 },
        multi_instance: true,
    };

    fn open(state: &mut ShellState, descriptor: AppDescriptor) -> InstanceId {
        reduce_shell(
            state,
            ShellAction::Open {
                descriptor,
                inject_props: None,
            },
        )
        .expect("open");
        state.instances.last().expect("instance").id
    }

    fn two_icon_state() -> ShellState {
        ShellState::with_icons(vec![
            IconState::new(0, "Notepad", AppKind::Notepad),
            IconState::new(1, "Paint", AppKind::Paint),
        ])
    }

    #[test]
    fn open_assigns_fresh_id_and_z_and_focuses_window() {
        let mut state = ShellState::default();
        let first = open(&mut state, NOTEPAD);
        let second = open(&mut state, PAINT);

        assert_eq!(first, InstanceId(0));
        assert_eq!(second, InstanceId(1));
        assert_eq!(state.next_instance_id, 2);
        assert_eq!(state.next_z_index, 2);
        assert_eq!(state.focus_target, FocusTarget::Window);
        assert!(state.instance(second).unwrap().z_index > state.instance(first).unwrap().z_index);
    }

    #[test]
    fn open_single_instance_twice_reuses_and_raises() {
        let mut state = ShellState::default();
        let notepad = open(&mut state, NOTEPAD);
        let paint = open(&mut state, PAINT);

        reduce_shell(
            &mut state,
            ShellAction::Minimize {
                instance_id: notepad,
            },
        )
        .expect("minimize");
        reduce_shell(
            &mut state,
            ShellAction::Open {
                descriptor: NOTEPAD,
                inject_props: None,
            },
        )
        .expect("reopen");

        assert_eq!(state.instances.len(), 2);
        assert_eq!(state.next_instance_id, 2);
        let record = state.instance(notepad).unwrap();
        assert!(!record.minimized);
        assert!(record.z_index > state.instance(paint).unwrap().z_index);
        assert_eq!(focused_window_id(&state), Some(notepad));
    }

    #[test]
    fn open_multi_instance_appends_distinct_ids() {
        let mut state = ShellState::default();
        let first = open(&mut state, ERROR_BOX);
        let second = open(&mut state, ERROR_BOX);

        assert_eq!(state.instances.len(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn close_removes_focused_window_and_falls_back() {
        let mut state = two_icon_state();
        let win = open(&mut state, NOTEPAD);

        reduce_shell(&mut state, ShellAction::Close { instance_id: win }).expect("close");
        assert!(state.instances.is_empty());
        assert_eq!(state.focus_target, FocusTarget::Desktop);

        let win = open(&mut state, NOTEPAD);
        reduce_shell(&mut state, ShellAction::FocusIcon { icon_id: IconId(1) }).expect("icon");
        reduce_shell(&mut state, ShellAction::Focus { instance_id: win }).expect("focus");
        reduce_shell(&mut state, ShellAction::Close { instance_id: win }).expect("close");
        assert_eq!(state.focus_target, FocusTarget::Icon);
    }

    #[test]
    fn close_is_noop_unless_a_window_is_focused() {
        let mut state = ShellState::default();
        let win = open(&mut state, NOTEPAD);
        reduce_shell(&mut state, ShellAction::FocusDesktop).expect("desktop");
        let before = state.clone();

        reduce_shell(&mut state, ShellAction::Close { instance_id: win }).expect("guarded close");
        assert_eq!(state, before);
    }

    #[test]
    fn focus_raises_and_clears_minimized() {
        let mut state = ShellState::default();
        let notepad = open(&mut state, NOTEPAD);
        let paint = open(&mut state, PAINT);

        reduce_shell(
            &mut state,
            ShellAction::Minimize {
                instance_id: notepad,
            },
        )
        .expect("minimize");
        let effects = reduce_shell(
            &mut state,
            ShellAction::Focus {
                instance_id: notepad,
            },
        )
        .expect("focus");

        let record = state.instance(notepad).unwrap();
        assert!(!record.minimized);
        assert!(record.z_index > state.instance(paint).unwrap().z_index);
        assert_eq!(effects, vec![ShellEffect::FocusWindowChrome(notepad)]);
    }

    #[test]
    fn focus_unknown_id_leaves_counters_untouched() {
        let mut state = ShellState::default();
        open(&mut state, NOTEPAD);
        let before = state.clone();

        let result = reduce_shell(
            &mut state,
            ShellAction::Focus {
                instance_id: InstanceId(99),
            },
        );
        assert_eq!(result, Err(ShellError::InstanceNotFound));
        assert_eq!(state, before);
    }

    #[test]
    fn minimize_keeps_z_index_and_focus_target() {
        let mut state = ShellState::default();
        let win = open(&mut state, NOTEPAD);
        let z_before = state.instance(win).unwrap().z_index;

        reduce_shell(&mut state, ShellAction::Minimize { instance_id: win }).expect("minimize");
        let record = state.instance(win).unwrap();
        assert!(record.minimized);
        assert_eq!(record.z_index, z_before);
        assert_eq!(state.focus_target, FocusTarget::Window);
    }

    #[test]
    fn toggle_maximize_flips_only_the_target() {
        let mut state = ShellState::default();
        let notepad = open(&mut state, NOTEPAD);
        let paint = open(&mut state, PAINT);

        reduce_shell(
            &mut state,
            ShellAction::ToggleMaximize { instance_id: paint },
        )
        .expect("maximize");
        assert!(state.instance(paint).unwrap().maximized);
        assert!(!state.instance(notepad).unwrap().maximized);

        reduce_shell(
            &mut state,
            ShellAction::ToggleMaximize { instance_id: paint },
        )
        .expect("restore");
        assert!(!state.instance(paint).unwrap().maximized);
    }

    #[test]
    fn focus_icon_is_exclusive() {
        let mut state = two_icon_state();
        reduce_shell(&mut state, ShellAction::FocusIcon { icon_id: IconId(0) }).expect("icon 0");
        reduce_shell(&mut state, ShellAction::FocusIcon { icon_id: IconId(1) }).expect("icon 1");

        assert!(!state.icons[0].is_focus);
        assert!(state.icons[1].is_focus);
        assert_eq!(state.focus_target, FocusTarget::Icon);
    }

    #[test]
    fn select_icons_replaces_focus_set() {
        let mut state = two_icon_state();
        reduce_shell(
            &mut state,
            ShellAction::SelectIcons {
                icon_ids: vec![IconId(0), IconId(1)],
            },
        )
        .expect("select both");
        assert!(state.icons.iter().all(|icon| icon.is_focus));
        assert_eq!(state.focus_target, FocusTarget::Icon);

        reduce_shell(
            &mut state,
            ShellAction::SelectIcons {
                icon_ids: Vec::new(),
            },
        )
        .expect("select none");
        assert!(state.icons.iter().all(|icon| !icon.is_focus));
        assert_eq!(state.focus_target, FocusTarget::Desktop);
    }

    #[test]
    fn marquee_lifecycle_keeps_resulting_focus() {
        let mut state = two_icon_state();
        reduce_shell(&mut state, ShellAction::FocusIcon { icon_id: IconId(0) }).expect("icon");
        reduce_shell(
            &mut state,
            ShellAction::StartSelect {
                origin: Point { x: 4, y: 9 },
            },
        )
        .expect("start");

        assert_eq!(state.selection_origin, Some(Point { x: 4, y: 9 }));
        assert_eq!(state.focus_target, FocusTarget::Desktop);
        assert!(state.icons.iter().all(|icon| !icon.is_focus));

        reduce_shell(
            &mut state,
            ShellAction::SelectIcons {
                icon_ids: vec![IconId(1)],
            },
        )
        .expect("select");
        reduce_shell(&mut state, ShellAction::EndSelect).expect("end");

        assert_eq!(state.selection_origin, None);
        assert!(state.icons[1].is_focus);
        assert_eq!(state.focus_target, FocusTarget::Icon);
    }

    #[test]
    fn power_flow_confirms_and_cancels() {
        let mut state = ShellState::default();
        reduce_shell(
            &mut state,
            ShellAction::PowerOff {
                mode: PowerMode::LogOff,
            },
        )
        .expect("log off");
        assert_eq!(state.power_state, PowerState::ConfirmLogOff);

        reduce_shell(&mut state, ShellAction::CancelPowerOff).expect("cancel");
        assert_eq!(state.power_state, PowerState::Running);

        reduce_shell(
            &mut state,
            ShellAction::PowerOff {
                mode: PowerMode::TurnOff,
            },
        )
        .expect("turn off");
        assert_eq!(state.power_state, PowerState::ConfirmTurnOff);
    }

    #[test]
    fn scenario_minimized_window_yields_focus_to_next_in_stack() {
        let mut state = ShellState::default();
        let notepad = open(&mut state, NOTEPAD);
        let paint = open(&mut state, PAINT);

        reduce_shell(
            &mut state,
            ShellAction::Focus {
                instance_id: notepad,
            },
        )
        .expect("focus notepad");
        reduce_shell(
            &mut state,
            ShellAction::Minimize {
                instance_id: notepad,
            },
        )
        .expect("minimize notepad");

        assert_eq!(state.instances.len(), 2);
        assert!(state.instance(notepad).unwrap().minimized);
        assert_eq!(focused_window_id(&state), Some(paint));
    }
}
