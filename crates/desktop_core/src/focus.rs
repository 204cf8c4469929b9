//! Derived focus arbitration for the window stack.
//!
//! Every call site that gates a window operation (chrome buttons, taskbar
//! toggles) reads this one selector instead of recomputing its own notion of
//! "active window", so the derived value can never drift from the instance
//! collection.

use crate::model::{AppInstance, FocusTarget, InstanceId, ShellState};

/// Id of the top-most non-minimized instance, by maximal `z_index`.
///
/// Pure over the slice; recomputing on the same input always yields the same
/// result.
pub fn top_window_id(instances: &[AppInstance]) -> Option<InstanceId> {
    instances
        .iter()
        .filter(|inst| !inst.minimized)
        .max_by_key(|inst| inst.z_index)
        .map(|inst| inst.id)
}

/// Id of the window that currently owns input, or `None` when the desktop or
/// an icon selection owns it instead (or every window is minimized).
pub fn focused_window_id(state: &ShellState) -> Option<InstanceId> {
    if state.focus_target != FocusTarget::Window {
        return None;
    }
    top_window_id(&state.instances)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ShellState;
    use crate::reducer::{reduce_shell, ShellAction};
    use desktop_app_contract::{AppDescriptor, AppKind, WindowSize};

    fn descriptor(component: AppKind, multi_instance: bool) -> AppDescriptor {
        AppDescriptor {
            component,
            title: "app",
            icon: "app",
            default_size: WindowSize { w: 400, h: 300 },
            multi_instance,
        }
    }

    fn open(state: &mut ShellState, component: AppKind) -> InstanceId {
        reduce_shell(
            state,
            ShellAction::Open {
                descriptor: descriptor(component, true),
                inject_props: None,
            },
        )
        .expect("open");
        state.instances.last().expect("instance").id
    }

    #[test]
    fn top_window_tracks_maximal_z_index() {
        let mut state = ShellState::default();
        let first = open(&mut state, AppKind::Notepad);
        let second = open(&mut state, AppKind::Paint);

        assert_eq!(top_window_id(&state.instances), Some(second));

        reduce_shell(&mut state, ShellAction::Focus { instance_id: first }).expect("focus");
        assert_eq!(top_window_id(&state.instances), Some(first));
    }

    #[test]
    fn minimized_windows_are_skipped() {
        let mut state = ShellState::default();
        let first = open(&mut state, AppKind::Notepad);
        let second = open(&mut state, AppKind::Paint);

        reduce_shell(
            &mut state,
            ShellAction::Minimize {
                instance_id: second,
            },
        )
        .expect("minimize");
        assert_eq!(focused_window_id(&state), Some(first));

        reduce_shell(&mut state, ShellAction::Minimize { instance_id: first }).expect("minimize");
        assert_eq!(focused_window_id(&state), None);
        assert_eq!(top_window_id(&state.instances), None);
    }

    #[test]
    fn no_window_focus_outside_window_target() {
        let mut state = ShellState::default();
        open(&mut state, AppKind::Notepad);

        reduce_shell(&mut state, ShellAction::FocusDesktop).expect("desktop");
        assert_eq!(focused_window_id(&state), None);
    }

    #[test]
    fn derivation_is_stable_across_recomputation() {
        let mut state = ShellState::default();
        open(&mut state, AppKind::Notepad);
        open(&mut state, AppKind::Paint);

        assert_eq!(focused_window_id(&state), focused_window_id(&state));
    }
}
