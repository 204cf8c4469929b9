use serde::{Deserialize, Serialize};
use serde_json::Value;

use desktop_app_contract::{AppDescriptor, AppKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IconId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Measured screen rectangle for one desktop icon.
///
/// Lives in the [`crate::selection::IconRectStore`] side collection, never in
/// [`ShellState`]; it is layout output, not canonical shell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Which layer of the shell currently owns keyboard/mouse semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusTarget {
    Desktop,
    Icon,
    Window,
}

/// Power-off mode requested from the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerMode {
    LogOff,
    TurnOff,
}

/// Shutdown/log-off confirmation flow state.
///
/// Confirming keeps the chosen state; the powered-down visual is driven
/// externally by reading this value, not by a further transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PowerState {
    #[default]
    Running,
    ConfirmLogOff,
    ConfirmTurnOff,
}

/// One open window bound to an application descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppInstance {
    pub id: InstanceId,
    pub descriptor: AppDescriptor,
    /// Relative stacking rank. Higher renders on top; only the ordering is
    /// meaningful, values are never displayed and need not be contiguous.
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
    pub inject_props: Value,
}

/// One desktop icon. Created once at startup; only `is_focus` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconState {
    pub id: IconId,
    pub label: String,
    pub app: AppKind,
    pub is_focus: bool,
}

impl IconState {
    pub fn new(id: u32, label: impl Into<String>, app: AppKind) -> Self {
        Self {
            id: IconId(id),
            label: label.into(),
            app,
            is_focus: false,
        }
    }
}

/// Single root state owned by the reducer for the life of the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellState {
    pub instances: Vec<AppInstance>,
    pub next_instance_id: u64,
    pub next_z_index: u32,
    pub focus_target: FocusTarget,
    pub icons: Vec<IconState>,
    /// Marquee-selection anchor; `Some` only between start-select and
    /// end-select. The live rectangle is formed against the current pointer.
    pub selection_origin: Option<Point>,
    pub power_state: PowerState,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
            next_instance_id: 0,
            next_z_index: 0,
            focus_target: FocusTarget::Desktop,
            icons: Vec::new(),
            selection_origin: None,
            power_state: PowerState::Running,
        }
    }
}

impl ShellState {
    /// Initial session state for a fixed desktop icon configuration.
    pub fn with_icons(icons: Vec<IconState>) -> Self {
        Self {
            icons,
            ..Self::default()
        }
    }

    pub fn instance(&self, id: InstanceId) -> Option<&AppInstance> {
        self.instances.iter().find(|inst| inst.id == id)
    }

    pub fn any_icon_focused(&self) -> bool {
        self.icons.iter().any(|icon| icon.is_focus)
    }
}
