//! Application catalog: startup descriptors, desktop icon configuration,
//! start-menu entries, view mounting, and the canned transport bundle.

mod placeholders;

use std::rc::Rc;

use self::placeholders::{
    AssistantChatApp, ErrorBoxApp, FileExplorerApp, MailComposeApp, MinesweeperApp,
    MusicPlayerApp, NotepadApp, PaintApp, SearchBrowserApp, TerminalApp,
};

use futures::FutureExt;
use leptos::*;

use desktop_app_contract::{
    AppDescriptor, AppKind, AppMountContext, ChatTransport, MailDelivery, OutgoingMail,
    Transports, TransportError, WindowSize,
};
use desktop_core::model::{AppInstance, IconState};

use crate::icons::IconName;

/// Startup descriptor registry, one entry per hosted application kind.
///
/// Supplied to the core at startup; the core never computes descriptors.
pub const APP_REGISTRY: [AppDescriptor; 10] = [
    AppDescriptor {
        component: AppKind::InternetExplorer,
        title: "Internet Explorer",
        icon: "internet-globe",
        default_size: WindowSize { w: 700, h: 500 },
        multi_instance: true,
    },
    AppDescriptor {
        component: AppKind::MyComputer,
        title: "My Computer",
        icon: "computer-tower",
        default_size: WindowSize { w: 660, h: 500 },
        multi_instance: false,
    },
    AppDescriptor {
        component: AppKind::Notepad,
        title: "Untitled - Notepad",
        icon: "notepad-document",
        default_size: WindowSize { w: 660, h: 500 },
        multi_instance: true,
    },
    AppDescriptor {
        component: AppKind::Winamp,
        title: "Winamp",
        icon: "music-note",
        default_size: WindowSize { w: 450, h: 340 },
        multi_instance: false,
    },
    AppDescriptor {
        component: AppKind::Paint,
        title: "Untitled - Paint",
        icon: "paint-brush",
        default_size: WindowSize { w: 660, h: 500 },
        multi_instance: true,
    },
    AppDescriptor {
        component: AppKind::Minesweeper,
        title: "Minesweeper",
        icon: "mine-flag",
        default_size: WindowSize { w: 280, h: 360 },
        multi_instance: true,
    },
    AppDescriptor {
        component: AppKind::CommandPrompt,
        title: "Command Prompt",
        icon: "terminal-prompt",
        default_size: WindowSize { w: 660, h: 380 },
        multi_instance: true,
    },
    AppDescriptor {
        component: AppKind::ClippyChat,
        title: "AI Expert Clippy",
        icon: "assistant-bubble",
        default_size: WindowSize { w: 480, h: 520 },
        multi_instance: false,
    },
    AppDescriptor {
        component: AppKind::OutlookExpress,
        title: "Outlook Express",
        icon: "mail-envelope",
        default_size: WindowSize { w: 700, h: 520 },
        multi_instance: false,
    },
    AppDescriptor {
        component: AppKind::ErrorBox,
        title: "C:\\",
        icon: "error-cross",
        default_size: WindowSize { w: 380, h: 150 },
        multi_instance: true,
    },
];

/// Desktop icon configuration, in grid order.
const DESKTOP_ICONS: [(&str, AppKind); 7] = [
    ("My Computer", AppKind::MyComputer),
    ("Internet Explorer", AppKind::InternetExplorer),
    ("Outlook Express", AppKind::OutlookExpress),
    ("Notepad", AppKind::Notepad),
    ("Paint", AppKind::Paint),
    ("Winamp", AppKind::Winamp),
    ("Minesweeper", AppKind::Minesweeper),
];

/// Start-menu entries, top to bottom. Symbolic names resolved by the core
/// launcher binding; unknown names intentionally surface the error window.
pub const START_MENU_ITEMS: [&str; 10] = [
    "Internet",
    "E-mail",
    "Notepad",
    "Paint",
    "Winamp",
    "Command Prompt",
    "Minesweeper",
    "My Computer",
    "AI Expert Clippy",
    "My Recent Documents",
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Initial icon registry state built from the fixed desktop configuration.
pub fn default_icons() -> Vec<IconState> {
    DESKTOP_ICONS
        .iter()
        .enumerate()
        .map(|(index, (label, kind))| IconState::new(index as u32, *label, *kind))
        .collect()
}

/// Open action for an application kind, resolved against the startup
/// registry. Kinds without a descriptor fall back to the error window.
pub fn open_action(kind: AppKind) -> desktop_core::reducer::ShellAction {
    desktop_core::reducer::ShellAction::Open {
        descriptor: desktop_core::launcher::descriptor_for(app_registry(), kind)
            .unwrap_or(desktop_app_contract::FALLBACK_ERROR_DESCRIPTOR),
        inject_props: None,
    }
}

/// Semantic icon for an application kind.
pub fn app_icon_name(kind: AppKind) -> IconName {
    match kind {
        AppKind::InternetExplorer => IconName::InternetGlobe,
        AppKind::MyComputer => IconName::ComputerTower,
        AppKind::Notepad => IconName::NotepadDocument,
        AppKind::Winamp => IconName::MusicNote,
        AppKind::Paint => IconName::PaintBrush,
        AppKind::Minesweeper => IconName::MineFlag,
        AppKind::CommandPrompt => IconName::TerminalPrompt,
        AppKind::ClippyChat => IconName::AssistantBubble,
        AppKind::OutlookExpress => IconName::MailEnvelope,
        AppKind::ErrorBox => IconName::ErrorCross,
    }
}

/// Mounts the hosted view for a window instance.
pub fn render_app(instance: &AppInstance, context: AppMountContext) -> View {
    match instance.descriptor.component {
        AppKind::InternetExplorer => view! { <SearchBrowserApp /> }.into_view(),
        AppKind::MyComputer => view! { <FileExplorerApp /> }.into_view(),
        AppKind::Notepad => view! { <NotepadApp /> }.into_view(),
        AppKind::Winamp => view! { <MusicPlayerApp /> }.into_view(),
        AppKind::Paint => view! { <PaintApp /> }.into_view(),
        AppKind::Minesweeper => view! { <MinesweeperApp /> }.into_view(),
        AppKind::CommandPrompt => view! { <TerminalApp /> }.into_view(),
        AppKind::ClippyChat => view! { <AssistantChatApp context=context /> }.into_view(),
        AppKind::OutlookExpress => view! { <MailComposeApp context=context /> }.into_view(),
        AppKind::ErrorBox => view! { <ErrorBoxApp context=context /> }.into_view(),
    }
}

/// Chat transport that answers with a canned reply; stands in for the real
/// assistant backend, which is out of scope for the shell.
struct CannedChatTransport;

impl ChatTransport for CannedChatTransport {
    fn send_message(
        &self,
        prompt: String,
    ) -> futures::future::LocalBoxFuture<'static, Result<String, TransportError>> {
        async move {
            if prompt.trim().is_empty() {
                return Err(TransportError::Rejected("empty prompt".to_string()));
            }
            Ok(format!(
                "It looks like you're asking about \"{}\". Would you like help with that?",
                prompt.trim()
            ))
        }
        .boxed_local()
    }
}

/// Mail transport that accepts every message without delivering anywhere.
struct DiscardMailDelivery;

impl MailDelivery for DiscardMailDelivery {
    fn deliver(
        &self,
        mail: OutgoingMail,
    ) -> futures::future::LocalBoxFuture<'static, Result<(), TransportError>> {
        async move {
            if mail.to.trim().is_empty() {
                return Err(TransportError::Rejected("missing recipient".to_string()));
            }
            Ok(())
        }
        .boxed_local()
    }
}

/// Canned transport bundle for entry layers without a real backend.
pub fn canned_transports() -> Transports {
    Transports {
        chat: Rc::new(CannedChatTransport),
        mail: Rc::new(DiscardMailDelivery),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_covers_every_desktop_icon() {
        for (_, kind) in DESKTOP_ICONS {
            assert!(
                APP_REGISTRY.iter().any(|d| d.component == kind),
                "missing descriptor for {:?}",
                kind
            );
        }
    }

    #[test]
    fn registry_has_exactly_one_descriptor_per_kind() {
        for descriptor in APP_REGISTRY {
            let count = APP_REGISTRY
                .iter()
                .filter(|d| d.component == descriptor.component)
                .count();
            assert_eq!(count, 1, "duplicate descriptor for {:?}", descriptor.component);
        }
    }

    #[test]
    fn default_icons_have_distinct_ids() {
        let icons = default_icons();
        for (i, icon) in icons.iter().enumerate() {
            assert!(icons
                .iter()
                .skip(i + 1)
                .all(|other| other.id != icon.id));
        }
    }
}
