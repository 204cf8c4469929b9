//! Shared contract types between the desktop shell and hosted applications.
//!
//! The shell only ever talks to an application through this crate: a static
//! [`AppDescriptor`] that tells the window manager how to host it, an
//! [`AppMountContext`] handed over when a window opens, and the injected
//! async transports mock applications use instead of real network access.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Stable identifier for an application kind hosted by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppKind {
    /// Search-engine parody browser.
    InternetExplorer,
    /// File-manager mock.
    MyComputer,
    /// Plain text editor.
    Notepad,
    /// Music player mock.
    Winamp,
    /// Painting canvas.
    Paint,
    /// Minesweeper game.
    Minesweeper,
    /// Terminal emulator mock.
    CommandPrompt,
    /// Assistant chat widget.
    ClippyChat,
    /// Email-client mock.
    OutlookExpress,
    /// Generic "application not found" error surface.
    ErrorBox,
}

impl AppKind {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::InternetExplorer => "internet-explorer",
            Self::MyComputer => "my-computer",
            Self::Notepad => "notepad",
            Self::Winamp => "winamp",
            Self::Paint => "paint",
            Self::Minesweeper => "minesweeper",
            Self::CommandPrompt => "command-prompt",
            Self::ClippyChat => "clippy-chat",
            Self::OutlookExpress => "outlook-express",
            Self::ErrorBox => "error-box",
        }
    }
}

/// Initial content size for a hosted window, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self { w: 660, h: 500 }
    }
}

/// Static template describing one application kind.
///
/// Descriptors are defined once at startup in the shell's registry and are
/// never mutated; open requests carry a copy of the descriptor plus optional
/// per-instance inject props. Serialize-only: the `&'static str` fields come
/// from the const registry, never from decoded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppDescriptor {
    /// Application kind this descriptor instantiates.
    pub component: AppKind,
    /// Window title text.
    pub title: &'static str,
    /// Icon token resolved by the shell icon catalog.
    pub icon: &'static str,
    /// Initial window size.
    pub default_size: WindowSize,
    /// Whether several live instances of this kind may coexist.
    pub multi_instance: bool,
}

/// Descriptor used when a launcher symbol resolves to nothing, so unknown
/// entries surface as an ordinary error window instead of a crash.
pub const FALLBACK_ERROR_DESCRIPTOR: AppDescriptor = AppDescriptor {
    component: AppKind::ErrorBox,
    title: "C:\\",
    icon: "error-box",
    default_size: WindowSize { w: 380, h: 150 },
    multi_instance: true,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure surface for injected application transports.
pub enum TransportError {
    /// The transport backend is unreachable.
    #[error("transport offline")]
    Offline,
    /// The backend rejected the request.
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Outgoing message handed to a [`MailDelivery`] transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMail {
    /// Destination address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

/// Chat-completion capability injected into the assistant chat application.
///
/// The shell never depends on the outcome; the hosted view owns the future.
pub trait ChatTransport {
    /// Sends one prompt and resolves to the assistant reply text.
    fn send_message(&self, prompt: String) -> LocalBoxFuture<'static, Result<String, TransportError>>;
}

/// Mail-delivery capability injected into the email application.
pub trait MailDelivery {
    /// Delivers one outgoing message.
    fn deliver(&self, mail: OutgoingMail) -> LocalBoxFuture<'static, Result<(), TransportError>>;
}

#[derive(Clone)]
/// Injected transport bundle supplied by the entry layer at startup.
pub struct Transports {
    /// Chat-completion backend.
    pub chat: Rc<dyn ChatTransport>,
    /// Mail-delivery backend.
    pub mail: Rc<dyn MailDelivery>,
}

#[derive(Clone)]
/// Per-window context handed to an application view when it is mounted.
pub struct AppMountContext {
    /// Shell instance id of the hosting window.
    pub instance_id: u64,
    /// Props injected at open time (`Value::Null` when none were supplied).
    pub inject_props: Value,
    /// Injected capability transports.
    pub transports: Transports,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_kind_tokens_are_unique() {
        let kinds = [
            AppKind::InternetExplorer,
            AppKind::MyComputer,
            AppKind::Notepad,
            AppKind::Winamp,
            AppKind::Paint,
            AppKind::Minesweeper,
            AppKind::CommandPrompt,
            AppKind::ClippyChat,
            AppKind::OutlookExpress,
            AppKind::ErrorBox,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in kinds.iter().skip(i + 1) {
                assert_ne!(a.token(), b.token());
            }
        }
    }

    #[test]
    fn fallback_error_descriptor_is_multi_instance() {
        assert!(FALLBACK_ERROR_DESCRIPTOR.multi_instance);
        assert_eq!(FALLBACK_ERROR_DESCRIPTOR.component, AppKind::ErrorBox);
    }
}
