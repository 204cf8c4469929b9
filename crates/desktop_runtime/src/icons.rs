//! Centralized icon abstraction for the desktop shell.
//!
//! Shell components never embed raw SVG snippets; they reference semantic
//! [`IconName`] values and a single renderer. The catalog is a small set of
//! flat geometric glyphs in a 24px viewBox.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Search-engine parody browser icon.
    InternetGlobe,
    /// File-manager mock icon.
    ComputerTower,
    /// Text editor icon.
    NotepadDocument,
    /// Music player icon.
    MusicNote,
    /// Paint app icon.
    PaintBrush,
    /// Minesweeper icon.
    MineFlag,
    /// Terminal emulator icon.
    TerminalPrompt,
    /// Assistant chat icon.
    AssistantBubble,
    /// Email client icon.
    MailEnvelope,
    /// Error window icon.
    ErrorCross,
    /// Start button glyph.
    Launcher,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Window close control.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::InternetGlobe => "internet-globe",
            Self::ComputerTower => "computer-tower",
            Self::NotepadDocument => "notepad-document",
            Self::MusicNote => "music-note",
            Self::PaintBrush => "paint-brush",
            Self::MineFlag => "mine-flag",
            Self::TerminalPrompt => "terminal-prompt",
            Self::AssistantBubble => "assistant-bubble",
            Self::MailEnvelope => "mail-envelope",
            Self::ErrorCross => "error-cross",
            Self::Launcher => "launcher",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Raw SVG body markup for the icon.
    fn svg_body(self) -> &'static str {
        match self {
            Self::InternetGlobe => {
                r#"<circle cx="12" cy="12" r="9" fill="none" stroke="currentColor" stroke-width="1.5"/><ellipse cx="12" cy="12" rx="4" ry="9" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M3.5 9h17M3.5 15h17" fill="none" stroke="currentColor" stroke-width="1.5"/>"#
            }
            Self::ComputerTower => {
                r#"<rect x="3" y="4" width="14" height="10" rx="1" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M8 17h4M10 14v3" stroke="currentColor" stroke-width="1.5"/><rect x="18" y="6" width="3" height="12" rx="0.5" fill="currentColor"/>"#
            }
            Self::NotepadDocument => {
                r#"<path d="M6 2h8l4 4v16H6z" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M14 2v4h4" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M9 11h6M9 14h6M9 17h4" stroke="currentColor" stroke-width="1.2"/>"#
            }
            Self::MusicNote => {
                r#"<path d="M9 18V5l10-2v12" fill="none" stroke="currentColor" stroke-width="1.5"/><circle cx="6.5" cy="18" r="2.5" fill="currentColor"/><circle cx="16.5" cy="15" r="2.5" fill="currentColor"/>"#
            }
            Self::PaintBrush => {
                r#"<path d="M19 3l-8.5 8.5 2 2L21 5z" fill="currentColor"/><path d="M9.5 12.5c-2 0-3.5 1.5-3.5 3.5 0 1.5-1 2.5-2.5 3 1 1 2.5 1.5 4 1.5 2.5 0 4.5-2 4.5-4.5z" fill="currentColor"/>"#
            }
            Self::MineFlag => {
                r#"<path d="M8 3v18" stroke="currentColor" stroke-width="1.5"/><path d="M8 4h9l-3 3.5L17 11H8z" fill="currentColor"/><path d="M5 21h7" stroke="currentColor" stroke-width="1.5"/>"#
            }
            Self::TerminalPrompt => {
                r#"<rect x="2.5" y="4" width="19" height="16" rx="1.5" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M6 9l4 3-4 3" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M12 15.5h6" stroke="currentColor" stroke-width="1.5"/>"#
            }
            Self::AssistantBubble => {
                r#"<path d="M4 4h16v11H9l-5 5z" fill="none" stroke="currentColor" stroke-width="1.5"/><circle cx="9" cy="9.5" r="1.2" fill="currentColor"/><circle cx="13" cy="9.5" r="1.2" fill="currentColor"/><circle cx="17" cy="9.5" r="1.2" fill="currentColor"/>"#
            }
            Self::MailEnvelope => {
                r#"<rect x="2.5" y="5" width="19" height="14" rx="1.5" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M3 6.5l9 6.5 9-6.5" fill="none" stroke="currentColor" stroke-width="1.5"/>"#
            }
            Self::ErrorCross => {
                r#"<circle cx="12" cy="12" r="9.5" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M8.5 8.5l7 7M15.5 8.5l-7 7" stroke="currentColor" stroke-width="1.8"/>"#
            }
            Self::Launcher => {
                r#"<rect x="3" y="3" width="8" height="8" rx="1" fill="currentColor"/><rect x="13" y="3" width="8" height="8" rx="1" fill="currentColor"/><rect x="3" y="13" width="8" height="8" rx="1" fill="currentColor"/><rect x="13" y="13" width="8" height="8" rx="1" fill="currentColor"/>"#
            }
            Self::WindowMinimize => r#"<path d="M5 17h10v2H5z" fill="currentColor"/>"#,
            Self::WindowMaximize => {
                r#"<rect x="4" y="4" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2"/>"#
            }
            Self::WindowRestore => {
                r#"<rect x="4" y="8" width="12" height="12" fill="none" stroke="currentColor" stroke-width="2"/><path d="M8 8V4h12v12h-4" fill="none" stroke="currentColor" stroke-width="2"/>"#
            }
            Self::Dismiss => {
                r#"<path d="M5 5l14 14M19 5L5 19" stroke="currentColor" stroke-width="2"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 12px compact icon (window controls).
    Xs,
    /// 16px standard icon (taskbar/start menu).
    #[default]
    Sm,
    /// 32px large icon (desktop launchers).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Lg => 32,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders one catalog icon as inline SVG.
pub fn ShellIcon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="shell-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
