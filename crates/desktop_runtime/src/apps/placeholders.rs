//! Placeholder views for the hosted applications.
//!
//! Application internals are product content, not shell design: each view
//! here is a self-contained stand-in that talks to the shell only through
//! its mount context and the injected transports.

use leptos::*;

use desktop_app_contract::{AppMountContext, OutgoingMail, TransportError};

#[component]
pub(super) fn SearchBrowserApp() -> impl IntoView {
    let query = create_rw_signal(String::new());
    let submitted = create_rw_signal(None::<String>);

    view! {
        <div class="app app-search">
            <div class="search-logo">"Goggle"</div>
            <form on:submit=move |ev| {
                ev.prevent_default();
                submitted.set(Some(query.get()));
            }>
                <input
                    type="text"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button type="submit">"Goggle Search"</button>
                <button type="button" on:click=move |_| {
                    query.set(String::new());
                    submitted.set(None);
                }>
                    "I'm Feeling Lucky"
                </button>
            </form>
            <Show when=move || submitted.get().is_some() fallback=|| ()>
                <p class="search-results">
                    {move || {
                        let q = submitted.get().unwrap_or_default();
                        format!("Your search - {q} - did not match any documents.")
                    }}
                </p>
            </Show>
        </div>
    }
}

#[component]
pub(super) fn FileExplorerApp() -> impl IntoView {
    const DRIVES: [(&str, &str); 3] = [
        ("Local Disk (C:)", "37.2 GB free of 74.5 GB"),
        ("CD Drive (D:)", "No disc inserted"),
        ("Shared Documents", "System Folder"),
    ];

    view! {
        <div class="app app-explorer">
            <ul class="drive-list">
                {DRIVES
                    .iter()
                    .map(|(name, detail)| {
                        view! {
                            <li>
                                <strong>{*name}</strong>
                                <span>{*detail}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub(super) fn NotepadApp() -> impl IntoView {
    let text = create_rw_signal(String::new());

    view! {
        <div class="app app-notepad">
            <textarea
                spellcheck="false"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
pub(super) fn MusicPlayerApp() -> impl IntoView {
    let playing = create_rw_signal(false);

    view! {
        <div class="app app-music">
            <p class="track-title">"01. Darude - Sandstorm  [3:53]"</p>
            <div class="transport-controls">
                <button on:click=move |_| playing.set(true)>"Play"</button>
                <button on:click=move |_| playing.set(false)>"Pause"</button>
                <button on:click=move |_| playing.set(false)>"Stop"</button>
            </div>
            <p class="transport-status">
                {move || if playing.get() { "Playing" } else { "Stopped" }}
            </p>
        </div>
    }
}

#[component]
pub(super) fn PaintApp() -> impl IntoView {
    let tool = create_rw_signal("brush".to_string());

    view! {
        <div class="app app-paint">
            <div class="paint-toolbar" role="group" aria-label="Paint tools">
                <select
                    prop:value=move || tool.get()
                    on:change=move |ev| tool.set(event_target_value(&ev))
                >
                    <option value="pencil">"Pencil"</option>
                    <option value="brush">"Brush"</option>
                    <option value="fill">"Fill"</option>
                    <option value="eraser">"Eraser"</option>
                </select>
            </div>
            <div class="paint-canvas" aria-label="Canvas"></div>
            <div class="paint-statusbar">{move || tool.get()}</div>
        </div>
    }
}

#[component]
pub(super) fn MinesweeperApp() -> impl IntoView {
    view! {
        <div class="app app-minesweeper">
            <div class="mine-counter">"010"</div>
            <button class="mine-reset" aria-label="New game">":)"</button>
            <div class="mine-grid" aria-label="Minefield"></div>
        </div>
    }
}

#[component]
pub(super) fn TerminalApp() -> impl IntoView {
    let lines = create_rw_signal(vec![
        "Microsoft Windows XP [Version 5.1.2600]".to_string(),
        "(C) Copyright 1985-2001 Microsoft Corp.".to_string(),
    ]);
    let input = create_rw_signal(String::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let command = input.get();
        input.set(String::new());
        lines.update(|lines| {
            lines.push(format!("C:\\>{command}"));
            if !command.trim().is_empty() {
                lines.push(format!(
                    "'{}' is not recognized as an internal or external command.",
                    command.trim()
                ));
            }
        });
    };

    view! {
        <div class="app app-terminal">
            <pre class="terminal-scrollback">
                {move || lines.get().join("\n")}
            </pre>
            <form class="terminal-input" on:submit=submit>
                <span>"C:\\>"</span>
                <input
                    type="text"
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
            </form>
        </div>
    }
}

#[component]
pub(super) fn AssistantChatApp(context: AppMountContext) -> impl IntoView {
    let transcript = create_rw_signal(vec![(
        "clippy".to_string(),
        "Hi! I'm Clippy. Ask me anything.".to_string(),
    )]);
    let prompt = create_rw_signal(String::new());
    let busy = create_rw_signal(false);
    let chat = context.transports.chat.clone();

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let text = prompt.get();
        if text.trim().is_empty() {
            return;
        }
        prompt.set(String::new());
        transcript.update(|t| t.push(("you".to_string(), text.clone())));
        busy.set(true);

        let chat = chat.clone();
        spawn_local(async move {
            let reply = match chat.send_message(text).await {
                Ok(reply) => reply,
                Err(TransportError::Offline) => "Clippy is offline right now.".to_string(),
                Err(TransportError::Rejected(reason)) => {
                    format!("Clippy couldn't answer that ({reason}).")
                }
            };
            transcript.update(|t| t.push(("clippy".to_string(), reply)));
            busy.set(false);
        });
    };

    view! {
        <div class="app app-chat">
            <ul class="chat-transcript">
                <For
                    each=move || transcript.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    let:entry
                >
                    <li class=format!("chat-line from-{}", entry.1 .0)>{entry.1 .1}</li>
                </For>
            </ul>
            <form class="chat-input" on:submit=submit>
                <input
                    type="text"
                    prop:value=move || prompt.get()
                    prop:disabled=move || busy.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                />
                <button type="submit" prop:disabled=move || busy.get()>
                    {move || if busy.get() { "..." } else { "Send" }}
                </button>
            </form>
        </div>
    }
}

#[component]
pub(super) fn MailComposeApp(context: AppMountContext) -> impl IntoView {
    let to = create_rw_signal(String::new());
    let subject = create_rw_signal(String::new());
    let body = create_rw_signal(String::new());
    let status = create_rw_signal(None::<String>);
    let mail = context.transports.mail.clone();

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let outgoing = OutgoingMail {
            to: to.get(),
            subject: subject.get(),
            body: body.get(),
        };
        let mail = mail.clone();
        spawn_local(async move {
            match mail.deliver(outgoing).await {
                Ok(()) => status.set(Some("Message sent.".to_string())),
                Err(err) => status.set(Some(format!("Send failed: {err}"))),
            }
        });
    };

    view! {
        <div class="app app-mail">
            <form class="mail-compose" on:submit=submit>
                <label>
                    "To: "
                    <input
                        type="text"
                        prop:value=move || to.get()
                        on:input=move |ev| to.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Subject: "
                    <input
                        type="text"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </label>
                <textarea
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                ></textarea>
                <button type="submit">"Send"</button>
            </form>
            <Show when=move || status.get().is_some() fallback=|| ()>
                <p class="mail-status">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[component]
pub(super) fn ErrorBoxApp(context: AppMountContext) -> impl IntoView {
    let message = context
        .inject_props
        .get("message")
        .and_then(|value| value.as_str())
        .unwrap_or("An error has occurred.")
        .to_string();

    view! {
        <div class="app app-error">
            <pre class="error-message">{message}</pre>
        </div>
    }
}
