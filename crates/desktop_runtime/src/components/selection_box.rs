use super::*;
use desktop_core::selection::SelectionBounds;

#[component]
pub(super) fn SelectionBox() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let bounds = Signal::derive(move || {
        state
            .get()
            .selection_origin
            .map(|origin| SelectionBounds::between(origin, runtime.pointer.get()))
    });

    view! {
        <Show when=move || bounds.get().is_some() fallback=|| ()>
            {move || {
                let rect = bounds.get().expect("bounds exist while shown");
                view! {
                    <div
                        class="selection-box"
                        aria-hidden="true"
                        style=format!(
                            "left:{}px;top:{}px;width:{}px;height:{}px;",
                            rect.x, rect.y, rect.w, rect.h
                        )
                    ></div>
                }
                    .into_view()
            }}
        </Show>
    }
}
