use leptos::*;

pub(crate) fn activate(handler: Option<Callback<()>>) {
    if let Some(handler) = handler {
        handler.call(());
    }
}

/// Button whose content is an icon. `label` becomes both `aria-label` and
/// `title`, since icon-only buttons have no readable text.
#[component]
pub fn IconButton(
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!(
                "inline-flex items-center justify-center rounded-md p-2 text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50 disabled:cursor-not-allowed {}",
                class
            )
            aria-label=label.clone()
            title=label
            disabled=move || disabled.get()
            on:click=move |_| activate(on_click)
        >
            {children()}
        </button>
    }
}
