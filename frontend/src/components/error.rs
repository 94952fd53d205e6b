use crate::api::ApiError;
use leptos::*;

fn detail_messages(error: &ApiError) -> Vec<String> {
    error
        .details
        .as_ref()
        .and_then(|d| d.get("errors"))
        .and_then(|v| v.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Shows an `ApiError` in place. Validation details are listed; other codes
/// are printed underneath the message except `UNKNOWN`.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
            >
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let details = detail_messages(&e);
                    if !details.is_empty() {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {details.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                            </ul>
                        }.into_view()
                    } else if e.code != "UNKNOWN" && !e.code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                })}
            </div>
        </Show>
    }
}
