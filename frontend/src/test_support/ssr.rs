use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Drops hydration keys and marker comments so two renders can be compared.
pub fn normalize_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("<!--") {
            rest = after.find("-->").map(|end| &after[end + 3..]).unwrap_or("");
        } else if let Some(after) = rest.strip_prefix(" data-hk=\"") {
            rest = after.find('"').map(|end| &after[end + 1..]).unwrap_or("");
        } else {
            let ch = rest.chars().next().unwrap_or_default();
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

#[test]
fn normalize_markup_strips_keys_and_comments() {
    assert_eq!(
        normalize_markup(r#"<div data-hk="0-0-1">a<!--hk=0-0-2|leptos-view-->b</div>"#),
        "<div>ab</div>"
    );
}
