use leptos::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div role="status" class="flex justify-center items-center py-8">
            <div
                class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"
                aria-hidden="true"
            ></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
