use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Layout>
            <div class="text-center py-16">
                <p class="text-sm font-semibold text-action-primary-bg">"404"</p>
                <h1 class="mt-2 text-3xl font-bold text-fg">"Page not found"</h1>
                <p class="mt-4 text-fg-muted">"The page you are looking for does not exist."</p>
                <a href="/" class="mt-6 inline-block text-sm font-semibold text-action-primary-bg hover:underline">
                    "Back to home"
                </a>
            </div>
        </Layout>
    }
}
