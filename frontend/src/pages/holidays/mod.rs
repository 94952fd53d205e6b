use leptos::*;

mod components;
mod panel;
mod repository;
mod view_model;

pub use panel::HolidaysPanel;

#[component]
pub fn HolidaysPage() -> impl IntoView {
    view! { <HolidaysPanel /> }
}
