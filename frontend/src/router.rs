use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    components::not_found::NotFound,
    pages::{EmployeeDetailPage, EmployeesPage, HolidaysPage, HomePage, ProjectsPage},
    state::directory::DirectoryProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/holidays", "/employees", "/employees/:email", "/projects"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <DirectoryProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/holidays" view=HolidaysPage/>
                    <Route path="/employees" view=EmployeesPage/>
                    <Route path="/employees/:email" view=EmployeeDetailPage/>
                    <Route path="/projects" view=ProjectsPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </Router>
        </DirectoryProvider>
    }
}
