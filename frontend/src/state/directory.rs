use crate::api::{ApiClient, ApiError, Employee, HolidayType, Project};
use leptos::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryState {
    pub holidays: Vec<HolidayType>,
    pub employees: Vec<Employee>,
    pub projects: Vec<Project>,
    pub loading: bool,
    pub holidays_error: Option<ApiError>,
    pub employees_error: Option<ApiError>,
    pub projects_error: Option<ApiError>,
    /// Bumped on every reload so page-level resources can refetch with it.
    pub generation: u32,
}

/// Outcome of one round of directory fetches. Each collection fails
/// independently so a missing holiday calendar still shows the staff list.
#[derive(Clone, Debug)]
pub struct DirectoryLoad {
    pub holidays: Result<Vec<HolidayType>, ApiError>,
    pub employees: Result<Vec<Employee>, ApiError>,
    pub projects: Result<Vec<Project>, ApiError>,
}

impl DirectoryState {
    pub fn apply(&mut self, load: DirectoryLoad) {
        self.loading = false;
        self.holidays_error = None;
        self.employees_error = None;
        self.projects_error = None;
        match load.holidays {
            Ok(groups) => self.holidays = groups,
            Err(err) => {
                self.holidays.clear();
                self.holidays_error = Some(logged(err));
            }
        }
        match load.employees {
            Ok(employees) => self.employees = employees,
            Err(err) => self.employees_error = Some(logged(err)),
        }
        match load.projects {
            Ok(projects) => self.projects = projects,
            Err(err) => self.projects_error = Some(logged(err)),
        }
    }

    pub fn begin_reload(&mut self) {
        self.loading = true;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn holiday_count(&self) -> usize {
        self.holidays.iter().map(|g| g.holidays.len()).sum()
    }
}

fn logged(err: ApiError) -> ApiError {
    log::warn!("directory load failed: {} ({})", err.error, err.code);
    err
}

pub async fn load_directory(api: &ApiClient) -> DirectoryLoad {
    DirectoryLoad {
        holidays: api.get_holidays(None).await,
        employees: api.get_employees().await,
        projects: api.get_projects().await,
    }
}

#[derive(Clone, Copy)]
pub struct DirectoryContext {
    pub state: RwSignal<DirectoryState>,
    pub reload: Callback<()>,
}

#[component]
pub fn DirectoryProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let state = create_rw_signal(DirectoryState {
        loading: true,
        ..Default::default()
    });
    let load_action = create_action(move |_: &()| {
        let api = api.clone();
        async move { load_directory(&api).await }
    });
    let reload = Callback::new(move |_| {
        state.update(DirectoryState::begin_reload);
        load_action.dispatch(());
    });

    create_effect(move |_| {
        if let Some(load) = load_action.value().get() {
            state.update(|s| s.apply(load));
        }
    });
    // Effects only run in the browser, so SSR renders the loading state.
    create_effect(move |_| reload.call(()));

    provide_context(DirectoryContext { state, reload });
    children()
}

pub fn use_directory() -> DirectoryContext {
    match use_context::<DirectoryContext>() {
        Some(ctx) => ctx,
        None => {
            let ctx = DirectoryContext {
                state: create_rw_signal(DirectoryState::default()),
                reload: Callback::new(|_| log::debug!("reload ignored: no DirectoryProvider")),
            };
            provide_context(ctx);
            ctx
        }
    }
}
