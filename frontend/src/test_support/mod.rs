#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Employee, Holiday, HolidayType, Project};
    use crate::state::directory::{DirectoryContext, DirectoryState};
    use leptos::*;

    pub fn sample_holiday(id: &str, name: &str, date: &str) -> Holiday {
        Holiday {
            id: id.into(),
            name: name.into(),
            start_date: date.into(),
            end_date: date.into(),
            holiday_date: date.into(),
            location: vec!["Pune".into()],
            created_at: "2024-11-02T09:00:00Z".into(),
            updated_at: "2024-11-02T09:00:00Z".into(),
            year: date.get(..4).unwrap_or_default().into(),
        }
    }

    pub fn sample_groups() -> Vec<HolidayType> {
        let mut diwali = sample_holiday("h3", "Diwali", "2025-10-21");
        diwali.start_date = "2025-10-20".into();
        diwali.end_date = "2025-10-22".into();
        diwali.location.clear();
        vec![
            HolidayType {
                holiday_type: "Public".into(),
                holidays: vec![
                    sample_holiday("h1", "Republic Day", "2025-01-26"),
                    diwali,
                ],
            },
            HolidayType {
                holiday_type: "Optional".into(),
                holidays: vec![sample_holiday("h2", "Holi", "2025-03-14")],
            },
        ]
    }

    pub fn sample_employee(name: &str, manager: &str) -> Employee {
        Employee {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            department: "Engineering".into(),
            role: "Engineer".into(),
            reporting_manager: manager.into(),
            initials: None,
            location: Some("Pune".into()),
            phone: None,
            status: Some("Active".into()),
            avatar: None,
        }
    }

    pub fn sample_project(key: &str) -> Project {
        Project {
            key: key.into(),
            initial: key.chars().take(2).collect(),
            name: format!("{} Platform", key),
            client: "Northwind".into(),
            date: "2025-02-15".into(),
            lead: "Dev Patel".into(),
        }
    }

    pub fn provide_directory(state: DirectoryState) -> DirectoryContext {
        let ctx = DirectoryContext {
            state: create_rw_signal(state),
            reload: Callback::new(|_| {}),
        };
        provide_context(ctx);
        ctx
    }
}
