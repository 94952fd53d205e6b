//! In-memory directory loaded once from the seed file at startup.

use serde::Deserialize;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use validator::Validate;

use crate::models::{Employee, HolidayShapeError, HolidayType, Project};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub holidays: Vec<HolidayType>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read directory data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse directory data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid holiday data: {0}")]
    Holiday(#[from] HolidayShapeError),
    #[error("invalid employee {email}: {message}")]
    Employee { email: String, message: String },
    #[error("duplicate employee email {0}")]
    DuplicateEmployee(String),
    #[error("invalid project {key:?}: {message}")]
    Project { key: String, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayFilter {
    pub year: Option<i32>,
    pub location: Option<String>,
}

impl HolidayFilter {
    fn is_empty(&self) -> bool {
        self.year.is_none() && self.location.is_none()
    }
}

#[derive(Debug, Default)]
pub struct DirectoryStore {
    holidays: Vec<HolidayType>,
    employees: Vec<Employee>,
    projects: Vec<Project>,
}

impl DirectoryStore {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: DirectorySeed = serde_json::from_str(&raw)?;
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: DirectorySeed) -> Result<Self, StoreError> {
        let holidays = merge_holiday_types(seed.holidays)?;

        let mut seen = HashSet::new();
        for employee in &seed.employees {
            employee.validate().map_err(|errors| StoreError::Employee {
                email: employee.email.clone(),
                message: errors.to_string(),
            })?;
            if !seen.insert(employee.email.to_ascii_lowercase()) {
                return Err(StoreError::DuplicateEmployee(employee.email.clone()));
            }
        }
        let mut employees = seed.employees;
        employees.sort_by(|a, b| a.name.cmp(&b.name));

        for project in &seed.projects {
            project.validate().map_err(|errors| StoreError::Project {
                key: project.key.clone(),
                message: errors.to_string(),
            })?;
        }
        let mut projects = seed.projects;
        projects.sort_by(|a, b| a.key.cmp(&b.key));

        let store = Self {
            holidays,
            employees,
            projects,
        };
        for employee in store.unresolved_managers() {
            tracing::warn!(
                employee = %employee.email,
                reporting_manager = %employee.reporting_manager,
                "Reporting manager does not match any employee name"
            );
        }
        Ok(store)
    }

    pub fn has_holidays(&self) -> bool {
        !self.holidays.is_empty()
    }

    /// Returns the holiday groups matching `filter`. Groups left without
    /// entries by the filter are omitted.
    pub fn holidays(&self, filter: &HolidayFilter) -> Vec<HolidayType> {
        if filter.is_empty() {
            return self.holidays.clone();
        }
        self.holidays
            .iter()
            .filter_map(|group| {
                let holidays: Vec<_> = group
                    .holidays
                    .iter()
                    .filter(|h| filter.year.map_or(true, |y| h.observed_year() == Some(y)))
                    .filter(|h| {
                        filter
                            .location
                            .as_deref()
                            .map_or(true, |loc| h.applies_to_location(loc))
                    })
                    .cloned()
                    .collect();
                (!holidays.is_empty()).then(|| HolidayType {
                    holiday_type: group.holiday_type.clone(),
                    holidays,
                })
            })
            .collect()
    }

    pub fn employees(&self, department: Option<&str>) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| department.map_or(true, |d| e.in_department(d)))
            .cloned()
            .collect()
    }

    pub fn employee_by_email(&self, email: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.email.eq_ignore_ascii_case(email.trim()))
    }

    /// Employees whose `reportingManager` names nobody in the directory.
    /// Names compare case-insensitively, as the frontend resolves them.
    pub fn unresolved_managers(&self) -> Vec<&Employee> {
        let names: HashSet<String> = self
            .employees
            .iter()
            .map(|e| e.name.trim().to_ascii_lowercase())
            .collect();
        self.employees
            .iter()
            .filter(|e| {
                e.has_manager() && !names.contains(&e.reporting_manager.trim().to_ascii_lowercase())
            })
            .collect()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn holiday_count(&self) -> usize {
        self.holidays.iter().map(|g| g.holidays.len()).sum()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }
}

/// Validates every group and folds groups that share a label into one,
/// keeping first-seen label order and sorting entries by observed date.
fn merge_holiday_types(groups: Vec<HolidayType>) -> Result<Vec<HolidayType>, HolidayShapeError> {
    let mut merged: Vec<HolidayType> = Vec::new();
    for group in groups {
        group.validate()?;
        let label = group.holiday_type.trim().to_string();
        match merged
            .iter_mut()
            .find(|existing| existing.holiday_type.eq_ignore_ascii_case(&label))
        {
            Some(existing) => existing.holidays.extend(group.holidays),
            None => merged.push(HolidayType {
                holiday_type: label,
                holidays: group.holidays,
            }),
        }
    }
    for group in &mut merged {
        group
            .holidays
            .sort_by(|a, b| a.holiday_date.trim().cmp(b.holiday_date.trim()));
    }
    Ok(merged)
}
