//! Data shapes served by the directory API.

pub mod employee;
pub mod holiday;
pub mod project;

pub use employee::Employee;
pub use holiday::{Holiday, HolidayShapeError, HolidayType, HolidaysData, HolidaysResponse};
pub use project::Project;
