pub mod employees;
pub mod holidays;
pub mod home;
pub mod projects;

pub use employees::{EmployeeDetailPage, EmployeesPage};
pub use holidays::HolidaysPage;
pub use home::HomePage;
pub use projects::ProjectsPage;
