pub mod employees;
pub mod health;
pub mod holidays;
pub mod projects;
