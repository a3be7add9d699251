pub mod use_dashboard;
pub mod use_pets;
pub mod use_schedule;
pub mod use_session;
pub mod use_users;
pub mod use_vaccinations;
