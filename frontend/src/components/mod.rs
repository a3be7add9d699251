pub mod change_password_modal;
pub mod dashboard_view;
pub mod header;
pub mod login_form;
pub mod pet_modal;
pub mod pets_view;
pub mod reports_view;
pub mod tab_nav;
pub mod user_modal;
pub mod users_view;
pub mod vaccination_modal;
pub mod vaccinations_view;

pub use change_password_modal::ChangePasswordModal;
pub use dashboard_view::DashboardView;
pub use header::Header;
pub use login_form::LoginForm;
pub use pet_modal::PetModal;
pub use pets_view::PetsView;
pub use reports_view::ReportsView;
pub use tab_nav::TabNav;
pub use user_modal::UserModal;
pub use users_view::UsersView;
pub use vaccination_modal::VaccinationModal;
pub use vaccinations_view::VaccinationsView;
