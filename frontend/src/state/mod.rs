pub mod context;
pub mod editing;
pub mod forms;
pub mod routing;
pub mod session;
