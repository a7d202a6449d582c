pub mod about;
pub mod home;
pub mod not_found;
pub mod terms_of_service;

pub use about::About;
pub use home::Home;
pub use not_found::NotFound;
pub use terms_of_service::TermsOfService;
