pub mod account_service;
pub mod routine_service;

pub use account_service::MagicianAccountService;
pub use routine_service::RoutineCatalogService;
