pub mod location_repository;
pub mod user_repository;
