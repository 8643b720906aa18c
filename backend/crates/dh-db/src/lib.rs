pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{MIGRATOR, create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::location_repository::LocationRepository;
pub use repositories::user_repository::UserRepository;
