pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, Result, StoreError, StoreResult};
pub use models::coord::Coord;
pub use models::identity::Identity;
pub use models::location::{Location, LocationStyle};
pub use store::UserStore;

#[cfg(test)]
mod tests;
