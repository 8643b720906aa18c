pub mod coord;
pub mod identity;
pub mod location;
