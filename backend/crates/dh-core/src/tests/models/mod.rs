mod identity;
mod location;
