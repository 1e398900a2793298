//! Persisted entities and the response projection built from them

pub mod location;
pub mod user;
pub mod view;

pub use location::{Location, NewLocation};
pub use user::{NewUser, User, UserWithLocation};
pub use view::UserLocationView;
