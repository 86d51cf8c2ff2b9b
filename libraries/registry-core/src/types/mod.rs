/// Domain types for the user registry
mod user;

pub use user::{NewUser, User, UserId};
