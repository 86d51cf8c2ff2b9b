/// Server services
pub mod registration;

pub use registration::register_user;
