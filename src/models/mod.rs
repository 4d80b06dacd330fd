pub mod movie;
pub mod user;

pub use movie::*;
pub use user::*;
