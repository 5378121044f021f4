pub mod err;
pub mod users;
