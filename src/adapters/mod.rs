pub mod email;
pub mod http;
pub mod identity;
pub mod notify;
pub mod persistence;
