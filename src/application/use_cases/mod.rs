pub mod contacts;
pub mod identity;
pub mod notifications;
pub mod waitlist;
