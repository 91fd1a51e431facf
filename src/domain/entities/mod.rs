pub mod contact;
pub mod waitlist;
