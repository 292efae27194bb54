pub mod contact;
pub mod profile;
