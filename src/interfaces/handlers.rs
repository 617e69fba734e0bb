pub mod contact;
pub mod home;
pub mod portfolio;
pub mod system;
