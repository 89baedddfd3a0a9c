pub mod cover;
pub mod home;
pub mod manga;
