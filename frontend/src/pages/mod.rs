pub mod admins;
pub mod billing;
pub mod brands;
pub mod categories;
pub mod dashboard;
pub mod disputes;
pub mod login;
pub mod not_found;
pub mod overview;
pub mod reels;
pub mod requests;
pub mod reviews;
pub mod settings;
