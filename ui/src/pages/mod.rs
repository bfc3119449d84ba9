//! Top-level views: one per navigator state

pub mod dashboard;
pub mod landing;
pub mod login;
