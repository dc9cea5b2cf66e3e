//! Server-rendered HTML pages

pub mod account_page;
pub mod home;
pub mod html;
