//! Message handlers organized by category

mod account;
mod auth;
mod files;
mod keyboard;
mod settings;
mod ui;
mod uploads;
mod users;
