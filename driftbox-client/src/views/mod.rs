//! View rendering for the Driftbox client

mod account;
mod files;
mod layout;
mod login;
mod settings;
mod users;

pub use layout::main_layout;
