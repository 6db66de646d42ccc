#![forbid(unsafe_code)]

pub mod app;
pub mod assets;
pub mod catalog;
pub mod cli;
pub mod formats;
pub mod home;
pub mod loader;
pub mod logging;
pub mod matcher;
pub mod query;
