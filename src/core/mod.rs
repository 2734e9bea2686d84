pub mod api;
pub mod app;
pub mod config;
pub mod page;
pub mod paths;
pub mod samples;
