pub mod auth;
pub mod config;
pub mod models;
pub mod parse;
pub mod report;
pub mod run;
