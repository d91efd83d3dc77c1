// Computation core for the console dashboard widgets

pub mod config;
pub mod health;
pub mod metrics;
pub mod models;
pub mod poll;
