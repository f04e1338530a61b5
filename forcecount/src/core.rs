// src/core.rs
pub mod config;
pub mod report;
pub mod scanner;
