//! HTTP request handlers

pub mod advisor;
pub mod chat;
pub mod config;
pub mod health;
pub mod weather;
