//! Domain entities

pub mod advice;
pub mod user;
pub mod weather;
