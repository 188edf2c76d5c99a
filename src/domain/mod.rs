//! Domain layer - Core business entities and logic
//!
//! This module contains the user record as the rest of the application sees
//! it, independent of how it is persisted, along with the input shapes
//! accepted for creating and updating it.

pub mod user;

pub use user::{CreateUser, UpdateUser, User, UserStats};
