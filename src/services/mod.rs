// src/services/mod.rs
pub mod prices;
pub mod render;
pub mod validation;
