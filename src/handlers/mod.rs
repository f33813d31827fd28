// src/handlers/mod.rs
pub mod prices;
