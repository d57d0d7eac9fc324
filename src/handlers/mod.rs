// src/handlers/mod.rs

pub mod emissions;
pub mod glacier;
pub mod meta;
pub mod quiz;
