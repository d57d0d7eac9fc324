// src/models/mod.rs

pub mod emission;
pub mod glacier;
pub mod quiz;
pub mod stats;
