// src/core/mod.rs — Call session domain logic

pub mod agents;
pub mod controller;
pub mod session;
pub mod status;
