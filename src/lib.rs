// src/lib.rs — Library root for voicedial

pub mod cli;
pub mod core;
pub mod infra;
pub mod provider;
