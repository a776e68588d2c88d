//! Core library functions for the small-world network analyzer

pub mod config;
pub mod network;
pub mod storage;
pub mod sweep;

pub use anyhow::{Result, anyhow};
