//! # iconforge
//!
//! Generates Android launcher icons from a single source image: one plain and one
//! circular-masked PNG per density bucket, plus the two adaptive-icon descriptor
//! files under `mipmap-anydpi-v26`.
//!
//! ## Architecture
//!
//! The crate is built using:
//! - **image**: decoding, Lanczos3 resampling and PNG encoding
//! - **config** + **dotenvy**: layered configuration (embedded TOML, local file, env)
//! - **tracing**: structured logging for every generated file
//! - **thiserror** / **anyhow**: typed library errors, contextual errors in the binary
//!
//! ## Core Components
//!
//! - [`app`]: Logging setup and a full run mapped to the exit code
//! - [`config`]: Configuration loading and validation
//! - [`descriptor`]: Static adaptive-icon XML emission
//! - [`error`]: Fatal and per-file error types
//! - [`generator`]: End-to-end run (load, render, descriptors, report)
//! - [`metrics`]: Per-run success/failure counters
//! - [`render`]: Resize, circular mask, compositing and PNG output
//! - [`source`]: Source validation, decoding and alpha normalisation
//! - [`types`]: The fixed size table and conventional file names

pub mod app;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod render;
pub mod source;
pub mod types;

#[cfg(test)]
mod tests;
