//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: URL, format, directory and timeout resolution tests
//! - `loading`: Real loading from CLI arguments and environment variables

mod helpers;
