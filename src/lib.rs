//! Sprite565 - compile sprite images into RGB565 firmware tables
//!
//! This library provides functionality to:
//! - Decode sprite source images into RGBA pixel grids
//! - Crop atlas regions and resize with nearest-neighbor sampling
//! - Encode pixels to RGB565 with color-key transparency (`0xF81F`)
//! - Render `const uint16_t name[] PROGMEM = { ... };` header files
//! - Batch-build every sprite in a `sprites.toml` manifest

pub mod build;
pub mod cli;
pub mod codec;
pub mod config;
pub mod emit;
pub mod grid;
pub mod import;
pub mod output;
pub mod resample;
