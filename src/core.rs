// src/core.rs
pub mod input;
pub mod loader;
pub mod normalize;
pub mod progress;
pub mod writer;

#[cfg(test)]
pub mod test_utils;
