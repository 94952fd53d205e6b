pub mod client;
mod directory;
pub mod types;

pub use client::*;
pub use directory::{decode_path_segment, encode_path_segment};
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
