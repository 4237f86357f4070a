// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on chunk size feature selection.
//!
//! This enables cleaner conditional compilation in tests:
//! - `#[cfg(chunk_eq_7)]` instead of `#[cfg(not(any(feature = "chunk_5", feature = "chunk_6", feature = "chunk_8")))]`

use std::env;

fn feature(name: &str) -> bool {
    env::var_os(format!("CARGO_FEATURE_{}", name.to_uppercase())).is_some()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(chunk_eq_7)");

    // MAX_CHUNK_SIZE = 7 (default or explicit chunk_7 feature)
    if !(feature("chunk_5") || feature("chunk_6") || feature("chunk_8")) {
        println!("cargo:rustc-cfg=chunk_eq_7");
    }
}
