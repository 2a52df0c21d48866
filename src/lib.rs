// THEORY:
// This file is the main entry point for the `red_vision` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like the `visual_tester`
// harness).
//
// The primary goal is to export the `RedDetector` and its associated data
// structures (`DetectorConfig`, `PixelLocation`, the two argmax strategies) as
// the clean, high-level interface for the whole engine. The low-level modules
// (`core_modules`) stay encapsulated behind `pipeline`, providing a clean
// separation between pixel math and the API consumers actually call.

pub mod core_modules;
pub mod error;
pub mod pipeline;
