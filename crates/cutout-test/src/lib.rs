//! cutout-test - Regression test framework
//!
//! A small regression harness supporting three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison, writing inspectable
//!   output images
//!
//! # Usage
//!
//! ```ignore
//! use cutout_test::RegParams;
//!
//! let mut rp = RegParams::new("correction");
//! rp.compare_values(1.0, accuracy, 0.05);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//!
//! Test inputs are synthesized (see [`synth`]); the repository ships
//! no binary image fixtures.

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use synth::{solid_raster, two_tone_scene, white_square_scene};

/// Get the path to the workspace root.
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // cutout-test is at crates/cutout-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory.
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory.
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
