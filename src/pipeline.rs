// THEORY:
// The `pipeline` module is the final, top-level API for the engine. It wraps
// the strategy duality in a config-driven detector so callers pick a strategy
// once and then just hand frames over, and it re-exports the core data types
// so consumers never need to reach into `core_modules` directly.

use crate::core_modules::locator::locator::{ArgmaxStrategy, BulkReduction, ScalarScan};

// Re-export key data structures for the public API.
pub use crate::core_modules::frame::frame::{CHANNELS, Frame, OwnedFrame};
pub use crate::core_modules::locator::locator::{PixelLocation, redness_map};
pub use crate::core_modules::pixel::pixel::{Pixel, Redness};
pub use crate::error::VisionError;

/// Which argmax strategy the detector runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Nested-loop reference scan. Clear, slow.
    ScalarScan,
    /// Whole-map pass plus one reduction. Fast; the default.
    #[default]
    BulkReduction,
}

/// Configuration for the detector, allowing for tunable behavior.
#[derive(Debug, Clone, Default)]
pub struct DetectorConfig {
    pub strategy: StrategyKind,
}

/// The main, top-level struct for locating the reddest pixel in frames.
pub struct RedDetector {
    strategy: Box<dyn ArgmaxStrategy>,
}

impl RedDetector {
    pub fn new(config: DetectorConfig) -> Self {
        let strategy: Box<dyn ArgmaxStrategy> = match config.strategy {
            StrategyKind::ScalarScan => Box::new(ScalarScan),
            StrategyKind::BulkReduction => Box::new(BulkReduction),
        };
        Self { strategy }
    }

    /// Locates the reddest pixel of one frame. Nothing is retained across
    /// calls; each frame is scored from scratch.
    pub fn locate(&self, frame: &Frame) -> Result<PixelLocation, VisionError> {
        self.strategy.locate(frame)
    }
}

/// Convenience entry point using the fast strategy, for callers that don't
/// need to choose.
pub fn find_reddest_pixel(frame: &Frame) -> Result<PixelLocation, VisionError> {
    BulkReduction.locate(frame)
}
