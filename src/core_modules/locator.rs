// THEORY:
// The `locator` module answers one question: which pixel in the frame is the
// reddest? It deliberately ships TWO interchangeable answers behind one trait:
//
// 1.  **ScalarScan**: the clear-but-slow reference. A nested row/column loop
//     with a running maximum. Every step is obvious; per-pixel call overhead
//     is the price.
// 2.  **BulkReduction**: the fast-but-opaque path. The whole redness map is
//     materialized in one tight pass over the interleaved bytes (a loop the
//     optimizer can vectorize), then a single max-location reduction runs over
//     the flat map.
//
// The two MUST stay behaviorally identical. That includes two subtle rules:
// - Tie-break: strict `>` acceptance makes the first maximal pixel in
//   row-major order win, in both strategies.
// - Zero seed: the running maximum starts at 0, not at the first pixel's
//   score. A frame whose every pixel scores <= 0 therefore reports (0, 0).
//   This replicates the reference behavior; it is a documented edge-case
//   policy, preserved on purpose so the strategies stay interchangeable, not
//   a bug to silently fix.

pub mod locator {
    use crate::core_modules::frame::frame::{CHANNELS, Frame};
    use crate::core_modules::pixel::pixel::Redness;
    use crate::error::VisionError;

    /// A 0-indexed pixel coordinate: `x` is the column, `y` is the row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PixelLocation {
        pub x: u32,
        pub y: u32,
    }

    /// The full per-pixel redness map, row-major, one bulk pass over the
    /// interleaved bytes.
    pub fn redness_map(frame: &Frame) -> Vec<Redness> {
        frame
            .data()
            .chunks_exact(CHANNELS)
            .map(|bgr| {
                let b = bgr[0] as Redness;
                let g = bgr[1] as Redness;
                let r = bgr[2] as Redness;
                (r - g) + (r - b)
            })
            .collect()
    }

    /// One way of locating the reddest pixel in a frame. Implementations must
    /// agree with each other on every input.
    pub trait ArgmaxStrategy {
        fn locate(&self, frame: &Frame) -> Result<PixelLocation, VisionError>;
    }

    /// Element-by-element nested-loop scan. The obvious reference
    /// implementation.
    pub struct ScalarScan;

    impl ArgmaxStrategy for ScalarScan {
        fn locate(&self, frame: &Frame) -> Result<PixelLocation, VisionError> {
            if frame.is_empty() {
                return Err(VisionError::EmptyImage);
            }

            let mut max_redness: Redness = 0;
            let mut best = PixelLocation { x: 0, y: 0 };
            for row in 0..frame.height() {
                for col in 0..frame.width() {
                    let redness = frame.pixel_at(row, col).redness();
                    // Strict `>`: first occurrence in row-major order wins ties.
                    if redness > max_redness {
                        max_redness = redness;
                        best = PixelLocation { x: col, y: row };
                    }
                }
            }
            Ok(best)
        }
    }

    /// Whole-map pass plus a single max-location reduction. The fast
    /// implementation; the capture loop uses this one.
    pub struct BulkReduction;

    impl ArgmaxStrategy for BulkReduction {
        fn locate(&self, frame: &Frame) -> Result<PixelLocation, VisionError> {
            if frame.is_empty() {
                return Err(VisionError::EmptyImage);
            }

            let map = redness_map(frame);

            // Seeded at (index 0, redness 0) with strict `>`, matching
            // ScalarScan's zero-seed policy and its row-major tie-break.
            let mut best_index = 0usize;
            let mut max_redness: Redness = 0;
            for (index, &redness) in map.iter().enumerate() {
                if redness > max_redness {
                    max_redness = redness;
                    best_index = index;
                }
            }

            let width = frame.width() as usize;
            Ok(PixelLocation {
                x: (best_index % width) as u32,
                y: (best_index / width) as u32,
            })
        }
    }
}
