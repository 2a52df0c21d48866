use red_vision::core_modules::locator::locator::{ArgmaxStrategy, BulkReduction, ScalarScan};
use red_vision::pipeline::{Frame, OwnedFrame, PixelLocation, VisionError, find_reddest_pixel, redness_map};

/// Helper: a width x height BGR buffer filled with one color.
fn solid(width: u32, height: u32, bgr: [u8; 3]) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..width * height {
        data.extend_from_slice(&bgr);
    }
    data
}

/// Helper: overwrite the pixel at (row, col) in a width-wide buffer.
fn set_pixel(data: &mut [u8], width: u32, row: u32, col: u32, bgr: [u8; 3]) {
    let index = ((row * width + col) * 3) as usize;
    data[index..index + 3].copy_from_slice(&bgr);
}

fn strategies() -> [(&'static str, Box<dyn ArgmaxStrategy>); 2] {
    [
        ("ScalarScan", Box::new(ScalarScan)),
        ("BulkReduction", Box::new(BulkReduction)),
    ]
}

// ---------------------------------------------------------------------------
// Exactness: a single strictly-maximal pixel must be found at its exact
// coordinate by every strategy.
// ---------------------------------------------------------------------------

#[test]
fn unique_maximum_is_located_exactly() {
    let width = 17;
    let height = 11;
    let mut data = solid(width, height, [30, 30, 30]);
    set_pixel(&mut data, width, 7, 13, [10, 10, 200]);
    let frame = Frame::from_bgr(&data, width, height, 3).unwrap();
    let expected = PixelLocation { x: 13, y: 7 };

    for (name, strategy) in strategies() {
        assert_eq!(strategy.locate(&frame).unwrap(), expected, "{name}");
    }
}

#[test]
fn three_by_three_end_to_end() {
    // All black except a pure-red pixel at row=1, col=2.
    let mut data = solid(3, 3, [0, 0, 0]);
    set_pixel(&mut data, 3, 1, 2, [0, 0, 255]);
    let frame = Frame::from_bgr(&data, 3, 3, 3).unwrap();

    let location = find_reddest_pixel(&frame).unwrap();
    assert_eq!(location, PixelLocation { x: 2, y: 1 });

    let map = redness_map(&frame);
    assert_eq!(map[(1 * 3 + 2) as usize], 510);
}

// ---------------------------------------------------------------------------
// Equivalence: the two strategies must agree on every input. A deterministic
// pseudo-random image exercises arbitrary channel mixes.
// ---------------------------------------------------------------------------

#[test]
fn strategies_agree_on_noisy_frames() {
    let width = 64;
    let height = 48;
    // Simple LCG so the "random" frame is reproducible.
    let mut state: u32 = 0x2545_f491;
    let mut next = move || {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        (state >> 24) as u8
    };

    for _ in 0..8 {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height * 3 {
            data.push(next());
        }
        let frame = Frame::from_bgr(&data, width, height, 3).unwrap();
        assert_eq!(
            ScalarScan.locate(&frame).unwrap(),
            BulkReduction.locate(&frame).unwrap()
        );
    }
}

#[test]
fn strategies_agree_when_nothing_is_red() {
    // Global maximum redness is negative everywhere; both strategies keep
    // their zero seed and report the origin.
    let data = solid(8, 8, [200, 200, 0]);
    let frame = Frame::from_bgr(&data, 8, 8, 3).unwrap();
    let origin = PixelLocation { x: 0, y: 0 };

    for (name, strategy) in strategies() {
        assert_eq!(strategy.locate(&frame).unwrap(), origin, "{name}");
    }
}

// ---------------------------------------------------------------------------
// Overflow: redness must be computed in signed widened arithmetic.
// ---------------------------------------------------------------------------

#[test]
fn negative_redness_does_not_wrap() {
    // Cyan scores -510. If the subtraction ran in u8, every pixel would
    // score as a huge positive value and the single dull-red pixel below
    // would lose.
    let width = 6;
    let height = 4;
    let mut data = solid(width, height, [255, 255, 0]);
    set_pixel(&mut data, width, 2, 3, [0, 0, 1]);
    let frame = Frame::from_bgr(&data, width, height, 3).unwrap();

    let map = redness_map(&frame);
    assert_eq!(map[0], -510);

    let expected = PixelLocation { x: 3, y: 2 };
    for (name, strategy) in strategies() {
        assert_eq!(strategy.locate(&frame).unwrap(), expected, "{name}");
    }
}

// ---------------------------------------------------------------------------
// Tie-break: first occurrence in row-major order.
// ---------------------------------------------------------------------------

#[test]
fn equal_maxima_resolve_to_earlier_row_major_pixel() {
    // (row 0, col 1) and (row 1, col 0) both score 100.
    let mut data = solid(2, 2, [0, 0, 0]);
    set_pixel(&mut data, 2, 0, 1, [0, 0, 50]);
    set_pixel(&mut data, 2, 1, 0, [0, 0, 50]);
    let frame = Frame::from_bgr(&data, 2, 2, 3).unwrap();
    let expected = PixelLocation { x: 1, y: 0 };

    for (name, strategy) in strategies() {
        assert_eq!(strategy.locate(&frame).unwrap(), expected, "{name}");
    }
}

#[test]
fn equal_maxima_within_a_row_resolve_to_earlier_column() {
    let mut data = solid(4, 1, [0, 0, 0]);
    set_pixel(&mut data, 4, 0, 1, [0, 0, 99]);
    set_pixel(&mut data, 4, 0, 3, [0, 0, 99]);
    let frame = Frame::from_bgr(&data, 4, 1, 3).unwrap();
    let expected = PixelLocation { x: 1, y: 0 };

    for (name, strategy) in strategies() {
        assert_eq!(strategy.locate(&frame).unwrap(), expected, "{name}");
    }
}

// ---------------------------------------------------------------------------
// Shape errors.
// ---------------------------------------------------------------------------

#[test]
fn zero_area_frames_fail_with_empty_image() {
    for (width, height) in [(0u32, 0u32), (0, 9), (9, 0)] {
        let frame = Frame::from_bgr(&[], width, height, 3).unwrap();
        for (name, strategy) in strategies() {
            assert_eq!(
                strategy.locate(&frame).unwrap_err(),
                VisionError::EmptyImage,
                "{name} on {width}x{height}"
            );
        }
    }
}

#[test]
fn non_three_channel_buffers_are_rejected() {
    let data = vec![0u8; 4 * 4 * 4];
    for channels in [1usize, 2, 4] {
        assert_eq!(
            Frame::from_bgr(&data[..4 * 4 * channels], 4, 4, channels).unwrap_err(),
            VisionError::InvalidImageShape { channels }
        );
    }
}

// ---------------------------------------------------------------------------
// Interop: RGB images from the `image` crate get their channels reordered
// before scoring.
// ---------------------------------------------------------------------------

#[test]
fn rgb_image_interop_locates_the_red_pixel() {
    let mut image = image::RgbImage::from_pixel(5, 4, image::Rgb([0, 0, 255])); // all blue
    image.put_pixel(3, 2, image::Rgb([255, 0, 0])); // one red, at x=3, y=2

    let owned = OwnedFrame::from_rgb_image(&image);
    let location = find_reddest_pixel(&owned.as_frame()).unwrap();
    assert_eq!(location, PixelLocation { x: 3, y: 2 });
}
