use anyhow::{Context, Result, bail};
use opencv::{
    core::{Point, Scalar},
    highgui, imgproc,
    prelude::*,
    videoio::{self, VideoCapture},
};
use red_vision::pipeline::{Frame, find_reddest_pixel};
use tracing::{info, warn};

const WINDOW: &str = "Reddest Pixel";
const REQUESTED_WIDTH: f64 = 320.0;
const REQUESTED_HEIGHT: f64 = 240.0;
const MARKER_RADIUS: i32 = 5;
const FRAME_WAIT_MS: i32 = 33;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    // --- 1. Capture Device Initialization ---
    let mut capture =
        VideoCapture::new(0, videoio::CAP_ANY).context("failed to open capture device 0")?;
    if !capture.is_opened()? {
        bail!("capture device 0 is unavailable");
    }

    // Advisory only: the device may ignore the request, and the loop reads
    // the actual size off each delivered frame.
    capture.set(videoio::CAP_PROP_FRAME_WIDTH, REQUESTED_WIDTH)?;
    capture.set(videoio::CAP_PROP_FRAME_HEIGHT, REQUESTED_HEIGHT)?;
    info!(
        "capture open, delivering {}x{}",
        capture.get(videoio::CAP_PROP_FRAME_WIDTH)?,
        capture.get(videoio::CAP_PROP_FRAME_HEIGHT)?
    );

    highgui::named_window(WINDOW, highgui::WINDOW_AUTOSIZE)?;

    // --- 2. Main Capture/Mark/Display Loop ---
    let mut frame = Mat::default();
    loop {
        match capture.read(&mut frame) {
            Ok(true) if !frame.empty() => {
                // A bad frame aborts this iteration only, never the loop.
                if let Err(e) = mark_and_show(&mut frame) {
                    warn!("skipping frame: {e}");
                }
            }
            Ok(_) => {
                warn!("frame read failure, skipping");
            }
            Err(e) => {
                warn!("frame read failure, skipping: {e}");
            }
        }

        // Bounded poll keeps the loop interactive; any key stops it.
        let key = highgui::wait_key(FRAME_WAIT_MS)?;
        if key > 0 && key != 255 {
            break;
        }
    }
    Ok(())
}

/// Locates the reddest pixel of one frame, marks it with a filled green
/// circle, and displays the result.
fn mark_and_show(frame: &mut Mat) -> Result<()> {
    let width = frame.cols() as u32;
    let height = frame.rows() as u32;
    let channels = frame.channels() as usize;

    let location = {
        // OpenCV delivers interleaved BGR, which is exactly the layout the
        // library scores, so the bytes are handed over without conversion.
        let data = frame.data_bytes()?;
        let view = Frame::from_bgr(data, width, height, channels)?;
        find_reddest_pixel(&view)?
    };

    imgproc::circle(
        frame,
        Point::new(location.x as i32, location.y as i32),
        MARKER_RADIUS,
        Scalar::new(0.0, 255.0, 0.0, 0.0),
        imgproc::FILLED,
        imgproc::LINE_8,
        0,
    )?;

    highgui::imshow(WINDOW, frame)?;
    Ok(())
}
