// THEORY:
// The `Frame` module bridges raw byte buffers and the pixel-level math. A frame
// arrives from a capture device as one flat, interleaved BGR byte buffer; this
// module wraps that buffer in a shape-checked view so every downstream module
// can index pixels without re-validating the layout.
//
// `Frame` borrows; nothing is copied on the per-frame hot path. `OwnedFrame`
// exists for callers that start from an `image`-crate buffer (RGB order) and
// need the bytes reordered into the BGR layout the scorer expects.

pub mod frame {
    use crate::core_modules::pixel::pixel::Pixel;
    use crate::error::VisionError;
    use image::RgbImage;

    /// Interleaved channels per pixel in a valid frame buffer.
    pub const CHANNELS: usize = 3;

    /// A borrowed, shape-checked view over an interleaved BGR frame buffer.
    #[derive(Debug, Clone, Copy)]
    pub struct Frame<'a> {
        data: &'a [u8],
        width: u32,
        height: u32,
    }

    impl<'a> Frame<'a> {
        /// Wraps a raw interleaved buffer. `channels` is the channel count the
        /// caller believes the buffer carries; anything but 3 is rejected.
        pub fn from_bgr(
            data: &'a [u8],
            width: u32,
            height: u32,
            channels: usize,
        ) -> Result<Self, VisionError> {
            if channels != CHANNELS {
                return Err(VisionError::InvalidImageShape { channels });
            }
            let expected = width as usize * height as usize * CHANNELS;
            if data.len() != expected {
                return Err(VisionError::BufferSizeMismatch {
                    expected,
                    got: data.len(),
                });
            }
            Ok(Self {
                data,
                width,
                height,
            })
        }

        pub fn width(&self) -> u32 {
            self.width
        }

        pub fn height(&self) -> u32 {
            self.height
        }

        /// True when the frame has zero area.
        pub fn is_empty(&self) -> bool {
            self.width == 0 || self.height == 0
        }

        /// The raw interleaved BGR bytes, row-major.
        pub fn data(&self) -> &'a [u8] {
            self.data
        }

        /// The pixel at (row, col). Callers must stay in bounds; the shape was
        /// validated at construction.
        pub fn pixel_at(&self, row: u32, col: u32) -> Pixel {
            let index = (row as usize * self.width as usize + col as usize) * CHANNELS;
            Pixel::new(self.data[index], self.data[index + 1], self.data[index + 2])
        }
    }

    /// An owned BGR frame buffer, for callers that don't already hold one.
    #[derive(Debug, Clone)]
    pub struct OwnedFrame {
        data: Vec<u8>,
        width: u32,
        height: u32,
    }

    impl OwnedFrame {
        pub fn from_bgr_bytes(data: Vec<u8>, width: u32, height: u32) -> Result<Self, VisionError> {
            // Validate through the view constructor so both paths share rules.
            Frame::from_bgr(&data, width, height, CHANNELS)?;
            Ok(Self {
                data,
                width,
                height,
            })
        }

        /// Converts a standard `image` RGB buffer into the BGR layout the
        /// scorer expects. The red/blue swap here is what keeps channel
        /// indices 0=B, 1=G, 2=R true for images loaded from disk.
        pub fn from_rgb_image(image: &RgbImage) -> Self {
            let mut data = Vec::with_capacity(image.as_raw().len());
            for rgb in image.as_raw().chunks_exact(CHANNELS) {
                data.push(rgb[2]);
                data.push(rgb[1]);
                data.push(rgb[0]);
            }
            Self {
                data,
                width: image.width(),
                height: image.height(),
            }
        }

        pub fn as_frame(&self) -> Frame<'_> {
            Frame {
                data: &self.data,
                width: self.width,
                height: self.height,
            }
        }
    }
}
