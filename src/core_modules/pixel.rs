// THEORY:
// The `Pixel` module is the most fundamental unit of the vision system. It is a
// "dumb" data container for a single pixel plus the one single-pixel heuristic
// this engine needs: the redness score. Anything that needs more than one pixel
// (argmax over a frame, tie-breaking) belongs in higher-level modules like
// `locator`.
//
// Key architectural principles:
// 1.  **BGR channel order**: pixels are stored in the same channel order as the
//     source frame buffer (index 0 = blue, 1 = green, 2 = red). The order is
//     load-bearing: swapping channels changes which pixel scores highest.
// 2.  **Signed-widened arithmetic**: every channel is widened to `i32` BEFORE
//     any subtraction. Subtracting in the raw `u8` representation wraps
//     negative differences around to large positive values (e.g. 2u8 - 3u8 ==
//     255) and silently selects the wrong pixel. The widening is enforced here,
//     by the type of the intermediate values, not by runtime checks elsewhere.
// 3.  **Purity**: `redness` is a pure function of the three channels. No state,
//     no side effects.

pub mod pixel {
    pub type Channel = u8;
    /// A signed redness score. The score of a single pixel lies in [-510, 510],
    /// so `i16` would suffice; `i32` is used as the comfortable widened type.
    pub type Redness = i32;

    /// A "dumb" data container representing a single BGR pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The blue channel value (0-255). Buffer index 0.
        pub blue: Channel,
        /// The green channel value (0-255). Buffer index 1.
        pub green: Channel,
        /// The red channel value (0-255). Buffer index 2.
        pub red: Channel,
    }

    impl Pixel {
        pub fn new(blue: Channel, green: Channel, red: Channel) -> Self {
            Self { blue, green, red }
        }

        /// The redness score: `(r - g) + (r - b)` over signed-widened channels.
        pub fn redness(&self) -> Redness {
            let r = self.red as Redness;
            let g = self.green as Redness;
            let b = self.blue as Redness;
            (r - g) + (r - b)
        }
    }
}
