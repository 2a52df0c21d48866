pub mod frame;
pub mod locator;
pub mod pixel;
