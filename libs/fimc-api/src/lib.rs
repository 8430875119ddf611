#![cfg_attr(not(feature = "std"), no_std)]

pub mod camera;
pub use camera::*;
pub mod format;
pub use format::*;
pub mod geometry;
pub use geometry::*;
pub mod scaler;
pub use scaler::*;
pub mod transform;
pub use transform::*;

/// Number of FIMC instances on the S5P6442.
pub const FIMC_DEVICES: usize = 3;
/// Number of output ping-pong address slots.
pub const FIMC_PHYBUFS: usize = 4;
/// Output widths at or above this use the ITU709 colour space conversion.
pub const FIMC_HD_WIDTH: u32 = 1280;

/// Y/Cb/Cr DMA base addresses for one frame.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BufferSet {
    pub y: u32,
    pub cb: u32,
    pub cr: u32,
}

impl BufferSet {
    pub const fn new(y: u32, cb: u32, cr: u32) -> Self { BufferSet { y, cb, cr } }
}

/// Where the FIMC pulls its input from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputPath {
    /// External camera (ITU or MIPI)
    Camera,
    /// Memory via the MSDMA read channel
    Memory,
}

/// The format/field pair of an active capture session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CaptureInfo {
    pub pixelformat: PixelFormat,
    pub field: FieldOrder,
}
