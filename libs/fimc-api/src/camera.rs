//! Description of the sensor attached to a FIMC instance.
//!
//! This is the subset of the board's camera platform data that the register
//! layer consumes: which bus the sensor sits on, how it orders its samples,
//! the source frame size, the crop window inside it, and the sync polarities.
use bitflags::bitflags;
use num_derive::{FromPrimitive, ToPrimitive};

use crate::geometry::Rect;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CameraPort {
    A,
    B,
}

/// Parallel interface timing standard.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ItuFormat {
    Itu601_8bit,
    /// Embedded sync codes; the ITU601 bit must be clear after reset.
    Itu656_8bit,
    Itu601_16bit,
}

/// CSI-2 data types accepted on the MIPI path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
#[repr(u32)]
pub enum MipiFormat {
    Ycbcr422_8bit = 0x1e,
    Raw8 = 0x2a,
    Raw10 = 0x2b,
    Raw12 = 0x2c,
    UserDefined1 = 0x30,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CameraBus {
    Itu { port: CameraPort, format: ItuFormat },
    /// Only MIPI port A is wired to the FIMC.
    Mipi { format: MipiFormat },
}

/// Sample order of 8-bit 4:2:2 data.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Order422 {
    YCbYCr,
    YCrYCb,
    CbYCrY,
    CrYCbY,
}

bitflags! {
    /// Sync signals the sensor drives inverted.
    pub struct SyncPolarity: u32 {
        const INV_PCLK  = 0b0001;
        const INV_VSYNC = 0b0010;
        const INV_HREF  = 0b0100;
        const INV_HSYNC = 0b1000;
    }
}

impl Default for SyncPolarity {
    fn default() -> Self { SyncPolarity::empty() }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CameraConfig {
    pub bus: CameraBus,
    pub order422: Order422,
    /// Source frame width as driven by the sensor
    pub width: u32,
    /// Source frame height as driven by the sensor
    pub height: u32,
    /// Crop window inside the source frame
    pub window: Rect,
    pub polarity: SyncPolarity,
}

impl CameraConfig {
    pub fn is_itu656(&self) -> bool {
        matches!(self.bus, CameraBus::Itu { format: ItuFormat::Itu656_8bit, .. })
    }

    /// Crop margins `(left, right, top, bottom)` of the window, or `None` if
    /// the window extends beyond the source frame.
    pub fn window_margins(&self) -> Option<(u32, u32, u32, u32)> {
        let w = &self.window;
        let right = self.width.checked_sub(w.width)?.checked_sub(w.left)?;
        let bottom = self.height.checked_sub(w.height)?.checked_sub(w.top)?;
        Some((w.left, right, w.top, bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cam(window: Rect) -> CameraConfig {
        CameraConfig {
            bus: CameraBus::Itu { port: CameraPort::A, format: ItuFormat::Itu601_8bit },
            order422: Order422::YCbYCr,
            width: 1024,
            height: 768,
            window,
            polarity: SyncPolarity::default(),
        }
    }

    #[test]
    fn margins() {
        assert_eq!(cam(Rect::new(16, 8, 1000, 752)).window_margins(), Some((16, 8, 8, 8)));
        assert_eq!(cam(Rect::new(0, 0, 1024, 768)).window_margins(), Some((0, 0, 0, 0)));
        assert_eq!(cam(Rect::new(32, 0, 1000, 768)).window_margins(), None);
        assert_eq!(cam(Rect::new(0, 0, 1024, 800)).window_margins(), None);
    }

    #[test]
    fn itu656_detection() {
        let mut c = cam(Rect::new(0, 0, 1024, 768));
        assert!(!c.is_itu656());
        c.bus = CameraBus::Itu { port: CameraPort::B, format: ItuFormat::Itu656_8bit };
        assert!(c.is_itu656());
        c.bus = CameraBus::Mipi { format: MipiFormat::Ycbcr422_8bit };
        assert!(!c.is_itu656());
    }
}
