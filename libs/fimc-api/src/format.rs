use num_derive::{FromPrimitive, ToPrimitive};

const fn fourcc(code: &[u8; 4]) -> u32 {
    (code[0] as u32) | ((code[1] as u32) << 8) | ((code[2] as u32) << 16) | ((code[3] as u32) << 24)
}

/// Pixel layouts the FIMC can read or write.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb565,
    Rgb32,
    /// 4:2:2 packed, Y Cb Y Cr
    Yuyv,
    /// 4:2:2 packed, Cb Y Cr Y
    Uyvy,
    /// 4:2:2 packed, Cr Y Cb Y
    Vyuy,
    /// 4:2:2 packed, Y Cr Y Cb
    Yvyu,
    /// 4:2:0, Y plane + interleaved CbCr plane
    Nv12,
    /// NV12 laid out in 64x32 macroblock tiles
    Nv12t,
    /// 4:2:0, Y plane + interleaved CrCb plane
    Nv21,
    /// 4:2:2, Y plane + interleaved CbCr plane
    Nv16,
    /// 4:2:2, Y plane + interleaved CrCb plane
    Nv61,
    /// 4:2:0, three planes
    Yuv420,
    /// 4:2:2, three planes
    Yuv422p,
    Yuv444,
}

const FOURCC_TABLE: [(PixelFormat, u32); 14] = [
    (PixelFormat::Rgb565, fourcc(b"RGBP")),
    (PixelFormat::Rgb32, fourcc(b"RGB4")),
    (PixelFormat::Yuyv, fourcc(b"YUYV")),
    (PixelFormat::Uyvy, fourcc(b"UYVY")),
    (PixelFormat::Vyuy, fourcc(b"VYUY")),
    (PixelFormat::Yvyu, fourcc(b"YVYU")),
    (PixelFormat::Nv12, fourcc(b"NV12")),
    (PixelFormat::Nv12t, fourcc(b"TV12")),
    (PixelFormat::Nv21, fourcc(b"NV21")),
    (PixelFormat::Nv16, fourcc(b"NV16")),
    (PixelFormat::Nv61, fourcc(b"NV61")),
    (PixelFormat::Yuv420, fourcc(b"YU12")),
    (PixelFormat::Yuv422p, fourcc(b"422P")),
    (PixelFormat::Yuv444, fourcc(b"Y444")),
];

impl PixelFormat {
    /// V4L2 four character code of this format.
    pub fn fourcc(self) -> u32 {
        FOURCC_TABLE.iter().find(|(fmt, _)| *fmt == self).map(|&(_, code)| code).unwrap_or(0)
    }

    pub fn from_fourcc(code: u32) -> Option<Self> {
        FOURCC_TABLE.iter().find(|&&(_, c)| c == code).map(|&(fmt, _)| fmt)
    }

    /// Number of memory planes the format occupies.
    pub fn planes(self) -> usize {
        match self {
            PixelFormat::Nv12
            | PixelFormat::Nv12t
            | PixelFormat::Nv21
            | PixelFormat::Nv16
            | PixelFormat::Nv61 => 2,
            PixelFormat::Yuv420 | PixelFormat::Yuv422p => 3,
            _ => 1,
        }
    }

    pub fn is_rgb(self) -> bool { matches!(self, PixelFormat::Rgb565 | PixelFormat::Rgb32) }

    pub fn is_tiled(self) -> bool { self == PixelFormat::Nv12t }
}

/// V4L2 field order, numbered as in `enum v4l2_field`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum FieldOrder {
    Any = 0,
    None = 1,
    Top = 2,
    Bottom = 3,
    Interlaced = 4,
    SeqTb = 5,
    SeqBt = 6,
    Alternate = 7,
    InterlacedTb = 8,
    InterlacedBt = 9,
}

impl FieldOrder {
    pub fn is_interlaced(self) -> bool {
        matches!(self, FieldOrder::Interlaced | FieldOrder::InterlacedTb)
    }
}
