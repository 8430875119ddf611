use num_derive::{FromPrimitive, ToPrimitive};

use crate::geometry::Size;
use crate::FIMC_DEVICES;

/// FIMC IP revision. The revisions differ in how the main scaler ratio is
/// encoded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
#[repr(u32)]
pub enum HwVersion {
    /// S5P6442
    V43 = 0x43,
    V45 = 0x45,
    V50 = 0x50,
}

impl HwVersion {
    /// Fractional bits of the main scaler ratio.
    pub fn main_ratio_shift(self) -> u32 {
        match self {
            HwVersion::V50 => 14,
            _ => 8,
        }
    }
}

/// Per-instance size limits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FimcLimits {
    pub pre_dst_w: u32,
    pub bypass_w: u32,
    pub trg_h_no_rot: u32,
    pub trg_h_rot: u32,
    pub real_w_no_rot: u32,
    pub real_h_rot: u32,
}

pub const FIMC_LIMITS: [FimcLimits; FIMC_DEVICES] = [
    FimcLimits {
        pre_dst_w: 2048,
        bypass_w: 2592,
        trg_h_no_rot: 2048,
        trg_h_rot: 2048,
        real_w_no_rot: 2048,
        real_h_rot: 2048,
    },
    FimcLimits {
        pre_dst_w: 854,
        bypass_w: 2592,
        trg_h_no_rot: 2592,
        trg_h_rot: 720,
        real_w_no_rot: 2592,
        real_h_rot: 720,
    },
    FimcLimits {
        pre_dst_w: 320,
        bypass_w: 800,
        trg_h_no_rot: 320,
        trg_h_rot: 320,
        real_w_no_rot: 320,
        real_h_rot: 320,
    },
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScalerError {
    /// Downscale of 64x or more on one axis
    RatioOutOfRange,
    ZeroSize,
    /// A pre-scaler or input dimension exceeds the instance limits
    ExceedsLimit,
}

/// Picks the pre-scaler power of two for one axis. Returns `(ratio, shift)`
/// with `ratio == 1 << shift`, or `None` if the downscale is 64x or more.
pub fn prescale_factor(src: u32, dst: u32) -> Option<(u32, u32)> {
    let (src, dst) = (src as u64, dst as u64);
    if dst == 0 || src >= dst * 64 {
        return None;
    }
    let shift = (1..=5u32).rev().find(|&s| src >= dst << s).unwrap_or(0);
    Some((1 << shift, shift))
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ScalerSettings {
    pub bypass: bool,
    pub scaleup_h: bool,
    pub scaleup_v: bool,
    pub pre_hratio: u32,
    pub pre_vratio: u32,
    pub hfactor: u32,
    pub vfactor: u32,
    pub pre_dst_width: u32,
    pub pre_dst_height: u32,
    pub main_hratio: u32,
    pub main_vratio: u32,
    pub real_width: u32,
    pub real_height: u32,
}

impl ScalerSettings {
    /// Settings that move `src` to `dst`. The caller swaps `dst` beforehand
    /// when the output is rotated by 90 or 270 degrees.
    pub fn compute(src: Size, dst: Size, hw: HwVersion) -> Result<Self, ScalerError> {
        if src.width == 0 || src.height == 0 || dst.width == 0 || dst.height == 0 {
            return Err(ScalerError::ZeroSize);
        }
        let (pre_hratio, hfactor) =
            prescale_factor(src.width, dst.width).ok_or(ScalerError::RatioOutOfRange)?;
        let (pre_vratio, vfactor) =
            prescale_factor(src.height, dst.height).ok_or(ScalerError::RatioOutOfRange)?;

        let shift = hw.main_ratio_shift();
        Ok(ScalerSettings {
            bypass: false,
            scaleup_h: dst.width >= src.width,
            scaleup_v: dst.height >= src.height,
            pre_hratio,
            pre_vratio,
            hfactor,
            vfactor,
            pre_dst_width: src.width / pre_hratio,
            pre_dst_height: src.height / pre_vratio,
            main_hratio: (src.width << shift) / (dst.width << hfactor),
            main_vratio: (src.height << shift) / (dst.height << vfactor),
            real_width: src.width,
            real_height: src.height,
        })
    }

    /// Pass-through: the scaler is bypassed and the frame is copied 1:1.
    pub fn bypass(size: Size) -> Self {
        ScalerSettings {
            bypass: true,
            pre_hratio: 1,
            pre_vratio: 1,
            pre_dst_width: size.width,
            pre_dst_height: size.height,
            real_width: size.width,
            real_height: size.height,
            ..Default::default()
        }
    }

    /// Shift factor programmed next to the pre-scaler ratios.
    pub fn shfactor(&self) -> u32 { 10 - (self.hfactor + self.vfactor) }

    pub fn check_limits(&self, limits: &FimcLimits, rotated: bool) -> Result<(), ScalerError> {
        if self.bypass {
            return if self.real_width > limits.bypass_w { Err(ScalerError::ExceedsLimit) } else { Ok(()) };
        }
        if self.pre_dst_width > limits.pre_dst_w {
            return Err(ScalerError::ExceedsLimit);
        }
        let fits = if rotated {
            self.real_height <= limits.real_h_rot
        } else {
            self.real_width <= limits.real_w_no_rot
        };
        if fits { Ok(()) } else { Err(ScalerError::ExceedsLimit) }
    }
}

#[cfg(test)]
mod tests {
    use num_traits::FromPrimitive;

    use super::*;

    #[test]
    fn prescale_steps() {
        assert_eq!(prescale_factor(640, 640), Some((1, 0)));
        assert_eq!(prescale_factor(320, 640), Some((1, 0)));
        assert_eq!(prescale_factor(1280, 640), Some((2, 1)));
        assert_eq!(prescale_factor(2047, 640), Some((2, 1)));
        assert_eq!(prescale_factor(2560, 640), Some((4, 2)));
        assert_eq!(prescale_factor(2048, 64), Some((32, 5)));
        assert_eq!(prescale_factor(4096, 64), None);
        assert_eq!(prescale_factor(100, 0), None);
    }

    #[test]
    fn downscale_v43() {
        let s = ScalerSettings::compute(Size::new(1280, 960), Size::new(640, 480), HwVersion::V43).unwrap();
        assert_eq!((s.pre_hratio, s.hfactor), (2, 1));
        assert_eq!((s.pre_vratio, s.vfactor), (2, 1));
        assert_eq!((s.pre_dst_width, s.pre_dst_height), (640, 480));
        // (1280 << 8) / (640 << 1)
        assert_eq!(s.main_hratio, 256);
        assert_eq!(s.main_vratio, 256);
        assert!(!s.scaleup_h && !s.scaleup_v);
        assert_eq!(s.shfactor(), 8);
    }

    #[test]
    fn upscale_v50() {
        let s = ScalerSettings::compute(Size::new(320, 240), Size::new(640, 480), HwVersion::V50).unwrap();
        assert_eq!((s.pre_hratio, s.pre_vratio), (1, 1));
        assert_eq!(s.main_hratio, (320 << 14) / 640);
        assert_eq!(s.main_vratio, 1 << 13);
        assert!(s.scaleup_h && s.scaleup_v);
        assert_eq!(s.shfactor(), 10);
    }

    #[test]
    fn rejects_extreme_ratios() {
        assert_eq!(
            ScalerSettings::compute(Size::new(4096, 480), Size::new(32, 480), HwVersion::V43),
            Err(ScalerError::RatioOutOfRange)
        );
        assert_eq!(
            ScalerSettings::compute(Size::new(0, 480), Size::new(32, 480), HwVersion::V43),
            Err(ScalerError::ZeroSize)
        );
    }

    #[test]
    fn limits_per_instance() {
        let s = ScalerSettings::compute(Size::new(800, 600), Size::new(800, 600), HwVersion::V43).unwrap();
        assert!(s.check_limits(&FIMC_LIMITS[0], false).is_ok());
        // FIMC1 pre-scaler output is capped at 854
        assert!(s.check_limits(&FIMC_LIMITS[1], false).is_ok());
        assert!(s.check_limits(&FIMC_LIMITS[1], true).is_ok());
        assert_eq!(s.check_limits(&FIMC_LIMITS[2], false), Err(ScalerError::ExceedsLimit));

        let wide = ScalerSettings::compute(Size::new(1024, 768), Size::new(1024, 768), HwVersion::V43).unwrap();
        assert_eq!(wide.check_limits(&FIMC_LIMITS[1], false), Err(ScalerError::ExceedsLimit));
        assert_eq!(wide.check_limits(&FIMC_LIMITS[1], true), Err(ScalerError::ExceedsLimit));

        let pass = ScalerSettings::bypass(Size::new(2592, 1944));
        assert!(pass.check_limits(&FIMC_LIMITS[0], false).is_ok());
        assert_eq!(pass.check_limits(&FIMC_LIMITS[2], false), Err(ScalerError::ExceedsLimit));
    }

    #[test]
    fn hw_version_from_raw() {
        assert_eq!(HwVersion::from_u32(0x50), Some(HwVersion::V50));
        assert_eq!(HwVersion::from_u32(0x40), None);
    }
}
