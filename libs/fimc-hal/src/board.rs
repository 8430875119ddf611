// Constants that describe where the FIMC blocks live on the S5P6442 and how a
// freshly attached instance is configured.
use fimc_api::{FimcLimits, HwVersion, FIMC_LIMITS};
use num_derive::{FromPrimitive, ToPrimitive};

pub const HW_FIMC0_BASE: usize = 0xEE20_0000;
pub const HW_FIMC1_BASE: usize = 0xEE30_0000;
pub const HW_FIMC2_BASE: usize = 0xEE40_0000;
/// Each instance decodes one page.
pub const FIMC_REG_LEN: usize = 4096;

/// Rough busy-wait calibration for the 667 MHz ARM1176 core, used when no
/// sleeping delay is available.
pub const SPINS_PER_MS: u64 = 333_000;

#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum FimcId {
    Fimc0 = 0,
    Fimc1 = 1,
    Fimc2 = 2,
}

impl FimcId {
    pub fn base(self) -> usize {
        match self {
            FimcId::Fimc0 => HW_FIMC0_BASE,
            FimcId::Fimc1 => HW_FIMC1_BASE,
            FimcId::Fimc2 => HW_FIMC2_BASE,
        }
    }

    pub fn limits(self) -> &'static FimcLimits { &FIMC_LIMITS[self as usize] }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FimcConfig {
    pub id: FimcId,
    pub hw_version: HwVersion,
    /// Upper bound for one frame-end poll
    pub frame_end_timeout_ms: u32,
    pub poll_interval_ms: u32,
    /// How long SWRST is held
    pub reset_settle_ms: u32,
}

impl FimcConfig {
    /// Defaults for the S5P6442.
    pub fn new(id: FimcId) -> Self {
        FimcConfig {
            id,
            hw_version: HwVersion::V43,
            frame_end_timeout_ms: 100,
            poll_interval_ms: 2,
            reset_settle_ms: 1,
        }
    }

    pub fn with_hw_version(mut self, hw_version: HwVersion) -> Self {
        self.hw_version = hw_version;
        self
    }

    /// Number of status polls before a wait gives up.
    pub fn poll_attempts(&self) -> u32 {
        if self.poll_interval_ms == 0 {
            self.frame_end_timeout_ms.max(1)
        } else {
            (self.frame_end_timeout_ms / self.poll_interval_ms).max(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use num_traits::FromPrimitive;

    use super::*;

    #[test]
    fn instance_table() {
        assert_eq!(FimcId::from_u8(1), Some(FimcId::Fimc1));
        assert_eq!(FimcId::from_u8(3), None);
        assert_eq!(FimcId::Fimc2.base(), 0xEE40_0000);
        assert_eq!(FimcId::Fimc1.limits().pre_dst_w, 854);
    }

    #[test]
    fn config_defaults() {
        let cfg = FimcConfig::new(FimcId::Fimc0);
        assert_eq!(cfg.hw_version, HwVersion::V43);
        assert_eq!(cfg.poll_attempts(), 50);
        let v50 = cfg.with_hw_version(HwVersion::V50);
        assert_eq!(v50.hw_version, HwVersion::V50);
        assert_eq!(v50.id, FimcId::Fimc0);
    }
}
