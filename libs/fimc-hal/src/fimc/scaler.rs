use fimc_api::{HwVersion, Rotation, ScalerSettings, Size};

use super::Fimc;
use crate::regs::*;
use crate::FimcError;

impl Fimc {
    /// Work out the scaler settings for `src` to `dst` and keep them for
    /// `set_prescaler`/`set_scaler`. `dst` is given as it appears after
    /// rotation.
    pub fn configure_scaler(&mut self, src: Size, dst: Size, rot: Rotation) -> Result<(), FimcError> {
        let dst = if rot.is_transposing() { dst.transposed() } else { dst };
        let sc = ScalerSettings::compute(src, dst, self.config.hw_version)
            .and_then(|sc| sc.check_limits(&self.limits, rot.is_transposing()).map(|_| sc))
            .map_err(|e| {
                log::error!("fimc{}: can't scale {:?} to {:?}: {:?}", self.config.id as u32, src, dst, e);
                FimcError::from(e)
            })?;
        log::debug!("fimc{}: scaler {:?}", self.config.id as u32, sc);
        self.sc = sc;
        Ok(())
    }

    pub fn set_scaler_settings(&mut self, sc: ScalerSettings) { self.sc = sc; }

    pub fn scaler_settings(&self) -> &ScalerSettings { &self.sc }

    pub fn set_prescaler(&mut self) {
        let ratio = self.compose(&[
            (CISCPRERATIO_SHFACTOR, self.sc.shfactor()),
            (CISCPRERATIO_PREHORRATIO, self.sc.pre_hratio),
            (CISCPRERATIO_PREVERRATIO, self.sc.pre_vratio),
        ]);
        self.csr.wo(CISCPRERATIO, ratio);
        let dst = self.compose(&[
            (CISCPREDST_PREDSTWIDTH, self.sc.pre_dst_width),
            (CISCPREDST_PREDSTHEIGHT, self.sc.pre_dst_height),
        ]);
        self.csr.wo(CISCPREDST, dst);
    }

    /// Program the main scaler from the stored settings.
    pub fn set_scaler(&mut self) {
        let sc = self.sc;
        let (hratio, vratio) = match self.config.hw_version {
            HwVersion::V50 => {
                // 15-bit ratios: the upper 9 bits go to CISCCTRL, the low 6 to CIEXTEN
                self.modify(CIEXTEN, &[
                    (CIEXTEN_MAINHORRATIO_EXT, sc.main_hratio & 0x3f),
                    (CIEXTEN_MAINVERRATIO_EXT, sc.main_vratio & 0x3f),
                ]);
                ((sc.main_hratio & 0x7fc0) >> 6, (sc.main_vratio & 0x7fc0) >> 6)
            }
            _ => (sc.main_hratio, sc.main_vratio),
        };
        self.modify(CISCCTRL, &[
            (CISCCTRL_SCALERBYPASS, sc.bypass as u32),
            (CISCCTRL_SCALEUP_H, sc.scaleup_h as u32),
            (CISCCTRL_SCALEUP_V, sc.scaleup_v as u32),
            (CISCCTRL_MAINHORRATIO, hratio),
            (CISCCTRL_MAINVERRATIO, vratio),
            (CISCCTRL_CSCR2Y_WIDE, 1),
            (CISCCTRL_CSCY2R_WIDE, 1),
        ]);
    }

    pub fn start_scaler(&mut self) { self.csr.rmwf(CISCCTRL_SCALERSTART, 1); }

    pub fn stop_scaler(&mut self) { self.csr.rmwf(CISCCTRL_SCALERSTART, 0); }

    /// Feed the scaler output straight to the LCD controller FIFO.
    pub fn enable_lcdfifo(&mut self) { self.csr.rmwf(CISCCTRL_LCDPATHEN_FIFO, 1); }

    pub fn disable_lcdfifo(&mut self) { self.csr.rmwf(CISCCTRL_LCDPATHEN_FIFO, 0); }
}

#[cfg(test)]
mod tests {
    use fimc_api::*;

    use super::super::testutil::*;
    use crate::board::FimcId;
    use crate::regs::*;
    use crate::FimcError;

    #[test]
    fn configure_and_program_v43() {
        let (regs, mut fimc) = hosted();
        fimc.configure_scaler(Size::new(1280, 960), Size::new(640, 480), Rotation::Deg0).unwrap();
        assert_eq!(fimc.scaler_settings().main_hratio, 256);

        fimc.set_prescaler();
        assert_eq!(regs.peek(CISCPRERATIO), (8 << 28) | (2 << 16) | 2);
        assert_eq!(regs.peek(CISCPREDST), (640 << 16) | 480);

        regs.poke(CISCCTRL, (1 << 15) | (1 << 26));
        fimc.set_scaler();
        let expect = (1 << 15) | (1 << 26) | (3 << 27) | (256 << 16) | 256;
        assert_eq!(regs.peek(CISCCTRL), expect);
        assert_eq!(regs.peek(CIEXTEN), 0);
    }

    #[test]
    fn rotated_destination_is_transposed() {
        let (_regs, mut fimc) = hosted();
        fimc.configure_scaler(Size::new(640, 480), Size::new(480, 640), Rotation::Deg90).unwrap();
        let sc = fimc.scaler_settings();
        assert_eq!(sc.main_hratio, 1 << 8);
        assert_eq!(sc.main_vratio, 1 << 8);
        assert!(sc.scaleup_h && sc.scaleup_v);
    }

    #[test]
    fn v50_splits_main_ratio() {
        let cfg = config(FimcId::Fimc0).with_hw_version(HwVersion::V50);
        let (regs, mut fimc) = hosted_with(cfg);
        regs.poke(CIEXTEN, 1 << 22);
        fimc.configure_scaler(Size::new(640, 480), Size::new(600, 400), Rotation::Deg0).unwrap();
        let sc = *fimc.scaler_settings();
        assert_eq!(sc.main_hratio, (640 << 14) / 600);
        fimc.set_scaler();
        assert_eq!(fimc.csr.rf(CISCCTRL_MAINHORRATIO), (sc.main_hratio >> 6) & 0x1ff);
        assert_eq!(fimc.csr.rf(CISCCTRL_MAINVERRATIO), (sc.main_vratio >> 6) & 0x1ff);
        assert_eq!(fimc.csr.rf(CIEXTEN_MAINHORRATIO_EXT), sc.main_hratio & 0x3f);
        assert_eq!(fimc.csr.rf(CIEXTEN_MAINVERRATIO_EXT), sc.main_vratio & 0x3f);
        assert_eq!(fimc.csr.rf(CIEXTEN_YUV444_OUT), 1);
    }

    #[test]
    fn rejected_settings_are_not_stored() {
        let (_regs, mut fimc) = hosted_with(config(FimcId::Fimc2));
        let before = *fimc.scaler_settings();
        assert_eq!(
            fimc.configure_scaler(Size::new(640, 480), Size::new(320, 240), Rotation::Deg0),
            Err(FimcError::Scaler(ScalerError::ExceedsLimit))
        );
        assert_eq!(
            fimc.configure_scaler(Size::new(4096, 480), Size::new(32, 480), Rotation::Deg0),
            Err(FimcError::Scaler(ScalerError::RatioOutOfRange))
        );
        assert_eq!(*fimc.scaler_settings(), before);
    }

    #[test]
    fn bypass_and_run_bits() {
        let (regs, mut fimc) = hosted();
        fimc.set_scaler_settings(ScalerSettings::bypass(Size::new(640, 480)));
        fimc.set_scaler();
        assert_eq!(regs.peek(CISCCTRL), (1 << 31) | (3 << 27));

        fimc.start_scaler();
        fimc.enable_lcdfifo();
        assert_eq!(regs.peek(CISCCTRL), (1 << 31) | (3 << 27) | (1 << 26) | (1 << 15));
        fimc.stop_scaler();
        fimc.disable_lcdfifo();
        assert_eq!(regs.peek(CISCCTRL), (1 << 31) | (3 << 27));
    }
}
