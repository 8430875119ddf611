use super::Fimc;
use crate::regs::*;
use crate::susres::SuspendResume;
use crate::{delay_ms, FimcError};

impl Fimc {
    /// Arm capture; the scaler path is armed too unless it is bypassed.
    pub fn enable_capture(&mut self) {
        let sc_enable = !self.sc.bypass;
        self.modify(CIIMGCPT, &[(CIIMGCPT_IMGCPTEN, 1), (CIIMGCPT_IMGCPTEN_SC, sc_enable as u32)]);
    }

    pub fn disable_capture(&mut self) {
        self.modify(CIIMGCPT, &[(CIIMGCPT_IMGCPTEN, 0), (CIIMGCPT_IMGCPTEN_SC, 0)]);
    }

    fn wait_stop_processing(&mut self) {
        if self.wait_frame_end().is_err() {
            log::warn!("fimc{}: timed out waiting for frame end", self.config.id as u32);
        }
        if self.wait_last_frame_end().is_err() {
            log::warn!("fimc{}: timed out waiting for last capture end", self.config.id as u32);
        }
    }

    /// Let the frame in flight finish, then shut down scaler, capture and
    /// input DMA. The second wait leaves the DMA buffers clean.
    pub fn stop_processing(&mut self) {
        self.wait_stop_processing();
        self.stop_scaler();
        self.disable_capture();
        self.stop_input_dma();
        self.wait_stop_processing();
    }

    /// Pulse the block's software reset.
    pub fn sw_reset(&mut self) {
        log::debug!("fimc{}: sw reset", self.config.id as u32);
        self.csr.rmwf(CISRCFMT_ITU601_8BIT, 1);
        self.csr.rmwf(CIGCTRL_SWRST, 1);
        delay_ms(self.config.reset_settle_ms);
        self.csr.rmwf(CIGCTRL_SWRST, 0);

        // ITU656 carries its syncs in-band and needs the ITU601 select cleared
        let itu656 = self.cam.map(|cam| cam.is_itu656()).unwrap_or(false);
        if self.cap.is_some() && itu656 {
            self.csr.rmwf(CISRCFMT_ITU601_8BIT, 0);
        }
    }

    /// Software reset followed by the register defaults.
    pub fn reset(&mut self) {
        self.sw_reset();
        for (reg, value) in DEFAULTS {
            self.csr.wo(reg, value);
        }
    }

    /// Snapshot the state registers of this instance.
    pub fn save_regs(&mut self) {
        self.susres.suspend();
        log::debug!("fimc{}: saved {} registers", self.config.id as u32, self.susres.len());
    }

    /// Write back the last snapshot. Capture is re-enabled last.
    pub fn load_regs(&mut self) -> Result<(), FimcError> {
        if !self.susres.has_snapshot() {
            log::error!("fimc{}: no saved registers to restore", self.config.id as u32);
            return Err(FimcError::NoSnapshot);
        }
        self.susres.resume();
        Ok(())
    }

    pub fn dump_regs(&self) {
        for reg in SAVED_REGS {
            log::debug!(
                "fimc{}: {:03x} {:<12} = {:08x}",
                self.config.id as u32,
                reg.byte_offset(),
                name(reg),
                self.csr.r(reg)
            );
        }
    }
}

impl SuspendResume for Fimc {
    fn suspend(&mut self) { self.save_regs(); }

    fn resume(&mut self) {
        if let Err(e) = self.load_regs() {
            log::error!("fimc{}: resume failed: {}", self.config.id as u32, e);
        }
    }
}
