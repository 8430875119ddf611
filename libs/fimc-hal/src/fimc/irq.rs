use super::Fimc;
use crate::regs::*;
use crate::utra::Field;
use crate::{delay_ms, FimcError};

impl Fimc {
    pub fn enable_irq(&mut self, overflow: bool, level: bool) {
        self.modify(CIGCTRL, &[
            (CIGCTRL_IRQ_ENABLE, 1),
            (CIGCTRL_IRQ_OVFEN, overflow as u32),
            (CIGCTRL_IRQ_LEVEL, level as u32),
        ]);
    }

    /// Interrupt on frame end only.
    pub fn enable_irq_frame_end(&mut self) {
        self.modify(CIGCTRL, &[(CIGCTRL_FRM_END_IRQ_ENABLE, 1), (CIGCTRL_FRM_START_IRQ_DISABLE, 1)]);
    }

    pub fn disable_irq(&mut self) {
        self.modify(CIGCTRL, &[(CIGCTRL_IRQ_ENABLE, 0), (CIGCTRL_IRQ_OVFEN, 0)]);
    }

    pub fn clear_irq(&mut self) { self.csr.rmwf(CIGCTRL_IRQ_CLR, 1); }

    /// Raise an interrupt after the last frame of a capture sequence.
    pub fn enable_lastirq(&mut self) { self.csr.rmwf(CIOCTRL_LASTIRQ, 1); }

    pub fn disable_lastirq(&mut self) { self.csr.rmwf(CIOCTRL_LASTIRQ, 0); }

    pub fn status(&self) -> Status { Status::from_bits_truncate(self.csr.r(CISTATUS)) }

    /// Index of the output slot the hardware will fill next.
    pub fn frame_count(&self) -> u32 { self.csr.rf(CISTATUS_FRAMECNT) }

    /// Returns true, and acknowledges it, if an output FIFO overflowed.
    pub fn overflow_state(&mut self) -> bool {
        let status = self.status();
        if !status.overflow() {
            return false;
        }
        log::warn!("fimc{}: FIFO overflow {:?}", self.config.id as u32, status);
        let clear = [(CIWDOFST_CLROVFIY, 1), (CIWDOFST_CLROVFICB, 1), (CIWDOFST_CLROVFICR, 1)];
        self.modify(CIWDOFST, &clear);
        self.modify(CIWDOFST, &clear.map(|(field, _)| (field, 0)));
        true
    }

    pub fn wait_frame_end(&mut self) -> Result<(), FimcError> { self.wait_status(CISTATUS_FRAMEEND) }

    pub fn wait_last_frame_end(&mut self) -> Result<(), FimcError> {
        self.wait_status(CISTATUS_LASTCAPTUREEND)
    }

    /// Poll a CISTATUS flag and clear it once it shows up.
    fn wait_status(&mut self, flag: Field) -> Result<(), FimcError> {
        for _ in 0..self.config.poll_attempts() {
            if self.csr.rf(flag) != 0 {
                self.csr.rmwf(flag, 0);
                return Ok(());
            }
            delay_ms(self.config.poll_interval_ms);
        }
        Err(FimcError::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::*;
    use crate::regs::*;
    use crate::FimcError;

    #[test]
    fn irq_enable_bits() {
        let (regs, mut fimc) = hosted();
        regs.poke(CIGCTRL, (1 << 22) | (1 << 20) | 1);
        fimc.enable_irq(false, false);
        assert_eq!(regs.peek(CIGCTRL), (1 << 16) | 1);
        fimc.enable_irq(true, true);
        assert_eq!(regs.peek(CIGCTRL), (1 << 22) | (1 << 20) | (1 << 16) | 1);
        fimc.enable_irq_frame_end();
        assert_eq!(regs.peek(CIGCTRL) & (3 << 17), 3 << 17);
        fimc.disable_irq();
        assert_eq!(regs.peek(CIGCTRL), (1 << 20) | (3 << 17) | 1);
        fimc.clear_irq();
        assert_eq!(regs.peek(CIGCTRL) & (1 << 19), 1 << 19);
    }

    #[test]
    fn lastirq() {
        let (regs, mut fimc) = hosted();
        regs.poke(CIOCTRL, 0x0300_0001);
        fimc.enable_lastirq();
        assert_eq!(regs.peek(CIOCTRL), 0x0300_0005);
        fimc.disable_lastirq();
        assert_eq!(regs.peek(CIOCTRL), 0x0300_0001);
    }

    #[test]
    fn status_and_frame_count() {
        let (regs, mut fimc) = hosted();
        regs.poke(CISTATUS, (3 << 26) | (1 << 17));
        assert_eq!(fimc.frame_count(), 3);
        assert!(fimc.status().contains(Status::FRAME_END));
        assert!(!fimc.overflow_state());
        assert_eq!(regs.peek(CIWDOFST), 0);
    }

    #[test]
    fn overflow_is_acknowledged() {
        let (regs, mut fimc) = hosted();
        regs.poke(CISTATUS, 1 << 30);
        regs.poke(CIWDOFST, (1 << 31) | 12);
        assert!(fimc.overflow_state());
        // the clear bits are pulsed, so they read back low
        assert_eq!(regs.peek(CIWDOFST), (1 << 31) | 12);
    }

    #[test]
    fn frame_end_polling() {
        let (regs, mut fimc) = hosted();
        regs.poke(CISTATUS, (1 << 17) | (1 << 16) | (1 << 22));
        assert_eq!(fimc.wait_frame_end(), Ok(()));
        assert_eq!(regs.peek(CISTATUS), (1 << 16) | (1 << 22));
        assert_eq!(fimc.wait_last_frame_end(), Ok(()));
        assert_eq!(regs.peek(CISTATUS), 1 << 22);
        assert_eq!(fimc.wait_frame_end(), Err(FimcError::Timeout));
        assert_eq!(fimc.wait_last_frame_end(), Err(FimcError::Timeout));
    }
}
