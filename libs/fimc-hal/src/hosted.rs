//! In-memory stand-in for the FIMC register page, so the driver can run on a
//! host. Nothing here models the hardware: registers hold whatever was last
//! written to them.
use crate::regs::FIMC_NUMREGS;
use crate::utra::Register;

pub struct RegisterFile {
    words: *mut [u32; FIMC_NUMREGS],
}

impl RegisterFile {
    pub fn new() -> Self { RegisterFile { words: Box::into_raw(Box::new([0u32; FIMC_NUMREGS])) } }

    /// Base pointer to hand to a `CSR` or `Fimc::from_raw`. It stays valid for
    /// as long as the register file lives.
    pub fn base(&self) -> *mut u32 { self.words as *mut u32 }

    pub fn peek(&self, reg: Register) -> u32 {
        assert!(reg.offset() < FIMC_NUMREGS);
        unsafe { self.base().add(reg.offset()).read_volatile() }
    }

    pub fn poke(&self, reg: Register, value: u32) {
        assert!(reg.offset() < FIMC_NUMREGS);
        unsafe { self.base().add(reg.offset()).write_volatile(value) }
    }

    /// Copy of every register word.
    pub fn snapshot(&self) -> [u32; FIMC_NUMREGS] {
        let mut out = [0u32; FIMC_NUMREGS];
        for (i, word) in out.iter_mut().enumerate() {
            *word = unsafe { self.base().add(i).read_volatile() };
        }
        out
    }

    pub fn fill(&self, value: u32) {
        for i in 0..FIMC_NUMREGS {
            unsafe { self.base().add(i).write_volatile(value) }
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self { Self::new() }
}

impl Drop for RegisterFile {
    fn drop(&mut self) {
        // SAFETY: `words` came from `Box::into_raw` in `new` and is released only here
        drop(unsafe { Box::from_raw(self.words) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs;

    #[test]
    fn peek_poke() {
        let file = RegisterFile::new();
        file.poke(regs::MSCTRL, 0x0400_0000);
        assert_eq!(file.peek(regs::MSCTRL), 0x0400_0000);
        assert_eq!(file.snapshot()[regs::MSCTRL.offset()], 0x0400_0000);
        file.fill(0xdead_beef);
        assert_eq!(file.peek(regs::CSIIMGFMT), 0xdead_beef);
    }
}
