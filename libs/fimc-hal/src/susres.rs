//! Register save/restore across power transitions.
use crate::utra::{Register, CSR};

pub trait SuspendResume {
    fn suspend(&mut self);
    fn resume(&mut self);
}

#[derive(Debug, Copy, Clone)]
pub struct ManagedReg {
    pub reg: Register,
    /// the saved value of the register
    pub value: Option<u32>,
    /// restore after every other managed register
    pub last: bool,
}

/// Holds up to `N` registers of one block. Registers are saved and restored in
/// the order they were pushed, except that entries marked `last` are restored
/// at the very end.
#[derive(Debug)]
pub struct RegManager<const N: usize> {
    pub csr: CSR<u32>,
    pub registers: [Option<ManagedReg>; N],
}

impl<const N: usize> RegManager<N> {
    pub fn new(reg_base: *mut u32) -> RegManager<N> {
        RegManager { csr: CSR::new(reg_base), registers: [None; N] }
    }

    /// Push registers into the manager in the order you want them saved.
    pub fn push(&mut self, reg: Register, last: bool) {
        let mr = ManagedReg { reg, value: None, last };
        for entry in self.registers.iter_mut() {
            if entry.is_none() {
                *entry = Some(mr);
                return;
            }
        }
        // programmer error: the manager was sized too small for its block
        panic!("RegManager ran out of managed register slots");
    }

    pub fn len(&self) -> usize { self.registers.iter().filter(|e| e.is_some()).count() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// True once every managed register carries a saved value.
    pub fn has_snapshot(&self) -> bool {
        !self.is_empty() && self.registers.iter().flatten().all(|mr| mr.value.is_some())
    }

    /// Forget the saved values, keeping the register list.
    pub fn clear(&mut self) {
        for mr in self.registers.iter_mut().flatten() {
            mr.value = None;
        }
    }

    /// Saved value of `reg`, if any.
    pub fn saved(&self, reg: Register) -> Option<u32> {
        self.registers.iter().flatten().find(|mr| mr.reg == reg).and_then(|mr| mr.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManagedReg> { self.registers.iter().flatten() }
}

impl<const N: usize> SuspendResume for RegManager<N> {
    fn suspend(&mut self) {
        let csr = self.csr;
        for mr in self.registers.iter_mut().flatten() {
            mr.value = Some(csr.r(mr.reg));
        }
    }

    fn resume(&mut self) {
        for pass_last in [false, true] {
            for mr in self.registers.iter().flatten().filter(|mr| mr.last == pass_last) {
                if let Some(value) = mr.value {
                    self.csr.wo(mr.reg, value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosted::RegisterFile;

    const A: Register = Register::new(0, 0xffff_ffff);
    const B: Register = Register::new(1, 0xffff_ffff);
    const C: Register = Register::new(5, 0xffff_ffff);

    #[test]
    fn save_and_restore() {
        let regs = RegisterFile::new();
        let mut mgr = RegManager::<4>::new(regs.base());
        mgr.push(A, false);
        mgr.push(C, true);
        mgr.push(B, false);
        assert_eq!(mgr.len(), 3);
        assert!(!mgr.has_snapshot());

        regs.poke(A, 0x11);
        regs.poke(B, 0x22);
        regs.poke(C, 0x33);
        mgr.suspend();
        assert!(mgr.has_snapshot());
        assert_eq!(mgr.saved(C), Some(0x33));

        regs.poke(A, 0);
        regs.poke(B, 0);
        regs.poke(C, 0);
        mgr.resume();
        assert_eq!((regs.peek(A), regs.peek(B), regs.peek(C)), (0x11, 0x22, 0x33));

        mgr.clear();
        assert!(!mgr.has_snapshot());
        assert_eq!(mgr.saved(A), None);
    }

    #[test]
    #[should_panic]
    fn overflow_panics() {
        let regs = RegisterFile::new();
        let mut mgr = RegManager::<1>::new(regs.base());
        mgr.push(A, false);
        mgr.push(B, false);
    }
}
