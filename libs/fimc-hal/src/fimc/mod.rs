//! Register-level driver for one FIMC instance.
//!
//! `Fimc` owns the register window of one instance and carries the little
//! state the register operations depend on: the attached camera, the format
//! of the running capture session, the scaler settings and the suspend/resume
//! snapshot. Buffer queues, interrupt dispatch and clocking live with the
//! caller.
mod control;
mod input;
mod irq;
mod output;
mod scaler;
mod source;

use fimc_api::{CameraConfig, CaptureInfo, FimcLimits, ScalerSettings};

use crate::board::FimcConfig;
#[cfg(target_os = "xous")]
use crate::board::FIMC_REG_LEN;
use crate::regs::{CIIMGCPT, SAVED_REGS, SAVED_REG_COUNT};
use crate::susres::RegManager;
use crate::utra::{Field, Register, CSR};
use crate::FimcError;

pub struct Fimc {
    csr: CSR<u32>,
    config: FimcConfig,
    limits: FimcLimits,
    cam: Option<CameraConfig>,
    cap: Option<CaptureInfo>,
    sc: ScalerSettings,
    susres: RegManager<SAVED_REG_COUNT>,
}

impl Fimc {
    /// Map the register page of `config.id` and wrap it.
    pub fn new(config: FimcConfig) -> Result<Self, FimcError> {
        #[cfg(target_os = "xous")]
        let base = xous::syscall::map_memory(
            xous::MemoryAddress::new(config.id.base()),
            None,
            FIMC_REG_LEN,
            xous::MemoryFlags::R | xous::MemoryFlags::W,
        )
        .map_err(|_| FimcError::MapFailed)?
        .as_mut_ptr() as *mut u32;
        #[cfg(not(target_os = "xous"))]
        let base = config.id.base() as *mut u32;

        // SAFETY: `base` is the register page of this instance, mapped above or identity mapped
        Ok(unsafe { Self::from_raw(base, config) })
    }

    /// Build a driver on an already mapped register window.
    ///
    /// # Safety
    /// `base` must point to at least `FIMC_NUMREGS` words that stay valid and
    /// are not driven by anyone else for the lifetime of the returned value.
    pub unsafe fn from_raw(base: *mut u32, config: FimcConfig) -> Self {
        let mut susres = RegManager::new(base);
        for reg in SAVED_REGS {
            // capture is re-armed only after everything else is back
            susres.push(reg, reg == CIIMGCPT);
        }
        Fimc {
            csr: CSR::new(base),
            config,
            limits: *config.id.limits(),
            cam: None,
            cap: None,
            sc: ScalerSettings::default(),
            susres,
        }
    }

    pub fn config(&self) -> &FimcConfig { &self.config }

    pub fn limits(&self) -> &FimcLimits { &self.limits }

    pub fn attach_camera(&mut self, cam: CameraConfig) {
        log::debug!("fimc{}: camera attached {:?}", self.config.id as u32, cam.bus);
        self.cam = Some(cam);
    }

    pub fn detach_camera(&mut self) -> Option<CameraConfig> { self.cam.take() }

    pub fn camera(&self) -> Option<&CameraConfig> { self.cam.as_ref() }

    /// Mark a capture session as running (`Some`) or finished (`None`).
    pub fn set_capture_info(&mut self, info: Option<CaptureInfo>) { self.cap = info; }

    pub fn capture_info(&self) -> Option<&CaptureInfo> { self.cap.as_ref() }

    fn camera_or_err(&self, op: &str) -> Result<CameraConfig, FimcError> {
        self.cam.ok_or_else(|| {
            log::error!("fimc{}: {}: no active camera", self.config.id as u32, op);
            FimcError::NoCamera
        })
    }

    /// Compose a whole register value out of `fields`.
    fn compose(&self, fields: &[(Field, u32)]) -> u32 {
        fields.iter().fold(0, |acc, &(field, value)| acc | self.csr.ms(field, value))
    }

    /// Update several fields of `reg` with one read and one write.
    fn modify(&mut self, reg: Register, fields: &[(Field, u32)]) {
        let mut value = self.csr.r(reg);
        for &(field, v) in fields {
            debug_assert_eq!(field.register(), reg);
            value = self.csr.zf(field, value) | self.csr.ms(field, v);
        }
        self.csr.wo(reg, value);
    }
}
