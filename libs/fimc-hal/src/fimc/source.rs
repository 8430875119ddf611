use fimc_api::{CameraBus, CameraPort, Flip, ItuFormat, Order422, Orientation, Rotation, SyncPolarity};

use super::Fimc;
use crate::regs::*;
use crate::FimcError;

fn order422_bits(order: Order422) -> u32 {
    match order {
        Order422::YCbYCr => ORDER422_YCBYCR,
        Order422::YCrYCb => ORDER422_YCRYCB,
        Order422::CbYCrY => ORDER422_CBYCRY,
        Order422::CrYCbY => ORDER422_CRYCBY,
    }
}

impl Fimc {
    /// Program CISRCFMT from the attached camera.
    pub fn set_camera_source(&mut self) -> Result<(), FimcError> {
        let cam = self.camera_or_err("set_camera_source")?;
        // the RGB path wants CrYCbY regardless of what the sensor sends
        let order = match self.cap {
            Some(cap) if cap.pixelformat.is_rgb() => ORDER422_CRYCBY,
            _ => order422_bits(cam.order422),
        };
        let itu16 = matches!(cam.bus, CameraBus::Itu { format: ItuFormat::Itu601_16bit, .. });
        let value = self.compose(&[
            (CISRCFMT_ITU601_8BIT, 1),
            (CISRCFMT_ORDER422, order),
            (CISRCFMT_ITU601_16BIT, itu16 as u32),
            (CISRCFMT_SOURCEHSIZE, cam.width),
            (CISRCFMT_SOURCEVSIZE, cam.height),
        ]);
        self.csr.wo(CISRCFMT, value);
        Ok(())
    }

    /// Program the camera crop window as offsets from each edge of the source.
    pub fn set_camera_offset(&mut self) -> Result<(), FimcError> {
        let cam = self.camera_or_err("set_camera_offset")?;
        let (left, right, top, bottom) = cam.window_margins().ok_or_else(|| {
            log::error!("fimc{}: window {:?} exceeds {}x{}", self.config.id as u32, cam.window, cam.width, cam.height);
            FimcError::InvalidWindow
        })?;
        self.modify(CIWDOFST, &[(CIWDOFST_WINHOROFST, left), (CIWDOFST_WINVEROFST, top), (CIWDOFST_WINOFSEN, 1)]);
        let value = self.compose(&[(CIWDOFST2_WINHOROFST2, right), (CIWDOFST2_WINVEROFST2, bottom)]);
        self.csr.wo(CIWDOFST2, value);
        Ok(())
    }

    pub fn set_camera_polarity(&mut self) -> Result<(), FimcError> {
        let pol = self.camera_or_err("set_camera_polarity")?.polarity;
        self.modify(CIGCTRL, &[
            (CIGCTRL_INVPOLPCLK, pol.contains(SyncPolarity::INV_PCLK) as u32),
            (CIGCTRL_INVPOLVSYNC, pol.contains(SyncPolarity::INV_VSYNC) as u32),
            (CIGCTRL_INVPOLHREF, pol.contains(SyncPolarity::INV_HREF) as u32),
            (CIGCTRL_INVPOLHSYNC, pol.contains(SyncPolarity::INV_HSYNC) as u32),
        ]);
        Ok(())
    }

    /// Route the camera interface: ITU port A/B or MIPI CSI port A.
    pub fn set_camera_type(&mut self) -> Result<(), FimcError> {
        let cam = self.camera_or_err("set_camera_type")?;
        match cam.bus {
            CameraBus::Mipi { format } => {
                let value = self.compose(&[(CSIIMGFMT_FMT, format as u32), (CSIIMGFMT_DATA_ALIGN, 1)]);
                self.csr.wo(CSIIMGFMT, value);
                self.modify(CIGCTRL, &[
                    (CIGCTRL_TESTPATTERN, 0),
                    (CIGCTRL_SELCAM_ITU, 0),
                    (CIGCTRL_SELCAM_MIPI, 0),
                    (CIGCTRL_SELCAM_FIMC, 1),
                ]);
            }
            CameraBus::Itu { port, .. } => {
                self.modify(CIGCTRL, &[
                    (CIGCTRL_TESTPATTERN, 0),
                    (CIGCTRL_SELCAM_ITU, (port == CameraPort::A) as u32),
                    (CIGCTRL_SELCAM_MIPI, 0),
                    (CIGCTRL_SELCAM_FIMC, 0),
                ]);
            }
        }
        Ok(())
    }

    /// Rotate the input by 90 degrees ahead of the scaler when the
    /// combined rotation needs it.
    pub fn set_input_rot(&mut self, rot: Rotation, flip: Flip) {
        let rot90 = Orientation::from_rot_flip(rot, flip).contains(Orientation::ROT90);
        self.csr.rmwf(CITRGFMT_INROT90, rot90 as u32);
    }
}
