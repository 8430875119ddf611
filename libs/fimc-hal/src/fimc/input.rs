use fimc_api::{BufferSet, FieldOrder, Flip, InputPath, Orientation, PixelFormat, Rect, Rotation};

use super::output::flip_bits;
use super::Fimc;
use crate::regs::*;
use crate::FimcError;

impl Fimc {
    fn reject(&self, op: &str, fmt: PixelFormat) -> FimcError {
        log::error!("fimc{}: {}: invalid pixel format {:?}", self.config.id as u32, op, fmt);
        FimcError::InvalidPixelFormat(fmt)
    }

    pub fn set_input_source(&mut self, path: InputPath) {
        self.csr.rmwf(MSCTRL_INPUT, (path == InputPath::Memory) as u32);
    }

    pub fn set_input_colorspace(&mut self, fmt: PixelFormat) -> Result<(), FimcError> {
        let informat = match fmt {
            PixelFormat::Yuv420 | PixelFormat::Nv12 | PixelFormat::Nv12t | PixelFormat::Nv21 => FORMAT_YCBCR420,
            PixelFormat::Yuyv => FORMAT_YCBCR422_1PLANE,
            PixelFormat::Nv16 | PixelFormat::Nv61 => FORMAT_YCBCR422,
            PixelFormat::Rgb565 | PixelFormat::Rgb32 => FORMAT_RGB,
            _ => return Err(self.reject("set_input_colorspace", fmt)),
        };
        self.csr.rmwf(MSCTRL_INFORMAT, informat);
        Ok(())
    }

    /// Sample order and chroma plane layout of the memory input.
    pub fn set_input_yuv(&mut self, fmt: PixelFormat) -> Result<(), FimcError> {
        let (order422, order2p, interleaved) = match fmt {
            PixelFormat::Yuyv => (MS_ORDER422_YCBYCR, 0, 0),
            PixelFormat::Uyvy => (MS_ORDER422_CBYCRY, 0, 0),
            PixelFormat::Yvyu => (MS_ORDER422_YCRYCB, 0, 0),
            PixelFormat::Vyuy => (MS_ORDER422_CRYCBY, 0, 0),
            PixelFormat::Nv12 | PixelFormat::Nv12t | PixelFormat::Nv16 => (0, ORDER2P_LSB_CBCR, 1),
            PixelFormat::Nv21 | PixelFormat::Nv61 => (0, ORDER2P_LSB_CRCB, 1),
            // three planes
            PixelFormat::Yuv420 => (0, 0, 0),
            PixelFormat::Rgb565 | PixelFormat::Rgb32 => (0, 0, 0),
            _ => return Err(self.reject("set_input_yuv", fmt)),
        };
        self.modify(MSCTRL, &[
            (MSCTRL_ORDER422, order422),
            (MSCTRL_2PLANE_ORDER, order2p),
            (MSCTRL_C_INT_IN, interleaved),
        ]);
        Ok(())
    }

    pub fn set_input_flip(&mut self, rot: Rotation, flip: Flip) {
        self.csr.rmwf(MSCTRL_FLIP, flip_bits(Orientation::from_rot_flip(rot, flip)));
    }

    /// Weave two fields for `InterlacedTb`, read plain frames otherwise.
    pub fn set_input_field(&mut self, field: FieldOrder) {
        self.csr.rmwf(MSCTRL_FIELD, (field == FieldOrder::InterlacedTb) as u32);
    }

    /// Successive burst count of the input DMA; 0 and anything above 4 mean 4.
    pub fn set_input_burst_cnt(&mut self, cnt: u32) {
        let cnt = if cnt == 0 || cnt > BURST_CNT_MAX { BURST_CNT_MAX } else { cnt };
        self.csr.rmwf(MSCTRL_BURST_CNT, cnt);
    }

    pub fn set_input_rgb(&mut self, fmt: PixelFormat) {
        let rgb = if fmt == PixelFormat::Rgb32 { RGB_FMT_888 } else { RGB_FMT_565 };
        self.csr.rmwf(CISCCTRL_INRGB_FMT, rgb);
    }

    pub fn set_input_address(&mut self, bufset: &BufferSet) {
        self.csr.wo(CIIYSA0, bufset.y);
        self.csr.wo(CIICBSA0, bufset.cb);
        self.csr.wo(CIICRSA0, bufset.cr);
    }

    /// Start of the crop inside each input plane. Offsets are only programmed
    /// when `crop` differs from `bounds`; otherwise all three are cleared.
    pub fn set_input_offset(&mut self, fmt: PixelFormat, bounds: &Rect, crop: &Rect) -> Result<(), FimcError> {
        let planes = if crop.is_cropped_from(bounds) {
            match fmt {
                PixelFormat::Yuyv | PixelFormat::Rgb565 | PixelFormat::Rgb32 => 1,
                PixelFormat::Nv12 | PixelFormat::Nv21 | PixelFormat::Nv12t | PixelFormat::Nv16 | PixelFormat::Nv61 => {
                    2
                }
                PixelFormat::Yuv420 | PixelFormat::Yuv422p => 3,
                _ => return Err(self.reject("set_input_offset", fmt)),
            }
        } else {
            0
        };
        let regs = [
            (CIIYOFF, CIIYOFF_HORIZONTAL, CIIYOFF_VERTICAL),
            (CIICBOFF, CIICBOFF_HORIZONTAL, CIICBOFF_VERTICAL),
            (CIICROFF, CIICROFF_HORIZONTAL, CIICROFF_VERTICAL),
        ];
        for (i, (reg, hor, ver)) in regs.into_iter().enumerate() {
            let value = if i < planes { self.compose(&[(hor, crop.left), (ver, crop.top)]) } else { 0 };
            self.csr.wo(reg, value);
        }
        Ok(())
    }

    /// Linear or 64x32 tiled read.
    pub fn set_input_addr_style(&mut self, fmt: PixelFormat) {
        let mode = if fmt.is_tiled() { DMA_MODE_64X32 } else { DMA_MODE_LINEAR };
        self.csr.rmwf(CIDMAPARAM_R_MODE, mode);
    }

    /// Size of the region actually read, after cropping.
    pub fn set_real_input_size(&mut self, width: u32, height: u32) {
        self.modify(CIREAL_ISIZE, &[(CIREAL_ISIZE_WIDTH, width), (CIREAL_ISIZE_HEIGHT, height)]);
    }

    pub fn set_org_input_size(&mut self, width: u32, height: u32) {
        let value = self.compose(&[(ORGISIZE_HORIZONTAL, width), (ORGISIZE_VERTICAL, height)]);
        self.csr.wo(ORGISIZE, value);
    }

    pub fn enable_autoload(&mut self) { self.csr.rmwf(CIREAL_ISIZE_AUTOLOAD, 1); }

    pub fn disable_autoload(&mut self) { self.csr.rmwf(CIREAL_ISIZE_AUTOLOAD, 0); }

    pub fn addr_change_enable(&mut self) { self.csr.rmwf(CIREAL_ISIZE_ADDR_CH_DISABLE, 0); }

    pub fn addr_change_disable(&mut self) { self.csr.rmwf(CIREAL_ISIZE_ADDR_CH_DISABLE, 1); }

    pub fn start_input_dma(&mut self) { self.csr.rmwf(MSCTRL_ENVID, 1); }

    pub fn stop_input_dma(&mut self) { self.csr.rmwf(MSCTRL_ENVID, 0); }
}
