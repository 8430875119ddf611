use fimc_api::{BufferSet, FieldOrder, Flip, Orientation, PixelFormat, Rect, Rotation, FIMC_HD_WIDTH};

use super::Fimc;
use crate::regs::*;
use crate::FimcError;

/// CITRGFMT/MSCTRL flip bits for an orientation.
pub(super) fn flip_bits(o: Orientation) -> u32 {
    let mut bits = 0;
    if o.contains(Orientation::XFLIP) {
        bits |= FLIP_X_MIRROR;
    }
    if o.contains(Orientation::YFLIP) {
        bits |= FLIP_Y_MIRROR;
    }
    bits
}

impl Fimc {
    pub fn set_output_size(&mut self, width: u32, height: u32) {
        self.modify(CITRGFMT, &[(CITRGFMT_TARGETHSIZE, width), (CITRGFMT_TARGETVSIZE, height)]);
    }

    /// Bit 13 of the target size, which CITRGFMT has no room for.
    pub fn set_ext_output_size(&mut self, width: u32, height: u32) {
        self.modify(CIEXTEN, &[(CIEXTEN_TARGETH_EXT, (width >> 13) & 1), (CIEXTEN_TARGETV_EXT, (height >> 13) & 1)]);
    }

    pub fn set_output_area(&mut self, width: u32, height: u32) {
        let value = self.compose(&[(CITAREA_TARGET_AREA, width.saturating_mul(height))]);
        self.csr.wo(CITAREA, value);
    }

    /// Full size of the output buffer. Also picks the colour space: ITU709 for
    /// HD widths, ITU601 below.
    pub fn set_org_output_size(&mut self, width: u32, height: u32) {
        let value = self.compose(&[(ORGOSIZE_HORIZONTAL, width), (ORGOSIZE_VERTICAL, height)]);
        self.csr.wo(ORGOSIZE, value);
        self.csr.rmwf(CIGCTRL_CSC, (width >= FIMC_HD_WIDTH) as u32);
    }

    pub fn set_output_colorspace(&mut self, fmt: PixelFormat) {
        if fmt == PixelFormat::Yuv444 {
            self.csr.rmwf(CIEXTEN_YUV444_OUT, 1);
            return;
        }
        self.csr.rmwf(CIEXTEN_YUV444_OUT, 0);
        let outformat = match fmt {
            PixelFormat::Rgb565 | PixelFormat::Rgb32 => FORMAT_RGB,
            PixelFormat::Yuyv | PixelFormat::Uyvy | PixelFormat::Vyuy | PixelFormat::Yvyu => {
                FORMAT_YCBCR422_1PLANE
            }
            PixelFormat::Nv16 | PixelFormat::Nv61 | PixelFormat::Yuv422p => FORMAT_YCBCR422,
            PixelFormat::Yuv420
            | PixelFormat::Nv12
            | PixelFormat::Nv12t
            | PixelFormat::Nv21
            | PixelFormat::Yuv444 => FORMAT_YCBCR420,
        };
        self.csr.rmwf(CITRGFMT_OUTFORMAT, outformat);
    }

    pub fn set_output_rot_flip(&mut self, rot: Rotation, flip: Flip) {
        let o = Orientation::from_rot_flip(rot, flip);
        self.modify(CITRGFMT, &[
            (CITRGFMT_OUTROT90, o.contains(Orientation::ROT90) as u32),
            (CITRGFMT_FLIP, flip_bits(o)),
        ]);
    }

    /// Sample order and plane layout of YCbCr output. Other formats leave the
    /// fields cleared.
    pub fn set_output_yuv(&mut self, fmt: PixelFormat) {
        let (order422, order2p, two_plane) = match fmt {
            PixelFormat::Yuyv => (ORDER422_YCBYCR, 0, 0),
            PixelFormat::Uyvy => (ORDER422_CBYCRY, 0, 0),
            PixelFormat::Vyuy => (ORDER422_CRYCBY, 0, 0),
            PixelFormat::Yvyu => (ORDER422_YCRYCB, 0, 0),
            PixelFormat::Nv12 | PixelFormat::Nv12t | PixelFormat::Nv16 => (0, ORDER2P_LSB_CBCR, 1),
            PixelFormat::Nv21 | PixelFormat::Nv61 => (0, ORDER2P_LSB_CRCB, 1),
            _ => (0, 0, 0),
        };
        self.modify(CIOCTRL, &[
            (CIOCTRL_ORDER422, order422),
            (CIOCTRL_ORDER2P, order2p),
            (CIOCTRL_YCBCR_PLANE, two_plane),
        ]);
    }

    pub fn set_output_rgb(&mut self, fmt: PixelFormat) {
        let rgb = if fmt == PixelFormat::Rgb32 { RGB_FMT_888 } else { RGB_FMT_565 };
        self.csr.rmwf(CISCCTRL_OUTRGB_FMT, rgb);
    }

    /// Extend RGB565/666 output to the full 8 bits per channel.
    pub fn set_ext_rgb(&mut self, enable: bool) { self.csr.rmwf(CISCCTRL_EXTRGB, enable as u32); }

    pub fn set_output_scan(&mut self, field: FieldOrder) {
        self.csr.rmwf(CISCCTRL_INTERLACE, field.is_interlaced() as u32);
        let weave = self.cap.is_some() && field == FieldOrder::InterlacedTb;
        self.csr.rmwf(CIOCTRL_WEAVE_OUT, weave as u32);
    }

    /// Point ping-pong slot `slot` (0..4) at `bufset`.
    pub fn set_output_address(&mut self, bufset: &BufferSet, slot: usize) -> Result<(), FimcError> {
        let (y, cb, cr) = match (cioysa(slot), ciocbsa(slot), ciocrsa(slot)) {
            (Some(y), Some(cb), Some(cr)) => (y, cb, cr),
            _ => {
                log::error!("fimc{}: output slot {} out of range", self.config.id as u32, slot);
                return Err(FimcError::InvalidSlot(slot));
            }
        };
        self.csr.wo(y, bufset.y);
        self.csr.wo(cb, bufset.cb);
        self.csr.wo(cr, bufset.cr);
        Ok(())
    }

    /// Start of the crop inside each output plane. Planes the format does not
    /// use are zeroed.
    pub fn set_output_offset(&mut self, fmt: PixelFormat, bounds: &Rect, crop: &Rect) {
        log::debug!("fimc{}: output crop {:?} in {:?}", self.config.id as u32, crop, bounds);
        let planes = match fmt {
            PixelFormat::Rgb565
            | PixelFormat::Rgb32
            | PixelFormat::Yuyv
            | PixelFormat::Uyvy
            | PixelFormat::Vyuy
            | PixelFormat::Yvyu => 1,
            PixelFormat::Nv12 | PixelFormat::Nv12t | PixelFormat::Nv21 | PixelFormat::Nv16 | PixelFormat::Nv61 => 2,
            PixelFormat::Yuv420 | PixelFormat::Yuv422p => 3,
            PixelFormat::Yuv444 => 0,
        };
        let regs = [
            (CIOYOFF, CIOYOFF_HORIZONTAL, CIOYOFF_VERTICAL),
            (CIOCBOFF, CIOCBOFF_HORIZONTAL, CIOCBOFF_VERTICAL),
            (CIOCROFF, CIOCROFF_HORIZONTAL, CIOCROFF_VERTICAL),
        ];
        for (i, (reg, hor, ver)) in regs.into_iter().enumerate() {
            let value = if i < planes { self.compose(&[(hor, crop.left), (ver, crop.top)]) } else { 0 };
            self.csr.wo(reg, value);
        }
    }

    /// Linear or 64x32 tiled write-back.
    pub fn set_output_addr_style(&mut self, fmt: PixelFormat) {
        let mode = if fmt.is_tiled() { DMA_MODE_64X32 } else { DMA_MODE_LINEAR };
        self.csr.rmwf(CIDMAPARAM_W_MODE, mode);
    }
}

#[cfg(test)]
mod tests {
    use fimc_api::*;

    use super::super::testutil::*;
    use crate::regs::*;
    use crate::FimcError;

    #[test]
    fn target_sizes() {
        let (regs, mut fimc) = hosted();
        regs.poke(CITRGFMT, 0xe000_e000);
        fimc.set_output_size(800, 480);
        assert_eq!(regs.peek(CITRGFMT), 0xe000_e000 | (800 << 16) | 480);

        fimc.set_ext_output_size(8192 + 16, 100);
        assert_eq!(regs.peek(CIEXTEN), 1 << 26);
        fimc.set_ext_output_size(100, 8192);
        assert_eq!(regs.peek(CIEXTEN), 1 << 24);

        fimc.set_output_area(800, 480);
        assert_eq!(regs.peek(CITAREA), 800 * 480);
    }

    #[test]
    fn org_size_selects_csc() {
        let (regs, mut fimc) = hosted();
        fimc.set_org_output_size(1280, 720);
        assert_eq!(regs.peek(ORGOSIZE), (720 << 16) | 1280);
        assert_eq!(regs.peek(CIGCTRL), 1 << 5);
        fimc.set_org_output_size(1279, 720);
        assert_eq!(regs.peek(CIGCTRL), 0);
    }

    #[test]
    fn colorspace() {
        let (regs, mut fimc) = hosted();
        fimc.set_output_colorspace(PixelFormat::Yuv444);
        assert_eq!(regs.peek(CIEXTEN), 1 << 22);
        assert_eq!(regs.peek(CITRGFMT), 0);

        regs.poke(CITRGFMT, 0x1234_5678 & !(3 << 29));
        fimc.set_output_colorspace(PixelFormat::Rgb32);
        assert_eq!(regs.peek(CIEXTEN), 0);
        assert_eq!(fimc.csr.rf(CITRGFMT_OUTFORMAT), FORMAT_RGB);
        fimc.set_output_colorspace(PixelFormat::Vyuy);
        assert_eq!(fimc.csr.rf(CITRGFMT_OUTFORMAT), FORMAT_YCBCR422_1PLANE);
        fimc.set_output_colorspace(PixelFormat::Yuv422p);
        assert_eq!(fimc.csr.rf(CITRGFMT_OUTFORMAT), FORMAT_YCBCR422);
        fimc.set_output_colorspace(PixelFormat::Nv12t);
        assert_eq!(regs.peek(CITRGFMT), 0x1234_5678 & !(3 << 29));
    }

    #[test]
    fn rotation_and_flip() {
        let (regs, mut fimc) = hosted();
        fimc.set_output_rot_flip(Rotation::Deg90, Flip::VFLIP);
        assert_eq!(regs.peek(CITRGFMT), (1 << 13) | (FLIP_Y_MIRROR << 14));
        fimc.set_output_rot_flip(Rotation::Deg180, Flip::empty());
        assert_eq!(regs.peek(CITRGFMT), 3 << 14);
        fimc.set_output_rot_flip(Rotation::Deg0, Flip::empty());
        assert_eq!(regs.peek(CITRGFMT), 0);
    }

    #[test]
    fn yuv_layout() {
        let (regs, mut fimc) = hosted();
        regs.poke(CIOCTRL, 1 << 2);
        fimc.set_output_yuv(PixelFormat::Uyvy);
        assert_eq!(regs.peek(CIOCTRL), (1 << 2) | ORDER422_CBYCRY);
        fimc.set_output_yuv(PixelFormat::Nv21);
        assert_eq!(regs.peek(CIOCTRL), (1 << 2) | (ORDER2P_LSB_CRCB << 24) | (1 << 3));
        fimc.set_output_yuv(PixelFormat::Yuv420);
        assert_eq!(regs.peek(CIOCTRL), 1 << 2);
        fimc.set_output_yuv(PixelFormat::Rgb565);
        assert_eq!(regs.peek(CIOCTRL), 1 << 2);
    }

    #[test]
    fn rgb_and_scan() {
        let (regs, mut fimc) = hosted();
        fimc.set_output_rgb(PixelFormat::Rgb32);
        assert_eq!(regs.peek(CISCCTRL), RGB_FMT_888 << 11);
        fimc.set_ext_rgb(true);
        assert_eq!(regs.peek(CISCCTRL), (RGB_FMT_888 << 11) | (1 << 10));
        fimc.set_output_rgb(PixelFormat::Rgb565);
        fimc.set_ext_rgb(false);
        assert_eq!(regs.peek(CISCCTRL), 0);

        fimc.set_output_scan(FieldOrder::InterlacedTb);
        assert_eq!(regs.peek(CISCCTRL), 1 << 25);
        // no capture session, so no weave
        assert_eq!(regs.peek(CIOCTRL), 0);
        fimc.set_capture_info(Some(CaptureInfo { pixelformat: PixelFormat::Yuyv, field: FieldOrder::InterlacedTb }));
        fimc.set_output_scan(FieldOrder::InterlacedTb);
        assert_eq!(regs.peek(CIOCTRL), 1 << 31);
        fimc.set_output_scan(FieldOrder::None);
        assert_eq!(regs.peek(CISCCTRL), 0);
        assert_eq!(regs.peek(CIOCTRL), 0);
    }

    #[test]
    fn slot_addresses() {
        let (regs, mut fimc) = hosted();
        let bs = BufferSet::new(0x5000_0000, 0x5010_0000, 0x5018_0000);
        fimc.set_output_address(&bs, 2).unwrap();
        assert_eq!(regs.peek(CIOYSA3), 0x5000_0000);
        assert_eq!(regs.peek(CIOCBSA3), 0x5010_0000);
        assert_eq!(regs.peek(CIOCRSA3), 0x5018_0000);
        assert_eq!(regs.peek(CIOYSA2), 0);
        assert_eq!(fimc.set_output_address(&bs, 4), Err(FimcError::InvalidSlot(4)));
    }

    #[test]
    fn plane_offsets() {
        let (regs, mut fimc) = hosted();
        let bounds = Rect::new(0, 0, 640, 480);
        let crop = Rect::new(8, 4, 320, 240);
        fimc.set_output_offset(PixelFormat::Nv12, &bounds, &crop);
        assert_eq!(regs.peek(CIOYOFF), (4 << 16) | 8);
        assert_eq!(regs.peek(CIOCBOFF), (4 << 16) | 8);
        assert_eq!(regs.peek(CIOCROFF), 0);

        fimc.set_output_offset(PixelFormat::Yuv420, &bounds, &crop);
        assert_eq!(regs.peek(CIOCROFF), (4 << 16) | 8);

        fimc.set_output_offset(PixelFormat::Yuyv, &bounds, &crop);
        assert_eq!(regs.peek(CIOYOFF), (4 << 16) | 8);
        assert_eq!((regs.peek(CIOCBOFF), regs.peek(CIOCROFF)), (0, 0));
    }

    #[test]
    fn addr_style() {
        let (regs, mut fimc) = hosted();
        regs.poke(CIDMAPARAM, 1 << 29);
        fimc.set_output_addr_style(PixelFormat::Nv12t);
        assert_eq!(regs.peek(CIDMAPARAM), (1 << 29) | (3 << 13));
        fimc.set_output_addr_style(PixelFormat::Nv12);
        assert_eq!(regs.peek(CIDMAPARAM), 1 << 29);
    }
}
