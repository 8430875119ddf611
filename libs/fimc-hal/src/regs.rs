//! FIMC 4.x register map.
use bitflags::bitflags;

use crate::utra::{Field, Register};

pub const CISRCFMT: Register = Register::new(0x00 / 4, 0xBFFF_FFFF);
pub const CISRCFMT_SOURCEVSIZE: Field = Field::new(13, 0, CISRCFMT);
pub const CISRCFMT_ORDER422: Field = Field::new(2, 14, CISRCFMT);
pub const CISRCFMT_SOURCEHSIZE: Field = Field::new(13, 16, CISRCFMT);
pub const CISRCFMT_ITU601_16BIT: Field = Field::new(1, 29, CISRCFMT);
pub const CISRCFMT_ITU601_8BIT: Field = Field::new(1, 31, CISRCFMT);

pub const CIWDOFST: Register = Register::new(0x04 / 4, 0xE7FF_CFFF);
pub const CIWDOFST_WINVEROFST: Field = Field::new(12, 0, CIWDOFST);
pub const CIWDOFST_CLROVFICR: Field = Field::new(1, 14, CIWDOFST);
pub const CIWDOFST_CLROVFICB: Field = Field::new(1, 15, CIWDOFST);
pub const CIWDOFST_WINHOROFST: Field = Field::new(11, 16, CIWDOFST);
pub const CIWDOFST_CLROVRLB: Field = Field::new(1, 29, CIWDOFST);
pub const CIWDOFST_CLROVFIY: Field = Field::new(1, 30, CIWDOFST);
pub const CIWDOFST_WINOFSEN: Field = Field::new(1, 31, CIWDOFST);

pub const CIGCTRL: Register = Register::new(0x08 / 4, 0xFFFF_FFFF);
pub const CIGCTRL_INTERLACE: Field = Field::new(1, 0, CIGCTRL);
pub const CIGCTRL_INVPOLFIELD: Field = Field::new(1, 1, CIGCTRL);
/// 1 selects the MIPI CSI path, 0 the ITU parallel path
pub const CIGCTRL_SELCAM_FIMC: Field = Field::new(1, 3, CIGCTRL);
pub const CIGCTRL_INVPOLHSYNC: Field = Field::new(1, 4, CIGCTRL);
/// 1 selects ITU709 coefficients, 0 ITU601
pub const CIGCTRL_CSC: Field = Field::new(1, 5, CIGCTRL);
/// 1 selects MIPI port B
pub const CIGCTRL_SELCAM_MIPI: Field = Field::new(1, 7, CIGCTRL);
pub const CIGCTRL_CAM_JPEG: Field = Field::new(1, 8, CIGCTRL);
pub const CIGCTRL_SHADOW_DISABLE: Field = Field::new(1, 12, CIGCTRL);
pub const CIGCTRL_IRQ_ENABLE: Field = Field::new(1, 16, CIGCTRL);
pub const CIGCTRL_FRM_START_IRQ_DISABLE: Field = Field::new(1, 17, CIGCTRL);
pub const CIGCTRL_FRM_END_IRQ_ENABLE: Field = Field::new(1, 18, CIGCTRL);
pub const CIGCTRL_IRQ_CLR: Field = Field::new(1, 19, CIGCTRL);
pub const CIGCTRL_IRQ_LEVEL: Field = Field::new(1, 20, CIGCTRL);
pub const CIGCTRL_HREF_MASK: Field = Field::new(1, 21, CIGCTRL);
pub const CIGCTRL_IRQ_OVFEN: Field = Field::new(1, 22, CIGCTRL);
pub const CIGCTRL_INVPOLHREF: Field = Field::new(1, 24, CIGCTRL);
pub const CIGCTRL_INVPOLVSYNC: Field = Field::new(1, 25, CIGCTRL);
pub const CIGCTRL_INVPOLPCLK: Field = Field::new(1, 26, CIGCTRL);
pub const CIGCTRL_TESTPATTERN: Field = Field::new(2, 27, CIGCTRL);
/// 1 selects ITU port A
pub const CIGCTRL_SELCAM_ITU: Field = Field::new(1, 29, CIGCTRL);
pub const CIGCTRL_CAMRST_A: Field = Field::new(1, 30, CIGCTRL);
pub const CIGCTRL_SWRST: Field = Field::new(1, 31, CIGCTRL);

pub const CIWDOFST2: Register = Register::new(0x14 / 4, 0x0FFF_0FFF);
pub const CIWDOFST2_WINVEROFST2: Field = Field::new(12, 0, CIWDOFST2);
pub const CIWDOFST2_WINHOROFST2: Field = Field::new(12, 16, CIWDOFST2);

// Output DMA start addresses, one register per ping-pong slot.
pub const CIOYSA1: Register = Register::new(0x18 / 4, 0xFFFF_FFFF);
pub const CIOYSA2: Register = Register::new(0x1C / 4, 0xFFFF_FFFF);
pub const CIOYSA3: Register = Register::new(0x20 / 4, 0xFFFF_FFFF);
pub const CIOYSA4: Register = Register::new(0x24 / 4, 0xFFFF_FFFF);
pub const CIOCBSA1: Register = Register::new(0x28 / 4, 0xFFFF_FFFF);
pub const CIOCBSA2: Register = Register::new(0x2C / 4, 0xFFFF_FFFF);
pub const CIOCBSA3: Register = Register::new(0x30 / 4, 0xFFFF_FFFF);
pub const CIOCBSA4: Register = Register::new(0x34 / 4, 0xFFFF_FFFF);
pub const CIOCRSA1: Register = Register::new(0x38 / 4, 0xFFFF_FFFF);
pub const CIOCRSA2: Register = Register::new(0x3C / 4, 0xFFFF_FFFF);
pub const CIOCRSA3: Register = Register::new(0x40 / 4, 0xFFFF_FFFF);
pub const CIOCRSA4: Register = Register::new(0x44 / 4, 0xFFFF_FFFF);

const CIOYSA: [Register; 4] = [CIOYSA1, CIOYSA2, CIOYSA3, CIOYSA4];
const CIOCBSA: [Register; 4] = [CIOCBSA1, CIOCBSA2, CIOCBSA3, CIOCBSA4];
const CIOCRSA: [Register; 4] = [CIOCRSA1, CIOCRSA2, CIOCRSA3, CIOCRSA4];

/// Y start address register of output slot `n` (0-based).
pub fn cioysa(n: usize) -> Option<Register> { CIOYSA.get(n).copied() }
pub fn ciocbsa(n: usize) -> Option<Register> { CIOCBSA.get(n).copied() }
pub fn ciocrsa(n: usize) -> Option<Register> { CIOCRSA.get(n).copied() }

pub const CITRGFMT: Register = Register::new(0x48 / 4, 0xFFFF_FFFF);
pub const CITRGFMT_TARGETVSIZE: Field = Field::new(13, 0, CITRGFMT);
pub const CITRGFMT_OUTROT90: Field = Field::new(1, 13, CITRGFMT);
pub const CITRGFMT_FLIP: Field = Field::new(2, 14, CITRGFMT);
pub const CITRGFMT_TARGETHSIZE: Field = Field::new(13, 16, CITRGFMT);
pub const CITRGFMT_OUTFORMAT: Field = Field::new(2, 29, CITRGFMT);
pub const CITRGFMT_INROT90: Field = Field::new(1, 31, CITRGFMT);

pub const CIOCTRL: Register = Register::new(0x4C / 4, 0x8300_0FFF);
pub const CIOCTRL_ORDER422: Field = Field::new(2, 0, CIOCTRL);
pub const CIOCTRL_LASTIRQ: Field = Field::new(1, 2, CIOCTRL);
/// 1 for two planes, 0 for three
pub const CIOCTRL_YCBCR_PLANE: Field = Field::new(1, 3, CIOCTRL);
pub const CIOCTRL_ALPHA: Field = Field::new(8, 4, CIOCTRL);
pub const CIOCTRL_ORDER2P: Field = Field::new(2, 24, CIOCTRL);
pub const CIOCTRL_WEAVE_OUT: Field = Field::new(1, 31, CIOCTRL);

pub const CISCPRERATIO: Register = Register::new(0x50 / 4, 0xF07F_007F);
pub const CISCPRERATIO_PREVERRATIO: Field = Field::new(7, 0, CISCPRERATIO);
pub const CISCPRERATIO_PREHORRATIO: Field = Field::new(7, 16, CISCPRERATIO);
pub const CISCPRERATIO_SHFACTOR: Field = Field::new(4, 28, CISCPRERATIO);

pub const CISCPREDST: Register = Register::new(0x54 / 4, 0x0FFF_0FFF);
pub const CISCPREDST_PREDSTHEIGHT: Field = Field::new(12, 0, CISCPREDST);
pub const CISCPREDST_PREDSTWIDTH: Field = Field::new(12, 16, CISCPREDST);

pub const CISCCTRL: Register = Register::new(0x58 / 4, 0xFFFF_FDFF);
pub const CISCCTRL_MAINVERRATIO: Field = Field::new(9, 0, CISCCTRL);
pub const CISCCTRL_EXTRGB: Field = Field::new(1, 10, CISCCTRL);
pub const CISCCTRL_OUTRGB_FMT: Field = Field::new(2, 11, CISCCTRL);
pub const CISCCTRL_INRGB_FMT: Field = Field::new(2, 13, CISCCTRL);
pub const CISCCTRL_SCALERSTART: Field = Field::new(1, 15, CISCCTRL);
pub const CISCCTRL_MAINHORRATIO: Field = Field::new(9, 16, CISCCTRL);
pub const CISCCTRL_INTERLACE: Field = Field::new(1, 25, CISCCTRL);
pub const CISCCTRL_LCDPATHEN_FIFO: Field = Field::new(1, 26, CISCCTRL);
pub const CISCCTRL_CSCY2R_WIDE: Field = Field::new(1, 27, CISCCTRL);
pub const CISCCTRL_CSCR2Y_WIDE: Field = Field::new(1, 28, CISCCTRL);
pub const CISCCTRL_SCALEUP_V: Field = Field::new(1, 29, CISCCTRL);
pub const CISCCTRL_SCALEUP_H: Field = Field::new(1, 30, CISCCTRL);
pub const CISCCTRL_SCALERBYPASS: Field = Field::new(1, 31, CISCCTRL);

pub const CITAREA: Register = Register::new(0x5C / 4, 0x03FF_FFFF);
pub const CITAREA_TARGET_AREA: Field = Field::new(26, 0, CITAREA);

pub const CISTATUS: Register = Register::new(0x64 / 4, 0xFFFF_0000);
pub const CISTATUS_LASTCAPTUREEND: Field = Field::new(1, 16, CISTATUS);
pub const CISTATUS_FRAMEEND: Field = Field::new(1, 17, CISTATUS);
pub const CISTATUS_FRAMECNT: Field = Field::new(2, 26, CISTATUS);

pub const CIIMGCPT: Register = Register::new(0xC0 / 4, 0xC204_0000);
pub const CIIMGCPT_CPT_FRMOD: Field = Field::new(1, 18, CIIMGCPT);
pub const CIIMGCPT_CPT_FREN: Field = Field::new(1, 25, CIIMGCPT);
pub const CIIMGCPT_IMGCPTEN_SC: Field = Field::new(1, 30, CIIMGCPT);
pub const CIIMGCPT_IMGCPTEN: Field = Field::new(1, 31, CIIMGCPT);

pub const CICPTSEQ: Register = Register::new(0xC4 / 4, 0xFFFF_FFFF);

pub const CIIMGEFF: Register = Register::new(0xD0 / 4, 0xFC1F_E0FF);
pub const CIIMGEFF_PAT_CR: Field = Field::new(8, 0, CIIMGEFF);
pub const CIIMGEFF_PAT_CB: Field = Field::new(8, 13, CIIMGEFF);
pub const CIIMGEFF_FIN: Field = Field::new(3, 26, CIIMGEFF);
pub const CIIMGEFF_IE_AFTER_SC: Field = Field::new(1, 29, CIIMGEFF);
pub const CIIMGEFF_IE_ENABLE: Field = Field::new(1, 30, CIIMGEFF);

pub const CIIYSA0: Register = Register::new(0xD4 / 4, 0xFFFF_FFFF);
pub const CIICBSA0: Register = Register::new(0xD8 / 4, 0xFFFF_FFFF);
pub const CIICRSA0: Register = Register::new(0xDC / 4, 0xFFFF_FFFF);

pub const CIREAL_ISIZE: Register = Register::new(0xF8 / 4, 0xFFFF_FFFF);
pub const CIREAL_ISIZE_WIDTH: Field = Field::new(14, 0, CIREAL_ISIZE);
pub const CIREAL_ISIZE_HEIGHT: Field = Field::new(14, 16, CIREAL_ISIZE);
pub const CIREAL_ISIZE_ADDR_CH_DISABLE: Field = Field::new(1, 30, CIREAL_ISIZE);
pub const CIREAL_ISIZE_AUTOLOAD: Field = Field::new(1, 31, CIREAL_ISIZE);

pub const MSCTRL: Register = Register::new(0xFC / 4, 0x8F03_E03F);
pub const MSCTRL_ENVID: Field = Field::new(1, 0, MSCTRL);
pub const MSCTRL_INFORMAT: Field = Field::new(2, 1, MSCTRL);
/// 1 reads from memory, 0 from the external camera
pub const MSCTRL_INPUT: Field = Field::new(1, 3, MSCTRL);
pub const MSCTRL_ORDER422: Field = Field::new(2, 4, MSCTRL);
pub const MSCTRL_FLIP: Field = Field::new(2, 13, MSCTRL);
/// 1 for two chroma planes interleaved, 0 for three planes
pub const MSCTRL_C_INT_IN: Field = Field::new(1, 15, MSCTRL);
pub const MSCTRL_2PLANE_ORDER: Field = Field::new(2, 16, MSCTRL);
pub const MSCTRL_BURST_CNT: Field = Field::new(4, 24, MSCTRL);
/// 1 weaves two fields, 0 is a normal frame
pub const MSCTRL_FIELD: Field = Field::new(1, 31, MSCTRL);

pub const CIOYOFF: Register = Register::new(0x168 / 4, 0x3FFF_3FFF);
pub const CIOYOFF_HORIZONTAL: Field = Field::new(14, 0, CIOYOFF);
pub const CIOYOFF_VERTICAL: Field = Field::new(14, 16, CIOYOFF);
pub const CIOCBOFF: Register = Register::new(0x16C / 4, 0x3FFF_3FFF);
pub const CIOCBOFF_HORIZONTAL: Field = Field::new(14, 0, CIOCBOFF);
pub const CIOCBOFF_VERTICAL: Field = Field::new(14, 16, CIOCBOFF);
pub const CIOCROFF: Register = Register::new(0x170 / 4, 0x3FFF_3FFF);
pub const CIOCROFF_HORIZONTAL: Field = Field::new(14, 0, CIOCROFF);
pub const CIOCROFF_VERTICAL: Field = Field::new(14, 16, CIOCROFF);

pub const CIIYOFF: Register = Register::new(0x174 / 4, 0x3FFF_3FFF);
pub const CIIYOFF_HORIZONTAL: Field = Field::new(14, 0, CIIYOFF);
pub const CIIYOFF_VERTICAL: Field = Field::new(14, 16, CIIYOFF);
pub const CIICBOFF: Register = Register::new(0x178 / 4, 0x3FFF_3FFF);
pub const CIICBOFF_HORIZONTAL: Field = Field::new(14, 0, CIICBOFF);
pub const CIICBOFF_VERTICAL: Field = Field::new(14, 16, CIICBOFF);
pub const CIICROFF: Register = Register::new(0x17C / 4, 0x3FFF_3FFF);
pub const CIICROFF_HORIZONTAL: Field = Field::new(14, 0, CIICROFF);
pub const CIICROFF_VERTICAL: Field = Field::new(14, 16, CIICROFF);

pub const ORGISIZE: Register = Register::new(0x180 / 4, 0x3FFF_3FFF);
pub const ORGISIZE_HORIZONTAL: Field = Field::new(14, 0, ORGISIZE);
pub const ORGISIZE_VERTICAL: Field = Field::new(14, 16, ORGISIZE);
pub const ORGOSIZE: Register = Register::new(0x184 / 4, 0x3FFF_3FFF);
pub const ORGOSIZE_HORIZONTAL: Field = Field::new(14, 0, ORGOSIZE);
pub const ORGOSIZE_VERTICAL: Field = Field::new(14, 16, ORGOSIZE);

pub const CIEXTEN: Register = Register::new(0x188 / 4, 0x0540_FC3F);
pub const CIEXTEN_MAINVERRATIO_EXT: Field = Field::new(6, 0, CIEXTEN);
pub const CIEXTEN_MAINHORRATIO_EXT: Field = Field::new(6, 10, CIEXTEN);
pub const CIEXTEN_YUV444_OUT: Field = Field::new(1, 22, CIEXTEN);
pub const CIEXTEN_TARGETV_EXT: Field = Field::new(1, 24, CIEXTEN);
pub const CIEXTEN_TARGETH_EXT: Field = Field::new(1, 26, CIEXTEN);

pub const CIDMAPARAM: Register = Register::new(0x18C / 4, 0x6000_6000);
pub const CIDMAPARAM_W_MODE: Field = Field::new(2, 13, CIDMAPARAM);
pub const CIDMAPARAM_R_MODE: Field = Field::new(2, 29, CIDMAPARAM);

pub const CSIIMGFMT: Register = Register::new(0x194 / 4, 0x0000_013F);
pub const CSIIMGFMT_FMT: Field = Field::new(6, 0, CSIIMGFMT);
pub const CSIIMGFMT_DATA_ALIGN: Field = Field::new(1, 8, CSIIMGFMT);

/// Size of the register window in words.
pub const FIMC_NUMREGS: usize = 0x198 / 4;

// Field encodings
pub const ORDER422_YCBYCR: u32 = 0;
pub const ORDER422_YCRYCB: u32 = 1;
pub const ORDER422_CBYCRY: u32 = 2;
pub const ORDER422_CRYCBY: u32 = 3;

/// MSCTRL numbers its 4:2:2 orders the other way round.
pub const MS_ORDER422_CRYCBY: u32 = 0;
pub const MS_ORDER422_YCRYCB: u32 = 1;
pub const MS_ORDER422_CBYCRY: u32 = 2;
pub const MS_ORDER422_YCBYCR: u32 = 3;

pub const FORMAT_YCBCR420: u32 = 0;
pub const FORMAT_YCBCR422: u32 = 1;
pub const FORMAT_YCBCR422_1PLANE: u32 = 2;
pub const FORMAT_RGB: u32 = 3;

pub const FLIP_X_MIRROR: u32 = 0b01;
pub const FLIP_Y_MIRROR: u32 = 0b10;

pub const ORDER2P_LSB_CBCR: u32 = 0;
pub const ORDER2P_LSB_CRCB: u32 = 1;
pub const ORDER2P_MSB_CRCB: u32 = 2;
pub const ORDER2P_MSB_CBCR: u32 = 3;

pub const RGB_FMT_565: u32 = 0;
pub const RGB_FMT_666: u32 = 1;
pub const RGB_FMT_888: u32 = 2;

pub const DMA_MODE_LINEAR: u32 = 0;
pub const DMA_MODE_CONFTILE: u32 = 1;
pub const DMA_MODE_16X16: u32 = 2;
pub const DMA_MODE_64X32: u32 = 3;

pub const CSIIMGFMT_RESET: u32 = 0x1E;
pub const BURST_CNT_MAX: u32 = 4;

bitflags! {
    /// Decoded CISTATUS.
    pub struct Status: u32 {
        const LAST_CAPTURE_END = 1 << 16;
        const FRAME_END        = 1 << 17;
        const OVERFLOW_LB      = 1 << 18;
        const VSYNC_B          = 1 << 19;
        const VSYNC_A          = 1 << 20;
        const IMGCPT_EN_SC     = 1 << 21;
        const IMGCPT_EN        = 1 << 22;
        const WINOFF_EN        = 1 << 25;
        const VSYNC            = 1 << 28;
        const OVERFLOW_CR      = 1 << 29;
        const OVERFLOW_CB      = 1 << 30;
        const OVERFLOW_Y       = 1 << 31;
    }
}

impl Status {
    pub fn overflow(&self) -> bool {
        self.intersects(Status::OVERFLOW_Y | Status::OVERFLOW_CB | Status::OVERFLOW_CR)
    }
}

/// Register values loaded after a software reset. The window and source
/// format registers keep their reset state.
pub const DEFAULTS: [(Register, u32); 37] = [
    (CIOYSA1, 0),
    (CIOYSA2, 0),
    (CIOYSA3, 0),
    (CIOYSA4, 0),
    (CIOCBSA1, 0),
    (CIOCBSA2, 0),
    (CIOCBSA3, 0),
    (CIOCBSA4, 0),
    (CIOCRSA1, 0),
    (CIOCRSA2, 0),
    (CIOCRSA3, 0),
    (CIOCRSA4, 0),
    (CITRGFMT, 0),
    (CIOCTRL, 0),
    (CISCPRERATIO, 0),
    (CISCPREDST, 0),
    // wide range CSC in both directions
    (CISCCTRL, 0x1800_0000),
    (CITAREA, 0),
    (CIIMGCPT, 0),
    (CICPTSEQ, 0xFFFF_FFFF),
    // effect pattern Cb = Cr = 0x80
    (CIIMGEFF, 0x0010_0080),
    (CIIYSA0, 0),
    (CIICBSA0, 0),
    (CIICRSA0, 0),
    (CIREAL_ISIZE, 0),
    // burst count 4
    (MSCTRL, 0x0400_0000),
    (CIOYOFF, 0),
    (CIOCBOFF, 0),
    (CIOCROFF, 0),
    (CIIYOFF, 0),
    (CIICBOFF, 0),
    (CIICROFF, 0),
    (ORGISIZE, 0),
    (ORGOSIZE, 0),
    (CIEXTEN, 0),
    (CIDMAPARAM, 0),
    (CSIIMGFMT, CSIIMGFMT_RESET),
];

pub const SAVED_REG_COUNT: usize = 42;

/// Registers captured across a power transition, in save order.
pub const SAVED_REGS: [Register; SAVED_REG_COUNT] = [
    CISRCFMT,
    CIWDOFST,
    CIGCTRL,
    CIWDOFST2,
    CIOYSA1,
    CIOYSA2,
    CIOYSA3,
    CIOYSA4,
    CIOCBSA1,
    CIOCBSA2,
    CIOCBSA3,
    CIOCBSA4,
    CIOCRSA1,
    CIOCRSA2,
    CIOCRSA3,
    CIOCRSA4,
    CITRGFMT,
    CIOCTRL,
    CISCPRERATIO,
    CISCPREDST,
    CISCCTRL,
    CITAREA,
    CISTATUS,
    CIIMGCPT,
    CICPTSEQ,
    CIIMGEFF,
    CIIYSA0,
    CIICBSA0,
    CIICRSA0,
    CIREAL_ISIZE,
    MSCTRL,
    CIOYOFF,
    CIOCBOFF,
    CIOCROFF,
    CIIYOFF,
    CIICBOFF,
    CIICROFF,
    ORGISIZE,
    ORGOSIZE,
    CIEXTEN,
    CIDMAPARAM,
    CSIIMGFMT,
];

/// Human readable name of a register, for dumps.
pub fn name(reg: Register) -> &'static str {
    match reg.byte_offset() {
        0x00 => "CISRCFMT",
        0x04 => "CIWDOFST",
        0x08 => "CIGCTRL",
        0x14 => "CIWDOFST2",
        0x18..=0x24 => "CIOYSA",
        0x28..=0x34 => "CIOCBSA",
        0x38..=0x44 => "CIOCRSA",
        0x48 => "CITRGFMT",
        0x4C => "CIOCTRL",
        0x50 => "CISCPRERATIO",
        0x54 => "CISCPREDST",
        0x58 => "CISCCTRL",
        0x5C => "CITAREA",
        0x64 => "CISTATUS",
        0xC0 => "CIIMGCPT",
        0xC4 => "CICPTSEQ",
        0xD0 => "CIIMGEFF",
        0xD4 => "CIIYSA0",
        0xD8 => "CIICBSA0",
        0xDC => "CIICRSA0",
        0xF8 => "CIREAL_ISIZE",
        0xFC => "MSCTRL",
        0x168 => "CIOYOFF",
        0x16C => "CIOCBOFF",
        0x170 => "CIOCROFF",
        0x174 => "CIIYOFF",
        0x178 => "CIICBOFF",
        0x17C => "CIICROFF",
        0x180 => "ORGISIZE",
        0x184 => "ORGOSIZE",
        0x188 => "CIEXTEN",
        0x18C => "CIDMAPARAM",
        0x194 => "CSIIMGFMT",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        assert_eq!(CIOCBSA1.byte_offset(), 0x28);
        assert_eq!(CSIIMGFMT.byte_offset(), 0x194);
        assert_eq!(cioysa(3), Some(CIOYSA4));
        assert_eq!(ciocrsa(0).map(|r| r.byte_offset()), Some(0x38));
        assert_eq!(ciocbsa(4), None);
        assert!(SAVED_REGS.iter().all(|r| r.offset() < FIMC_NUMREGS));
    }

    #[test]
    fn defaults_are_ascending_and_skip_window_regs() {
        assert!(DEFAULTS.windows(2).all(|w| w[0].0.offset() < w[1].0.offset()));
        assert!(!DEFAULTS.iter().any(|(r, _)| *r == CISRCFMT || *r == CIGCTRL || *r == CISTATUS));
    }

    #[test]
    fn status_decode() {
        let s = Status::from_bits_truncate(0x8002_0000 | (2 << 26));
        assert!(s.contains(Status::FRAME_END));
        assert!(s.overflow());
        assert!(!Status::from_bits_truncate(1 << 16).overflow());
    }
}
