use core::fmt;

use fimc_api::{PixelFormat, ScalerError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FimcError {
    /// The operation needs an attached camera
    NoCamera,
    /// The camera window does not fit inside the source frame
    InvalidWindow,
    /// The format is not handled by this path
    InvalidPixelFormat(PixelFormat),
    /// Output address slot out of range
    InvalidSlot(usize),
    Scaler(ScalerError),
    Timeout,
    /// Restore requested with no saved register set
    NoSnapshot,
    /// The register page could not be mapped
    MapFailed,
}

impl From<ScalerError> for FimcError {
    fn from(e: ScalerError) -> Self { FimcError::Scaler(e) }
}

impl fmt::Display for FimcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FimcError::NoCamera => write!(f, "no active camera"),
            FimcError::InvalidWindow => write!(f, "camera window exceeds the source frame"),
            FimcError::InvalidPixelFormat(pf) => {
                write!(f, "invalid pixel format {:?} (fourcc {:08x})", pf, pf.fourcc())
            }
            FimcError::InvalidSlot(slot) => write!(f, "output slot {} out of range", slot),
            FimcError::Scaler(e) => write!(f, "scaler: {:?}", e),
            FimcError::Timeout => write!(f, "timed out waiting for the frame to end"),
            FimcError::NoSnapshot => write!(f, "no saved registers to restore"),
            FimcError::MapFailed => write!(f, "couldn't map FIMC registers"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FimcError {}
