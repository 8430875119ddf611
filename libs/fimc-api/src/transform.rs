use bitflags::bitflags;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// True when the output axes are swapped relative to the input.
    pub fn is_transposing(self) -> bool { matches!(self, Rotation::Deg90 | Rotation::Deg270) }
}

bitflags! {
    /// Flips requested by the user, applied on top of the rotation.
    pub struct Flip: u32 {
        const HFLIP = 0b01;
        const VFLIP = 0b10;
    }
}

bitflags! {
    /// What the hardware has to do: mirror on X, mirror on Y, and/or rotate
    /// 90 degrees clockwise. 180 and 270 are expressed as mirrors.
    pub struct Orientation: u32 {
        const XFLIP = 0x01;
        const YFLIP = 0x02;
        const ROT90 = 0x10;
    }
}

impl Orientation {
    pub fn from_rot_flip(rot: Rotation, flip: Flip) -> Orientation {
        let mut requested = Orientation::empty();
        if flip.contains(Flip::HFLIP) {
            requested |= Orientation::XFLIP;
        }
        if flip.contains(Flip::VFLIP) {
            requested |= Orientation::YFLIP;
        }
        let mirrors = Orientation::XFLIP | Orientation::YFLIP;
        match rot {
            Rotation::Deg0 => requested,
            Rotation::Deg90 => Orientation::ROT90 | requested,
            // a requested flip undoes the corresponding mirror of the 180
            Rotation::Deg180 => mirrors - requested,
            Rotation::Deg270 => Orientation::ROT90 | (mirrors - requested),
        }
    }
}
