#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self { Size { width, height } }

    /// Swap the axes, as seen after a 90 or 270 degree rotation.
    pub const fn transposed(self) -> Self { Size { width: self.height, height: self.width } }

    pub const fn area(self) -> u32 { self.width * self.height }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Rect { left, top, width, height }
    }

    /// A rectangle covering `size` from the origin.
    pub const fn full(size: Size) -> Self { Rect { left: 0, top: 0, width: size.width, height: size.height } }

    pub const fn size(&self) -> Size { Size { width: self.width, height: self.height } }

    /// True if `self` has an origin other than zero or a size other than `bounds`.
    pub fn is_cropped_from(&self, bounds: &Rect) -> bool {
        self.left != 0 || self.top != 0 || self.width != bounds.width || self.height != bounds.height
    }
}
