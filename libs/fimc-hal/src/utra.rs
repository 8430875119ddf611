//! Thin register abstraction in the UTRA mould.
//!
//! `Register` offsets count register words, not bytes, and the accessor
//! indexes with the element type of the base pointer, so a `CSR<u32>` has the
//! same layout on the SoC and on a 64-bit host.
use core::sync::atomic::{compiler_fence, Ordering};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Register {
    /// Offset of this register within this CSR, in words
    offset: usize,
    /// Mask of the implemented bits of the register
    mask: usize,
}
impl Register {
    pub const fn new(offset: usize, mask: usize) -> Register { Register { offset, mask } }

    pub const fn offset(&self) -> usize { self.offset }

    pub const fn mask(&self) -> usize { self.mask }

    /// Byte offset, as printed in the datasheet.
    pub const fn byte_offset(&self) -> usize { self.offset * 4 }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Field {
    /// A bitmask we use to AND to the value, unshifted.
    /// E.g. for a width of `3` bits, this mask would be 0b111.
    mask: usize,
    /// Offset of the first bit in this field
    offset: usize,
    /// The register this field is a member of
    register: Register,
}
impl Field {
    /// Define a new CSR field with the given width at a specified
    /// offset from the start of the register.
    pub const fn new(width: usize, offset: usize, register: Register) -> Field {
        let mask = if width < 32 { (1 << width) - 1 } else { 0xFFFF_FFFF };
        Field { mask, offset, register }
    }

    pub const fn offset(&self) -> usize { self.offset }

    pub const fn mask(&self) -> usize { self.mask }

    pub const fn register(&self) -> Register { self.register }
}

#[derive(Debug, Copy, Clone)]
pub struct CSR<T> {
    base: *mut T,
}
impl<T> CSR<T>
where
    T: Copy + core::convert::TryFrom<usize> + core::convert::TryInto<usize> + core::default::Default,
{
    pub fn new(base: *mut T) -> Self { CSR { base } }

    /// Retrieve the raw pointer used as the base of the CSR. This is unsafe because the copied
    /// value can be used to create another accessor to the same hardware.
    pub unsafe fn base(&self) -> *mut T { self.base }

    fn read_word(&self, offset: usize) -> usize {
        // prevent re-ordering
        compiler_fence(Ordering::SeqCst);
        unsafe { self.base.add(offset).read_volatile() }.try_into().unwrap_or_default()
    }

    fn write_word(&mut self, offset: usize, value: usize) {
        let value: T = value.try_into().unwrap_or_default();
        unsafe { self.base.add(offset).write_volatile(value) };
        // prevent re-ordering
        compiler_fence(Ordering::SeqCst);
    }

    /// Read the contents of this register
    pub fn r(&self, reg: Register) -> T { self.read_word(reg.offset).try_into().unwrap_or_default() }

    /// Read a field from this CSR
    pub fn rf(&self, field: Field) -> T {
        ((self.read_word(field.register.offset) >> field.offset) & field.mask).try_into().unwrap_or_default()
    }

    /// Read-modify-write a given field in this CSR
    pub fn rmwf(&mut self, field: Field, value: T) {
        let value_as_usize: usize = (value.try_into().unwrap_or_default() & field.mask) << field.offset;
        let previous = self.read_word(field.register.offset) & !(field.mask << field.offset);
        self.write_word(field.register.offset, previous | value_as_usize);
    }

    /// Write a given field without reading it first
    pub fn wfo(&mut self, field: Field, value: T) {
        let value_as_usize: usize = (value.try_into().unwrap_or_default() & field.mask) << field.offset;
        self.write_word(field.register.offset, value_as_usize);
    }

    /// Write the entire contents of a register without reading it first
    pub fn wo(&mut self, reg: Register, value: T) {
        self.write_word(reg.offset, value.try_into().unwrap_or_default());
    }

    /// Zero a field from a provided value
    pub fn zf(&self, field: Field, value: T) -> T {
        let value_as_usize: usize = value.try_into().unwrap_or_default();
        (value_as_usize & !(field.mask << field.offset)).try_into().unwrap_or_default()
    }

    /// Shift & mask a value to its final field position
    pub fn ms(&self, field: Field, value: T) -> T {
        let value_as_usize: usize = value.try_into().unwrap_or_default();
        ((value_as_usize & field.mask) << field.offset).try_into().unwrap_or_default()
    }
}
