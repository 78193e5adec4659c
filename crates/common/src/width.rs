//! Operand widths.
//!
//! Stacks hold untyped bytes; the width of every value comes from the
//! instruction that touches it. Values travel through the engine as `u32`
//! and are truncated to the active width at every boundary.

use std::fmt;

/// The width of a stack operand or inline literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
}

/// All widths, narrowest first.
pub const ALL_WIDTHS: [Width; 3] = [Width::W8, Width::W16, Width::W32];

impl Width {
    /// Width of a jump target, call target or return address.
    pub const ADDRESS: Width = Width::W32;

    /// Number of bytes a value of this width occupies.
    pub const fn bytes(self) -> usize {
        match self {
            Width::W8 => 1,
            Width::W16 => 2,
            Width::W32 => 4,
        }
    }

    pub const fn bits(self) -> u32 {
        self.bytes() as u32 * 8
    }

    /// All-ones value at this width.
    pub const fn mask(self) -> u32 {
        match self {
            Width::W8 => 0xff,
            Width::W16 => 0xffff,
            Width::W32 => 0xffff_ffff,
        }
    }

    /// Truncates `value` to this width.
    pub const fn truncate(self, value: u32) -> u32 {
        value & self.mask()
    }

    /// Interprets the low bits of `value` as a two's complement number.
    pub const fn sign_extend(self, value: u32) -> i32 {
        match self {
            Width::W8 => value as u8 as i8 as i32,
            Width::W16 => value as u16 as i16 as i32,
            Width::W32 => value as i32,
        }
    }

    /// Returns true if the sign bit at this width is set.
    pub const fn is_negative(self, value: u32) -> bool {
        value & (1 << (self.bits() - 1)) != 0
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}
