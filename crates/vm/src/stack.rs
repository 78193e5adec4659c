//! The stack bank: four fixed-capacity byte stacks.
//!
//! Stacks hold raw bytes. Each operation is told the width of the value it
//! moves, and multi-byte values are stored little-endian with the least
//! significant byte at the lower address. A failed operation never changes
//! the stack pointer or the contents.

use std::fmt;

use claw_common::{Width, STACK_COUNT};
use log::trace;

use crate::error::StackError;

/// Capacity of each stack in bytes.
pub const STACK_CAPACITY: usize = 1024;

/// Four independent byte stacks with their stack pointers.
///
/// Stack indices must be below [`STACK_COUNT`]; a larger index panics.
/// Indices decoded from an instruction word are always in range.
#[derive(Clone, PartialEq, Eq)]
pub struct StackBank {
    data: [[u8; STACK_CAPACITY]; STACK_COUNT],
    sp: [usize; STACK_COUNT],
}

impl Default for StackBank {
    fn default() -> Self {
        Self {
            data: [[0; STACK_CAPACITY]; STACK_COUNT],
            sp: [0; STACK_COUNT],
        }
    }
}

impl StackBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty all four stacks.
    pub fn reset(&mut self) {
        self.sp = [0; STACK_COUNT];
    }

    /// Bytes in use on `stack`.
    pub fn sp(&self, stack: usize) -> usize {
        self.sp[stack]
    }

    pub fn is_empty(&self, stack: usize) -> bool {
        self.sp[stack] == 0
    }

    /// The live bytes of `stack`, bottom first.
    pub fn contents(&self, stack: usize) -> &[u8] {
        &self.data[stack][..self.sp[stack]]
    }

    /// Push `value`, truncated to `width`.
    pub fn push(&mut self, stack: usize, width: Width, value: u32) -> Result<(), StackError> {
        let n = width.bytes();
        let sp = self.sp[stack];
        if sp + n > STACK_CAPACITY {
            return Err(StackError::Overflow { stack });
        }
        self.data[stack][sp..sp + n].copy_from_slice(&value.to_le_bytes()[..n]);
        self.sp[stack] = sp + n;
        trace!("push s{stack} w{width} {value:#x} (sp {})", sp + n);
        Ok(())
    }

    /// Read the top value without removing it.
    pub fn peek(&self, stack: usize, width: Width) -> Result<u32, StackError> {
        self.peek_at(stack, width, 0)
    }

    /// Read the value whose top byte lies `depth` bytes below the top.
    ///
    /// `depth == 0` is the same as [`StackBank::peek`].
    pub fn peek_at(&self, stack: usize, width: Width, depth: usize) -> Result<u32, StackError> {
        let n = width.bytes();
        let sp = self.sp[stack];
        let end = sp
            .checked_sub(depth)
            .filter(|&end| end >= n)
            .ok_or(StackError::Underflow { stack })?;
        let mut le = [0u8; 4];
        le[..n].copy_from_slice(&self.data[stack][end - n..end]);
        Ok(u32::from_le_bytes(le))
    }

    /// Remove and return the top value.
    pub fn pop(&mut self, stack: usize, width: Width) -> Result<u32, StackError> {
        let value = self.peek(stack, width)?;
        self.sp[stack] -= width.bytes();
        trace!("pop s{stack} w{width} {value:#x} (sp {})", self.sp[stack]);
        Ok(value)
    }
}

impl fmt::Debug for StackBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for stack in 0..STACK_COUNT {
            list.entry(&self.contents(stack));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claw_common::width::ALL_WIDTHS;

    #[test]
    fn push_then_peek_returns_value() {
        for width in ALL_WIDTHS {
            let mut bank = StackBank::new();
            let value = width.truncate(0xa1b2_c3d4);
            bank.push(0, width, value).unwrap();
            let sp = bank.sp(0);
            assert_eq!(bank.peek(0, width), Ok(value));
            assert_eq!(bank.sp(0), sp, "peek moved sp for {width}");
        }
    }

    #[test]
    fn values_are_little_endian() {
        let mut bank = StackBank::new();
        bank.push(2, Width::W32, 0x1122_3344).unwrap();
        assert_eq!(bank.contents(2), &[0x44, 0x33, 0x22, 0x11]);
    }

    #[test]
    fn push_truncates_to_width() {
        let mut bank = StackBank::new();
        bank.push(0, Width::W8, 0x1ff).unwrap();
        assert_eq!(bank.contents(0), &[0xff]);
        assert_eq!(bank.sp(0), 1);
    }

    #[test]
    fn fills_to_capacity_then_overflows() {
        for width in ALL_WIDTHS {
            let mut bank = StackBank::new();
            let count = STACK_CAPACITY / width.bytes();
            for i in 0..count {
                bank.push(1, width, i as u32).unwrap();
            }
            assert_eq!(bank.sp(1), STACK_CAPACITY);
            assert_eq!(
                bank.push(1, width, 0),
                Err(StackError::Overflow { stack: 1 })
            );
            assert_eq!(bank.sp(1), STACK_CAPACITY);
        }
    }

    #[test]
    fn overflow_when_partially_full() {
        let mut bank = StackBank::new();
        for _ in 0..STACK_CAPACITY - 3 {
            bank.push(0, Width::W8, 0).unwrap();
        }
        assert_eq!(bank.push(0, Width::W32, 7), Err(StackError::Overflow { stack: 0 }));
        assert_eq!(bank.sp(0), STACK_CAPACITY - 3);
        bank.push(0, Width::W16, 7).unwrap();
        assert_eq!(bank.sp(0), STACK_CAPACITY - 1);
    }

    #[test]
    fn pop_on_empty_underflows() {
        for width in ALL_WIDTHS {
            let mut bank = StackBank::new();
            assert_eq!(bank.pop(3, width), Err(StackError::Underflow { stack: 3 }));
            assert_eq!(bank.sp(3), 0);
        }
    }

    #[test]
    fn wide_pop_on_short_stack_underflows() {
        let mut bank = StackBank::new();
        bank.push(0, Width::W16, 0xbeef).unwrap();
        assert_eq!(bank.pop(0, Width::W32), Err(StackError::Underflow { stack: 0 }));
        assert_eq!(bank.sp(0), 2);
        assert_eq!(bank.pop(0, Width::W16), Ok(0xbeef));
    }

    #[test]
    fn pop_narrower_than_push() {
        let mut bank = StackBank::new();
        bank.push(0, Width::W16, 0xabcd).unwrap();
        // The high byte sits on top.
        assert_eq!(bank.pop(0, Width::W8), Ok(0xab));
        assert_eq!(bank.pop(0, Width::W8), Ok(0xcd));
    }

    #[test]
    fn peek_at_depth() {
        let mut bank = StackBank::new();
        bank.push(0, Width::W16, 0x1111).unwrap();
        bank.push(0, Width::W8, 0x22).unwrap();
        assert_eq!(bank.peek_at(0, Width::W8, 0), Ok(0x22));
        assert_eq!(bank.peek_at(0, Width::W16, 1), Ok(0x1111));
        assert_eq!(
            bank.peek_at(0, Width::W16, 2),
            Err(StackError::Underflow { stack: 0 })
        );
        assert_eq!(
            bank.peek_at(0, Width::W8, 100),
            Err(StackError::Underflow { stack: 0 })
        );
    }

    #[test]
    fn stacks_are_independent() {
        let mut bank = StackBank::new();
        bank.push(0, Width::W8, 1).unwrap();
        bank.push(3, Width::W8, 4).unwrap();
        assert_eq!(bank.contents(0), &[1]);
        assert!(bank.is_empty(1));
        assert!(bank.is_empty(2));
        assert_eq!(bank.contents(3), &[4]);
    }

    #[test]
    fn reset_empties_all_stacks() {
        let mut bank = StackBank::new();
        for stack in 0..STACK_COUNT {
            bank.push(stack, Width::W32, 9).unwrap();
        }
        bank.reset();
        for stack in 0..STACK_COUNT {
            assert_eq!(bank.sp(stack), 0);
        }
    }

    #[test]
    fn debug_shows_live_bytes() {
        let mut bank = StackBank::new();
        bank.push(1, Width::W8, 5).unwrap();
        assert_eq!(format!("{bank:?}"), "[[], [5], [], []]");
    }
}
