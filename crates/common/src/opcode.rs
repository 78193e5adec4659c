//! Opcode definitions for the CLAW instruction set.
//!
//! Opcodes occupy the upper twelve bits of an instruction word. The numeric
//! values are fixed by the binary format and must never be renumbered.
//! `DBGS`/`DBG8`/`DBG16`/`DBG32` live in slots the base table leaves unused.

use crate::error::DecodeError;

/// Identifies the operation to perform.
///
/// The `#[repr(u16)]` attribute pins each variant to its 12-bit encoding.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Control
    /// No operation.
    Nop = 0x000,
    /// Sleep request; reserved for the peripheral subsystem.
    Sleep = 0x002,

    // Literals
    /// Push the inline 8-bit literal onto the destination stack.
    Let8 = 0x004,
    /// Push the inline 16-bit literal onto the destination stack.
    Let16 = 0x005,
    /// Push the inline 32-bit literal onto the destination stack.
    Let32 = 0x006,
    /// Push the inline 32-bit address literal onto the destination stack.
    LetA = 0x007,

    // Debug output
    /// Emit the inline NUL-terminated string to the output sink.
    DbgS = 0x008,
    /// Pop an 8-bit value from the source stack and emit it to the output sink.
    Dbg8 = 0x009,
    /// Pop a 16-bit value from the source stack and emit it to the output sink.
    Dbg16 = 0x00a,
    /// Pop a 32-bit value from the source stack and emit it to the output sink.
    Dbg32 = 0x00b,

    // Data movement
    /// Copy the top 8-bit value of the source stack onto the destination.
    Cpy8 = 0x00d,
    /// Copy the top 16-bit value of the source stack onto the destination.
    Cpy16 = 0x00e,
    /// Copy the top 32-bit value of the source stack onto the destination.
    Cpy32 = 0x00f,
    /// Copy the top 32-bit address of the source stack onto the destination.
    CpyA = 0x010,
    /// Move the top 8-bit value of the source stack onto the destination.
    Mov8 = 0x011,
    /// Move the top 16-bit value of the source stack onto the destination.
    Mov16 = 0x012,
    /// Move the top 32-bit value of the source stack onto the destination.
    Mov32 = 0x013,
    /// Move the top 32-bit address of the source stack onto the destination.
    MovA = 0x014,
    /// Exchange the top 8-bit values of the source and destination stacks.
    Swp8 = 0x015,
    /// Exchange the top 16-bit values of the source and destination stacks.
    Swp16 = 0x016,
    /// Exchange the top 32-bit values of the source and destination stacks.
    Swp32 = 0x017,
    /// Exchange the top 32-bit addresses of the source and destination stacks.
    SwpA = 0x018,
    /// Pop a 32-bit depth, copy the 8-bit value at that depth onto the destination.
    PeekD8 = 0x019,
    /// Pop a 32-bit depth, copy the 16-bit value at that depth onto the destination.
    PeekD16 = 0x01a,
    /// Pop a 32-bit depth, copy the 32-bit value at that depth onto the destination.
    PeekD32 = 0x01b,
    /// Push the source stack pointer as a 32-bit value onto the destination.
    Sptr = 0x01c,
    /// Pop and discard the top 8-bit value of the source stack.
    Del8 = 0x01d,
    /// Pop and discard the top 16-bit value of the source stack.
    Del16 = 0x01e,
    /// Pop and discard the top 32-bit value of the source stack.
    Del32 = 0x01f,
    /// Memory copy; reserved.
    Mmcp = 0x02d,

    // Arithmetic
    /// Pop two 8-bit values, push their wrapping sum.
    Add8 = 0x030,
    /// Pop two 16-bit values, push their wrapping sum.
    Add16 = 0x031,
    /// Pop two 32-bit values, push their wrapping sum.
    Add32 = 0x032,
    /// Float arithmetic; reserved.
    AddF = 0x033,
    /// Pop two 8-bit values, push (second_popped - first_popped).
    Sub8 = 0x034,
    /// Pop two 16-bit values, push (second_popped - first_popped).
    Sub16 = 0x035,
    /// Pop two 32-bit values, push (second_popped - first_popped).
    Sub32 = 0x036,
    /// Float arithmetic; reserved.
    SubF = 0x037,
    /// Pop two 8-bit values, push their wrapping product.
    Mul8 = 0x038,
    /// Pop two 16-bit values, push their wrapping product.
    Mul16 = 0x039,
    /// Pop two 32-bit values, push their wrapping product.
    Mul32 = 0x03a,
    /// Float arithmetic; reserved.
    MulF = 0x03b,
    /// Pop two 8-bit values, push the signed quotient.
    Div8 = 0x03c,
    /// Pop two 16-bit values, push the signed quotient.
    Div16 = 0x03d,
    /// Pop two 32-bit values, push the signed quotient.
    Div32 = 0x03e,
    /// Float arithmetic; reserved.
    DivF = 0x03f,
    /// Pop two 8-bit values, push the unsigned quotient.
    DivU8 = 0x040,
    /// Pop two 16-bit values, push the unsigned quotient.
    DivU16 = 0x041,
    /// Pop two 32-bit values, push the unsigned quotient.
    DivU32 = 0x042,
    /// Pop two 8-bit values, push the signed remainder.
    Mod8 = 0x043,
    /// Pop two 16-bit values, push the signed remainder.
    Mod16 = 0x044,
    /// Pop two 32-bit values, push the signed remainder.
    Mod32 = 0x045,
    /// Float arithmetic; reserved.
    ModF = 0x046,
    /// Pop two 8-bit values, push the unsigned remainder.
    ModU8 = 0x047,
    /// Pop two 16-bit values, push the unsigned remainder.
    ModU16 = 0x048,
    /// Pop two 32-bit values, push the unsigned remainder.
    ModU32 = 0x049,

    // Shifts
    /// Pop an 8-bit count then an 8-bit value, push the logical right shift.
    Sr8 = 0x04a,
    /// Pop an 8-bit count then a 16-bit value, push the logical right shift.
    Sr16 = 0x04b,
    /// Pop an 8-bit count then a 32-bit value, push the logical right shift.
    Sr32 = 0x04c,
    /// Pop an 8-bit count then an 8-bit value, push the left shift.
    Sl8 = 0x04d,
    /// Pop an 8-bit count then a 16-bit value, push the left shift.
    Sl16 = 0x04e,
    /// Pop an 8-bit count then a 32-bit value, push the left shift.
    Sl32 = 0x04f,
    /// Pop an 8-bit count then an 8-bit value, push the arithmetic right shift.
    Ssr8 = 0x050,
    /// Pop an 8-bit count then a 16-bit value, push the arithmetic right shift.
    Ssr16 = 0x051,
    /// Pop an 8-bit count then a 32-bit value, push the arithmetic right shift.
    Ssr32 = 0x052,

    // Bitwise
    /// Pop two 8-bit values, push bitwise AND.
    And8 = 0x053,
    /// Pop two 16-bit values, push bitwise AND.
    And16 = 0x054,
    /// Pop two 32-bit values, push bitwise AND.
    And32 = 0x055,
    /// Pop two 8-bit values, push bitwise OR.
    Or8 = 0x056,
    /// Pop two 16-bit values, push bitwise OR.
    Or16 = 0x057,
    /// Pop two 32-bit values, push bitwise OR.
    Or32 = 0x058,
    /// Pop an 8-bit value, push its complement.
    Not8 = 0x059,
    /// Pop a 16-bit value, push its complement.
    Not16 = 0x05a,
    /// Pop a 32-bit value, push its complement.
    Not32 = 0x05b,
    /// Pop two 8-bit values, push bitwise NOR.
    Nor8 = 0x05c,
    /// Pop two 16-bit values, push bitwise NOR.
    Nor16 = 0x05d,
    /// Pop two 32-bit values, push bitwise NOR.
    Nor32 = 0x05e,
    /// Pop two 8-bit values, push bitwise NAND.
    Nand8 = 0x05f,
    /// Pop two 16-bit values, push bitwise NAND.
    Nand16 = 0x060,
    /// Pop two 32-bit values, push bitwise NAND.
    Nand32 = 0x061,
    /// Pop two 8-bit values, push bitwise XOR.
    Xor8 = 0x062,
    /// Pop two 16-bit values, push bitwise XOR.
    Xor16 = 0x063,
    /// Pop two 32-bit values, push bitwise XOR.
    Xor32 = 0x064,
    /// Pop an 8-bit value, push its negation.
    Neg8 = 0x065,
    /// Pop a 16-bit value, push its negation.
    Neg16 = 0x066,
    /// Pop a 32-bit value, push its negation.
    Neg32 = 0x067,

    // Casts
    /// Width cast; reserved.
    C8T16 = 0x0fd,
    /// Width cast; reserved.
    C8T32 = 0x0fe,
    /// Width cast; reserved.
    C16T8 = 0x0ff,
    /// Width cast; reserved.
    C16T32 = 0x100,
    /// Width cast; reserved.
    C32T8 = 0x101,
    /// Width cast; reserved.
    C32T16 = 0x102,
    /// Width cast; reserved.
    C8UT16U = 0x103,
    /// Width cast; reserved.
    C8UT32U = 0x104,
    /// Width cast; reserved.
    C16UT8U = 0x105,
    /// Width cast; reserved.
    C16UT32U = 0x106,
    /// Width cast; reserved.
    C32UT8U = 0x107,
    /// Width cast; reserved.
    C32UT16U = 0x108,
    /// Width cast; reserved.
    CFT32 = 0x109,
    /// Width cast; reserved.
    C32TF = 0x10a,

    // Jumps
    /// Pop a 32-bit address and jump to it.
    Jmp = 0x110,
    /// Pop a 32-bit address, jump if the zero flag is set.
    JmpZ = 0x111,
    /// Pop a 32-bit address, jump if the zero flag is clear.
    JmpNZ = 0x112,
    /// Pop a 32-bit address, jump if the negative flag is set.
    JmpN = 0x113,
    /// Pop a 32-bit address, jump if the negative flag is clear.
    JmpNN = 0x114,

    // Branches
    /// Add the inline signed 16-bit offset to the program counter.
    Br = 0x118,
    /// Branch by the inline offset if the zero flag is set.
    BrZ = 0x119,
    /// Branch by the inline offset if the zero flag is clear.
    BrNZ = 0x11a,
    /// Branch by the inline offset if the negative flag is set.
    BrN = 0x11b,
    /// Branch by the inline offset if the negative flag is clear.
    BrNN = 0x11c,

    // Subroutines
    /// Pop a 32-bit target, push the return address onto the destination, jump.
    Call = 0x120,
    /// Pop a 32-bit return address and jump to it.
    Ret = 0x121,

    // Termination
    /// Halt.
    End = 0x128,
    /// Halt if the zero flag is set.
    EndZ = 0x129,
    /// Halt if the negative flag is set.
    EndN = 0x12a,

    // Display
    /// Display operation; reserved for the display subsystem.
    Clr = 0x139,
    /// Display operation; reserved for the display subsystem.
    Oled = 0x13a,
    /// Display operation; reserved for the display subsystem.
    GetPix = 0x13b,
    /// Display operation; reserved for the display subsystem.
    Fill = 0x13c,
    /// Display operation; reserved for the display subsystem.
    Font = 0x13e,
    /// Display operation; reserved for the display subsystem.
    Print = 0x13f,
    /// Display operation; reserved for the display subsystem.
    Color = 0x140,
    /// Display operation; reserved for the display subsystem.
    Point = 0x141,
    /// Display operation; reserved for the display subsystem.
    HLine = 0x142,
    /// Display operation; reserved for the display subsystem.
    VLine = 0x143,
    /// Display operation; reserved for the display subsystem.
    Line = 0x144,
    /// Display operation; reserved for the display subsystem.
    Rect = 0x145,
    /// Display operation; reserved for the display subsystem.
    LRect = 0x146,
    /// Display operation; reserved for the display subsystem.
    Elips = 0x147,
    /// Display operation; reserved for the display subsystem.
    LElips = 0x148,
    /// Display operation; reserved for the display subsystem.
    Circl = 0x149,
    /// Display operation; reserved for the display subsystem.
    LCircl = 0x14a,
    /// Display operation; reserved for the display subsystem.
    Sprt = 0x14b,
    /// Display operation; reserved for the display subsystem.
    Poly = 0x14c,
    /// Display operation; reserved for the display subsystem.
    Bitm = 0x14d,
    /// Display operation; reserved for the display subsystem.
    SwBuff = 0x14e,
    /// Display operation; reserved for the display subsystem.
    GMode = 0x14f,
    /// Display operation; reserved for the display subsystem.
    Mirror = 0x150,

    // Constants
    /// Constant push shorthand; reserved.
    Const8Neg1 = 0x159,
    /// Constant push shorthand; reserved.
    Const8Zero = 0x15a,
    /// Constant push shorthand; reserved.
    Const8One = 0x15b,
    /// Constant push shorthand; reserved.
    Const8Two = 0x15c,
    /// Constant push shorthand; reserved.
    Const16Neg1 = 0x15d,
    /// Constant push shorthand; reserved.
    Const16Zero = 0x15e,
    /// Constant push shorthand; reserved.
    Const16One = 0x15f,
    /// Constant push shorthand; reserved.
    Const16Two = 0x160,
    /// Constant push shorthand; reserved.
    Const32Neg1 = 0x161,
    /// Constant push shorthand; reserved.
    Const32Zero = 0x162,
    /// Constant push shorthand; reserved.
    Const32One = 0x163,
    /// Constant push shorthand; reserved.
    Const32Two = 0x164,
    /// Constant push shorthand; reserved.
    ConstFNeg1 = 0x165,
    /// Constant push shorthand; reserved.
    ConstFZero = 0x166,
    /// Constant push shorthand; reserved.
    ConstFOne = 0x167,
    /// Constant push shorthand; reserved.
    ConstFTwo = 0x168,

    // Peripherals
    /// Peripheral operation; reserved for the peripheral subsystem.
    ProcessorId = 0x1a1,
    /// Peripheral operation; reserved for the peripheral subsystem.
    WifiId = 0x1a2,
    /// Peripheral operation; reserved for the peripheral subsystem.
    Btn = 0x1a6,
    /// Peripheral operation; reserved for the peripheral subsystem.
    Standby = 0x1aa,
    /// Peripheral operation; reserved for the peripheral subsystem.
    PowerOff = 0x1ab,
    /// Peripheral operation; reserved for the peripheral subsystem.
    Doom = 0x29a,
    /// Peripheral operation; reserved for the peripheral subsystem.
    Rick = 0x539,
}

/// All opcodes in the table, in numeric order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 161] = [
    Opcode::Nop,
    Opcode::Sleep,
    Opcode::Let8,
    Opcode::Let16,
    Opcode::Let32,
    Opcode::LetA,
    Opcode::DbgS,
    Opcode::Dbg8,
    Opcode::Dbg16,
    Opcode::Dbg32,
    Opcode::Cpy8,
    Opcode::Cpy16,
    Opcode::Cpy32,
    Opcode::CpyA,
    Opcode::Mov8,
    Opcode::Mov16,
    Opcode::Mov32,
    Opcode::MovA,
    Opcode::Swp8,
    Opcode::Swp16,
    Opcode::Swp32,
    Opcode::SwpA,
    Opcode::PeekD8,
    Opcode::PeekD16,
    Opcode::PeekD32,
    Opcode::Sptr,
    Opcode::Del8,
    Opcode::Del16,
    Opcode::Del32,
    Opcode::Mmcp,
    Opcode::Add8,
    Opcode::Add16,
    Opcode::Add32,
    Opcode::AddF,
    Opcode::Sub8,
    Opcode::Sub16,
    Opcode::Sub32,
    Opcode::SubF,
    Opcode::Mul8,
    Opcode::Mul16,
    Opcode::Mul32,
    Opcode::MulF,
    Opcode::Div8,
    Opcode::Div16,
    Opcode::Div32,
    Opcode::DivF,
    Opcode::DivU8,
    Opcode::DivU16,
    Opcode::DivU32,
    Opcode::Mod8,
    Opcode::Mod16,
    Opcode::Mod32,
    Opcode::ModF,
    Opcode::ModU8,
    Opcode::ModU16,
    Opcode::ModU32,
    Opcode::Sr8,
    Opcode::Sr16,
    Opcode::Sr32,
    Opcode::Sl8,
    Opcode::Sl16,
    Opcode::Sl32,
    Opcode::Ssr8,
    Opcode::Ssr16,
    Opcode::Ssr32,
    Opcode::And8,
    Opcode::And16,
    Opcode::And32,
    Opcode::Or8,
    Opcode::Or16,
    Opcode::Or32,
    Opcode::Not8,
    Opcode::Not16,
    Opcode::Not32,
    Opcode::Nor8,
    Opcode::Nor16,
    Opcode::Nor32,
    Opcode::Nand8,
    Opcode::Nand16,
    Opcode::Nand32,
    Opcode::Xor8,
    Opcode::Xor16,
    Opcode::Xor32,
    Opcode::Neg8,
    Opcode::Neg16,
    Opcode::Neg32,
    Opcode::C8T16,
    Opcode::C8T32,
    Opcode::C16T8,
    Opcode::C16T32,
    Opcode::C32T8,
    Opcode::C32T16,
    Opcode::C8UT16U,
    Opcode::C8UT32U,
    Opcode::C16UT8U,
    Opcode::C16UT32U,
    Opcode::C32UT8U,
    Opcode::C32UT16U,
    Opcode::CFT32,
    Opcode::C32TF,
    Opcode::Jmp,
    Opcode::JmpZ,
    Opcode::JmpNZ,
    Opcode::JmpN,
    Opcode::JmpNN,
    Opcode::Br,
    Opcode::BrZ,
    Opcode::BrNZ,
    Opcode::BrN,
    Opcode::BrNN,
    Opcode::Call,
    Opcode::Ret,
    Opcode::End,
    Opcode::EndZ,
    Opcode::EndN,
    Opcode::Clr,
    Opcode::Oled,
    Opcode::GetPix,
    Opcode::Fill,
    Opcode::Font,
    Opcode::Print,
    Opcode::Color,
    Opcode::Point,
    Opcode::HLine,
    Opcode::VLine,
    Opcode::Line,
    Opcode::Rect,
    Opcode::LRect,
    Opcode::Elips,
    Opcode::LElips,
    Opcode::Circl,
    Opcode::LCircl,
    Opcode::Sprt,
    Opcode::Poly,
    Opcode::Bitm,
    Opcode::SwBuff,
    Opcode::GMode,
    Opcode::Mirror,
    Opcode::Const8Neg1,
    Opcode::Const8Zero,
    Opcode::Const8One,
    Opcode::Const8Two,
    Opcode::Const16Neg1,
    Opcode::Const16Zero,
    Opcode::Const16One,
    Opcode::Const16Two,
    Opcode::Const32Neg1,
    Opcode::Const32Zero,
    Opcode::Const32One,
    Opcode::Const32Two,
    Opcode::ConstFNeg1,
    Opcode::ConstFZero,
    Opcode::ConstFOne,
    Opcode::ConstFTwo,
    Opcode::ProcessorId,
    Opcode::WifiId,
    Opcode::Btn,
    Opcode::Standby,
    Opcode::PowerOff,
    Opcode::Doom,
    Opcode::Rick,
];

impl TryFrom<u16> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Control
            0x000 => Ok(Opcode::Nop),
            0x002 => Ok(Opcode::Sleep),
            // Literals
            0x004 => Ok(Opcode::Let8),
            0x005 => Ok(Opcode::Let16),
            0x006 => Ok(Opcode::Let32),
            0x007 => Ok(Opcode::LetA),
            // Debug output
            0x008 => Ok(Opcode::DbgS),
            0x009 => Ok(Opcode::Dbg8),
            0x00a => Ok(Opcode::Dbg16),
            0x00b => Ok(Opcode::Dbg32),
            // Data movement
            0x00d => Ok(Opcode::Cpy8),
            0x00e => Ok(Opcode::Cpy16),
            0x00f => Ok(Opcode::Cpy32),
            0x010 => Ok(Opcode::CpyA),
            0x011 => Ok(Opcode::Mov8),
            0x012 => Ok(Opcode::Mov16),
            0x013 => Ok(Opcode::Mov32),
            0x014 => Ok(Opcode::MovA),
            0x015 => Ok(Opcode::Swp8),
            0x016 => Ok(Opcode::Swp16),
            0x017 => Ok(Opcode::Swp32),
            0x018 => Ok(Opcode::SwpA),
            0x019 => Ok(Opcode::PeekD8),
            0x01a => Ok(Opcode::PeekD16),
            0x01b => Ok(Opcode::PeekD32),
            0x01c => Ok(Opcode::Sptr),
            0x01d => Ok(Opcode::Del8),
            0x01e => Ok(Opcode::Del16),
            0x01f => Ok(Opcode::Del32),
            0x02d => Ok(Opcode::Mmcp),
            // Arithmetic
            0x030 => Ok(Opcode::Add8),
            0x031 => Ok(Opcode::Add16),
            0x032 => Ok(Opcode::Add32),
            0x033 => Ok(Opcode::AddF),
            0x034 => Ok(Opcode::Sub8),
            0x035 => Ok(Opcode::Sub16),
            0x036 => Ok(Opcode::Sub32),
            0x037 => Ok(Opcode::SubF),
            0x038 => Ok(Opcode::Mul8),
            0x039 => Ok(Opcode::Mul16),
            0x03a => Ok(Opcode::Mul32),
            0x03b => Ok(Opcode::MulF),
            0x03c => Ok(Opcode::Div8),
            0x03d => Ok(Opcode::Div16),
            0x03e => Ok(Opcode::Div32),
            0x03f => Ok(Opcode::DivF),
            0x040 => Ok(Opcode::DivU8),
            0x041 => Ok(Opcode::DivU16),
            0x042 => Ok(Opcode::DivU32),
            0x043 => Ok(Opcode::Mod8),
            0x044 => Ok(Opcode::Mod16),
            0x045 => Ok(Opcode::Mod32),
            0x046 => Ok(Opcode::ModF),
            0x047 => Ok(Opcode::ModU8),
            0x048 => Ok(Opcode::ModU16),
            0x049 => Ok(Opcode::ModU32),
            // Shifts
            0x04a => Ok(Opcode::Sr8),
            0x04b => Ok(Opcode::Sr16),
            0x04c => Ok(Opcode::Sr32),
            0x04d => Ok(Opcode::Sl8),
            0x04e => Ok(Opcode::Sl16),
            0x04f => Ok(Opcode::Sl32),
            0x050 => Ok(Opcode::Ssr8),
            0x051 => Ok(Opcode::Ssr16),
            0x052 => Ok(Opcode::Ssr32),
            // Bitwise
            0x053 => Ok(Opcode::And8),
            0x054 => Ok(Opcode::And16),
            0x055 => Ok(Opcode::And32),
            0x056 => Ok(Opcode::Or8),
            0x057 => Ok(Opcode::Or16),
            0x058 => Ok(Opcode::Or32),
            0x059 => Ok(Opcode::Not8),
            0x05a => Ok(Opcode::Not16),
            0x05b => Ok(Opcode::Not32),
            0x05c => Ok(Opcode::Nor8),
            0x05d => Ok(Opcode::Nor16),
            0x05e => Ok(Opcode::Nor32),
            0x05f => Ok(Opcode::Nand8),
            0x060 => Ok(Opcode::Nand16),
            0x061 => Ok(Opcode::Nand32),
            0x062 => Ok(Opcode::Xor8),
            0x063 => Ok(Opcode::Xor16),
            0x064 => Ok(Opcode::Xor32),
            0x065 => Ok(Opcode::Neg8),
            0x066 => Ok(Opcode::Neg16),
            0x067 => Ok(Opcode::Neg32),
            // Casts
            0x0fd => Ok(Opcode::C8T16),
            0x0fe => Ok(Opcode::C8T32),
            0x0ff => Ok(Opcode::C16T8),
            0x100 => Ok(Opcode::C16T32),
            0x101 => Ok(Opcode::C32T8),
            0x102 => Ok(Opcode::C32T16),
            0x103 => Ok(Opcode::C8UT16U),
            0x104 => Ok(Opcode::C8UT32U),
            0x105 => Ok(Opcode::C16UT8U),
            0x106 => Ok(Opcode::C16UT32U),
            0x107 => Ok(Opcode::C32UT8U),
            0x108 => Ok(Opcode::C32UT16U),
            0x109 => Ok(Opcode::CFT32),
            0x10a => Ok(Opcode::C32TF),
            // Jumps
            0x110 => Ok(Opcode::Jmp),
            0x111 => Ok(Opcode::JmpZ),
            0x112 => Ok(Opcode::JmpNZ),
            0x113 => Ok(Opcode::JmpN),
            0x114 => Ok(Opcode::JmpNN),
            // Branches
            0x118 => Ok(Opcode::Br),
            0x119 => Ok(Opcode::BrZ),
            0x11a => Ok(Opcode::BrNZ),
            0x11b => Ok(Opcode::BrN),
            0x11c => Ok(Opcode::BrNN),
            // Subroutines
            0x120 => Ok(Opcode::Call),
            0x121 => Ok(Opcode::Ret),
            // Termination
            0x128 => Ok(Opcode::End),
            0x129 => Ok(Opcode::EndZ),
            0x12a => Ok(Opcode::EndN),
            // Display
            0x139 => Ok(Opcode::Clr),
            0x13a => Ok(Opcode::Oled),
            0x13b => Ok(Opcode::GetPix),
            0x13c => Ok(Opcode::Fill),
            0x13e => Ok(Opcode::Font),
            0x13f => Ok(Opcode::Print),
            0x140 => Ok(Opcode::Color),
            0x141 => Ok(Opcode::Point),
            0x142 => Ok(Opcode::HLine),
            0x143 => Ok(Opcode::VLine),
            0x144 => Ok(Opcode::Line),
            0x145 => Ok(Opcode::Rect),
            0x146 => Ok(Opcode::LRect),
            0x147 => Ok(Opcode::Elips),
            0x148 => Ok(Opcode::LElips),
            0x149 => Ok(Opcode::Circl),
            0x14a => Ok(Opcode::LCircl),
            0x14b => Ok(Opcode::Sprt),
            0x14c => Ok(Opcode::Poly),
            0x14d => Ok(Opcode::Bitm),
            0x14e => Ok(Opcode::SwBuff),
            0x14f => Ok(Opcode::GMode),
            0x150 => Ok(Opcode::Mirror),
            // Constants
            0x159 => Ok(Opcode::Const8Neg1),
            0x15a => Ok(Opcode::Const8Zero),
            0x15b => Ok(Opcode::Const8One),
            0x15c => Ok(Opcode::Const8Two),
            0x15d => Ok(Opcode::Const16Neg1),
            0x15e => Ok(Opcode::Const16Zero),
            0x15f => Ok(Opcode::Const16One),
            0x160 => Ok(Opcode::Const16Two),
            0x161 => Ok(Opcode::Const32Neg1),
            0x162 => Ok(Opcode::Const32Zero),
            0x163 => Ok(Opcode::Const32One),
            0x164 => Ok(Opcode::Const32Two),
            0x165 => Ok(Opcode::ConstFNeg1),
            0x166 => Ok(Opcode::ConstFZero),
            0x167 => Ok(Opcode::ConstFOne),
            0x168 => Ok(Opcode::ConstFTwo),
            // Peripherals
            0x1a1 => Ok(Opcode::ProcessorId),
            0x1a2 => Ok(Opcode::WifiId),
            0x1a6 => Ok(Opcode::Btn),
            0x1aa => Ok(Opcode::Standby),
            0x1ab => Ok(Opcode::PowerOff),
            0x29a => Ok(Opcode::Doom),
            0x539 => Ok(Opcode::Rick),
            0x1000.. => Err(DecodeError::CodeOutOfRange(value)),
            _ => Err(DecodeError::UnknownOpcode(value)),
        }
    }
}

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::Sleep => "SLEEP",
            Opcode::Let8 => "LET8",
            Opcode::Let16 => "LET16",
            Opcode::Let32 => "LET32",
            Opcode::LetA => "LETA",
            Opcode::DbgS => "DBGS",
            Opcode::Dbg8 => "DBG8",
            Opcode::Dbg16 => "DBG16",
            Opcode::Dbg32 => "DBG32",
            Opcode::Cpy8 => "CPY8",
            Opcode::Cpy16 => "CPY16",
            Opcode::Cpy32 => "CPY32",
            Opcode::CpyA => "CPYA",
            Opcode::Mov8 => "MOV8",
            Opcode::Mov16 => "MOV16",
            Opcode::Mov32 => "MOV32",
            Opcode::MovA => "MOVA",
            Opcode::Swp8 => "SWP8",
            Opcode::Swp16 => "SWP16",
            Opcode::Swp32 => "SWP32",
            Opcode::SwpA => "SWPA",
            Opcode::PeekD8 => "PEEKD8",
            Opcode::PeekD16 => "PEEKD16",
            Opcode::PeekD32 => "PEEKD32",
            Opcode::Sptr => "SPTR",
            Opcode::Del8 => "DEL8",
            Opcode::Del16 => "DEL16",
            Opcode::Del32 => "DEL32",
            Opcode::Mmcp => "MMCP",
            Opcode::Add8 => "ADD8",
            Opcode::Add16 => "ADD16",
            Opcode::Add32 => "ADD32",
            Opcode::AddF => "ADDF",
            Opcode::Sub8 => "SUB8",
            Opcode::Sub16 => "SUB16",
            Opcode::Sub32 => "SUB32",
            Opcode::SubF => "SUBF",
            Opcode::Mul8 => "MUL8",
            Opcode::Mul16 => "MUL16",
            Opcode::Mul32 => "MUL32",
            Opcode::MulF => "MULF",
            Opcode::Div8 => "DIV8",
            Opcode::Div16 => "DIV16",
            Opcode::Div32 => "DIV32",
            Opcode::DivF => "DIVF",
            Opcode::DivU8 => "DIVU8",
            Opcode::DivU16 => "DIVU16",
            Opcode::DivU32 => "DIVU32",
            Opcode::Mod8 => "MOD8",
            Opcode::Mod16 => "MOD16",
            Opcode::Mod32 => "MOD32",
            Opcode::ModF => "MODF",
            Opcode::ModU8 => "MODU8",
            Opcode::ModU16 => "MODU16",
            Opcode::ModU32 => "MODU32",
            Opcode::Sr8 => "SR8",
            Opcode::Sr16 => "SR16",
            Opcode::Sr32 => "SR32",
            Opcode::Sl8 => "SL8",
            Opcode::Sl16 => "SL16",
            Opcode::Sl32 => "SL32",
            Opcode::Ssr8 => "SSR8",
            Opcode::Ssr16 => "SSR16",
            Opcode::Ssr32 => "SSR32",
            Opcode::And8 => "AND8",
            Opcode::And16 => "AND16",
            Opcode::And32 => "AND32",
            Opcode::Or8 => "OR8",
            Opcode::Or16 => "OR16",
            Opcode::Or32 => "OR32",
            Opcode::Not8 => "NOT8",
            Opcode::Not16 => "NOT16",
            Opcode::Not32 => "NOT32",
            Opcode::Nor8 => "NOR8",
            Opcode::Nor16 => "NOR16",
            Opcode::Nor32 => "NOR32",
            Opcode::Nand8 => "NAND8",
            Opcode::Nand16 => "NAND16",
            Opcode::Nand32 => "NAND32",
            Opcode::Xor8 => "XOR8",
            Opcode::Xor16 => "XOR16",
            Opcode::Xor32 => "XOR32",
            Opcode::Neg8 => "NEG8",
            Opcode::Neg16 => "NEG16",
            Opcode::Neg32 => "NEG32",
            Opcode::C8T16 => "C8T16",
            Opcode::C8T32 => "C8T32",
            Opcode::C16T8 => "C16T8",
            Opcode::C16T32 => "C16T32",
            Opcode::C32T8 => "C32T8",
            Opcode::C32T16 => "C32T16",
            Opcode::C8UT16U => "C8UT16U",
            Opcode::C8UT32U => "C8UT32U",
            Opcode::C16UT8U => "C16UT8U",
            Opcode::C16UT32U => "C16UT32U",
            Opcode::C32UT8U => "C32UT8U",
            Opcode::C32UT16U => "C32UT16U",
            Opcode::CFT32 => "CFT32",
            Opcode::C32TF => "C32TF",
            Opcode::Jmp => "JMP",
            Opcode::JmpZ => "JMPZ",
            Opcode::JmpNZ => "JMPNZ",
            Opcode::JmpN => "JMPN",
            Opcode::JmpNN => "JMPNN",
            Opcode::Br => "BR",
            Opcode::BrZ => "BRZ",
            Opcode::BrNZ => "BRNZ",
            Opcode::BrN => "BRN",
            Opcode::BrNN => "BRNN",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::End => "END",
            Opcode::EndZ => "ENDZ",
            Opcode::EndN => "ENDN",
            Opcode::Clr => "CLR",
            Opcode::Oled => "OLED",
            Opcode::GetPix => "GETPIX",
            Opcode::Fill => "FILL",
            Opcode::Font => "FONT",
            Opcode::Print => "PRINT",
            Opcode::Color => "COLOR",
            Opcode::Point => "POINT",
            Opcode::HLine => "HLINE",
            Opcode::VLine => "VLINE",
            Opcode::Line => "LINE",
            Opcode::Rect => "RECT",
            Opcode::LRect => "LRECT",
            Opcode::Elips => "ELIPS",
            Opcode::LElips => "LELIPS",
            Opcode::Circl => "CIRCL",
            Opcode::LCircl => "LCIRCL",
            Opcode::Sprt => "SPRT",
            Opcode::Poly => "POLY",
            Opcode::Bitm => "BITM",
            Opcode::SwBuff => "SWBUFF",
            Opcode::GMode => "GMODE",
            Opcode::Mirror => "MIRROR",
            Opcode::Const8Neg1 => "CONST8_M1",
            Opcode::Const8Zero => "CONST8_0",
            Opcode::Const8One => "CONST8_1",
            Opcode::Const8Two => "CONST8_2",
            Opcode::Const16Neg1 => "CONST16_M1",
            Opcode::Const16Zero => "CONST16_0",
            Opcode::Const16One => "CONST16_1",
            Opcode::Const16Two => "CONST16_2",
            Opcode::Const32Neg1 => "CONST32_M1",
            Opcode::Const32Zero => "CONST32_0",
            Opcode::Const32One => "CONST32_1",
            Opcode::Const32Two => "CONST32_2",
            Opcode::ConstFNeg1 => "CONSTF_M1",
            Opcode::ConstFZero => "CONSTF_0",
            Opcode::ConstFOne => "CONSTF_1",
            Opcode::ConstFTwo => "CONSTF_2",
            Opcode::ProcessorId => "PROCESSOR_ID",
            Opcode::WifiId => "WIFI_ID",
            Opcode::Btn => "BTN",
            Opcode::Standby => "STANDBY",
            Opcode::PowerOff => "POWEROFF",
            Opcode::Doom => "DOOM",
            Opcode::Rick => "RICK",
        }
    }

    /// The 12-bit numeric encoding of this opcode.
    pub fn code(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn all_opcodes_count() {
        assert_eq!(ALL_OPCODES.len(), 161);
    }

    #[test]
    fn roundtrip_all_valid_opcodes() {
        for &opcode in &ALL_OPCODES {
            let code = opcode.code();
            let decoded = Opcode::try_from(code).unwrap();
            assert_eq!(opcode, decoded, "roundtrip failed for {opcode:?} ({code:#05x})");
        }
    }

    #[test]
    fn all_opcodes_fit_in_twelve_bits() {
        for &opcode in &ALL_OPCODES {
            assert!(opcode.code() < 0x1000, "{opcode:?} does not fit");
        }
    }

    #[test]
    fn table_is_strictly_ascending() {
        for pair in ALL_OPCODES.windows(2) {
            assert!(pair[0].code() < pair[1].code(), "{:?} / {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn binary_compatible_values() {
        assert_eq!(Opcode::Let8.code(), 0x004);
        assert_eq!(Opcode::Add8.code(), 0x030);
        assert_eq!(Opcode::Neg32.code(), 0x067);
        assert_eq!(Opcode::Jmp.code(), 0x110);
        assert_eq!(Opcode::BrZ.code(), 0x119);
        assert_eq!(Opcode::End.code(), 0x128);
        assert_eq!(Opcode::PowerOff.code(), 0x1ab);
        assert_eq!(Opcode::Rick.code(), 0x539);
    }

    #[test]
    fn gaps_are_unknown() {
        for code in [0x001u16, 0x003, 0x00c, 0x020, 0x02c, 0x068, 0x0fc, 0x10b, 0x12b, 0x13d, 0xfff] {
            assert_eq!(Opcode::try_from(code), Err(DecodeError::UnknownOpcode(code)));
        }
    }

    #[test]
    fn wide_values_are_out_of_range() {
        assert_eq!(
            Opcode::try_from(0x1000),
            Err(DecodeError::CodeOutOfRange(0x1000))
        );
        assert_eq!(
            Opcode::try_from(u16::MAX),
            Err(DecodeError::CodeOutOfRange(u16::MAX))
        );
    }

    #[test]
    fn mnemonics_are_uppercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for &opcode in &ALL_OPCODES {
            let m = opcode.mnemonic();
            assert!(!m.is_empty(), "empty mnemonic for {opcode:?}");
            assert_eq!(m, m.to_uppercase(), "mnemonic should be uppercase: {m}");
            assert!(seen.insert(m), "duplicate mnemonic {m}");
        }
    }
}
