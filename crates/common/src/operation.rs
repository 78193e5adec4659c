//! Operation classes.
//!
//! The opcode table is wide and sparse. [`Operation`] folds it into a small
//! set of handler classes, each carrying the width or branch condition that
//! distinguishes the individual opcodes. The engine dispatches on this type
//! rather than on raw numeric codes.

use crate::opcode::Opcode;
use crate::width::Width;

/// Two-operand arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    /// Signed division, truncating toward zero.
    Div,
    /// Unsigned division.
    DivU,
    /// Signed remainder; takes the sign of the dividend.
    Mod,
    /// Unsigned remainder.
    ModU,
}

/// Shift direction and fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftOp {
    /// Logical right shift (`SR`).
    Right,
    /// Arithmetic right shift (`SSR`).
    RightSigned,
    /// Left shift (`SL`).
    Left,
}

/// Two-operand bitwise logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOp {
    And,
    Or,
    Nor,
    Nand,
    Xor,
}

/// One-operand operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Neg,
}

/// Flag test applied by conditional jumps, branches and halts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Always,
    Zero,
    NotZero,
    Negative,
    NotNegative,
}

impl Condition {
    /// Evaluate the condition against the two flags.
    pub fn holds(self, zero: bool, negative: bool) -> bool {
        match self {
            Condition::Always => true,
            Condition::Zero => zero,
            Condition::NotZero => !zero,
            Condition::Negative => negative,
            Condition::NotNegative => !negative,
        }
    }
}

/// Inline operand that follows an instruction word in the program stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineOperand {
    /// Unsigned literal of the given width.
    Literal(Width),
    /// Signed 16-bit branch offset.
    Offset,
    /// Bytes up to and including a NUL terminator.
    String,
}

/// What an opcode does, independent of its numeric encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Nop,

    /// Push an inline literal onto the destination stack.
    Let(Width),
    /// Push a copy of the source top onto the destination.
    Copy(Width),
    /// Pop the source top and push it onto the destination.
    Move(Width),
    /// Exchange the source and destination tops.
    Swap(Width),
    /// Pop a depth, copy the value at that depth onto the destination.
    PeekDeep(Width),
    /// Push the source stack pointer onto the destination.
    StackPointer,
    /// Pop and discard.
    Delete(Width),

    Arith(ArithOp, Width),
    Shift(ShiftOp, Width),
    Logic(LogicOp, Width),
    Unary(UnaryOp, Width),

    /// Pop an absolute address, jump if the condition holds.
    Jump(Condition),
    /// Read an inline offset, branch if the condition holds.
    Branch(Condition),
    Call,
    Return,
    /// Halt if the condition holds.
    End(Condition),

    /// Emit an inline string.
    DebugString,
    /// Pop a value and emit it.
    DebugValue(Width),

    /// Decoded but not executed by the core. Covers float arithmetic, casts,
    /// constant shorthands, display and peripheral opcodes, and codes that
    /// are not in the table at all.
    Reserved,
}

impl Operation {
    /// Classify a raw 12-bit code. Codes outside the table are reserved.
    pub fn from_code(code: u16) -> Self {
        Opcode::try_from(code)
            .map(Operation::from)
            .unwrap_or(Operation::Reserved)
    }

    /// The inline operand that follows this instruction's word, if any.
    pub fn inline_operand(&self) -> Option<InlineOperand> {
        match self {
            Operation::Let(w) => Some(InlineOperand::Literal(*w)),
            Operation::Branch(_) => Some(InlineOperand::Offset),
            Operation::DebugString => Some(InlineOperand::String),
            _ => None,
        }
    }

    /// Returns true if executing this operation updates the flags.
    pub fn affects_flags(&self) -> bool {
        matches!(
            self,
            Operation::Arith(..) | Operation::Shift(..) | Operation::Logic(..) | Operation::Unary(..)
        )
    }
}

impl From<Opcode> for Operation {
    fn from(opcode: Opcode) -> Self {
        use Opcode::*;
        use Width::*;

        match opcode {
            Nop => Operation::Nop,

            Let8 => Operation::Let(W8),
            Let16 => Operation::Let(W16),
            Let32 | LetA => Operation::Let(W32),

            DbgS => Operation::DebugString,
            Dbg8 => Operation::DebugValue(W8),
            Dbg16 => Operation::DebugValue(W16),
            Dbg32 => Operation::DebugValue(W32),

            Cpy8 => Operation::Copy(W8),
            Cpy16 => Operation::Copy(W16),
            Cpy32 | CpyA => Operation::Copy(W32),
            Mov8 => Operation::Move(W8),
            Mov16 => Operation::Move(W16),
            Mov32 | MovA => Operation::Move(W32),
            Swp8 => Operation::Swap(W8),
            Swp16 => Operation::Swap(W16),
            Swp32 | SwpA => Operation::Swap(W32),
            PeekD8 => Operation::PeekDeep(W8),
            PeekD16 => Operation::PeekDeep(W16),
            PeekD32 => Operation::PeekDeep(W32),
            Sptr => Operation::StackPointer,
            Del8 => Operation::Delete(W8),
            Del16 => Operation::Delete(W16),
            Del32 => Operation::Delete(W32),

            Add8 => Operation::Arith(ArithOp::Add, W8),
            Add16 => Operation::Arith(ArithOp::Add, W16),
            Add32 => Operation::Arith(ArithOp::Add, W32),
            Sub8 => Operation::Arith(ArithOp::Sub, W8),
            Sub16 => Operation::Arith(ArithOp::Sub, W16),
            Sub32 => Operation::Arith(ArithOp::Sub, W32),
            Mul8 => Operation::Arith(ArithOp::Mul, W8),
            Mul16 => Operation::Arith(ArithOp::Mul, W16),
            Mul32 => Operation::Arith(ArithOp::Mul, W32),
            Div8 => Operation::Arith(ArithOp::Div, W8),
            Div16 => Operation::Arith(ArithOp::Div, W16),
            Div32 => Operation::Arith(ArithOp::Div, W32),
            DivU8 => Operation::Arith(ArithOp::DivU, W8),
            DivU16 => Operation::Arith(ArithOp::DivU, W16),
            DivU32 => Operation::Arith(ArithOp::DivU, W32),
            Mod8 => Operation::Arith(ArithOp::Mod, W8),
            Mod16 => Operation::Arith(ArithOp::Mod, W16),
            Mod32 => Operation::Arith(ArithOp::Mod, W32),
            ModU8 => Operation::Arith(ArithOp::ModU, W8),
            ModU16 => Operation::Arith(ArithOp::ModU, W16),
            ModU32 => Operation::Arith(ArithOp::ModU, W32),

            Sr8 => Operation::Shift(ShiftOp::Right, W8),
            Sr16 => Operation::Shift(ShiftOp::Right, W16),
            Sr32 => Operation::Shift(ShiftOp::Right, W32),
            Sl8 => Operation::Shift(ShiftOp::Left, W8),
            Sl16 => Operation::Shift(ShiftOp::Left, W16),
            Sl32 => Operation::Shift(ShiftOp::Left, W32),
            Ssr8 => Operation::Shift(ShiftOp::RightSigned, W8),
            Ssr16 => Operation::Shift(ShiftOp::RightSigned, W16),
            Ssr32 => Operation::Shift(ShiftOp::RightSigned, W32),

            And8 => Operation::Logic(LogicOp::And, W8),
            And16 => Operation::Logic(LogicOp::And, W16),
            And32 => Operation::Logic(LogicOp::And, W32),
            Or8 => Operation::Logic(LogicOp::Or, W8),
            Or16 => Operation::Logic(LogicOp::Or, W16),
            Or32 => Operation::Logic(LogicOp::Or, W32),
            Nor8 => Operation::Logic(LogicOp::Nor, W8),
            Nor16 => Operation::Logic(LogicOp::Nor, W16),
            Nor32 => Operation::Logic(LogicOp::Nor, W32),
            Nand8 => Operation::Logic(LogicOp::Nand, W8),
            Nand16 => Operation::Logic(LogicOp::Nand, W16),
            Nand32 => Operation::Logic(LogicOp::Nand, W32),
            Xor8 => Operation::Logic(LogicOp::Xor, W8),
            Xor16 => Operation::Logic(LogicOp::Xor, W16),
            Xor32 => Operation::Logic(LogicOp::Xor, W32),

            Not8 => Operation::Unary(UnaryOp::Not, W8),
            Not16 => Operation::Unary(UnaryOp::Not, W16),
            Not32 => Operation::Unary(UnaryOp::Not, W32),
            Neg8 => Operation::Unary(UnaryOp::Neg, W8),
            Neg16 => Operation::Unary(UnaryOp::Neg, W16),
            Neg32 => Operation::Unary(UnaryOp::Neg, W32),

            Jmp => Operation::Jump(Condition::Always),
            JmpZ => Operation::Jump(Condition::Zero),
            JmpNZ => Operation::Jump(Condition::NotZero),
            JmpN => Operation::Jump(Condition::Negative),
            JmpNN => Operation::Jump(Condition::NotNegative),
            Br => Operation::Branch(Condition::Always),
            BrZ => Operation::Branch(Condition::Zero),
            BrNZ => Operation::Branch(Condition::NotZero),
            BrN => Operation::Branch(Condition::Negative),
            BrNN => Operation::Branch(Condition::NotNegative),
            Call => Operation::Call,
            Ret => Operation::Return,
            End => Operation::End(Condition::Always),
            EndZ => Operation::End(Condition::Zero),
            EndN => Operation::End(Condition::Negative),

            Sleep | Mmcp | AddF | SubF | MulF | DivF | ModF | C8T16 | C8T32 | C16T8 | C16T32
            | C32T8 | C32T16 | C8UT16U | C8UT32U | C16UT8U | C16UT32U | C32UT8U | C32UT16U
            | CFT32 | C32TF | Clr | Oled | GetPix | Fill | Font | Print | Color | Point | HLine
            | VLine | Line | Rect | LRect | Elips | LElips | Circl | LCircl | Sprt | Poly | Bitm
            | SwBuff | GMode | Mirror | Const8Neg1 | Const8Zero | Const8One | Const8Two
            | Const16Neg1 | Const16Zero | Const16One | Const16Two | Const32Neg1 | Const32Zero
            | Const32One | Const32Two | ConstFNeg1 | ConstFZero | ConstFOne | ConstFTwo
            | ProcessorId | WifiId | Btn | Standby | PowerOff | Doom | Rick => Operation::Reserved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::ALL_OPCODES;

    #[test]
    fn widths_follow_mnemonic_suffix() {
        for &opcode in &ALL_OPCODES {
            let m = opcode.mnemonic();
            let width = match Operation::from(opcode) {
                Operation::Let(w)
                | Operation::Copy(w)
                | Operation::Move(w)
                | Operation::Swap(w)
                | Operation::PeekDeep(w)
                | Operation::Delete(w)
                | Operation::Arith(_, w)
                | Operation::Shift(_, w)
                | Operation::Logic(_, w)
                | Operation::Unary(_, w)
                | Operation::DebugValue(w) => w,
                _ => continue,
            };
            let expected = if m.ends_with("16") {
                Width::W16
            } else if m.ends_with('8') {
                Width::W8
            } else {
                Width::W32
            };
            assert_eq!(width, expected, "{m}");
        }
    }

    #[test]
    fn nor8_is_a_real_nor() {
        assert_eq!(
            Operation::from(Opcode::Nor8),
            Operation::Logic(LogicOp::Nor, Width::W8)
        );
    }

    #[test]
    fn address_forms_are_32_bit() {
        assert_eq!(Operation::from(Opcode::LetA), Operation::Let(Width::W32));
        assert_eq!(Operation::from(Opcode::CpyA), Operation::Copy(Width::W32));
        assert_eq!(Operation::from(Opcode::MovA), Operation::Move(Width::W32));
        assert_eq!(Operation::from(Opcode::SwpA), Operation::Swap(Width::W32));
    }

    #[test]
    fn display_and_float_opcodes_are_reserved() {
        for opcode in [
            Opcode::AddF,
            Opcode::C8T16,
            Opcode::Const32One,
            Opcode::Print,
            Opcode::Sprt,
            Opcode::ProcessorId,
            Opcode::PowerOff,
            Opcode::Sleep,
        ] {
            assert_eq!(Operation::from(opcode), Operation::Reserved, "{opcode:?}");
        }
    }

    #[test]
    fn unknown_codes_are_reserved() {
        assert_eq!(Operation::from_code(0x00c), Operation::Reserved);
        assert_eq!(Operation::from_code(0xfff), Operation::Reserved);
        assert_eq!(Operation::from_code(0x030), Operation::Arith(ArithOp::Add, Width::W8));
    }

    #[test]
    fn inline_operands() {
        assert_eq!(
            Operation::from(Opcode::Let16).inline_operand(),
            Some(InlineOperand::Literal(Width::W16))
        );
        assert_eq!(
            Operation::from(Opcode::BrNN).inline_operand(),
            Some(InlineOperand::Offset)
        );
        assert_eq!(
            Operation::from(Opcode::DbgS).inline_operand(),
            Some(InlineOperand::String)
        );
        assert_eq!(Operation::from(Opcode::Jmp).inline_operand(), None);
    }

    #[test]
    fn only_alu_operations_affect_flags() {
        for &opcode in &ALL_OPCODES {
            let op = Operation::from(opcode);
            let m = opcode.mnemonic();
            let alu = [
                "ADD", "SUB", "MUL", "DIV", "MOD", "SR", "SL", "SSR", "AND", "OR", "NOT", "NOR",
                "NAND", "XOR", "NEG",
            ]
            .iter()
            .any(|p| m.starts_with(p) && m.ends_with(|c: char| c.is_ascii_digit()));
            assert_eq!(op.affects_flags(), alu, "{m}");
        }
    }

    #[test]
    fn conditions() {
        assert!(Condition::Always.holds(false, false));
        assert!(Condition::Zero.holds(true, false));
        assert!(!Condition::Zero.holds(false, true));
        assert!(Condition::NotZero.holds(false, true));
        assert!(Condition::Negative.holds(false, true));
        assert!(Condition::NotNegative.holds(true, false));
        assert!(!Condition::NotNegative.holds(false, true));
    }
}
