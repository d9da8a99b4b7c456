use super::{AddressingMode, Instruction};

/// A decode table entry: what to execute, how to find its operand, and what
/// it costs.
///
/// Cycle counts follow the official 6502 datasheet. Entries with
/// `penalizes_page_cross` set pay one extra cycle when their addressing mode
/// reports a page crossing; stores and read-modify-write instructions never
/// do, regardless of what the mode reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuInstruction {
    pub(crate) instruction: Instruction,
    pub(crate) operand: Operand,
    pub(crate) base_cycles: u8,
    pub(crate) penalizes_page_cross: bool,
}

/// How an instruction's operand is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The instruction operates on registers alone. Accumulator-operand
    /// shifts (`ASL A`, `LSR A`) fall in this bucket too.
    Implied,
    /// The instruction operates on a memory location resolved by the given
    /// addressing mode.
    Addressed(AddressingMode),
}

impl CpuInstruction {
    const fn addressed(
        instruction: Instruction,
        addr_mode: AddressingMode,
        base_cycles: u8,
    ) -> Self {
        Self {
            instruction,
            operand: Operand::Addressed(addr_mode),
            base_cycles,
            penalizes_page_cross: false,
        }
    }

    const fn penalized(
        instruction: Instruction,
        addr_mode: AddressingMode,
        base_cycles: u8,
    ) -> Self {
        Self {
            instruction,
            operand: Operand::Addressed(addr_mode),
            base_cycles,
            penalizes_page_cross: true,
        }
    }

    const fn implied(instruction: Instruction, base_cycles: u8) -> Self {
        Self {
            instruction,
            operand: Operand::Implied,
            base_cycles,
            penalizes_page_cross: false,
        }
    }

    /// Looks up an opcode byte.
    ///
    /// Returns `None` for every byte outside the implemented subset,
    /// including the undocumented opcodes real silicon would execute.
    pub fn decode(opcode: u8) -> Option<Self> {
        let instruction = match opcode {
            0xA9 => Self::addressed(Instruction::Lda, AddressingMode::Immediate, 2),
            0xA5 => Self::addressed(Instruction::Lda, AddressingMode::ZeroPage, 3),
            0xB5 => Self::addressed(Instruction::Lda, AddressingMode::ZeroPageX, 4),
            0xAD => Self::addressed(Instruction::Lda, AddressingMode::Absolute, 4),
            0xBD => Self::penalized(Instruction::Lda, AddressingMode::AbsoluteX, 4),
            0xB9 => Self::penalized(Instruction::Lda, AddressingMode::AbsoluteY, 4),
            0xA1 => Self::addressed(Instruction::Lda, AddressingMode::IndexedIndirect, 6),
            0xB1 => Self::penalized(Instruction::Lda, AddressingMode::IndirectIndexed, 5),

            0xA2 => Self::addressed(Instruction::Ldx, AddressingMode::Immediate, 2),
            0xA6 => Self::addressed(Instruction::Ldx, AddressingMode::ZeroPage, 3),
            0xB6 => Self::addressed(Instruction::Ldx, AddressingMode::ZeroPageY, 4),
            0xAE => Self::addressed(Instruction::Ldx, AddressingMode::Absolute, 4),
            0xBE => Self::penalized(Instruction::Ldx, AddressingMode::AbsoluteY, 4),

            0xA0 => Self::addressed(Instruction::Ldy, AddressingMode::Immediate, 2),
            0xA4 => Self::addressed(Instruction::Ldy, AddressingMode::ZeroPage, 3),
            0xB4 => Self::addressed(Instruction::Ldy, AddressingMode::ZeroPageX, 4),
            0xAC => Self::addressed(Instruction::Ldy, AddressingMode::Absolute, 4),
            0xBC => Self::penalized(Instruction::Ldy, AddressingMode::AbsoluteX, 4),

            0x85 => Self::addressed(Instruction::Sta, AddressingMode::ZeroPage, 3),
            0x95 => Self::addressed(Instruction::Sta, AddressingMode::ZeroPageX, 4),
            0x8D => Self::addressed(Instruction::Sta, AddressingMode::Absolute, 4),
            0x9D => Self::addressed(Instruction::Sta, AddressingMode::AbsoluteX, 5),
            0x99 => Self::addressed(Instruction::Sta, AddressingMode::AbsoluteY, 5),
            0x81 => Self::addressed(Instruction::Sta, AddressingMode::IndexedIndirect, 6),
            0x91 => Self::addressed(Instruction::Sta, AddressingMode::IndirectIndexed, 6),

            0x86 => Self::addressed(Instruction::Stx, AddressingMode::ZeroPage, 3),
            0x96 => Self::addressed(Instruction::Stx, AddressingMode::ZeroPageY, 4),
            0x8E => Self::addressed(Instruction::Stx, AddressingMode::Absolute, 4),

            0x84 => Self::addressed(Instruction::Sty, AddressingMode::ZeroPage, 3),
            0x94 => Self::addressed(Instruction::Sty, AddressingMode::ZeroPageX, 4),
            0x8C => Self::addressed(Instruction::Sty, AddressingMode::Absolute, 4),

            0xAA => Self::implied(Instruction::Tax, 2),
            0xA8 => Self::implied(Instruction::Tay, 2),
            0x8A => Self::implied(Instruction::Txa, 2),
            0x98 => Self::implied(Instruction::Tya, 2),
            0xBA => Self::implied(Instruction::Tsx, 2),
            0x9A => Self::implied(Instruction::Txs, 2),

            0x48 => Self::implied(Instruction::Pha, 3),
            0x08 => Self::implied(Instruction::Php, 3),
            0x68 => Self::implied(Instruction::Pla, 4),
            0x28 => Self::implied(Instruction::Plp, 4),

            0x0A => Self::implied(Instruction::Asl, 2),
            0x06 => Self::addressed(Instruction::Asl, AddressingMode::ZeroPage, 5),
            0x16 => Self::addressed(Instruction::Asl, AddressingMode::ZeroPageX, 6),
            0x0E => Self::addressed(Instruction::Asl, AddressingMode::Absolute, 6),
            0x1E => Self::addressed(Instruction::Asl, AddressingMode::AbsoluteX, 7),

            0x4A => Self::implied(Instruction::Lsr, 2),
            0x46 => Self::addressed(Instruction::Lsr, AddressingMode::ZeroPage, 5),
            0x56 => Self::addressed(Instruction::Lsr, AddressingMode::ZeroPageX, 6),
            0x4E => Self::addressed(Instruction::Lsr, AddressingMode::Absolute, 6),
            0x5E => Self::addressed(Instruction::Lsr, AddressingMode::AbsoluteX, 7),

            0x18 => Self::implied(Instruction::Clc, 2),
            0x38 => Self::implied(Instruction::Sec, 2),

            _ => return None,
        };

        Some(instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_decode_with_their_modes() {
        let lda_imm = CpuInstruction::decode(0xA9).unwrap();
        assert_eq!(lda_imm.instruction, Instruction::Lda);
        assert_eq!(lda_imm.operand, Operand::Addressed(AddressingMode::Immediate));
        assert_eq!(lda_imm.base_cycles, 2);
        assert!(!lda_imm.penalizes_page_cross);

        let lda_abx = CpuInstruction::decode(0xBD).unwrap();
        assert_eq!(lda_abx.operand, Operand::Addressed(AddressingMode::AbsoluteX));
        assert_eq!(lda_abx.base_cycles, 4);
        assert!(lda_abx.penalizes_page_cross);
    }

    #[test]
    fn stores_never_pay_the_page_cross_penalty() {
        for opcode in [0x9D, 0x99, 0x91] {
            let sta = CpuInstruction::decode(opcode).unwrap();
            assert_eq!(sta.instruction, Instruction::Sta);
            assert!(!sta.penalizes_page_cross);
        }
    }

    #[test]
    fn accumulator_shifts_decode_as_implied() {
        let asl = CpuInstruction::decode(0x0A).unwrap();
        assert_eq!(asl.instruction, Instruction::Asl);
        assert_eq!(asl.operand, Operand::Implied);
        assert_eq!(asl.base_cycles, 2);

        let lsr = CpuInstruction::decode(0x4A).unwrap();
        assert_eq!(lsr.instruction, Instruction::Lsr);
        assert_eq!(lsr.operand, Operand::Implied);
    }

    #[test]
    fn undocumented_opcodes_fail_to_decode() {
        // NOP and BRK are real 6502 opcodes but sit outside the implemented
        // subset, so they must miss along with the truly illegal bytes.
        for opcode in [0x00, 0x02, 0xEA, 0xFF] {
            assert_eq!(CpuInstruction::decode(opcode), None);
        }
    }
}
