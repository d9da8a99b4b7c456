use std::fmt;

/// Instruction mnemonics the decoder knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    Pha,
    Php,
    Pla,
    Plp,
    Asl,
    Lsr,
    Clc,
    Sec,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = match self {
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Sta => "STA",
            Instruction::Stx => "STX",
            Instruction::Sty => "STY",
            Instruction::Tax => "TAX",
            Instruction::Tay => "TAY",
            Instruction::Txa => "TXA",
            Instruction::Tya => "TYA",
            Instruction::Tsx => "TSX",
            Instruction::Txs => "TXS",
            Instruction::Pha => "PHA",
            Instruction::Php => "PHP",
            Instruction::Pla => "PLA",
            Instruction::Plp => "PLP",
            Instruction::Asl => "ASL",
            Instruction::Lsr => "LSR",
            Instruction::Clc => "CLC",
            Instruction::Sec => "SEC",
        };
        f.write_str(mnemonic)
    }
}
