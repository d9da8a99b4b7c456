use thiserror::Error;

/// Fatal failures surfaced by the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The fetched byte has no entry in the decode table.
    ///
    /// `pc` is the address the opcode was fetched from. The emulator cannot
    /// continue past this point; the host may [`reset`](crate::Cpu::reset)
    /// and try again.
    #[error("unknown opcode {opcode:#04X} at {pc:#06X}")]
    UnknownOpcode { opcode: u8, pc: u16 },
}
