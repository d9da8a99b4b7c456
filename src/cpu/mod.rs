mod cpu;
mod cpu_instruction;
mod instruction;

pub use cpu::*;
pub use cpu_instruction::{CpuInstruction, Operand};
pub use instruction::Instruction;
