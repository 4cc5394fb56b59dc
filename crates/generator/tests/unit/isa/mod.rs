//! Instruction-model unit tests.

/// Encoding-field lookups (opcode, funct3, funct7).
pub mod encoding;


/// Operand presence and immediate widths per format.
pub mod operand_presence;
