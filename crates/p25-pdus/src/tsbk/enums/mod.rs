pub mod tsbk_opcode;
