pub mod lc_opcode;
