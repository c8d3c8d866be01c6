pub mod ambtc_opcode;
pub mod pdu_format;
pub mod umbtc_opcode;
