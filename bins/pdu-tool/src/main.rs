use clap::{Parser, Subcommand};

use p25_config::{DecoderConfig, toml_config};
use p25_core::{BitMessage, Direction, Nac, PduParseErr, debug};
use p25_pdus::pdu::data_block::{
    CONFIRMED_BLOCK_LEN, ConfirmedDataBlock, DataBlock, UNCONFIRMED_BLOCK_LEN, UnconfirmedDataBlock,
};
use p25_pdus::pdu::header::PduHeader;
use p25_pdus::pdu::packet_sequence::PacketSequence;
use p25_pdus::{AmbtcMessage, LinkControlWord, P25Message, PacketSequenceAssembler, Tsbk, UmbtcMessage};

mod printer;
use printer::MessagePrinter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "P25 Trunking Message Decoder",
    long_about = "Decodes error-corrected P25 link control words, TSBKs and multi-block packets given as hex"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Network access code to tag messages with
    #[arg(short = 'n', long = "nac", help = "NAC, 12 bits; defaults to the configured default_nac")]
    nac: Option<Nac>,

    #[arg(short = 'c', long = "config", help = "TOML config with identifier display settings")]
    config: Option<String>,

    #[arg(short = 'e', long = "errors", default_value_t = 0, help = "Corrected bit errors to attribute to the input")]
    errors: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Link control word, 72 bits
    Lc {
        #[arg(help = "18 hex digits")]
        hex: String,
    },
    /// Trunking signaling block, 96 bits
    Tsbk {
        #[arg(help = "24 hex digits")]
        hex: String,
        #[arg(long = "isp", help = "Inbound block (default outbound)")]
        isp: bool,
    },
    /// Multi-block packet: header plus data blocks
    Mbt {
        #[arg(help = "Header, 24 hex digits")]
        header: String,
        #[arg(help = "Data blocks: 24 hex digits unconfirmed, 36 hex digits confirmed")]
        blocks: Vec<String>,
    },
}

/// Load configuration file
fn load_config(cfg_path: Option<&str>) -> DecoderConfig {
    let Some(cfg_path) = cfg_path else {
        return DecoderConfig::default();
    };
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

fn parse_block(hex: &str) -> Result<DataBlock, PduParseErr> {
    let msg = BitMessage::from_hex(hex)?;
    match msg.len() {
        UNCONFIRMED_BLOCK_LEN => Ok(UnconfirmedDataBlock::from_bitmsg(msg, 0)?.into()),
        CONFIRMED_BLOCK_LEN => Ok(ConfirmedDataBlock::from_bitmsg(msg, 0)?.into()),
        found => Err(PduParseErr::InconsistentLength {
            expected: UNCONFIRMED_BLOCK_LEN,
            found,
        }),
    }
}

fn assemble(header_hex: &str, blocks: &[String], errors: usize) -> Result<PacketSequence, PduParseErr> {
    let header = PduHeader::from_bitmsg(BitMessage::from_hex(header_hex)?)?.with_bit_errors(errors);
    let mut assembler = PacketSequenceAssembler::new();
    assembler.receive_header(header);
    for hex in blocks {
        assembler.receive_data_block(parse_block(hex)?);
    }
    assembler.end_of_sequence().ok_or(PduParseErr::BufferEnded { field: Some("header") })
}

fn decode(command: &Command, nac: Nac, errors: usize) -> Result<P25Message, PduParseErr> {
    match command {
        Command::Lc { hex } => {
            let lc = LinkControlWord::from_bitmsg(BitMessage::from_hex(hex)?, nac, 0)?;
            Ok(lc.with_bit_errors(errors).into())
        }
        Command::Tsbk { hex, isp } => {
            let direction = if *isp { Direction::Isp } else { Direction::Osp };
            let tsbk = Tsbk::from_bitmsg(BitMessage::from_hex(hex)?, direction, nac, 0)?;
            Ok(tsbk.with_bit_errors(errors).into())
        }
        Command::Mbt { header, blocks } => {
            let sequence = assemble(header, blocks, errors)?;
            if sequence.header().is_ambtc() {
                Ok(AmbtcMessage::from_sequence(sequence, nac, 0)?.into())
            } else if sequence.header().is_umbtc() {
                Ok(UmbtcMessage::from_sequence(sequence, nac, 0)?.into())
            } else {
                println!("{}", sequence.header());
                println!("No trunking control decoder for this packet, {} data blocks", sequence.received_blocks());
                std::process::exit(0);
            }
        }
    }
}

fn main() {
    eprintln!("[+] P25 Trunking Message Decoding tool");
    eprintln!("    Wouter Bokslag / Midnight Blue");
    eprintln!(" *  Input must already be error corrected  *");

    let args = Args::parse();
    let cfg = load_config(args.config.as_deref());
    let _log_guard = debug::setup_logging_default(cfg.debug_log.clone());

    let nac = args.nac.unwrap_or(cfg.decoder.default_nac);
    tracing::debug!("decoding {:?} with nac {}", args.command, nac);
    match decode(&args.command, nac, args.errors) {
        Ok(msg) => MessagePrinter::new(cfg.identifiers.formatter()).print(&msg),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
