use p25_core::identifier::IdentifierFormatter;
use p25_pdus::P25Message;

/// Prints decoded messages with the configured identifier formatting
pub struct MessagePrinter {
    formatter: IdentifierFormatter,
}

impl MessagePrinter {
    pub fn new(formatter: IdentifierFormatter) -> Self {
        Self { formatter }
    }

    pub fn print(&self, msg: &P25Message) {
        println!("{}", msg);
        println!();
        println!(
            "NAC: {}  valid: {}  bit errors: {}/{}",
            msg.nac(),
            msg.is_valid(),
            msg.bit_errors_count(),
            msg.bits_processed_count()
        );

        let identifiers = msg.identifiers();
        if identifiers.is_empty() {
            println!("Identifiers: none");
        } else {
            println!("Identifiers:");
            for id in &identifiers {
                println!("  {:<6} {:<18} {}", id.role(), kind(id), self.formatter.format(id));
            }
        }

        for channel in msg.channels() {
            println!("Channel: {}", channel);
        }
    }
}

fn kind(id: &p25_core::Identifier) -> &'static str {
    use p25_core::Identifier;
    match id {
        Identifier::Talkgroup(tg) if tg.is_group() => "GROUP",
        Identifier::Talkgroup(_) => "UNIT",
        Identifier::PatchGroup(_) => "PATCH GROUP",
        Identifier::Wacn(_) => "WACN",
        Identifier::SystemId(_) => "SYSTEM",
        Identifier::Rfss(_) => "RFSS",
        Identifier::Site(_) => "SITE",
        Identifier::Lra(_) => "LRA",
        Identifier::TelephoneNumber(..) => "TELEPHONE NUMBER",
    }
}
