//! Network status broadcast, AMBTC form carrying an explicit channel pair

use core::fmt;

use p25_core::identifier::{Channel, Identifier, Lra, SystemId, Wacn};
use p25_core::{SystemServices, bits};

use crate::common::MessageBody;
use crate::pdu::packet_sequence::PacketSequence;

const HEADER_LRA: [usize; 8] = bits::<8>(64);
const HEADER_SERVICES: [usize; 8] = bits::<8>(72);
const BLOCK_0_WACN: [usize; 20] = bits::<20>(0);
const BLOCK_0_SYSTEM: [usize; 12] = bits::<12>(20);
const BLOCK_0_DOWNLINK: [usize; 16] = bits::<16>(32);
const BLOCK_0_UPLINK: [usize; 16] = bits::<16>(48);

/// AMBTC 0x3B
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStatusBroadcast {
    pub lra: Lra,
    pub services: SystemServices,
    pub wacn: Option<Wacn>,
    pub system: Option<SystemId>,
    pub channel: Option<Channel>,
}

impl NetworkStatusBroadcast {
    pub fn from_sequence(seq: &PacketSequence) -> Self {
        let header = &seq.header().message;
        let block_0 = seq.unconfirmed_message(0);
        NetworkStatusBroadcast {
            lra: Lra(header.get_int(&HEADER_LRA) as u8),
            services: SystemServices::new(header.get_int(&HEADER_SERVICES) as u8),
            wacn: block_0.map(|b| Wacn(b.get_int(&BLOCK_0_WACN))),
            system: block_0.map(|b| SystemId(b.get_int(&BLOCK_0_SYSTEM) as u16)),
            channel: block_0.map(|b| {
                Channel::from_packed_pair(b.get_int(&BLOCK_0_DOWNLINK) as u16, b.get_int(&BLOCK_0_UPLINK) as u16)
            }),
        }
    }
}

impl MessageBody for NetworkStatusBroadcast {
    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids: Vec<Identifier> = vec![self.lra.into()];
        ids.extend(self.wacn.map(Identifier::from));
        ids.extend(self.system.map(Identifier::from));
        ids
    }

    fn channels(&self) -> Vec<Channel> {
        self.channel.into_iter().collect()
    }
}

impl fmt::Display for NetworkStatusBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LRA:{}", self.lra)?;
        if let Some(wacn) = self.wacn {
            write!(f, " WACN:{}", wacn)?;
        }
        if let Some(system) = self.system {
            write!(f, " SYSTEM:{}", system)?;
        }
        if let Some(channel) = self.channel {
            write!(f, " CHAN:{}", channel)?;
        }
        write!(f, " {}", self.services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdu::test_util::sequence;

    #[test]
    fn test_network_status() {
        // LRA 0x01, svc 0x70, opcode 0x3B
        // block 0: WACN 0xBEE00, system 0x3A1, DL 0x1064, UL 0x1096
        let seq = sequence("377D00000123813B01700000", &["BEE003A11064109600000000"]);
        let pdu = NetworkStatusBroadcast::from_sequence(&seq);
        assert_eq!(pdu.lra, Lra(1));
        assert!(pdu.services.has_voice());
        assert_eq!(pdu.wacn, Some(Wacn(0xBEE00)));
        assert_eq!(pdu.system, Some(SystemId(0x3A1)));
        assert_eq!(pdu.channel, Some(Channel::explicit(1, 100, 1, 150)));
        assert_eq!(pdu.identifiers().len(), 3);
    }
}
