//! Telephone interconnect grants

use core::fmt;

use p25_core::identifier::{Channel, Identifier, Talkgroup};
use p25_core::{BitMessage, ServiceOptions, bits};

use crate::common::MessageBody;
use crate::common::telephone::call_timer_ms;
use crate::tsbk::enums::tsbk_opcode::OspTsbkOpcode;

const SERVICE_OPTIONS: [usize; 8] = bits::<8>(16);
const CHANNEL: [usize; 16] = bits::<16>(24);
const CALL_TIMER: [usize; 16] = bits::<16>(40);
const ADDRESS: [usize; 24] = bits::<24>(56);

/// TSBK 0x08 (grant) and 0x09 (grant update) share this layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelephoneInterconnectVoiceChannelGrant {
    pub service_options: ServiceOptions,
    pub channel: Channel,
    /// 16 bits, raw, in 100 ms units
    pub call_timer: u16,
    /// Radio on the call, either side
    pub address: Talkgroup,
}

impl TelephoneInterconnectVoiceChannelGrant {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        TelephoneInterconnectVoiceChannelGrant {
            service_options: ServiceOptions::new(msg.get_int(&SERVICE_OPTIONS) as u8),
            channel: Channel::from_packed(msg.get_int(&CHANNEL) as u16),
            call_timer: msg.get_int(&CALL_TIMER) as u16,
            address: Talkgroup::any(msg.get_int(&ADDRESS)),
        }
    }

    pub fn call_timer_ms(&self) -> u64 {
        call_timer_ms(self.call_timer)
    }

    pub fn fmt_with(&self, f: &mut fmt::Formatter, opcode: OspTsbkOpcode) -> fmt::Result {
        write!(
            f,
            "{} ID:{} CHAN:{} CALL TIMER:{}MS {}",
            opcode,
            self.address,
            self.channel,
            self.call_timer_ms(),
            self.service_options
        )
    }
}

impl MessageBody for TelephoneInterconnectVoiceChannelGrant {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.address.into()]
    }

    fn channels(&self) -> Vec<Channel> {
        vec![self.channel]
    }
}

#[cfg(test)]
mod tests {
    use p25_core::identifier::Role;

    use super::*;

    #[test]
    fn test_call_timer_in_ms() {
        // SO 0x02, ch 0x1064, timer 50, address 0x000123
        let msg = BitMessage::from_hex("880002106400320001230000").unwrap();
        let pdu = TelephoneInterconnectVoiceChannelGrant::from_bitmsg(&msg);
        assert_eq!(pdu.service_options.priority(), 2);
        assert_eq!(pdu.call_timer, 50);
        assert_eq!(pdu.call_timer_ms(), 5000);
        assert_eq!(pdu.address.role, Role::Any);
        assert_eq!(pdu.channels(), vec![Channel::implicit(1, 100)]);
    }
}
