//! Telephone interconnect link control words

use core::fmt;

use p25_core::identifier::{Identifier, Talkgroup};
use p25_core::{BitMessage, ServiceOptions, bits};

use crate::common::MessageBody;
use crate::common::telephone::call_timer_ms;
use crate::lc::enums::lc_opcode::LcOpcode;

const SERVICE_OPTIONS: [usize; 8] = bits::<8>(16);
const CALL_TIMER: [usize; 16] = bits::<16>(32);
const ADDRESS: [usize; 24] = bits::<24>(48);

/// LC 0x06: telephone interconnect call in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelephoneInterconnectVoiceChannelUser {
    pub service_options: ServiceOptions,
    /// 16 bits, raw, in 100 ms units
    pub call_timer: u16,
    /// Radio talking to the landline, either side of the call
    pub address: Talkgroup,
}

impl TelephoneInterconnectVoiceChannelUser {
    pub fn from_bitmsg(msg: &BitMessage) -> Self {
        TelephoneInterconnectVoiceChannelUser {
            service_options: ServiceOptions::new(msg.get_int(&SERVICE_OPTIONS) as u8),
            call_timer: msg.get_int(&CALL_TIMER) as u16,
            address: Talkgroup::any(msg.get_int(&ADDRESS)),
        }
    }

    /// Call timer duration in milliseconds
    pub fn call_timer_ms(&self) -> u64 {
        call_timer_ms(self.call_timer)
    }
}

impl MessageBody for TelephoneInterconnectVoiceChannelUser {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.address.into()]
    }
}

impl fmt::Display for TelephoneInterconnectVoiceChannelUser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ID:{} CALL TIMER:{}MS {}",
            LcOpcode::TelephoneInterconnectVoiceChannelUser,
            self.address,
            self.call_timer_ms(),
            self.service_options
        )
    }
}

#[cfg(test)]
mod tests {
    use p25_core::identifier::Role;

    use super::*;

    #[test]
    fn test_call_timer_scaling() {
        // SO 0x00, call timer 50, address 0x000123
        let msg = BitMessage::from_hex("060000000032000123").unwrap();
        let pdu = TelephoneInterconnectVoiceChannelUser::from_bitmsg(&msg);
        assert_eq!(pdu.call_timer, 50);
        assert_eq!(pdu.call_timer_ms(), 5000);
        assert_eq!(pdu.address.role, Role::Any);
        assert_eq!(
            pdu.to_string(),
            "TELEPHONE INTERCONNECT VOICE CHANNEL USER ID:291 CALL TIMER:5000MS PRI:0"
        );
    }
}
