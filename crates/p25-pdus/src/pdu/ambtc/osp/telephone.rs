//! Telephone interconnect channel grants

use core::fmt;

use p25_core::identifier::{Channel, Identifier, Talkgroup};
use p25_core::{ServiceOptions, bits};

use crate::common::MessageBody;
use crate::common::telephone::call_timer_ms;
use crate::pdu::packet_sequence::PacketSequence;

const HEADER_SERVICE_OPTIONS: [usize; 8] = bits::<8>(64);
const BLOCK_0_DOWNLINK_FREQUENCY_BAND: [usize; 4] = bits::<4>(0);
const BLOCK_0_DOWNLINK_CHANNEL_NUMBER: [usize; 12] = bits::<12>(4);
const BLOCK_0_UPLINK_FREQUENCY_BAND: [usize; 4] = bits::<4>(16);
const BLOCK_0_UPLINK_CHANNEL_NUMBER: [usize; 12] = bits::<12>(20);
const BLOCK_0_CALL_TIMER: [usize; 16] = bits::<16>(32);

/// AMBTC 0x08 (grant) and 0x09 (grant update) share this layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelephoneInterconnectChannelGrant {
    pub service_options: ServiceOptions,
    /// Header address, either side of the call
    pub address: Talkgroup,
    pub channel: Option<Channel>,
    /// 16 bits, raw, in 100 ms units
    pub call_timer: Option<u16>,
}

impl TelephoneInterconnectChannelGrant {
    pub fn from_sequence(seq: &PacketSequence) -> Self {
        let block_0 = seq.unconfirmed_message(0);
        TelephoneInterconnectChannelGrant {
            service_options: ServiceOptions::new(seq.header().message.get_int(&HEADER_SERVICE_OPTIONS) as u8),
            address: Talkgroup::any(seq.header().address),
            channel: block_0.map(|b| {
                Channel::from_pairs(
                    b.get_int(&BLOCK_0_DOWNLINK_FREQUENCY_BAND) as u8,
                    b.get_int(&BLOCK_0_DOWNLINK_CHANNEL_NUMBER) as u16,
                    b.get_int(&BLOCK_0_UPLINK_FREQUENCY_BAND) as u8,
                    b.get_int(&BLOCK_0_UPLINK_CHANNEL_NUMBER) as u16,
                )
            }),
            call_timer: block_0.map(|b| b.get_int(&BLOCK_0_CALL_TIMER) as u16),
        }
    }

    /// Call timer in milliseconds, 0 while block 0 is missing
    pub fn call_timer_ms(&self) -> u64 {
        self.call_timer.map(call_timer_ms).unwrap_or(0)
    }
}

impl MessageBody for TelephoneInterconnectChannelGrant {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![self.address.into()]
    }

    fn channels(&self) -> Vec<Channel> {
        self.channel.into_iter().collect()
    }
}

impl fmt::Display for TelephoneInterconnectChannelGrant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ADDR:{}", self.address)?;
        if let Some(channel) = self.channel {
            write!(f, " CHAN:{}", channel)?;
        }
        write!(
            f,
            " CALL TIMER:{}ms SERVICE OPTIONS:{}",
            self.call_timer_ms(),
            self.service_options
        )
    }
}
