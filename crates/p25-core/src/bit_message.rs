use std::fmt;

use crate::pdu_parse_error::PduParseErr;

/// Fixed length, bit addressable message buffer. Bit 0 is the MSB of the first byte.
///
/// Protocol field tables are expressed as arrays of bit indices (see [`bits`]), which
/// allows gapped or reordered fields to be read with [`BitMessage::get_int`].
/// Reading or writing outside of `[0, len)` is a programming error and panics.
#[derive(Clone, PartialEq, Eq)]
pub struct BitMessage {
    buffer: Vec<u8>,
    len: usize,
}

/// Builds a contiguous field table `[start, start + N)` at compile time.
pub const fn bits<const N: usize>(start: usize) -> [usize; N] {
    let mut out = [0usize; N];
    let mut i = 0;
    while i < N {
        out[i] = start + i;
        i += 1;
    }
    out
}

impl BitMessage {
    /// Create a zeroed message of exactly `len_bits` bits.
    pub fn new(len_bits: usize) -> Self {
        BitMessage {
            buffer: vec![0; len_bits.div_ceil(8)],
            len: len_bits,
        }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        BitMessage {
            buffer: data.to_vec(),
            len: data.len() * 8,
        }
    }

    /// Wrap an existing byte-vector, restricting the message to `len_bits` bits.
    pub fn from_vec(data: Vec<u8>, len_bits: usize) -> Self {
        assert!(len_bits <= data.len() * 8, "from_vec: {} bits do not fit in {} bytes", len_bits, data.len());
        BitMessage { buffer: data, len: len_bits }
    }

    /// Parse a hex string (whitespace tolerated) into a message of 4 bits per digit.
    pub fn from_hex(hex: &str) -> Result<Self, PduParseErr> {
        let digits: Vec<char> = hex.chars().filter(|c| !c.is_whitespace()).collect();
        let mut msg = BitMessage::new(digits.len() * 4);
        for (i, c) in digits.iter().enumerate() {
            let Some(nibble) = c.to_digit(16) else {
                return Err(PduParseErr::InvalidValue { field: "hex_digit", value: *c as u64 });
            };
            msg.set_int_range(nibble, i * 4, i * 4 + 3);
        }
        Ok(msg)
    }

    /// Construct a message directly from a string of '0'/'1' characters.
    /// Panics if any other character is encountered.
    pub fn from_bitstr(bitstr: &str) -> Self {
        let mut msg = BitMessage::new(bitstr.len());
        for (i, c) in bitstr.chars().enumerate() {
            match c {
                '0' => {}
                '1' => msg.set_bit(i, true),
                other => panic!("from_bitstr: invalid character `{}`; only '0' or '1' allowed", other),
            }
        }
        msg
    }

    /// Message length in bits
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get_bit(&self, index: usize) -> bool {
        self.check_index(index);
        self.read_bit_at_unchecked(index) == 1
    }

    pub fn set_bit(&mut self, index: usize, value: bool) {
        self.check_index(index);
        let mask = 1u8 << (7 - (index % 8));
        if value {
            self.buffer[index / 8] |= mask;
        } else {
            self.buffer[index / 8] &= !mask;
        }
    }

    /// Integer value of the bits at `indices`, accumulated MSB-first in array order.
    pub fn get_int(&self, indices: &[usize]) -> u32 {
        assert!(indices.len() <= 32, "get_int: at most 32 bits per field, got {}", indices.len());
        indices.iter().fold(0u32, |acc, &i| {
            self.check_index(i);
            (acc << 1) | self.read_bit_at_unchecked(i) as u32
        })
    }

    /// Integer value of the contiguous, inclusive bit range `[start, end]`.
    pub fn get_int_range(&self, start: usize, end: usize) -> u32 {
        assert!(start <= end, "get_int_range: start {} after end {}", start, end);
        let num_bits = end - start + 1;
        assert!(num_bits <= 32, "get_int_range: at most 32 bits per field, got {}", num_bits);
        self.check_index(end);
        self.read_bits_at_unchecked(start, num_bits) as u32
    }

    /// Write `value` MSB-first into the bits at `indices`.
    pub fn set_int(&mut self, value: u32, indices: &[usize]) {
        let n = indices.len();
        assert!(n <= 32, "set_int: at most 32 bits per field, got {}", n);
        assert!(n == 32 || value >> n == 0, "value exceeds num_bits {} {}", value, n);
        for (k, &i) in indices.iter().enumerate() {
            self.set_bit(i, (value >> (n - 1 - k)) & 1 == 1);
        }
    }

    /// Write `value` into the contiguous, inclusive bit range `[start, end]`.
    pub fn set_int_range(&mut self, value: u32, start: usize, end: usize) {
        assert!(start <= end, "set_int_range: start {} after end {}", start, end);
        let indices: Vec<usize> = (start..=end).collect();
        self.set_int(value, &indices);
    }

    /// Copy of bits `[start, end)` as a new message.
    pub fn get_sub_message(&self, start: usize, end: usize) -> BitMessage {
        assert!(start <= end && end <= self.len, "sub message [{},{}) out of range for {} bits", start, end, self.len);
        let mut sub = BitMessage::new(end - start);
        for i in start..end {
            if self.read_bit_at_unchecked(i) == 1 {
                sub.set_bit(i - start, true);
            }
        }
        sub
    }

    /// Backing bytes, including any unused trailing bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    // String representations /////////////////////////////

    /// Dump the message as an uppercase hex string, one digit per 4 bits.
    /// If the length isn't a multiple of 4, the last nibble is padded on the right with zeros.
    pub fn to_hex_string(&self) -> String {
        let n_nibbles = self.len.div_ceil(4);
        let mut s = String::with_capacity(n_nibbles);
        for i in 0..n_nibbles {
            let take = usize::min(4, self.len - i * 4);
            let v = self.read_bits_at_unchecked(i * 4, take) as u8;
            let digit = if take < 4 { v << (4 - take) } else { v };
            s.push_str(&format!("{:X}", digit));
        }
        s
    }

    /// Dump the message as a string of '0'/'1' characters.
    pub fn to_bitstr(&self) -> String {
        (0..self.len)
            .map(|i| if self.read_bit_at_unchecked(i) == 1 { '1' } else { '0' })
            .collect()
    }

    fn check_index(&self, index: usize) {
        assert!(index < self.len, "bit index {} out of range for {} bit message", index, self.len);
    }

    /// --- Low-level reader: no bounds checks! ---
    /// Reads exactly `num_bits` bits starting at `bit_pos`, returning them as the low
    /// `num_bits` of a `u64`. **Caller must ensure** `num_bits <= 64` and `bit_pos + num_bits <= len`.
    fn read_bits_at_unchecked(&self, mut bit_pos: usize, num_bits: usize) -> u64 {
        let mut result = 0u64;
        let mut bits_remaining = num_bits;

        // 1) head bits to align to next byte
        let head = bit_pos % 8;
        if head != 0 && bits_remaining > 0 {
            let take = usize::min(8 - head, bits_remaining);
            let byte = self.buffer[bit_pos / 8];
            let shift = 8 - head - take;
            let mask = ((1u16 << take) - 1) as u8;
            result = ((byte >> shift) & mask) as u64;
            bit_pos += take;
            bits_remaining -= take;
        }

        // 2) full bytes
        while bits_remaining >= 8 {
            result = (result << 8) | self.buffer[bit_pos / 8] as u64;
            bit_pos += 8;
            bits_remaining -= 8;
        }

        // 3) tail bits
        for i in 0..bits_remaining {
            result = (result << 1) | self.read_bit_at_unchecked(bit_pos + i) as u64;
        }

        result
    }

    fn read_bit_at_unchecked(&self, bit_pos: usize) -> u8 {
        (self.buffer[bit_pos / 8] >> (7 - (bit_pos % 8))) & 1
    }
}

impl fmt::Debug for BitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitMessage {{ {} bits {} }}", self.len, self.to_hex_string())
    }
}

impl fmt::Display for BitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_int_contiguous() {
        let msg = BitMessage::from_bytes(&[0xAB, 0xCD]);
        assert_eq!(msg.get_int(&bits::<8>(0)), 0xAB);
        assert_eq!(msg.get_int(&bits::<8>(8)), 0xCD);
        assert_eq!(msg.get_int(&bits::<16>(0)), 0xABCD);
        assert_eq!(msg.get_int_range(4, 11), 0xBC);
    }

    #[test]
    fn test_get_int_gapped_and_reordered() {
        // 1010 0000
        let msg = BitMessage::from_bitstr("10100000");
        assert_eq!(msg.get_int(&[0, 2]), 0b11);
        assert_eq!(msg.get_int(&[2, 1, 0]), 0b101);
        assert_eq!(msg.get_int(&[1, 0]), 0b01);
        assert_eq!(msg.get_int(&[]), 0);
    }

    #[test]
    fn test_unaligned_range_across_bytes() {
        let mut msg = BitMessage::new(48);
        let pattern: u32 = 0b10_1010_1111_0001_0010;
        msg.set_int_range(pattern, 5, 24);
        assert_eq!(msg.get_int_range(5, 24), pattern);
        assert_eq!(msg.get_int_range(0, 4), 0);
        assert_eq!(msg.get_int_range(25, 47), 0);
    }

    #[test]
    fn test_set_int_round_trip_on_gapped_field() {
        let mut msg = BitMessage::new(16);
        let field = [15, 0, 7, 8];
        msg.set_int(0b1011, &field);
        assert_eq!(msg.get_int(&field), 0b1011);
        assert!(msg.get_bit(15));
        assert!(!msg.get_bit(0));
    }

    #[test]
    fn test_full_32_bit_field() {
        let msg = BitMessage::from_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(msg.get_int(&bits::<32>(0)), 0xDEADBEEF);
        assert_eq!(msg.get_int_range(0, 31), 0xDEADBEEF);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_bit_out_of_range() {
        let msg = BitMessage::new(10);
        msg.get_bit(10);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_int_out_of_range() {
        let msg = BitMessage::new(72);
        msg.get_int(&bits::<8>(68));
    }

    #[test]
    #[should_panic(expected = "value exceeds num_bits")]
    fn test_value_above_num_bits() {
        let mut msg = BitMessage::new(4);
        msg.set_int(0b11111, &bits::<4>(0));
    }

    #[test]
    fn test_hex_round_trip() {
        let msg = BitMessage::from_hex("0A 1b ff").unwrap();
        assert_eq!(msg.len(), 24);
        assert_eq!(msg.to_hex_string(), "0A1BFF");
        assert_eq!(msg.as_bytes(), &[0x0A, 0x1B, 0xFF]);
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert_eq!(
            BitMessage::from_hex("0G"),
            Err(PduParseErr::InvalidValue { field: "hex_digit", value: 'G' as u64 })
        );
    }

    #[test]
    fn test_hex_pads_last_nibble() {
        let msg = BitMessage::from_bitstr("111111");
        assert_eq!(msg.to_hex_string(), "FC");
    }

    #[test]
    fn test_sub_message() {
        let msg = BitMessage::from_bytes(&[0x12, 0x34, 0x56]);
        let sub = msg.get_sub_message(4, 20);
        assert_eq!(sub.len(), 16);
        assert_eq!(sub.to_hex_string(), "2345");
    }
}
