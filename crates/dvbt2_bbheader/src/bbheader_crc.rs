use dvbt2_core::dvbt2_config::InputMode;

// DOC: ETSI EN 302 755
// Referring to clause 5.1.4 - CRC-8 encoder
// The generator polynomial is g(x) = x^8 + x^7 + x^6 + x^4 + x^2 + 1
// 0xD5 is that polynomial for an MSB first register, 0xAB is the same polynomial bit reversed.
const CRC_POLY_LSB_FIRST: u8 = 0xAB;
const CRC_POLY_MSB_FIRST: u8 = 0xD5;

/// Marks the header checksum of a high efficiency mode frame.
const CRC_HIGH_EFFICIENCY_MASK: u8 = 0x80;

const fn build_crc8_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc: u8 = 0;
        let mut j = 8;
        while j > 0 {
            j -= 1;
            let data_bit = (i >> j) & 1;
            let crc_bit = ((crc >> 7) & 1) as usize;
            if data_bit ^ crc_bit != 0 {
                crc = (crc << 1) ^ CRC_POLY_MSB_FIRST;
            } else {
                crc <<= 1;
            }
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Lookup table for the per byte CRC-8 of transport stream packets.
pub static CRC8_TABLE: [u8; 256] = build_crc8_table();

/// Folds one byte into the running CRC-8 of a transport stream packet.
#[inline(always)]
pub fn update_packet_crc8(crc: u8, byte: u8) -> u8 {
    CRC8_TABLE[(byte ^ crc) as usize]
}

/// CRC-8 of a whole byte buffer starting from zero.
pub fn calculate_packet_crc8(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |crc, byte| update_packet_crc8(crc, *byte))
}

/// Computes the CRC-8 of the first `length` bits of an unpacked bit buffer
/// and writes the 8 checksum bits directly after them.
/// Returns the number of bits appended.
///
/// This runs bit by bit on the bit reversed polynomial, which is why the result
/// is unpacked least significant bit first.
pub fn add_crc8_bits(bits: &mut [u8], length: usize, input_mode: InputMode) -> usize {
    assert!(bits.len() >= length + 8, "Bit buffer of {} cannot fit {} bits and a CRC", bits.len(), length);

    let mut crc: u8 = 0;
    for bit in &bits[..length] {
        let b = (*bit & 1) ^ (crc & 1);
        crc >>= 1;
        if b != 0 {
            crc ^= CRC_POLY_LSB_FIRST;
        }
    }

    if input_mode == InputMode::HighEfficiency {
        crc ^= CRC_HIGH_EFFICIENCY_MASK;
    }

    for (n, bit) in bits[length..length+8].iter_mut().enumerate() {
        *bit = (crc >> n) & 1;
    }
    8
}
