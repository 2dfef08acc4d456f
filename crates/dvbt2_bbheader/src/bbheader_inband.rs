use crate::bbheader_bits::BitWriter;

/// Length of the in-band type B signalling field.
pub const INBAND_TYPE_B_LENGTH_BITS: usize = 104;
/// Width of the transport stream rate field.
pub const TS_RATE_LENGTH_BITS: u32 = 27;

/// Writes the in-band type B field that follows the data field.
///
/// DOC: ETSI EN 302 755
/// Referring to clause 5.2.3 - In-band type B
/// ```text
/// | TYPE | BUFS_UNIT+BUFS+TTO_E+TTO_M+TTO_L | ISCR | ... | TS_RATE | RESERVED |
/// | 2    | 31                               | 22   | 2+10| 27      | 10       |
/// ```
/// Only the type and rate are carried, the buffer and timing fields are left as zero.
pub fn write_inband_type_b(bits: &mut [u8], ts_rate: u32) -> usize {
    assert!(bits.len() >= INBAND_TYPE_B_LENGTH_BITS, "In-band field needs {} bits but buffer has {}", INBAND_TYPE_B_LENGTH_BITS, bits.len());
    assert!(ts_rate < (1 << TS_RATE_LENGTH_BITS), "TS rate {} does not fit in {} bits", ts_rate, TS_RATE_LENGTH_BITS);

    let mut writer = BitWriter::new(&mut bits[..INBAND_TYPE_B_LENGTH_BITS]);
    writer.write_field(0b01, 2);
    writer.write_zeros(31);
    writer.write_zeros(22);
    writer.write_zeros(2);
    writer.write_zeros(10);
    writer.write_field(ts_rate as u64, TS_RATE_LENGTH_BITS as usize);
    writer.write_zeros(10);
    writer.offset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbheader_bits::pack_bits;

    #[test]
    fn type_b_layout() {
        let mut bits = vec![1u8; INBAND_TYPE_B_LENGTH_BITS];
        assert_eq!(write_inband_type_b(&mut bits, 4_000_000), INBAND_TYPE_B_LENGTH_BITS);
        assert_eq!(&bits[..2], &[0, 1]);
        assert!(bits[2..67].iter().all(|bit| *bit == 0));
        assert_eq!(pack_bits(&bits[67..94]), 4_000_000);
        assert!(bits[94..].iter().all(|bit| *bit == 0));
    }
}
