/// Writes fields into an unpacked bit buffer where each byte holds a single bit of value 0 or 1.
/// Fields are written most significant bit first.
pub struct BitWriter<'a> {
    bits: &'a mut [u8],
    offset: usize,
}

impl<'a> BitWriter<'a> {
    pub fn new(bits: &'a mut [u8]) -> Self {
        Self { bits, offset: 0 }
    }

    /// Number of bits written so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn write_bit(&mut self, bit: bool) {
        self.bits[self.offset] = bit as u8;
        self.offset += 1;
    }

    /// Writes the lowest `nb_bits` of the value.
    pub fn write_field(&mut self, value: u64, nb_bits: usize) {
        assert!(nb_bits <= 64, "Field of {} bits is wider than 64 bits", nb_bits);
        assert!(self.offset + nb_bits <= self.bits.len(), "Field of {} bits overruns buffer at offset {}", nb_bits, self.offset);
        for n in (0..nb_bits).rev() {
            self.bits[self.offset] = ((value >> n) & 1) as u8;
            self.offset += 1;
        }
    }

    /// Writes a reserved field of zeros.
    pub fn write_zeros(&mut self, nb_bits: usize) {
        self.write_field(0, nb_bits);
    }
}

/// Expands a byte into 8 bits, most significant bit first.
#[inline(always)]
pub fn unpack_byte(byte: u8, bits: &mut [u8]) {
    for (n, bit) in (0..8).rev().zip(bits.iter_mut()) {
        *bit = (byte >> n) & 1;
    }
}

/// Packs bits most significant bit first into an integer.
pub fn pack_bits(bits: &[u8]) -> u64 {
    assert!(bits.len() <= 64, "Cannot pack {} bits into 64 bits", bits.len());
    bits.iter().fold(0u64, |acc, bit| (acc << 1) | (*bit & 1) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_msb_first() {
        let mut bits = [0u8; 12];
        let mut writer = BitWriter::new(&mut bits);
        writer.write_field(0b101, 3);
        writer.write_bit(true);
        writer.write_field(0x47, 8);
        assert_eq!(writer.offset(), 12);
        assert_eq!(bits, [1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn unpack_then_pack_gives_the_byte() {
        let mut bits = [0u8; 8];
        unpack_byte(0xB8, &mut bits);
        assert_eq!(bits, [1, 0, 1, 1, 1, 0, 0, 0]);
        assert_eq!(pack_bits(&bits), 0xB8);
    }

    #[test]
    #[should_panic]
    fn overrun_is_caught() {
        let mut bits = [0u8; 4];
        let mut writer = BitWriter::new(&mut bits);
        writer.write_field(0, 5);
    }
}
