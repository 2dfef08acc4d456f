use dvbt2_core::dvbt2_config::InputMode;
use dvbt2_core::dvbt2_parameters::{TS_PACKET_LENGTH, TS_SYNC_BYTE};
use crate::bbheader_bits::BitWriter;
use crate::bbheader_crc::add_crc8_bits;

/// Length of the baseband header including its CRC-8.
pub const BB_HEADER_LENGTH_BITS: usize = 80;
/// Length of the part of the baseband header covered by the CRC-8.
pub const BB_HEADER_DATA_LENGTH_BITS: usize = 72;

pub const TS_GS_TRANSPORT: u8 = 3;
pub const SIS_MIS_SINGLE: u8 = 1;
pub const SIS_MIS_MULTIPLE: u8 = 0;
pub const CCM: u8 = 1;
pub const ISSYI_NOT_ACTIVE: u8 = 0;
pub const NPD_NOT_ACTIVE: u8 = 0;

/// Fields of the baseband header.
///
/// # Diagram
/// ```text
/// | MATYPE                                         | ISI | UPL | DFL | SYNC | SYNCD | CRC-8 |
/// | TS/GS | SIS/MIS | CCM/ACM | ISSYI | NPD | RO   |     |     |     |      |       |       |
/// | 2     | 1       | 1       | 1     | 1   | 2    | 8   | 16  | 16  | 8    | 16    | 8     |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BbHeader {
    pub ts_gs: u8,
    pub sis_mis: u8,
    pub ccm_acm: u8,
    pub issyi: u8,
    pub npd: u8,
    /// Roll-off, unused in T2 and left at zero.
    pub ro: u8,
    /// Input stream identifier, only sent in multiple input stream mode.
    pub isi: u8,
    /// User packet length in bits.
    pub upl: u16,
    /// Data field length in bits.
    pub dfl: u16,
    pub sync: u8,
    /// Distance in bits from the start of the data field to the first user packet.
    pub syncd: u16,
}

impl BbHeader {
    /// Header for a single transport stream with constant coding.
    pub fn new_transport_stream(input_mode: InputMode, nb_data_field_bits: usize) -> Self {
        let (upl, sync) = match input_mode {
            InputMode::Normal => ((TS_PACKET_LENGTH*8) as u16, TS_SYNC_BYTE),
            InputMode::HighEfficiency => (0, 0),
        };
        Self {
            ts_gs: TS_GS_TRANSPORT,
            sis_mis: SIS_MIS_SINGLE,
            ccm_acm: CCM,
            issyi: ISSYI_NOT_ACTIVE,
            npd: NPD_NOT_ACTIVE,
            ro: 0,
            isi: 0,
            upl,
            dfl: nb_data_field_bits as u16,
            sync,
            syncd: 0,
        }
    }

    /// Writes the header and its CRC-8 as 80 unpacked bits.
    pub fn write_bits(&self, bits: &mut [u8], input_mode: InputMode) -> usize {
        assert!(bits.len() >= BB_HEADER_LENGTH_BITS, "Header needs {} bits but buffer has {}", BB_HEADER_LENGTH_BITS, bits.len());

        let mut writer = BitWriter::new(&mut bits[..BB_HEADER_DATA_LENGTH_BITS]);
        writer.write_field(self.ts_gs as u64, 2);
        writer.write_field(self.sis_mis as u64, 1);
        writer.write_field(self.ccm_acm as u64, 1);
        writer.write_field(self.issyi as u64, 1);
        writer.write_field(self.npd as u64, 1);
        writer.write_field(self.ro as u64, 2);
        let isi = if self.sis_mis == SIS_MIS_MULTIPLE { self.isi } else { 0 };
        writer.write_field(isi as u64, 8);
        writer.write_field(self.upl as u64, 16);
        writer.write_field(self.dfl as u64, 16);
        writer.write_field(self.sync as u64, 8);
        writer.write_field(self.syncd as u64, 16);
        let offset = writer.offset();

        offset + add_crc8_bits(bits, offset, input_mode)
    }
}

/// Bit distance to the next packet sync byte given the position within the current packet.
pub fn calculate_sync_distance(packet_offset: usize) -> u16 {
    assert!(packet_offset < TS_PACKET_LENGTH);
    if packet_offset == 0 {
        0
    } else {
        ((TS_PACKET_LENGTH - packet_offset)*8) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbheader_bits::pack_bits;

    #[test]
    fn normal_mode_header_layout() {
        let mut header = BbHeader::new_transport_stream(InputMode::Normal, 32128);
        header.syncd = 960;
        let mut bits = [0u8; BB_HEADER_LENGTH_BITS];
        assert_eq!(header.write_bits(&mut bits, InputMode::Normal), 80);

        assert_eq!(pack_bits(&bits[0..8]), 0b1111_0000);
        assert_eq!(pack_bits(&bits[8..16]), 0);
        assert_eq!(pack_bits(&bits[16..32]), 1504);
        assert_eq!(pack_bits(&bits[32..48]), 32128);
        assert_eq!(pack_bits(&bits[48..56]), 0x47);
        assert_eq!(pack_bits(&bits[56..72]), 960);
    }

    #[test]
    fn high_efficiency_header_has_no_packet_length() {
        let header = BbHeader::new_transport_stream(InputMode::HighEfficiency, 7032 - 80);
        let mut bits = [0u8; BB_HEADER_LENGTH_BITS];
        header.write_bits(&mut bits, InputMode::HighEfficiency);
        assert_eq!(pack_bits(&bits[16..32]), 0);
        assert_eq!(pack_bits(&bits[32..48]), 6952);
        assert_eq!(pack_bits(&bits[48..56]), 0);
    }

    #[test]
    fn isi_is_only_sent_for_multiple_streams() {
        let mut header = BbHeader::new_transport_stream(InputMode::Normal, 1000);
        header.isi = 0xA5;
        let mut bits = [0u8; BB_HEADER_LENGTH_BITS];
        header.write_bits(&mut bits, InputMode::Normal);
        assert_eq!(pack_bits(&bits[8..16]), 0);

        header.sis_mis = SIS_MIS_MULTIPLE;
        header.write_bits(&mut bits, InputMode::Normal);
        assert_eq!(bits[2], 0);
        assert_eq!(pack_bits(&bits[8..16]), 0xA5);
    }

    #[test]
    fn sync_distance_is_a_whole_number_of_bytes() {
        assert_eq!(calculate_sync_distance(0), 0);
        assert_eq!(calculate_sync_distance(1), 187*8);
        assert_eq!(calculate_sync_distance(68), 960);
        for offset in 0..TS_PACKET_LENGTH {
            let syncd = calculate_sync_distance(offset) as usize;
            assert_eq!(syncd % 8, 0);
            assert!(syncd <= 187*8);
        }
    }
}
