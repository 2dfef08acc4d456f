use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use dvbt2_core::dvbt2_config::{CodeRate, FrameSize, InbandSignalling, InputMode};
use dvbt2_core::dvbt2_error::Dvbt2Error;
use dvbt2_core::dvbt2_parameters::{get_kbch, TS_PACKET_LENGTH, TS_SYNC_BYTE};
use stream::stream_block::{StreamBlock, WorkResult};
use crate::bbheader_bits::unpack_byte;
use crate::bbheader_crc::update_packet_crc8;
use crate::bbheader_fields::{calculate_sync_distance, BbHeader, BB_HEADER_LENGTH_BITS};
use crate::bbheader_inband::{write_inband_type_b, INBAND_TYPE_B_LENGTH_BITS, TS_RATE_LENGTH_BITS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BbFramerConfig {
    pub frame_size: FrameSize,
    pub code_rate: CodeRate,
    pub input_mode: InputMode,
    pub inband_signalling: InbandSignalling,
    /// Number of FEC blocks in each group that carries one in-band field.
    pub fec_blocks: usize,
    /// Transport stream rate in bits per second sent in the in-band field.
    pub ts_rate: u32,
}

impl Default for BbFramerConfig {
    fn default() -> Self {
        Self {
            frame_size: FrameSize::Normal,
            code_rate: CodeRate::R1_2,
            input_mode: InputMode::Normal,
            inband_signalling: InbandSignalling::Off,
            fec_blocks: 168,
            ts_rate: 4_000_000,
        }
    }
}

/// Packs a transport stream into baseband frames of `kbch` unpacked bits.
///
/// # Diagram
/// ```text
/// | BBFRAME                                        |
/// | HEADER | DATA FIELD             | IN-BAND      |
/// | 80     | kbch-80-padding        | padding      |
/// ```
/// The in-band field is only present in the first frame of each group of `fec_blocks` frames.
/// Packet alignment and the packet CRC carry over between frames and between calls.
pub struct BbFramer {
    config: BbFramerConfig,
    kbch: usize,
    header: BbHeader,
    /// Maximum number of sync bytes skipped while filling one frame in high efficiency mode.
    nb_lookahead_bytes: usize,
    // stream state
    packet_offset: usize,
    packet_crc: u8,
    fec_block: usize,
    /// The number of baseband frames written.
    pub total_frames: u64,
    /// The number of packets whose first byte was not a sync byte.
    pub total_sync_errors: u64,
}

impl BbFramer {
    pub fn new(config: BbFramerConfig) -> Result<Self, Dvbt2Error> {
        let is_inband = config.inband_signalling == InbandSignalling::TypeB;
        if is_inband && config.fec_blocks == 0 {
            return Err(Dvbt2Error::InvalidConfiguration("in-band signalling needs at least one FEC block per group".into()));
        }
        if config.ts_rate >= (1 << TS_RATE_LENGTH_BITS) {
            return Err(Dvbt2Error::FieldOverflow { field: "ts_rate", value: config.ts_rate as u64, bits: TS_RATE_LENGTH_BITS });
        }

        let kbch = get_kbch(config.frame_size, config.code_rate);
        let nb_data_field_bytes = (kbch - BB_HEADER_LENGTH_BITS) / 8;
        let nb_lookahead_bytes = nb_data_field_bytes/(TS_PACKET_LENGTH-1) + 1;
        let header = BbHeader::new_transport_stream(config.input_mode, kbch - BB_HEADER_LENGTH_BITS);

        debug!(kbch, input_mode = ?config.input_mode, inband = ?config.inband_signalling, "created baseband framer");

        Ok(Self {
            config,
            kbch,
            header,
            nb_lookahead_bytes,
            packet_offset: 0,
            packet_crc: 0,
            fec_block: 0,
            total_frames: 0,
            total_sync_errors: 0,
        })
    }

    pub fn config(&self) -> &BbFramerConfig {
        &self.config
    }

    /// Number of bits in each baseband frame.
    pub fn kbch(&self) -> usize {
        self.kbch
    }

    /// Position of the next input byte within its transport stream packet.
    pub fn packet_offset(&self) -> usize {
        self.packet_offset
    }

    /// Index of the next frame within its group of FEC blocks.
    pub fn fec_block(&self) -> usize {
        self.fec_block
    }

    fn is_inband_enabled(&self) -> bool {
        self.config.inband_signalling == InbandSignalling::TypeB
    }

    /// Writes one baseband frame and returns the number of input bytes consumed.
    fn write_frame(&mut self, input: &[u8], frame: &mut [u8]) -> usize {
        let is_inband_frame = self.is_inband_enabled() && self.fec_block == 0;
        let nb_padding = if is_inband_frame { INBAND_TYPE_B_LENGTH_BITS } else { 0 };
        let nb_data_field = self.kbch - BB_HEADER_LENGTH_BITS - nb_padding;

        self.header.dfl = nb_data_field as u16;
        self.header.syncd = calculate_sync_distance(self.packet_offset);
        let (header_bits, remain) = frame.split_at_mut(BB_HEADER_LENGTH_BITS);
        self.header.write_bits(header_bits, self.config.input_mode);

        let (data_field, inband_bits) = remain.split_at_mut(nb_data_field);
        let total_read = match self.config.input_mode {
            InputMode::Normal => self.fill_data_field_normal(input, data_field),
            InputMode::HighEfficiency => self.fill_data_field_high_efficiency(input, data_field),
        };

        if is_inband_frame {
            write_inband_type_b(inband_bits, self.config.ts_rate);
        }
        if self.is_inband_enabled() {
            self.fec_block = (self.fec_block + 1) % self.config.fec_blocks;
        }

        self.total_frames += 1;
        trace!(frame = self.total_frames, dfl = nb_data_field, syncd = self.header.syncd, total_read, "wrote baseband frame");
        total_read
    }

    /// Each sync byte is replaced with the CRC-8 of the packet before it.
    fn fill_data_field_normal(&mut self, input: &[u8], data_field: &mut [u8]) -> usize {
        let mut total_read = 0;
        for byte_bits in data_field.chunks_exact_mut(8) {
            let byte = input[total_read];
            total_read += 1;
            let out_byte = if self.packet_offset == 0 {
                self.check_sync_byte(byte);
                std::mem::replace(&mut self.packet_crc, 0)
            } else {
                self.packet_crc = update_packet_crc8(self.packet_crc, byte);
                byte
            };
            self.packet_offset = (self.packet_offset + 1) % TS_PACKET_LENGTH;
            unpack_byte(out_byte, byte_bits);
        }
        total_read
    }

    /// Sync bytes are dropped, so more input is read than the data field holds.
    fn fill_data_field_high_efficiency(&mut self, input: &[u8], data_field: &mut [u8]) -> usize {
        let mut total_read = 0;
        for byte_bits in data_field.chunks_exact_mut(8) {
            loop {
                let byte = input[total_read];
                total_read += 1;
                let is_sync_position = self.packet_offset == 0;
                self.packet_offset = (self.packet_offset + 1) % TS_PACKET_LENGTH;
                if is_sync_position {
                    self.check_sync_byte(byte);
                    continue;
                }
                unpack_byte(byte, byte_bits);
                break;
            }
        }
        total_read
    }

    fn check_sync_byte(&mut self, byte: u8) {
        if byte != TS_SYNC_BYTE {
            self.total_sync_errors += 1;
            warn!(byte, total_sync_errors = self.total_sync_errors, "transport stream sync error");
        }
    }
}

impl StreamBlock for BbFramer {
    type Input = u8;
    type Output = u8;

    fn output_multiple(&self) -> usize {
        self.kbch
    }

    fn forecast(&self, nb_output: usize) -> usize {
        let nb_bytes = nb_output.saturating_sub(BB_HEADER_LENGTH_BITS).div_ceil(8);
        match self.config.input_mode {
            InputMode::Normal => nb_bytes,
            InputMode::HighEfficiency => {
                let nb_frames = nb_output / self.kbch;
                nb_bytes + nb_frames*self.nb_lookahead_bytes
            },
        }
    }

    fn general_work(&mut self, input: &[u8], output: &mut [u8]) -> WorkResult {
        let nb_output = output.len();
        assert!(nb_output % self.kbch == 0, "Output of {} bits is not a multiple of kbch {}", nb_output, self.kbch);
        let nb_required = self.forecast(nb_output);
        assert!(input.len() >= nb_required, "Need {} input bytes for {} output bits but got {}", nb_required, nb_output, input.len());

        let mut total_read = 0;
        for frame in output.chunks_exact_mut(self.kbch) {
            total_read += self.write_frame(&input[total_read..], frame);
        }

        WorkResult {
            consumed: total_read,
            produced: nb_output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbheader_bits::pack_bits;

    fn make_transport_stream(total_packets: usize) -> Vec<u8> {
        (0..total_packets*TS_PACKET_LENGTH)
            .map(|i| match i % TS_PACKET_LENGTH {
                0 => TS_SYNC_BYTE,
                offset => (offset as u8) ^ ((i / TS_PACKET_LENGTH) as u8),
            })
            .collect()
    }

    #[test]
    fn rejects_zero_fec_blocks_with_inband() {
        let config = BbFramerConfig {
            inband_signalling: InbandSignalling::TypeB,
            fec_blocks: 0,
            ..Default::default()
        };
        assert!(matches!(BbFramer::new(config), Err(Dvbt2Error::InvalidConfiguration(_))));
    }

    #[test]
    fn rejects_ts_rate_wider_than_field() {
        let config = BbFramerConfig { ts_rate: 1 << 27, ..Default::default() };
        assert!(matches!(BbFramer::new(config), Err(Dvbt2Error::FieldOverflow { field: "ts_rate", .. })));
    }

    #[test]
    fn forecast_for_one_frame() {
        let framer = BbFramer::new(BbFramerConfig::default()).unwrap();
        assert_eq!(framer.output_multiple(), 32208);
        assert_eq!(framer.forecast(32208), 4016);

        let config = BbFramerConfig { input_mode: InputMode::HighEfficiency, ..Default::default() };
        let framer = BbFramer::new(config).unwrap();
        assert_eq!(framer.forecast(32208), 4016 + 4016/187 + 1);
        assert_eq!(framer.forecast(2*32208), (2*32208 - 80)/8 + 2*(4016/187 + 1));
    }

    #[test]
    fn sync_byte_is_replaced_with_previous_packet_crc() {
        let mut framer = BbFramer::new(BbFramerConfig::default()).unwrap();
        let input = make_transport_stream(43);
        let mut output = vec![0u8; 2*framer.kbch()];
        let result = framer.general_work(&input, &mut output);
        assert_eq!(result.consumed, 2*4016);
        assert_eq!(result.produced, 2*32208);

        // First packet has no predecessor so the CRC slot is zero
        let data_field = &output[80..32208];
        assert_eq!(pack_bits(&data_field[0..8]), 0);
        assert_eq!(pack_bits(&data_field[8..16]), input[1] as u64);

        let expected_crc = crate::bbheader_crc::calculate_packet_crc8(&input[1..188]);
        assert_eq!(pack_bits(&data_field[188*8..189*8]) as u8, expected_crc);
        assert_eq!(framer.total_sync_errors, 0);
    }

    #[test]
    fn sync_distance_follows_packet_alignment_across_frames() {
        let mut framer = BbFramer::new(BbFramerConfig::default()).unwrap();
        let input = make_transport_stream(43);
        let mut output = vec![0u8; 2*framer.kbch()];
        framer.general_work(&input, &mut output);

        let second_frame = &output[32208..];
        // 4016 bytes into the stream is 68 bytes into a packet
        assert_eq!(pack_bits(&second_frame[56..72]), (188-68)*8);
        assert_eq!(framer.packet_offset(), (2*4016) % 188);
    }

    #[test]
    fn high_efficiency_drops_sync_bytes() {
        let config = BbFramerConfig {
            frame_size: FrameSize::Short,
            input_mode: InputMode::HighEfficiency,
            ..Default::default()
        };
        let mut framer = BbFramer::new(config).unwrap();
        let kbch = framer.kbch();
        let input = make_transport_stream(10);
        let mut output = vec![0u8; kbch];
        let result = framer.general_work(&input, &mut output);

        let nb_data_bytes = (kbch - 80)/8;
        let nb_sync_bytes = nb_data_bytes/187 + 1;
        assert_eq!(result.consumed, nb_data_bytes + nb_sync_bytes);
        let data_field = &output[80..];
        assert_eq!(pack_bits(&data_field[0..8]), input[1] as u64);
        assert_eq!(pack_bits(&data_field[187*8..188*8]), input[189] as u64);
    }

    #[test]
    fn bad_sync_byte_is_counted_but_not_fatal() {
        let mut framer = BbFramer::new(BbFramerConfig::default()).unwrap();
        let mut input = make_transport_stream(22);
        input[188] = 0x00;
        let mut output = vec![0u8; framer.kbch()];
        let result = framer.general_work(&input, &mut output);
        assert_eq!(result.produced, framer.kbch());
        assert_eq!(framer.total_sync_errors, 1);
    }

    #[test]
    fn inband_field_only_in_first_frame_of_group() {
        let config = BbFramerConfig {
            frame_size: FrameSize::Short,
            inband_signalling: InbandSignalling::TypeB,
            fec_blocks: 3,
            ts_rate: 1_234_567,
            ..Default::default()
        };
        let mut framer = BbFramer::new(config).unwrap();
        let kbch = framer.kbch();
        let input = make_transport_stream(40);
        let mut output = vec![0u8; 4*kbch];
        let result = framer.general_work(&input, &mut output);

        let nb_full = (kbch - 80)/8;
        let nb_padded = (kbch - 80 - 104)/8;
        assert_eq!(result.consumed, 2*nb_padded + 2*nb_full);

        for (i, frame) in output.chunks_exact(kbch).enumerate() {
            let dfl = pack_bits(&frame[32..48]) as usize;
            if i % 3 == 0 {
                assert_eq!(dfl, kbch - 80 - 104);
                let inband = &frame[kbch-104..];
                assert_eq!(&inband[..2], &[0, 1]);
                assert_eq!(pack_bits(&inband[67..94]), 1_234_567);
            } else {
                assert_eq!(dfl, kbch - 80);
            }
        }
        assert_eq!(framer.fec_block(), 1);
    }

    #[test]
    fn fec_block_stays_at_zero_without_inband() {
        let mut framer = BbFramer::new(BbFramerConfig { frame_size: FrameSize::Short, ..Default::default() }).unwrap();
        let input = make_transport_stream(20);
        let mut output = vec![0u8; 3*framer.kbch()];
        framer.general_work(&input, &mut output);
        assert_eq!(framer.fec_block(), 0);
        assert_eq!(framer.total_frames, 3);
    }
}
