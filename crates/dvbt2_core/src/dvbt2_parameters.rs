use crate::dvbt2_config::{CarrierMode, CodeRate, FftSize, FrameSize, GuardInterval};

/// Length of a MPEG transport stream packet in bytes.
pub const TS_PACKET_LENGTH: usize = 188;
/// First byte of every transport stream packet.
pub const TS_SYNC_BYTE: u8 = 0x47;

/// Returns the number of information bits a BCH block carries before parity.
///
/// DOC: ETSI EN 302 755, table 6(a) and 6(b).
/// Normal frames have no 1/3 and 2/5 entry in the base profile, these share the 1/2 value.
pub fn get_kbch(frame_size: FrameSize, code_rate: CodeRate) -> usize {
    match (frame_size, code_rate) {
        (FrameSize::Normal, CodeRate::R1_3) => 32208,
        (FrameSize::Normal, CodeRate::R2_5) => 32208,
        (FrameSize::Normal, CodeRate::R1_2) => 32208,
        (FrameSize::Normal, CodeRate::R3_5) => 38688,
        (FrameSize::Normal, CodeRate::R2_3) => 43040,
        (FrameSize::Normal, CodeRate::R3_4) => 48408,
        (FrameSize::Normal, CodeRate::R4_5) => 51648,
        (FrameSize::Normal, CodeRate::R5_6) => 53840,
        (FrameSize::Short,  CodeRate::R1_3) => 5232,
        (FrameSize::Short,  CodeRate::R2_5) => 6312,
        (FrameSize::Short,  CodeRate::R1_2) => 7032,
        (FrameSize::Short,  CodeRate::R3_5) => 9552,
        (FrameSize::Short,  CodeRate::R2_3) => 10632,
        (FrameSize::Short,  CodeRate::R3_4) => 11712,
        (FrameSize::Short,  CodeRate::R4_5) => 12432,
        (FrameSize::Short,  CodeRate::R5_6) => 13152,
    }
}

/// Describes the OFDM structure of a T2 frame that follows a P1 symbol.
///
/// # Diagram
/// ```text
/// | T2 frame                                   |
/// | P1   | P2*N_P2          | DATA*N_data      |
/// | 2048 | (GI+FFT)*N_P2    | (GI+FFT)*N_data  |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct T2OfdmParameters {
    /// Number of samples in the FFT of one symbol.
    pub nb_fft: usize,
    /// Number of samples in the guard interval of one symbol.
    pub nb_guard_interval: usize,
    /// Number of P2 symbols that precede the data symbols.
    pub nb_p2_symbols: usize,
    /// Number of active carriers, used to normalise symbol power.
    pub nb_active_carriers: usize,
}

/// These constants are defined for the elementary period T of the 8MHz profile.
pub fn get_t2_ofdm_parameters(fft_size: FftSize, carrier_mode: CarrierMode, guard_interval: GuardInterval) -> T2OfdmParameters {
    let is_extended = carrier_mode == CarrierMode::Extended;
    let (nb_fft, nb_p2_symbols, nb_active_carriers) = match fft_size {
        FftSize::Fft1K => (1024, 16, 853),
        FftSize::Fft2K => (2048, 8, 1705),
        FftSize::Fft4K => (4096, 4, 3409),
        FftSize::Fft8K | FftSize::Fft8KT2Gi => {
            (8192, 2, if is_extended { 6913 } else { 6817 })
        },
        FftSize::Fft16K => {
            (16384, 1, if is_extended { 13921 } else { 13633 })
        },
        FftSize::Fft32K | FftSize::Fft32KT2Gi => {
            (32768, 1, if is_extended { 27841 } else { 27265 })
        },
    };

    let (numerator, denominator) = guard_interval.fraction();
    let nb_guard_interval = (nb_fft*numerator) / denominator;

    T2OfdmParameters {
        nb_fft,
        nb_guard_interval,
        nb_p2_symbols,
        nb_active_carriers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kbch_is_byte_aligned_for_every_configuration() {
        for frame_size in [FrameSize::Short, FrameSize::Normal] {
            for rate in CodeRate::ALL {
                let kbch = get_kbch(frame_size, rate);
                assert_eq!(kbch % 8, 0, "{:?} {:?} gives {}", frame_size, rate, kbch);
            }
        }
    }

    #[test]
    fn kbch_matches_standard_table() {
        assert_eq!(get_kbch(FrameSize::Normal, CodeRate::R1_2), 32208);
        assert_eq!(get_kbch(FrameSize::Normal, CodeRate::R5_6), 53840);
        assert_eq!(get_kbch(FrameSize::Short, CodeRate::R1_3), 5232);
        assert_eq!(get_kbch(FrameSize::Short, CodeRate::R3_4), 11712);
    }

    #[test]
    fn t2_ofdm_parameters_for_2k() {
        let params = get_t2_ofdm_parameters(FftSize::Fft2K, CarrierMode::Normal, GuardInterval::Gi1_8);
        assert_eq!(params.nb_fft, 2048);
        assert_eq!(params.nb_p2_symbols, 8);
        assert_eq!(params.nb_active_carriers, 1705);
        assert_eq!(params.nb_guard_interval, 256);
    }

    #[test]
    fn extended_carriers_only_change_large_ffts() {
        let normal = get_t2_ofdm_parameters(FftSize::Fft4K, CarrierMode::Normal, GuardInterval::Gi1_4);
        let extended = get_t2_ofdm_parameters(FftSize::Fft4K, CarrierMode::Extended, GuardInterval::Gi1_4);
        assert_eq!(normal, extended);

        let normal = get_t2_ofdm_parameters(FftSize::Fft32KT2Gi, CarrierMode::Normal, GuardInterval::Gi19_256);
        let extended = get_t2_ofdm_parameters(FftSize::Fft32KT2Gi, CarrierMode::Extended, GuardInterval::Gi19_256);
        assert_eq!(normal.nb_active_carriers, 27265);
        assert_eq!(extended.nb_active_carriers, 27841);
        assert_eq!(normal.nb_guard_interval, 2432);
    }
}
