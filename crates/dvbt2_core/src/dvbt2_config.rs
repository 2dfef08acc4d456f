use serde::{Deserialize, Serialize};
use crate::dvbt2_error::Dvbt2Error;

// Each enum carries an integer code for hosts that configure blocks with plain integers.
// FFT size and preamble format codes also index the P1 signalling tables.
macro_rules! impl_config_code {
    ($name:ident, $parameter:literal, { $($variant:ident = $code:literal),+ $(,)? }) => {
        impl $name {
            /// Integer code of this setting.
            pub fn code(self) -> u32 {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl TryFrom<u32> for $name {
            type Error = Dvbt2Error;
            fn try_from(code: u32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(Dvbt2Error::UnknownCode { parameter: $parameter, code }),
                }
            }
        }
    };
}

/// Size of the forward error correction frame that one baseband frame is sized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameSize {
    /// 16200 bit LDPC codeword.
    Short,
    /// 64800 bit LDPC codeword.
    Normal,
}
impl_config_code!(FrameSize, "frame size", { Short = 0, Normal = 1 });

/// LDPC code rate.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeRate {
    #[serde(rename = "1/2")] R1_2,
    #[serde(rename = "3/5")] R3_5,
    #[serde(rename = "2/3")] R2_3,
    #[serde(rename = "3/4")] R3_4,
    #[serde(rename = "4/5")] R4_5,
    #[serde(rename = "5/6")] R5_6,
    #[serde(rename = "1/3")] R1_3,
    #[serde(rename = "2/5")] R2_5,
}
impl_config_code!(CodeRate, "code rate", {
    R1_2 = 0, R3_5 = 1, R2_3 = 2, R3_4 = 3, R4_5 = 4, R5_6 = 5, R1_3 = 6, R2_5 = 7,
});

impl CodeRate {
    pub const ALL: [CodeRate; 8] = [
        CodeRate::R1_2, CodeRate::R3_5, CodeRate::R2_3, CodeRate::R3_4,
        CodeRate::R4_5, CodeRate::R5_6, CodeRate::R1_3, CodeRate::R2_5,
    ];
}

/// How transport stream packets are carried in the baseband frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Sync bytes are replaced by the CRC-8 of the previous packet.
    Normal,
    /// Sync bytes are removed from the data field.
    HighEfficiency,
}
impl_config_code!(InputMode, "input mode", { Normal = 0, HighEfficiency = 1 });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InbandSignalling {
    Off,
    /// In-band type B, carries the transport stream rate in the first frame of each group.
    TypeB,
}
impl_config_code!(InbandSignalling, "in-band signalling", { Off = 0, TypeB = 1 });

/// Whether the extended carrier mode is used for the larger FFT sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierMode {
    Normal,
    Extended,
}
impl_config_code!(CarrierMode, "carrier mode", { Normal = 0, Extended = 1 });

/// FFT size of the data symbols.
/// The `T2Gi` variants are the same FFT size signalled with the T2 specific guard intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FftSize {
    #[serde(rename = "2k")] Fft2K,
    #[serde(rename = "8k")] Fft8K,
    #[serde(rename = "4k")] Fft4K,
    #[serde(rename = "1k")] Fft1K,
    #[serde(rename = "16k")] Fft16K,
    #[serde(rename = "32k")] Fft32K,
    #[serde(rename = "8k_t2gi")] Fft8KT2Gi,
    #[serde(rename = "32k_t2gi")] Fft32KT2Gi,
}
impl_config_code!(FftSize, "fft size", {
    Fft2K = 0, Fft8K = 1, Fft4K = 2, Fft1K = 3, Fft16K = 4, Fft32K = 5, Fft8KT2Gi = 6, Fft32KT2Gi = 7,
});

impl FftSize {
    pub const ALL: [FftSize; 8] = [
        FftSize::Fft2K, FftSize::Fft8K, FftSize::Fft4K, FftSize::Fft1K,
        FftSize::Fft16K, FftSize::Fft32K, FftSize::Fft8KT2Gi, FftSize::Fft32KT2Gi,
    ];
}

/// Guard interval as a fraction of the FFT size.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardInterval {
    #[serde(rename = "1/32")] Gi1_32,
    #[serde(rename = "1/16")] Gi1_16,
    #[serde(rename = "1/8")] Gi1_8,
    #[serde(rename = "1/4")] Gi1_4,
    #[serde(rename = "1/128")] Gi1_128,
    #[serde(rename = "19/128")] Gi19_128,
    #[serde(rename = "19/256")] Gi19_256,
}
impl_config_code!(GuardInterval, "guard interval", {
    Gi1_32 = 0, Gi1_16 = 1, Gi1_8 = 2, Gi1_4 = 3, Gi1_128 = 4, Gi19_128 = 5, Gi19_256 = 6,
});

impl GuardInterval {
    /// Returns the guard interval as (numerator, denominator).
    pub fn fraction(self) -> (usize, usize) {
        match self {
            GuardInterval::Gi1_32   => (1, 32),
            GuardInterval::Gi1_16   => (1, 16),
            GuardInterval::Gi1_8    => (1, 8),
            GuardInterval::Gi1_4    => (1, 4),
            GuardInterval::Gi1_128  => (1, 128),
            GuardInterval::Gi19_128 => (19, 128),
            GuardInterval::Gi19_256 => (19, 256),
        }
    }
}

/// Preamble format signalled in the S1 field of the P1 symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreambleFormat {
    #[default]
    T2Siso,
    T2Miso,
    NonT2,
    T2LiteSiso,
    T2LiteMiso,
}
impl_config_code!(PreambleFormat, "preamble format", {
    T2Siso = 0, T2Miso = 1, NonT2 = 2, T2LiteSiso = 3, T2LiteMiso = 4,
});
