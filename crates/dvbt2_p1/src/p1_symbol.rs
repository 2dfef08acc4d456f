use num::complex::Complex32;
use dvbt2_core::dvbt2_config::{FftSize, PreambleFormat};
use dvbt2_core::dvbt2_error::Dvbt2Error;
use ofdm::ofdm_symbol_synthesiser::{apply_gain, shift_spectrum_one_bin, OfdmSymbolSynthesiser};
use crate::p1_carrier_map::{P1_ACTIVE_CARRIERS, P1_CARRIER_OFFSET, P1_FFT_SIZE, P1_TOTAL_CARRIERS};
use crate::p1_modulation_patterns::{S1_MODULATION_PATTERNS, S2_MODULATION_PATTERNS};
use crate::p1_randomizer::get_p1_randomizer_sequence;

/// Number of samples in the P1 symbol.
pub const P1_LENGTH: usize = 2048;
/// Frequency shifted prefix before the main part of the P1 symbol.
pub const P1_PREFIX_LENGTH: usize = 542;
/// Frequency shifted suffix after the main part of the P1 symbol.
pub const P1_SUFFIX_LENGTH: usize = 482;

/// What the P1 symbol tells the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P1Signalling {
    /// Selects the S1 pattern.
    pub preamble_format: PreambleFormat,
    /// Selects the S2 pattern.
    pub fft_size: FftSize,
    /// Whether the superframe mixes T2 frames with other frame types.
    pub is_mixed: bool,
}

/// Creates the 384 signalling bits in transmission order: S1, S2 then S1 again.
pub fn get_p1_modulation_bits(signalling: P1Signalling) -> [u8; P1_TOTAL_CARRIERS] {
    let s1 = &S1_MODULATION_PATTERNS[signalling.preamble_format.code() as usize];
    let s2_row = 2*signalling.fft_size.code() as usize + signalling.is_mixed as usize;
    let s2 = &S2_MODULATION_PATTERNS[s2_row];

    let mut bits = [0u8; P1_TOTAL_CARRIERS];
    let bytes = s1.iter().chain(s2.iter()).chain(s1.iter());
    for (byte, chunk) in bytes.zip(bits.chunks_exact_mut(8)) {
        for (n, bit) in (0..8).rev().zip(chunk.iter_mut()) {
            *bit = (byte >> n) & 1;
        }
    }
    bits
}

/// Differentially encodes the signalling bits and scrambles them into carrier amplitudes of ±1.
///
/// The encoder starts from a reference of +1 which is dropped from the output,
/// every 1 bit flips the phase of the next carrier.
pub fn get_p1_carrier_sequence(bits: &[u8; P1_TOTAL_CARRIERS]) -> [f32; P1_TOTAL_CARRIERS] {
    let randomizer = get_p1_randomizer_sequence();
    let mut sequence = [0.0f32; P1_TOTAL_CARRIERS];
    let mut phase: i8 = 1;
    for (value, (bit, scramble)) in sequence.iter_mut().zip(bits.iter().zip(randomizer.iter())) {
        if *bit == 1 {
            phase = -phase;
        }
        *value = (phase*scramble) as f32;
    }
    sequence
}

/// Creates the 1024 bin spectrum of the P1 symbol with DC at bin 512.
pub fn get_p1_symbol_fft(spectrum: &mut [Complex32], signalling: P1Signalling) {
    assert!(spectrum.len() == P1_FFT_SIZE, "P1 spectrum must have {} bins but got {}", P1_FFT_SIZE, spectrum.len());

    let bits = get_p1_modulation_bits(signalling);
    let sequence = get_p1_carrier_sequence(&bits);

    for value in spectrum.iter_mut() {
        *value = Complex32::default();
    }
    for (carrier, amplitude) in P1_ACTIVE_CARRIERS.iter().zip(sequence.iter()) {
        spectrum[carrier + P1_CARRIER_OFFSET] = Complex32::new(*amplitude, 0.0);
    }
}

/// The two time domain waveforms the P1 symbol is assembled from.
///
/// # Diagram
/// ```text
/// | P1                                     |
/// | C            | A          | B          |
/// | shifted[..542] | time     | shifted[542..] |
/// | 542          | 1024       | 482        |
/// ```
/// `shifted` is `time` moved up by one FFT bin in frequency.
pub struct P1Symbol {
    time: Vec<Complex32>,
    time_shifted: Vec<Complex32>,
}

impl P1Symbol {
    pub fn new(signalling: P1Signalling, window: &[f32]) -> Result<Self, Dvbt2Error> {
        if window.len() != P1_FFT_SIZE {
            return Err(Dvbt2Error::WindowLength { expected: P1_FFT_SIZE, got: window.len() });
        }

        let mut spectrum = vec![Complex32::default(); P1_FFT_SIZE];
        let mut spectrum_shifted = vec![Complex32::default(); P1_FFT_SIZE];
        get_p1_symbol_fft(&mut spectrum, signalling);
        shift_spectrum_one_bin(&spectrum, &mut spectrum_shifted);

        let mut synthesiser = OfdmSymbolSynthesiser::new(window);
        let mut time = vec![Complex32::default(); P1_FFT_SIZE];
        let mut time_shifted = vec![Complex32::default(); P1_FFT_SIZE];
        synthesiser.synthesise(&spectrum, &mut time);
        synthesiser.synthesise(&spectrum_shifted, &mut time_shifted);

        let gain = 1.0 / (P1_TOTAL_CARRIERS as f32).sqrt();
        apply_gain(&mut time, gain);
        apply_gain(&mut time_shifted, gain);

        Ok(Self { time, time_shifted })
    }

    pub fn time(&self) -> &[Complex32] {
        &self.time
    }

    pub fn time_shifted(&self) -> &[Complex32] {
        &self.time_shifted
    }

    /// Writes the 2048 samples of the P1 symbol.
    pub fn write_symbol(&self, out: &mut [Complex32]) {
        assert!(out.len() == P1_LENGTH, "P1 symbol needs {} samples but got {}", P1_LENGTH, out.len());
        let (prefix, remain) = out.split_at_mut(P1_PREFIX_LENGTH);
        let (main, suffix) = remain.split_at_mut(P1_FFT_SIZE);
        prefix.copy_from_slice(&self.time_shifted[..P1_PREFIX_LENGTH]);
        main.copy_from_slice(&self.time);
        suffix.copy_from_slice(&self.time_shifted[P1_PREFIX_LENGTH..]);
    }
}
