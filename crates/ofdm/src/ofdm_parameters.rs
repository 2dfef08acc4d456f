/// OFDM is orthogonal frequency division multiplexing.
/// Describes the structure of a transmitted OFDM frame.
/// Frame consists of a fixed length preamble followed by N symbols.
/// Each symbol is a guard interval (cyclic prefix) followed by the FFT period.
///
/// # Diagram
/// ```text
/// | Frame                            |
/// | PREAMBLE | SYM*N                 |
/// | PREAMBLE | [PREFIX | FFT]*N      |
/// ```
///
/// The preamble is synthesised by the transmitter, the symbols come from upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfdmParameters {
    /// Number of OFDM symbols in a transmission frame after the preamble.
    pub nb_symbols: usize,
    /// Duration of the preamble.
    pub nb_preamble: usize,
    /// Duration of OFDM symbol.
    pub nb_symbol_period: usize,
    /// Duration of cyclic prefix in OFDM symbol.
    pub nb_cyclic_prefix: usize,
    /// Duration of FFT in OFDM symbol.
    pub nb_fft: usize,
    /// Number of complex samples taken from upstream for each frame.
    pub nb_input_samples: usize,
    /// Number of complex samples for the entire OFDM frame including the preamble.
    pub nb_output_samples: usize,
}

impl OfdmParameters {
    /// Creates all derived parameters for OFDM from a required subset.
    pub fn new(
        nb_symbols: usize,
        nb_preamble: usize,
        nb_fft: usize,
        nb_cyclic_prefix: usize,
    ) -> Self
    {
        assert!(nb_symbols >= 1, "Number of symbols must be at least 1");
        assert!(nb_fft > 0, "FFT resolution must be non zero");
        assert!(nb_cyclic_prefix <= nb_fft, "Cyclic prefix cannot be longer than the FFT");

        let nb_symbol_period = nb_fft + nb_cyclic_prefix;
        let nb_input_samples = nb_symbols*nb_symbol_period;
        let nb_output_samples = nb_preamble + nb_input_samples;

        Self {
            nb_symbols,
            nb_preamble,
            nb_symbol_period,
            nb_cyclic_prefix,
            nb_fft,
            nb_input_samples,
            nb_output_samples,
        }
    }

    /// Number of whole frames that fit in an output buffer.
    pub fn frames_in_output(&self, nb_output: usize) -> usize {
        nb_output / self.nb_output_samples
    }
}
