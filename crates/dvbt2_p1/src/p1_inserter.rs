use num::complex::Complex32;
use itertools::izip;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use dvbt2_core::dvbt2_config::{CarrierMode, FftSize, GuardInterval, PreambleFormat};
use dvbt2_core::dvbt2_error::Dvbt2Error;
use dvbt2_core::dvbt2_parameters::get_t2_ofdm_parameters;
use ofdm::ofdm_parameters::OfdmParameters;
use stream::stream_block::{StreamBlock, WorkResult};
use crate::p1_carrier_map::P1_FFT_SIZE;
use crate::p1_symbol::{P1Signalling, P1Symbol, P1_LENGTH};

fn default_window() -> Vec<f32> {
    vec![1.0; P1_FFT_SIZE]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct P1InserterConfig {
    pub carrier_mode: CarrierMode,
    pub fft_size: FftSize,
    pub guard_interval: GuardInterval,
    /// Number of data symbols in each T2 frame, the P2 symbols are added on top.
    pub nb_data_symbols: usize,
    /// Weights applied to each of the 1024 P1 bins before the inverse FFT.
    #[serde(default = "default_window")]
    pub window: Vec<f32>,
    #[serde(default)]
    pub preamble_format: PreambleFormat,
    #[serde(default)]
    pub is_mixed: bool,
}

impl Default for P1InserterConfig {
    fn default() -> Self {
        Self {
            carrier_mode: CarrierMode::Normal,
            fft_size: FftSize::Fft2K,
            guard_interval: GuardInterval::Gi1_8,
            nb_data_symbols: 1,
            window: default_window(),
            preamble_format: PreambleFormat::default(),
            is_mixed: false,
        }
    }
}

/// Inserts a P1 symbol in front of every T2 frame and normalises the frame's samples.
///
/// # Diagram
/// ```text
/// | Output frame                                     |
/// | P1   | P2*N_P2 + DATA*nds                        |
/// | 2048 | (nds+N_P2)*(fft+gi) scaled by 5/sqrt(27*C_PS) |
/// ```
pub struct P1Inserter {
    config: P1InserterConfig,
    params: OfdmParameters,
    normalization: f32,
    p1_symbol: P1Symbol,
    /// The number of frames written.
    pub total_frames: u64,
}

impl P1Inserter {
    pub fn new(config: P1InserterConfig) -> Result<Self, Dvbt2Error> {
        if config.nb_data_symbols == 0 {
            return Err(Dvbt2Error::InvalidConfiguration("frame needs at least one data symbol".into()));
        }
        if config.window.len() != P1_FFT_SIZE {
            return Err(Dvbt2Error::WindowLength { expected: P1_FFT_SIZE, got: config.window.len() });
        }

        let t2 = get_t2_ofdm_parameters(config.fft_size, config.carrier_mode, config.guard_interval);
        let params = OfdmParameters::new(
            config.nb_data_symbols + t2.nb_p2_symbols,
            P1_LENGTH,
            t2.nb_fft,
            t2.nb_guard_interval,
        );
        let normalization = 5.0 / (27.0 * t2.nb_active_carriers as f32).sqrt();

        let signalling = P1Signalling {
            preamble_format: config.preamble_format,
            fft_size: config.fft_size,
            is_mixed: config.is_mixed,
        };
        let p1_symbol = P1Symbol::new(signalling, &config.window)?;

        debug!(
            frame_items = params.nb_input_samples,
            insertion_items = params.nb_output_samples,
            normalization,
            fft_size = ?config.fft_size,
            "created P1 inserter"
        );

        Ok(Self {
            config,
            params,
            normalization,
            p1_symbol,
            total_frames: 0,
        })
    }

    pub fn config(&self) -> &P1InserterConfig {
        &self.config
    }

    pub fn params(&self) -> &OfdmParameters {
        &self.params
    }

    /// Number of input samples in each frame.
    pub fn frame_items(&self) -> usize {
        self.params.nb_input_samples
    }

    /// Number of output samples in each frame including the P1 symbol.
    pub fn insertion_items(&self) -> usize {
        self.params.nb_output_samples
    }

    pub fn normalization(&self) -> f32 {
        self.normalization
    }

    pub fn p1_time(&self) -> &[Complex32] {
        self.p1_symbol.time()
    }

    pub fn p1_time_shifted(&self) -> &[Complex32] {
        self.p1_symbol.time_shifted()
    }
}

impl StreamBlock for P1Inserter {
    type Input = Complex32;
    type Output = Complex32;

    fn output_multiple(&self) -> usize {
        self.params.nb_output_samples
    }

    fn forecast(&self, nb_output: usize) -> usize {
        self.params.frames_in_output(nb_output) * self.params.nb_input_samples
    }

    fn general_work(&mut self, input: &[Complex32], output: &mut [Complex32]) -> WorkResult {
        let nb_frame_in = self.params.nb_input_samples;
        let nb_frame_out = self.params.nb_output_samples;
        assert!(output.len() % nb_frame_out == 0, "Output of {} samples is not a multiple of {}", output.len(), nb_frame_out);
        let nb_frames = output.len() / nb_frame_out;
        assert!(input.len() >= nb_frames*nb_frame_in, "Need {} input samples for {} frames but got {}", nb_frames*nb_frame_in, nb_frames, input.len());

        for (frame_in, frame_out) in izip!(input.chunks_exact(nb_frame_in), output.chunks_exact_mut(nb_frame_out)) {
            let (preamble, data) = frame_out.split_at_mut(P1_LENGTH);
            self.p1_symbol.write_symbol(preamble);
            for (y, x) in izip!(data.iter_mut(), frame_in.iter()) {
                *y = *x * self.normalization;
            }
            self.total_frames += 1;
        }
        trace!(nb_frames, total_frames = self.total_frames, "inserted P1 symbols");

        WorkResult {
            consumed: nb_frames*nb_frame_in,
            produced: nb_frames*nb_frame_out,
        }
    }
}
