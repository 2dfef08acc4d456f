use std::sync::Arc;
use num::complex::Complex32;
use rustfft::{FftPlanner, Fft};
use itertools::izip;

/// Turns a frequency domain symbol into its time domain waveform.
///
/// The spectrum is weighted by a window and swapped into FFT order before the inverse transform,
/// so bin `N/2` of the input ends up as the DC bin of the transform.
/// The transform is not normalised, callers scale the output themselves.
pub struct OfdmSymbolSynthesiser {
    ifft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    scratch: Vec<Complex32>,
}

impl OfdmSymbolSynthesiser {
    /// The FFT size is the length of the window.
    pub fn new(window: &[f32]) -> Self {
        let nb_fft = window.len();
        assert!(nb_fft > 0 && nb_fft % 2 == 0, "FFT size must be even and non zero but got {}", nb_fft);

        let mut planner = FftPlanner::new();
        let ifft = planner.plan_fft_inverse(nb_fft);
        let scratch = vec![Complex32::default(); ifft.get_inplace_scratch_len()];

        Self {
            ifft,
            window: window.to_vec(),
            scratch,
        }
    }

    pub fn nb_fft(&self) -> usize {
        self.window.len()
    }

    /// Writes the time domain waveform of the spectrum into the output buffer.
    pub fn synthesise(&mut self, spectrum: &[Complex32], time: &mut [Complex32]) {
        let nb_fft = self.nb_fft();
        assert!(spectrum.len() == nb_fft, "Spectrum has {} bins but FFT size is {}", spectrum.len(), nb_fft);
        assert!(time.len() == nb_fft, "Output has {} samples but FFT size is {}", time.len(), nb_fft);

        // Upper half of the spectrum goes to the front of the FFT buffer
        let nb_half = nb_fft/2;
        for (i, (x, w)) in izip!(spectrum.iter(), self.window.iter()).enumerate() {
            time[(i+nb_half) % nb_fft] = *x * *w;
        }
        self.ifft.process_with_scratch(time, &mut self.scratch);
    }
}

/// Moves every bin of the spectrum up by one, wrapping the last bin around to the start.
pub fn shift_spectrum_one_bin(x: &[Complex32], y: &mut [Complex32]) {
    assert!(x.len() == y.len(), "Spectra have mismatching lengths {} != {}", x.len(), y.len());
    let length = x.len();
    y[1..].copy_from_slice(&x[..length-1]);
    y[0] = x[length-1];
}

/// Multiplies every sample by a real gain.
pub fn apply_gain(x: &mut [Complex32], gain: f32) {
    for value in x.iter_mut() {
        *value *= gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_bin_becomes_dc() {
        let nb_fft = 16;
        let mut synthesiser = OfdmSymbolSynthesiser::new(&vec![1.0; nb_fft]);
        let mut spectrum = vec![Complex32::default(); nb_fft];
        spectrum[nb_fft/2] = Complex32::new(1.0, 0.0);
        let mut time = vec![Complex32::default(); nb_fft];
        synthesiser.synthesise(&spectrum, &mut time);
        for x in &time {
            assert!((x.re - 1.0).abs() < 1e-6);
            assert!(x.im.abs() < 1e-6);
        }
    }

    #[test]
    fn window_weights_each_bin() {
        let nb_fft = 8;
        let mut window = vec![1.0; nb_fft];
        window[nb_fft/2] = 0.0;
        let mut synthesiser = OfdmSymbolSynthesiser::new(&window);
        let mut spectrum = vec![Complex32::default(); nb_fft];
        spectrum[nb_fft/2] = Complex32::new(1.0, 0.0);
        let mut time = vec![Complex32::new(3.0, 3.0); nb_fft];
        synthesiser.synthesise(&spectrum, &mut time);
        assert!(time.iter().all(|x| x.norm() < 1e-6));
    }

    #[test]
    fn shift_wraps_last_bin() {
        let x: Vec<Complex32> = (0..4).map(|i| Complex32::new(i as f32, 0.0)).collect();
        let mut y = vec![Complex32::default(); 4];
        shift_spectrum_one_bin(&x, &mut y);
        let re: Vec<f32> = y.iter().map(|v| v.re).collect();
        assert_eq!(re, vec![3.0, 0.0, 1.0, 2.0]);
    }
}
