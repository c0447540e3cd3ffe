use std::{
    f64::consts::PI,
    fmt::Debug,
};

use ndarray::{
    Array,
    Array1,
    Dimension,
};

/// A time-delay specification for a wavelet.
///
/// Callers either pin the delay to an explicit value or defer to the
/// wavelet's own default, which may depend on its other parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delay {
    /// Defer to the wavelet's default delay.
    #[default]
    Default,
    /// An explicit delay, taking precedence over any default.
    Explicit(f64),
}

impl Delay {
    pub fn resolve(&self, default: f64) -> f64 {
        match self {
            Delay::Default => default,
            Delay::Explicit(delay) => *delay,
        }
    }
}

impl From<f64> for Delay {
    fn from(value: f64) -> Self {
        Self::Explicit(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("wavelet frequency must be positive: {value}")]
pub struct InvalidFrequency {
    pub value: f64,
}

/// A time-domain source signal.
///
/// Implementors provide the analytic waveform through [`evaluate`] and the
/// delay that shifts it along the time axis. Discretization is shared:
/// [`sample`] turns any wavelet into a finite signal on a regular time grid.
///
/// [`evaluate`]: Wavelet::evaluate
/// [`sample`]: Wavelet::sample
pub trait Wavelet: Debug + Send + Sync + 'static {
    /// The peak frequency of the wavelet. Positive for every implementor.
    fn frequency(&self) -> f64;

    /// The resolved delay: the explicit value if one was given, the
    /// wavelet's default otherwise.
    fn delay(&self) -> f64;

    /// Evaluate the waveform at `time`.
    fn evaluate(&self, time: f64) -> f64;

    /// Evaluate the waveform at every element of `times`.
    fn evaluate_array<D>(&self, times: &Array<f64, D>) -> Array<f64, D>
    where
        D: Dimension,
        Self: Sized,
    {
        times.mapv(|time| self.evaluate(time))
    }

    /// Sample the waveform on the grid `0, dt, 2*dt, ..`, up to but
    /// excluding `duration`.
    ///
    /// Without an explicit `duration` the window is `delay + 1/frequency`,
    /// long enough to cover the support of a decaying waveform with the
    /// default delay. A non-positive `duration` yields an empty signal.
    ///
    /// # Panics
    ///
    /// Panics if `dt` is not positive.
    fn sample(&self, dt: f64, duration: Option<f64>) -> Array1<f64> {
        assert!(dt > 0.0, "sampling interval must be positive: {dt}");
        let duration = duration.unwrap_or_else(|| self.delay() + self.frequency().recip());
        tracing::trace!(dt, duration, "sampling wavelet");

        (0u64..)
            .map(|step| step as f64 * dt)
            .take_while(|time| *time < duration)
            .map(|time| self.evaluate(time))
            .collect()
    }
}

/// The Ricker (Mexican hat) wavelet, a scaled second derivative of a
/// Gaussian:
///
/// `w(t) = A (1 - 2u) e^{-u}` with `u = (π f (t - delay))²`
///
/// Symmetric about its delay, where it peaks at exactly `A`, and decaying
/// to near zero within `1/f` on either side.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RickerWavelet {
    frequency: f64,
    amplitude: f64,
    delay: Delay,
}

impl RickerWavelet {
    pub fn new(frequency: f64, amplitude: f64, delay: Delay) -> Result<Self, InvalidFrequency> {
        if frequency <= 0.0 || frequency.is_nan() {
            return Err(InvalidFrequency { value: frequency });
        }

        Ok(Self {
            frequency,
            amplitude,
            delay,
        })
    }

    /// A unit-amplitude wavelet with the default delay.
    pub fn from_frequency(frequency: f64) -> Result<Self, InvalidFrequency> {
        Self::new(frequency, 1.0, Delay::Default)
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Delaying the peak to `1/f` keeps the leading tail clear of time 0,
    /// so sampling from 0 doesn't truncate the waveform.
    pub fn default_delay(&self) -> f64 {
        self.frequency.recip()
    }
}

impl Wavelet for RickerWavelet {
    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn delay(&self) -> f64 {
        self.delay.resolve(self.default_delay())
    }

    fn evaluate(&self, time: f64) -> f64 {
        let time = time - self.delay();
        let aux = (PI * self.frequency * time).powi(2);
        self.amplitude * (1.0 - 2.0 * aux) * (-aux).exp()
    }
}
