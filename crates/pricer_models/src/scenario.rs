//! Market scenarios for Greeks validation runs.
//!
//! A [`Scenario`] is the immutable tuple {S, K, r, q, σ, T} consumed by every
//! Greek-extraction strategy. [`PresetScenario`] names the fixed scenario
//! table used by the validation study.

use std::fmt;
use std::str::FromStr;

use pricer_core::traits::PricingScalar;

use crate::analytical::error::AnalyticalError;
use crate::analytical::BlackScholesCall;

/// Volatility-time product below which the analytic Greeks use their
/// discontinuous expiry limit.
pub const DEGENERATE_VOL_TIME: f64 = 1e-15;

/// Immutable market scenario for a European call.
///
/// Created once per comparison run and never mutated. All fields are
/// plain reals; [`Scenario::lift`] and [`Scenario::lift_with_spot`] carry them
/// into another numeric domain for the generic pricer.
///
/// # Examples
/// ```
/// use pricer_models::scenario::Scenario;
///
/// let scenario = Scenario::new(100.0, 100.0, 0.0, 0.0, 0.2, 1.0);
/// assert_eq!(scenario.spot(), 100.0);
/// assert!(scenario.validate().is_ok());
/// assert!(!scenario.is_degenerate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
    expiry: f64,
}

impl Scenario {
    /// Creates a scenario without validation.
    ///
    /// # Arguments
    /// * `spot` - Spot price S
    /// * `strike` - Strike price K
    /// * `rate` - Continuously compounded risk-free rate r
    /// * `dividend_yield` - Continuous dividend/carry yield q
    /// * `volatility` - Lognormal volatility σ
    /// * `expiry` - Time to maturity T in years
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        expiry: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            dividend_yield,
            volatility,
            expiry,
        }
    }

    /// Returns the spot price S.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend/carry yield q.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time to maturity T.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Forward price F = S·exp((r − q)·T).
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * ((self.rate - self.dividend_yield) * self.expiry).exp()
    }

    /// Dividend discount factor exp(−q·T).
    #[inline]
    pub fn dividend_discount(&self) -> f64 {
        (-self.dividend_yield * self.expiry).exp()
    }

    /// Total volatility σ·√max(T, 0).
    #[inline]
    pub fn vol_sqrt_t(&self) -> f64 {
        self.volatility * self.expiry.max(0.0).sqrt()
    }

    /// True when σ·√T is effectively zero and Greeks take their expiry limit.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vol_sqrt_t() < DEGENERATE_VOL_TIME
    }

    /// Lifts every parameter into domain `T` with zero perturbation.
    pub fn lift<T: PricingScalar>(&self) -> BlackScholesCall<T> {
        self.lift_with_spot(T::from_real(self.spot))
    }

    /// Lifts the scenario into domain `T`, replacing the spot with `spot`.
    ///
    /// This is how the complex-step and dual strategies perturb exactly one
    /// input while every other input carries a zero imaginary/dual part.
    pub fn lift_with_spot<T: PricingScalar>(&self, spot: T) -> BlackScholesCall<T> {
        BlackScholesCall::new(
            spot,
            T::from_real(self.strike),
            T::from_real(self.rate),
            T::from_real(self.dividend_yield),
            T::from_real(self.volatility),
            T::from_real(self.expiry),
        )
    }

    /// Opt-in validation for callers that want to reject ill-posed inputs.
    ///
    /// The numeric core never calls this. It checks that S, K, σ and T are
    /// strictly positive and finite, and that r and q are finite.
    ///
    /// # Errors
    /// The first offending parameter, as an [`AnalyticalError`].
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(AnalyticalError::InvalidSpot { spot: self.spot });
        }
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(AnalyticalError::InvalidStrike {
                strike: self.strike,
            });
        }
        if !(self.volatility.is_finite() && self.volatility > 0.0) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        if !(self.expiry.is_finite() && self.expiry > 0.0) {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: self.expiry,
            });
        }
        if !self.rate.is_finite() {
            return Err(AnalyticalError::NonFiniteRate {
                name: "rate",
                value: self.rate,
            });
        }
        if !self.dividend_yield.is_finite() {
            return Err(AnalyticalError::NonFiniteRate {
                name: "dividend_yield",
                value: self.dividend_yield,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S={}, K={}, r={}, q={}, σ={}, T={}",
            self.spot, self.strike, self.rate, self.dividend_yield, self.volatility, self.expiry
        )
    }
}

/// Fixed scenario table of the validation study.
///
/// # Examples
/// ```
/// use pricer_models::scenario::PresetScenario;
///
/// let preset: PresetScenario = "atm-reference".parse().unwrap();
/// assert_eq!(preset, PresetScenario::AtmReference);
/// assert_eq!(preset.scenario().volatility(), 0.20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetScenario {
    /// At-the-money reference: S=K=100, r=q=0, σ=20%, T=1y.
    AtmReference,
    /// Stress case: S=K=100, r=q=0, σ=1%, T=1 day (1/365y).
    NearExpiryLowVol,
}

impl PresetScenario {
    /// All presets in table order.
    pub fn all() -> [Self; 2] {
        [Self::AtmReference, Self::NearExpiryLowVol]
    }

    /// Short identifier used on the command line and in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AtmReference => "atm-reference",
            Self::NearExpiryLowVol => "near-expiry-low-vol",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::AtmReference => "ATM reference",
            Self::NearExpiryLowVol => "Near-expiry, low-vol, ATM",
        }
    }

    /// Default output file stem for this preset's sweep table.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::AtmReference => "bs_fd_vs_complex_scenario1",
            Self::NearExpiryLowVol => "bs_fd_vs_complex_scenario2",
        }
    }

    /// Scenario parameters.
    pub fn scenario(&self) -> Scenario {
        match self {
            Self::AtmReference => Scenario::new(100.0, 100.0, 0.0, 0.0, 0.20, 1.0),
            Self::NearExpiryLowVol => Scenario::new(100.0, 100.0, 0.0, 0.0, 0.01, 1.0 / 365.0),
        }
    }
}

impl FromStr for PresetScenario {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnalyticalError::UnknownScenario {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for PresetScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
