//! Generic Black-Scholes European call pricer.
//!
//! The same formula is evaluated in every [`PricingScalar`] domain: real for
//! bump-and-revalue, complex for the complex-step method and dual for
//! forward-mode AD. The only domain-specific step is the normal CDF,
//! dispatched through [`PricingScalar::norm_cdf_t`].
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = DF·(F·Φ(d₁) − K·Φ(d₂))
//!
//! Where:
//! - DF = e^(−rT)
//! - F = S·e^((r−q)T)
//! - d₁ = (ln(F/K) + σ²T/2) / (σ√T)
//! - d₂ = d₁ − σ√T
//!
//! The formula is branch-free so that every domain traces the same path.
//! Inputs are not validated; σ√T = 0 yields non-finite output.

use pricer_core::traits::PricingScalar;

/// Black-Scholes call on a dividend-paying underlying.
///
/// # Type Parameters
/// * `T` - Scalar domain (`f64`, `Complex64`, `Dual64`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholesCall;
///
/// let call = BlackScholesCall::new(100.0_f64, 100.0, 0.05, 0.0, 0.2, 1.0);
/// assert!((call.price() - 10.450583572185579).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholesCall<T: PricingScalar> {
    spot: T,
    strike: T,
    rate: T,
    dividend_yield: T,
    volatility: T,
    expiry: T,
}

impl<T: PricingScalar> BlackScholesCall<T> {
    /// Creates a call from parameters already lifted into domain `T`.
    ///
    /// # Arguments
    /// * `spot` - Spot price S
    /// * `strike` - Strike price K
    /// * `rate` - Risk-free rate r
    /// * `dividend_yield` - Dividend/carry yield q
    /// * `volatility` - Volatility σ
    /// * `expiry` - Time to maturity T
    pub fn new(spot: T, strike: T, rate: T, dividend_yield: T, volatility: T, expiry: T) -> Self {
        Self {
            spot,
            strike,
            rate,
            dividend_yield,
            volatility,
            expiry,
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Discount factor e^(−rT).
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.expiry).exp()
    }

    /// Forward price S·e^((r−q)T).
    #[inline]
    pub fn forward(&self) -> T {
        self.spot * ((self.rate - self.dividend_yield) * self.expiry).exp()
    }

    /// Total volatility σ√T.
    #[inline]
    pub fn vol_sqrt_t(&self) -> T {
        self.volatility * self.expiry.sqrt()
    }

    /// d₁ = (ln(F/K) + σ²T/2) / (σ√T)
    #[inline]
    pub fn d1(&self) -> T {
        let half = T::from_real(0.5);
        let variance = self.volatility * self.volatility * self.expiry;
        ((self.forward() / self.strike).ln() + half * variance) / self.vol_sqrt_t()
    }

    /// d₂ = d₁ − σ√T
    #[inline]
    pub fn d2(&self) -> T {
        self.d1() - self.vol_sqrt_t()
    }

    /// Computes the call price DF·(F·Φ_t(d₁) − K·Φ_t(d₂)).
    ///
    /// # Returns
    /// The price in domain `T`. For a complex spot S + ih the imaginary part
    /// carries h·∂C/∂S to first order; for a dual spot the dual part is ∂C/∂S.
    #[inline]
    pub fn price(&self) -> T {
        let d1 = self.d1();
        let d2 = d1 - self.vol_sqrt_t();
        self.discount_factor()
            * (self.forward() * d1.norm_cdf_t() - self.strike * d2.norm_cdf_t())
    }
}

/// Prices a European call in domain `T`.
///
/// Convenience wrapper over [`BlackScholesCall::price`].
///
/// # Examples
/// ```
/// use num_complex::Complex64;
/// use pricer_models::analytical::call_price;
///
/// let real = call_price(100.0_f64, 100.0, 0.0, 0.0, 0.2, 1.0);
/// let complex = call_price(
///     Complex64::new(100.0, 1e-20),
///     Complex64::new(100.0, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(0.0, 0.0),
///     Complex64::new(0.2, 0.0),
///     Complex64::new(1.0, 0.0),
/// );
/// assert!((complex.re - real).abs() < 1e-12);
/// assert!((complex.im / 1e-20 - 0.5398278372770290).abs() < 1e-12);
/// ```
#[inline]
pub fn call_price<T: PricingScalar>(
    spot: T,
    strike: T,
    rate: T,
    dividend_yield: T,
    volatility: T,
    expiry: T,
) -> T {
    BlackScholesCall::new(spot, strike, rate, dividend_yield, volatility, expiry).price()
}
