//! Result containers for the numerical strategies.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Finite-difference estimates at one step size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FdGreeks {
    /// Forward-difference Delta.
    pub delta: f64,
    /// Second-difference Gamma.
    pub gamma: f64,
}

/// Complex-step estimates at one step size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CsGreeks {
    /// Im C(S + ih) / h.
    pub delta: f64,
    /// Real-part Gamma, −2(Re C(S + ih) − C(S)) / h². Cancellation-prone.
    pub gamma_real: f64,
    /// 45° Gamma, Im[C(S + hω) + C(S − hω)] / h².
    pub gamma_45: f64,
}
