//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Distribution primitives are reachable via absolute path.
#[test]
fn test_distributions_module_exports() {
    use pricer_core::math::distributions::norm_cdf;
    use pricer_core::math::distributions::norm_log_pdf;
    use pricer_core::math::distributions::norm_pdf;

    let _ = norm_cdf(0.5);
    let _ = norm_pdf(0.5);
    let _ = norm_log_pdf(0.5);
}

/// The scalar trait works generically across domains from outside the crate.
#[test]
fn test_traits_module_exports() {
    use pricer_core::traits::scalar::PricingScalar as ScalarFromModule;
    use pricer_core::traits::PricingScalar;
    use pricer_core::types::ComplexNumber;

    fn generic_sqrt<T: ScalarFromModule>(x: T) -> T {
        x.sqrt()
    }

    assert_eq!(generic_sqrt(4.0_f64), 2.0);
    let z = generic_sqrt(ComplexNumber::new(4.0, 0.0));
    assert_eq!(z.re, 2.0);
    assert_eq!(z.im, 0.0);
    assert_eq!(PricingScalar::real(z), 2.0);
}
