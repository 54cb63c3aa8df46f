/// The outcome of a bounded fixed-point iteration. `value` is the last iterate, which is the best
/// available estimate even when `converged` is false.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedPoint {
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Iterates x = g(x) starting at `x0` until two successive iterates differ by less than `tol` or
/// `max_iter` iterations have been performed. The iteration also stops as soon as an iterate is
/// no longer finite, in which case the non-finite value is returned unconverged so the caller can
/// decide how to treat the divergence.
pub fn fixed_point<F>(g: F, x0: f64, tol: f64, max_iter: usize) -> FixedPoint
where
    F: Fn(f64) -> f64,
{
    let mut x = x0;
    let mut iterations = 0;

    while iterations < max_iter {
        let next = g(x);
        iterations += 1;

        if !next.is_finite() {
            return FixedPoint {
                value: next,
                iterations,
                converged: false,
            };
        }

        let diff = (next - x).abs();
        x = next;
        if diff < tol {
            return FixedPoint {
                value: x,
                iterations,
                converged: true,
            };
        }
    }

    FixedPoint {
        value: x,
        iterations,
        converged: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::prelude::*;
    use test_case::test_case;

    #[test]
    fn test_cosine_fixed_point() {
        let result = fixed_point(f64::cos, 1.0, 1e-12, 1000);
        assert!(result.converged);
        assert_relative_eq!(0.7390851332151607, result.value, epsilon = 1e-10);
    }

    #[test]
    fn test_oscillation_hits_cap() {
        let result = fixed_point(|x| -x, 1.0, 1e-6, 1000);
        assert!(!result.converged);
        assert_eq!(1000, result.iterations);
        assert_relative_eq!(1.0, result.value.abs());
    }

    #[test]
    fn test_divergence_stops_early() {
        let result = fixed_point(|x| x * x, 10.0, 1e-6, 1000);
        assert!(!result.converged);
        assert!(!result.value.is_finite());
        assert!(result.iterations < 1000);
    }

    #[test_case(0.05, 0.058082)]
    #[test_case(0.10, 0.125743)]
    #[test_case(0.15, 0.202682)]
    #[test_case(0.20, 0.290308)]
    #[test_case(0.25, 0.391343)]
    fn test_camber_inflection_table(xmc: f64, e: f64) {
        let result = fixed_point(|r| xmc + r * (r / 3.0).sqrt(), 0.1, 1e-6, 1000);
        assert!(result.converged);
        assert_relative_eq!(e, result.value, epsilon = 1e-5);
    }

    #[test]
    fn test_camber_inflection_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let xmc: f64 = rng.gen_range(0.01..0.4);
            let result = fixed_point(|r| xmc + r * (r / 3.0).sqrt(), 0.1, 1e-10, 1000);
            assert!(result.converged);

            let r = result.value;
            assert_relative_eq!(xmc, r * (1.0 - (r / 3.0).sqrt()), epsilon = 1e-8);
        }
    }
}
