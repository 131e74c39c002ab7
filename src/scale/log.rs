use super::Scale;
use num_traits::Float;

/// Logarithmic scale: maps a positive numeric domain to normalized `[0, 1]` range
/// through a logarithm.
///
/// Equal distances in normalized space represent equal **ratios** in the
/// domain, so a brush dragged across `1 → 10` covers the same pixels as one
/// dragged across `10 → 100`.
///
/// Both domain endpoints must be greater than zero.
///
/// # Examples
///
/// ```rust
/// use aksel_brush::{Scale, scale::Logarithmic};
///
/// let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 1000.0);
///
/// let back = scale.denormalize_opt(2.0 / 3.0).unwrap();
/// assert!((back - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logarithmic<D, N = f64>
where
    D: Float,
    N: Float,
{
    base: D,
    min: D,
    max: D,
    _phantom: std::marker::PhantomData<N>,
}

impl<D, N> Logarithmic<D, N>
where
    D: Float,
    N: Float,
{
    /// Creates a new logarithmic scale with the given base and domain range.
    pub fn new(base: D, min: D, max: D) -> Self {
        Self {
            base,
            min,
            max,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<D, N> Scale for Logarithmic<D, N>
where
    D: Float,
    N: Float,
{
    type Domain = D;
    type Normalized = N;

    fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    fn denormalize_opt(&self, t: N) -> Option<D> {
        let log_min = self.min.log(self.base);
        let span_n: N = N::from(self.max.log(self.base) - log_min)?;
        let scaled_d: D = D::from(t * span_n)?;

        Some(self.base.powf(log_min + scaled_d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_denormalize_base10() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 1000.0);

        assert_eq!(scale.denormalize_opt(0.0), Some(1.0));
        let mid = scale.denormalize_opt(1.0 / 3.0).unwrap();
        assert!((mid - 10.0).abs() < 1e-9);
        let top = scale.denormalize_opt(1.0).unwrap();
        assert!((top - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_denormalize() {
        let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);

        let value = scale.denormalize_opt(0.5).unwrap();
        assert!((value - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_base_e_matches_base_10() {
        let e = std::f64::consts::E;
        let natural = Logarithmic::<f64, f64>::new(e, 1.0, 100.0);
        let decimal = Logarithmic::<f64, f64>::new(10.0, 1.0, 100.0);

        let a = natural.denormalize_opt(0.25).unwrap();
        let b = decimal.denormalize_opt(0.25).unwrap();
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_log_mixed_types() {
        let scale = Logarithmic::<f64, f32>::new(10.0, 1.0, 100.0);

        let value = scale.denormalize_opt(1.0f32).unwrap();
        assert!((value - 100.0).abs() < 1e-3);
        assert_eq!(scale.domain(), (&1.0, &100.0));
    }
}
