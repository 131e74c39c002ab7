use super::Scale;
use num_traits::Float;

/// Linear scale: affine mapping between a numeric domain and normalized `[0, 1]` range.
///
/// # Type Parameters
///
/// - `D`: Domain type (the data values, typically `f32` or `f64`)
/// - `N`: Normalized type (typically `f32` or `f64`, represents `[0, 1]` range)
///
/// # Domain Ordering
///
/// Domain values are kept exactly as set (no implicit sorting), so both
/// normal and reversed axes are supported:
/// - Normal: `new(0.0, 100.0)` - larger values at the right/top
/// - Reversed: `new(100.0, 0.0)` - larger values at the left/bottom
///
/// # Examples
///
/// ```rust
/// use aksel_brush::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(0.0, 100.0);
/// assert_eq!(scale.denormalize_opt(0.25), Some(25.0));
///
/// // Values outside [0, 1] are not clamped
/// assert_eq!(scale.denormalize_opt(1.5), Some(150.0));
/// assert_eq!(scale.denormalize_opt(-0.5), Some(-50.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Linear<D, N = f64>
where
    D: Float,
    N: Float,
{
    min: D,
    max: D,
    _phantom: std::marker::PhantomData<N>,
}

impl<D, N> Linear<D, N>
where
    D: Float,
    N: Float,
{
    /// Creates a new linear scale with the given domain range.
    ///
    /// ```
    /// use aksel_brush::{Scale, scale::Linear};
    ///
    /// let scale = Linear::<f64, f64>::new(0.0, 100.0);
    /// assert_eq!(scale.domain(), (&0.0, &100.0));
    /// ```
    pub fn new(min: D, max: D) -> Self {
        Self {
            min,
            max,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<D, N> Scale for Linear<D, N>
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
        let span_n: N = N::from(self.max - self.min)?;
        let scaled_d: D = D::from(t * span_n)?;
        Some(self.min + scaled_d)
    }
}
