use super::util::sorted_pair;

/// Band scale: an ordered discrete domain spread over a pixel range.
///
/// Each domain value owns one band of `step` pixels. A band scale cannot
/// invert a pixel to a domain value directly; a brush recovers the *index*
/// of the band a pixel falls into and reads the value from [`Band::domain`].
///
/// The range may be given in either order. `(20.0, 1.0)` places the first
/// domain value at the right/bottom.
///
/// # Examples
///
/// ```rust
/// use aksel_brush::scale::Band;
///
/// let band = Band::new(vec!["a", "b", "c"], (0.0, 300.0));
/// assert_eq!(band.step(), Some(100.0));
/// assert_eq!(band.bandwidth(), 100.0);
///
/// let padded = Band::new(vec!["a", "b", "c"], (0.0, 300.0)).with_padding(0.5, 0.25);
/// assert_eq!(padded.step(), Some(100.0));
/// assert_eq!(padded.bandwidth(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Band<T> {
    domain: Vec<T>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    step: Option<f64>,
}

impl<T> Band<T> {
    /// Creates a band scale without padding. The step is the range span
    /// divided evenly between the domain values.
    pub fn new(domain: Vec<T>, range: (f64, f64)) -> Self {
        let mut band = Self {
            domain,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            step: None,
        };
        band.rescale();
        band
    }

    /// Creates an ordinal scale that exposes no step.
    ///
    /// Inversion treats every band as one pixel wide.
    pub fn unstepped(domain: Vec<T>, range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            step: None,
        }
    }

    /// Sets inner and outer padding as fractions of the step and recomputes it.
    ///
    /// `inner` is clamped to `[0, 1]`, `outer` to `>= 0`.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let (lo, hi) = sorted_pair(self.range.0, self.range.1);
        let slots = self.domain.len() as f64 - self.padding_inner + self.padding_outer * 2.0;
        self.step = Some((hi - lo) / slots.max(1.0));
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Distance in pixels between the starts of adjacent bands, if known.
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// Width of a single band excluding inner padding.
    pub fn bandwidth(&self) -> f64 {
        self.step.unwrap_or(0.0) * (1.0 - self.padding_inner)
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}
