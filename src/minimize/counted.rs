//! Objective wrapper that counts evaluations.


/// Bundles an objective with the number of times it has been called.
///
/// Every routine wraps its objective in one of these; `minimize` owns a
/// single instance for the whole run so the bracket search and the
/// refinement share one count.
#[derive(Debug, Clone)]
pub struct CountedFn<F> {
    func:  F,
    count: usize,
}

impl<F> CountedFn<F> {
    pub fn new(func: F) -> Self {
        Self { func, count: 0 }
    }

    /// Number of calls made so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<F> CountedFn<F>
where F: FnMut(f64) -> f64 {
    /// Increments the counter and evaluates the objective at `x`.
    #[inline]
    pub fn call(&mut self, x: f64) -> f64 {
        self.count += 1;
        (self.func)(x)
    }
}
