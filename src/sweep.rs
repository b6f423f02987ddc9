/// Worst-case error seen across a sweep, in ULPs of the output format.
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorRange {
    pub min: f64,
    pub max: f64,
}

impl ErrorRange {
    pub fn new() -> Self {
        let _ = pretty_env_logger::try_init();

        Self::default()
    }

    pub fn add(&mut self, err: f64) {
        self.min = self.min.min(err);
        self.max = self.max.max(err);
    }

    pub fn report(&self, name: &str) {
        info!("{:<8}{:.1}, {:.1}", name, self.min, self.max);
    }

    /// Largest error magnitude in either direction.
    pub fn abs(&self) -> f64 {
        self.max.max(-self.min)
    }
}
