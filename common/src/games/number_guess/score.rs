const ATTEMPT_WEIGHT: u32 = 100;

/// Lower is better. Attempts dominate; a larger range shaves off `floor(log2(range))`,
/// which stays below one attempt's weight for any `u32` range.
pub fn calculate_score(attempts: u32, range_size: u32) -> u32 {
    let attempts = attempts.max(1);
    let range_size = range_size.max(1);

    let difficulty_bonus = range_size.ilog2();
    attempts
        .saturating_mul(ATTEMPT_WEIGHT)
        .saturating_sub(difficulty_bonus)
        .max(1)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore(Option<u32>);

impl BestScore {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<u32> {
        self.0
    }

    /// Returns true when `score` beats everything recorded so far.
    pub fn record(&mut self, score: u32) -> bool {
        if self.0.is_none_or(|best| score < best) {
            self.0 = Some(score);
            true
        } else {
            false
        }
    }
}
