use crate::storage::ScoreStore;

/// Key under which the best score is persisted
pub const BEST_SCORE_KEY: &str = "snake-best-score";

/// Current score and best score.
///
/// The tracker is the only writer of the best score to its store. Store
/// failures are logged and never interrupt a game; the in-memory best stays
/// authoritative for the rest of the process.
pub struct ScoreTracker {
    score: u32,
    best: u32,
    store: Box<dyn ScoreStore>,
}

impl ScoreTracker {
    /// Create a tracker, loading the best score from `store`
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        let best = match store.get(BEST_SCORE_KEY) {
            Ok(best) => best.unwrap_or(0),
            Err(e) => {
                log::error!("Error loading best score: {:#}", e);
                0
            }
        };
        log::info!("Best score loaded: {}", best);

        Self {
            score: 0,
            best,
            store,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Count one eaten food and return the new score.
    ///
    /// When the new score beats the best, the best is raised and written to
    /// the store before returning.
    pub fn record_eat(&mut self) -> u32 {
        self.score += 1;

        if self.score > self.best {
            self.best = self.score;
            log::info!("New best score: {}", self.best);
            if let Err(e) = self.store.set(BEST_SCORE_KEY, self.best) {
                log::error!("Error saving best score: {:#}", e);
            }
        }

        self.score
    }

    /// Start a new game. The best score is kept.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use anyhow::{Result, bail};

    struct FailingStore;

    impl ScoreStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<u32>> {
            bail!("disk on fire")
        }

        fn set(&mut self, _key: &str, _value: u32) -> Result<()> {
            bail!("disk on fire")
        }
    }

    #[test]
    fn test_absent_best_reads_as_zero() {
        let tracker = ScoreTracker::new(Box::new(MemoryStore::new()));
        assert_eq!(tracker.score(), 0);
        assert_eq!(tracker.best(), 0);
    }

    #[test]
    fn test_best_is_loaded_from_store() {
        let tracker = ScoreTracker::new(Box::new(MemoryStore::with_value(BEST_SCORE_KEY, 7)));
        assert_eq!(tracker.best(), 7);
    }

    #[test]
    fn test_best_is_persisted_only_when_beaten() {
        let store = MemoryStore::with_value(BEST_SCORE_KEY, 2);
        let mut tracker = ScoreTracker::new(Box::new(store.clone()));

        tracker.record_eat();
        tracker.record_eat();
        assert_eq!(tracker.best(), 2);
        assert_eq!(store.writes(), 0);

        assert_eq!(tracker.record_eat(), 3);
        assert_eq!(tracker.best(), 3);
        assert_eq!(store.get(BEST_SCORE_KEY).unwrap(), Some(3));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_reset_keeps_best() {
        let mut tracker = ScoreTracker::new(Box::new(MemoryStore::new()));
        tracker.record_eat();
        tracker.record_eat();

        tracker.reset();

        assert_eq!(tracker.score(), 0);
        assert_eq!(tracker.best(), 2);

        tracker.record_eat();
        assert_eq!(tracker.best(), 2);
    }

    #[test]
    fn test_store_failures_do_not_interrupt() {
        let mut tracker = ScoreTracker::new(Box::new(FailingStore));
        assert_eq!(tracker.best(), 0);

        assert_eq!(tracker.record_eat(), 1);
        assert_eq!(tracker.best(), 1);
    }
}
