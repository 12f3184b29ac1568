//! Experience and leveling.
//!
//! Each level needs `level × XP_PER_LEVEL` experience. Surplus experience
//! carries into the next level, and a large award can gain several levels
//! at once.

use super::constants::XP_PER_LEVEL;
use serde::{Deserialize, Serialize};

/// Experience needed to advance from `level` to `level + 1`.
pub fn xp_for_next_level(level: u32) -> u64 {
    level as u64 * XP_PER_LEVEL
}

/// Level and experience toward the next level.
///
/// Invariant: `experience < xp_for_next_level(level)` between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub level: u32,
    pub experience: u64,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    pub fn new() -> Self {
        Self {
            level: 1,
            experience: 0,
        }
    }

    pub fn xp_needed(&self) -> u64 {
        xp_for_next_level(self.level)
    }

    /// Progress toward the next level in `0.0..1.0`.
    pub fn fraction(&self) -> f64 {
        let needed = self.xp_needed();
        if needed == 0 {
            return 0.0;
        }
        self.experience as f64 / needed as f64
    }

    /// Award experience. Returns the number of levels gained.
    pub fn add_experience(&mut self, amount: u64) -> u32 {
        self.experience += amount;

        let mut levelups = 0;
        loop {
            let xp_needed = xp_for_next_level(self.level);
            if self.experience >= xp_needed {
                self.experience -= xp_needed;
                self.level += 1;
                levelups += 1;
            } else {
                break;
            }
        }

        if levelups > 0 {
            tracing::info!(level = self.level, gained = levelups, "level up");
        }
        levelups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_for_next_level() {
        assert_eq!(xp_for_next_level(1), 100);
        assert_eq!(xp_for_next_level(2), 200);
        assert_eq!(xp_for_next_level(10), 1000);
    }

    #[test]
    fn test_exact_threshold_levels_up_with_zero_carry() {
        let mut progress = Progress::new();
        assert_eq!(progress.add_experience(100), 1);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.experience, 0);

        assert_eq!(progress.add_experience(200), 1);
        assert_eq!(progress.level, 3);
        assert_eq!(progress.experience, 0);
    }

    #[test]
    fn test_one_short_of_threshold() {
        let mut progress = Progress {
            level: 3,
            experience: 0,
        };
        assert_eq!(progress.add_experience(299), 0);
        assert_eq!(progress.level, 3);
        assert_eq!(progress.experience, 299);
    }

    #[test]
    fn test_remainder_carries() {
        let mut progress = Progress {
            level: 1,
            experience: 90,
        };
        progress.add_experience(20);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.experience, 10);
    }

    #[test]
    fn test_large_award_cascades() {
        let mut progress = Progress::new();
        // 100 (L1) + 200 (L2) + 50 left over
        assert_eq!(progress.add_experience(350), 2);
        assert_eq!(progress.level, 3);
        assert_eq!(progress.experience, 50);
        assert!(progress.experience < progress.xp_needed());
    }

    #[test]
    fn test_fraction() {
        let progress = Progress {
            level: 2,
            experience: 50,
        };
        assert_eq!(progress.fraction(), 0.25);
    }
}
