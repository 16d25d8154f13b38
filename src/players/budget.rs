use crate::CLOCK_LOW_WATER;
use crate::DEFAULT_TRIALS;
use crate::MINIMUM_TRIALS;
use crate::Seconds;

/// Trial counts drawn from the shared match clock.
///
/// With time to spare every estimate runs the full budget. Below the low-water
/// mark the budget shrinks in proportion to the time left, down to a floor, so
/// a decision always completes rather than overrunning the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    trials: usize,
    floor: usize,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            floor: MINIMUM_TRIALS,
        }
    }
}

impl Budget {
    pub fn new(trials: usize, floor: usize) -> Self {
        Self {
            trials: trials.max(1),
            floor: floor.clamp(1, trials.max(1)),
        }
    }
    pub fn trials(&self, clock: Seconds) -> usize {
        if clock >= CLOCK_LOW_WATER {
            self.trials
        } else {
            let scaled = self.trials as Seconds * clock.max(0.) / CLOCK_LOW_WATER;
            (scaled as usize).max(self.floor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_budget_with_time_to_spare() {
        assert_eq!(Budget::default().trials(60.), DEFAULT_TRIALS);
        assert_eq!(Budget::default().trials(CLOCK_LOW_WATER), DEFAULT_TRIALS);
    }

    #[test]
    fn shrinks_when_clock_is_low() {
        let budget = Budget::new(200, 10);
        assert_eq!(budget.trials(5.), 100);
        assert!(budget.trials(1.) < budget.trials(5.));
    }

    #[test]
    fn never_below_floor() {
        let budget = Budget::default();
        assert_eq!(budget.trials(0.), MINIMUM_TRIALS);
        assert_eq!(budget.trials(-3.), MINIMUM_TRIALS);
        assert_eq!(Budget::new(0, 0).trials(0.), 1);
    }
}
