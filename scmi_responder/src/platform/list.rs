// scmi_responder/src/platform/list.rs
//! Discrete value lists reported either as an explicit array or as a
//! (low, high, step) triplet.

use crate::types::{ListFormat, UpdateInterval};
use std::cmp::Ordering;

/// Supported values of a list command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiscreteList<T> {
    /// Explicit values, paginated on the wire.
    Array(Vec<T>),
    /// Every value from `low` to `high` in increments of `step`.
    Triplet {
        /// Smallest value.
        low: T,
        /// Largest value.
        high: T,
        /// Increment.
        step: T,
    },
}

/// Update intervals of one sensor.
pub type IntervalList = DiscreteList<UpdateInterval>;

/// Voltage levels of one domain, in microvolts.
pub type LevelList = DiscreteList<i32>;

impl<T: Copy> DiscreteList<T> {
    /// Wire format of the list.
    pub fn format(&self) -> ListFormat {
        match self {
            DiscreteList::Array(_) => ListFormat::Array,
            DiscreteList::Triplet { .. } => ListFormat::Triplet,
        }
    }

    /// Number of entries the list command reports in total.
    pub fn len(&self) -> usize {
        match self {
            DiscreteList::Array(v) => v.len(),
            DiscreteList::Triplet { .. } => 3,
        }
    }

    /// True for an empty array.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry `index` as reported on the wire.
    pub fn entry(&self, index: usize) -> Option<T> {
        match self {
            DiscreteList::Array(v) => v.get(index).copied(),
            DiscreteList::Triplet { low, high, step } => match index {
                0 => Some(*low),
                1 => Some(*high),
                2 => Some(*step),
                _ => None,
            },
        }
    }
}

impl LevelList {
    /// True when `level` is one of the listed levels.
    pub fn contains(&self, level: i32) -> bool {
        match self {
            DiscreteList::Array(v) => v.contains(&level),
            DiscreteList::Triplet { low, high, step } => {
                *step > 0
                    && (*low..=*high).contains(&level)
                    && (i64::from(level) - i64::from(*low)) % i64::from(*step) == 0
            }
        }
    }
}

/// How a requested update interval is mapped onto the supported ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Largest supported interval not above the request.
    Down,
    /// Smallest supported interval not below the request.
    Up,
    /// Closest supported interval.
    Nearest,
}

impl Rounding {
    /// Two-bit wire value; 3 has no meaning.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(Rounding::Down),
            1 => Some(Rounding::Up),
            2 => Some(Rounding::Nearest),
            _ => None,
        }
    }
}

impl IntervalList {
    /// Every supported interval. A triplet expands to `low + k * step` in
    /// the exponent of `low`.
    pub fn members(&self) -> Vec<UpdateInterval> {
        match self {
            DiscreteList::Array(v) => v.clone(),
            DiscreteList::Triplet { low, high, step } => {
                if step.seconds == 0 {
                    return vec![*low];
                }
                (low.seconds..=high.seconds)
                    .step_by(usize::from(step.seconds))
                    .map(|s| UpdateInterval::new(s, low.exponent))
                    .collect()
            }
        }
    }

    /// True when `interval` has the same length as a supported one.
    pub fn contains(&self, interval: &UpdateInterval) -> bool {
        self.members()
            .iter()
            .any(|m| m.cmp_length(interval) == Ordering::Equal)
    }

    /// Supported interval for `requested` under `mode`, if any.
    pub fn round(&self, requested: &UpdateInterval, mode: Rounding) -> Option<UpdateInterval> {
        let members = self.members();
        let below = members
            .iter()
            .filter(|m| m.cmp_length(requested) != Ordering::Greater)
            .max_by(|a, b| a.cmp_length(b));
        let above = members
            .iter()
            .filter(|m| m.cmp_length(requested) != Ordering::Less)
            .min_by(|a, b| a.cmp_length(b));
        match mode {
            Rounding::Down => below.copied(),
            Rounding::Up => above.copied(),
            Rounding::Nearest => match (below, above) {
                (Some(b), Some(a)) => {
                    let want = requested.as_secs_f64();
                    if want - b.as_secs_f64() <= a.as_secs_f64() - want {
                        Some(*b)
                    } else {
                        Some(*a)
                    }
                }
                (b, a) => b.or(a).copied(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u16) -> UpdateInterval {
        UpdateInterval::new(v, -3)
    }

    #[test]
    fn triplet_reports_three_entries() {
        let list = LevelList::Triplet {
            low: 600_000,
            high: 1_200_000,
            step: 100_000,
        };
        assert_eq!(list.len(), 3);
        assert_eq!(list.format(), ListFormat::Triplet);
        assert_eq!(list.entry(2), Some(100_000));
        assert_eq!(list.entry(3), None);
    }

    #[test]
    fn level_membership() {
        let triplet = LevelList::Triplet {
            low: 600_000,
            high: 1_200_000,
            step: 100_000,
        };
        assert!(triplet.contains(700_000));
        assert!(!triplet.contains(750_000));
        assert!(!triplet.contains(1_300_000));
        let array = LevelList::Array(vec![800_000, 900_000]);
        assert!(array.contains(900_000));
        assert!(!array.contains(850_000));
    }

    #[test]
    fn rounding_picks_neighbours() {
        let list = IntervalList::Array(vec![ms(100), ms(200), ms(500)]);
        assert_eq!(list.round(&ms(300), Rounding::Down), Some(ms(200)));
        assert_eq!(list.round(&ms(300), Rounding::Up), Some(ms(500)));
        assert_eq!(list.round(&ms(300), Rounding::Nearest), Some(ms(200)));
        assert_eq!(list.round(&ms(450), Rounding::Nearest), Some(ms(500)));
        assert_eq!(list.round(&ms(50), Rounding::Down), None);
        assert_eq!(list.round(&ms(900), Rounding::Up), None);
        assert_eq!(list.round(&ms(900), Rounding::Nearest), Some(ms(500)));
    }

    #[test]
    fn exact_match_is_kept_across_exponents() {
        let list = IntervalList::Array(vec![ms(100), UpdateInterval::new(1, 0)]);
        let one_second = UpdateInterval::new(1000, -3);
        assert_eq!(
            list.round(&one_second, Rounding::Up),
            Some(UpdateInterval::new(1, 0))
        );
        assert!(list.contains(&one_second));
    }

    #[test]
    fn triplet_expands() {
        let list = IntervalList::Triplet {
            low: ms(100),
            high: ms(400),
            step: ms(100),
        };
        assert_eq!(list.members(), vec![ms(100), ms(200), ms(300), ms(400)]);
        assert_eq!(list.round(&ms(250), Rounding::Up), Some(ms(300)));
    }

    #[test]
    fn rounding_bits() {
        assert_eq!(Rounding::from_bits(2), Some(Rounding::Nearest));
        assert_eq!(Rounding::from_bits(3), None);
    }
}
