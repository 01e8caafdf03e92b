//! Session statistics, derived from the transcript

use super::turn::Turn;
use serde::{Deserialize, Serialize};

/// Counts of classified trainee turns.
///
/// Always computed from the transcript with [`SessionStats::from_turns`];
/// never stored or patched independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_classified_turns: usize,
    pub above_line_count: usize,
    pub below_line_count: usize,
    /// Rounded share of above-line turns, 0 when nothing is classified
    pub above_line_percentage: u32,
}

impl SessionStats {
    pub fn from_turns(turns: &[Turn]) -> Self {
        let (above, below) = turns
            .iter()
            .filter(|t| t.is_trainee())
            .filter_map(|t| t.classification())
            .fold((0usize, 0usize), |(above, below), c| {
                if c.is_above_line() {
                    (above + 1, below)
                } else {
                    (above, below + 1)
                }
            });
        let total = above + below;

        Self {
            total_classified_turns: total,
            above_line_count: above,
            below_line_count: below,
            above_line_percentage: percentage(above, total),
        }
    }
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 * 100.0 / total as f64).round() as u32
}
