//! Score parsing for remote rubric analysis.
//!
//! The scoring model answers in free text. These functions pull a numeric
//! score out of the reply and map it onto a [`Verdict`]. Pure text handling,
//! no I/O.
//!
//! | Reply | Score |
//! |-------|-------|
//! | `"Score: 8/10 - good scaling question"` | 8 |
//! | `"I'd rate this a 3."` | 3 |
//! | `"Solid question overall"` (no digits) | [`FALLBACK_SCORE`] |
//! | `"42"` | 10 (clamped) |
//! | `""` (blank) | [`FALLBACK_SCORE`] |

use crate::practice::turn::Verdict;

/// Lowest score the rubric asks for
pub const MIN_SCORE: i64 = 0;

/// Highest score the rubric asks for
pub const MAX_SCORE: i64 = 10;

/// Score used when the reply contains no digits at all
pub const FALLBACK_SCORE: i64 = 5;

/// Scores at or above this value are above the line
pub const ABOVE_LINE_THRESHOLD: i64 = 6;

/// Parse the first run of ASCII digits in a rubric reply.
///
/// The result is clamped to `MIN_SCORE..=MAX_SCORE`; a run too long for
/// `i64` saturates. A reply without any digit, blank included, scores
/// [`FALLBACK_SCORE`].
///
/// # Examples
///
/// ```
/// use doq_domain::rubric::parsing::parse_rubric_score;
///
/// assert_eq!(parse_rubric_score("Score: 7/10"), 7);
/// assert_eq!(parse_rubric_score("No numbers here"), 5);
/// assert_eq!(parse_rubric_score("   "), 5);
/// ```
pub fn parse_rubric_score(reply: &str) -> i64 {
    let Some(start) = reply.find(|c: char| c.is_ascii_digit()) else {
        return FALLBACK_SCORE;
    };

    reply[start..]
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d))
        })
        .clamp(MIN_SCORE, MAX_SCORE)
}

/// Map a rubric score onto the Dialogic Orientation line.
pub fn verdict_for_score(score: i64) -> Verdict {
    if score >= ABOVE_LINE_THRESHOLD {
        Verdict::AboveLine
    } else {
        Verdict::BelowLine
    }
}
