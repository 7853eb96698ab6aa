//! Display formatting of raw result values.
//!
//! Feed values are integers whose unit depends on the event:
//! - most events: centiseconds
//! - `333fm`: moves (averages are stored ×100)
//! - `333mbf`: packed `DDTTTTTMM` digits

use crate::config::RESULT_PLACEHOLDER;
use crate::models::EventCode;

/// A decoded multi-blind result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiBlindResult {
    pub solved: i64,
    pub attempted: i64,
    pub time_seconds: i64,
}

impl std::fmt::Display for MultiBlindResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} {}:{:02}",
            self.solved,
            self.attempted,
            self.time_seconds / 60,
            self.time_seconds % 60
        )
    }
}

/// Decodes a packed multi-blind value.
///
/// The value is read as a zero-padded 9-digit string `DD TTTTT MM` with
/// `difference = 99 - DD`, `missed = MM`, `solved = difference + missed` and
/// `attempted = solved + missed`. This is the legacy format of the feed and is
/// decoded exactly as written.
///
/// Returns `None` for non-positive or non-finite values.
pub fn decode_multi_blind(value: f64) -> Option<MultiBlindResult> {
    if !is_positive_finite(value) {
        return None;
    }
    let digits = format!("{:09}", value.round() as u64);
    let dd: i64 = digits.get(0..2)?.parse().ok()?;
    let time_seconds: i64 = digits.get(2..7)?.parse().ok()?;
    let missed: i64 = digits.get(7..)?.parse().ok()?;

    let difference = 99 - dd;
    let solved = difference + missed;
    let attempted = solved + missed;

    Some(MultiBlindResult {
        solved,
        attempted,
        time_seconds,
    })
}

/// Formats a raw result for display.
///
/// Missing, zero, negative and non-finite values all render as the placeholder.
///
/// # Examples
///
/// ```
/// use prerank::time_codec::format_result;
/// use prerank::EventCode;
///
/// assert_eq!(format_result(Some(532.0), EventCode::Three, false), "5.32");
/// assert_eq!(format_result(Some(6532.0), EventCode::Three, true), "1:05.32");
/// assert_eq!(format_result(Some(3033.0), EventCode::FewestMoves, true), "30.33 moves");
/// assert_eq!(format_result(None, EventCode::Three, false), "—");
/// ```
pub fn format_result(value: Option<f64>, event: EventCode, is_average: bool) -> String {
    let Some(value) = value.filter(|v| is_positive_finite(*v)) else {
        return RESULT_PLACEHOLDER.to_string();
    };

    match event {
        EventCode::MultiBlind => decode_multi_blind(value)
            .map(|result| result.to_string())
            .unwrap_or_else(|| RESULT_PLACEHOLDER.to_string()),
        EventCode::FewestMoves => format_moves(value, is_average),
        _ => format_centiseconds(value),
    }
}

fn format_moves(value: f64, is_average: bool) -> String {
    if is_average {
        let moves = if value >= 100.0 { value / 100.0 } else { value };
        if moves.fract() == 0.0 {
            format!("{:.0} moves", moves)
        } else {
            format!("{:.2} moves", moves)
        }
    } else {
        format!("{:.0} moves", value.round())
    }
}

fn format_centiseconds(value: f64) -> String {
    let centiseconds = value.round() as u64;
    let minutes = centiseconds / 6000;
    let rest = centiseconds % 6000;
    let seconds = format!("{}.{:02}", rest / 100, rest % 100);
    if minutes > 0 {
        format!("{}:{:0>5}", minutes, seconds)
    } else {
        seconds
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
