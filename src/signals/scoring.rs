//! Score rounding and position sizing

/// Alignment score at or above which conviction is high and size is full.
pub const HIGH_CONVICTION_SCORE: f64 = 4.0;

/// Round a score to two decimals.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Fraction of the maximum position to take for an alignment score.
pub fn position_frac(score: f64) -> f64 {
    if score >= HIGH_CONVICTION_SCORE {
        1.00
    } else if score >= 2.0 {
        0.70
    } else if score >= 1.0 {
        0.40
    } else {
        0.0
    }
}

/// Position size as a whole percentage in `[0, 100]`.
pub fn position_size_pct(score: f64) -> u8 {
    (position_frac(score) * 100.0).round() as u8
}
