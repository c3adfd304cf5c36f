//! Likelihood-of-CIND lookup.

/// Map a Basic Score to the published likelihood bucket.
///
/// The buckets are evaluated in ascending order and reproduce the source
/// table verbatim, including the 10 → "8%" / 11 → "13%" split. A negative
/// score cannot come out of the calculator; the "N/A" arm stays as a guard
/// rather than a reachable outcome.
pub fn likelihood_label(score: i32) -> &'static str {
    match score {
        0..=4 => "6%",
        5..=10 => "8%",
        11..=14 => "13%",
        15..=19 => "19%",
        20..=24 => "28%",
        25..=29 => "38%",
        30..=34 => "50%",
        35..=39 => "61%",
        40..=44 => "72%",
        45..=49 => "80%",
        50..=54 => "87%",
        55.. => "> 90%",
        _ => "N/A",
    }
}
