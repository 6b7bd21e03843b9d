/// Normalizes a tier label such as `T1.5` or `N/A` into a numeric rating.
///
/// One leading `T` (either case) is stripped. Empty, `N/A` and anything that
/// does not parse to a finite number yield `None`.
pub fn parse_rating(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let value = trimmed
        .strip_prefix(['T', 't'])
        .unwrap_or(trimmed)
        .trim();

    if value.is_empty() || value.eq_ignore_ascii_case("n/a") {
        return None;
    }

    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn average_rating(ratings: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = ratings.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }

    Some(present.iter().sum::<f64>() / present.len() as f64)
}
