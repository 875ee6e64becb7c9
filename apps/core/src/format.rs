//! Text formatting for stat tiles, card captions and image URLs.

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Hours with one decimal and grouped thousands: `1234.56` -> `"1,234.6"`.
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return "0.0".to_string();
    }
    let tenths = (hours * 10.0).round() as u64;
    format!("{}.{}", group_thousands(tenths / 10), tenths % 10)
}

pub fn rewatch_ratio(rewatches: u64, new_watches: u64) -> String {
    format!("{} / {}", group_thousands(rewatches), group_thousands(new_watches))
}

pub fn film_count_label(count: u32) -> String {
    if count == 1 {
        "1 film".to_string()
    } else {
        format!("{count} films")
    }
}

pub fn rewatch_label(count: u32) -> String {
    if count == 1 {
        "1 rewatch".to_string()
    } else {
        format!("{count} rewatches")
    }
}

/// Value with an optional unit suffix, dropping a trailing `.0`.
pub fn value_with_unit(value: f64, unit: Option<&str>) -> String {
    let number = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    };
    match unit {
        Some(unit) => format!("{number} {unit}"),
        None => number,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    W185,
    W342,
    W500,
}

impl PosterSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::W185 => "w185",
            Self::W342 => "w342",
            Self::W500 => "w500",
        }
    }
}

/// Absolute URLs are passed through untouched.
pub fn poster_url(path: &str, size: PosterSize) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    format!("{POSTER_BASE_URL}{}{path}", size.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn hours_have_one_decimal() {
        assert_eq!(format_hours(1234.56), "1,234.6");
        assert_eq!(format_hours(12.0), "12.0");
        assert_eq!(format_hours(0.04), "0.0");
        assert_eq!(format_hours(f64::NAN), "0.0");
    }

    #[test]
    fn captions_pluralise() {
        assert_eq!(film_count_label(1), "1 film");
        assert_eq!(film_count_label(7), "7 films");
        assert_eq!(rewatch_label(1), "1 rewatch");
        assert_eq!(rewatch_label(0), "0 rewatches");
        assert_eq!(rewatch_ratio(1200, 35), "1,200 / 35");
    }

    #[test]
    fn values_drop_trailing_zero() {
        assert_eq!(value_with_unit(5.0, Some("films")), "5 films");
        assert_eq!(value_with_unit(2.34, None), "2.3");
    }

    #[test]
    fn poster_urls_use_the_requested_size() {
        assert_eq!(
            poster_url("/abc.jpg", PosterSize::W342),
            "https://image.tmdb.org/t/p/w342/abc.jpg"
        );
        assert_eq!(
            poster_url("abc.jpg", PosterSize::W185),
            "https://image.tmdb.org/t/p/w185/abc.jpg"
        );
        assert_eq!(
            poster_url("https://cdn.test/x.jpg", PosterSize::W185),
            "https://cdn.test/x.jpg"
        );
    }
}
