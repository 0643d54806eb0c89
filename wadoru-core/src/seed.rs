//! Daily puzzle seed and the URL query flags that steer it.

use chrono::NaiveDate;

/// `YYYYMMDD` seed of the puzzle for `date`.
#[must_use]
pub fn today_seed(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Flags read from the page query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFlags {
    /// `today` or its common typo `todas` was present.
    pub today: bool,
    pub seed: Option<String>,
    pub random: bool,
}

impl QueryFlags {
    /// Parse a query string such as `?seed=20240101&random`.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut flags = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            match name {
                "today" | "todas" => flags.today = true,
                "seed" if flags.seed.is_none() => flags.seed = Some(value.to_string()),
                "random" => flags.random = true,
                _ => {}
            }
        }
        flags
    }

    /// True when a non-empty `seed` was given.
    #[must_use]
    pub fn has_seed(&self) -> bool {
        self.seed.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Canonical address to load instead of the current one, if any.
    #[must_use]
    pub fn redirect_target(&self, today: NaiveDate) -> Option<String> {
        self.today.then(|| format!("?seed={}", today_seed(today)))
    }
}

/// Top-left link switching between the daily and random puzzles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleLink {
    pub href: String,
    pub label_key: &'static str,
}

impl PuzzleLink {
    #[must_use]
    pub fn for_query(flags: &QueryFlags, today: NaiveDate) -> Self {
        if flags.has_seed() {
            Self {
                href: "?random".to_string(),
                label_key: "link.random",
            }
        } else {
            Self {
                href: format!("?seed={}", today_seed(today)),
                label_key: "link.today",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn seed_is_compact_iso_date() {
        assert_eq!(today_seed(date()), "20240307");
    }

    #[test]
    fn today_flags_request_redirect() {
        assert_eq!(
            QueryFlags::parse("?today").redirect_target(date()).as_deref(),
            Some("?seed=20240307")
        );
        assert!(QueryFlags::parse("todas=1").today);
        assert_eq!(QueryFlags::parse("?seed=123").redirect_target(date()), None);
        assert_eq!(QueryFlags::parse("").redirect_target(date()), None);
    }

    #[test]
    fn seed_and_random_are_read() {
        let flags = QueryFlags::parse("?random&seed=42&seed=99");
        assert!(flags.random);
        assert_eq!(flags.seed.as_deref(), Some("42"));
        assert!(!QueryFlags::parse("?seed=").has_seed());
    }

    #[test]
    fn puzzle_link_points_away_from_current_mode() {
        let seeded = PuzzleLink::for_query(&QueryFlags::parse("?seed=20240101"), date());
        assert_eq!(seeded.href, "?random");
        assert_eq!(seeded.label_key, "link.random");

        let daily = PuzzleLink::for_query(&QueryFlags::default(), date());
        assert_eq!(daily.href, "?seed=20240307");
        assert_eq!(daily.label_key, "link.today");
    }
}
