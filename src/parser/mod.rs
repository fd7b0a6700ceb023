mod types;

pub use types::*;

use crate::clock::Clock;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

// Release year: first 19xx or 20xx run of digits, no word boundaries
// Examples: "the.matrix.1999", "Inception_2010-1080p"
static YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:19|20)\d{2}").unwrap());

/// Characters used as word separators in release filenames
const SEPARATORS: [char; 3] = ['.', '_', '-'];

/// Parse a movie filename into name, year and suffix.
///
/// The suffix is whatever follows the last `.` (empty if there is none).
/// The name is the text before the first 19xx/20xx year in the stem, or the
/// whole stem when no year is present, in which case the clock's current
/// year is used.
pub fn parse_movie_filename(filename: &str, clock: &dyn Clock) -> MovieParts {
    let (stem, suffix) = split_suffix(filename);

    let (raw_name, year, year_source) = match YEAR_REGEX.find(stem) {
        Some(m) => (&stem[..m.start()], m.as_str().to_string(), YearSource::Detected),
        None => (stem, clock.current_year().to_string(), YearSource::Fallback),
    };

    let name = sanitize_name(raw_name);

    trace!(filename, raw_name, name = %name, year = %year, ?year_source, "Parsed filename");

    MovieParts {
        name,
        year,
        suffix: suffix.to_string(),
        year_source,
    }
}

/// Split a filename on its last `.` into (stem, suffix)
pub fn split_suffix(filename: &str) -> (&str, &str) {
    filename.rsplit_once('.').unwrap_or((filename, ""))
}

/// Clean up a raw title: separators become spaces, trailing `(` is dropped,
/// whitespace is collapsed and the first character is uppercased.
pub fn sanitize_name(raw: &str) -> String {
    let spaced: String = raw
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();

    let trimmed = spaced.trim_end_matches(|c: char| c == '(' || c.is_whitespace());
    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");

    capitalize_first(&collapsed)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    const CLOCK: FixedClock = FixedClock(2031);

    // ============ Year Detection ============

    #[test]
    fn test_parse_dotted_release_name() {
        let parts = parse_movie_filename("the.matrix.1999.mkv", &CLOCK);

        assert_eq!(parts.name, "The matrix");
        assert_eq!(parts.year, "1999");
        assert_eq!(parts.suffix, "mkv");
        assert!(parts.year_detected());
    }

    #[test]
    fn test_parse_mixed_separators() {
        let parts = parse_movie_filename("Inception_2010-1080p.mp4", &CLOCK);

        assert_eq!(parts.name, "Inception");
        assert_eq!(parts.year, "2010");
        assert_eq!(parts.suffix, "mp4");
    }

    #[test]
    fn test_parse_without_year_uses_clock() {
        let parts = parse_movie_filename("random_clip.mov", &CLOCK);

        assert_eq!(parts.name, "Random clip");
        assert_eq!(parts.year, "2031");
        assert_eq!(parts.suffix, "mov");
        assert_eq!(parts.year_source, YearSource::Fallback);
    }

    #[test]
    fn test_parse_strips_open_paren_before_year() {
        let parts = parse_movie_filename("Alien (1979).avi", &CLOCK);

        assert_eq!(parts.name, "Alien");
        assert_eq!(parts.year, "1979");
    }

    #[test]
    fn test_parse_takes_leftmost_year() {
        let parts = parse_movie_filename("Blade.Runner.2049.2017.mkv", &CLOCK);

        assert_eq!(parts.name, "Blade Runner");
        assert_eq!(parts.year, "2049");
    }

    #[test]
    fn test_parse_year_inside_longer_number() {
        // No word boundaries: "1080" is not a year, but "2010" inside "12010" is
        let parts = parse_movie_filename("clip12010.mp4", &CLOCK);

        assert_eq!(parts.name, "Clip1");
        assert_eq!(parts.year, "2010");
    }

    #[test]
    fn test_parse_ignores_out_of_range_years() {
        let parts = parse_movie_filename("Metropolis 1827 1080p.mkv", &CLOCK);

        assert_eq!(parts.year, "2031");
        assert_eq!(parts.name, "Metropolis 1827 1080p");
    }

    // ============ Suffix Handling ============

    #[test]
    fn test_parse_without_suffix() {
        let parts = parse_movie_filename("Heat 1995", &CLOCK);

        assert_eq!(parts.name, "Heat");
        assert_eq!(parts.year, "1995");
        assert_eq!(parts.suffix, "");
    }

    #[test]
    fn test_parse_only_last_dot_is_suffix() {
        let parts = parse_movie_filename("movie.2001.part1.tar.gz", &CLOCK);

        assert_eq!(parts.suffix, "gz");
        assert_eq!(parts.year, "2001");
        assert_eq!(parts.name, "Movie");
    }

    #[test]
    fn test_split_suffix() {
        assert_eq!(split_suffix("a.b.c"), ("a.b", "c"));
        assert_eq!(split_suffix("noext"), ("noext", ""));
        assert_eq!(split_suffix("trailing."), ("trailing", ""));
    }

    #[test]
    fn test_parse_year_at_start_gives_empty_name() {
        let parts = parse_movie_filename("2012.mkv", &CLOCK);

        assert_eq!(parts.name, "");
        assert_eq!(parts.year, "2012");
    }

    // ============ Sanitization ============

    #[test]
    fn test_sanitize_only_first_letter_changes_case() {
        assert_eq!(sanitize_name("the MATRIX"), "The MATRIX");
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize_name("  the   big\tlebowski  "), "The big lebowski");
    }

    #[test]
    fn test_sanitize_strips_trailing_parens() {
        assert_eq!(sanitize_name("Alien ("), "Alien");
        assert_eq!(sanitize_name("Alien (( "), "Alien");
        assert_eq!(sanitize_name("Alien ( ("), "Alien");
    }

    #[test]
    fn test_sanitize_leading_separator() {
        assert_eq!(sanitize_name(".hidden_gem."), "Hidden gem");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_name(""), "");
        assert_eq!(sanitize_name("._-("), "");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let samples = [
            "the.matrix.",
            "Inception_",
            "  spaced   out ( ",
            ".leading-dot",
            "Alien ( (",
            "ünicode_title",
            "already clean",
            "(",
            "",
        ];

        for sample in samples {
            let once = sanitize_name(sample);
            assert_eq!(sanitize_name(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
