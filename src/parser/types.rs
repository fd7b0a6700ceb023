/// Where the year of a parsed filename came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSource {
    /// Found a 19xx/20xx substring in the stem
    Detected,
    /// No year in the stem, current year used instead
    Fallback,
}

/// Name, year and suffix extracted from a raw movie filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieParts {
    pub name: String,
    pub year: String,
    pub suffix: String,
    pub year_source: YearSource,
}

impl MovieParts {
    pub fn year_detected(&self) -> bool {
        self.year_source == YearSource::Detected
    }
}
