use super::sidecar::SIDECAR_EXTENSION;

/// Build a movie filename: `{name}({year}).{suffix}`
pub fn build_movie_filename(name: &str, year: &str, suffix: &str) -> String {
    format!("{}({}).{}", name, year, suffix)
}

/// Build the sidecar filename for a movie: `{name}({year}).nfo`
pub fn build_sidecar_filename(name: &str, year: &str) -> String {
    build_movie_filename(name, year, SIDECAR_EXTENSION)
}
