use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Extension of the metadata sidecar file
pub const SIDECAR_EXTENSION: &str = "nfo";

/// Render the sidecar XML for a movie.
///
/// Values are inserted verbatim, without XML escaping.
pub fn render_sidecar(name: &str, year: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <movie>\n  \
         <title>{}</title>\n  \
         <year>{}</year>\n\
         </movie>",
        name, year
    )
}

/// Write the sidecar, replacing any existing file at `path`
pub fn write_sidecar(path: &Path, name: &str, year: &str) -> io::Result<()> {
    let content = render_sidecar(name, year);
    fs::write(path, content)?;
    debug!(path = ?path, "Sidecar written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;
    use quick_xml::Reader;
    use tempfile::tempdir;

    const MATRIX_SIDECAR: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
                                  <movie>\n  \
                                  <title>The matrix</title>\n  \
                                  <year>1999</year>\n\
                                  </movie>";

    #[test]
    fn test_render_exact_body() {
        assert_eq!(render_sidecar("The matrix", "1999"), MATRIX_SIDECAR);
    }

    #[test]
    fn test_render_does_not_escape() {
        let content = render_sidecar("Fast & Furious", "2009");
        assert!(content.contains("<title>Fast & Furious</title>"));
    }

    #[test]
    fn test_render_placeholder_in_name_is_kept() {
        // A title that looks like the year placeholder must not be substituted
        let content = render_sidecar("{year}", "1984");
        assert!(content.contains("<title>{year}</title>"));
        assert!(content.contains("<year>1984</year>"));
    }

    #[test]
    fn test_rendered_sidecar_is_well_formed() {
        let content = render_sidecar("Blade Runner", "1982");
        let mut reader = Reader::from_str(&content);
        reader.config_mut().trim_text(true);

        let mut current = String::new();
        let mut title = None;
        let mut year = None;

        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) => {
                    current = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                }
                Event::Text(e) => {
                    let text = e.unescape().unwrap().to_string();
                    match current.as_str() {
                        "title" => title = Some(text),
                        "year" => year = Some(text),
                        _ => {}
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        assert_eq!(title.as_deref(), Some("Blade Runner"));
        assert_eq!(year.as_deref(), Some("1982"));
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("The matrix(1999).nfo");
        fs::write(&path, "stale content that is longer than the new one would be, surely").unwrap();

        write_sidecar(&path, "The matrix", "1999").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), MATRIX_SIDECAR);
    }

    #[test]
    fn test_write_fails_in_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("x(2000).nfo");

        assert!(write_sidecar(&path, "x", "2000").is_err());
    }
}
