//! Handlers for the content commands: `topics`, `slides`, `export`, `validate`.
//!
//! Formatting is kept separate from printing so the output can be tested.

use std::fmt::Write as _;
use std::path::Path;

use lectern_content::markup::to_plain_text;
use lectern_content::{ContentTable, Slide, loader};
use lectern_core::{DeckProvider, Error, Result};

/// Options for printing a topic's slides.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidesOptions {
    /// Strip inline markup.
    pub plain: bool,
    /// Print JSON instead of text.
    pub json: bool,
}

// ============================================================================
// Command handlers
// ============================================================================

pub fn handle_topics<P: DeckProvider>(provider: &P) -> Result<()> {
    print!("{}", format_topics(provider));
    Ok(())
}

pub fn handle_slides<P>(provider: &P, topic: &str, options: SlidesOptions) -> Result<()>
where
    P: DeckProvider<Slide = Slide>,
{
    let slides = provider.slides(topic)?;
    if options.json {
        let json = serde_json::to_string_pretty(slides)
            .map_err(|e| Error::serialization(e.to_string()))?;
        println!("{json}");
    } else {
        print!("{}", format_slides(topic, slides, options.plain));
    }
    Ok(())
}

/// Write the table as JSON to `output`, or stdout when `None`.
pub fn handle_export(table: &ContentTable, output: Option<&Path>) -> Result<()> {
    let json = table.to_json_pretty()?;
    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n")).map_err(|e| Error::io_with_path(e, path))?;
            tracing::info!("Exported {} topic(s) to {}", table.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Load `path` and report what it contains.
pub fn handle_validate(path: &Path) -> Result<()> {
    let table = loader::load_path(path)?;
    println!("{}", format_validation(path, &table));
    Ok(())
}

// ============================================================================
// Formatting
// ============================================================================

/// One line per topic: key, slide count, first slide title.
pub fn format_topics<P: DeckProvider>(provider: &P) -> String {
    let infos = provider.topic_info();
    let width = infos.iter().map(|i| i.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for info in &infos {
        let noun = if info.slide_count == 1 { "slide" } else { "slides" };
        let _ = writeln!(
            out,
            "{:<width$}  {:>3} {noun}  {}",
            info.id, info.slide_count, info.title
        );
    }
    out
}

/// Numbered slides with indented body text and bullets.
pub fn format_slides(topic: &str, slides: &[Slide], plain: bool) -> String {
    let text = |s: &str| if plain { to_plain_text(s) } else { s.to_string() };

    let mut out = String::new();
    let _ = writeln!(out, "{topic} ({} slides)", slides.len());
    for (i, slide) in slides.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, text(slide.title()));
        if let Some(content) = slide.content() {
            let _ = writeln!(out, "     {}", text(content));
        }
        for item in slide.ul().unwrap_or_default() {
            let _ = writeln!(out, "     - {}", text(item));
        }
    }
    out
}

fn format_validation(path: &Path, table: &ContentTable) -> String {
    format!(
        "{}: ok ({} topics, {} slides)",
        path.display(),
        table.len(),
        table.slide_count()
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_content::practical_frontend;
    use tempfile::TempDir;

    #[test]
    fn test_format_topics() {
        let out = format_topics(practical_frontend());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("intro "));
        assert!(lines[0].contains("5 slides"));
        assert!(lines[0].ends_with("Welcome to Practical Frontend!"));
        assert!(lines[1].starts_with("modals"));
        assert!(lines[1].contains("3 slides"));
    }

    #[test]
    fn test_format_slides_keeps_markup() {
        let slides = practical_frontend().slides("intro").unwrap();
        let out = format_slides("intro", slides, false);
        assert!(out.starts_with("intro (5 slides)\n"));
        assert!(out.contains("  3. Prerequisites\n"));
        assert!(out.contains("**JavaScript**"));
    }

    #[test]
    fn test_format_slides_plain() {
        let slides = practical_frontend().slides("intro").unwrap();
        let out = format_slides("intro", slides, true);
        assert!(out.contains("     Some basic knowledge of JavaScript and React.\n"));
    }

    #[test]
    fn test_format_slides_bullets() {
        let slides = practical_frontend().slides("modals").unwrap();
        let out = format_slides("modals", slides, true);
        assert!(out.contains("     - Ask for user input\n"));
        assert!(out.contains("     - HTML <dialog> element\n"));
    }

    #[test]
    fn test_handle_slides_unknown_topic() {
        let err = handle_slides(
            practical_frontend(),
            "nonexistent-key",
            SlidesOptions::default(),
        )
        .unwrap_err();
        assert!(err.is_unknown_topic());
    }

    #[test]
    fn test_handle_slides_json() {
        let options = SlidesOptions {
            json: true,
            ..Default::default()
        };
        assert!(handle_slides(practical_frontend(), "modals", options).is_ok());
    }

    #[test]
    fn test_handle_export_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.json");
        handle_export(practical_frontend(), Some(&path)).unwrap();

        let reloaded = loader::load_file(&path).unwrap();
        assert_eq!(&reloaded, practical_frontend());
    }

    #[test]
    fn test_handle_validate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.json");
        handle_export(practical_frontend(), Some(&path)).unwrap();
        assert!(handle_validate(&path).is_ok());
        assert_eq!(
            format_validation(&path, practical_frontend()),
            format!("{}: ok (2 topics, 8 slides)", path.display())
        );
    }

    #[test]
    fn test_handle_validate_bad_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.json");
        std::fs::write(&path, r#"{"intro":[{"title":" "}]}"#).unwrap();
        assert!(handle_validate(&path).is_err());
    }
}
