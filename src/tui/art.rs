//! ASCII dish art and the cloche cover.
//!
//! Art resolves in three steps: a file under the configured art directory
//! (`<art_dir>/<dish-id>.txt`), then the built-in gallery, then a labelled
//! placeholder. A missing photo never fails the board.

#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

/// A block of art lines, trimmed of trailing blank rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Art {
    pub lines: Vec<String>,
}

impl Art {
    fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        Self { lines }
    }

    fn from_static(rows: &[&str]) -> Self {
        Self {
            lines: rows.iter().map(|r| (*r).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Resolves dish art against an optional on-disk art directory.
#[derive(Debug, Clone, Default)]
pub struct ArtLibrary {
    art_dir: Option<PathBuf>,
}

impl ArtLibrary {
    #[must_use]
    pub const fn new(art_dir: Option<PathBuf>) -> Self {
        Self { art_dir }
    }

    /// Art for a dish id: file, then built-in, then placeholder.
    #[must_use]
    pub fn dish_art(&self, id: &str) -> Art {
        if let Some(art) = self.load_from_dir(id) {
            return art;
        }
        builtin_art(id).unwrap_or_else(|| placeholder_art(id))
    }

    /// The cloche hiding every description.
    #[must_use]
    pub fn cover_art(&self) -> Art {
        Art::from_static(&[
            r"        _....._        ",
            r"     .'       '.       ",
            r"    /           \      ",
            r"   |     ___     |     ",
            r"   |    (___)    |     ",
            r"  /               \    ",
            r" '-----------------'   ",
            r"  ═════════════════    ",
        ])
    }

    fn load_from_dir(&self, id: &str) -> Option<Art> {
        let dir = self.art_dir.as_ref()?;
        // Dish ids are validated as non-blank single tokens; no path traversal.
        let path = dir.join(format!("{id}.txt"));
        let text = fs::read_to_string(path).ok()?;
        let art = Art::from_text(&text);
        (!art.lines.is_empty()).then_some(art)
    }
}

fn builtin_art(id: &str) -> Option<Art> {
    let rows: &[&str] = match id {
        "king" => &[
            r"   )   )   )   ",
            r"  (   (   (    ",
            r" .-=======-.   ",
            r" |  RIBS   |   ",
            r" '========='   ",
        ],
        "sweet" => &[
            r"   ______      ",
            r"  / ~~~~ \     ",
            r" | (    ) |    ",
            r"  \.____./     ",
            r"   TARTS       ",
        ],
        "disaster" => &[
            r"  \ | | | /    ",
            r" ~~~~~~~~~~~   ",
            r" (  x___x  )   ",
            r"  '--------'   ",
            r"   CHARRED     ",
        ],
        "daily" => &[
            r"   (~~~~~)     ",
            r"  .-------.    ",
            r"  | o o o |    ",
            r"  '._____.'    ",
            r"    BOWL       ",
        ],
        _ => return None,
    };
    Some(Art::from_static(rows))
}

fn placeholder_art(id: &str) -> Art {
    Art {
        lines: vec![
            r".-----------.".to_string(),
            r"|           |".to_string(),
            r"| no photo  |".to_string(),
            r"|           |".to_string(),
            format!("'--- {id} ---'"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_gallery_covers_the_house_menu() {
        let lib = ArtLibrary::default();
        for id in ["king", "sweet", "disaster", "daily"] {
            let art = lib.dish_art(id);
            assert!(!art.lines.is_empty(), "missing art for {id}");
            assert!(!art.lines.iter().any(|l| l.contains("no photo")));
        }
    }

    #[test]
    fn unknown_dish_gets_a_placeholder() {
        let art = ArtLibrary::default().dish_art("mystery-stew");
        assert!(art.lines.iter().any(|l| l.contains("no photo")));
        assert!(art.lines.iter().any(|l| l.contains("mystery-stew")));
    }

    #[test]
    fn art_dir_overrides_the_builtin_gallery() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("king.txt")).unwrap();
        writeln!(file, "custom ribs").unwrap();
        drop(file);

        let lib = ArtLibrary::new(Some(dir.path().to_path_buf()));
        assert_eq!(lib.dish_art("king").lines, vec!["custom ribs".to_string()]);
        // Other dishes still come from the gallery.
        assert!(!lib.dish_art("sweet").lines.is_empty());
    }

    #[test]
    fn empty_art_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("daily.txt"), "\n\n").unwrap();
        let lib = ArtLibrary::new(Some(dir.path().to_path_buf()));
        assert!(lib.dish_art("daily").lines.iter().any(|l| l.contains("BOWL")));
    }

    #[test]
    fn cover_is_a_fixed_block() {
        let cover = ArtLibrary::default().cover_art();
        assert!(cover.height() >= 6);
        assert!(cover.width() > 10);
    }
}
