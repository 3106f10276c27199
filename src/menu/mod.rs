//! The dish view model: an immutable ordered menu loaded once at startup.
//!
//! A [`Dish`] is plain configuration data — six named fields describing one
//! menu item and its board placement. The set is fixed for the process
//! lifetime and ids are unique across it; both are checked at load time so
//! everything downstream can treat dish references as valid by construction.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{BdkError, Result};

/// Board placement as percentage offsets from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Vertical offset, percent of the usable board height.
    pub top: f32,
    /// Horizontal offset, percent of the usable board width.
    pub left: f32,
}

impl Position {
    #[must_use]
    pub const fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }

    /// Both offsets within the `0..=100` percent range.
    #[must_use]
    pub fn in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.top) && (0.0..=100.0).contains(&self.left)
    }
}

/// One menu item and its board placement. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique stable key.
    pub id: String,
    /// Opaque art reference, resolved by the presentation layer.
    pub image: PathBuf,
    /// Short display label shown on the board placard.
    pub label: String,
    /// Short description shown only after the cover is dismissed.
    pub description: String,
    /// Cosmetic placard tilt in degrees.
    pub rotation: f32,
    /// Cosmetic board placement.
    pub position: Position,
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}

/// Immutable ordered sequence of dishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(rename = "dish")]
    dishes: Vec<Dish>,
}

impl Menu {
    /// Build a menu from records, validating the load-time invariants.
    pub fn new(dishes: Vec<Dish>) -> Result<Self> {
        let menu = Self { dishes };
        menu.validate()?;
        Ok(menu)
    }

    /// The builtin four-dish menu.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            dishes: vec![
                Dish {
                    id: "king".to_string(),
                    image: PathBuf::from("art/king.txt"),
                    label: "King of Dishes".to_string(),
                    description: "Spicy Sesame Ribs - My signature!".to_string(),
                    rotation: -3.0,
                    position: Position::new(22.0, 52.0),
                },
                Dish {
                    id: "sweet".to_string(),
                    image: PathBuf::from("art/sweet.txt"),
                    label: "Sweet Treats".to_string(),
                    description: "Portuguese Egg Tarts - Golden perfection!".to_string(),
                    rotation: 4.0,
                    position: Position::new(58.0, 72.0),
                },
                Dish {
                    id: "disaster".to_string(),
                    image: PathBuf::from("art/disaster.txt"),
                    label: "Kitchen Disaster".to_string(),
                    description: "Pepper Stir-fry - Oops, too much wok hei!".to_string(),
                    rotation: -5.0,
                    position: Position::new(55.0, 22.0),
                },
                Dish {
                    id: "daily".to_string(),
                    image: PathBuf::from("art/daily.txt"),
                    label: "Daily Special".to_string(),
                    description: "Pork Belly Set - Comfort in a bowl!".to_string(),
                    rotation: 2.0,
                    position: Position::new(18.0, 78.0),
                },
            ],
        }
    }

    /// Load a menu from a TOML file (`[[dish]]` tables).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BdkError::MissingMenu {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path).map_err(|source| BdkError::io(path, source))?;
        let menu: Self = toml::from_str(&raw)?;
        menu.validate()?;
        Ok(menu)
    }

    /// Load from an optional file path, falling back to the builtin menu.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::builtin()), Self::load)
    }

    fn validate(&self) -> Result<()> {
        if self.dishes.is_empty() {
            return Err(BdkError::InvalidMenu {
                details: "menu must contain at least one dish".to_string(),
            });
        }
        let mut seen = std::collections::HashSet::new();
        for dish in &self.dishes {
            if dish.id.trim().is_empty() {
                return Err(BdkError::InvalidMenu {
                    details: "dish id must not be empty".to_string(),
                });
            }
            if !seen.insert(dish.id.as_str()) {
                return Err(BdkError::InvalidMenu {
                    details: format!("duplicate dish id: {}", dish.id),
                });
            }
            if !dish.position.in_range() {
                return Err(BdkError::InvalidMenu {
                    details: format!(
                        "dish {} position must be within 0..=100 percent (got top={}, left={})",
                        dish.id, dish.position.top, dish.position.left
                    ),
                });
            }
        }
        Ok(())
    }

    /// Number of dishes on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    /// True when the menu holds no dishes. Never observable after a
    /// successful load; needed for the len/is_empty pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Dish at a board index, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Dish> {
        self.dishes.get(index)
    }

    /// Iterate dishes in board order.
    pub fn iter(&self) -> std::slice::Iter<'_, Dish> {
        self.dishes.iter()
    }

    /// Look up a dish index by id.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.dishes.iter().position(|d| d.id == id)
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a Dish;
    type IntoIter = std::slice::Iter<'a, Dish>;

    fn into_iter(self) -> Self::IntoIter {
        self.dishes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_menu_has_four_unique_dishes() {
        let menu = Menu::builtin();
        assert_eq!(menu.len(), 4);
        let ids: Vec<&str> = menu.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["king", "sweet", "disaster", "daily"]);
    }

    #[test]
    fn builtin_menu_matches_source_records() {
        let menu = Menu::builtin();
        let sweet = &menu.get(menu.index_of("sweet").unwrap()).unwrap();
        assert_eq!(sweet.label, "Sweet Treats");
        assert_eq!(sweet.description, "Portuguese Egg Tarts - Golden perfection!");
        assert!((sweet.rotation - 4.0).abs() < f32::EPSILON);
        assert!((sweet.position.top - 58.0).abs() < f32::EPSILON);
        assert!((sweet.position.left - 72.0).abs() < f32::EPSILON);
    }

    #[test]
    fn builtin_menu_passes_validation() {
        assert!(Menu::new(Menu::builtin().dishes).is_ok());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut dishes = Menu::builtin().dishes;
        dishes[1].id = "king".to_string();
        let err = Menu::new(dishes).expect_err("expected duplicate id error");
        assert_eq!(err.code(), "BDK-1101");
        assert!(err.to_string().contains("duplicate dish id"));
    }

    #[test]
    fn empty_menu_rejected() {
        let err = Menu::new(Vec::new()).expect_err("expected empty menu error");
        assert!(err.to_string().contains("at least one dish"));
    }

    #[test]
    fn out_of_range_position_rejected() {
        let mut dishes = Menu::builtin().dishes;
        dishes[0].position.left = 120.0;
        let err = Menu::new(dishes).expect_err("expected position error");
        assert!(err.to_string().contains("position"));
    }

    #[test]
    fn blank_id_rejected() {
        let mut dishes = Menu::builtin().dishes;
        dishes[2].id = "  ".to_string();
        let err = Menu::new(dishes).expect_err("expected blank id error");
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn missing_menu_file_reported() {
        let err = Menu::load(Path::new("/nonexistent/menu.toml"))
            .expect_err("expected missing menu error");
        assert_eq!(err.code(), "BDK-1102");
    }

    #[test]
    fn load_or_builtin_defaults_to_builtin() {
        let menu = Menu::load_or_builtin(None).expect("builtin load");
        assert_eq!(menu.len(), 4);
    }

    #[test]
    fn menu_round_trips_through_toml() {
        let menu = Menu::builtin();
        let raw = toml::to_string(&menu).expect("serialize");
        let parsed: Menu = toml::from_str(&raw).expect("parse");
        assert_eq!(parsed, menu);
    }
}
