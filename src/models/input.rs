use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{BoilError, Result};
use crate::planner::constants::{MAX_GUESTS, MIN_GUESTS};

/// Boil pot size. Each size maps to a fixed volume in gallons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PotSize {
    Small,
    #[default]
    Medium,
    Large,
    #[value(name = "xlarge")]
    XLarge,
}

impl PotSize {
    pub const ALL: [PotSize; 4] = [
        PotSize::Small,
        PotSize::Medium,
        PotSize::Large,
        PotSize::XLarge,
    ];

    /// Pot volume in gallons.
    pub fn gallons(self) -> f64 {
        match self {
            PotSize::Small => 6.0,
            PotSize::Medium => 10.0,
            PotSize::Large => 14.0,
            PotSize::XLarge => 18.0,
        }
    }

    /// Stable identifier, as stored in saved lists.
    pub fn as_str(self) -> &'static str {
        match self {
            PotSize::Small => "small",
            PotSize::Medium => "medium",
            PotSize::Large => "large",
            PotSize::XLarge => "xlarge",
        }
    }

    /// Short gallon label for menus.
    pub fn label(self) -> &'static str {
        match self {
            PotSize::Small => "< 6 gal",
            PotSize::Medium => "10 gal",
            PotSize::Large => "14 gal",
            PotSize::XLarge => "18+ gal",
        }
    }
}

impl fmt::Display for PotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PotSize {
    type Err = BoilError;

    fn from_str(s: &str) -> Result<Self> {
        PotSize::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BoilError::InvalidInput(format!("Unknown pot size: {}", s)))
    }
}

/// Spice preference. Carried through to saved lists; it does not affect quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SpiceLevel {
    Mild,
    #[default]
    Medium,
    Hot,
    Fire,
}

impl SpiceLevel {
    pub const ALL: [SpiceLevel; 4] = [
        SpiceLevel::Mild,
        SpiceLevel::Medium,
        SpiceLevel::Hot,
        SpiceLevel::Fire,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpiceLevel::Mild => "mild",
            SpiceLevel::Medium => "medium",
            SpiceLevel::Hot => "hot",
            SpiceLevel::Fire => "fire",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpiceLevel::Mild => "Mild",
            SpiceLevel::Medium => "Medium",
            SpiceLevel::Hot => "Hot",
            SpiceLevel::Fire => "Fire!",
        }
    }

    /// Number of flames shown next to the label.
    pub fn flames(self) -> usize {
        match self {
            SpiceLevel::Mild => 1,
            SpiceLevel::Medium => 2,
            SpiceLevel::Hot => 3,
            SpiceLevel::Fire => 4,
        }
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpiceLevel {
    type Err = BoilError;

    fn from_str(s: &str) -> Result<Self> {
        SpiceLevel::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BoilError::InvalidInput(format!("Unknown spice level: {}", s)))
    }
}

/// Everything the calculator needs from the user.
///
/// `selected_ingredients` behaves as an insertion-ordered set: use
/// [`CalculatorInput::select`] to add ids without creating duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub num_guests: u32,
    pub pot_size: PotSize,
    pub spice_level: SpiceLevel,
    pub selected_ingredients: Vec<String>,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            num_guests: 10,
            pot_size: PotSize::Medium,
            spice_level: SpiceLevel::Medium,
            selected_ingredients: vec!["shrimp".to_string()],
        }
    }
}

impl CalculatorInput {
    pub fn new(num_guests: u32, pot_size: PotSize, spice_level: SpiceLevel) -> Self {
        Self {
            num_guests,
            pot_size,
            spice_level,
            selected_ingredients: Vec::new(),
        }
    }

    /// Builder-style selection of several ingredient ids.
    pub fn with_ingredients<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self.select(id);
        }
        self
    }

    /// Add an ingredient id unless it is already selected.
    pub fn select(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.is_selected(&id) {
            return false;
        }
        self.selected_ingredients.push(id);
        true
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ingredients.iter().any(|s| s == id)
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if self.is_selected(id) {
            self.selected_ingredients.retain(|s| s != id);
        } else {
            self.selected_ingredients.push(id.to_string());
        }
    }

    /// Check the guest range the calculator expects its callers to enforce.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_GUESTS..=MAX_GUESTS).contains(&self.num_guests) {
            return Err(BoilError::InvalidInput(format!(
                "Guest count must be between {} and {}, got {}",
                MIN_GUESTS, MAX_GUESTS, self.num_guests
            )));
        }
        Ok(())
    }
}
