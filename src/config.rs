use std::path::PathBuf;

/// Locations of the three record collections the file store reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub ratios: PathBuf,
    pub products: PathBuf,
    pub lists: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            ratios: PathBuf::from("ratios.json"),
            products: PathBuf::from("products.json"),
            lists: PathBuf::from("saved_lists.json"),
        }
    }
}

impl DataPaths {
    /// All three files under one directory, with the default file names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            ratios: dir.join(defaults.ratios),
            products: dir.join(defaults.products),
            lists: dir.join(defaults.lists),
        }
    }

    /// Paths to the reference data that must exist before calculating.
    pub fn missing_inputs(&self) -> Vec<&PathBuf> {
        [&self.ratios, &self.products]
            .into_iter()
            .filter(|p| !p.exists())
            .collect()
    }
}
