use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::DataPaths;
use crate::error::{BoilError, Result};
use crate::models::{IngredientRatio, NewSavedList, Product, SavedList};
use crate::planner::constants::PRODUCT_CATEGORIES;
use crate::state::store::RecipeStore;

/// Load ratio records from a JSON array file.
pub fn load_ratios<P: AsRef<Path>>(path: P) -> Result<Vec<IngredientRatio>> {
    let content = fs::read_to_string(path)?;
    let ratios: Vec<IngredientRatio> = serde_json::from_str(&content)?;
    Ok(ratios)
}

/// Load products from a JSON array file, or a CSV file when the extension is `.csv`.
///
/// File order is kept since it decides which product wins a tie.
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let products = if is_csv {
        let mut reader = csv::Reader::from_path(path)?;
        reader
            .deserialize()
            .collect::<std::result::Result<Vec<Product>, csv::Error>>()?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };

    for product in &products {
        if !product.is_valid() {
            warn!(product = %product.id, "invalid product record");
        } else if !PRODUCT_CATEGORIES.contains(&product.category.as_str()) {
            debug!(product = %product.id, category = %product.category, "uncategorized product");
        }
    }

    Ok(products)
}

/// Load saved lists. A missing file means nothing has been saved yet.
pub fn load_saved_lists<P: AsRef<Path>>(path: P) -> Result<Vec<SavedList>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Save lists to a JSON file.
///
/// The JSON goes to a temp file next to `path` first and is renamed over it,
/// so an interrupted write leaves the previous file intact.
pub fn save_saved_lists<P: AsRef<Path>>(path: P, lists: &[SavedList]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let json = serde_json::to_string_pretty(lists)?;
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// [`RecipeStore`] backed by three local files.
#[derive(Debug, Clone)]
pub struct FileStore {
    ratios_path: PathBuf,
    products_path: PathBuf,
    lists_path: PathBuf,
}

impl FileStore {
    pub fn new(
        ratios_path: impl Into<PathBuf>,
        products_path: impl Into<PathBuf>,
        lists_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            ratios_path: ratios_path.into(),
            products_path: products_path.into(),
            lists_path: lists_path.into(),
        }
    }
}

impl From<&DataPaths> for FileStore {
    fn from(paths: &DataPaths) -> Self {
        Self::new(&paths.ratios, &paths.products, &paths.lists)
    }
}

impl RecipeStore for FileStore {
    fn fetch_ingredient_ratios(&self) -> Result<Vec<IngredientRatio>> {
        let ratios = load_ratios(&self.ratios_path)?;
        debug!(count = ratios.len(), path = %self.ratios_path.display(), "loaded ratios");
        Ok(ratios)
    }

    fn fetch_in_stock_products(&self) -> Result<Vec<Product>> {
        let products: Vec<Product> = load_products(&self.products_path)?
            .into_iter()
            .filter(|p| p.in_stock)
            .collect();
        debug!(count = products.len(), path = %self.products_path.display(), "loaded in-stock products");
        Ok(products)
    }

    fn persist_saved_list(&mut self, payload: NewSavedList) -> Result<SavedList> {
        let mut lists = load_saved_lists(&self.lists_path)?;
        let saved = SavedList::from_payload(Uuid::new_v4().to_string(), Utc::now(), payload);
        lists.push(saved.clone());
        save_saved_lists(&self.lists_path, &lists)?;
        info!(id = %saved.id, name = %saved.list_name, "saved list");
        Ok(saved)
    }

    fn fetch_saved_lists(&self) -> Result<Vec<SavedList>> {
        let mut lists = load_saved_lists(&self.lists_path)?;
        lists.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(lists)
    }

    fn delete_saved_list(&mut self, id: &str) -> Result<()> {
        let mut lists = load_saved_lists(&self.lists_path)?;
        let index = lists
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| BoilError::ListNotFound(id.to_string()))?;
        lists.remove(index);
        save_saved_lists(&self.lists_path, &lists)?;
        info!(id, "deleted saved list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalculatorInput, SavedListItem};
    use tempfile::tempdir;

    #[test]
    fn test_load_products_json() {
        let json = r#"[
            {"id": "1", "name": "Live Crawfish", "category": "protein", "sub_category": "crawfish", "price": 6.5, "unit": "lb", "featured": true},
            {"id": "2", "name": "Boil Pot", "category": "equipment", "price": 80, "unit": "each", "in_stock": false}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let products = load_products(file.path()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].sub_category.as_deref(), Some("crawfish"));
        assert!(products[0].featured);
        assert!(!products[1].in_stock);
    }

    #[test]
    fn test_load_products_csv() {
        let csv = "id,name,brand,category,sub_category,price,unit,image_url,description,in_stock,featured\n\
                   1,Red Potatoes,Farm,vegetable,potatoes,4.5,bag,,5 lb bag,true,false\n\
                   2,Boil Mix,Zatarain's,seasoning,,12.99,lb,,,true,true\n";

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let products = load_products(file.path()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].sub_category.as_deref(), Some("potatoes"));
        assert_eq!(products[1].sub_category, None);
        assert!(products[1].featured);
    }

    #[test]
    fn test_load_products_csv_blank_flags() {
        let csv = "id,name,category,sub_category,price,unit,in_stock,featured\n\
                   p1,Gulf Shrimp,protein,shrimp,8.99,lb,true,\n\
                   p2,Snow Crab,protein,crab,15.99,lb,,true\n\
                   p3,Sweet Corn,vegetable,corn,0.5,ears,false,\n";

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let products = load_products(file.path()).unwrap();
        assert_eq!(products.len(), 3);
        assert!(products[0].in_stock);
        assert!(!products[0].featured);
        assert!(products[1].in_stock);
        assert!(products[1].featured);
        assert!(!products[2].in_stock);
        assert!(!products[2].featured);
    }

    #[test]
    fn test_file_store_filters_out_of_stock() {
        let dir = tempdir().unwrap();
        let products_path = dir.path().join("products.json");
        fs::write(
            &products_path,
            r#"[
                {"id": "a", "name": "A", "category": "protein", "price": 1, "unit": "lb", "in_stock": false},
                {"id": "b", "name": "B", "category": "protein", "price": 1, "unit": "lb"}
            ]"#,
        )
        .unwrap();

        let store = FileStore::new(
            dir.path().join("ratios.json"),
            &products_path,
            dir.path().join("lists.json"),
        );
        let products = store.fetch_in_stock_products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "b");

        // ratios file does not exist
        assert!(store.fetch_ingredient_ratios().is_err());
    }

    #[test]
    fn test_save_replaces_file_without_leftovers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lists.json");
        fs::write(&path, "[]").unwrap();

        let list = SavedList::from_payload(
            "l1".to_string(),
            Utc::now(),
            NewSavedList {
                list_name: "Crawfish Night".to_string(),
                num_guests: 20,
                pot_size: CalculatorInput::default().pot_size,
                spice_level: CalculatorInput::default().spice_level,
                selected_ingredients: vec!["crawfish".to_string()],
                calculated_products: Vec::new(),
            },
        );
        save_saved_lists(&path, std::slice::from_ref(&list)).unwrap();

        assert_eq!(load_saved_lists(&path).unwrap(), vec![list]);
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_saved_list_lifecycle() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(
            dir.path().join("ratios.json"),
            dir.path().join("products.json"),
            dir.path().join("lists.json"),
        );

        assert!(store.fetch_saved_lists().unwrap().is_empty());

        let payload = NewSavedList {
            list_name: "Summer Boil".to_string(),
            num_guests: 12,
            pot_size: CalculatorInput::default().pot_size,
            spice_level: CalculatorInput::default().spice_level,
            selected_ingredients: vec!["shrimp".to_string()],
            calculated_products: vec![SavedListItem {
                product_id: "p1".to_string(),
                product_name: "Gulf Shrimp".to_string(),
                quantity: 6,
                unit: "lb".to_string(),
                total_price: 53.94,
            }],
        };

        let first = store.persist_saved_list(payload.clone()).unwrap();
        let mut second_payload = payload;
        second_payload.list_name = "Fall Boil".to_string();
        let second = store.persist_saved_list(second_payload).unwrap();
        assert_ne!(first.id, second.id);

        let lists = store.fetch_saved_lists().unwrap();
        assert_eq!(lists.len(), 2);
        assert!(lists[0].created_at >= lists[1].created_at);

        store.delete_saved_list(&first.id).unwrap();
        let lists = store.fetch_saved_lists().unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].list_name, "Fall Boil");

        assert!(matches!(
            store.delete_saved_list(&first.id),
            Err(BoilError::ListNotFound(_))
        ));
    }
}
