//! JSON file backed meal catalog

use super::document::{CATALOG_SCHEMA_VERSION, CatalogDocument};
use async_trait::async_trait;
use mealplan_application::{CatalogError, MealCatalog, MealRepository};
use mealplan_domain::{MealId, MealRecord, NewMeal};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Meal catalog stored as one JSON document
///
/// The document is read once on [`open`](Self::open) and rewritten in full
/// after every mutation (temp file, then rename). A missing file is an empty
/// catalog; it is created on the first write. A failed write leaves the
/// in-memory state untouched.
pub struct JsonFileCatalog {
    path: PathBuf,
    state: RwLock<CatalogDocument>,
}

impl JsonFileCatalog {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let document = Self::read_document(&path).await?;
        info!(
            "Opened catalog {} ({} meals, next id {})",
            path.display(),
            document.meals.len(),
            document.next_id
        );
        Ok(Self {
            path,
            state: RwLock::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.meals.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn read_document(path: &Path) -> Result<CatalogDocument, CatalogError> {
        if !path.exists() {
            debug!("Catalog {} does not exist yet, starting empty", path.display());
            return Ok(CatalogDocument::default());
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", path.display(), e)))?;
        let document: CatalogDocument = serde_json::from_slice(&bytes)
            .map_err(|e| CatalogError::Corrupt(format!("{}: {}", path.display(), e)))?;

        if document.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::Corrupt(format!(
                "{}: unsupported schema version {} (expected {})",
                path.display(),
                document.schema_version,
                CATALOG_SCHEMA_VERSION
            )));
        }

        Ok(document.normalized())
    }

    async fn persist(&self, document: &CatalogDocument) -> Result<(), CatalogError> {
        let write_failed = |e: std::io::Error| {
            CatalogError::WriteFailed(format!("{}: {}", self.path.display(), e))
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(write_failed)?;
        }

        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| CatalogError::WriteFailed(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await.map_err(write_failed)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(write_failed)?;

        debug!(
            "Wrote catalog {} ({} meals)",
            self.path.display(),
            document.meals.len()
        );
        Ok(())
    }

    /// Apply `change` to a copy of the document, persist, then commit.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut CatalogDocument) -> T,
    ) -> Result<T, CatalogError> {
        let mut state = self.state.write().await;
        let mut next = state.clone();
        let out = change(&mut next);
        if next != *state {
            self.persist(&next).await?;
            *state = next;
        }
        Ok(out)
    }
}

#[async_trait]
impl MealCatalog for JsonFileCatalog {
    async fn fetch_all(&self) -> Result<Vec<MealRecord>, CatalogError> {
        Ok(self.state.read().await.meals.clone())
    }

    async fn fetch_by_category_exact(
        &self,
        category: &str,
    ) -> Result<Vec<MealRecord>, CatalogError> {
        Ok(self.state.read().await.by_category(category))
    }
}

#[async_trait]
impl MealRepository for JsonFileCatalog {
    async fn get(&self, id: MealId) -> Result<Option<MealRecord>, CatalogError> {
        Ok(self.state.read().await.get(id).cloned())
    }

    async fn add(&self, meal: NewMeal) -> Result<MealRecord, CatalogError> {
        self.mutate(|doc| doc.insert(meal)).await
    }

    async fn update(&self, id: MealId, meal: NewMeal) -> Result<Option<MealRecord>, CatalogError> {
        self.mutate(|doc| doc.replace(id, meal)).await
    }

    async fn delete(&self, id: MealId) -> Result<bool, CatalogError> {
        self.mutate(|doc| doc.remove(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("data").join("meals.json")
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_and_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = catalog_path(&dir);

        let catalog = JsonFileCatalog::open(&path).await.unwrap();

        assert!(catalog.is_empty().await);
        assert!(catalog.fetch_all().await.unwrap().is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_crud_round_trip_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = catalog_path(&dir);

        let catalog = JsonFileCatalog::open(&path).await.unwrap();
        let tacos = catalog.add(NewMeal::new("Tacos", "Beef")).await.unwrap();
        let curry = catalog
            .add(NewMeal::new("Curry", "Chicken").with_cuisine("Thai"))
            .await
            .unwrap();
        catalog
            .update(tacos.id, NewMeal::new("Fish Tacos", "Fish"))
            .await
            .unwrap();
        assert!(catalog.delete(curry.id).await.unwrap());
        assert!(path.exists());

        let reopened = JsonFileCatalog::open(&path).await.unwrap();
        let meals = reopened.fetch_all().await.unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Fish Tacos");
        assert_eq!(meals[0].id, tacos.id);

        // Deleted id 2 is not reused after a restart
        let next = reopened.add(NewMeal::new("Stew", "Beef")).await.unwrap();
        assert_eq!(next.id.value(), 3);
    }

    #[tokio::test]
    async fn test_category_query_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = JsonFileCatalog::open(catalog_path(&dir)).await.unwrap();
        catalog.add(NewMeal::new("Roast", "Chicken")).await.unwrap();
        catalog.add(NewMeal::new("Wings", "chicken")).await.unwrap();
        catalog.add(NewMeal::new("Satay", "Chicken ")).await.unwrap();

        let found = catalog.fetch_by_category_exact("Chicken").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Roast");

        let labels = catalog.categories().await.unwrap();
        assert_eq!(labels, vec!["Chicken", "Chicken ", "chicken"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_do_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = catalog_path(&dir);
        let catalog = JsonFileCatalog::open(&path).await.unwrap();

        assert!(
            catalog
                .update(MealId::new(7), NewMeal::new("x", "y"))
                .await
                .unwrap()
                .is_none()
        );
        assert!(!catalog.delete(MealId::new(7)).await.unwrap());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meals.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileCatalog::open(&path).await.err().unwrap();
        assert!(matches!(err, CatalogError::Corrupt(_)));
    }

    #[tokio::test]
    async fn test_unknown_schema_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meals.json");
        std::fs::write(&path, r#"{"schemaVersion": 99, "nextId": 1, "meals": []}"#).unwrap();

        let err = JsonFileCatalog::open(&path).await.err().unwrap();
        assert!(matches!(err, CatalogError::Corrupt(msg) if msg.contains("99")));
    }

    #[tokio::test]
    async fn test_hand_written_catalog_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meals.json");
        std::fs::write(
            &path,
            r#"{"meals":[
                {"id":1,"name":"Bolognese","protein":"Beef","cookTime":"45 min"},
                {"id":4,"name":"Poke","protein":"Fish"}
            ]}"#,
        )
        .unwrap();

        let catalog = JsonFileCatalog::open(&path).await.unwrap();
        assert_eq!(catalog.len().await, 2);
        let meal = catalog.get(MealId::new(1)).await.unwrap().unwrap();
        assert_eq!(meal.cook_time, "45 min");

        let added = catalog.add(NewMeal::new("Chili", "Beef")).await.unwrap();
        assert_eq!(added.id.value(), 5);
    }
}
