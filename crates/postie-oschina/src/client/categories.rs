//! Blog category lookup.

use tracing::{debug, info};

use super::OschinaClient;
use crate::error::OschinaError;
use crate::extract;
use crate::transport::Transport;
use crate::types::Category;

/// Source of the category reference list.
pub trait CategorySource {
    /// Fetch all categories.
    fn categories(&self) -> Result<Vec<Category>, OschinaError>;

    /// First category whose name equals `name` exactly.
    ///
    /// No trimming or case folding: a label scraped with stray whitespace
    /// does not match.
    fn find_by_name(&self, name: &str) -> Result<Option<Category>, OschinaError> {
        Ok(self.categories()?.into_iter().find(|c| c.name == name))
    }
}

impl CategorySource for [Category] {
    fn categories(&self) -> Result<Vec<Category>, OschinaError> {
        Ok(self.to_vec())
    }
}

impl<T: Transport> CategorySource for OschinaClient<T> {
    fn categories(&self) -> Result<Vec<Category>, OschinaError> {
        self.list_categories()
    }
}

impl<T: Transport> OschinaClient<T> {
    /// List the user's blog categories.
    ///
    /// Read from the category dropdown of the new-article form.
    pub fn list_categories(&self) -> Result<Vec<Category>, OschinaError> {
        info!("Getting categories");

        let doc = self
            .fetch_document("/blog/write", &[])
            .map_err(|e| e.in_operation("list_categories"))?;
        let categories =
            extract::category_options(&doc).map_err(|e| e.in_operation("list_categories"))?;

        debug!("Found {} categories", categories.len());
        Ok(categories)
    }

    /// Look up a category by exact display name.
    ///
    /// Returns `Ok(None)` when no category has that name.
    pub fn get_category_by_name(&self, name: &str) -> Result<Option<Category>, OschinaError> {
        self.find_by_name(name)
    }
}
