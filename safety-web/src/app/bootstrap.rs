use std::rc::Rc;

use crate::game::{BuiltinLoader, CatalogError, DataLoader, ScenarioCatalog};

/// Load the embedded scenario catalog for the app.
///
/// # Errors
/// Returns the validation error when the embedded catalog is unusable.
pub fn load_catalog() -> Result<Rc<ScenarioCatalog>, CatalogError> {
    load_with(&BuiltinLoader)
}

pub(crate) fn load_with<L>(loader: &L) -> Result<Rc<ScenarioCatalog>, L::Error>
where
    L: DataLoader,
{
    match loader.load_catalog() {
        Ok(catalog) => {
            log::info!(
                "scenario catalog loaded: {} flood, {} fire",
                catalog.flood.len(),
                catalog.fire.len()
            );
            Ok(Rc::new(catalog))
        }
        Err(err) => {
            log::error!("scenario catalog failed to load: {err}");
            Err(err)
        }
    }
}
