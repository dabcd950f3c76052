use atelier_core::{params::SelectPackage, WizardBuilder};
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Helper function to create a test wizard backed by a fresh database file
pub fn create_test_wizard() -> (TempDir, atelier_core::Wizard) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let wizard = open_wizard(&temp_dir);
    (temp_dir, wizard)
}

/// Opens a wizard on the database inside `temp_dir`, as a new session would
pub fn open_wizard(temp_dir: &TempDir) -> atelier_core::Wizard {
    WizardBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .expect("Failed to create wizard")
}

/// The Growth package used across scenarios
#[allow(dead_code)]
pub fn growth(bundle: Option<i64>) -> SelectPackage {
    SelectPackage {
        id: "growth".to_string(),
        name: "Growth".to_string(),
        price: Decimal::from(1000),
        included_pages: 5,
        brand_kit_bundle_price: bundle.map(Decimal::from),
        extra_page_cost: Decimal::from(50),
    }
}
