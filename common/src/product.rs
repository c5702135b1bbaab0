use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::freshness::{self, Freshness};

/// Food category. The API stores the Spanish display label; data seeded by
/// hand sometimes drops the accents, so parsing tolerates both spellings.
/// Values we don't recognize are kept as-is in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Seeds,
    Canned,
    Dairy,
    Vegetables,
    Fruits,
    Proteins,
    Other(String),
}

impl Category {
    /// The six concrete categories, in catalog display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Seeds,
            Category::Canned,
            Category::Dairy,
            Category::Vegetables,
            Category::Fruits,
            Category::Proteins,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Seeds => "Semillas",
            Category::Canned => "Enlatados",
            Category::Dairy => "Lácteos",
            Category::Vegetables => "Verduras",
            Category::Fruits => "Frutas",
            Category::Proteins => "Proteínas",
            Category::Other(raw) => raw,
        }
    }

    /// Stable hook for per-category styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Seeds => "category-seeds",
            Category::Canned => "category-canned",
            Category::Dairy => "category-dairy",
            Category::Vegetables => "category-vegetables",
            Category::Fruits => "category-fruits",
            Category::Proteins => "category-proteins",
            Category::Other(_) => "category-other",
        }
    }

    pub fn parse(raw: &str) -> Category {
        match normalize(raw).as_str() {
            "semillas" => Category::Seeds,
            "enlatados" => Category::Canned,
            "lacteos" => Category::Dairy,
            "verduras" => Category::Vegetables,
            "frutas" => Category::Fruits,
            "proteinas" => Category::Proteins,
            _ => Category::Other(raw.to_string()),
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            _ => c,
        })
        .collect()
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::parse(&raw)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

/// Administrative product status. Deliberately not part of the reservability
/// check; availability is derived from quantity and freshness alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    #[default]
    Available,
    SoldOut,
    Discontinued,
}

impl ProductStatus {
    pub fn all() -> &'static [ProductStatus] {
        &[
            ProductStatus::Available,
            ProductStatus::SoldOut,
            ProductStatus::Discontinued,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Available => "Disponible",
            ProductStatus::SoldOut => "Agotado",
            ProductStatus::Discontinued => "Descontinuado",
        }
    }

    /// Lowercase form the filter endpoint expects.
    pub fn filter_value(&self) -> &'static str {
        match self {
            ProductStatus::Available => "disponible",
            ProductStatus::SoldOut => "agotado",
            ProductStatus::Discontinued => "descontinuado",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProductStatus::Available => "status-available",
            ProductStatus::SoldOut => "status-sold-out",
            ProductStatus::Discontinued => "status-discontinued",
        }
    }

    /// Case-insensitive; anything unrecognized counts as available, matching
    /// how the catalog treats products with no status at all.
    pub fn parse(raw: &str) -> ProductStatus {
        match raw.trim().to_lowercase().as_str() {
            "agotado" => ProductStatus::SoldOut,
            "descontinuado" => ProductStatus::Discontinued,
            _ => ProductStatus::Available,
        }
    }
}

impl From<String> for ProductStatus {
    fn from(raw: String) -> Self {
        ProductStatus::parse(&raw)
    }
}

impl From<ProductStatus> for String {
    fn from(status: ProductStatus) -> Self {
        status.label().to_string()
    }
}

/// A donatable food product as the API serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub food_name: String,
    #[serde(default)]
    pub image: String,
    pub category: Category,
    /// Wire format `DD/MM/YYYY`; may be absent or malformed.
    #[serde(default)]
    pub expiration_date: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub status: ProductStatus,
}

impl Product {
    pub fn freshness(&self, today: NaiveDate) -> Option<Freshness> {
        freshness::evaluate(&self.expiration_date, today)
    }

    /// A product without a usable expiration date is not expired.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.freshness(today).is_some_and(|f| f.is_expired())
    }

    pub fn is_reservable(&self, today: NaiveDate) -> bool {
        self.quantity > 0 && !self.is_expired(today)
    }
}

/// Query parameters for `GET /api/foods/filter`. An empty filter means the
/// caller should hit `/api/foods/all` instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub status: Option<ProductStatus>,
}

impl ProductFilter {
    pub fn by_name(name: &str) -> Self {
        let trimmed = name.trim();
        Self {
            name: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.status.is_none()
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.label().to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.filter_value().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dummy_product(id: &str, quantity: u32, expiration: &str) -> Product {
        Product {
            id: id.to_string(),
            food_name: format!("Producto {id}"),
            image: String::new(),
            category: Category::Canned,
            expiration_date: expiration.to_string(),
            quantity,
            status: ProductStatus::Available,
        }
    }

    #[test]
    fn test_category_parse_accepts_accent_variants() {
        assert_eq!(Category::parse("Lácteos"), Category::Dairy);
        assert_eq!(Category::parse("Lacteos"), Category::Dairy);
        assert_eq!(Category::parse("proteínas"), Category::Proteins);
        assert_eq!(Category::parse("PROTEINAS"), Category::Proteins);
        assert_eq!(Category::parse("semillas"), Category::Seeds);
    }

    #[test]
    fn test_category_keeps_unknown_values() {
        let cat = Category::parse("Postres");
        assert_eq!(cat, Category::Other("Postres".to_string()));
        assert_eq!(cat.label(), "Postres");
        assert_eq!(cat.css_class(), "category-other");
    }

    #[test]
    fn test_category_serde_uses_display_label() {
        let json = serde_json::to_string(&Category::Proteins).unwrap();
        assert_eq!(json, "\"Proteínas\"");
        let parsed: Category = serde_json::from_str("\"lacteos\"").unwrap();
        assert_eq!(parsed, Category::Dairy);
    }

    #[test]
    fn test_status_parse_is_case_insensitive_and_defaults() {
        assert_eq!(ProductStatus::parse("Agotado"), ProductStatus::SoldOut);
        assert_eq!(ProductStatus::parse("agotado"), ProductStatus::SoldOut);
        assert_eq!(
            ProductStatus::parse("DESCONTINUADO"),
            ProductStatus::Discontinued
        );
        assert_eq!(ProductStatus::parse("disponible"), ProductStatus::Available);
        assert_eq!(ProductStatus::parse("???"), ProductStatus::Available);
        assert_eq!(ProductStatus::parse(""), ProductStatus::Available);
    }

    #[test]
    fn test_product_deserializes_with_missing_optional_fields() {
        let product: Product = serde_json::from_str(
            r#"{"id":"9","food_name":"Arroz","category":"Semillas"}"#,
        )
        .unwrap();
        assert_eq!(product.quantity, 0);
        assert_eq!(product.status, ProductStatus::Available);
        assert_eq!(product.expiration_date, "");
        assert!(product.freshness(date(2025, 1, 1)).is_none());
    }

    #[test]
    fn reservable_needs_stock_and_freshness() {
        let today = date(2025, 6, 15);
        assert!(dummy_product("a", 5, "20/06/2025").is_reservable(today));
        assert!(!dummy_product("b", 0, "20/06/2025").is_reservable(today));
        assert!(!dummy_product("c", 5, "14/06/2025").is_reservable(today));
        // Same-day expiration still reservable.
        assert!(dummy_product("d", 5, "15/06/2025").is_reservable(today));
        // No usable date: stock alone decides.
        assert!(dummy_product("e", 5, "").is_reservable(today));
    }

    #[test]
    fn status_does_not_drive_reservability() {
        let today = date(2025, 6, 15);
        let mut product = dummy_product("a", 5, "20/06/2025");
        product.status = ProductStatus::Discontinued;
        assert!(product.is_reservable(today));
    }

    #[test]
    fn test_filter_query_pairs() {
        let filter = ProductFilter {
            name: Some("arroz".to_string()),
            category: Some(Category::Dairy),
            status: Some(ProductStatus::SoldOut),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("name", "arroz".to_string()),
                ("category", "Lácteos".to_string()),
                ("status", "agotado".to_string()),
            ]
        );
        assert!(!filter.is_empty());
        assert!(ProductFilter::default().is_empty());
        assert!(ProductFilter::by_name("   ").is_empty());
    }
}
