use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::error::{FoodItemError, FoodItemResult};

/// Custom validator rejecting empty and whitespace-only strings
fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Custom validator for expiration date strings
fn validate_expiration_date(value: &str) -> Result<(), validator::ValidationError> {
    if parse_expiration_date(value).is_err() {
        return Err(validator::ValidationError::new("invalid_expiration_date"));
    }
    Ok(())
}

/// Parse an expiration date given as an RFC 3339 timestamp or a bare
/// `YYYY-MM-DD` date (interpreted as midnight UTC).
pub fn parse_expiration_date(value: &str) -> FoodItemResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            FoodItemError::Validation(format!(
                "expiration_date '{}' is not an RFC 3339 timestamp or YYYY-MM-DD date",
                value
            ))
        })
}

/// Deduplicate category names preserving first occurrence.
pub fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Sort orders accepted by the listing adapter
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortOrder {
    NameAsc,
    QuantityDesc,
    QuantityAsc,
    ExpirationAsc,
    ExpirationDesc,
}

/// Food item entity - a tracked pantry item with its category names resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    /// Unique identifier
    pub id: Uuid,
    /// Item name
    pub name: String,
    /// When the item expires (drives default listing order)
    pub expiration_date: DateTime<Utc>,
    /// How many units are on hand (always >= 1)
    pub quantity: i32,
    /// Photo hosted on the external file service
    pub image_url: Option<String>,
    /// Free-form search keywords
    pub keywords: Vec<String>,
    /// Where the item is stored (e.g. "fridge", "pantry shelf 2")
    pub placement: String,
    /// Archived items are excluded from the collection listing but stay
    /// reachable by id
    pub hidden: bool,
    /// Resolved category names
    pub categories: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new food item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateFoodItem {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    /// RFC 3339 timestamp or YYYY-MM-DD date
    #[validate(custom(function = "validate_expiration_date"))]
    pub expiration_date: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub image_url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub placement: String,
    #[serde(default)]
    pub category_names: Vec<String>,
}

/// DTO for updating an existing food item.
///
/// Absent fields are left unchanged; present fields replace the stored
/// value. A present `category_names` replaces the whole link set.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFoodItem {
    /// Target item id (required; carried in the body, not the path)
    pub id: Option<Uuid>,
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_expiration_date"))]
    pub expiration_date: Option<String>,
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
    pub image_url: Option<String>,
    pub keywords: Option<Vec<String>>,
    #[validate(custom(function = "validate_not_blank"))]
    pub placement: Option<String>,
    pub hidden: Option<bool>,
    pub category_names: Option<Vec<String>>,
}

/// DTO for deleting a food item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DeleteFoodItem {
    /// Target item id (required; carried in the body, not the path)
    pub id: Option<Uuid>,
}

/// Response body for a successful deletion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteFoodItemResponse {
    pub message: String,
    pub deleted_id: Uuid,
}

/// What the repository hands back after a delete, so the caller can
/// dispatch photo cleanup.
#[derive(Debug, Clone)]
pub struct DeletedFoodItem {
    pub id: Uuid,
    pub image_url: Option<String>,
}

/// Query parameters for the collection endpoint
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct FoodItemQuery {
    /// Fetch a single item by id (hidden items included)
    pub id: Option<Uuid>,
    /// Case-insensitive substring match against name, keywords, placement
    /// and category names
    pub search: Option<String>,
    /// Sort order applied to the listing
    pub sort: Option<SortOrder>,
}

impl FoodItem {
    /// Create a new food item from the CreateFoodItem DTO
    pub fn new(input: CreateFoodItem) -> FoodItemResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::now_v7(),
            name: input.name,
            expiration_date: parse_expiration_date(&input.expiration_date)?,
            quantity: input.quantity,
            image_url: input.image_url,
            keywords: input.keywords,
            placement: input.placement,
            hidden: false,
            categories: dedup_preserving_order(input.category_names),
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a sparse patch from the UpdateFoodItem DTO.
    ///
    /// Fallible fields are parsed before anything is mutated, so a rejected
    /// patch leaves the item exactly as it was.
    pub fn apply_update(&mut self, update: UpdateFoodItem) -> FoodItemResult<()> {
        let expiration_date = update
            .expiration_date
            .as_deref()
            .map(parse_expiration_date)
            .transpose()?;

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(expiration_date) = expiration_date {
            self.expiration_date = expiration_date;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(keywords) = update.keywords {
            self.keywords = keywords;
        }
        if let Some(placement) = update.placement {
            self.placement = placement;
        }
        if let Some(hidden) = update.hidden {
            self.hidden = hidden;
        }
        if let Some(category_names) = update.category_names {
            self.categories = dedup_preserving_order(category_names);
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateFoodItem {
        CreateFoodItem {
            name: "Milk".to_string(),
            expiration_date: "2026-09-01".to_string(),
            quantity: 2,
            image_url: None,
            keywords: vec!["dairy".to_string()],
            placement: "fridge".to_string(),
            category_names: vec![],
        }
    }

    #[test]
    fn test_parse_expiration_date_rfc3339() {
        let dt = parse_expiration_date("2026-09-01T10:30:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-09-01T10:30:00+00:00");
    }

    #[test]
    fn test_parse_expiration_date_bare_date_is_midnight_utc() {
        let dt = parse_expiration_date("2026-09-01").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-09-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_expiration_date_rejects_garbage() {
        assert!(parse_expiration_date("next tuesday").is_err());
        assert!(parse_expiration_date("2026-13-40").is_err());
    }

    #[test]
    fn test_dedup_preserves_first_occurrence() {
        let names = vec![
            "Dairy".to_string(),
            "Breakfast".to_string(),
            "Dairy".to_string(),
        ];
        assert_eq!(
            dedup_preserving_order(names),
            vec!["Dairy".to_string(), "Breakfast".to_string()]
        );
    }

    #[test]
    fn test_create_validation_rejects_zero_quantity() {
        let mut input = create_input();
        input.quantity = 0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_validation_rejects_blank_name() {
        let mut input = create_input();
        input.name = "   ".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_validation_rejects_bad_date() {
        let mut input = create_input();
        input.expiration_date = "soon".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_new_dedups_categories() {
        let mut input = create_input();
        input.category_names = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let item = FoodItem::new(input).unwrap();
        assert_eq!(item.categories, vec!["a".to_string(), "b".to_string()]);
        assert!(!item.hidden);
    }

    #[test]
    fn test_apply_update_sparse_patch() {
        let mut item = FoodItem::new(create_input()).unwrap();
        let before_update = item.updated_at;

        item.apply_update(UpdateFoodItem {
            id: Some(item.id),
            quantity: Some(5),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(item.quantity, 5);
        assert_eq!(item.name, "Milk");
        assert_eq!(item.placement, "fridge");
        assert!(item.updated_at >= before_update);
    }

    #[test]
    fn test_apply_update_absent_image_url_is_kept() {
        let mut input = create_input();
        input.image_url = Some("https://files.example.com/f/abc123".to_string());
        let mut item = FoodItem::new(input).unwrap();

        item.apply_update(UpdateFoodItem {
            id: Some(item.id),
            name: Some("Oat milk".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            item.image_url.as_deref(),
            Some("https://files.example.com/f/abc123")
        );
    }

    #[test]
    fn test_apply_update_bad_date_leaves_item_unchanged() {
        let mut item = FoodItem::new(create_input()).unwrap();
        let original_expiration = item.expiration_date;
        let original_updated_at = item.updated_at;

        let result = item.apply_update(UpdateFoodItem {
            id: Some(item.id),
            name: Some("Renamed".to_string()),
            expiration_date: Some("not-a-date".to_string()),
            ..Default::default()
        });

        assert!(matches!(result, Err(FoodItemError::Validation(_))));
        assert_eq!(item.name, "Milk");
        assert_eq!(item.expiration_date, original_expiration);
        assert_eq!(item.updated_at, original_updated_at);
    }

    #[test]
    fn test_update_validation_rejects_zero_quantity() {
        let update = UpdateFoodItem {
            id: Some(Uuid::now_v7()),
            quantity: Some(0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
