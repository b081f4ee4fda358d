//! Recipe domain types decoded from TheMealDB JSON payloads
//!
//! Field names follow the wire format (`idCategory`, `strMeal`, ...) through
//! serde renames so a decoded value re-encodes to the same JSON object.

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// A named grouping of meals, as listed by `categories.php`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: String,

    #[serde(rename = "strCategory")]
    pub name: String,

    #[serde(rename = "strCategoryThumb")]
    pub thumbnail_url: String,

    #[serde(rename = "strCategoryDescription")]
    pub description: String,
}

/// A single recipe
///
/// Only the id, name and thumbnail are guaranteed. The summary form served by
/// `filter.php` carries nothing else, so every other field is optional and an
/// absent key, an explicit `null` and an empty string stay distinguishable:
/// the first two decode to `None`, the last to `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,

    #[serde(rename = "strMeal")]
    pub name: String,

    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,

    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,

    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,

    #[serde(rename = "strArea", default)]
    pub area: Option<String>,

    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,

    #[serde(rename = "strYoutube", default)]
    pub youtube_url: Option<String>,

    #[serde(rename = "strSource", default)]
    pub source_url: Option<String>,

    #[serde(rename = "dateModified", default)]
    pub date_modified: Option<String>,
}

impl Meal {
    /// Instructions text, only when present and non-empty
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// The external video link, only when it is a syntactically valid
    /// absolute URL. An empty or malformed value yields `None`.
    pub fn video_url(&self) -> Option<Url> {
        self.youtube_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| Url::parse(s).ok())
    }

    /// Comma-separated tags split into trimmed, non-empty entries
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Envelope served by `categories.php`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub categories: Vec<Category>,
}

/// Envelope served by `filter.php`, `lookup.php` and `search.php`
///
/// The API answers an unknown filter with `{"meals": null}`; that decodes to
/// an empty list rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub meals: Vec<Meal>,
}

/// Accepted shapes for a meal list: a bare array or the `meals` envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MealListPayload {
    Bare(Vec<Meal>),
    Envelope(MealResponse),
}

impl From<MealListPayload> for Vec<Meal> {
    fn from(payload: MealListPayload) -> Self {
        match payload {
            MealListPayload::Bare(meals) => meals,
            MealListPayload::Envelope(response) => response.meals,
        }
    }
}

impl From<CategoryResponse> for Vec<Category> {
    fn from(response: CategoryResponse) -> Self {
        response.categories
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BEEF: &str = r#"{"categories":[{"idCategory":"1","strCategory":"Beef","strCategoryThumb":"http://x/beef.png","strCategoryDescription":"Beef dishes"}]}"#;

    #[test]
    fn test_category_response_decodes() {
        let response: CategoryResponse = serde_json::from_str(BEEF).unwrap();
        assert_eq!(response.categories.len(), 1);

        let beef = &response.categories[0];
        assert_eq!(beef.id, "1");
        assert_eq!(beef.name, "Beef");
        assert_eq!(beef.thumbnail_url, "http://x/beef.png");
        assert_eq!(beef.description, "Beef dishes");
    }

    #[test]
    fn test_category_round_trip_preserves_wire_fields() {
        let original: serde_json::Value = serde_json::from_str(BEEF).unwrap();
        let response: CategoryResponse = serde_json::from_value(original.clone()).unwrap();
        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded, original);
    }

    #[test]
    fn test_category_round_trip_preserves_unicode_and_whitespace() {
        let original = json!({
            "idCategory": "12",
            "strCategory": "Crème brûlée",
            "strCategoryThumb": "https://x/cr%C3%A8me.png",
            "strCategoryDescription": "  line one\nline two\t"
        });
        let category: Category = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&category).unwrap(), original);
    }

    #[test]
    fn test_category_missing_field_fails() {
        let result: Result<Category, _> = serde_json::from_value(json!({
            "idCategory": "1",
            "strCategory": "Beef"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_meal_summary_decodes_with_optional_fields_absent() {
        let meal: Meal = serde_json::from_value(json!({
            "idMeal": "52874",
            "strMeal": "Beef Stew",
            "strMealThumb": "http://x/stew.png"
        }))
        .unwrap();

        assert_eq!(meal.id, "52874");
        assert_eq!(meal.instructions, None);
        assert_eq!(meal.tags, None);
        assert_eq!(meal.youtube_url, None);
        assert_eq!(meal.source_url, None);
        assert_eq!(meal.date_modified, None);
        assert_eq!(meal.video_url(), None);
    }

    #[test]
    fn test_meal_null_and_empty_stay_distinct() {
        let meal: Meal = serde_json::from_value(json!({
            "idMeal": "1",
            "strMeal": "Soup",
            "strMealThumb": "http://x/soup.png",
            "strTags": null,
            "strSource": ""
        }))
        .unwrap();

        assert_eq!(meal.tags, None);
        assert_eq!(meal.source_url, Some(String::new()));
    }

    #[test]
    fn test_meal_missing_id_fails() {
        let result: Result<Meal, _> = serde_json::from_value(json!({
            "strMeal": "Soup",
            "strMealThumb": "http://x/soup.png"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_video_url_requires_valid_absolute_url() {
        let mut meal: Meal = serde_json::from_value(json!({
            "idMeal": "1",
            "strMeal": "Soup",
            "strMealThumb": "http://x/soup.png",
            "strYoutube": "https://www.youtube.com/watch?v=abc"
        }))
        .unwrap();
        assert_eq!(
            meal.video_url().map(|u| u.to_string()),
            Some("https://www.youtube.com/watch?v=abc".to_string())
        );

        meal.youtube_url = Some(String::new());
        assert_eq!(meal.video_url(), None);

        meal.youtube_url = Some("not a url".to_string());
        assert_eq!(meal.video_url(), None);
    }

    #[test]
    fn test_instructions_hidden_when_blank() {
        let mut meal: Meal = serde_json::from_value(json!({
            "idMeal": "1",
            "strMeal": "Soup",
            "strMealThumb": "http://x/soup.png",
            "strInstructions": "   "
        }))
        .unwrap();
        assert_eq!(meal.instructions(), None);

        meal.instructions = Some("Boil water.".to_string());
        assert_eq!(meal.instructions(), Some("Boil water."));
    }

    #[test]
    fn test_tag_list_splits_and_trims() {
        let meal: Meal = serde_json::from_value(json!({
            "idMeal": "1",
            "strMeal": "Stew",
            "strMealThumb": "http://x/stew.png",
            "strTags": "Stew, Beef,,Winter "
        }))
        .unwrap();
        assert_eq!(meal.tag_list(), vec!["Stew", "Beef", "Winter"]);
    }

    #[test]
    fn test_meal_list_accepts_bare_array() {
        let payload: MealListPayload = serde_json::from_str(
            r#"[{"idMeal":"52874","strMeal":"Beef Stew","strMealThumb":"http://x/stew.png"}]"#,
        )
        .unwrap();
        let meals: Vec<Meal> = payload.into();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Beef Stew");
    }

    #[test]
    fn test_meal_list_accepts_envelope() {
        let payload: MealListPayload = serde_json::from_str(
            r#"{"meals":[{"idMeal":"1","strMeal":"A","strMealThumb":"t"},{"idMeal":"2","strMeal":"B","strMealThumb":"t"}]}"#,
        )
        .unwrap();
        let meals: Vec<Meal> = payload.into();
        let ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_meal_list_null_envelope_is_empty() {
        let payload: MealListPayload = serde_json::from_str(r#"{"meals":null}"#).unwrap();
        let meals: Vec<Meal> = payload.into();
        assert!(meals.is_empty());
    }

    #[test]
    fn test_meal_list_rejects_unrelated_shape() {
        let result: Result<MealListPayload, _> = serde_json::from_str(r#"{"categories":[]}"#);
        assert!(result.is_err());
    }
}
