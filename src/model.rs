use serde::{Deserialize, Deserializer, Serialize};

/// One dessert recipe as returned by TheMealDB
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    /// Comma-separated ingredient names, passed through as-is
    #[serde(rename = "strIngredients", default)]
    pub raw_ingredients: Option<String>,
}

impl Meal {
    /// Ingredients derived from `raw_ingredients`
    pub fn ingredients(&self) -> Vec<Ingredient> {
        extract_ingredients(self.raw_ingredients.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Always empty: the source field has no measurement delimiter
    pub measurement: String,
}

/// The `{ "meals": [...] }` envelope shared by the filter and lookup endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealsResult {
    /// TheMealDB answers lookups of unknown ids with `"meals": null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meals: Vec<Meal>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Meal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Meal>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Split a raw ingredient string on commas into trimmed [`Ingredient`]s.
///
/// Empty segments (e.g. from a trailing comma) are kept as empty names.
pub fn extract_ingredients(raw: Option<&str>) -> Vec<Ingredient> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(|piece| Ingredient {
            name: piece.trim().to_string(),
            measurement: String::new(),
        })
        .collect()
}
