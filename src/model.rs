use serde::Deserialize;

/// Response envelope of the drink database: a list of matching recipes.
#[derive(Debug, Default, Deserialize)]
pub struct DrinkList {
    #[serde(default)]
    pub result: Vec<Drink>,
}

/// A single drink recipe as the database reports it.
///
/// `image` is never sent by the database; it is filled in locally once a
/// drink has been selected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    pub id: String,
    pub name: String,
    /// Community rating in percent
    #[serde(default)]
    pub rating: u32,
    #[serde(default)]
    pub description_plain: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub tastes: Vec<Taste>,
    #[serde(skip)]
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub text_plain: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Taste {
    pub text: String,
}
