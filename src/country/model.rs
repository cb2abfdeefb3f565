use serde::{Deserialize, Deserializer, Serialize};

/// One country as delivered by the country API.
///
/// Field names follow the payload (`alpha3Code`, `emojiUnicode`, ...).
/// Fields the API may omit, or send as `null`, default to empty values so
/// a sparse record still loads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: String,
    /// Formal name (e.g. "Republic of Zambia"), when the API sends it.
    #[serde(default, rename = "official_name")]
    pub official_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capital: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flag: Flag,
    /// Stable identifier, used as the list key.
    #[serde(rename = "alpha3Code")]
    pub alpha3_code: String,
    #[serde(default, rename = "alpha2Code")]
    pub alpha2_code: Option<String>,
    /// Alpha-3 codes of neighbouring countries.
    #[serde(default, deserialize_with = "null_as_default")]
    pub borders: Vec<String>,
}

/// Flag representations shipped with each record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Flag {
    #[serde(deserialize_with = "null_as_default")]
    pub emoji: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emoji_unicode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub svg_file: String,
    #[serde(deserialize_with = "null_as_default")]
    pub large: String,
    #[serde(deserialize_with = "null_as_default")]
    pub medium: String,
    #[serde(deserialize_with = "null_as_default")]
    pub small: String,
}

/// `null` reads as the type's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CountryRecord {
    /// Population as displayed and searched.
    pub fn population_text(&self) -> String {
        self.population.to_string()
    }

    /// Area as displayed and searched. Whole numbers drop the fraction,
    /// so `1580.0` reads "1580".
    pub fn area_text(&self) -> String {
        format!("{}", self.area)
    }
}
