//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use country_browser::config::ApiConfig;
use country_browser::country::{CountryRecord, Flag};

pub const ALAND_JSON: &str = r#"{"name":"Aland","capital":"Mariehamn","region":"Europe","population":29000,"area":1580,"alpha3Code":"ALA","borders":[],"flag":{"emoji":"🇦🇽","large":"https://flagcdn.com/w320/ax.png"}}"#;
pub const ZAMBIA_JSON: &str = r#"{"name":"Zambia","capital":"Lusaka","region":"Africa","population":18383955,"area":752612,"alpha3Code":"ZMB","borders":["AGO","BWA","COD","MWI","MOZ","NAM","TZA","ZWE"],"flag":{"emoji":"🇿🇲"}}"#;

pub fn record(name: &str, capital: &str, region: &str, code: &str) -> CountryRecord {
    CountryRecord {
        name: name.to_string(),
        capital: capital.to_string(),
        region: region.to_string(),
        alpha3_code: code.to_string(),
        flag: Flag::default(),
        ..Default::default()
    }
}

/// A mixed set of records in a fixed load order.
pub fn sample_records() -> Vec<CountryRecord> {
    vec![
        record("Aland", "Mariehamn", "Europe", "ALA"),
        record("Zambia", "Lusaka", "Africa", "ZMB"),
        record("Peru", "Lima", "Americas", "PER"),
        record("Kenya", "Nairobi", "Africa", "KEN"),
        record("Albania", "Tirana", "Europe", "ALB"),
        record("Japan", "Tokyo", "Asia", "JPN"),
        record("Fiji", "Suva", "Oceania", "FJI"),
        record("Chile", "Santiago", "Americas", "CHL"),
        record("Ghana", "Accra", "Africa", "GHA"),
        record("Nepal", "Kathmandu", "Asia", "NPL"),
        record("Malta", "Valletta", "Europe", "MLT"),
        record("Tonga", "Nuku'alofa", "Oceania", "TON"),
    ]
}

/// API settings pointing at `endpoint` with a literal key.
pub fn api_config(endpoint: &str, key: Option<&str>) -> ApiConfig {
    ApiConfig {
        endpoint: endpoint.to_string(),
        api_key: key.map(str::to_string),
        api_key_env: "COUNTRY_BROWSER_TEST_UNSET_KEY".to_string(),
        connect_timeout_seconds: 5,
    }
}
