//! Filtering, searching and paging over a loaded record set.
//!
//! Everything here is a pure function of its inputs; the UI recomputes the
//! visible page on every frame.

use std::borrow::Cow;

use super::model::CountryRecord;

/// Number of cards shown initially and added by each "load more".
pub const PAGE_STEP: usize = 8;

/// Record fields that take part in free-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    OfficialName,
    Capital,
    Region,
    Subregion,
    Population,
    Area,
    Alpha2Code,
    Alpha3Code,
    Borders,
}

impl SearchField {
    pub const ALL: [SearchField; 10] = [
        SearchField::Name,
        SearchField::OfficialName,
        SearchField::Capital,
        SearchField::Region,
        SearchField::Subregion,
        SearchField::Population,
        SearchField::Area,
        SearchField::Alpha2Code,
        SearchField::Alpha3Code,
        SearchField::Borders,
    ];

    /// Text form of this field for `record`, or `None` when the record
    /// does not carry it.
    pub fn text<'a>(&self, record: &'a CountryRecord) -> Option<Cow<'a, str>> {
        match self {
            SearchField::Name => Some(Cow::Borrowed(record.name.as_str())),
            SearchField::OfficialName => record.official_name.as_deref().map(Cow::Borrowed),
            SearchField::Capital => Some(Cow::Borrowed(record.capital.as_str())),
            SearchField::Region => Some(Cow::Borrowed(record.region.as_str())),
            SearchField::Subregion => record.subregion.as_deref().map(Cow::Borrowed),
            SearchField::Population => Some(Cow::Owned(record.population_text())),
            SearchField::Area => Some(Cow::Owned(record.area_text())),
            SearchField::Alpha2Code => record.alpha2_code.as_deref().map(Cow::Borrowed),
            SearchField::Alpha3Code => Some(Cow::Borrowed(record.alpha3_code.as_str())),
            SearchField::Borders => Some(Cow::Owned(record.borders.join(","))),
        }
    }
}

/// True when any searchable field of `record`, lower-cased, contains
/// `query` as typed. The query itself is not folded, so a query with
/// upper-case letters matches nothing. An empty query matches everything.
pub fn matches_query(record: &CountryRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    SearchField::ALL.iter().any(|field| {
        field
            .text(record)
            .is_some_and(|text| text.to_lowercase().contains(query))
    })
}

/// Region predicate. This is substring containment, not equality: a
/// filter of "Euro" keeps "Europe". An empty filter keeps everything.
pub fn matches_region(record: &CountryRecord, region: &str) -> bool {
    record.region.contains(region)
}

/// Records passing both the region and the search predicate, in load order.
pub fn visible<'a>(records: &'a [CountryRecord], query: &str, region: &str) -> Vec<&'a CountryRecord> {
    records
        .iter()
        .filter(|record| matches_region(record, region) && matches_query(record, query))
        .collect()
}

/// First `count` entries of an already filtered sequence. Asking for more
/// than is available yields everything available.
pub fn paginate<'s, 'a>(matches: &'s [&'a CountryRecord], count: usize) -> &'s [&'a CountryRecord] {
    &matches[..count.min(matches.len())]
}

/// Distinct `region` values of `records` in first-seen order.
pub fn distinct_regions(records: &[CountryRecord]) -> Vec<String> {
    let mut regions: Vec<String> = Vec::new();
    for record in records {
        if !regions.iter().any(|region| region == &record.region) {
            regions.push(record.region.clone());
        }
    }
    regions
}

/// Region after `current` when walking "all" → each region → "all".
///
/// `current` is the active filter (empty for "all"). A filter that is not
/// among `regions` restarts the walk from "all".
pub fn cycle_region(regions: &[String], current: &str, forward: bool) -> String {
    if regions.is_empty() {
        return String::new();
    }
    // Slot 0 is "all", slot i + 1 is regions[i].
    let slots = regions.len() + 1;
    let position = if current.is_empty() {
        0
    } else {
        match regions.iter().position(|region| region == current) {
            Some(index) => index + 1,
            None => 0,
        }
    };
    let next = if forward {
        (position + 1) % slots
    } else {
        (position + slots - 1) % slots
    };
    if next == 0 {
        String::new()
    } else {
        regions[next - 1].clone()
    }
}
