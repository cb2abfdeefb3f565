use crate::country::{distinct_regions, paginate, visible, CountryRecord, PAGE_STEP};
use crate::ui::mvi::UiState;

/// Loaded records plus the region options derived from them once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub records: Vec<CountryRecord>,
    pub regions: Vec<String>,
}

impl Catalog {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        let regions = distinct_regions(&records);
        Self { records, regions }
    }
}

/// Progress of the single startup load.
///
/// Leaves `Pending` exactly once and never returns to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded(Catalog),
    Failed {
        message: String,
    },
}

/// Search text, region filter and page size chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    /// Empty means every region.
    pub region: String,
    /// Grows by [`PAGE_STEP`]; never shrinks while the screen lives.
    pub visible_count: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            region: String::new(),
            visible_count: PAGE_STEP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryState {
    pub load: LoadState,
    pub filter: FilterState,
    /// Index of the highlighted card within the current page.
    pub selected: usize,
    pub detail_open: bool,
}

impl UiState for DirectoryState {}

/// The slice of matches currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: Vec<&'a CountryRecord>,
    /// Matches before truncation.
    pub total_matches: usize,
}

impl Page<'_> {
    pub fn has_more(&self) -> bool {
        self.total_matches > self.items.len()
    }
}

impl DirectoryState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.load {
            LoadState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog().is_some()
    }

    pub fn regions(&self) -> &[String] {
        self.catalog().map(|c| c.regions.as_slice()).unwrap_or(&[])
    }

    /// Filtered and searched records, before paging.
    pub fn matches(&self) -> Vec<&CountryRecord> {
        match self.catalog() {
            Some(catalog) => visible(&catalog.records, &self.filter.query, &self.filter.region),
            None => Vec::new(),
        }
    }

    pub fn page(&self) -> Page<'_> {
        let matches = self.matches();
        let items = paginate(&matches, self.filter.visible_count).to_vec();
        Page {
            items,
            total_matches: matches.len(),
        }
    }

    /// Selection clamped to the current page, `None` when it is empty.
    pub fn selected_index(&self, page_len: usize) -> Option<usize> {
        if page_len == 0 {
            None
        } else {
            Some(self.selected.min(page_len - 1))
        }
    }

    pub fn selected_record(&self) -> Option<&CountryRecord> {
        let page = self.page();
        let index = self.selected_index(page.items.len())?;
        page.items.get(index).copied()
    }
}
