//! Client-side list pipeline for transformer records.
//!
//! The records page fetches the whole collection once and then narrows,
//! reorders, and pages it purely in memory. The pipeline order is
//! fixed: search filter, capacity filter, sort, paginate. No I/O
//! happens here.

use crate::responses::TransformerRecord;
use jiff::Timestamp;
use rust_decimal::{Decimal, dec};

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Which record field a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Name,
    Location,
    Admin,
}

impl SearchField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Location => "Location",
            Self::Admin => "Admin",
        }
    }

    pub const ALL: [SearchField; 3] =
        [Self::Name, Self::Location, Self::Admin];
}

/// Capacity bucket filter. Records without a capacity value only ever
/// match `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityFilter {
    #[default]
    All,
    /// 0 <= capacity < 50
    Small,
    /// 50 <= capacity < 200
    Medium,
    /// capacity >= 200
    Large,
}

impl CapacityFilter {
    pub fn matches(&self, capacity: Option<Decimal>) -> bool {
        let Some(c) = capacity else {
            return matches!(self, Self::All);
        };
        match self {
            Self::All => true,
            Self::Small => c >= dec!(0) && c < dec!(50),
            Self::Medium => c >= dec!(50) && c < dec!(200),
            Self::Large => c >= dec!(200),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All capacities",
            Self::Small => "Small (< 50)",
            Self::Medium => "Medium (50-200)",
            Self::Large => "Large (>= 200)",
        }
    }

    pub const ALL: [CapacityFilter; 4] =
        [Self::All, Self::Small, Self::Medium, Self::Large];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Name,
    CreatedAt,
    /// Most recent image upload, falling back to the record's creation
    /// time when it has no images.
    #[default]
    LastUpdate,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::CreatedAt => "Created",
            Self::LastUpdate => "Last update",
        }
    }

    pub const ALL: [SortKey; 3] =
        [Self::Name, Self::CreatedAt, Self::LastUpdate];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// All inputs to the pipeline besides the collection itself. `page` is
/// 1-based. The UI rebuilds the query with `page: 1` whenever any
/// filter or sort input changes; changing the page alone keeps the
/// rest of the query untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub search_term: String,
    pub search_field: SearchField,
    pub capacity_filter: CapacityFilter,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            search_field: SearchField::default(),
            capacity_filter: CapacityFilter::default(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of pipeline output.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub records: Vec<TransformerRecord>,
    /// Records matching the filters, across all pages.
    pub total_matches: usize,
    pub total_pages: usize,
}

/// Effective "last update" of a record for sorting.
pub fn last_update(record: &TransformerRecord) -> Timestamp {
    record
        .images
        .iter()
        .map(|image| image.upload_time)
        .max()
        .unwrap_or(record.created_at)
}

fn matches_search(
    record: &TransformerRecord,
    field: SearchField,
    term: &str,
) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let haystack = match field {
        SearchField::Name => record.name.clone(),
        SearchField::Location => {
            record.location_name.clone().unwrap_or_default()
        }
        SearchField::Admin => match &record.uploaded_by {
            Some(admin) => admin.display_label().to_string(),
            None => return false,
        },
    };
    haystack.to_lowercase().contains(&needle)
}

/// Run the full pipeline over an already-fetched collection.
pub fn apply(records: &[TransformerRecord], query: &ListQuery) -> ListPage {
    let mut matches: Vec<&TransformerRecord> = records
        .iter()
        .filter(|r| matches_search(r, query.search_field, &query.search_term))
        .filter(|r| query.capacity_filter.matches(r.capacity))
        .collect();

    // Stable sort so that equal keys keep their fetched order.
    matches.sort_by(|a, b| {
        let ordering = match query.sort_key {
            SortKey::Name => {
                a.name.to_lowercase().cmp(&b.name.to_lowercase())
            }
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::LastUpdate => last_update(a).cmp(&last_update(b)),
        };
        match query.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    let total_matches = matches.len();
    let page_size = query.page_size.max(1);
    let total_pages = total_matches.div_ceil(page_size);

    let start = query.page.saturating_sub(1) * page_size;
    let records = matches
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    ListPage {
        records,
        total_matches,
        total_pages,
    }
}

/// Page to display after the collection shrinks under the current
/// query: the current page while still in range, else the last page
/// (page 1 when nothing matches).
pub fn clamp_page(current: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        1
    } else {
        current.min(total_pages)
    }
}

/// An entry in the rendered page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Windowed page-number scheme: always the first and last page, the
/// current page with one neighbor on each side, and a single ellipsis
/// marker per gap.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    let current = current as i64;
    let mut items = Vec::new();
    for page in 1..=total as i64 {
        if page == 1 || page == total as i64 || (page - current).abs() <= 1 {
            items.push(PageItem::Page(page as usize));
        } else if matches!(items.last(), Some(PageItem::Page(_))) {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::{AdminIdentity, Image, TransformerRecord};
    use crate::{ImageId, ImageType, RecordId};

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn record(id: i64, name: &str, capacity: Option<&str>) -> TransformerRecord {
        TransformerRecord {
            id: RecordId(id),
            name: name.to_string(),
            location_name: None,
            location_lat: None,
            location_lng: None,
            capacity: capacity.map(|c| c.parse().unwrap()),
            created_at: ts("2024-01-01T00:00:00Z"),
            uploaded_by: None,
            images: vec![],
        }
    }

    fn image(id: i64, upload_time: &str) -> Image {
        Image {
            id: ImageId(id),
            file_path: format!("/uploads/{id}.jpg"),
            image_type: ImageType::Maintenance,
            weather_condition: None,
            upload_time: ts(upload_time),
        }
    }

    fn names(page: &ListPage) -> Vec<&str> {
        page.records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn search_by_name_is_case_insensitive() {
        let records = vec![
            record(1, "North Substation", None),
            record(2, "South Substation", None),
            record(3, "Depot", None),
        ];
        let query = ListQuery {
            search_term: "SUBSTATION".into(),
            sort_key: SortKey::Name,
            sort_direction: SortDirection::Ascending,
            ..Default::default()
        };
        let page = apply(&records, &query);
        assert_eq!(names(&page), ["North Substation", "South Substation"]);

        // Clearing the term restores the full collection.
        let query = ListQuery {
            search_term: String::new(),
            ..query
        };
        assert_eq!(apply(&records, &query).total_matches, 3);
    }

    #[test]
    fn search_by_location_and_admin() {
        let mut a = record(1, "A", None);
        a.location_name = Some("Colombo".into());
        let mut b = record(2, "B", None);
        b.location_name = Some("Kandy".into());
        b.uploaded_by = Some(AdminIdentity {
            id: 9,
            username: "admin1".into(),
            display_name: Some("Nimal Perera".into()),
        });
        let c = record(3, "C", None);
        let records = vec![a, b, c];

        let query = ListQuery {
            search_term: "colombo".into(),
            search_field: SearchField::Location,
            ..Default::default()
        };
        assert_eq!(names(&apply(&records, &query)), ["A"]);

        // Admin search matches the display label; records with no
        // uploader never match a non-empty term.
        let query = ListQuery {
            search_term: "perera".into(),
            search_field: SearchField::Admin,
            ..Default::default()
        };
        assert_eq!(names(&apply(&records, &query)), ["B"]);
    }

    #[test]
    fn capacity_buckets() {
        let records = vec![
            record(1, "A", Some("10")),
            record(2, "B", Some("60")),
            record(3, "C", Some("300")),
            record(4, "D", None),
        ];
        let query = |filter| ListQuery {
            capacity_filter: filter,
            sort_key: SortKey::Name,
            sort_direction: SortDirection::Ascending,
            ..Default::default()
        };

        assert_eq!(
            names(&apply(&records, &query(CapacityFilter::Small))),
            ["A"]
        );
        assert_eq!(
            names(&apply(&records, &query(CapacityFilter::Medium))),
            ["B"]
        );
        assert_eq!(
            names(&apply(&records, &query(CapacityFilter::Large))),
            ["C"]
        );
        // Missing capacity only appears under All.
        assert_eq!(
            names(&apply(&records, &query(CapacityFilter::All))),
            ["A", "B", "C", "D"]
        );
    }

    #[test]
    fn bucket_boundaries() {
        assert!(CapacityFilter::Small.matches(Some("0".parse().unwrap())));
        assert!(!CapacityFilter::Small.matches(Some("50".parse().unwrap())));
        assert!(CapacityFilter::Medium.matches(Some("50".parse().unwrap())));
        assert!(!CapacityFilter::Medium.matches(Some("200".parse().unwrap())));
        assert!(CapacityFilter::Large.matches(Some("200".parse().unwrap())));
        assert!(!CapacityFilter::Large.matches(None));
        assert!(CapacityFilter::All.matches(None));
    }

    #[test]
    fn sort_by_name_descending_reverses_ascending() {
        let records = vec![
            record(1, "beta", None),
            record(2, "Alpha", None),
            record(3, "gamma", None),
        ];
        let asc = ListQuery {
            sort_key: SortKey::Name,
            sort_direction: SortDirection::Ascending,
            ..Default::default()
        };
        let desc = ListQuery {
            sort_direction: SortDirection::Descending,
            ..asc.clone()
        };
        let sorted = apply(&records, &asc);
        let mut ascending = names(&sorted);
        assert_eq!(ascending, ["Alpha", "beta", "gamma"]);
        ascending.reverse();
        assert_eq!(names(&apply(&records, &desc)), ascending);
    }

    #[test]
    fn last_update_uses_newest_image_or_creation_time() {
        let mut a = record(1, "A", None);
        a.images = vec![
            image(1, "2024-03-01T00:00:00Z"),
            image(2, "2024-06-01T00:00:00Z"),
        ];
        assert_eq!(last_update(&a), ts("2024-06-01T00:00:00Z"));

        let b = record(2, "B", None);
        assert_eq!(last_update(&b), b.created_at);

        // B created later than A's newest image sorts first descending.
        let mut b = b;
        b.created_at = ts("2024-07-01T00:00:00Z");
        let query = ListQuery {
            sort_key: SortKey::LastUpdate,
            sort_direction: SortDirection::Descending,
            ..Default::default()
        };
        assert_eq!(names(&apply(&[a, b], &query)), ["B", "A"]);
    }

    #[test]
    fn pagination_partitions_the_filtered_collection() {
        let records: Vec<_> =
            (1..=7).map(|i| record(i, &format!("R{i:02}"), None)).collect();
        let base = ListQuery {
            sort_key: SortKey::Name,
            sort_direction: SortDirection::Ascending,
            page_size: 3,
            ..Default::default()
        };

        let first = apply(&records, &base);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_matches, 7);

        // Concatenating all pages reproduces the sorted collection.
        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let q = ListQuery { page, ..base.clone() };
            seen.extend(
                apply(&records, &q)
                    .records
                    .into_iter()
                    .map(|r| r.name),
            );
        }
        let expected: Vec<_> = (1..=7).map(|i| format!("R{i:02}")).collect();
        assert_eq!(seen, expected);

        // Out-of-range page yields an empty slice.
        let q = ListQuery { page: 4, ..base };
        assert!(apply(&records, &q).records.is_empty());
    }

    #[test]
    fn page_clamps_after_collection_shrinks() {
        let records: Vec<_> =
            (1..=7).map(|i| record(i, &format!("R{i:02}"), None)).collect();
        let query = ListQuery {
            page: 3,
            page_size: 3,
            ..Default::default()
        };
        assert_eq!(apply(&records, &query).records.len(), 1);

        // Deleting the only record on page 3 leaves the query pointing
        // past the end; the view falls back to the new last page.
        let shrunk = &records[..6];
        let page = apply(shrunk, &query);
        assert!(page.records.is_empty());
        assert_eq!(page.total_pages, 2);
        assert_eq!(clamp_page(query.page, page.total_pages), 2);

        // In-range pages are untouched; an emptied collection goes
        // back to page 1.
        assert_eq!(clamp_page(2, 5), 2);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let page = apply(&[], &ListQuery::default());
        assert!(page.records.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_matches, 0);
    }

    #[test]
    fn page_items_windowing() {
        use PageItem::*;
        assert_eq!(page_items(1, 1), [Page(1)]);
        assert_eq!(page_items(1, 3), [Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_items(1, 10),
            [Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(5, 10),
            [
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
        assert_eq!(
            page_items(10, 10),
            [Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert!(page_items(1, 0).is_empty());
    }
}
