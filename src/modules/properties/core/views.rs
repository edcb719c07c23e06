// Derived views over the authoritative record list.
//
// Pure functions, recomputed on every read. Nothing here is cached.

use crate::modules::properties::core::record::{PropertyStatus, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    PricePerNight,
    Status,
    #[default]
    CreatedAt,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortKey::Name),
            "pricePerNight" | "price_per_night" | "price" => Ok(SortKey::PricePerNight),
            "status" => Ok(SortKey::Status),
            "createdAt" | "created_at" => Ok(SortKey::CreatedAt),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            key: SortKey::CreatedAt,
            ascending: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
}

/// Case-insensitive substring match on the name. A blank query matches everything.
pub fn filtered_by<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
        .collect()
}

fn compare(a: &Record, b: &Record, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::PricePerNight => a.price_per_night.total_cmp(&b.price_per_night),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::CreatedAt => a.created_at.unwrap_or(0).cmp(&b.created_at.unwrap_or(0)),
    }
}

/// Stable sort. Descending order reverses the comparison, not the list, so ties keep
/// their prior relative order in both directions.
pub fn sorted_by<'a>(mut records: Vec<&'a Record>, order: SortOrder) -> Vec<&'a Record> {
    records.sort_by(|a, b| {
        let ord = compare(a, b, order.key);
        if order.ascending { ord } else { ord.reverse() }
    });
    records
}

pub fn counts(records: &[Record]) -> Counts {
    records.iter().fold(
        Counts {
            total: records.len(),
            ..Counts::default()
        },
        |mut acc, r| {
            match r.status {
                PropertyStatus::Available => acc.available += 1,
                PropertyStatus::Booked => acc.booked += 1,
            }
            acc
        },
    )
}

#[cfg(test)]
mod views_tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn record(id: &str, name: &str, price: f64, status: PropertyStatus, created_at: Option<i64>) -> Record {
        Record {
            id: id.into(),
            name: name.into(),
            price_per_night: price,
            status,
            created_at,
        }
    }

    #[fixture]
    fn listings() -> Vec<Record> {
        vec![
            record("r1", "Lakeview Villa", 180.0, PropertyStatus::Booked, Some(3_000)),
            record("r2", "Downtown Loft", 95.0, PropertyStatus::Available, Some(1_000)),
            record("r3", "lake cabin", 95.0, PropertyStatus::Available, None),
        ]
    }

    fn ids(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[rstest]
    fn it_should_filter_case_insensitively(listings: Vec<Record>) {
        assert_eq!(ids(&filtered_by(&listings, "LAKE")), vec!["r1", "r3"]);
        assert_eq!(ids(&filtered_by(&listings, "lake")), vec!["r1", "r3"]);
    }

    #[rstest]
    fn it_should_match_everything_on_a_blank_query(listings: Vec<Record>) {
        assert_eq!(filtered_by(&listings, "  ").len(), 3);
    }

    #[rstest]
    fn it_should_sort_by_price_keeping_ties_in_order(listings: Vec<Record>) {
        let all = filtered_by(&listings, "");
        let asc = sorted_by(all.clone(), SortOrder { key: SortKey::PricePerNight, ascending: true });
        assert_eq!(ids(&asc), vec!["r2", "r3", "r1"]);
        let desc = sorted_by(all, SortOrder { key: SortKey::PricePerNight, ascending: false });
        assert_eq!(ids(&desc), vec!["r1", "r2", "r3"]);
    }

    #[rstest]
    fn it_should_sort_missing_created_at_as_earliest(listings: Vec<Record>) {
        let sorted = sorted_by(filtered_by(&listings, ""), SortOrder::default());
        assert_eq!(ids(&sorted), vec!["r3", "r2", "r1"]);
    }

    #[rstest]
    fn it_should_sort_by_name_ignoring_case(listings: Vec<Record>) {
        let sorted = sorted_by(filtered_by(&listings, ""), SortOrder { key: SortKey::Name, ascending: true });
        assert_eq!(ids(&sorted), vec!["r2", "r3", "r1"]);
    }

    #[rstest]
    fn it_should_sort_available_before_booked(listings: Vec<Record>) {
        let sorted = sorted_by(filtered_by(&listings, ""), SortOrder { key: SortKey::Status, ascending: true });
        assert_eq!(ids(&sorted), vec!["r2", "r3", "r1"]);
    }

    #[rstest]
    fn it_should_keep_original_order_when_all_created_at_are_missing() {
        let records = vec![
            record("b", "B", 1.0, PropertyStatus::Available, None),
            record("a", "A", 1.0, PropertyStatus::Available, None),
            record("c", "C", 1.0, PropertyStatus::Available, None),
        ];
        let sorted = sorted_by(filtered_by(&records, ""), SortOrder { key: SortKey::CreatedAt, ascending: true });
        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
    }

    #[rstest]
    fn it_should_count_by_status(listings: Vec<Record>) {
        let c = counts(&listings);
        assert_eq!(c, Counts { total: 3, available: 2, booked: 1 });
        assert_eq!(c.available + c.booked, c.total);
        assert_eq!(counts(&[]), Counts::default());
    }

    #[rstest]
    #[case("name", SortKey::Name)]
    #[case("pricePerNight", SortKey::PricePerNight)]
    #[case("status", SortKey::Status)]
    #[case("created_at", SortKey::CreatedAt)]
    fn it_should_parse_sort_keys(#[case] raw: &str, #[case] expected: SortKey) {
        assert_eq!(raw.parse::<SortKey>(), Ok(expected));
    }
}
