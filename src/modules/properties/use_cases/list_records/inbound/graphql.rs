use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};

use crate::modules::properties::core::record::{PropertyStatus, Record};
use crate::modules::properties::core::views::{self, Counts, SortKey, SortOrder};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlPropertyStatus {
    Available,
    Booked,
}

impl From<PropertyStatus> for GqlPropertyStatus {
    fn from(status: PropertyStatus) -> Self {
        match status {
            PropertyStatus::Available => GqlPropertyStatus::Available,
            PropertyStatus::Booked => GqlPropertyStatus::Booked,
        }
    }
}

impl From<GqlPropertyStatus> for PropertyStatus {
    fn from(status: GqlPropertyStatus) -> Self {
        match status {
            GqlPropertyStatus::Available => PropertyStatus::Available,
            GqlPropertyStatus::Booked => PropertyStatus::Booked,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlSortKey {
    Name,
    PricePerNight,
    Status,
    CreatedAt,
}

impl From<GqlSortKey> for SortKey {
    fn from(key: GqlSortKey) -> Self {
        match key {
            GqlSortKey::Name => SortKey::Name,
            GqlSortKey::PricePerNight => SortKey::PricePerNight,
            GqlSortKey::Status => SortKey::Status,
            GqlSortKey::CreatedAt => SortKey::CreatedAt,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlProperty {
    pub id: String,
    pub name: String,
    pub price_per_night: f64,
    pub status: GqlPropertyStatus,
    pub created_at: Option<i64>,
}

impl From<Record> for GqlProperty {
    fn from(r: Record) -> Self {
        Self {
            id: r.id,
            name: r.name,
            price_per_night: r.price_per_night,
            status: r.status.into(),
            created_at: r.created_at,
        }
    }
}

#[derive(SimpleObject, Clone, Copy)]
pub struct GqlCounts {
    pub total: u64,
    pub available: u64,
    pub booked: u64,
}

impl From<Counts> for GqlCounts {
    fn from(c: Counts) -> Self {
        Self {
            total: c.total as u64,
            available: c.available as u64,
            booked: c.booked as u64,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn properties(
        &self,
        context: &Context<'_>,
        search: Option<String>,
        sort_by: Option<GqlSortKey>,
        ascending: Option<bool>,
    ) -> GqlResult<Vec<GqlProperty>> {
        let state = context.data_unchecked::<AppState>();
        let records = state.controller.records().await;
        let order = SortOrder {
            key: sort_by.map(Into::into).unwrap_or_default(),
            ascending: ascending.unwrap_or(true),
        };
        let visible = views::sorted_by(
            views::filtered_by(&records, search.as_deref().unwrap_or("")),
            order,
        );
        Ok(visible.into_iter().cloned().map(Into::into).collect())
    }

    async fn counts(&self, context: &Context<'_>) -> GqlResult<GqlCounts> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.controller.counts().await.into())
    }

    async fn last_error(&self, context: &Context<'_>) -> GqlResult<Option<String>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.controller.last_error().await.map(|e| e.to_string()))
    }
}
