use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::properties::use_cases::load_records::handler::LoadOutcome;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ReloadPropertiesMutation;

#[Object]
impl ReloadPropertiesMutation {
    /// Number of records after the reload, or null if a newer reload superseded this one.
    async fn reload_properties(&self, context: &Context<'_>) -> GqlResult<Option<u64>> {
        let state = context.data_unchecked::<AppState>();
        let outcome = state
            .controller
            .load()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(match outcome {
            LoadOutcome::Applied { count } => Some(count as u64),
            LoadOutcome::Stale => None,
        })
    }
}
