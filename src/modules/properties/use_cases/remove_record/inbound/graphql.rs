use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct RemovePropertyMutation;

#[Object]
impl RemovePropertyMutation {
    async fn request_delete(&self, context: &Context<'_>, id: ID) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        state.controller.request_remove(id.to_string()).await;
        Ok(id)
    }

    async fn cancel_delete(&self, context: &Context<'_>) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.controller.cancel_remove().await;
        Ok(true)
    }

    /// Returns the removed id, or null when nothing was pending.
    async fn confirm_delete(&self, context: &Context<'_>) -> GqlResult<Option<ID>> {
        let state = context.data_unchecked::<AppState>();
        let removed = state
            .controller
            .confirm_remove()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(removed.map(ID))
    }
}
