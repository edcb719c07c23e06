use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::properties::use_cases::create_record::inbound::graphql::PropertyInput;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdatePropertyMutation;

#[Object]
impl UpdatePropertyMutation {
    async fn update_property(
        &self,
        context: &Context<'_>,
        id: ID,
        input: PropertyInput,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        state
            .controller
            .update(&id, input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(id)
    }
}
