use async_graphql::{Context, InputObject, Object, Result as GqlResult};

use crate::modules::properties::core::validate::RecordInput;
use crate::modules::properties::use_cases::list_records::inbound::graphql::{
    GqlProperty, GqlPropertyStatus,
};
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct PropertyInput {
    pub name: String,
    /// Raw form text; validated by the controller.
    pub price_per_night: String,
    pub status: Option<GqlPropertyStatus>,
}

impl From<PropertyInput> for RecordInput {
    fn from(input: PropertyInput) -> Self {
        RecordInput {
            name: input.name,
            price_per_night: input.price_per_night,
            status: input.status.map(Into::into),
        }
    }
}

#[derive(Default)]
pub struct CreatePropertyMutation;

#[Object]
impl CreatePropertyMutation {
    async fn create_property(
        &self,
        context: &Context<'_>,
        input: PropertyInput,
    ) -> GqlResult<GqlProperty> {
        let state = context.data_unchecked::<AppState>();
        let record = state
            .controller
            .create(input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(record.into())
    }
}
