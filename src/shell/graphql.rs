use async_graphql::{EmptySubscription, MergedObject, Schema};

pub use crate::modules::properties::use_cases::list_records::inbound::graphql::QueryRoot;
use crate::modules::properties::use_cases::{
    create_record::inbound::graphql::CreatePropertyMutation,
    load_records::inbound::graphql::ReloadPropertiesMutation,
    remove_record::inbound::graphql::RemovePropertyMutation,
    update_record::inbound::graphql::UpdatePropertyMutation,
};
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    ReloadPropertiesMutation,
    CreatePropertyMutation,
    UpdatePropertyMutation,
    RemovePropertyMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
