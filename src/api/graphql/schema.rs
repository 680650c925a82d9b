use crate::api::graphql::mutation::MutationRoot;
use crate::api::graphql::query::QueryRoot;
use async_graphql::{EmptySubscription, Schema};

pub type StoreSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema() -> StoreSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).finish()
}
