use async_graphql::{EmptySubscription, Schema};

pub use crate::modules::issues::use_cases::cast_vote::inbound::graphql::MutationRoot;
pub use crate::modules::issues::use_cases::view_dashboard::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
