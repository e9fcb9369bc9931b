// Composition root for the issues bounded context.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the backend adapter.
// - Wire the adapter into use case handlers.
// - Expose the HTTP router and GraphQL schema.

pub mod graphql;
pub mod http;
pub mod state;
