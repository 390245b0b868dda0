pub mod graphql;
pub mod routes;
pub mod telemetry;
