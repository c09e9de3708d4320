pub mod repositories;
pub mod routes;
