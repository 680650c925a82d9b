pub mod config;
pub mod request;
pub mod response;
pub mod server;

pub mod controllers {
    pub mod media_controller;
}

pub mod graphql {
    pub mod mutation;
    pub mod query;
    pub mod schema;
}

pub mod routes {
    pub mod media_routes;
}
