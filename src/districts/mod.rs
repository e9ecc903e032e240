mod model;
mod routes;

pub use model::*;
pub use routes::init_routes;
