mod aggregator;
mod sampler;

pub use aggregator::{find_stops_along_route, merge_candidates};
pub use sampler::sample_route;
