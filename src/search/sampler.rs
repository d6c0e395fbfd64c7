use crate::entities::Coordinates;

/// Keeps every `stride`-th point of a route polyline, starting with the first.
pub fn sample_route(path: &[Coordinates], stride: usize) -> Vec<Coordinates> {
    path.iter().step_by(stride.max(1)).copied().collect()
}
