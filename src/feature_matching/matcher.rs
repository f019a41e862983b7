use crate::feature_matching::types::{DMatch, Descriptor};

pub trait DescriptorMatcher {
    /// For each query descriptor, the `k` closest train descriptors, nearest first.
    fn knn_match(&self, query: &[Descriptor], train: &[Descriptor], k: usize) -> Vec<Vec<DMatch>>;
}

/// Exhaustive L2 nearest-neighbour search.
pub struct BruteForceMatcher;

fn l2_distance(a: &Descriptor, b: &Descriptor) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

impl DescriptorMatcher for BruteForceMatcher {
    fn knn_match(&self, query: &[Descriptor], train: &[Descriptor], k: usize) -> Vec<Vec<DMatch>> {
        query
            .iter()
            .enumerate()
            .map(|(query_idx, q)| {
                let mut candidates: Vec<DMatch> = train
                    .iter()
                    .enumerate()
                    .map(|(train_idx, t)| DMatch {
                        query_idx,
                        train_idx,
                        distance: l2_distance(q, t),
                    })
                    .collect();
                candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.train_idx.cmp(&b.train_idx)));
                candidates.truncate(k);
                candidates
            })
            .collect()
    }
}

/// Keeps the best candidate of each query when it is closer than `ratio` times the
/// second best. Queries with fewer than two candidates are dropped.
pub fn ratio_test(knn_matches: &[Vec<DMatch>], ratio: f32) -> Vec<DMatch> {
    knn_matches
        .iter()
        .filter_map(|candidates| match candidates.as_slice() {
            [best, second, ..] if best.distance < ratio * second.distance => Some(*best),
            _ => None,
        })
        .collect()
}
