//! Deterministic fingerprint of a spike firing pattern.
//!
//! Two spike events share a fingerprint iff the same set of neurons fired in
//! the same population and layer. Order and repeats in the index list do not matter.

/// BLAKE3 hex digest over population id, layer index, and the sorted unique neuron indices.
pub fn pattern_fingerprint(population_id: &str, layer_index: u32, neuron_indices: &[u32]) -> String {
    let mut canonical = neuron_indices.to_vec();
    canonical.sort_unstable();
    canonical.dedup();

    let mut hasher = blake3::Hasher::new();
    hasher.update(&(population_id.len() as u64).to_le_bytes());
    hasher.update(population_id.as_bytes());
    hasher.update(&layer_index.to_le_bytes());
    for idx in &canonical {
        hasher.update(&idx.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
