//! Seams to the store collaborator, plus cooperative cancellation.

pub mod cancellation;
pub mod provenance_store;
pub mod provenance_writer;

pub use cancellation::{Cancellable, CancellationToken, NeverCancelled};
pub use provenance_store::{IProvenanceStore, Neighborhood, NodeRecord};
pub use provenance_writer::{CausalLink, IProvenanceWriter};
