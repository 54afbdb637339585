//! Signal normalization and storage.

pub mod normalizer;
pub mod store;

pub use normalizer::{normalize, ProposalResponse, RawProposal, CONFIDENCE_FLOOR};
pub use store::SignalStore;
