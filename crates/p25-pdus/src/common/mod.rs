pub mod broadcast;
pub mod response;
pub mod telephone;
pub mod vendor;

use p25_core::identifier::{Channel, Identifier};

/// Decoded content of a single message variant.
pub trait MessageBody {
    /// Identifiers in stable order. Optional identifiers whose presence condition
    /// is false are omitted.
    fn identifiers(&self) -> Vec<Identifier>;

    /// Channels referenced by this message, empty when none apply
    fn channels(&self) -> Vec<Channel> {
        Vec::new()
    }
}
