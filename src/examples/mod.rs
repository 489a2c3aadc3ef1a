//! Example embeddings of the propagation engine.

pub mod map_colouring;
