// Domain layer: core models shared by the pipeline. No dependencies beyond
// std/serde/chrono.

pub mod model;
