// Pipelines: end-to-end workflows that combine a data source with scoring.

pub mod channel;
