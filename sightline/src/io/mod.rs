/// External (serializable) representations of primitives, queries and results
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Evaluation of external queries against the query traits
pub mod query;
