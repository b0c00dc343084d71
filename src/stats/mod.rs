//! Season aggregation and metric normalization for the comparison chart
//!
//! - `bounds`: tracked metrics and their normalization ranges
//! - `aggregate`: averaging over seasons with minutes played
//! - `normalize`: saturating 0-100 scaling
//! - `dataset`: labeled axes for a chart widget

pub mod aggregate;
pub mod bounds;
pub mod dataset;
pub mod normalize;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, AggregatedProfile};
pub use bounds::{Metric, MetricBounds, MetricBoundsTable};
pub use dataset::{build, ComparisonDataset, NormalizedAxis};
pub use normalize::{normalize, scale};
