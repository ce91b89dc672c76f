mod cumulative;
mod error;
mod section;
mod sliding;

pub use cumulative::CumulativeAverage;
pub use error::StatsError;
pub use section::SectionAggregate;
pub use sliding::SlidingAverage;
