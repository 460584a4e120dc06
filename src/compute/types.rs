//----------------------------------------
// compute mod types
//----------------------------------------
pub use crate::distribution::types::{StatrsT, TDistribution};
pub use crate::planning::types::{PlanConfig, StudyPlan};
pub use crate::power::types::DesignType;
pub use crate::sample_size::types::SearchBounds;
pub use crate::table::types::SampleSizeTable;
