//! Texas non-judicial foreclosure timeline projected from the first missed payment.

pub mod domain;
pub mod router;
mod timeline;

pub use domain::{ForeclosureStage, ForeclosureTimeline, Milestone, MilestoneStatus, Urgency};
pub use router::{foreclosure_router, TimelineRequest};
pub use timeline::{calculate_foreclosure_timeline, ForeclosureCalculator, TimelineRules};
