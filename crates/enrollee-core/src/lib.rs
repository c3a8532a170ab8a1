//! enrollee-core: Core library for processing enrollee CSV records
//!
//! This library provides functionality to:
//! - Decode enrollee CSV files into typed records, repairing malformed
//!   fields with documented defaults
//! - Partition records into groups by insurance value
//! - Collapse duplicate user IDs within a group, keeping the record with
//!   the higher version
//! - Sort each group by last name, then first name
//! - Write one CSV file per insurance group, with an optional JSON run
//!   report

pub mod error;
pub mod group;
pub mod merge;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod report;
pub mod sort;
pub mod writer;

pub use error::{Error, Result};
pub use group::group_by;
pub use merge::{merge_by, prefer_higher_version};
pub use pipeline::{run_pipeline, PipelineConfig};
pub use reader::{read_enrollees, read_enrollees_str};
pub use record::{Enrollee, COLUMNS, DEFAULT_VERSION, INSURANCE_NOT_PROVIDED, MISSING_USER_ID};
pub use report::{GroupReport, RunReport};
pub use sort::{compare_by_name, sort_by_name};
pub use writer::{encode, header_line, write_group};
