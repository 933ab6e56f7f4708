//! Dataset handling for railnet.
//!
//! - [`records`]: row schemas of the station, track, city and assignment tables
//! - [`load`]: typed CSV loaders
//! - [`yearly`]: year selection and province merging
//! - [`provinces`]: province assignment by nearest city
//! - [`report`]: assignment report and network statistics
//! - [`export`]: processed CSVs, text files and graph snapshots

pub mod export;
pub mod load;
pub mod provinces;
pub mod records;
pub mod report;
pub mod yearly;

pub use export::YearOutputs;
pub use provinces::{Assignment, assign_provinces};
pub use records::{
    CityRow, EdgeRow, LegacyStationRow, LegacyTrackRow, ProvinceAssignmentRow, StationRow,
};
pub use report::{AssignmentReport, DistanceStats, NetworkStats};
pub use yearly::{ProvinceCoverage, YearSlice, merge_provinces, select_year};
