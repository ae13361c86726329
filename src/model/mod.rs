pub mod catalog;
pub(crate) mod lenient;
pub mod project;
pub mod section;

pub use catalog::{Album, BomTemplate, Catalog, ClampRule, FittingRule, REAL_DN};
pub use project::{CalcParams, CollectorVendor, Project};
pub use section::{
    AlbumType, Diameters, EstimateSystem, Mop, Rent, Section, System, Zone, MOP_DIAMETERS,
};
