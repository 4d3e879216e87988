//! # paceline: Bicycle configuration catalog
//!
//! A bicycle is described by a [`BikeConfig`], a partial mapping from
//! attribute keys to values. Resolving a config against a [`BikeStyle`]
//! fills the gaps with per-style defaults and yields an immutable
//! [`Bicycle`], which aggregates its replacement parts into a
//! [`SparesRecord`]. The drivetrain types carry the gearing arithmetic.
//!
//! # Example
//!
//! ```
//! use paceline::{Bicycle, BikeConfig, BikeStyle, PartAttr};
//!
//! let config = BikeConfig::new()
//!     .with(PartAttr::Size, "S")
//!     .with(PartAttr::FrontShock, "Manitou")
//!     .with(PartAttr::RearShock, "Fox");
//!
//! let bike = Bicycle::resolve(BikeStyle::Mountain, &config);
//! assert_eq!(bike.tire_size(), "2.1");
//!
//! let spares = bike.spares();
//! assert_eq!(spares.get(PartAttr::RearShock), Some("Fox"));
//! ```

pub use paceline_catalog::Bicycle;
pub use paceline_drivetrain::{Diameter, Gear, Wheel};
pub use paceline_types::{
    BikeConfig, BikeStyle, ConfigParseError, ParseAttrError, ParseStyleError, PartAttr,
    SparesRecord,
};
