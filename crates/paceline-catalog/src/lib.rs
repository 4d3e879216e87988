//! # paceline-catalog: Bicycle configuration resolution
//!
//! Resolves a bicycle's attributes from a supplied [`BikeConfig`] and the
//! per-style defaults, and aggregates the spare-parts record.
//!
//! Resolution is total: a missing attribute falls back to its default (or
//! the empty string where no default exists), never to an error. The
//! "missing" state lives in the config; a resolved [`Bicycle`] always has a
//! value for every field.
//!
//! # Example
//!
//! ```
//! use paceline_catalog::Bicycle;
//! use paceline_types::{BikeConfig, BikeStyle, PartAttr};
//!
//! let config = BikeConfig::new()
//!     .with(PartAttr::Size, "M")
//!     .with(PartAttr::TapeColor, "red");
//!
//! let bike = Bicycle::resolve(BikeStyle::Road, &config);
//! assert_eq!(bike.tire_size(), "23");
//! assert_eq!(bike.chain(), "10-speed");
//!
//! let spares = bike.spares();
//! assert_eq!(spares.get(PartAttr::TapeColor), Some("red"));
//! ```

use std::collections::BTreeMap;

use paceline_types::{BikeConfig, BikeStyle, ParseStyleError, PartAttr, SparesRecord};
use serde::Serialize;

/// A fully resolved bicycle configuration.
///
/// Constructed once from a [`BikeConfig`]; immutable thereafter. The shared
/// fields (`size`, `chain`, `tire_size`) are always present, and the
/// style-specific extras are resolved at construction with an empty-string
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bicycle {
    style: BikeStyle,
    size: String,
    chain: String,
    tire_size: String,
    extras: BTreeMap<PartAttr, String>,
}

impl Bicycle {
    /// Resolves a config against the given style's defaults.
    ///
    /// Resolution order:
    /// 1. `size`: supplied value, or empty
    /// 2. `chain`: supplied value, or [`BikeStyle::default_chain`]
    /// 3. `tire_size`: supplied value, or [`BikeStyle::default_tire_size`]
    /// 4. each key in [`BikeStyle::local_attrs`]: supplied value, or empty
    ///
    /// Attributes outside the style's local set are ignored, including a
    /// [`PartAttr::Style`] entry; the `style` argument is authoritative.
    pub fn resolve(style: BikeStyle, config: &BikeConfig) -> Self {
        let size = config.get(PartAttr::Size).unwrap_or_default().to_string();
        let chain = config
            .get(PartAttr::Chain)
            .unwrap_or(style.default_chain())
            .to_string();
        let tire_size = config
            .get(PartAttr::TireSize)
            .unwrap_or(style.default_tire_size())
            .to_string();
        let extras: BTreeMap<PartAttr, String> = style
            .local_attrs()
            .iter()
            .map(|&attr| (attr, config.get(attr).unwrap_or_default().to_string()))
            .collect();

        tracing::debug!(
            style = %style,
            size = %size,
            chain = %chain,
            tire_size = %tire_size,
            "resolved bicycle configuration"
        );

        Self {
            style,
            size,
            chain,
            tire_size,
            extras,
        }
    }

    /// Resolves a config that carries its own style selection.
    ///
    /// Reads [`PartAttr::Style`] from the config; an absent style resolves
    /// to [`BikeStyle::Generic`], matching the fallback behavior of every
    /// other attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ParseStyleError`] if a style *is* supplied but names none
    /// of the known variants.
    pub fn from_config(config: &BikeConfig) -> Result<Self, ParseStyleError> {
        let style = match config.get(PartAttr::Style) {
            Some(text) => text.parse()?,
            None => BikeStyle::Generic,
        };
        Ok(Self::resolve(style, config))
    }

    /// The style this bicycle was resolved against.
    pub fn style(&self) -> BikeStyle {
        self.style
    }

    /// Frame size; empty if it was not supplied.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Resolved chain; never empty, every style defines a default.
    pub fn chain(&self) -> &str {
        &self.chain
    }

    /// Resolved tire size; empty only for [`BikeStyle::Generic`] when not
    /// supplied.
    pub fn tire_size(&self) -> &str {
        &self.tire_size
    }

    /// A style-specific extra, or `None` for keys outside this style's
    /// local set.
    ///
    /// A key *in* the local set always has a value (empty if it was not
    /// supplied).
    pub fn extra(&self, attr: PartAttr) -> Option<&str> {
        self.extras.get(&attr).map(String::as_str)
    }

    /// Aggregates the spare-parts record: the shared
    /// {[`PartAttr::TireSize`], [`PartAttr::Chain`]} pair plus this style's
    /// local keys.
    ///
    /// Pure function of resolved state; calling it twice yields identical
    /// records. The local keys never collide with the shared pair, so the
    /// merge needs no tie-break.
    pub fn spares(&self) -> SparesRecord {
        let mut spares = SparesRecord::new();
        spares.insert(PartAttr::TireSize, self.tire_size.clone());
        spares.insert(PartAttr::Chain, self.chain.clone());
        for (attr, value) in &self.extras {
            spares.insert(*attr, value.clone());
        }
        spares
    }
}
