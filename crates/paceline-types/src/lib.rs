//! # paceline-types: Shared vocabulary for `paceline`
//!
//! This crate contains the types shared across the workspace:
//! - Attribute keys ([`PartAttr`])
//! - Variant tags ([`BikeStyle`])
//! - Supplied configuration ([`BikeConfig`])
//! - Aggregated spare parts ([`SparesRecord`])
//!
//! An attribute that is not supplied is *absent* from a [`BikeConfig`], never
//! null-valued and never an empty-string sentinel. Resolution of absent
//! attributes to their per-style defaults happens in `paceline-catalog`.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Attribute Keys - Copy (closed key set, unit variants)
// ============================================================================

/// Attribute key for a bicycle configuration.
///
/// The key set is closed. Serialized names use camelCase (`tireSize`,
/// `tapeColor`, ...), and [`Display`]/[`FromStr`] round-trip through the
/// same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartAttr {
    /// Frame size (`"S"`, `"M"`, ...). No default; resolves to empty.
    Size,
    /// Chain specification. Defaults per style.
    Chain,
    /// Tire size. Defaults per style.
    TireSize,
    /// Style tag embedded in a config, for configs that carry their own
    /// variant selection.
    Style,
    /// Handlebar tape color (road bikes).
    TapeColor,
    /// Front suspension (mountain bikes).
    FrontShock,
    /// Rear suspension (mountain bikes).
    RearShock,
    /// Safety flag (recumbent bikes).
    Flag,
}

impl PartAttr {
    /// Every attribute key, in declaration order.
    pub const ALL: [PartAttr; 8] = [
        PartAttr::Size,
        PartAttr::Chain,
        PartAttr::TireSize,
        PartAttr::Style,
        PartAttr::TapeColor,
        PartAttr::FrontShock,
        PartAttr::RearShock,
        PartAttr::Flag,
    ];

    /// Returns the serialized name of the key.
    pub fn as_str(self) -> &'static str {
        match self {
            PartAttr::Size => "size",
            PartAttr::Chain => "chain",
            PartAttr::TireSize => "tireSize",
            PartAttr::Style => "style",
            PartAttr::TapeColor => "tapeColor",
            PartAttr::FrontShock => "frontShock",
            PartAttr::RearShock => "rearShock",
            PartAttr::Flag => "flag",
        }
    }
}

impl Display for PartAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PartAttr {
    type Err = ParseAttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartAttr::ALL
            .into_iter()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| ParseAttrError(s.to_string()))
    }
}

// ============================================================================
// Bicycle Styles - Copy (closed variant set)
// ============================================================================

/// The variant tag of a bicycle.
///
/// `Generic` is the unspecialized base: it carries the shared defaults only
/// and has no style-specific spare parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BikeStyle {
    Road,
    Mountain,
    Recumbent,
    #[default]
    Generic,
}

impl BikeStyle {
    /// Every style, in declaration order.
    pub const ALL: [BikeStyle; 4] = [
        BikeStyle::Road,
        BikeStyle::Mountain,
        BikeStyle::Recumbent,
        BikeStyle::Generic,
    ];

    /// Returns the serialized name of the style.
    pub fn as_str(self) -> &'static str {
        match self {
            BikeStyle::Road => "road",
            BikeStyle::Mountain => "mountain",
            BikeStyle::Recumbent => "recumbent",
            BikeStyle::Generic => "generic",
        }
    }

    /// Chain fitted when the config does not supply [`PartAttr::Chain`].
    ///
    /// Every style shares the base `10-speed` default; `Recumbent` overrides
    /// it.
    pub fn default_chain(self) -> &'static str {
        match self {
            BikeStyle::Recumbent => "9-speed",
            BikeStyle::Road | BikeStyle::Mountain | BikeStyle::Generic => "10-speed",
        }
    }

    /// Tire size fitted when the config does not supply [`PartAttr::TireSize`].
    ///
    /// `Generic` defines no tire default and resolves to the empty string.
    pub fn default_tire_size(self) -> &'static str {
        match self {
            BikeStyle::Road => "23",
            BikeStyle::Mountain => "2.1",
            BikeStyle::Recumbent => "28",
            BikeStyle::Generic => "",
        }
    }

    /// The style-specific spare-part keys, carried in addition to the shared
    /// {[`PartAttr::TireSize`], [`PartAttr::Chain`]} pair.
    ///
    /// The local sets never contain the shared pair, so the spares merge
    /// needs no tie-break.
    pub fn local_attrs(self) -> &'static [PartAttr] {
        match self {
            BikeStyle::Road => &[PartAttr::TapeColor],
            BikeStyle::Mountain => &[PartAttr::FrontShock, PartAttr::RearShock],
            BikeStyle::Recumbent => &[PartAttr::Flag],
            BikeStyle::Generic => &[],
        }
    }
}

impl Display for BikeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BikeStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BikeStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}

// ============================================================================
// Supplied Configuration - Clone (small string map)
// ============================================================================

/// The attributes supplied for one bicycle, keyed by [`PartAttr`].
///
/// Keys that were not supplied are absent. A config makes no resolution
/// decisions itself; it is the raw input to `paceline-catalog`.
///
/// # Example
///
/// ```
/// use paceline_types::{BikeConfig, PartAttr};
///
/// let config = BikeConfig::new()
///     .with(PartAttr::Size, "M")
///     .with(PartAttr::TapeColor, "red");
///
/// assert_eq!(config.get(PartAttr::Size), Some("M"));
/// assert_eq!(config.get(PartAttr::Chain), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BikeConfig(HashMap<PartAttr, String>);

impl BikeConfig {
    /// Creates an empty config.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Adds an attribute, builder style.
    pub fn with(mut self, attr: PartAttr, value: impl Into<String>) -> Self {
        self.0.insert(attr, value.into());
        self
    }

    /// Adds an attribute in place, returning any previous value.
    pub fn insert(&mut self, attr: PartAttr, value: impl Into<String>) -> Option<String> {
        self.0.insert(attr, value.into())
    }

    /// Returns the supplied value for `attr`, or `None` if absent.
    pub fn get(&self, attr: PartAttr) -> Option<&str> {
        self.0.get(&attr).map(String::as_str)
    }

    /// Returns true if `attr` was supplied.
    pub fn contains(&self, attr: PartAttr) -> bool {
        self.0.contains_key(&attr)
    }

    /// Number of supplied attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no attributes were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the supplied attributes in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (PartAttr, &str)> {
        self.0.iter().map(|(attr, value)| (*attr, value.as_str()))
    }

    /// Parses a config from TOML text.
    ///
    /// Keys must use the serialized camelCase spellings; unknown keys are
    /// rejected because [`PartAttr`] is a closed set.
    ///
    /// # Example
    ///
    /// ```
    /// use paceline_types::{BikeConfig, PartAttr};
    ///
    /// let config = BikeConfig::from_toml_str(
    ///     r#"
    ///     size = "M"
    ///     tireSize = "25"
    ///     "#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.get(PartAttr::TireSize), Some("25"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigParseError::Toml`] if the text is not valid TOML or
    /// contains an unknown key.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigParseError> {
        Ok(toml::from_str(text)?)
    }

    /// Parses a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigParseError::Json`] if the text is not valid JSON or
    /// contains an unknown key.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigParseError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl From<HashMap<PartAttr, String>> for BikeConfig {
    fn from(map: HashMap<PartAttr, String>) -> Self {
        Self(map)
    }
}

impl FromIterator<(PartAttr, String)> for BikeConfig {
    fn from_iter<I: IntoIterator<Item = (PartAttr, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Spares Record - Clone (ordered so output is deterministic)
// ============================================================================

/// The aggregated replacement-part attributes for one resolved bicycle.
///
/// Contains exactly the shared {[`PartAttr::TireSize`], [`PartAttr::Chain`]}
/// pair plus the style's local keys, never more and never fewer. Keys are
/// ordered so serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparesRecord(BTreeMap<PartAttr, String>);

impl SparesRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds a part, replacing any previous value for the same key.
    pub fn insert(&mut self, attr: PartAttr, value: impl Into<String>) {
        self.0.insert(attr, value.into());
    }

    /// Returns the value recorded for `attr`, or `None` if absent.
    pub fn get(&self, attr: PartAttr) -> Option<&str> {
        self.0.get(&attr).map(String::as_str)
    }

    /// Returns true if `attr` is part of the record.
    pub fn contains(&self, attr: PartAttr) -> bool {
        self.0.contains_key(&attr)
    }

    /// Number of recorded parts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the recorded keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = PartAttr> {
        self.0.keys().copied()
    }

    /// Iterates over the recorded parts in key order.
    pub fn iter(&self) -> impl Iterator<Item = (PartAttr, &str)> {
        self.0.iter().map(|(attr, value)| (*attr, value.as_str()))
    }
}

impl FromIterator<(PartAttr, String)> for SparesRecord {
    fn from_iter<I: IntoIterator<Item = (PartAttr, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// The token is not one of the eight attribute keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown attribute key: {0}")]
pub struct ParseAttrError(pub String);

/// The token is not one of the four bicycle styles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bicycle style: {0}")]
pub struct ParseStyleError(pub String);

/// Errors parsing configuration text.
#[derive(Debug, Error)]
pub enum ConfigParseError {
    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests;
