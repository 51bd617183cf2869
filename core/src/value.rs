//! Anatomical enumerations.
//!
//! Every enumeration has a canonical snake_case name used for serialization.
//! Parsing is lenient about case and separators, so `"Bony Drapeable"`,
//! `"bony_drapeable"` and `"BonyDrapeable"` all name the same variant.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A name that matches no variant of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {enum_name} '{value}'")]
pub struct ParseNameError {
    pub enum_name: &'static str,
    pub value: String,
}

impl ParseNameError {
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical snake_case name.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = ParseNameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize(v.name()) == wanted)
                    .ok_or_else(|| ParseNameError::new($label, s))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

named_enum! {
    /// How a bodypart interacts with coverings and severance.
    BodypartKind, "bodypart kind" {
        /// Can be worn on but has no bone beneath.
        Wear => "wear",
        Drapeable => "drapeable",
        /// Drapeable with bone beneath; severing it breaks bone.
        BonyDrapeable => "bony_drapeable",
        Eye => "eye",
        Ear => "ear",
        Nose => "nose",
        Mouth => "mouth",
        Tongue => "tongue",
        /// Bears weight when the creature stands.
        Standing => "standing",
        /// Can hold items.
        Grabbing => "grabbing",
        Wing => "wing",
        /// Houses the brain; destroying it is fatal.
        BrainBearing => "brain_bearing",
    }
}

impl Default for BodypartKind {
    fn default() -> Self {
        BodypartKind::Drapeable
    }
}

named_enum! {
    /// Horizontal placement of a bodypart, used for hit-location weighting.
    Alignment, "alignment" {
        Front => "front",
        Rear => "rear",
        Left => "left",
        Right => "right",
        FrontLeft => "front_left",
        FrontRight => "front_right",
        RearLeft => "rear_left",
        RearRight => "rear_right",
        Irrelevant => "irrelevant",
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Irrelevant
    }
}

named_enum! {
    /// Vertical placement of a bodypart, used for hit-location weighting.
    Orientation, "orientation" {
        Highest => "highest",
        High => "high",
        Centre => "centre",
        Low => "low",
        Lowest => "lowest",
        Appendage => "appendage",
        Irrelevant => "irrelevant",
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Irrelevant
    }
}

named_enum! {
    SizeCategory, "size category" {
        Tiny => "tiny",
        VerySmall => "very_small",
        Small => "small",
        Normal => "normal",
        Large => "large",
        VeryLarge => "very_large",
        Huge => "huge",
    }
}

impl Default for SizeCategory {
    fn default() -> Self {
        SizeCategory::Normal
    }
}

named_enum! {
    OrganKind, "organ kind" {
        Brain => "brain",
        Heart => "heart",
        Lung => "lung",
        Liver => "liver",
        Kidney => "kidney",
        Stomach => "stomach",
        Intestines => "intestines",
        Spleen => "spleen",
        Trachea => "trachea",
        Esophagus => "esophagus",
        /// One segment of the spinal cord (see SpinalSegment).
        SpinalSegment => "spinal_segment",
    }
}

named_enum! {
    /// Classification of a limb. Determines its spinal pathway.
    LimbType, "limb type" {
        Torso => "torso",
        Head => "head",
        Arm => "arm",
        Leg => "leg",
        Wing => "wing",
        Tail => "tail",
        Appendage => "appendage",
        Genitals => "genitals",
    }
}

named_enum! {
    /// Section of the spinal cord a limb's nerves run through.
    SpinalSegment, "spinal segment" {
        Upper => "upper",
        Middle => "middle",
        Lower => "lower",
    }
}

/// How a species moves about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Locomotion {
    pub walks: bool,
    pub flies: bool,
    pub swims: bool,
    pub climbs: bool,
}

impl Locomotion {
    /// A creature that only walks.
    pub fn walking() -> Self {
        Self {
            walks: true,
            ..Self::default()
        }
    }
}
