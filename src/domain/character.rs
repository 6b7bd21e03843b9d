use crate::services::rating::average_rating;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "5★")]
    FiveStar,
    #[serde(rename = "4★")]
    FourStar,
    Unknown,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::FiveStar => "5★",
            Rarity::FourStar => "4★",
            Rarity::Unknown => "Unknown",
        }
    }

    /// Unrecognized labels map to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "5★" => Rarity::FiveStar,
            "4★" => Rarity::FourStar,
            _ => Rarity::Unknown,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "DPS")]
    Dps,
    #[serde(rename = "Support DPS")]
    SupportDps,
    Amplifier,
    Sustain,
    Unknown,
}

impl Role {
    /// Matching priority used when classifying popover text.
    pub const PRIORITY: [Role; 4] = [Role::Dps, Role::SupportDps, Role::Amplifier, Role::Sustain];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Dps => "DPS",
            Role::SupportDps => "Support DPS",
            Role::Amplifier => "Amplifier",
            Role::Sustain => "Sustain",
            Role::Unknown => "Unknown",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|role| role.label() == label)
            .unwrap_or(Role::Unknown)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub element: String,
    pub path: String,
    pub rarity: Rarity,
    pub role: Role,
    pub moc_rating: Option<f64>,
    pub pf_rating: Option<f64>,
    pub as_rating: Option<f64>,
    pub average_rating: Option<f64>,
}

/// One rating per game mode, in MoC, PF, AS order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ratings {
    pub moc: Option<f64>,
    pub pf: Option<f64>,
    pub as_: Option<f64>,
}

impl CharacterRecord {
    pub fn new(
        name: String,
        element: String,
        path: String,
        rarity: Rarity,
        role: Role,
        ratings: Ratings,
    ) -> Self {
        let average_rating = average_rating(&[ratings.moc, ratings.pf, ratings.as_]);

        Self {
            name,
            element,
            path,
            rarity,
            role,
            moc_rating: ratings.moc,
            pf_rating: ratings.pf,
            as_rating: ratings.as_,
            average_rating,
        }
    }

    pub fn ratings(&self) -> Ratings {
        Ratings {
            moc: self.moc_rating,
            pf: self.pf_rating,
            as_: self.as_rating,
        }
    }
}
