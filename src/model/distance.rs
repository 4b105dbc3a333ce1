use serde::{Deserialize, Serialize};
use std::fmt;

/// Putt-distance categories, in the order the putting table publishes them.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DistanceBucket {
    Gimmie,
    #[serde(rename = "3ft")]
    Ft3,
    #[serde(rename = "4ft")]
    Ft4,
    #[serde(rename = "5ft")]
    Ft5,
    #[serde(rename = "6ft")]
    Ft6,
    #[serde(rename = "7ft")]
    Ft7,
    #[serde(rename = "8ft")]
    Ft8,
    #[serde(rename = "10ft")]
    Ft10,
    #[serde(rename = "15ft")]
    Ft15,
    #[serde(rename = "20ft")]
    Ft20,
    #[serde(rename = "25ft")]
    Ft25,
    #[serde(rename = "30ft")]
    Ft30,
    #[serde(rename = "40ft")]
    Ft40,
    #[serde(rename = "50ft")]
    Ft50,
    #[serde(rename = "50ft+")]
    Ft50Plus,
}

impl DistanceBucket {
    pub const ALL: [DistanceBucket; 15] = [
        DistanceBucket::Gimmie,
        DistanceBucket::Ft3,
        DistanceBucket::Ft4,
        DistanceBucket::Ft5,
        DistanceBucket::Ft6,
        DistanceBucket::Ft7,
        DistanceBucket::Ft8,
        DistanceBucket::Ft10,
        DistanceBucket::Ft15,
        DistanceBucket::Ft20,
        DistanceBucket::Ft25,
        DistanceBucket::Ft30,
        DistanceBucket::Ft40,
        DistanceBucket::Ft50,
        DistanceBucket::Ft50Plus,
    ];

    /// Wire label, also used as the first cell of the table row.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DistanceBucket::Gimmie => "Gimmie",
            DistanceBucket::Ft3 => "3ft",
            DistanceBucket::Ft4 => "4ft",
            DistanceBucket::Ft5 => "5ft",
            DistanceBucket::Ft6 => "6ft",
            DistanceBucket::Ft7 => "7ft",
            DistanceBucket::Ft8 => "8ft",
            DistanceBucket::Ft10 => "10ft",
            DistanceBucket::Ft15 => "15ft",
            DistanceBucket::Ft20 => "20ft",
            DistanceBucket::Ft25 => "25ft",
            DistanceBucket::Ft30 => "30ft",
            DistanceBucket::Ft40 => "40ft",
            DistanceBucket::Ft50 => "50ft",
            DistanceBucket::Ft50Plus => "50ft+",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.label() == label)
    }
}

impl fmt::Display for DistanceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
