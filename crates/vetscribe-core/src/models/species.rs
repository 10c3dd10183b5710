//! Species and dentition models.

use serde::{Deserialize, Serialize};

/// Species with a registered dental layout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Dog,
    Cat,
}

impl Species {
    /// Parse a species identifier exactly as supplied (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dog" => Some(Species::Dog),
            "cat" => Some(Species::Cat),
            _ => None,
        }
    }

    /// Parse a species identifier, falling back to `Dog` for anything unregistered.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

/// Mouth quadrant in Modified Triadan order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    /// All quadrants in Triadan order (1-4).
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::UpperLeft,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    /// Triadan quadrant digit.
    pub fn number(&self) -> u8 {
        match self {
            Quadrant::UpperRight => 1,
            Quadrant::UpperLeft => 2,
            Quadrant::LowerLeft => 3,
            Quadrant::LowerRight => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Quadrant::UpperRight),
            2 => Some(Quadrant::UpperLeft),
            3 => Some(Quadrant::LowerLeft),
            4 => Some(Quadrant::LowerRight),
            _ => None,
        }
    }

    /// Quadrant encoded in a Triadan tooth identifier ("204" → UpperLeft).
    pub fn from_tooth_id(tooth_id: &str) -> Option<Self> {
        let (quadrant, _) = parse_triadan(tooth_id)?;
        Self::from_number(quadrant)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::UpperRight => "upper_right",
            Quadrant::UpperLeft => "upper_left",
            Quadrant::LowerLeft => "lower_left",
            Quadrant::LowerRight => "lower_right",
        }
    }

    /// Left-side quadrants are drawn mirrored on a chart.
    pub fn is_left(&self) -> bool {
        matches!(self, Quadrant::UpperLeft | Quadrant::LowerLeft)
    }
}

/// Anatomical tooth type derived from the Triadan position digits.
///
/// Positions 01-03 are incisors, 04 the canine, 05-08 premolars and
/// 09-11 molars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "index", rename_all = "lowercase")]
pub enum ToothKind {
    Incisor(u8),
    Canine,
    Premolar(u8),
    Molar(u8),
}

impl ToothKind {
    /// Tooth kind for a position number (1-11).
    pub fn from_position(position: u8) -> Option<Self> {
        match position {
            1..=3 => Some(ToothKind::Incisor(position)),
            4 => Some(ToothKind::Canine),
            5..=8 => Some(ToothKind::Premolar(position - 4)),
            9..=11 => Some(ToothKind::Molar(position - 8)),
            _ => None,
        }
    }

    pub fn from_tooth_id(tooth_id: &str) -> Option<Self> {
        let (_, position) = parse_triadan(tooth_id)?;
        Self::from_position(position)
    }

    /// Short chart label ("I1", "C", "P4", "M1").
    pub fn label(&self) -> String {
        match self {
            ToothKind::Incisor(n) => format!("I{}", n),
            ToothKind::Canine => "C".to_string(),
            ToothKind::Premolar(n) => format!("P{}", n),
            ToothKind::Molar(n) => format!("M{}", n),
        }
    }
}

/// Split a three-digit Triadan identifier into (quadrant, position).
fn parse_triadan(tooth_id: &str) -> Option<(u8, u8)> {
    let bytes = tooth_id.as_bytes();
    if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let quadrant = bytes[0] - b'0';
    let position = (bytes[1] - b'0') * 10 + (bytes[2] - b'0');
    if !(1..=4).contains(&quadrant) || !(1..=11).contains(&position) {
        return None;
    }

    Some((quadrant, position))
}
