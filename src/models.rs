//! Domain records: event codes, competitors, events and personal bests.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::config::WCA_PROFILE_BASE_URL;

/// The closed set of competition disciplines.
///
/// Declaration order is the column order of the upstream competitors table,
/// so `EventCode::iter()` maps positional registration columns to codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    IntoStaticStr,
)]
pub enum EventCode {
    #[strum(serialize = "333")]
    #[serde(rename = "333")]
    Three,
    #[strum(serialize = "222")]
    #[serde(rename = "222")]
    Two,
    #[strum(serialize = "444")]
    #[serde(rename = "444")]
    Four,
    #[strum(serialize = "555")]
    #[serde(rename = "555")]
    Five,
    #[strum(serialize = "666")]
    #[serde(rename = "666")]
    Six,
    #[strum(serialize = "777")]
    #[serde(rename = "777")]
    Seven,
    #[strum(serialize = "333bf")]
    #[serde(rename = "333bf")]
    ThreeBlind,
    #[strum(serialize = "333fm")]
    #[serde(rename = "333fm")]
    FewestMoves,
    #[strum(serialize = "333oh")]
    #[serde(rename = "333oh")]
    OneHanded,
    #[strum(serialize = "clock")]
    #[serde(rename = "clock")]
    Clock,
    #[strum(serialize = "minx")]
    #[serde(rename = "minx")]
    Megaminx,
    #[strum(serialize = "pyram")]
    #[serde(rename = "pyram")]
    Pyraminx,
    #[strum(serialize = "skewb")]
    #[serde(rename = "skewb")]
    Skewb,
    #[strum(serialize = "sq1")]
    #[serde(rename = "sq1")]
    SquareOne,
    #[strum(serialize = "444bf")]
    #[serde(rename = "444bf")]
    FourBlind,
    #[strum(serialize = "555bf")]
    #[serde(rename = "555bf")]
    FiveBlind,
    #[strum(serialize = "333mbf")]
    #[serde(rename = "333mbf")]
    MultiBlind,
}

impl EventCode {
    /// The code as used by the person feed, e.g. `"333bf"`.
    pub fn code(&self) -> &'static str {
        (*self).into()
    }

    /// Label used for the event on the upstream events page.
    pub fn display_name(&self) -> &'static str {
        match self {
            EventCode::Three => "3x3x3 Cube",
            EventCode::Two => "2x2x2 Cube",
            EventCode::Four => "4x4x4 Cube",
            EventCode::Five => "5x5x5 Cube",
            EventCode::Six => "6x6x6 Cube",
            EventCode::Seven => "7x7x7 Cube",
            EventCode::ThreeBlind => "3x3x3 Blindfolded",
            EventCode::FewestMoves => "3x3x3 Fewest Moves",
            EventCode::OneHanded => "3x3x3 One-Handed",
            EventCode::Clock => "Clock",
            EventCode::Megaminx => "Megaminx",
            EventCode::Pyraminx => "Pyraminx",
            EventCode::Skewb => "Skewb",
            EventCode::SquareOne => "Square-1",
            EventCode::FourBlind => "4x4x4 Blindfolded",
            EventCode::FiveBlind => "5x5x5 Blindfolded",
            EventCode::MultiBlind => "3x3x3 Multi-Blind",
        }
    }

    /// Looks up an event by its exact upstream label.
    pub fn from_display_name(name: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        EventCode::iter().find(|event| event.display_name() == name)
    }

    /// Events ranked by best single before best average.
    pub fn is_single_first(&self) -> bool {
        matches!(
            self,
            EventCode::ThreeBlind
                | EventCode::FourBlind
                | EventCode::FiveBlind
                | EventCode::MultiBlind
        )
    }
}

/// A registered competitor, as scraped from the competitors table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Competitor {
    pub name: String,
    /// Empty when the competitor has no WCA profile yet.
    pub wca_id: String,
    pub country: String,
    pub gender: String,
    pub events: BTreeSet<EventCode>,
}

impl Competitor {
    pub fn is_registered_for(&self, event: EventCode) -> bool {
        self.events.contains(&event)
    }

    /// WCA profile page, if the competitor has an id.
    pub fn profile_url(&self) -> Option<String> {
        if self.wca_id.is_empty() {
            None
        } else {
            Some(format!("{}/{}", WCA_PROFILE_BASE_URL, self.wca_id))
        }
    }
}

/// An event offered by the competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDescriptor {
    pub display_name: String,
    pub code: EventCode,
}

/// Personal bests for one event, in raw feed units
/// (centiseconds, moves, or packed multi-blind digits).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BestResult {
    pub single: Option<f64>,
    pub average: Option<f64>,
}

impl BestResult {
    pub const ABSENT: BestResult = BestResult {
        single: None,
        average: None,
    };

    pub fn is_absent(&self) -> bool {
        self.single.is_none() && self.average.is_none()
    }
}

/// Personal bests keyed by WCA id.
pub type RankingMap = HashMap<String, BestResult>;
