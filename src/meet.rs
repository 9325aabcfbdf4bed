//! Meet records, event result rows and lane selections.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{InvalidLane, Lane, MeetId};

/// Events of a standard dual meet, in program order.
pub const STANDARD_EVENTS: [&str; 12] = [
    "4x50 Medley Relay",
    "200 Freestyle",
    "200 Individual Medley",
    "50 Freestyle",
    "Diving",
    "100 Butterfly",
    "100 Freestyle",
    "500 Freestyle",
    "4x50 Freestyle Relay",
    "100 Backstroke",
    "100 Breaststroke",
    "4x100 Freestyle Relay",
];

/// A scheduled competition against one opponent on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meet {
    /// Identifier assigned at creation.
    pub id: MeetId,
    /// Opposing team name.
    pub opponent: String,
    /// Date and time of the meet.
    pub date: DateTime<Utc>,
}

impl Meet {
    /// Creates a meet with a freshly generated id.
    pub fn new(opponent: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: MeetId::generate(),
            opponent: opponent.into(),
            date,
        }
    }
}

/// Form payload used to create a new [`Meet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetDraft {
    /// Opposing team name.
    pub opponent: String,
    /// Date and time of the meet.
    pub date: DateTime<Utc>,
}

impl MeetDraft {
    /// Materializes the draft, assigning a new id.
    pub fn into_meet(self) -> Meet {
        Meet::new(self.opponent, self.date)
    }
}

/// Errors for event sheet and selection operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetError {
    /// Lane number out of range.
    InvalidLane(InvalidLane),
    /// No meet with this id is known.
    UnknownMeet(MeetId),
}

impl fmt::Display for MeetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeetError::InvalidLane(err) => write!(f, "{err}"),
            MeetError::UnknownMeet(id) => write!(f, "unknown meet {id}"),
        }
    }
}

impl std::error::Error for MeetError {}

impl From<InvalidLane> for MeetError {
    fn from(value: InvalidLane) -> Self {
        Self::InvalidLane(value)
    }
}

/// One lane's result in a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// Lane this row belongs to.
    pub lane: Lane,
    /// Swimmer name, free text.
    pub swimmer: String,
    /// Recorded time, free text.
    pub time: String,
    /// Finishing place, free text.
    pub place: String,
}

impl EventRow {
    /// Empty row for `lane`.
    pub fn new(lane: Lane) -> Self {
        Self {
            lane,
            swimmer: String::new(),
            time: String::new(),
            place: String::new(),
        }
    }

    /// True when nothing has been entered.
    pub fn is_blank(&self) -> bool {
        self.swimmer.is_empty() && self.time.is_empty() && self.place.is_empty()
    }
}

/// Home-team lanes, kept in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneSelection {
    lanes: Vec<Lane>,
}

impl LaneSelection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the lane if absent, removes it if present. Returns whether the
    /// lane is selected afterwards.
    pub fn toggle(&mut self, lane: Lane) -> bool {
        if let Some(pos) = self.lanes.iter().position(|l| *l == lane) {
            self.lanes.remove(pos);
            false
        } else {
            self.lanes.push(lane);
            true
        }
    }

    /// Same as [`LaneSelection::toggle`] for a raw lane number.
    pub fn toggle_number(&mut self, n: u8) -> Result<bool, MeetError> {
        Ok(self.toggle(Lane::try_from(n)?))
    }

    /// Whether `lane` is one of ours.
    pub fn contains(&self, lane: Lane) -> bool {
        self.lanes.contains(&lane)
    }

    /// Selected lanes in pick order.
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Lanes left to the opponent, ascending.
    pub fn opponent_lanes(&self) -> Vec<Lane> {
        Lane::all().filter(|l| !self.contains(*l)).collect()
    }
}

/// Result rows for one event, one row per lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSheet {
    meet_id: MeetId,
    event: String,
    selection: LaneSelection,
    rows: Vec<EventRow>,
}

impl EventSheet {
    /// Opens a sheet with a blank row for every lane.
    pub fn open(meet_id: MeetId, event: impl Into<String>, selection: LaneSelection) -> Self {
        Self {
            meet_id,
            event: event.into(),
            selection,
            rows: Lane::all().map(EventRow::new).collect(),
        }
    }

    /// Meet this sheet was opened for.
    pub fn meet_id(&self) -> MeetId {
        self.meet_id
    }

    /// Event name.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Lane selection the sheet was opened with.
    pub fn selection(&self) -> &LaneSelection {
        &self.selection
    }

    /// All rows, ascending by lane.
    pub fn rows(&self) -> &[EventRow] {
        &self.rows
    }

    /// Row for `lane`.
    pub fn row(&self, lane: Lane) -> &EventRow {
        &self.rows[usize::from(lane.get() - 1)]
    }

    /// Mutable row for `lane`.
    pub fn row_mut(&mut self, lane: Lane) -> &mut EventRow {
        &mut self.rows[usize::from(lane.get() - 1)]
    }

    /// Rows in the home team's lanes, ascending.
    pub fn home_rows(&self) -> impl Iterator<Item = &EventRow> {
        self.rows.iter().filter(|r| self.selection.contains(r.lane))
    }

    /// Sets the swimmer for a lane given as a raw number.
    pub fn set_swimmer(&mut self, lane: u8, swimmer: impl Into<String>) -> Result<(), MeetError> {
        self.row_mut(Lane::try_from(lane)?).swimmer = swimmer.into();
        Ok(())
    }

    /// Sets the time for a lane given as a raw number.
    pub fn set_time(&mut self, lane: u8, time: impl Into<String>) -> Result<(), MeetError> {
        self.row_mut(Lane::try_from(lane)?).time = time.into();
        Ok(())
    }

    /// Sets the place for a lane given as a raw number.
    pub fn set_place(&mut self, lane: u8, place: impl Into<String>) -> Result<(), MeetError> {
        self.row_mut(Lane::try_from(lane)?).place = place.into();
        Ok(())
    }
}
