use blokus_eval::share;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveQuality {
    Sigma,
    Chad,
    Good,
    Ok,
    Strange,
    Bad,
    Clown,
}

impl MoveQuality {
    /// Best to worst
    pub const ALL: [MoveQuality; 7] = [
        MoveQuality::Sigma,
        MoveQuality::Chad,
        MoveQuality::Good,
        MoveQuality::Ok,
        MoveQuality::Strange,
        MoveQuality::Bad,
        MoveQuality::Clown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Sigma => "Sigma",
            Self::Chad => "Chad",
            Self::Good => "Good",
            Self::Ok => "Ok",
            Self::Strange => "Strange",
            Self::Bad => "Bad",
            Self::Clown => "Clown",
        }
    }

    /// Position in [`MoveQuality::ALL`]
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Good or better
    pub fn is_sound(self) -> bool {
        matches!(self, Self::Sigma | Self::Chad | Self::Good)
    }
}

impl std::fmt::Display for MoveQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mover-relative legal move counts around one move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCounts {
    pub you_before: usize,
    pub opp_before: usize,
    pub you_after: usize,
    pub opp_after: usize,
}

/// Mobility shares before and after a move and their deltas.
/// Computed once per move and stored, never recomputed for display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MobilityDeltas {
    pub ratio_before: f64,
    pub ratio_after: f64,
    pub delta_you: f64,
    pub opp_ratio_before: f64,
    pub opp_ratio_after: f64,
    pub delta_opp: f64,
}

impl MobilityDeltas {
    pub fn from_counts(counts: &MoveCounts) -> Self {
        let ratio_before = share(counts.you_before, counts.opp_before);
        let ratio_after = share(counts.you_after, counts.opp_after);
        let opp_ratio_before = share(counts.opp_before, counts.you_before);
        let opp_ratio_after = share(counts.opp_after, counts.you_after);
        Self {
            ratio_before,
            ratio_after,
            delta_you: ratio_after - ratio_before,
            opp_ratio_before,
            opp_ratio_after,
            delta_opp: opp_ratio_after - opp_ratio_before,
        }
    }
}

/// Threshold bands over (delta_you, delta_opp), first match wins
pub fn classify(delta_you: f64, delta_opp: f64) -> MoveQuality {
    if delta_you >= 0.0 && delta_opp <= -0.5 {
        MoveQuality::Sigma
    } else if delta_you >= 0.5 && delta_opp <= 0.0 {
        MoveQuality::Chad
    } else if delta_you >= 0.0 && delta_opp <= 0.0 {
        MoveQuality::Good
    } else if delta_you >= -0.1 && delta_opp <= 0.1 {
        MoveQuality::Ok
    } else if delta_you >= -0.2 && delta_opp <= 0.2 {
        MoveQuality::Strange
    } else if delta_you >= -0.3 && delta_opp <= 0.3 {
        MoveQuality::Bad
    } else {
        MoveQuality::Clown
    }
}

/// Label for the move at `history_index`. The opening move has nothing to
/// compare against and is always Good.
pub fn classify_move(history_index: usize, deltas: &MobilityDeltas) -> MoveQuality {
    if history_index == 0 {
        MoveQuality::Good
    } else {
        classify(deltas.delta_you, deltas.delta_opp)
    }
}
