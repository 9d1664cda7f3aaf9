use serde::{Deserialize, Serialize};

/// Roadmap ordering priority assigned to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort weight: higher weight sorts earlier in the roadmap.
    pub const fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Three-band recommendation scale over a category percentage.
///
/// Deliberately coarser than the four-level display scale; the two scales
/// share the underlying percentage but not their thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityBand {
    Critical,
    Improving,
    Strong,
}

impl PriorityBand {
    pub const fn ordered() -> [Self; 3] {
        [Self::Critical, Self::Improving, Self::Strong]
    }

    /// Inclusive lower bounds: below 40 is Critical, 40 to 69 Improving,
    /// 70 and up Strong.
    pub const fn from_percentage(percentage: u8) -> Self {
        if percentage < 40 {
            Self::Critical
        } else if percentage < 70 {
            Self::Improving
        } else {
            Self::Strong
        }
    }

    pub const fn priority(self) -> Priority {
        match self {
            Self::Critical => Priority::High,
            Self::Improving => Priority::Medium,
            Self::Strong => Priority::Low,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Improving => "Improving",
            Self::Strong => "Strong",
        }
    }
}
