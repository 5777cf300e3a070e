//! Application and interview state machines - pure decision logic.
//!
//! Every status mutation in the actions layer funnels through these tables,
//! so there is exactly one definition of which edges exist and which actor
//! each edge requires. The actions re-read current state under a row lock
//! and consult these functions inside the transaction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Application state machine
// =============================================================================

/// Application lifecycle states. Offered, Rejected and Withdrawn are
/// terminal: no edge leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Viewed,
    Interviewing,
    Offered,
    Rejected,
    Withdrawn,
}

/// Which relationship to the application an edge requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredActor {
    /// The job seeker who submitted the application.
    Applicant,
    /// The employer who owns the job posting.
    OwningEmployer,
}

impl ApplicationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Offered | ApplicationStatus::Rejected | ApplicationStatus::Withdrawn
        )
    }

    /// The allowed-edge table. Anything not listed here is an illegal
    /// transition and must surface as Conflict.
    pub fn allows(self, to: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        matches!(
            (self, to),
            (Applied, Viewed)
                | (Applied, Interviewing)
                | (Viewed, Interviewing)
                | (Applied, Withdrawn)
                | (Viewed, Withdrawn)
                | (Interviewing, Withdrawn)
                | (Interviewing, Offered)
                | (Interviewing, Rejected)
        )
    }

    /// Actor relationship required to drive an edge into `to`. `None` for
    /// states that are never a transition target (Applied is initial-only).
    pub fn required_actor(to: ApplicationStatus) -> Option<RequiredActor> {
        use ApplicationStatus::*;
        match to {
            Applied => None,
            Withdrawn => Some(RequiredActor::Applicant),
            Viewed | Interviewing | Offered | Rejected => Some(RequiredActor::OwningEmployer),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Viewed => "viewed",
            ApplicationStatus::Interviewing => "interviewing",
            ApplicationStatus::Offered => "offered",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
        }
    }

    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Viewed,
        ApplicationStatus::Interviewing,
        ApplicationStatus::Offered,
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn,
    ];
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "applied" => Ok(ApplicationStatus::Applied),
            "viewed" => Ok(ApplicationStatus::Viewed),
            "interviewing" => Ok(ApplicationStatus::Interviewing),
            "offered" => Ok(ApplicationStatus::Offered),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "withdrawn" => Ok(ApplicationStatus::Withdrawn),
            _ => Err(anyhow::anyhow!("Invalid application status: {}", s)),
        }
    }
}

// =============================================================================
// Interview sub-machine
// =============================================================================

/// Interview states: `Scheduled -> Completed | Cancelled`, both terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, InterviewStatus::Scheduled)
    }

    pub fn allows(self, to: InterviewStatus) -> bool {
        use InterviewStatus::*;
        matches!((self, to), (Scheduled, Completed) | (Scheduled, Cancelled))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStatus::Scheduled => "scheduled",
            InterviewStatus::Completed => "completed",
            InterviewStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "scheduled" => Ok(InterviewStatus::Scheduled),
            "completed" => Ok(InterviewStatus::Completed),
            "cancelled" => Ok(InterviewStatus::Cancelled),
            _ => Err(anyhow::anyhow!("Invalid interview status: {}", s)),
        }
    }
}

/// Outcome of a completed interview. Drives the owning application along
/// `Interviewing -> Offered` (passed) or `Interviewing -> Rejected` (failed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewResult {
    Passed,
    Failed,
}

impl InterviewResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewResult::Passed => "passed",
            InterviewResult::Failed => "failed",
        }
    }

    /// The application status this result propagates to.
    pub fn application_outcome(&self) -> ApplicationStatus {
        match self {
            InterviewResult::Passed => ApplicationStatus::Offered,
            InterviewResult::Failed => ApplicationStatus::Rejected,
        }
    }
}

impl fmt::Display for InterviewResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewResult {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "passed" => Ok(InterviewResult::Passed),
            "failed" => Ok(InterviewResult::Failed),
            _ => Err(anyhow::anyhow!("Invalid interview result: {}", s)),
        }
    }
}
