use std::fmt;
use std::str::FromStr;

/// A named view over the todo collection
///
/// Exactly one pane is active at a time; the caller owns that selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pane {
    /// Items due today or overdue
    #[default]
    Today,
    /// Items with a future action date
    Scheduled,
    /// Undated backlog
    Inbox,
    /// Items flagged someday/maybe
    Someday,
    /// Filtered results only
    Stakeholder,
}

impl Pane {
    /// All panes in toolbar order
    pub const ALL: [Pane; 5] = [
        Pane::Today,
        Pane::Scheduled,
        Pane::Inbox,
        Pane::Someday,
        Pane::Stakeholder,
    ];

    /// Toolbar label
    pub fn label(self) -> &'static str {
        match self {
            Pane::Today => "Today",
            Pane::Scheduled => "Scheduled",
            Pane::Inbox => "Inbox",
            Pane::Someday => "Someday / Maybe",
            Pane::Stakeholder => "Stakeholder actions",
        }
    }

    /// Icon key handed to the renderer
    pub fn icon(self) -> &'static str {
        match self {
            Pane::Today => "today",
            Pane::Scheduled => "scheduled",
            Pane::Inbox => "inbox",
            Pane::Someday => "someday",
            Pane::Stakeholder => "stakeholder",
        }
    }
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.icon())
    }
}

impl FromStr for Pane {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Pane::Today),
            "scheduled" => Ok(Pane::Scheduled),
            "inbox" => Ok(Pane::Inbox),
            "someday" => Ok(Pane::Someday),
            "stakeholder" => Ok(Pane::Stakeholder),
            _ => Err(format!(
                "Invalid pane '{}'. Valid options are: today, scheduled, inbox, someday, stakeholder",
                s
            )),
        }
    }
}
