//! Per-role presentation settings.
//!
//! Every role-dependent choice the dashboard makes lives here as data, so the
//! renderer reads a [`RoleView`] instead of branching on the role inline.

use crate::ViewerRole;

/// Colour tone of a summary stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Primary,
    Amber,
    Emerald,
    Slate,
}

impl StatTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatTone::Primary => "primary",
            StatTone::Amber => "amber",
            StatTone::Emerald => "emerald",
            StatTone::Slate => "slate",
        }
    }
}

/// Which number fills the fourth summary slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeStat {
    /// Everything the role can see.
    TotalVisible,
    /// Cases owned by the current user, regardless of role.
    OwnCases,
}

/// A static quick-action card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub title: &'static str,
    pub description: &'static str,
    pub primary: bool,
}

/// A fabricated analytics figure with its week-on-week trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    /// Signed change, e.g. "+3" or "-0.4".
    pub trend: &'static str,
}

impl Metric {
    pub fn is_positive(&self) -> bool {
        self.trend.starts_with('+')
    }

    pub fn trend_arrow(&self) -> &'static str {
        if self.is_positive() {
            "▲"
        } else {
            "▼"
        }
    }
}

/// Sparkline bar heights in percent.
pub const ACTIVITY_BARS: &[u8] = &[40, 55, 35, 60, 48, 72, 64];

/// Everything the renderer needs to know about a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleView {
    pub role: ViewerRole,
    pub heading: &'static str,
    pub description: &'static str,
    /// Sidebar "What you see here" copy, split around the emphasised phrase.
    pub scope_lead: &'static str,
    pub scope_emphasis: &'static str,
    pub scope_tail: &'static str,
    pub show_owner_column: bool,
    pub show_owner_filter: bool,
    pub scope_stat: ScopeStat,
    pub scope_stat_label: &'static str,
    pub shortcuts: &'static [Shortcut],
    pub analytics_title: &'static str,
    pub metrics: &'static [Metric],
}

static OFFICER_VIEW: RoleView = RoleView {
    role: ViewerRole::Officer,
    heading: "What is on your desk today",
    description: "A short summary of your current cases and anything waiting on you.",
    scope_lead: "A trimmed view showing ",
    scope_emphasis: "only cases assigned to you",
    scope_tail: ", plus any payments you still need to follow up on.",
    show_owner_column: false,
    show_owner_filter: false,
    scope_stat: ScopeStat::OwnCases,
    scope_stat_label: "Assigned to you",
    shortcuts: &[
        Shortcut {
            title: "Continue draft application",
            description: "Pick up where you left off on a client application from earlier.",
            primary: true,
        },
        Shortcut {
            title: "Record payment confirmation",
            description: "Confirm a payment and remove it from the \u{201c}awaiting\u{201d} list.",
            primary: false,
        },
    ],
    analytics_title: "Your analytics",
    metrics: &[
        Metric { label: "Avg. age in queue", value: "2.3 days", trend: "-0.4" },
        Metric { label: "On-time decisions", value: "94%", trend: "+3" },
        Metric { label: "Payment completion", value: "92%", trend: "+1" },
    ],
};

static SUPERVISOR_VIEW: RoleView = RoleView {
    role: ViewerRole::Supervisor,
    heading: "What your team is working on",
    description: "Quick view of open submissions, approvals and payments across officers.",
    scope_lead: "A wider view across ",
    scope_emphasis: "your team",
    scope_tail: " so you can spot ageing cases, uneven queues, and missing payments.",
    show_owner_column: true,
    show_owner_filter: true,
    scope_stat: ScopeStat::TotalVisible,
    scope_stat_label: "Total across team",
    shortcuts: &[
        Shortcut {
            title: "Check escalated cases",
            description: "Items your team has flagged for a second look in the last day.",
            primary: true,
        },
        Shortcut {
            title: "Balance queues",
            description: "Move a few files between officers when one queue is overloaded.",
            primary: false,
        },
        Shortcut {
            title: "Team snapshot",
            description: "See ageing, throughput and where things are getting stuck.",
            primary: false,
        },
    ],
    analytics_title: "Team analytics",
    metrics: &[
        Metric { label: "Avg. age in queue", value: "2.3 days", trend: "-0.4" },
        Metric { label: "On-time decisions", value: "94%", trend: "+3" },
        Metric { label: "Payment completion", value: "88%", trend: "+1" },
    ],
};

impl ViewerRole {
    /// Presentation settings for this role.
    pub fn view(&self) -> &'static RoleView {
        match self {
            ViewerRole::Officer => &OFFICER_VIEW,
            ViewerRole::Supervisor => &SUPERVISOR_VIEW,
        }
    }
}
