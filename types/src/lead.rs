use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned lead identity. The client never makes one up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Lost,
    Closed,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Lost,
        LeadStatus::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Lost => "Lost",
            LeadStatus::Closed => "Closed",
        }
    }

    /// Parses the exact variant name, as used by the status `<select>`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// CSS class of the status badge in the leads table.
    pub fn badge_class(self) -> &'static str {
        match self {
            LeadStatus::New => "badge badge-blue",
            LeadStatus::Contacted => "badge badge-yellow",
            LeadStatus::Qualified => "badge badge-green",
            LeadStatus::Lost => "badge badge-red",
            LeadStatus::Closed => "badge badge-gray",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: LeadId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub status: LeadStatus,
}

impl Lead {
    /// The editable part of this lead, used to prefill the edit dialog.
    pub fn draft(&self) -> NewLead {
        NewLead {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            status: self.status,
        }
    }
}

/// A lead as typed into the form: everything but the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub status: LeadStatus,
}

impl NewLead {
    pub fn with_id(self, id: LeadId) -> Lead {
        Lead {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            status: self.status,
        }
    }
}

/// Aggregate counts for the dashboard. Missing counts render as `N/A`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadStats {
    pub total_leads: Option<u64>,
    pub new_leads: Option<u64>,
    pub converted_leads: Option<u64>,
    pub pending_follow_ups: Option<u64>,
}
