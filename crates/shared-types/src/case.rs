use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::AppError;

// ── Enumerations ────────────────────────────────────────────────────

/// Workflow status of a case, declared in workflow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    Draft,
    Submitted,
    #[serde(rename = "In Review")]
    InReview,
    Approved,
    #[serde(rename = "Payment Pending")]
    PaymentPending,
}

/// All case statuses in workflow order.
pub const ALL_STATUSES: &[CaseStatus] = &[
    CaseStatus::Draft,
    CaseStatus::Submitted,
    CaseStatus::InReview,
    CaseStatus::Approved,
    CaseStatus::PaymentPending,
];

impl CaseStatus {
    /// Key used in select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Draft => "draft",
            CaseStatus::Submitted => "submitted",
            CaseStatus::InReview => "in_review",
            CaseStatus::Approved => "approved",
            CaseStatus::PaymentPending => "payment_pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Draft => "Draft",
            CaseStatus::Submitted => "Submitted",
            CaseStatus::InReview => "In Review",
            CaseStatus::Approved => "Approved",
            CaseStatus::PaymentPending => "Payment Pending",
        }
    }

    /// Parse either a select key (`in_review`) or a display label (`In Review`).
    pub fn parse(s: &str) -> Result<Self, AppError> {
        let needle = s.trim();
        ALL_STATUSES
            .iter()
            .copied()
            .find(|st| st.as_str() == needle || st.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| AppError::bad_request(format!("Unknown case status: {s}")))
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Registry service a case was filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "New Registration")]
    NewRegistration,
    #[serde(rename = "Change of Ownership")]
    ChangeOfOwnership,
    #[serde(rename = "Annual Return")]
    AnnualReturn,
}

pub const ALL_SERVICES: &[ServiceType] = &[
    ServiceType::NewRegistration,
    ServiceType::ChangeOfOwnership,
    ServiceType::AnnualReturn,
];

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::NewRegistration => "new_registration",
            ServiceType::ChangeOfOwnership => "change_of_ownership",
            ServiceType::AnnualReturn => "annual_return",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::NewRegistration => "New Registration",
            ServiceType::ChangeOfOwnership => "Change of Ownership",
            ServiceType::AnnualReturn => "Annual Return",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        let needle = s.trim();
        ALL_SERVICES
            .iter()
            .copied()
            .find(|sv| sv.as_str() == needle || sv.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| AppError::bad_request(format!("Unknown service type: {s}")))
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Case record ─────────────────────────────────────────────────────

/// A registration or ownership-change case tracked by the portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub applicant: String,
    #[serde(rename = "service")]
    pub service_type: ServiceType,
    pub status: CaseStatus,
    /// Officer responsible for the case.
    pub owner: String,
    pub submitted_at: NaiveDate,
    /// Amount due, in whole currency units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

impl Case {
    pub fn is_owned_by(&self, identity: &str) -> bool {
        self.owner == identity
    }

    pub fn is_payment_pending(&self) -> bool {
        self.status == CaseStatus::PaymentPending
    }

    /// Check the record invariants.
    ///
    /// A case awaiting payment must carry the amount due.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();
        if self.id.trim().is_empty() {
            field_errors.insert("id".to_string(), "must not be empty".to_string());
        }
        if self.applicant.trim().is_empty() {
            field_errors.insert("applicant".to_string(), "must not be empty".to_string());
        }
        if self.is_payment_pending() && self.amount.is_none() {
            field_errors.insert(
                "amount".to_string(),
                "required while payment is pending".to_string(),
            );
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(
                format!("Case {} is invalid", self.id),
                field_errors,
            ))
        }
    }
}
