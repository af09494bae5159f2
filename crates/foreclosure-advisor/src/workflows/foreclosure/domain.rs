use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Milestones of a Texas non-judicial foreclosure, in the order they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForeclosureStage {
    MissedPayment,
    LateFee,
    CreditReporting,
    PreForeclosureReview,
    CurePeriodEnds,
    NoticeOfSale,
    ForeclosureSale,
    NoticeToVacate,
}

impl ForeclosureStage {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::MissedPayment,
            Self::LateFee,
            Self::CreditReporting,
            Self::PreForeclosureReview,
            Self::CurePeriodEnds,
            Self::NoticeOfSale,
            Self::ForeclosureSale,
            Self::NoticeToVacate,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MissedPayment => "Missed Payment",
            Self::LateFee => "Late Fee Assessed",
            Self::CreditReporting => "Reported to Credit Bureaus",
            Self::PreForeclosureReview => "Notice of Default",
            Self::CurePeriodEnds => "Cure Period Ends",
            Self::NoticeOfSale => "Notice of Sale Posted",
            Self::ForeclosureSale => "Foreclosure Sale",
            Self::NoticeToVacate => "Notice to Vacate",
        }
    }

    pub const fn note(self) -> &'static str {
        match self {
            Self::MissedPayment => "The first unpaid installment starts the delinquency clock.",
            Self::LateFee => {
                "Most notes allow a 15-day grace period before a late charge is added."
            }
            Self::CreditReporting => {
                "Servicers typically report a payment 30 days past due to the credit bureaus."
            }
            Self::PreForeclosureReview => {
                "Federal servicing rules bar a first foreclosure notice until the loan is more than 120 days delinquent (12 CFR 1024.41(f))."
            }
            Self::CurePeriodEnds => {
                "The notice of default must give at least 20 days to cure before acceleration (Tex. Prop. Code § 51.002(d))."
            }
            Self::NoticeOfSale => {
                "Notice of sale must be posted, filed, and mailed at least 21 days before the sale (Tex. Prop. Code § 51.002(b))."
            }
            Self::ForeclosureSale => {
                "Sales are held on the first Tuesday of the month, or the first Wednesday when that Tuesday is January 1 or July 4 (Tex. Prop. Code § 51.002(a))."
            }
            Self::NoticeToVacate => {
                "The purchaser must give at least 3 days' written notice to vacate before filing an eviction (Tex. Prop. Code § 24.005)."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Passed,
    Today,
    Upcoming,
}

impl MilestoneStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
        }
    }
}

/// How close the homeowner is to the projected sale date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Early,
    Elevated,
    Critical,
    SalePassed,
}

impl Urgency {
    pub const fn from_days_until_sale(days: i64) -> Self {
        if days < 0 {
            Self::SalePassed
        } else if days <= 30 {
            Self::Critical
        } else if days <= 90 {
            Self::Elevated
        } else {
            Self::Early
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Early => "Early",
            Self::Elevated => "Elevated",
            Self::Critical => "Critical",
            Self::SalePassed => "Sale Date Passed",
        }
    }

    pub fn recommended_actions(self) -> Vec<&'static str> {
        match self {
            Self::Early => vec![
                "Call the servicer to ask about repayment plans or forbearance before the notice of default.",
                "Gather income, expense, and hardship documentation for a loss mitigation application.",
                "Request a free home valuation to understand available equity.",
            ],
            Self::Elevated => vec![
                "Submit a complete loss mitigation application; a complete application more than 37 days before the sale must be reviewed before the sale proceeds.",
                "Request a reinstatement quote in writing.",
                "Compare a traditional listing or short sale against the remaining timeline.",
            ],
            Self::Critical => vec![
                "Ask the servicer in writing to postpone the sale while alternatives are reviewed.",
                "Consider a cash offer or short sale that can close before the sale date.",
                "Consult a HUD-approved housing counselor or attorney immediately.",
            ],
            Self::SalePassed => vec![
                "Confirm whether the sale occurred and who purchased the property.",
                "Review any excess proceeds claim available after the sale.",
                "Plan relocation before the notice to vacate expires.",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub stage: ForeclosureStage,
    pub stage_label: &'static str,
    pub date: NaiveDate,
    pub days_from_today: i64,
    pub status: MilestoneStatus,
    pub status_label: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeclosureTimeline {
    pub first_missed_payment: NaiveDate,
    pub evaluated_on: NaiveDate,
    pub milestones: Vec<Milestone>,
    pub estimated_sale_date: NaiveDate,
    pub days_until_sale: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stage: Option<ForeclosureStage>,
    pub urgency: Urgency,
    pub urgency_label: &'static str,
    pub recommended_actions: Vec<&'static str>,
}

impl ForeclosureTimeline {
    pub fn milestone(&self, stage: ForeclosureStage) -> Option<&Milestone> {
        self.milestones
            .iter()
            .find(|milestone| milestone.stage == stage)
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &Milestone> {
        self.milestones
            .iter()
            .filter(|milestone| milestone.status != MilestoneStatus::Passed)
    }
}
