use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::domain::{ForeclosureStage, ForeclosureTimeline, Milestone, MilestoneStatus, Urgency};

/// Day counts between milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineRules {
    pub grace_period_days: u64,
    pub credit_reporting_days: u64,
    pub pre_foreclosure_review_days: u64,
    pub cure_period_days: u64,
    pub notice_of_sale_days: u64,
    pub notice_to_vacate_days: u64,
}

impl TimelineRules {
    pub const fn texas() -> Self {
        Self {
            grace_period_days: 15,
            credit_reporting_days: 30,
            pre_foreclosure_review_days: 120,
            cure_period_days: 20,
            notice_of_sale_days: 21,
            notice_to_vacate_days: 3,
        }
    }
}

impl Default for TimelineRules {
    fn default() -> Self {
        Self::texas()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForeclosureCalculator {
    rules: TimelineRules,
}

impl ForeclosureCalculator {
    pub fn new(rules: TimelineRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &TimelineRules {
        &self.rules
    }

    /// Earliest date for each milestone, assuming the servicer moves as fast as the law allows.
    pub fn milestone_dates(
        &self,
        first_missed_payment: NaiveDate,
    ) -> Vec<(ForeclosureStage, NaiveDate)> {
        let rules = &self.rules;
        let late_fee = add_days(first_missed_payment, rules.grace_period_days);
        let credit_reporting = add_days(first_missed_payment, rules.credit_reporting_days);
        let notice_of_default = add_days(first_missed_payment, rules.pre_foreclosure_review_days);
        let cure_period_ends = add_days(notice_of_default, rules.cure_period_days);
        let sale = sale_day_on_or_after(add_days(cure_period_ends, rules.notice_of_sale_days));
        let notice_of_sale = sub_days(sale, rules.notice_of_sale_days);
        let notice_to_vacate = add_days(sale, rules.notice_to_vacate_days);

        vec![
            (ForeclosureStage::MissedPayment, first_missed_payment),
            (ForeclosureStage::LateFee, late_fee),
            (ForeclosureStage::CreditReporting, credit_reporting),
            (ForeclosureStage::PreForeclosureReview, notice_of_default),
            (ForeclosureStage::CurePeriodEnds, cure_period_ends),
            (ForeclosureStage::NoticeOfSale, notice_of_sale),
            (ForeclosureStage::ForeclosureSale, sale),
            (ForeclosureStage::NoticeToVacate, notice_to_vacate),
        ]
    }

    pub fn timeline(
        &self,
        first_missed_payment: NaiveDate,
        today: NaiveDate,
    ) -> ForeclosureTimeline {
        let dates = self.milestone_dates(first_missed_payment);

        let milestones: Vec<Milestone> = dates
            .into_iter()
            .map(|(stage, date)| {
                let status = if date < today {
                    MilestoneStatus::Passed
                } else if date == today {
                    MilestoneStatus::Today
                } else {
                    MilestoneStatus::Upcoming
                };
                Milestone {
                    stage,
                    stage_label: stage.label(),
                    date,
                    days_from_today: (date - today).num_days(),
                    status,
                    status_label: status.label(),
                    note: stage.note(),
                }
            })
            .collect();

        let estimated_sale_date = milestones
            .iter()
            .find(|milestone| milestone.stage == ForeclosureStage::ForeclosureSale)
            .map(|milestone| milestone.date)
            .unwrap_or(first_missed_payment);
        let days_until_sale = (estimated_sale_date - today).num_days();

        let current_stage = milestones
            .iter()
            .filter(|milestone| milestone.date <= today)
            .map(|milestone| milestone.stage)
            .last();

        let urgency = Urgency::from_days_until_sale(days_until_sale);

        ForeclosureTimeline {
            first_missed_payment,
            evaluated_on: today,
            milestones,
            estimated_sale_date,
            days_until_sale,
            current_stage,
            urgency,
            urgency_label: urgency.label(),
            recommended_actions: urgency.recommended_actions(),
        }
    }
}

/// Project the Texas foreclosure timeline for a missed payment, evaluated on `today`.
pub fn calculate_foreclosure_timeline(
    first_missed_payment: NaiveDate,
    today: NaiveDate,
) -> ForeclosureTimeline {
    ForeclosureCalculator::default().timeline(first_missed_payment, today)
}

/// First lawful sale day on or after `earliest`: the first Tuesday of the month, or the
/// Wednesday after it when that Tuesday is January 1 or July 4.
pub(crate) fn sale_day_on_or_after(earliest: NaiveDate) -> NaiveDate {
    match sale_day_in_month(earliest.year(), earliest.month()) {
        Some(candidate) if candidate >= earliest => candidate,
        _ => {
            let (year, month) = if earliest.month() == 12 {
                (earliest.year() + 1, 1)
            } else {
                (earliest.year(), earliest.month() + 1)
            };
            sale_day_in_month(year, month).unwrap_or(earliest)
        }
    }
}

fn sale_day_in_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Tue, 1).map(|tuesday| {
        if is_sale_holiday(tuesday) {
            add_days(tuesday, 1)
        } else {
            tuesday
        }
    })
}

fn is_sale_holiday(date: NaiveDate) -> bool {
    matches!((date.month(), date.day()), (1, 1) | (7, 4))
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

fn sub_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}
