use chrono::NaiveDate;
use foreclosure_advisor::workflows::foreclosure::{
    calculate_foreclosure_timeline, ForeclosureStage, MilestoneStatus, Urgency,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn timeline_marks_progress_relative_to_today() {
    let timeline = calculate_foreclosure_timeline(date(2025, 1, 1), date(2025, 5, 15));

    assert_eq!(timeline.estimated_sale_date, date(2025, 7, 1));
    assert_eq!(timeline.days_until_sale, 47);
    assert_eq!(timeline.urgency, Urgency::Elevated);
    assert_eq!(
        timeline.current_stage,
        Some(ForeclosureStage::PreForeclosureReview)
    );

    let cure = timeline
        .milestone(ForeclosureStage::CurePeriodEnds)
        .expect("cure milestone present");
    assert_eq!(cure.status, MilestoneStatus::Upcoming);
    assert_eq!(cure.days_from_today, 6);
    assert!(cure.note.contains("51.002(d)"));

    assert_eq!(timeline.upcoming().count(), 4);
}

#[test]
fn early_delinquency_is_flagged_early() {
    let timeline = calculate_foreclosure_timeline(date(2025, 1, 1), date(2025, 2, 1));

    assert_eq!(timeline.days_until_sale, 150);
    assert_eq!(timeline.urgency, Urgency::Early);
    assert_eq!(timeline.current_stage, Some(ForeclosureStage::CreditReporting));
    assert!(!timeline.recommended_actions.is_empty());
}

#[test]
fn milestone_on_today_is_reported_as_today() {
    let timeline = calculate_foreclosure_timeline(date(2025, 1, 1), date(2025, 7, 1));

    let sale = timeline
        .milestone(ForeclosureStage::ForeclosureSale)
        .expect("sale milestone present");
    assert_eq!(sale.status, MilestoneStatus::Today);
    assert_eq!(timeline.urgency, Urgency::Critical);
    assert_eq!(timeline.current_stage, Some(ForeclosureStage::ForeclosureSale));
}

#[test]
fn past_sale_dates_are_reported() {
    let timeline = calculate_foreclosure_timeline(date(2025, 3, 10), date(2025, 10, 1));

    assert_eq!(timeline.estimated_sale_date, date(2025, 9, 2));
    assert!(timeline.days_until_sale < 0);
    assert_eq!(timeline.urgency, Urgency::SalePassed);
    assert_eq!(timeline.current_stage, Some(ForeclosureStage::NoticeToVacate));
}

#[test]
fn evaluation_before_the_missed_payment_has_no_current_stage() {
    let timeline = calculate_foreclosure_timeline(date(2025, 3, 10), date(2025, 3, 1));

    assert!(timeline.current_stage.is_none());
    assert!(timeline
        .milestones
        .iter()
        .all(|milestone| milestone.status == MilestoneStatus::Upcoming));
}
