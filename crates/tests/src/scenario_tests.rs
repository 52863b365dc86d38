use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use shared_types::greeting::{format_date, format_time, greeting};
use shared_types::{
    ChromeVisibility, DashboardViewModel, GuardState, Role, SessionKey, AUTH_ENTRY_PATH,
};

use crate::common;

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

#[test]
fn test_employer_can_open_employer_dashboard_but_not_jobseeker() {
    let store = common::store_with(&[(SessionKey::Role, "employer")]);
    assert!(common::mount(Role::Employer, &store).is_authorized());
    assert!(!common::mount(Role::Jobseeker, &store).is_authorized());
}

#[test]
fn test_mentor_with_honorific_is_greeted_by_first_name() {
    let store = common::store_with(&[
        (SessionKey::Role, "mentor"),
        (SessionKey::DisplayName, "Dr. Lisa K."),
    ]);

    let GuardState::Authorized(session) = common::mount(Role::Mentor, &store) else {
        panic!("mentor should be authorized");
    };
    let line = greeting(&session, at(9, 30));
    assert!(line.contains("Lisa"), "{line}");
    assert_eq!(line, "Good Morning, Lisa!");
    assert_eq!(session.initial(), 'L');
}

#[test]
fn test_employer_on_admin_dashboard_gets_redirect_and_no_data() {
    let store = common::signed_in_store(Role::Employer, "Acme Recruiting", "hr@acme.io");
    let verdict = common::mount(Role::Admin, &store);

    assert_eq!(verdict.redirect_target(), Some(AUTH_ENTRY_PATH));
    assert!(!matches!(verdict, GuardState::Authorized(_)));
}

#[test]
fn test_unknown_path_keeps_chrome() {
    let chrome = ChromeVisibility::for_path("/unknown-path");
    assert!(chrome.navbar);
    assert!(chrome.footer);
}

#[test]
fn test_anonymous_header_uses_fallbacks() {
    let session = common::session_in(&common::store_with(&[(SessionKey::Role, "admin")]));
    assert_eq!(greeting(&session, at(18, 0)), "Good Evening, User!");
    assert_eq!(session.initial(), 'U');
}

#[test]
fn test_dashboard_clock_line() {
    let now = NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(14, 7, 0))
        .expect("valid datetime");
    assert_eq!(format_date(now), "Monday, January 15, 2024");
    assert_eq!(format_time(now), "14:07");
}

#[test]
fn test_employer_overview_counts_open_applications() {
    let model = DashboardViewModel::placeholder(Role::Employer);
    assert_eq!(model.records.len(), 4);
    assert_eq!(model.open_records(), 3);
}
