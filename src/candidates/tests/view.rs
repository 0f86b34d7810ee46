use super::common::*;
use crate::candidates::domain::{Experience, FilterSelection, Gender};
use crate::candidates::store::CandidateStore;

#[test]
fn derive_view_is_idempotent() {
    let (mut store, _storage) = store_over(&[
        candidate("Ada Park", Gender::Female, Experience::TwoYears, &["SQL"]),
        candidate("Ben Okafor", Gender::Male, Experience::FiveYears, &["Java"]),
    ]);
    store.set_search_term("ada");

    let first = store.derive_view();
    let second = store.derive_view();
    assert_eq!(first, second);
}

#[test]
fn search_matches_name_email_and_phone_case_insensitively() {
    let mut by_phone = candidate("Ada Park", Gender::Female, Experience::TwoYears, &["SQL"]);
    by_phone.phone = "+1 (555) 777-8888".to_string();
    let records = [
        by_phone,
        candidate("Ben Okafor", Gender::Male, Experience::FiveYears, &["Java"]),
        candidate("Cara Voss", Gender::Female, Experience::OneYear, &["PHP"]),
    ];
    let (mut store, _storage) = store_over(&records);

    store.set_search_term("BEN");
    let view = store.derive_view();
    assert_eq!(view.filtered_total, 1);
    assert_eq!(view.records[0].name, "Ben Okafor");

    store.set_search_term("cara.voss@");
    let view = store.derive_view();
    assert_eq!(view.filtered_total, 1);
    assert_eq!(view.records[0].name, "Cara Voss");

    store.set_search_term("777-8888");
    let view = store.derive_view();
    assert_eq!(view.filtered_total, 1);
    assert_eq!(view.records[0].name, "Ada Park");
}

#[test]
fn filters_and_across_facets_or_within_skills() {
    let records = [
        candidate("Male A", Gender::Male, Experience::TwoYears, &["A"]),
        candidate("Male B", Gender::Male, Experience::TwoYears, &["B"]),
        candidate("Male AB", Gender::Male, Experience::TwoYears, &["A", "B"]),
        candidate("Female A", Gender::Female, Experience::TwoYears, &["A"]),
        candidate("Female B", Gender::Female, Experience::TwoYears, &["B"]),
        candidate("Female AB", Gender::Female, Experience::TwoYears, &["A", "B"]),
    ];
    let (mut store, _storage) = store_over(&records);

    store.set_filter(FilterSelection::Genders(vec![Gender::Male]));
    store.set_filter(FilterSelection::Skills(vec!["B".to_string()]));

    let view = store.derive_view();
    let names: Vec<&str> = view.records.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Male B", "Male AB"]);
}

#[test]
fn skills_facet_matches_any_selected_skill() {
    let records = [
        candidate("Only A", Gender::Male, Experience::TwoYears, &["A"]),
        candidate("Only B", Gender::Male, Experience::TwoYears, &["B"]),
        candidate("Only C", Gender::Male, Experience::TwoYears, &["C"]),
    ];
    let (mut store, _storage) = store_over(&records);

    store.set_filter(FilterSelection::Skills(vec!["A".to_string(), "B".to_string()]));
    let view = store.derive_view();
    assert_eq!(view.filtered_total, 2);
}

#[test]
fn experience_facet_matches_on_membership() {
    let records = [
        candidate("Junior", Gender::Male, Experience::OneYear, &["A"]),
        candidate("Mid", Gender::Male, Experience::FourYears, &["A"]),
        candidate("Senior", Gender::Male, Experience::TenPlusYears, &["A"]),
    ];
    let (mut store, _storage) = store_over(&records);

    store.set_filter(FilterSelection::Experience(vec![
        Experience::OneYear,
        Experience::TenPlusYears,
    ]));
    let view = store.derive_view();
    let names: Vec<&str> = view.records.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Junior", "Senior"]);
}

#[test]
fn pagination_boundaries_clamp_rather_than_fail() {
    let records: Vec<_> = (1..=11)
        .map(|n| {
            candidate(
                &format!("Candidate {n:02}"),
                Gender::Male,
                Experience::TwoYears,
                &["A"],
            )
        })
        .collect();
    let (mut store, _storage) = store_over(&records);

    let view = store.derive_view();
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.records.len(), 10);
    assert_eq!(view.filtered_total, 11);

    store.go_to_page(0);
    assert_eq!(store.derive_view().current_page, 1);

    store.go_to_page(3);
    let view = store.derive_view();
    assert_eq!(view.current_page, 2);
    assert_eq!(view.records.len(), 1);
    assert_eq!(view.records[0].name, "Candidate 11");
}

#[test]
fn empty_collection_still_reports_one_page() {
    let (mut store, _storage) = store_over(&[]);
    let view = store.derive_view();
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert!(view.records.is_empty());
    assert_eq!(view.filtered_total, 0);
}

#[test]
fn filter_and_search_changes_reset_the_cursor() {
    let records: Vec<_> = (1..=11)
        .map(|n| {
            candidate(
                &format!("Candidate {n:02}"),
                Gender::Male,
                Experience::TwoYears,
                &["A"],
            )
        })
        .collect();
    let (mut store, _storage) = store_over(&records);

    store.go_to_page(2);
    assert_eq!(store.derive_view().current_page, 2);

    store.set_filter(FilterSelection::Genders(vec![Gender::Male]));
    assert_eq!(store.derive_view().current_page, 1);

    store.go_to_page(2);
    store.set_search_term("candidate");
    assert_eq!(store.derive_view().current_page, 1);
}

#[test]
fn reset_filters_clears_facets_and_search_term() {
    let records = [
        candidate("Ada Park", Gender::Female, Experience::TwoYears, &["SQL"]),
        candidate("Ben Okafor", Gender::Male, Experience::FiveYears, &["Java"]),
    ];
    let (mut store, _storage) = store_over(&records);

    store.set_search_term("ada");
    store.set_filter(FilterSelection::Genders(vec![Gender::Female]));
    assert_eq!(store.derive_view().filtered_total, 1);

    store.reset_filters();
    assert_eq!(store.search_term(), "");
    assert!(store.filters().is_empty());
    assert_eq!(store.derive_view().filtered_total, 2);
}

#[test]
fn stranded_cursor_clamps_after_removal() {
    let records: Vec<_> = (1..=11)
        .map(|n| {
            candidate(
                &format!("Candidate {n:02}"),
                Gender::Male,
                Experience::TwoYears,
                &["A"],
            )
        })
        .collect();
    let (mut store, _storage) = store_over(&records);

    store.go_to_page(2);
    store.remove(&records[10].id).expect("existing id removes");

    let view = store.derive_view();
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.records.len(), 10);
}

#[test]
fn page_size_is_configurable_and_never_zero() {
    let records: Vec<_> = (1..=5)
        .map(|n| {
            candidate(
                &format!("Candidate {n:02}"),
                Gender::Male,
                Experience::TwoYears,
                &["A"],
            )
        })
        .collect();
    let storage = storage_with(&records);

    let mut store = CandidateStore::with_settings(storage.clone(), "candidates_data", 2);
    let view = store.derive_view();
    assert_eq!(view.page_size, 2);
    assert_eq!(view.total_pages, 3);

    let mut degenerate = CandidateStore::with_settings(storage, "candidates_data", 0);
    assert_eq!(degenerate.derive_view().page_size, 1);
}
