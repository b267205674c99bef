use policy_catalog::catalog::{Catalog, LoadConfig, RawCatalog};
use policy_catalog::dataset::{Category, CategoryId, PolicyId, PolicyRecord};
use policy_catalog::selection::{SelectionState, ViewMode};
use policy_catalog::types::View;

fn make_policy(id: u64, category: &str, title: &str) -> PolicyRecord {
    PolicyRecord {
        id: PolicyId::from(id),
        title: title.to_string(),
        category: CategoryId::from(category),
        department: String::new(),
        release_date: String::new(),
        summary: String::new(),
        latest_notice: String::new(),
        benefits: vec!["Up to 50% rebate".to_string()],
        applicants: vec!["SMEs".to_string()],
        source: String::new(),
    }
}

fn make_catalog() -> Catalog {
    let raw = RawCatalog {
        categories: vec![Category::new("A", "Tax", ""), Category::new("B", "Hiring", "")],
        policies: vec![
            make_policy(1, "A", "Tax rebate"),
            make_policy(2, "B", "Hiring subsidy"),
            make_policy(3, "A", "Tax credit"),
        ],
    };
    Catalog::load(raw, &LoadConfig::v0()).unwrap()
}

#[test]
fn test_initial_state() {
    let state = SelectionState::new();

    assert_eq!(state.mode(), ViewMode::Listing);
    assert_eq!(state.active_category(), None);
    assert_eq!(state.query().as_str(), "");
    assert!(state.current_record().is_none());
    assert!(state.is_active(None));
    assert!(!state.has_query());
}

#[test]
fn test_open_then_close_restores_listing() {
    let catalog = make_catalog();
    let mut state = SelectionState::new();
    state.select_category(Some(CategoryId::from("A")));
    state.set_query("tax");
    let before = state.clone();

    let record = state.visible(&catalog)[1];
    state.open_record(record);
    assert_eq!(state.mode(), ViewMode::Detail);
    assert_eq!(state.view(&catalog), View::Detail(record));

    state.close_record();
    assert_eq!(state.mode(), ViewMode::Listing);
    assert_eq!(state, before);
}

#[test]
fn test_open_record_keeps_exact_instance() {
    let catalog = make_catalog();
    let mut state = SelectionState::new();

    let record = catalog.policy(&PolicyId::from(2u64)).unwrap();
    state.open_record(record);

    let open = state.current_record().unwrap();
    assert!(std::ptr::eq(open.record(), record.record()));
    assert_eq!(open.benefits, vec!["Up to 50% rebate".to_string()]);
    assert_eq!(open.category_in(&catalog).map(|c| c.name.as_str()), Some("Hiring"));
}

#[test]
fn test_category_change_in_detail_keeps_record_open() {
    let catalog = make_catalog();
    let mut state = SelectionState::new();
    let record = catalog.policy(&PolicyId::from(2u64)).unwrap();

    state.open_record(record);
    state.select_category(Some(CategoryId::from("A")));

    // The open record is in B; the detail view does not follow the filter.
    assert_eq!(state.view(&catalog), View::Detail(record));

    state.close_record();
    let View::Listing(list) = state.view(&catalog) else {
        panic!("expected listing after close");
    };
    let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_query_edits_in_detail_apply_on_return() {
    let catalog = make_catalog();
    let mut state = SelectionState::new();

    state.open_record(catalog.policy(&PolicyId::from(1u64)).unwrap());
    state.set_query("hiring");
    assert_eq!(state.mode(), ViewMode::Detail);

    state.close_record();
    let View::Listing(list) = state.view(&catalog) else {
        panic!("expected listing after close");
    };
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id.as_str(), "2");
}

#[test]
fn test_open_in_detail_replaces_record() {
    let catalog = make_catalog();
    let mut state = SelectionState::new();
    let first = catalog.policy(&PolicyId::from(1u64)).unwrap();
    let second = catalog.policy(&PolicyId::from(3u64)).unwrap();

    state.open_record(first);
    state.open_record(second);

    assert_eq!(state.current_record(), Some(second));
}

#[test]
fn test_close_in_listing_is_noop() {
    let mut state = SelectionState::new();
    state.set_query("tax");
    let before = state.clone();

    state.close_record();

    assert_eq!(state, before);
}

#[test]
fn test_set_query_is_verbatim_and_clear_empties() {
    let mut state = SelectionState::new();

    state.set_query("  Tax  ");
    assert_eq!(state.query().as_str(), "  Tax  ");
    assert!(state.has_query());

    state.clear_query();
    assert_eq!(state.query().as_str(), "");
    assert!(!state.has_query());
}

#[test]
fn test_select_all_categories() {
    let catalog = make_catalog();
    let mut state = SelectionState::new();
    let a = CategoryId::from("A");

    state.select_category(Some(a.clone()));
    assert!(state.is_active(Some(&a)));
    assert!(!state.is_active(None));
    assert_eq!(state.visible(&catalog).len(), 2);

    state.select_category(None);
    assert!(state.is_active(None));
    assert_eq!(state.visible(&catalog).len(), 3);
}
