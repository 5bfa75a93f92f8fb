//! Tests of the authoritative task collection on its own


use chrono::{Duration, NaiveDate};

use week_planner::{PlannerError, TaskStore};
use scenarii::{a_wednesday, remote};

fn some_date() -> NaiveDate {
    a_wednesday()
}

#[test]
fn empty_remote_list_seeds_the_sample_set() {
    let _ = env_logger::builder().is_test(true).try_init();
    let today = a_wednesday();

    let mut store = TaskStore::new();
    store.reconcile(Vec::new(), today);

    assert_eq!(store.len(), 3);
    let tasks = store.tasks();

    assert_eq!(tasks[0].due_date(), today);
    assert_eq!(tasks[1].due_date(), today + Duration::days(1));
    // The coming Friday, two days after this Wednesday
    assert_eq!(tasks[2].due_date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

    assert_eq!(tasks[0].done(), false);
    assert_eq!(tasks[1].done(), false);
    assert_eq!(tasks[2].done(), true);

    assert_eq!(tasks[0].title(), "Finish Wireframes");
    assert_eq!(tasks[1].title(), "Prepare API Endpoints");
    assert_eq!(tasks[2].title(), "Team Review – Calendar Flow");
}

#[test]
fn reconcile_assigns_today_to_every_record() {
    let today = some_date();

    let mut store = TaskStore::new();
    store.reconcile(vec![
        remote("Answer emails", "Work", false),
        remote("Buy milk", "Errands", true),
    ], today);

    assert_eq!(store.len(), 2);
    for task in store.tasks() {
        assert_eq!(task.due_date(), today);
    }
    assert_eq!(store.tasks()[0].title(), "Answer emails");
    assert_eq!(store.tasks()[1].done(), true);
}

#[test]
fn reconcile_replaces_previous_contents() {
    let today = some_date();

    let mut store = TaskStore::new();
    let local = store.add("Added before the load finished", "Local", today).unwrap();

    store.reconcile(vec![remote("From the server", "Remote", false)], today);

    // The replacement is wholesale: the locally added task did not survive
    assert_eq!(store.len(), 1);
    assert!(store.get(&local).is_none());
    assert_eq!(store.tasks()[0].title(), "From the server");
}

#[test]
fn reconcile_invalidates_a_pending_undo() {
    let today = some_date();

    let mut store = TaskStore::new();
    let id = store.add("Doomed", "x", today).unwrap();
    let handle = store.delete(&id).unwrap();

    store.reconcile(Vec::new(), today);

    assert_eq!(store.restore(&handle), Err(PlannerError::TaskNotFound));
}

#[test]
fn add_rejects_a_blank_title() {
    let today = some_date();
    let mut store = TaskStore::new();

    assert_eq!(store.add("", "x", today), Err(PlannerError::TitleRequired));
    assert_eq!(store.add("   \t ", "x", today), Err(PlannerError::TitleRequired));
    assert!(store.is_empty());

    // Rejections come with a user-displayable, non-blank message
    assert_eq!(PlannerError::TitleRequired.to_string(), "Title required");
}

#[test]
fn add_trims_the_title_and_defaults_a_blank_tag() {
    let today = some_date();
    let mut store = TaskStore::new();

    let id = store.add("  Buy milk  ", "   ", today).unwrap();
    let task = store.get(&id).unwrap();

    assert_eq!(task.title(), "Buy milk");
    assert_eq!(task.tag(), "No tag");
    assert_eq!(task.done(), false);
    assert_eq!(task.due_date(), today);
}

#[test]
fn value_identical_tasks_stay_independently_addressable() {
    let today = some_date();
    let mut store = TaskStore::new();

    let first = store.add("Twin", "Same", today).unwrap();
    let second = store.add("Twin", "Same", today).unwrap();
    assert_ne!(first, second);

    // Toggling one twin must not touch the other
    store.toggle(&second).unwrap();
    assert_eq!(store.get(&first).unwrap().done(), false);
    assert_eq!(store.get(&second).unwrap().done(), true);
}

#[test]
fn toggling_twice_round_trips() {
    let today = some_date();
    let mut store = TaskStore::new();
    let id = store.add("Flip me", "x", today).unwrap();

    assert_eq!(store.toggle(&id), Ok(true));
    assert_eq!(store.toggle(&id), Ok(false));
    assert_eq!(store.get(&id).unwrap().done(), false);
}

#[test]
fn toggling_a_deleted_task_reports_not_found() {
    let today = some_date();
    let mut store = TaskStore::new();
    let id = store.add("Short-lived", "x", today).unwrap();
    store.delete(&id).unwrap();

    assert_eq!(store.toggle(&id), Err(PlannerError::TaskNotFound));
    assert!(store.is_empty());
}

#[test]
fn restore_appends_to_the_end() {
    let today = some_date();
    let mut store = TaskStore::new();
    let t1 = store.add("First", "x", today).unwrap();
    let t2 = store.add("Second", "x", today).unwrap();
    let t3 = store.add("Third", "x", today).unwrap();

    let handle = store.delete(&t1).unwrap();
    assert_eq!(handle.position(), 0);
    assert_eq!(handle.task().title(), "First");

    store.restore(&handle).unwrap();

    // Back as a member and visible under its due date, but at the end of the collection
    let titles: Vec<String> = store.tasks_for_date(today).iter()
        .map(|task| task.title().to_string())
        .collect();
    assert_eq!(titles, vec!["Second", "Third", "First"]);
    assert!(store.get(&t1).is_some());
    assert!(store.get(&t2).is_some());
    assert!(store.get(&t3).is_some());
}

#[test]
fn undo_only_covers_the_most_recent_delete() {
    let today = some_date();
    let mut store = TaskStore::new();
    let t1 = store.add("First victim", "x", today).unwrap();
    let t2 = store.add("Second victim", "x", today).unwrap();

    let h1 = store.delete(&t1).unwrap();
    let h2 = store.delete(&t2).unwrap();

    // The second delete superseded the first handle: t1 is gone for good
    assert_eq!(store.restore(&h1), Err(PlannerError::TaskNotFound));
    assert!(store.get(&t1).is_none());

    // The most recent deletion is still undoable
    assert_eq!(store.restore(&h2), Ok(t2));
    assert!(store.get(&t2).is_some());
}

#[test]
fn a_handle_cannot_be_redeemed_twice() {
    let today = some_date();
    let mut store = TaskStore::new();
    let id = store.add("Once only", "x", today).unwrap();

    let handle = store.delete(&id).unwrap();
    assert_eq!(store.restore(&handle), Ok(id));
    assert_eq!(store.restore(&handle), Err(PlannerError::TaskNotFound));
    assert_eq!(store.len(), 1);
}

#[test]
fn deleting_an_unknown_task_reports_not_found() {
    let today = some_date();
    let mut store = TaskStore::new();
    let id = store.add("Here", "x", today).unwrap();
    store.delete(&id).unwrap();

    assert!(store.delete(&id).is_err());
}

#[test]
fn tasks_for_date_filters_in_insertion_order() {
    let today = some_date();
    let tomorrow = today + Duration::days(1);
    let mut store = TaskStore::new();

    store.add("A", "x", today).unwrap();
    store.add("B", "x", tomorrow).unwrap();
    store.add("C", "x", today).unwrap();

    let visible = store.tasks_for_date(today);
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].title(), "A");
    assert_eq!(visible[1].title(), "C");

    assert!(store.tasks_for_date(today + Duration::days(10)).is_empty());
}
