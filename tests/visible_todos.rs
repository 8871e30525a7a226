mod common;

use std::sync::Arc;

use common::todo;
use todoflow::todos::{visible_todos, Todo, TodoId, VisibilityFilter};

fn mixed() -> Vec<Arc<Todo>> {
    vec![
        todo(0, "Learn Redux", true),
        todo(1, "Go Shopping", false),
        todo(2, "Walk the dog", true),
        todo(3, "Pay bills", false),
    ]
}

fn ids(todos: &[Arc<Todo>]) -> Vec<TodoId> {
    todos.iter().map(|t| t.id).collect()
}

#[test]
fn show_all_returns_everything() {
    let todos = mixed();
    let visible = visible_todos(&todos, &VisibilityFilter::ShowAll);
    assert_eq!(visible, todos);
}

#[test]
fn show_active_keeps_incomplete_in_order() {
    let visible = visible_todos(&mixed(), &VisibilityFilter::ShowActive);
    assert_eq!(ids(&visible), vec![TodoId(1), TodoId(3)]);
}

#[test]
fn show_completed_keeps_completed_in_order() {
    let visible = visible_todos(&mixed(), &VisibilityFilter::ShowCompleted);
    assert_eq!(ids(&visible), vec![TodoId(0), TodoId(2)]);
}

#[test]
fn unknown_filter_falls_back_to_all() {
    let todos = mixed();
    let visible = visible_todos(&todos, &VisibilityFilter::Other("SHOW_STARRED".to_string()));
    assert_eq!(visible, todos);
}

#[test]
fn active_and_completed_partition_all() {
    let todos = mixed();
    let active = ids(&visible_todos(&todos, &VisibilityFilter::ShowActive));
    let completed = ids(&visible_todos(&todos, &VisibilityFilter::ShowCompleted));

    assert!(active.iter().all(|id| !completed.contains(id)));
    let mut union: Vec<TodoId> = active.into_iter().chain(completed).collect();
    union.sort();
    assert_eq!(union, ids(&todos));
}

#[test]
fn selector_shares_items_with_input() {
    let todos = mixed();
    let visible = visible_todos(&todos, &VisibilityFilter::ShowActive);
    assert!(Arc::ptr_eq(&visible[0], &todos[1]));
}

#[test]
fn empty_list_stays_empty() {
    for filter in VisibilityFilter::KNOWN {
        assert!(visible_todos(&[], &filter).is_empty());
    }
}
