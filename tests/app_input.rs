mod common;

use common::{ctrl, key};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use todoflow::config::Config;
use todoflow::todos::{TodoId, VisibilityFilter};
use todoflow::ui::app::App;
use todoflow::ui::input::{handle_key, handle_paste};

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, key(KeyCode::Char(ch)));
    }
}

fn add(app: &mut App, text: &str) {
    type_text(app, text);
    handle_key(app, key(KeyCode::Enter));
}

fn make_app() -> App {
    App::new(&Config::default())
}

#[test]
fn typing_fills_input_without_dispatching() {
    let mut app = make_app();
    type_text(&mut app, "Learn Redux");
    assert_eq!(app.input().text, "Learn Redux");
    assert!(app.state().todos.is_empty());
}

#[test]
fn enter_adds_todo_and_clears_input() {
    let mut app = make_app();
    add(&mut app, "Learn Redux");

    let state = app.state();
    assert_eq!(state.todos.len(), 1);
    assert_eq!(state.todos[0].id, TodoId(0));
    assert_eq!(state.todos[0].text, "Learn Redux");
    assert!(!state.todos[0].completed);
    assert!(app.input().is_empty());
}

#[test]
fn ids_increase_per_added_todo() {
    let mut app = make_app();
    add(&mut app, "Learn Redux");
    add(&mut app, "Go Shopping");

    let ids: Vec<TodoId> = app.state().todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![TodoId(0), TodoId(1)]);
}

#[test]
fn first_id_comes_from_config() {
    let mut config = Config::default();
    config.defaults.first_id = 10;
    let mut app = App::new(&config);
    add(&mut app, "Learn Redux");
    assert_eq!(app.state().todos[0].id, TodoId(10));
}

#[test]
fn backspace_edits_input() {
    let mut app = make_app();
    type_text(&mut app, "Shopx");
    handle_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.input().text, "Shop");
}

#[test]
fn paste_drops_line_breaks() {
    let mut app = make_app();
    handle_paste(&mut app, "Walk\nthe dog".to_string());
    assert_eq!(app.input().text, "Walkthe dog");
}

#[test]
fn ctrl_t_toggles_selected_todo() {
    let mut app = make_app();
    add(&mut app, "Learn Redux");
    add(&mut app, "Go Shopping");
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, ctrl('t'));

    let state = app.state();
    assert!(!state.todos[0].completed);
    assert!(state.todos[1].completed);
}

#[test]
fn ctrl_t_does_not_type_into_input() {
    let mut app = make_app();
    handle_key(&mut app, ctrl('t'));
    assert!(app.input().is_empty());
    assert!(app.state().todos.is_empty());
}

#[test]
fn selection_is_clamped_to_visible_list() {
    let mut app = make_app();
    add(&mut app, "Learn Redux");
    add(&mut app, "Go Shopping");

    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.selected(), 0);
    for _ in 0..5 {
        handle_key(&mut app, key(KeyCode::Down));
    }
    assert_eq!(app.selected(), 1);

    // Completing the selected item and hiding completed shrinks the list
    handle_key(&mut app, ctrl('t'));
    handle_key(&mut app, key(KeyCode::F(2)));
    assert_eq!(app.selected(), 0);
    assert_eq!(app.selected_todo(), Some(TodoId(0)));
}

#[test]
fn function_keys_set_filter() {
    let mut app = make_app();
    handle_key(&mut app, key(KeyCode::F(3)));
    assert_eq!(app.state().visibility_filter, VisibilityFilter::ShowCompleted);
    handle_key(&mut app, key(KeyCode::F(2)));
    assert_eq!(app.state().visibility_filter, VisibilityFilter::ShowActive);
    handle_key(&mut app, key(KeyCode::F(1)));
    assert_eq!(app.state().visibility_filter, VisibilityFilter::ShowAll);
}

#[test]
fn visible_follows_filter() {
    let mut app = make_app();
    add(&mut app, "Learn Redux");
    add(&mut app, "Go Shopping");
    handle_key(&mut app, ctrl('t'));

    handle_key(&mut app, key(KeyCode::F(3)));
    let visible = app.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "Learn Redux");
}

#[test]
fn initial_filter_comes_from_config() {
    let mut config = Config::default();
    config.defaults.visibility_filter = VisibilityFilter::ShowActive;
    let app = App::new(&config);
    assert_eq!(app.state().visibility_filter, VisibilityFilter::ShowActive);
}

#[test]
fn escape_and_ctrl_q_quit() {
    let mut app = make_app();
    handle_key(&mut app, key(KeyCode::Esc));
    assert!(app.should_quit());

    let mut app = make_app();
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let mut app = make_app();
    let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    handle_key(&mut app, release);
    assert!(app.input().is_empty());
}

#[test]
fn dispatch_marks_screen_dirty() {
    let mut app = make_app();
    // Initial frame
    assert!(app.take_redraw());
    assert!(!app.take_redraw());

    // Store subscription fires on dispatch
    handle_key(&mut app, key(KeyCode::F(2)));
    assert!(app.take_redraw());
}

#[test]
fn app_subscribes_once() {
    let app = make_app();
    assert_eq!(app.store().subscriber_count(), 1);
}
