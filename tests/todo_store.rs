//! End-to-end tests driving the middleware from a small todo store.
//!
//! The store runs its own reducer, then hands every transition to the
//! middleware and adopts whatever state it returns.

use hindsight::builder::HistoryBuilder;
use hindsight::core::RestorePointError;
use hindsight::middleware::{
    ActivateRestorePoint, ControlPayload, HistoryMiddleware, QueryHistory,
    ACTIVATE_RESTORE_POINT, QUERY_HISTORY, SET_RESTORE_POINT, STEP_BACK, STEP_FORWARD,
};
use hindsight::HistoryEntry;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
struct Todo {
    id: String,
    label: String,
    done: bool,
}

#[derive(Clone, Debug, PartialEq, Default)]
struct TodoState {
    todos: Vec<Todo>,
}

struct TodoStore {
    state: TodoState,
    history: HistoryMiddleware<TodoState>,
}

impl TodoStore {
    fn new(capacity: i64) -> Self {
        Self {
            state: TodoState::default(),
            history: HistoryBuilder::new()
                .capacity(capacity)
                .build()
                .expect("default namespace is valid"),
        }
    }

    fn dispatch(&mut self, action: &str, payload: ControlPayload<TodoState>) {
        if let Some(state) = self.history.after(action, payload, &self.state) {
            self.state = state;
        }
    }

    fn add_todo(&mut self, id: &str) {
        self.state.todos.push(Todo {
            id: id.to_string(),
            label: format!("todo {id}"),
            done: false,
        });
        self.dispatch("ADD_TODO", ControlPayload::Empty);
    }

    fn remove_todo(&mut self, id: &str) {
        self.state.todos.retain(|todo| todo.id != id);
        self.dispatch("REMOVE_TODO", ControlPayload::Empty);
    }

    fn prev(&mut self) {
        self.dispatch(STEP_BACK, ControlPayload::Empty);
    }

    fn next(&mut self) {
        self.dispatch(STEP_FORWARD, ControlPayload::Empty);
    }

    fn set_restore_point(&mut self, name: &str) {
        self.dispatch(SET_RESTORE_POINT, ControlPayload::name(name));
    }

    fn activate_restore_point(&mut self, name: &str) -> Result<(), RestorePointError> {
        let outcome = Rc::new(RefCell::new(None));
        let on_ok = Rc::clone(&outcome);
        let on_err = Rc::clone(&outcome);
        let request = ActivateRestorePoint::new(name)
            .on_success(move || *on_ok.borrow_mut() = Some(Ok(())))
            .on_failure(move |error| *on_err.borrow_mut() = Some(Err(error.clone())));

        self.dispatch(ACTIVATE_RESTORE_POINT, ControlPayload::Activate(request));
        let result = outcome.borrow_mut().take();
        result.expect("activation reports exactly once")
    }

    fn history_entries(&mut self) -> Vec<HistoryEntry<TodoState>> {
        let delivered = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&delivered);
        let query = QueryHistory::new(move |entries| *sink.borrow_mut() = Some(entries));

        self.dispatch(QUERY_HISTORY, ControlPayload::Query(query));
        let entries = delivered.borrow_mut().take();
        entries.expect("query delivers exactly once")
    }

    fn todo_ids(&self) -> String {
        self.state
            .todos
            .iter()
            .map(|todo| todo.id.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[test]
fn travel_in_time() {
    let mut store = TodoStore::new(-1);

    store.add_todo("301");
    store.add_todo("302");
    assert_eq!(store.todo_ids(), "301,302");

    store.add_todo("303");
    assert_eq!(store.todo_ids(), "301,302,303");

    store.prev();
    assert_eq!(store.todo_ids(), "301,302");

    store.next();
    assert_eq!(store.todo_ids(), "301,302,303");

    store.prev();
    store.prev();
    assert_eq!(store.todo_ids(), "301");

    // Already at the first entry
    store.prev();
    assert_eq!(store.todo_ids(), "301");

    store.next();
    store.next();
    assert_eq!(store.todo_ids(), "301,302,303");

    // Already at the latest entry
    store.next();
    assert_eq!(store.todo_ids(), "301,302,303");

    // Recording in the past drops 303
    store.prev();
    store.add_todo("304");
    assert_eq!(store.todo_ids(), "301,302,304");

    store.next();
    assert_eq!(store.todo_ids(), "301,302,304");
}

#[test]
fn history_size_limits_travel() {
    let mut store = TodoStore::new(2);

    store.add_todo("301");
    store.add_todo("302");
    store.add_todo("303");
    assert_eq!(store.todo_ids(), "301,302,303");

    for _ in 0..4 {
        store.prev();
    }
    assert_eq!(store.todo_ids(), "301,302");
    assert_eq!(store.history_entries().len(), 2);
}

#[test]
fn restore_points() {
    let mut store = TodoStore::new(-1);

    store.add_todo("301");
    store.add_todo("302");
    store.set_restore_point("basics");

    store.add_todo("303");
    store.set_restore_point("evening");

    for _ in 0..2 {
        store.activate_restore_point("basics").unwrap();
        assert_eq!(store.todo_ids(), "301,302");

        store.activate_restore_point("evening").unwrap();
        assert_eq!(store.todo_ids(), "301,302,303");
    }

    store.activate_restore_point("basics").unwrap();
    store.add_todo("304");
    assert_eq!(store.todo_ids(), "301,302,304");

    // The "evening" entry was truncated by the add above
    let error = store.activate_restore_point("evening").unwrap_err();
    assert_eq!(error.to_string(), "restore point [evening] doesn't exist");
    assert_eq!(store.todo_ids(), "301,302,304");
}

#[test]
fn restore_points_with_history_restriction() {
    let mut store = TodoStore::new(3);

    store.add_todo("301");
    store.set_restore_point("First");

    store.add_todo("302");
    store.add_todo("303");
    store.set_restore_point("Third");

    store.add_todo("304");
    assert_eq!(store.todo_ids(), "301,302,303,304");

    // "First" was evicted
    assert!(store.activate_restore_point("First").is_err());
    assert_eq!(store.todo_ids(), "301,302,303,304");

    store.activate_restore_point("Third").unwrap();
    assert_eq!(store.todo_ids(), "301,302,303");
}

#[test]
fn recorded_sequence_starting_from_empty_state() {
    let mut store = TodoStore::new(-1);

    store.dispatch("INIT", ControlPayload::Empty);
    store.add_todo("301");
    store.add_todo("302");
    store.add_todo("303");

    store.prev();
    assert_eq!(store.todo_ids(), "301,302");
    store.prev();
    assert_eq!(store.todo_ids(), "301");
    store.prev();
    assert_eq!(store.todo_ids(), "");
    store.prev();
    assert_eq!(store.todo_ids(), "");

    store.next();
    store.next();
    store.next();
    assert_eq!(store.todo_ids(), "301,302,303");
}

#[test]
fn query_reports_entries_with_bookmarks() {
    let mut store = TodoStore::new(-1);

    store.add_todo("301");
    store.set_restore_point("first");
    store.add_todo("302");
    store.remove_todo("301");

    let entries = store.history_entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].bookmark.as_deref(), Some("first"));
    assert!(entries[1..].iter().all(|e| e.bookmark.is_none()));
    assert_eq!(entries[0].elapsed_ms, 0);
    assert_eq!(entries[2].snapshot.todos.len(), 1);
    assert_eq!(entries[2].snapshot.todos[0].id, "302");
    assert_eq!(entries[2].snapshot.todos[0].label, "todo 302");
    assert!(!entries[2].snapshot.todos[0].done);

    // Querying does not move the cursor
    store.prev();
    assert_eq!(store.todo_ids(), "301,302");
}

#[test]
fn bookmark_on_empty_history_is_silent() {
    let mut store = TodoStore::new(-1);

    store.set_restore_point("nothing");
    assert!(store.history_entries().is_empty());
    assert!(store.activate_restore_point("nothing").is_err());
}
