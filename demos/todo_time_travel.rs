//! Todo Store Time Travel
//!
//! This example drives the history middleware from a tiny todo store.
//!
//! Key concepts:
//! - Recording every ordinary transition
//! - Stepping back and forward through recorded states
//! - Dropping the abandoned future when recording after time travel
//! - Named restore points and what happens when their entry is gone
//!
//! Run with: RUST_LOG=hindsight=debug cargo run --example todo_time_travel

use hindsight::builder::{BuildError, HistoryConfig};
use hindsight::middleware::{
    ActivateRestorePoint, ControlPayload, HistoryMiddleware, QueryHistory,
    ACTIVATE_RESTORE_POINT, QUERY_HISTORY, SET_RESTORE_POINT, STEP_BACK, STEP_FORWARD,
};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Default)]
struct TodoState {
    todos: Vec<u32>,
}

struct TodoStore {
    state: TodoState,
    history: HistoryMiddleware<TodoState>,
}

impl TodoStore {
    fn dispatch(&mut self, action: &str, payload: ControlPayload<TodoState>) {
        if let Some(state) = self.history.after(action, payload, &self.state) {
            self.state = state;
        }
        println!("  {action:<45} -> {:?}", self.state.todos);
    }

    fn add(&mut self, id: u32) {
        self.state.todos.push(id);
        self.dispatch("ADD_TODO", ControlPayload::Empty);
    }
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .init();

    println!("=== Todo Store Time Travel ===\n");

    let config = HistoryConfig::from_json(r#"{ "capacity": 10 }"#)?;
    let mut store = TodoStore {
        state: TodoState::default(),
        history: config.build()?,
    };

    store.dispatch("INIT", ControlPayload::Empty);
    store.add(301);
    store.dispatch(SET_RESTORE_POINT, ControlPayload::name("first"));
    store.add(302);
    store.add(303);

    println!("\nStepping back and forward:");
    store.dispatch(STEP_BACK, ControlPayload::Empty);
    store.dispatch(STEP_BACK, ControlPayload::Empty);
    store.dispatch(STEP_FORWARD, ControlPayload::Empty);

    println!("\nRecording in the past drops the future:");
    store.add(304);
    store.dispatch(STEP_FORWARD, ControlPayload::Empty);

    println!("\nRestore points:");
    let request = ActivateRestorePoint::new("first")
        .on_success(|| println!("  restored 'first'"))
        .on_failure(|error| println!("  {error}"));
    store.dispatch(ACTIVATE_RESTORE_POINT, ControlPayload::Activate(request));

    store.add(305);
    let request = ActivateRestorePoint::new("gone")
        .on_failure(|error| println!("  {error}"));
    store.dispatch(ACTIVATE_RESTORE_POINT, ControlPayload::Activate(request));

    println!("\nRecorded history:");
    let query = QueryHistory::new(|entries: Vec<hindsight::HistoryEntry<TodoState>>| {
        for (index, entry) in entries.iter().enumerate() {
            println!(
                "  #{index} +{:>4}ms {:?} {}",
                entry.elapsed_ms,
                entry.snapshot.todos,
                entry.bookmark.as_deref().unwrap_or("")
            );
        }
    });
    store.dispatch(QUERY_HISTORY, ControlPayload::Query(query));

    Ok(())
}
