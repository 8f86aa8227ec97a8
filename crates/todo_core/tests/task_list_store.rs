use std::collections::HashSet;
use todo_core::{DraftBuffers, InMemoryTaskRepository, Task, TaskId, TaskListStore};

fn titles(store: &TaskListStore) -> Vec<&str> {
    store.tasks().iter().map(Task::title).collect()
}

#[test]
fn add_trims_description_keeps_title_and_clears_drafts() {
    let mut store = TaskListStore::new();
    store.set_title_draft("My Title");
    store.set_description_draft("  Buy milk  ");

    let id = store.add_task().expect("task should be added");

    assert_eq!(store.len(), 1);
    let task = &store.tasks()[0];
    assert_eq!(task.id(), id);
    assert_eq!(task.title(), "My Title");
    assert_eq!(task.description(), "Buy milk");
    assert_eq!(store.drafts(), &DraftBuffers::default());
}

#[test]
fn add_with_blank_description_is_a_no_op() {
    let mut store = TaskListStore::new();
    store.add_task_with("Keep", "kept");
    let before = store.tasks().to_vec();

    assert_eq!(store.add_task_with("", ""), None);
    assert_eq!(store.add_task_with("X", "   "), None);
    assert_eq!(store.add_task_with("X", "\t\n"), None);

    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn add_accepts_empty_and_padded_titles_verbatim() {
    let mut store = TaskListStore::new();
    store.add_task_with("", "no title");
    store.add_task_with("  spaced  ", "padded title");

    assert_eq!(titles(&store), vec!["", "  spaced  "]);
}

#[test]
fn new_tasks_append_in_insertion_order() {
    let mut store = TaskListStore::new();
    for (title, description) in [("A", "a"), ("B", "b"), ("C", "c")] {
        store.add_task_with(title, description);
    }

    assert_eq!(titles(&store), vec!["A", "B", "C"]);
}

#[test]
fn delete_middle_task_preserves_order_and_fields() {
    let mut store = TaskListStore::new();
    let a = store.add_task_with("A", "first").unwrap();
    let b = store.add_task_with("B", "second").unwrap();
    let c = store.add_task_with("C", "third").unwrap();
    let a_before = store.task(a).cloned().unwrap();
    let c_before = store.task(c).cloned().unwrap();

    assert!(store.delete_task(b));

    assert_eq!(store.tasks(), &[a_before, c_before]);
    assert!(store.task(b).is_none());
}

#[test]
fn delete_unknown_id_leaves_list_identical() {
    let mut store = TaskListStore::new();
    store.add_task_with("A", "a");
    store.add_task_with("B", "b");
    let before = store.snapshot();

    assert!(!store.delete_task(TaskId::new_random()));

    assert_eq!(store.snapshot(), before);
}

#[test]
fn delete_twice_matches_delete_once() {
    let mut once = TaskListStore::new();
    let mut twice = TaskListStore::new();

    let id = once.add_task_with("A", "a").unwrap();
    once.add_task_with("B", "b");
    let twin = twice.add_task_with("A", "a").unwrap();
    twice.add_task_with("B", "b");

    assert!(once.delete_task(id));
    assert!(twice.delete_task(twin));
    assert!(!twice.delete_task(twin));

    let once_view: Vec<(&str, &str)> = once
        .tasks()
        .iter()
        .map(|task| (task.title(), task.description()))
        .collect();
    let twice_view: Vec<(&str, &str)> = twice
        .tasks()
        .iter()
        .map(|task| (task.title(), task.description()))
        .collect();
    assert_eq!(once_view, twice_view);
    assert_eq!(once_view, vec![("B", "b")]);
}

#[test]
fn edit_changes_only_the_matching_description() {
    let mut store = TaskListStore::new();
    let a = store.add_task_with("A", "a").unwrap();
    let b = store.add_task_with("B", "b").unwrap();
    let a_before = store.task(a).cloned().unwrap();

    assert!(store.edit_task(b, "  new text "));

    assert_eq!(store.task(a), Some(&a_before));
    let edited = store.task(b).unwrap();
    assert_eq!(edited.id(), b);
    assert_eq!(edited.title(), "B");
    assert_eq!(edited.description(), "  new text ");
    assert_eq!(store.tasks()[1].id(), b);
}

#[test]
fn edit_to_empty_is_applied() {
    let mut store = TaskListStore::new();
    let id = store.add_task_with("A", "a").unwrap();

    assert!(store.edit_task(id, ""));
    assert_eq!(store.task(id).unwrap().description(), "");
}

#[test]
fn edit_unknown_id_is_a_no_op() {
    let mut store = TaskListStore::new();
    store.add_task_with("A", "a");
    let before = store.snapshot();

    assert!(!store.edit_task(TaskId::new_random(), "changed"));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn edit_after_delete_is_a_no_op() {
    let mut store = TaskListStore::new();
    let id = store.add_task_with("A", "a").unwrap();
    store.delete_task(id);

    assert!(!store.edit_task(id, "ghost"));
    assert!(store.is_empty());
}

#[test]
fn colliding_ids_are_redrawn() {
    let shared = TaskId::new_random();
    let fresh = TaskId::new_random();
    let mut queue = vec![fresh, shared, shared];
    let source = move || queue.pop().unwrap_or_else(TaskId::new_random);
    let mut store = TaskListStore::with_parts(InMemoryTaskRepository::new(), source);

    let first = store.add_task_with("A", "a").unwrap();
    let second = store.add_task_with("B", "b").unwrap();

    assert_eq!(first, shared);
    assert_eq!(second, fresh);
}

#[test]
fn deleted_ids_are_never_reissued() {
    let reused = TaskId::new_random();
    let mut queue = vec![reused, reused];
    let source = move || queue.pop().unwrap_or_else(TaskId::new_random);
    let mut store = TaskListStore::with_parts(InMemoryTaskRepository::new(), source);

    let first = store.add_task_with("A", "a").unwrap();
    assert_eq!(first, reused);
    store.delete_task(first);

    let second = store.add_task_with("B", "b").unwrap();
    assert_ne!(second, reused);
}

#[test]
fn many_adds_and_deletes_keep_ids_unique() {
    let mut store = TaskListStore::new();
    let mut live = Vec::new();

    for round in 0..200 {
        if let Some(id) = store.add_task_with(format!("t{round}"), format!("d{round}")) {
            live.push(id);
        }
        if round % 3 == 0 {
            let victim = live.remove(live.len() / 2);
            assert!(store.delete_task(victim));
        }
        if round % 5 == 0 {
            if let Some(&target) = live.first() {
                assert!(store.edit_task(target, ""));
            }
        }
        store.add_task_with("blank", "  ");

        let ids: HashSet<TaskId> = store.tasks().iter().map(Task::id).collect();
        assert_eq!(ids.len(), store.len());
    }

    let order: Vec<TaskId> = store.tasks().iter().map(Task::id).collect();
    assert_eq!(order, live);
}
