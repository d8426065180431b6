use rudo_core::db::{open_db, open_db_in_memory};
use rudo_core::{ListName, ListRepository, SqliteListRepository};

fn name(raw: &str) -> ListName {
    ListName::parse(raw).unwrap()
}

#[test]
fn open_db_in_memory_bootstraps_pragmas() {
    let conn = open_db_in_memory().unwrap();

    let foreign_keys: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(foreign_keys, 1);
}

#[test]
fn tasks_survive_reopening_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");

    let groceries = name("groceries");
    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteListRepository::new(&conn);
        repo.create_list(&groceries).unwrap();
        repo.add_task(&groceries, "buy milk").unwrap();
        repo.add_task(&groceries, "buy eggs").unwrap();
        repo.complete_task(&groceries, 1).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteListRepository::new(&conn);

    let tasks = repo.fetch_tasks(&groceries).unwrap();
    let shape: Vec<_> = tasks
        .iter()
        .map(|t| (t.id, t.text.as_str(), t.completed))
        .collect();
    assert_eq!(shape, vec![(1, "buy milk", true), (2, "buy eggs", false)]);
}

#[test]
fn id_sequence_survives_restart_even_after_deletions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");

    let chores = name("chores");
    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteListRepository::new(&conn);
        repo.create_list(&chores).unwrap();
        repo.add_task(&chores, "sweep").unwrap();
        repo.add_task(&chores, "mop").unwrap();
        repo.delete_task(&chores, 2).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteListRepository::new(&conn);

    assert_eq!(repo.add_task(&chores, "dust").unwrap(), 3);
}
