use rudo_core::db::open_db_in_memory;
use rudo_core::{ListName, ListRepository, RepoError, SqliteListRepository};

fn name(raw: &str) -> ListName {
    ListName::parse(raw).unwrap()
}

#[test]
fn create_list_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    let groceries = name("groceries");
    repo.create_list(&groceries).unwrap();
    repo.create_list(&groceries).unwrap();

    assert_eq!(repo.list_names().unwrap(), vec![groceries.clone()]);
    assert!(repo.fetch_tasks(&groceries).unwrap().is_empty());
}

#[test]
fn recreating_a_populated_list_keeps_its_tasks() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    let errands = name("errands");
    repo.create_list(&errands).unwrap();
    repo.add_task(&errands, "post office").unwrap();
    repo.create_list(&errands).unwrap();

    let tasks = repo.fetch_tasks(&errands).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "post office");
}

#[test]
fn list_names_excludes_internal_and_foreign_tables() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    let errands = name("errands");
    repo.create_list(&errands).unwrap();
    // Forces engine-internal bookkeeping (`sqlite_sequence`) into existence.
    repo.add_task(&errands, "buy stamps").unwrap();
    conn.execute_batch("CREATE TABLE scratch (value TEXT);").unwrap();

    assert_eq!(repo.list_names().unwrap(), vec![errands]);
}

#[test]
fn list_names_are_sorted_ascending() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    for raw in ["chores", "appointments", "books"] {
        repo.create_list(&name(raw)).unwrap();
    }

    assert_eq!(
        repo.list_names().unwrap(),
        vec![name("appointments"), name("books"), name("chores")]
    );
}

#[test]
fn drop_list_reports_whether_the_list_existed() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    let ghost = name("ghost");
    assert!(!repo.drop_list(&ghost).unwrap());

    repo.create_list(&ghost).unwrap();
    assert!(repo.drop_list(&ghost).unwrap());
    assert!(repo.list_names().unwrap().is_empty());
}

#[test]
fn recreated_list_starts_empty_with_ids_from_one() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    let groceries = name("groceries");
    repo.create_list(&groceries).unwrap();
    repo.add_task(&groceries, "buy milk").unwrap();
    repo.add_task(&groceries, "buy eggs").unwrap();

    repo.drop_list(&groceries).unwrap();
    repo.create_list(&groceries).unwrap();

    assert!(repo.fetch_tasks(&groceries).unwrap().is_empty());
    assert_eq!(repo.add_task(&groceries, "buy bread").unwrap(), 1);
}

#[test]
fn task_operations_require_an_existing_list() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::new(&conn);

    let missing = name("missing");
    assert!(!repo.list_exists(&missing).unwrap());

    let add = repo.add_task(&missing, "anything").unwrap_err();
    assert!(matches!(add, RepoError::ListNotFound(ref n) if *n == missing));

    let complete = repo.complete_task(&missing, 1).unwrap_err();
    assert!(matches!(complete, RepoError::ListNotFound(_)));

    let delete = repo.delete_task(&missing, 1).unwrap_err();
    assert!(matches!(delete, RepoError::ListNotFound(_)));

    let fetch = repo.fetch_tasks(&missing).unwrap_err();
    assert!(matches!(fetch, RepoError::ListNotFound(_)));

    // Probing must not create the list as a side effect.
    assert!(repo.list_names().unwrap().is_empty());
}
