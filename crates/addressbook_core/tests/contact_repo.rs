use addressbook_core::db::schema::PERSON_TABLE;
use addressbook_core::{
    Confirmation, Contact, ContactRepository, ContactService, ContactValidationError, RepoError,
    SqliteContactRepository, Store,
};
use tempfile::TempDir;

fn open_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("contacts.db")).unwrap();
    (dir, store)
}

fn contact(name: &str) -> Contact {
    Contact::from_input(name, "Engineer", "Analytical", "ada@example.com", "555", "London")
}

#[test]
fn insert_creates_table_on_first_write() {
    let (_dir, store) = open_store();
    let repo = SqliteContactRepository::new(&store);
    assert!(!repo.table_exists(PERSON_TABLE).unwrap());

    let confirmation = repo.insert_contact(&contact("ada lovelace")).unwrap();

    assert_eq!(confirmation, Confirmation::Registered);
    assert!(repo.table_exists(PERSON_TABLE).unwrap());
    let stored = repo.list_contacts().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Ada Lovelace");
    assert_eq!(stored[0].company, "Analytical");
}

#[test]
fn ensure_table_is_idempotent() {
    let (_dir, store) = open_store();
    let repo = SqliteContactRepository::new(&store);

    repo.ensure_table().unwrap();
    repo.ensure_table().unwrap();
    assert!(repo.table_exists(PERSON_TABLE).unwrap());
}

#[test]
fn insert_rejects_empty_name_without_touching_the_store() {
    let (_dir, store) = open_store();
    let repo = SqliteContactRepository::new(&store);

    let err = repo.insert_contact(&contact("  ")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ContactValidationError::EmptyName)
    ));
    assert!(!repo.table_exists(PERSON_TABLE).unwrap());
}

#[test]
fn values_with_quotes_are_stored_verbatim() {
    let (_dir, store) = open_store();
    let repo = SqliteContactRepository::new(&store);

    let mut tricky = contact("o'neil");
    tricky.job = r#"says "hi"; DROP TABLE person; --"#.to_string();
    repo.insert_contact(&tricky).unwrap();

    let stored = repo.list_contacts().unwrap();
    assert_eq!(stored, vec![tricky]);
    assert_eq!(stored[0].name, "O'Neil");
}

#[test]
fn list_on_fresh_store_is_empty() {
    let (_dir, store) = open_store();
    let repo = SqliteContactRepository::new(&store);

    assert!(repo.list_contacts().unwrap().is_empty());
}

#[test]
fn list_keeps_insertion_order() {
    let (_dir, store) = open_store();
    let repo = SqliteContactRepository::new(&store);
    for name in ["zed", "ada", "mia"] {
        repo.insert_contact(&contact(name)).unwrap();
    }

    let names: Vec<String> = repo
        .list_contacts()
        .unwrap()
        .into_iter()
        .map(|contact| contact.name)
        .collect();
    assert_eq!(names, vec!["Zed", "Ada", "Mia"]);
}

#[test]
fn list_reads_null_optional_columns_as_empty() {
    let (_dir, store) = open_store();
    let repo = SqliteContactRepository::new(&store);
    repo.ensure_table().unwrap();
    store
        .execute("INSERT INTO person (name) VALUES (?1);", ["Bare"])
        .unwrap();

    let stored = repo.list_contacts().unwrap();
    assert_eq!(stored[0].name, "Bare");
    assert_eq!(stored[0].job, "");
    assert_eq!(stored[0].address, "");
}

#[test]
fn delete_by_name_removes_only_exact_matches() {
    let (_dir, store) = open_store();
    let repo = SqliteContactRepository::new(&store);
    repo.insert_contact(&contact("ada")).unwrap();
    repo.insert_contact(&contact("ada")).unwrap();
    repo.insert_contact(&contact("ada lovelace")).unwrap();

    let confirmation = repo.delete_by_name("Ada").unwrap();

    assert_eq!(confirmation, Confirmation::Deleted { rows: 2 });
    let remaining = repo.list_contacts().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Ada Lovelace");
}

#[test]
fn delete_on_fresh_store_affects_nothing() {
    let (_dir, store) = open_store();
    let repo = SqliteContactRepository::new(&store);

    assert_eq!(
        repo.delete_by_name("Nobody").unwrap(),
        Confirmation::Deleted { rows: 0 }
    );
}

#[test]
fn service_search_matches_titled_substring_in_store_order() {
    let (_dir, store) = open_store();
    let service = ContactService::new(SqliteContactRepository::new(&store));
    for name in ["grace hopper", "ada lovelace", "adam smith"] {
        service.register(&contact(name)).unwrap();
    }

    let names: Vec<String> = service
        .search("ADA")
        .unwrap()
        .into_iter()
        .map(|contact| contact.name)
        .collect();
    assert_eq!(names, vec!["Ada Lovelace", "Adam Smith"]);
    assert!(service.search("turing").unwrap().is_empty());
}
