// ==========================================
// Repository layer integration tests
// ==========================================
// Target: CRUD + secondary lookups + the auth flag against a real
// SQLite file.
// ==========================================


use vehicle_catalog::domain::{Category, Condition};
use vehicle_catalog::logging;
use vehicle_catalog::repository::{AuthStateRepository, RepositoryError, VehicleRepository};

#[test]
fn test_add_then_get_all_contains_record_once() {
    logging::init_test();

    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = VehicleRepository::new(&db_path).expect("Failed to create repo");

    let vehicle = test_helpers::test_vehicle(
        "veh001",
        "Toyota",
        Category::Car,
        Condition::New,
        "2024",
        "255000000",
    );
    repo.add(&vehicle).expect("add should succeed");

    let all = repo.get_all().expect("get_all should succeed");
    let matches: Vec<_> = all.iter().filter(|v| v.id == "veh001").collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].brand, "Toyota");
}

#[test]
fn test_add_duplicate_id_fails_with_duplicate_key() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = VehicleRepository::new(&db_path).expect("Failed to create repo");

    let vehicle = test_helpers::test_vehicle(
        "veh001",
        "Toyota",
        Category::Car,
        Condition::New,
        "2024",
        "255000000",
    );
    repo.add(&vehicle).expect("first add should succeed");

    let result = repo.add(&vehicle);
    match result {
        Err(RepositoryError::DuplicateKey(id)) => assert!(id.contains("veh001")),
        other => panic!("Expected DuplicateKey, got {:?}", other),
    }

    // The store still holds exactly one copy.
    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn test_update_preserves_id_and_created_at() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = VehicleRepository::new(&db_path).expect("Failed to create repo");

    let vehicle = test_helpers::test_vehicle(
        "veh001",
        "Toyota",
        Category::Car,
        Condition::New,
        "2024",
        "255000000",
    );
    repo.add(&vehicle).expect("add should succeed");

    let mut updated = vehicle.clone();
    updated.price = "249000000".to_string();
    updated.updated_at = "2026-01-01T00:00:00.000Z".to_string();
    repo.update(&updated).expect("update should succeed");

    let stored = repo
        .find_by_id("veh001")
        .expect("find should succeed")
        .expect("record should exist");
    assert_eq!(stored.id, vehicle.id);
    assert_eq!(stored.created_at, vehicle.created_at);
    assert_eq!(stored.price, "249000000");
    assert_ne!(stored.updated_at, vehicle.updated_at);
    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn test_delete_removes_exactly_one_and_unknown_is_noop() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = VehicleRepository::new(&db_path).expect("Failed to create repo");

    repo.add(&test_helpers::test_vehicle(
        "veh001",
        "Toyota",
        Category::Car,
        Condition::New,
        "2024",
        "255000000",
    ))
    .unwrap();
    repo.add(&test_helpers::test_vehicle(
        "veh002",
        "Honda",
        Category::Car,
        Condition::Used,
        "2020",
        "180000000",
    ))
    .unwrap();

    repo.delete_by_id("veh001").expect("delete should succeed");
    assert_eq!(repo.count().unwrap(), 1);
    assert!(repo.find_by_id("veh001").unwrap().is_none());

    // Unknown id: no error, nothing changes.
    repo.delete_by_id("no-such-id").expect("noop delete");
    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn test_clear_all_empties_the_store() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = VehicleRepository::new(&db_path).expect("Failed to create repo");

    for i in 0..5 {
        repo.add(&test_helpers::test_vehicle(
            &format!("veh{:03}", i),
            "Toyota",
            Category::Car,
            Condition::New,
            "2024",
            "255000000",
        ))
        .unwrap();
    }
    assert_eq!(repo.count().unwrap(), 5);

    repo.clear_all().expect("clear should succeed");
    assert_eq!(repo.count().unwrap(), 0);
    assert!(repo.get_all().unwrap().is_empty());
}

#[test]
fn test_secondary_lookups() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = VehicleRepository::new(&db_path).expect("Failed to create repo");

    repo.add(&test_helpers::test_vehicle(
        "veh001",
        "Toyota",
        Category::Car,
        Condition::New,
        "2024",
        "255000000",
    ))
    .unwrap();
    repo.add(&test_helpers::test_vehicle(
        "veh002",
        "Toyota",
        Category::Car,
        Condition::Used,
        "2019",
        "150000000",
    ))
    .unwrap();
    repo.add(&test_helpers::test_vehicle(
        "veh003",
        "Yamaha",
        Category::Motorcycle,
        Condition::New,
        "2023",
        "32000000",
    ))
    .unwrap();

    assert_eq!(repo.find_by_brand("Toyota").unwrap().len(), 2);
    assert_eq!(repo.find_by_category(Category::Motorcycle).unwrap().len(), 1);
    assert_eq!(repo.find_by_condition(Condition::New).unwrap().len(), 2);
    assert!(repo.find_by_brand("Suzuki").unwrap().is_empty());
}

#[test]
fn test_auth_flag_defaults_false_and_round_trips() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let auth = AuthStateRepository::new(&db_path).expect("Failed to create auth repo");

    assert!(!auth.get_authenticated().unwrap());

    auth.set_authenticated(true).unwrap();
    assert!(auth.get_authenticated().unwrap());

    auth.set_authenticated(false).unwrap();
    assert!(!auth.get_authenticated().unwrap());
}
