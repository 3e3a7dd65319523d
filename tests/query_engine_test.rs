// ==========================================
// Query engine integration tests
// ==========================================
// Target: store -> normalizer -> browser, the way the listing page
// drives it.
// ==========================================


use vehicle_catalog::config::CatalogConfig;
use vehicle_catalog::domain::{CatalogTab, Category, Condition};
use vehicle_catalog::query::FilterSet;
use vehicle_catalog::repository::VehicleRepository;
use vehicle_catalog::AppState;

fn seed_mixed_store(repo: &VehicleRepository) {
    let rows = [
        ("v1", "Toyota", Category::Car, Condition::New, "2020", "100"),
        ("v2", "Toyota", Category::Car, Condition::Used, "2019", "50"),
        (
            "v3",
            "Yamaha",
            Category::Motorcycle,
            Condition::New,
            "2021",
            "20",
        ),
    ];
    for (id, brand, category, condition, year, price) in rows {
        repo.add(&test_helpers::test_vehicle(
            id, brand, category, condition, year, price,
        ))
        .unwrap();
    }
}

#[tokio::test]
async fn test_tab_and_price_filter_then_hard_reset_on_tab_switch() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = VehicleRepository::new(&db_path).expect("Failed to create repo");
    seed_mixed_store(&repo);

    let state = AppState::new(CatalogConfig::with_db_path(db_path)).expect("Failed to init state");
    let mut browser = state.catalog_api.open_browser().await.unwrap();

    // Tab (Car, New) + price-max 150 leaves only v1.
    browser.set_filters(FilterSet {
        price_max: Some(150),
        ..FilterSet::default()
    });
    let page = browser.current_page();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "v1");

    // Switching tabs clears the price filter and shows v3.
    browser.select_tab(CatalogTab::new(Category::Motorcycle, Condition::New));
    let page = browser.current_page();
    assert!(browser.selection().filters.is_empty());
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "v3");
}

#[tokio::test]
async fn test_pagination_over_25_filtered_records() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = VehicleRepository::new(&db_path).expect("Failed to create repo");
    for i in 0..25 {
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

    let state = AppState::new(CatalogConfig::with_db_path(db_path)).expect("Failed to init state");
    let mut browser = state.catalog_api.open_browser().await.unwrap();

    let first = browser.current_page();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.total_items, 25);

    browser.goto_page(2);
    assert_eq!(browser.current_page().items.len(), 10);

    browser.goto_page(3);
    assert_eq!(browser.current_page().items.len(), 5);

    browser.goto_page(4);
    let past_end = browser.current_page();
    assert!(past_end.is_empty());
    assert_eq!(past_end.total_pages, 3);
}

#[tokio::test]
async fn test_brand_options_never_cross_vehicle_class() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = VehicleRepository::new(&db_path).expect("Failed to create repo");
    seed_mixed_store(&repo);
    // "Honda" exists only as a motorcycle here; the car tabs must not
    // offer it even though Honda is also a car brand.
    repo.add(&test_helpers::test_vehicle(
        "v4",
        "Honda",
        Category::Motorcycle,
        Condition::New,
        "2022",
        "30",
    ))
    .unwrap();

    let state = AppState::new(CatalogConfig::with_db_path(db_path)).expect("Failed to init state");
    let mut browser = state.catalog_api.open_browser().await.unwrap();

    browser.select_tab(CatalogTab::new(Category::Car, Condition::New));
    assert_eq!(browser.brand_options(), vec!["Toyota"]);

    browser.select_tab(CatalogTab::new(Category::Motorcycle, Condition::New));
    // Honda is not in the motorcycle allow-list either; only Yamaha
    // survives both the allow-list and presence checks.
    assert_eq!(browser.brand_options(), vec!["Yamaha"]);
}

#[tokio::test]
async fn test_filter_options_follow_the_active_tab() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = VehicleRepository::new(&db_path).expect("Failed to create repo");

    let mut car = test_helpers::test_vehicle(
        "v1",
        "Toyota",
        Category::Car,
        Condition::New,
        "2024",
        "255000000",
    );
    car.location = "Jakarta".to_string();
    car.transmission = "CVT".to_string();
    repo.add(&car).unwrap();

    let mut bike = test_helpers::test_vehicle(
        "v2",
        "Yamaha",
        Category::Motorcycle,
        Condition::New,
        "2023",
        "32000000",
    );
    bike.location = "Surabaya".to_string();
    bike.transmission = "Automatic".to_string();
    repo.add(&bike).unwrap();

    let state = AppState::new(CatalogConfig::with_db_path(db_path)).expect("Failed to init state");
    let mut browser = state.catalog_api.open_browser().await.unwrap();

    browser.select_tab(CatalogTab::new(Category::Car, Condition::New));
    let options = browser.filter_options();
    assert_eq!(options.locations, vec!["Jakarta"]);
    assert_eq!(options.transmissions, vec!["CVT"]);

    browser.select_tab(CatalogTab::new(Category::Motorcycle, Condition::New));
    let options = browser.filter_options();
    assert_eq!(options.locations, vec!["Surabaya"]);
    assert_eq!(options.transmissions, vec!["Automatic"]);
}
