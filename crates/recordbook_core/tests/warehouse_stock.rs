use chrono::NaiveDate;
use recordbook_core::{ElectronicItem, GroceryItem, RepoError, Warehouse};

fn seeded() -> Warehouse {
    let mut warehouse = Warehouse::new();
    warehouse
        .electronics
        .add_item(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))
        .unwrap();
    warehouse
        .electronics
        .add_item(ElectronicItem::new(2, "Smartphone", 15, "Samsung", 12))
        .unwrap();
    warehouse
        .groceries
        .add_item(GroceryItem::new(
            101,
            "Rice",
            50,
            NaiveDate::from_ymd_opt(2027, 4, 1).unwrap(),
        ))
        .unwrap();
    warehouse
}

#[test]
fn duplicate_item_is_rejected() {
    let mut warehouse = seeded();

    let err = warehouse
        .electronics
        .add_item(ElectronicItem::new(1, "Duplicate Laptop", 5, "HP", 12))
        .unwrap_err();

    assert_eq!(err, RepoError::DuplicateKey("1".to_string()));
    assert_eq!(warehouse.electronics.len(), 2);
    assert_eq!(warehouse.electronics.get_item(1).unwrap().brand, "Dell");
}

#[test]
fn negative_quantity_is_rejected_and_stock_unchanged() {
    let mut warehouse = seeded();
    let before = warehouse.groceries.get_item(101).unwrap().quantity;

    let err = warehouse.groceries.update_quantity(101, -5).unwrap_err();

    assert!(matches!(err, RepoError::InvalidValue { field: "quantity", .. }));
    assert!(err.to_string().contains("Provided: -5"));
    assert_eq!(warehouse.groceries.get_item(101).unwrap().quantity, before);
}

#[test]
fn negative_quantity_is_checked_before_lookup() {
    let mut warehouse = seeded();
    let err = warehouse.groceries.update_quantity(999, -1).unwrap_err();
    assert!(matches!(err, RepoError::InvalidValue { .. }));
}

#[test]
fn update_and_increase_stock_apply_to_stored_item() {
    let mut warehouse = seeded();

    let updated = warehouse.groceries.update_quantity(101, 60).unwrap();
    assert_eq!(updated.quantity, 60);

    let increased = warehouse.electronics.increase_stock(1, 5).unwrap();
    assert_eq!(increased.quantity, 15);
    assert_eq!(warehouse.electronics.get_item(1).unwrap().quantity, 15);
}

#[test]
fn increase_below_zero_is_rejected() {
    let mut warehouse = seeded();
    let err = warehouse.electronics.increase_stock(2, -20).unwrap_err();
    assert!(matches!(err, RepoError::InvalidValue { .. }));
    assert_eq!(warehouse.electronics.get_item(2).unwrap().quantity, 15);
}

#[test]
fn remove_missing_item_is_not_found() {
    let mut warehouse = seeded();

    let err = warehouse.electronics.remove_item(999).unwrap_err();
    assert_eq!(err.to_string(), "record with ID 999 not found");

    warehouse.electronics.remove_item(2).unwrap();
    assert_eq!(warehouse.electronics.len(), 1);
    assert!(matches!(
        warehouse.electronics.get_item(2),
        Err(RepoError::NotFound(_))
    ));
}
