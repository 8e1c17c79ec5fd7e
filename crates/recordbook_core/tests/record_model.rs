use chrono::NaiveDate;
use recordbook_core::{ElectronicItem, GroceryItem, InventoryItem, Keyed, StockItem};

#[test]
fn inventory_item_uses_expected_wire_fields() {
    let value = serde_json::json!({
        "Id": 2,
        "Name": "Smartphone",
        "Quantity": 25,
        "DateAdded": "2026-10-18T14:03:27.512"
    });

    let item: InventoryItem = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(item.key(), 2);
    assert_eq!(item.name, "Smartphone");
    assert_eq!(serde_json::to_value(&item).unwrap(), value);
}

#[test]
fn inventory_item_rejects_missing_fields() {
    let value = serde_json::json!({ "Id": 2, "Name": "Smartphone" });
    assert!(serde_json::from_value::<InventoryItem>(value).is_err());
}

#[test]
fn stock_items_expose_quantity_through_capability() {
    fn bump<T: StockItem>(item: &mut T) {
        let next = item.quantity() + 1;
        item.set_quantity(next);
    }

    let mut laptop = ElectronicItem::new(1, "Laptop", 10, "Dell", 24);
    let mut bread = GroceryItem::new(
        103,
        "Bread",
        25,
        NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
    );
    bump(&mut laptop);
    bump(&mut bread);

    assert_eq!((laptop.key(), laptop.quantity), (1, 11));
    assert_eq!((bread.name(), bread.quantity()), ("Bread", 26));
}
