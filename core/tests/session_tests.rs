use std::sync::Arc;
use tender_core::{Catalog, Category, Session, SessionConfig, SessionError};

fn session() -> Session {
    Session::new(Arc::new(Catalog::seeded()), SessionConfig::default())
}

#[test]
fn search_exposes_at_most_top_n() {
    let mut s = session();
    let results = s.search("fried rice").unwrap();
    assert_eq!(results.category, Category::GeneralFood);
    assert_eq!(results.total_candidates, 6);
    assert_eq!(results.results.len(), 6);

    let mut small = Session::new(Arc::new(Catalog::seeded()), SessionConfig { top_n: 2, ..SessionConfig::default() });
    let results = small.search("fried rice").unwrap();
    assert_eq!(results.total_candidates, 6);
    assert_eq!(results.results.len(), 2);
}

#[test]
fn electronics_has_no_offers() {
    let mut s = session();
    let results = s.search("phone charger").unwrap();
    assert_eq!(results.category, Category::Electronics);
    assert!(results.results.is_empty());
}

#[test]
fn same_query_twice_gives_same_ranking() {
    let mut s = session();
    let a = s.search("sweet jumbo drink").unwrap();
    let b = s.search("sweet jumbo drink").unwrap();
    assert_ne!(a.tender_id, b.tender_id);
    assert_eq!(a.results, b.results);
}

#[test]
fn adding_twice_merges_into_one_line() {
    let mut s = session();
    // 12000
    s.add_to_cart("Complete Mixed Rice", 1).unwrap();
    let cart = s.add_to_cart("Complete Mixed Rice", 2).unwrap();
    assert_eq!(cart.count, 1);
    assert_eq!(cart.lines[0].quantity, 3);
    assert_eq!(cart.lines[0].total, 36_000);
    assert_eq!(cart.total, 36_000);
}

#[test]
fn cart_total_is_sum_of_lines() {
    let mut s = session();
    s.add_to_cart("Fresh Fruit Ice", 4).unwrap();
    s.add_to_cart("Premium Rendang Set", 1).unwrap();
    let cart = s.add_to_cart("Jumbo Sweet Iced Tea", 3).unwrap();
    let expected: u64 = cart.lines.iter().map(|l| u64::from(l.unit_price) * u64::from(l.quantity)).sum();
    assert_eq!(cart.total, expected);
    assert_eq!(cart.total, 4 * 8_000 + 30_000 + 3 * 5_000);
    assert_eq!(cart.units, 8);
}

#[test]
fn checkout_on_empty_cart_is_rejected() {
    let mut s = session();
    assert_eq!(s.checkout(), Err(SessionError::EmptyCart));
    assert_eq!(s.cart().count, 0);
}

#[test]
fn checkout_clears_cart() {
    let mut s = session();
    s.add_to_cart("Palm Sugar Milk Coffee", 2).unwrap();
    s.add_to_cart("Brown Sugar Boba Milk", 1).unwrap();
    let receipt = s.checkout().unwrap();
    assert_eq!(receipt.total, 2 * 12_000 + 20_000);
    assert_eq!(receipt.item_count, 2);
    assert_eq!(receipt.units, 3);
    assert_eq!(s.cart().count, 0);
    assert_eq!(s.checkout(), Err(SessionError::EmptyCart));
}

#[test]
fn remove_at_len_changes_nothing() {
    let mut s = session();
    s.add_to_cart("Fresh Fruit Ice", 1).unwrap();
    let before = s.add_to_cart("Special Fried Rice", 1).unwrap();
    let after = s.remove_from_cart(before.count);
    assert_eq!(before, after);

    let after = s.remove_from_cart(0);
    assert_eq!(after.count, 1);
    assert_eq!(after.lines[0].item, "Special Fried Rice");
}

#[test]
fn view_models_serialize_with_kebab_categories() {
    let mut s = session();
    let results = s.search("quick rendang").unwrap();
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json["category"], "padang-food");
    assert_eq!(json["criteria"]["fastest"], true);
    assert_eq!(json["results"][0]["product"]["portion"], "normal");
    assert_eq!(json["results"][0]["product"]["delivery"]["kind"], "free");

    let receipt = s.buy_now("Padang Rendang Rice").unwrap();
    let json = serde_json::to_value(&receipt).unwrap();
    assert_eq!(json["delivery"], serde_json::json!({ "kind": "flat", "amount": 5000 }));
}

#[test]
fn oversized_merge_is_rejected_and_cart_kept() {
    let mut s = session();
    let before = s.add_to_cart("Fresh Fruit Ice", u32::MAX).unwrap();
    assert_eq!(before.lines[0].quantity, u32::MAX);
    assert_eq!(before.total, u64::from(u32::MAX) * 8_000);

    assert_eq!(s.add_to_cart("Fresh Fruit Ice", u32::MAX), Err(SessionError::InvalidQuantity));
    assert_eq!(s.add_to_cart("Fresh Fruit Ice", 1), Err(SessionError::InvalidQuantity));
    assert_eq!(s.cart(), before);

    // other items still go in
    let after = s.add_to_cart("Jumbo Sweet Iced Tea", 2).unwrap();
    assert_eq!(after.count, 2);
    assert_eq!(after.total, before.total + 10_000);
}
