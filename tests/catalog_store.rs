mod common;

use common::product;
use fitloom_core::catalog::CatalogStore;
use fitloom_core::model::{FashionStyle, ProductDraft};

fn store() -> CatalogStore {
    common::init_tracing();
    CatalogStore::new(vec![
        product("p1", 100, FashionStyle::Casual),
        product("p2", 250, FashionStyle::Party),
    ])
}

#[test]
fn create_prepends_and_fills_defaults() {
    let mut store = store();
    let created = store.create_product(ProductDraft::default(), "时尚体验官");
    assert_eq!(store.products().len(), 3);
    assert_eq!(store.products()[0], created);
    assert_eq!(created.title, "新商品");
    assert_eq!(created.price, 0);
    assert_eq!(created.sales, Some(0));
    assert_eq!(created.store_name.as_deref(), Some("时尚体验官的店"));
}

#[test]
fn created_ids_are_unique_and_increasing() {
    let mut store = store();
    let a = store.create_product(ProductDraft::default(), "owner");
    let b = store.create_product(ProductDraft::default(), "owner");
    let c = store.create_product(ProductDraft::default(), "owner");
    let parse = |p: &fitloom_core::model::Product| p.id.parse::<i64>().unwrap();
    assert!(parse(&a) < parse(&b));
    assert!(parse(&b) < parse(&c));
}

#[test]
fn toggle_inserts_at_front_then_removes() {
    let mut store = store();
    let p1 = store.products()[0].clone();
    let p2 = store.products()[1].clone();

    store.toggle_favorite(&p2);
    store.toggle_favorite(&p1);
    let ids: Vec<_> = store.favorites().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, ["p1", "p2"]);

    // Toggling the same product twice restores the prior list exactly.
    store.toggle_favorite(&p1);
    store.toggle_favorite(&p1);
    let ids: Vec<_> = store.favorites().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, ["p1", "p2"]);
}

#[test]
fn update_propagates_into_favorites() {
    let mut store = store();
    let mut p1 = store.products()[0].clone();
    store.toggle_favorite(&p1);

    p1.price = 150;
    store.update_product(p1.clone());

    assert_eq!(store.get("p1").unwrap().price, 150);
    let favorite = store.favorites().iter().find(|p| p.id == "p1").unwrap();
    assert_eq!(favorite, &p1);
}

#[test]
fn delete_cascades_into_favorites() {
    let mut store = store();
    let p2 = store.products()[1].clone();
    store.toggle_favorite(&p2);

    store.delete_product("p2");

    assert!(store.get("p2").is_none());
    assert!(store.favorites().iter().all(|p| p.id != "p2"));
}

#[test]
fn unknown_id_update_and_delete_are_no_ops() {
    let mut store = store();
    let before: Vec<_> = store.products().to_vec();

    store.update_product(product("ghost", 1, FashionStyle::Sport));
    store.delete_product("ghost");

    assert_eq!(store.products(), &before[..]);
    assert!(store.favorites().is_empty());
}

#[test]
fn toggle_of_uncataloged_product_is_refused() {
    let mut store = store();
    store.toggle_favorite(&product("ghost", 1, FashionStyle::Sport));
    assert!(store.favorites().is_empty());
}

#[test]
fn favorites_always_subset_of_catalog() {
    let mut store = store();
    let p1 = store.products()[0].clone();
    let p2 = store.products()[1].clone();

    store.toggle_favorite(&p1);
    store.toggle_favorite(&p2);
    let created = store.create_product(ProductDraft::default(), "owner");
    store.toggle_favorite(&created);
    store.delete_product("p1");
    store.delete_product(&created.id);
    store.update_product(product("p2", 999, FashionStyle::Party));

    for favorite in store.favorites() {
        let current = store.get(&favorite.id).expect("favorite must exist in catalog");
        assert_eq!(current, favorite);
    }
}
