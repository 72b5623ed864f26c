// candy-admin/tests/catalogue.rs
// Products, orders and users against the seeded in-process backend

use std::sync::Arc;

use candy_admin::demo::{DEMO_EMAIL, DEMO_PASSWORD};
use candy_admin::screens::Screen;
use candy_admin::validation::ProductDraft;
use candy_admin::{App, AppConfig};
use candy_client::{MemoryStore, StoreOp};
use shared::models::{OrderItemInput, OrderStatus, ProductUpdate, tables};

async fn signed_in() -> (App, Arc<MemoryStore>) {
    let mut app = App::demo(AppConfig::default()).await;
    app.start().await;
    app.sessions.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
    let store = app.demo_backend().unwrap().store.clone();
    (app, store)
}

fn taffy(price: &str) -> ProductDraft {
    ProductDraft {
        name: "Taffy".into(),
        price: price.into(),
        inventory: "50".into(),
        category: "Chewy".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_invalid_price_never_reaches_store() {
    let (app, store) = signed_in().await;
    let screen = app.products_screen();
    screen.refresh().await.unwrap();
    let inserts = store.call_count(StoreOp::Insert);

    screen.open_new().await;
    screen.set_draft(taffy("-1")).await;
    let err = screen.submit().await.unwrap_err();

    assert_eq!(err.user_message(), "Please enter a valid price");
    let form = screen.form().await.unwrap();
    assert_eq!(form.error.as_deref(), Some("Please enter a valid price"));
    assert_eq!(store.call_count(StoreOp::Insert), inserts);
    assert_eq!(screen.visible().await.len(), 5);
}

#[tokio::test]
async fn test_new_product_listed_first() {
    let (app, store) = signed_in().await;
    let screen = app.products_screen();
    screen.refresh().await.unwrap();

    screen.open_new().await;
    screen.set_draft(taffy("1.50")).await;
    let added = screen.submit().await.unwrap();
    assert_eq!(added.price, 1.5);
    assert_eq!(added.inventory, 50);
    assert!(screen.form().await.is_none());

    let listed = screen.visible().await;
    assert_eq!(listed.len(), 6);
    assert_eq!(listed[0].id, added.id);
    assert_eq!(listed[0].category, "Chewy");
    assert_eq!(store.rows(tables::PRODUCTS).await.len(), 6);
}

#[tokio::test]
async fn test_price_update_is_stored_exactly() {
    let (app, _store) = signed_in().await;
    let hook = app.products();
    hook.fetch().await.unwrap();
    let id = hook.collection().items().await[0].id.clone();

    for price in [0.01, 2.5, 99.99] {
        hook.update(&id, ProductUpdate::price(price)).await.unwrap();
        hook.fetch().await.unwrap();
        let stored = hook.collection().items().await.into_iter().find(|p| p.id == id).unwrap();
        assert_eq!(stored.price, price);
    }
}

#[tokio::test]
async fn test_failed_insert_keeps_form_open() {
    let (app, store) = signed_in().await;
    let screen = app.products_screen();
    screen.refresh().await.unwrap();
    store.fail_next(StoreOp::Insert, "insert rejected").await;

    screen.open_new().await;
    screen.set_draft(taffy("1.50")).await;
    assert!(screen.submit().await.is_err());

    assert!(screen.form().await.unwrap().error.is_some());
    assert_eq!(screen.visible().await.len(), 5);
    assert!(!screen.hook().collection().is_loading().await);
}

#[tokio::test]
async fn test_search_matches_manual_filter() {
    let (app, _store) = signed_in().await;
    let mut screen = app.products_screen();
    screen.refresh().await.unwrap();
    let all = screen.visible().await;

    for query in ["choc", "GUMMY", "candy", "", "zzz", "chocolate ", " bears"] {
        screen.set_search(query);
        let expected: Vec<String> = all
            .iter()
            .filter(|p| {
                let q = query.to_lowercase();
                p.name.to_lowercase().contains(&q) || p.category.to_lowercase().contains(&q)
            })
            .map(|p| p.id.clone())
            .collect();
        let got: Vec<String> = screen.visible().await.into_iter().map(|p| p.id).collect();
        assert_eq!(got, expected, "query {:?}", query);
    }
}

#[tokio::test]
async fn test_orders_joined_with_customers() {
    let (app, _store) = signed_in().await;
    let mut screen = app.orders_screen();
    screen.refresh().await.unwrap();

    let rows = screen.rows().await;
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| !r.customer.is_empty()));

    screen.set_search("store manager");
    let visible = screen.visible().await;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].order.order.status, OrderStatus::Shipped);
}

#[tokio::test]
async fn test_add_order_and_change_status() {
    let (app, store) = signed_in().await;
    let orders = app.orders();
    let products = app.products();
    products.fetch().await.unwrap();
    orders.fetch().await.unwrap();
    let product = products.collection().items().await[0].clone();
    let user_id = app.sessions.current_user_id().await.unwrap();

    let items = vec![OrderItemInput {
        product_id: product.id.clone(),
        quantity: 3,
        price: product.price,
    }];
    let order = orders.add_order(&user_id, items, product.price * 3.0).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(orders.collection().items().await.len(), 6);
    assert_eq!(store.rows(tables::ORDER_ITEMS).await.len(), 6);

    orders.update_status(&order.id, OrderStatus::Delivered).await.unwrap();
    let stored = orders
        .collection()
        .items()
        .await
        .into_iter()
        .find(|o| o.order.id == order.id)
        .unwrap();
    assert_eq!(stored.order.status, OrderStatus::Delivered);
    assert_eq!(stored.items.len(), 1);
}

#[tokio::test]
async fn test_users_search_by_role() {
    let (app, _store) = signed_in().await;
    let mut screen = app.users_screen();
    screen.refresh().await.unwrap();
    assert_eq!(screen.visible().await.len(), 4);

    screen.set_search("staff");
    let staff = screen.visible().await;
    assert_eq!(staff.len(), 2);
    assert!(staff.iter().all(|u| u.full_name.ends_with("Employee")));
}

#[tokio::test]
async fn test_analytics_summary_from_seed() {
    let (app, _store) = signed_in().await;
    let screen = app.analytics_screen();
    screen.refresh().await.unwrap();

    let summary = screen.summary().await;
    assert_eq!(summary.order_count, 5);
    assert!((summary.revenue - 123.44).abs() < 1e-9);
    assert_eq!(summary.items_sold, 12);
    assert_eq!(summary.customers, 4);
}

#[tokio::test]
async fn test_dashboard_totals() {
    let (app, _store) = signed_in().await;
    let screen = app.dashboard_screen();
    screen.refresh().await.unwrap();
    let ctx = app.view_context();

    let totals = screen.totals(&ctx).await;
    assert_eq!(totals.total_candies, 120 + 85 + 200 + 65 + 40);
    // Every seeded event starts in the future
    assert_eq!(totals.active_promotions, 0);
    assert_eq!(totals.users_online, 4);

    let rendered = screen.render(&ctx).await;
    assert!(rendered.contains(DEMO_EMAIL));
}
