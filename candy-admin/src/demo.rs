//! In-process demo backend
//!
//! Seeds a [`MemoryStore`] with the sample catalogue, orders, staff,
//! event calendar and templates, and registers the demo account.

use candy_client::{ClientError, ClientResult, MemoryIdentity, MemoryStore, Tables};
use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};
use shared::models::{rpc, tables};
use uuid::Uuid;

pub const DEMO_EMAIL: &str = "admin@example.com";
pub const DEMO_PASSWORD: &str = "candy-admin";

/// Owner of the shared template rows; never a signed-in user
const TEMPLATE_OWNER: &str = "00000000-0000-0000-0000-000000000000";

fn id() -> String {
    Uuid::new_v4().to_string()
}

fn ts(at: DateTime<Utc>) -> String {
    at.to_rfc3339()
}

/// Register the demo account and fill every table; returns the demo user id
pub async fn seed(store: &MemoryStore, identity: &MemoryIdentity, now: DateTime<Utc>) -> String {
    let admin = identity.register(DEMO_EMAIL, DEMO_PASSWORD).await;
    let admin_id = admin.id;
    let manager_id = id();
    let staff_ids = [id(), id()];

    let products = products(now);
    let catalogue: Vec<(String, f64)> = products
        .iter()
        .filter_map(|p| Some((p["id"].as_str()?.to_string(), p["price"].as_f64()?)))
        .collect();
    store.seed(tables::PRODUCTS, products).await;

    let profiles = vec![
        profile(&admin_id, "Admin User", DEMO_EMAIL, "admin", Some(now - Duration::minutes(5))),
        profile(&manager_id, "Store Manager", "manager@example.com", "manager", Some(now - Duration::hours(3))),
        profile(&staff_ids[0], "John Employee", "employee1@example.com", "staff", Some(now - Duration::days(1))),
        profile(&staff_ids[1], "Jane Employee", "employee2@example.com", "staff", None),
    ];
    store.seed(tables::USER_PROFILES, profiles).await;

    let customers = [&admin_id, &manager_id, &staff_ids[0], &staff_ids[1], &admin_id];
    let (orders, items) = orders(now, customers, &catalogue);
    store.seed(tables::ORDERS, orders).await;
    store.seed(tables::ORDER_ITEMS, items).await;

    let events = events(now);
    let event_ids: Vec<String> = events
        .iter()
        .filter_map(|e| e["id"].as_str().map(str::to_string))
        .collect();
    store.seed(tables::TEMPLATE_EVENTS, events).await;
    store.seed(tables::GENERATED_CONTENT, templates(now, &event_ids)).await;

    store
        .register_rpc(rpc::CLONE_TEMPLATE_FOR_EVENT, clone_template_for_event)
        .await;

    tracing::info!(user_id = %admin_id, "Demo data seeded");
    admin_id
}

fn products(now: DateTime<Utc>) -> Vec<Value> {
    let catalogue = [
        ("Chocolate Bar", "Rich milk chocolate bar", 2.99, 120, "Chocolate"),
        ("Gummy Bears", "Assorted fruit gummy bears", 3.49, 85, "Gummies"),
        ("Lollipops", "Swirled rainbow lollipops", 1.25, 200, "Hard Candy"),
        ("Sour Strips", "Tangy sour candy strips", 2.75, 65, "Sour Candy"),
        ("Mint Chocolates", "Dark chocolate with mint filling", 4.99, 40, "Chocolate"),
    ];
    catalogue
        .iter()
        .enumerate()
        .map(|(i, (name, description, price, inventory, category))| {
            json!({
                "id": id(),
                "created_at": ts(now - Duration::days(30 - i as i64)),
                "name": name,
                "description": description,
                "price": price,
                "inventory": inventory,
                "image_url": "",
                "category": category,
            })
        })
        .collect()
}

fn profile(user_id: &str, name: &str, email: &str, role: &str, last_login: Option<DateTime<Utc>>) -> Value {
    json!({
        "id": id(),
        "user_id": user_id,
        "full_name": name,
        "email": email,
        "avatar_url": null,
        "role": role,
        "last_login": last_login.map(ts),
    })
}

fn orders(now: DateTime<Utc>, customers: [&String; 5], catalogue: &[(String, f64)]) -> (Vec<Value>, Vec<Value>) {
    let sample = [(24.99, "pending", 2), (47.50, "shipped", 5), (12.75, "delivered", 1), (38.20, "processing", 4), (19.99, "cancelled", 2)];
    let mut orders = Vec::new();
    let mut items = Vec::new();
    for (i, ((total, status, quantity), customer)) in sample.iter().zip(customers).enumerate() {
        let order_id = id();
        orders.push(json!({
            "id": order_id,
            "created_at": ts(now - Duration::hours(6 * (i as i64 + 1))),
            "user_id": customer,
            "status": status,
            "total": total,
        }));
        if let Some((product_id, price)) = catalogue.get(i % catalogue.len().max(1)) {
            items.push(json!({
                "id": id(),
                "order_id": order_id,
                "product_id": product_id,
                "quantity": quantity,
                "price": price,
            }));
        }
    }
    (orders, items)
}

fn events(now: DateTime<Utc>) -> Vec<Value> {
    let calendar = [
        ("Summer Sweets Festival", "Seasonal promotion for summer treats", 5, 14, "seasonal", vec!["US", "CA"]),
        ("Ramadan", "Evening gatherings and sweet gifts", 20, 30, "cultural", vec!["SA", "AE", "EG"]),
        ("Hanukkah", "Festival of lights", 45, 8, "holiday", vec!["IL", "US"]),
    ];
    calendar
        .into_iter()
        .map(|(name, description, starts_in, days, kind, regions)| {
            let start = now + Duration::days(starts_in);
            json!({
                "id": id(),
                "name": name,
                "description": description,
                "start_date": ts(start),
                "end_date": ts(start + Duration::days(days)),
                "regions": regions,
                "type": kind,
                "metadata": {},
            })
        })
        .collect()
}

fn templates(now: DateTime<Utc>, event_ids: &[String]) -> Vec<Value> {
    let reusable = [
        ("Weekend Treat", "Treat yourself this weekend! 20% off all chocolates.", "social", "en", 0.92, 14, 4.6),
        ("Flash Sale", "Flash sale! Gummies buy one get one free until midnight.", "whatsapp", "en", 0.81, 9, 4.2),
        ("Newsletter", "Subject: This month's sweetest picks\n\nDear Candy Lover,\n\nHere is what is new in store.", "email", "en", 0.75, 5, 4.0),
        ("ليالي رمضان", "حلويات رمضان بخصم ٢٠٪ على جميع التشكيلات", "social", "ar", 0.88, 11, 4.5),
        ("Ханука", "Сладкие подарки к празднику со скидкой 15%", "social", "ru", 0.7, 3, 3.9),
    ];
    let mut rows: Vec<Value> = reusable
        .iter()
        .map(|(name, content, kind, language, score, usage, rating)| {
            json!({
                "id": id(),
                "user_id": TEMPLATE_OWNER,
                "prompt": name,
                "content": content,
                "type": kind,
                "status": "published",
                "created_at": ts(now - Duration::days(60)),
                "is_template": true,
                "template_name": name,
                "template_category": "general",
                "suggestion_score": score,
                "usage_count": usage,
                "average_rating": rating,
                "language": language,
                "region": null,
            })
        })
        .collect();

    for (i, event_id) in event_ids.iter().enumerate() {
        rows.push(json!({
            "id": id(),
            "user_id": TEMPLATE_OWNER,
            "prompt": "event template",
            "content": "Celebrate {{event}} with {{discount}} off selected sweets!",
            "type": "social",
            "status": "published",
            "created_at": ts(now - Duration::days(30)),
            "is_template": true,
            "template_name": format!("Event Special #{}", i + 1),
            "event_id": event_id,
            "event_performance": {
                "impressions": 1200 * (i as u64 + 1),
                "engagement": 180 * (i as u64 + 1),
                "conversions": 24 * (i as u64 + 1),
                "revenue": 310.5 * (i as f64 + 1.0),
            },
            "suggestion_score": 0.9 - 0.1 * i as f64,
            "language": "en",
        }));
    }
    rows
}

/// Copy a template row onto another event, filling `{{key}}` from the context
pub fn clone_template_for_event(data: &mut Tables, params: Value) -> ClientResult<Value> {
    let field = |name: &str| {
        params[name]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ClientError::Validation(format!("missing parameter {}", name)))
    };
    let template_id = field("template_id")?;
    let event_id = field("event_id")?;

    let rows = data.entry(tables::GENERATED_CONTENT.to_string()).or_default();
    let source = rows
        .iter()
        .find(|row| row["id"].as_str() == Some(template_id.as_str()))
        .cloned()
        .ok_or_else(|| ClientError::Api {
            code: "P0002".to_string(),
            message: "Template not found".to_string(),
            details: None,
        })?;

    let mut content = source["content"].as_str().unwrap_or_default().to_string();
    if let Some(context) = params["new_context"].as_object() {
        for (key, value) in context {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            content = content.replace(&format!("{{{{{}}}}}", key), &text);
        }
    }

    let mut clone = source;
    let fields = clone
        .as_object_mut()
        .ok_or_else(|| ClientError::InvalidResponse("template row is not an object".to_string()))?;
    fields.insert("id".into(), json!(id()));
    fields.insert("event_id".into(), json!(event_id));
    fields.insert("content".into(), json!(content));
    fields.insert("created_at".into(), json!(ts(Utc::now())));
    fields.insert("event_performance".into(), json!({}));
    rows.push(clone.clone());
    Ok(clone)
}
