use crate::helpers::{json_body, spawn_app_with_database};
use serde_json::{Value, json};
use uuid::Uuid;

fn new_plant(id: &str) -> Value {
    json!({
        "id": id,
        "type": "tree",
        "species": "Acer negundo",
        "age": 15,
        "crownDiameter": 4.5,
        "height": 12.0,
        "healthStatus": "satisfactory",
        "position": [51.533562, 46.034266]
    })
}

fn find<'a>(plants: &'a Value, id: &str) -> Option<&'a Value> {
    plants["plants"]
        .as_array()
        .unwrap()
        .iter()
        .find(|plant| plant["id"] == id)
}

#[tokio::test]
#[ignore = "requires a Postgres instance at DATABASE_URL"]
async fn inserted_plant_is_listed_with_defaulted_damages() {
    let app = spawn_app_with_database().await;
    let id = Uuid::new_v4().to_string();

    let response = app.post(&json!({"type": "plant", "data": new_plant(&id)})).await;
    assert_eq!(201, response.status().as_u16());
    assert_eq!(json_body(response).await, json!({"success": true, "id": id}));

    let plants = json_body(app.get(&[]).await).await;
    let mut expected = new_plant(&id);
    expected["damages"] = json!("");
    assert_eq!(find(&plants, &id), Some(&expected));
}

#[tokio::test]
#[ignore = "requires a Postgres instance at DATABASE_URL"]
async fn listing_without_type_matches_listing_plants() {
    let app = spawn_app_with_database().await;
    let id = Uuid::new_v4().to_string();

    app.post(&json!({"type": "plant", "data": new_plant(&id)})).await;

    let default = json_body(app.get(&[]).await).await;
    let plants = json_body(app.get(&[("type", "plants")]).await).await;

    assert!(find(&default, &id).is_some());
    assert_eq!(find(&default, &id), find(&plants, &id));
}

#[tokio::test]
#[ignore = "requires a Postgres instance at DATABASE_URL"]
async fn insert_list_delete_list_round_trip() {
    let app = spawn_app_with_database().await;
    let id = Uuid::new_v4().to_string();

    let mut plant = new_plant(&id);
    plant["damages"] = json!("Dry branches");
    let response = app.post(&json!({"type": "plant", "data": plant})).await;
    assert_eq!(201, response.status().as_u16());
    assert_eq!(
        find(&json_body(app.get(&[]).await).await, &id),
        Some(&plant)
    );

    let response = app.delete(&[("id", id.as_str())]).await;
    assert_eq!(200, response.status().as_u16());
    assert_eq!(json_body(response).await, json!({"success": true}));

    assert_eq!(find(&json_body(app.get(&[]).await).await, &id), None);
}

#[tokio::test]
#[ignore = "requires a Postgres instance at DATABASE_URL"]
async fn deleting_an_unknown_plant_still_succeeds() {
    let app = spawn_app_with_database().await;
    let id = Uuid::new_v4().to_string();

    let response = app.delete(&[("id", id.as_str()), ("type", "plant")]).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(json_body(response).await, json!({"success": true}));
}

#[tokio::test]
#[ignore = "requires a Postgres instance at DATABASE_URL"]
async fn duplicate_id_is_a_server_error() {
    let app = spawn_app_with_database().await;
    let id = Uuid::new_v4().to_string();
    let body = json!({"type": "plant", "data": new_plant(&id)});

    assert_eq!(201, app.post(&body).await.status().as_u16());

    let response = app.post(&body).await;
    assert_eq!(500, response.status().as_u16());
    assert_eq!(json_body(response).await, json!({"error": "Internal server error"}));
}
