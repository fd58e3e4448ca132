use crate::domain::property::PLACEHOLDER_IMAGE_URL;
use crate::tests::utils::{app_with_ids, body_string, get, init_test_app, post_form, FixedId};

fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("title", "Casa en Lomas de San Andrés"),
        ("commune", "Concepción"),
        ("price", "14500"),
        ("currency", "UF"),
        ("type", "villa"),
        ("bedrooms", "4"),
        ("bathrooms", "3"),
        ("area", "260"),
        ("image_url", ""),
        ("description", "Amplia casa con vista a la ciudad."),
        ("owner_name", "Juan Pérez"),
        ("owner_phone", "+56 9 8765 4321"),
        ("legal_description", "Rol 123-45"),
        ("private_notes", "Llaves en conserjería"),
    ]
}

#[test]
fn admin_page_loads() {
    let app = init_test_app();

    let resp = get(&app, "/admin").expect("Handler failed");
    assert_eq!(resp.status(), 200, "Admin page should load");

    let body = body_string(resp);
    assert!(body.contains("New property"));
    assert!(body.contains("Catalog (10)"));
}

#[test]
fn admin_can_publish_a_property() {
    let app = init_test_app();

    let resp = post_form(&app, "/admin/properties", &valid_form()).expect("Handler failed");
    assert_eq!(resp.status(), 303, "Should redirect after publishing");
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/properties/test-1"
    );

    let stored = app.catalog.get("test-1").expect("property stored");
    assert_eq!(stored.location, "Concepción, Chile");
    assert_eq!(stored.image_url, PLACEHOLDER_IMAGE_URL);
    assert_eq!(stored.private_data.unwrap().owner_name, "Juan Pérez");

    // appended after the seed
    let all = app.catalog.all();
    assert_eq!(all.len(), 11);
    assert_eq!(all.last().unwrap().id, "test-1");

    // shows up in the commune listing
    let listing = body_string(get(&app, "/listings?category=Concepci%C3%B3n").unwrap());
    assert!(listing.contains("Casa en Lomas de San Andrés"));
}

#[test]
fn private_data_stays_off_public_pages() {
    let app = init_test_app();
    post_form(&app, "/admin/properties", &valid_form()).unwrap();

    let detail = body_string(get(&app, "/properties/test-1").unwrap());
    assert!(detail.contains("Casa en Lomas de San Andrés"));
    assert!(!detail.contains("Juan Pérez"));
    assert!(!detail.contains("Llaves en conserjería"));

    let api = body_string(get(&app, "/api/properties").unwrap());
    assert!(api.contains("test-1"));
    assert!(!api.contains("Juan Pérez"));

    let admin = body_string(get(&app, "/admin").unwrap());
    assert!(admin.contains("Juan Pérez"));
}

#[test]
fn invalid_form_is_rejected_with_message() {
    let app = init_test_app();

    let mut form = valid_form();
    form.retain(|(k, _)| *k != "title");

    let resp = post_form(&app, "/admin/properties", &form).expect("Handler failed");
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("Title is required"));
    // the rest of the submission is kept in the form
    assert!(body.contains("Amplia casa con vista a la ciudad."));
    assert_eq!(app.catalog.len(), 10);
}

#[test]
fn id_collision_asks_for_resubmission_and_keeps_catalog() {
    let app = app_with_ids(Box::new(FixedId("cl-1")));
    let before = app.catalog.all();

    let resp = post_form(&app, "/admin/properties", &valid_form()).expect("Handler failed");
    assert_eq!(resp.status(), 409);

    let body = body_string(resp);
    assert!(body.contains("Please submit the form again."));
    assert_eq!(app.catalog.all(), before);
}

#[test]
fn admin_export_is_a_spreadsheet() {
    let app = init_test_app();

    let resp = get(&app, "/admin/export.xlsx").expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"catalog_"));
}
