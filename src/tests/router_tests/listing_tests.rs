use crate::tests::utils::{body_string, get, init_test_app};

#[test]
fn commune_listing_shows_only_that_commune() {
    let app = init_test_app();

    let resp = get(&app, "/listings?category=Concepci%C3%B3n").expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Luxury properties in Concepción"));
    assert!(body.contains("Departamento Moderno Centro"));
    assert!(!body.contains("Departamento Duplex Puerto"));
    assert!(!body.contains("Villa Moderna Frente al Mar"));
}

#[test]
fn commune_without_listings_shows_empty_state() {
    let app = init_test_app();

    let body = body_string(get(&app, "/listings?category=Coronel").unwrap());
    assert!(body.contains("No properties available in Coronel right now."));
}

#[test]
fn pseudo_category_lists_everything() {
    let app = init_test_app();

    let body = body_string(get(&app, "/listings?category=developments").unwrap());
    assert!(body.contains("New Developments"));
    assert!(body.contains("10 properties"));
}

#[test]
fn missing_category_defaults_to_real_estate() {
    let app = init_test_app();

    let body = body_string(get(&app, "/listings").unwrap());
    assert!(body.contains("Luxury Real Estate"));
}

#[test]
fn free_text_category_gets_results_title() {
    let app = init_test_app();

    let body = body_string(get(&app, "/listings?category=playa").unwrap());
    assert!(body.contains("Results for &quot;playa&quot;"));
}

#[test]
fn search_filters_by_location_and_bedrooms() {
    let app = init_test_app();

    let body = body_string(get(&app, "/search?location=M%C3%A9xico&bedrooms=5").unwrap());
    assert!(body.contains("Residencia Exclusiva en Pedregal"));
    assert!(!body.contains("Eco-Villa en la Selva"));
    assert!(body.contains("1 property<"));
}

#[test]
fn unknown_type_in_search_is_ignored() {
    let app = init_test_app();

    let body = body_string(get(&app, "/search?type=castle").unwrap());
    assert!(body.contains("10 properties"));
}

#[test]
fn search_form_keeps_both_uf_bounds() {
    let app = init_test_app();

    let body = body_string(get(&app, "/search?min_uf=8500&max_uf=12500").unwrap());
    assert!(body.contains("name=\"min_uf\""));
    assert!(body.contains("value=\"8500\""));
    assert!(body.contains("value=\"12500\""));
    assert!(body.contains("3 properties"));
}
