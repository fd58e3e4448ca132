use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, init_test_app};

#[test]
fn home_page_lists_seed_properties() {
    let app = init_test_app();

    let resp = get(&app, "/").expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Featured properties"));
    assert!(body.contains("Villa Moderna Frente al Mar"));
    assert!(body.contains("Departamento Duplex Puerto"));
    assert!(body.contains("/listings?category=Chiguayante"));
    assert!(body.contains("/listings?category=San+Pedro+de+la+Paz"));
    assert!(body.contains("/listings?category=Los+%C3%81ngeles"));
    assert!(!body.contains("category=Los Ángeles"));
}

#[test]
fn property_page_shows_both_prices() {
    let app = init_test_app();

    let resp = get(&app, "/properties/cl-1").expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Casa Estilo Georgiano en Lonco Parque"));
    assert!(body.contains("UF 18.500"));
    assert!(body.contains("$ 699.300.000"));
}

#[test]
fn unknown_property_is_not_found() {
    let app = init_test_app();

    assert!(matches!(
        get(&app, "/properties/nope"),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn unknown_route_is_not_found() {
    let app = init_test_app();

    assert!(matches!(get(&app, "/nowhere"), Err(ServerError::NotFound)));
}
