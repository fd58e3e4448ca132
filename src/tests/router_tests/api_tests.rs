use crate::tests::utils::{body_string, get, init_test_app};
use serde_json::Value;

#[test]
fn api_lists_catalog_in_order_with_prices() {
    let app = init_test_app();

    let resp = get(&app, "/api/properties").expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["id"], "1");
    assert_eq!(items[9]["id"], "cl-7");
    assert_eq!(items[9]["display"]["uf"], "UF 6.800");
    assert_eq!(items[9]["display"]["clp"], "$ 257.040.000");
}

#[test]
fn reading_twice_gives_the_same_result() {
    let app = init_test_app();

    let first = body_string(get(&app, "/api/properties").unwrap());
    let second = body_string(get(&app, "/api/properties").unwrap());
    assert_eq!(first, second);
}
