//! End-to-end tests against the demo server over TCP.

use either_dispatch::AppConfig;

mod common;

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_demo_server_renders_outcomes() {
    let addr = common::start_demo_server(AppConfig::default()).await;
    let client = client();

    let res = client
        .get(format!("http://{addr}/value"))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Alright");

    let res = client.get(format!("http://{addr}/status")).send().await.unwrap();
    assert_eq!(res.status(), 401);
    assert_eq!(res.text().await.unwrap(), "");

    let res = client
        .get(format!("http://{addr}/rack/symbol/left"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "/rack/symbol/right");

    let res = client.get(format!("http://{addr}/neither")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "neither");
}
