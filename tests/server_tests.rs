//! Live-socket tests: the server answers over TCP and stops on shutdown.

use std::time::Duration;

use tokio::net::TcpListener;

use fluent_router::config::ServerConfig;
use fluent_router::lifecycle::Shutdown;

mod common;

#[tokio::test]
async fn test_serves_over_tcp_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let app = common::demo_app(ServerConfig::default());
    let server = tokio::spawn(app.serve(listener, shutdown.subscribe()));

    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("http://{addr}/user"))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    let users: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[1]["name"], "张三");

    let res = client
        .get(format!("http://{addr}/test"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "用户测试");

    // Concurrent requests share the same immutable route table.
    let mut tasks = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        let url = format!("http://{addr}/user/detail");
        tasks.push(tokio::spawn(async move {
            client.get(url).send().await.unwrap().text().await.unwrap()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), r#"{"id":101,"name":"custer"}"#);
    }

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not stop after shutdown");
    assert!(result.unwrap().is_ok());
}
