use cryptobot::config::Config;
use std::net::TcpListener;
use url::Url;

const TEST_PORT: u16 = 5050;

fn spawn_app() {
    let config = Config {
        ticker_base_url: Url::parse("http://127.0.0.1:1/ticker/").unwrap(),
        server_port: TEST_PORT,
    };

    let listener = TcpListener::bind(("127.0.0.1", TEST_PORT)).unwrap();
    let server = cryptobot::run(listener, config).unwrap();
    let _ = tokio::spawn(server);
}

#[tokio::test]
async fn health_check_works() {
    spawn_app();

    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://127.0.0.1:{}/health", TEST_PORT))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}
