use hypermocker::{Bytes, Server, StatusCode};

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn anticipation_then_request() {
    let _ = env_logger::try_init();

    let server = Server::bind().await;
    let url = format!("http://127.0.0.1:{}/foo?bar=baz", server.port());
    let mut anticipated = server.anticipate("/foo").await;

    let (response, ()) = tokio::join!(
        async { client().get(url).send().await.unwrap() },
        async move {
            let request = anticipated.expect().await;
            assert_eq!(Some("bar=baz"), request.uri().query());
            anticipated.respond(Bytes::from_static(b"hello")).await;
        },
    );

    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(&response.bytes().await.unwrap()[..], b"hello");
}

#[tokio::test]
async fn response_prepared_before_request() {
    let _ = env_logger::try_init();

    let server = Server::bind().await;
    let url = format!("http://127.0.0.1:{}/foo", server.port());
    server
        .anticipate("/foo")
        .await
        .respond_with(StatusCode::SERVICE_UNAVAILABLE, "epic fail")
        .await;

    let response = client().get(url).send().await.unwrap();
    assert_eq!(StatusCode::SERVICE_UNAVAILABLE, response.status());
    assert_eq!(response.text().await.unwrap(), "epic fail");
}

#[tokio::test]
#[should_panic(expected = "there are unexpected requests")]
async fn unexpected_request() {
    let _ = env_logger::try_init();

    let server = Server::bind().await;
    let url = format!("http://127.0.0.1:{}/foo", server.port());

    let response = client().get(url).send().await.unwrap();
    assert_eq!(StatusCode::IM_A_TEAPOT, response.status());
    assert_eq!(&response.bytes().await.unwrap()[..], b"unexpected");
}
