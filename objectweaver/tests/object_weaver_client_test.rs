use futures_util::StreamExt;
use mock_service_impl::{API_KEY, FAIL, MockJsonSchemaService};
use objectweaver::client::{ClientConfig, GenerateError, ObjectWeaverClient};
use objectweaver::pb::JsonSchemaServiceServer;
use objectweaver::schema::{DataType, Definition};
use std::time::Duration;
use tonic::Code;
use tonic::transport::Server;


async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(JsonSchemaServiceServer::new(MockJsonSchemaService))
            .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    // No scheme: the client assumes plain http.
    addr.to_string()
}

fn book() -> Definition {
    Definition::new(DataType::OBJECT)
        .with_property("title", Definition::new(DataType::STRING))
        .with_property("author", Definition::new(DataType::STRING))
}

#[tokio::test]
async fn test_generate_over_a_fresh_connection() {
    let url = spawn_server().await;
    let client = ObjectWeaverClient::new(ClientConfig::new(url, API_KEY));

    let first = client.generate("A book", &book()).await.unwrap();
    let second = client.generate("Another book", &book()).await.unwrap();

    assert_eq!(first.data.unwrap()["prompt"], "A book");
    assert_eq!(second.data.unwrap()["prompt"], "Another book");
}

#[tokio::test]
async fn test_stream_generate_over_a_fresh_connection() {
    let url = spawn_server().await;
    let client = ObjectWeaverClient::new(ClientConfig::new(url, API_KEY));
    let mut statuses = Vec::new();

    let delivered = client
        .stream_generate("A book", &book(), |item| {
            statuses.push(item.status);
            Ok::<_, std::io::Error>(())
        })
        .await
        .unwrap();

    assert_eq!(delivered, 3);
    assert_eq!(statuses, ["processing", "processing", "completed"]);
}

#[tokio::test]
async fn test_stream_keeps_its_connection() {
    let url = spawn_server().await;
    let client = ObjectWeaverClient::new(ClientConfig::new(url, API_KEY));

    let stream = client.stream("A book", &book()).await.unwrap();
    drop(client);

    let items: Vec<_> = stream.collect().await;
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(Result::is_ok));
}

#[tokio::test]
async fn test_call_failure_is_reported() {
    let url = spawn_server().await;
    let client = ObjectWeaverClient::new(ClientConfig::new(url, API_KEY));

    let err = client.generate(FAIL, &book()).await.unwrap_err();

    match err {
        GenerateError::Call { status, .. } => assert_eq!(status.code(), Code::InvalidArgument),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_connection_failure() {
    let config = ClientConfig::new("http://127.0.0.1:1", API_KEY)
        .with_connect_timeout(Duration::from_secs(5));
    let client = ObjectWeaverClient::new(config);

    let err = client.generate("A book", &book()).await.unwrap_err();

    match err {
        GenerateError::Connect(uri, _) => assert_eq!(uri, "http://127.0.0.1:1"),
        other => panic!("unexpected error: {other}"),
    }

    let err = client
        .stream_generate("A book", &book(), |_| Ok::<_, std::io::Error>(()))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::Connect(..)), "got {err}");
}

#[tokio::test]
async fn test_invalid_url() {
    let client = ObjectWeaverClient::new(ClientConfig::new("http://not a host", API_KEY));

    let err = client.generate("A book", &book()).await.unwrap_err();

    assert!(matches!(err, GenerateError::InvalidUrl(..)), "got {err}");
}
