use std::future::ready;

use serde_json::{Value, json};
use varinsight_eutils::{
    Database, Endpoint, Error, ErrorKind, EutilsRequest, Transport,
};

struct FakeTransport;

impl Transport for FakeTransport {
    fn send(
        &self,
        req: &EutilsRequest,
    ) -> impl Future<Output = Result<Value, Error>> + Send + 'static {
        let result = match req.endpoint {
            Endpoint::Search => {
                let term = req.param("term").unwrap_or_default();
                if term.is_empty() {
                    Err(Error::remote(400, "Empty term and query_key"))
                } else {
                    Ok(json!({
                        "esearchresult": { "count": "1", "idlist": ["42"] }
                    }))
                }
            }
            Endpoint::Summary => Ok(json!({
                "result": { "uids": [] }
            })),
        };
        ready(result)
    }
}

#[tokio::test]
async fn test_search_round_trip() {
    let transport = FakeTransport;
    let req = EutilsRequest::search(Database::Clinvar, "c.1187G>A + CMTR1");
    let envelope = transport.send(&req).await.unwrap();
    assert_eq!(envelope["esearchresult"]["idlist"], json!(["42"]));
}

#[tokio::test]
async fn test_remote_failure_is_reported() {
    let transport = FakeTransport;
    let req = EutilsRequest::search(Database::Clinvar, "");
    let err = transport.send(&req).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(err.status(), Some(400));
}
