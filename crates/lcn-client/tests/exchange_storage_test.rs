//! Contract tests for StorageClient, WorkflowClient, DidMetadataClient and
//! the network DID utility.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST   | `/storage/store` | `store_*` |
//! | GET    | `/storage/resolve?uri=` | `resolve_*` |
//! | POST   | `/workflows/{id}/exchanges/{id}` | `exchange_*` |
//! | POST   | `/did-metadata/add`, `/did-metadata/update` | `did_metadata_*` |
//! | GET    | `/did-metadata`, `/did-metadata/mine` | `did_metadata_*` |
//! | GET    | `/utilities/did` | `network_did_*` |

use lcn_client::did_metadata::{DidMetadata, DidService};
use lcn_client::vc::{StoredItem, VerifiablePresentation};
use lcn_client::workflows::ExchangeId;
use lcn_client::{LcnApiConfig, LcnClient, LcnUri};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> LcnClient {
    let config = LcnApiConfig::new(
        format!("{}/api", mock_server.uri()).parse().unwrap(),
        "test-token",
    );
    LcnClient::new(config).unwrap()
}

fn signed_vc() -> serde_json::Value {
    json!({
        "@context": ["https://www.w3.org/2018/credentials/v1"],
        "type": ["VerifiableCredential"],
        "issuer": "did:web:network.learncard.com:users:ada",
        "credentialSubject": {"id": "did:example:bob"},
        "proof": {"type": "Ed25519Signature2020", "proofValue": "z1"}
    })
}

// -- Storage ------------------------------------------------------------------

#[tokio::test]
async fn store_wraps_item() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/storage/store"))
        .and(body_json(json!({"item": signed_vc()})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!("lc:network:network.learncard.com/trpc:credential:s1")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let item: StoredItem = serde_json::from_value(signed_vc()).unwrap();
    let uri = client.storage().store(&item).await.unwrap();
    assert_eq!(LcnUri::new(uri).unwrap().kind(), "credential");
}

#[tokio::test]
async fn resolve_distinguishes_presentations() {
    let mock_server = MockServer::start().await;
    let uri = "lc:network:network.learncard.com/trpc:presentation:p1";

    Mock::given(method("GET"))
        .and(path("/api/storage/resolve"))
        .and(query_param("uri", uri))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@context": ["https://www.w3.org/2018/credentials/v1"],
            "type": "VerifiablePresentation",
            "holder": "did:web:network.learncard.com:users:ada"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let item = client.storage().resolve(&LcnUri::new(uri).unwrap()).await.unwrap();
    match item {
        StoredItem::Presentation(vp) => {
            assert_eq!(vp.holder.as_deref(), Some("did:web:network.learncard.com:users:ada"));
        }
        other => panic!("expected presentation, got {other:?}"),
    }
}

// -- Workflows ----------------------------------------------------------------

#[tokio::test]
async fn exchange_initiation_returns_presentation_request() {
    let mock_server = MockServer::start().await;
    let exchange = ExchangeId::new("lc:network:network.learncard.com/trpc:boost:b1");
    let exchange_id = exchange.encode();

    Mock::given(method("POST"))
        .and(path(format!("/api/workflows/claim/exchanges/{exchange_id}")))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "verifiablePresentationRequest": {
                "query": [{"type": "DIDAuthentication", "acceptedMethods": [{"method": "key"}]}],
                "challenge": exchange.challenge,
                "domain": "network.learncard.com"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client
        .workflows()
        .participate_in_exchange("claim", &exchange_id, None)
        .await
        .unwrap();

    let request = resp.verifiable_presentation_request.unwrap();
    assert_eq!(request.query[0].query_type, "DIDAuthentication");
    assert_eq!(request.challenge, exchange.challenge);
    assert!(resp.verifiable_presentation.is_none());
}

#[tokio::test]
async fn exchange_completion_returns_issued_credentials() {
    let mock_server = MockServer::start().await;
    let exchange_id = ExchangeId::new("lc:network:network.learncard.com/trpc:boost:b1").encode();
    let did_auth = json!({
        "@context": ["https://www.w3.org/2018/credentials/v1"],
        "type": "VerifiablePresentation",
        "holder": "did:key:z6Mkbob",
        "proof": {"type": "Ed25519Signature2020", "challenge": "c1", "proofValue": "z2"}
    });

    Mock::given(method("POST"))
        .and(path(format!("/api/workflows/claim/exchanges/{exchange_id}")))
        .and(body_json(json!({"verifiablePresentation": did_auth})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "verifiablePresentation": {
                "@context": ["https://www.w3.org/2018/credentials/v1"],
                "type": "VerifiablePresentation",
                "verifiableCredential": [signed_vc()]
            },
            "redirectUrl": "https://learncard.app/done"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let vp: VerifiablePresentation = serde_json::from_value(did_auth).unwrap();
    assert_eq!(vp.challenge(), Some("c1"));

    let resp = client
        .workflows()
        .participate_in_exchange("claim", &exchange_id, Some(&vp))
        .await
        .unwrap();

    let issued = resp.verifiable_presentation.unwrap();
    assert_eq!(issued.verifiable_credential.map(|vcs| vcs.iter().count()), Some(1));
    assert_eq!(resp.redirect_url.as_deref(), Some("https://learncard.app/done"));
}

// -- DID metadata -------------------------------------------------------------

#[tokio::test]
async fn did_metadata_add_and_list() {
    let mock_server = MockServer::start().await;
    let service = json!({
        "id": "did:web:network.learncard.com:users:ada#linked-domain",
        "type": "LinkedDomains",
        "serviceEndpoint": "https://ada.dev"
    });

    Mock::given(method("POST"))
        .and(path("/api/did-metadata/add"))
        .and(body_json(json!({"service": [service]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/did-metadata/mine"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "m1", "service": [service]}
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let metadata = DidMetadata {
        service: Some(vec![serde_json::from_value::<DidService>(service.clone()).unwrap()]),
        ..Default::default()
    };
    assert!(client.did_metadata().add_did_metadata(&metadata).await.unwrap());

    let mine = client.did_metadata().get_my_did_metadata().await.unwrap();
    assert_eq!(mine[0].id, "m1");
    assert_eq!(mine[0].metadata, metadata);
}

#[tokio::test]
async fn did_metadata_missing_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/did-metadata"))
        .and(query_param("id", "gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.did_metadata().get_did_metadata("gone").await.unwrap().is_none());
}

#[tokio::test]
async fn did_metadata_update_wraps_updates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/did-metadata/update"))
        .and(body_json(json!({"id": "m1", "updates": {"alsoKnownAs": ["https://ada.dev"]}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let updates = DidMetadata {
        also_known_as: Some(vec!["https://ada.dev".into()]),
        ..Default::default()
    };
    assert!(client.did_metadata().update_did_metadata("m1", &updates).await.unwrap());
}

// -- Utilities ----------------------------------------------------------------

#[tokio::test]
async fn network_did_is_plain_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/utilities/did"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("did:web:network.learncard.com")))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert_eq!(
        client.utilities().get_did().await.unwrap(),
        "did:web:network.learncard.com"
    );
}
