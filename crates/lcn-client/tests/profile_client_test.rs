//! Contract tests for ProfileClient against the LearnCard Network HTTP API.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST   | `/profile/create` | `create_profile_*` |
//! | GET    | `/profile` | `get_profile_*` |
//! | GET    | `/profile/{profileId}` | `get_other_profile_*` |
//! | POST   | `/profile` | `update_profile_*` |
//! | GET    | `/search/profiles/{input}` | `search_profiles_*` |
//! | POST   | `/profile/{profileId}/connect` | `connect_with_*` |
//! | GET    | `/profile/connections/paginated` | `connections_*` |
//! | GET    | `/profile/pending-connections/paginated` | `pending_connections_*` |
//! | GET    | `/profile/connection-requests/paginated` | `connection_requests_*` |
//! | POST   | `/profile/{profileId}/block`, `/unblock` | `block_*` |
//! | GET    | `/profile/blocked` | `blocked_profiles_*` |
//! | POST   | `/profile/generate-invite` | `generate_invite_*` |
//! | GET    | `/profile/invites` | `invites_*` |
//! | POST   | `/profile/invite/{challenge}/invalidate` | `invalidate_invite_*` |
//! | POST   | `/profile/create-managed-service` | `managed_service_*` |
//! | GET    | `/profile/managed-services` | `managed_service_*` |
//! | POST   | `/profile/available-profiles` | `available_profiles_*` |
//! | POST   | `/profile/{profileId}/connect/{challenge}` | `connect_with_invite_*` |
//! | GET    | `/profile/signing-authority/*` | `signing_authority_*` |

use lcn_client::profiles::{
    ConnectionStatus, CreateProfileRequest, GenerateInviteRequest, RegisterSigningAuthorityRequest,
    SearchProfilesOptions, UpdateProfileRequest,
};
use lcn_client::types::SigningAuthorityName;
use lcn_client::{Did, LcnApiConfig, LcnApiError, LcnClient, PaginationOptions, ProfileId};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build an LcnClient pointed at a wiremock server.
fn test_client(mock_server: &MockServer) -> LcnClient {
    let config = LcnApiConfig::new(
        format!("{}/api", mock_server.uri()).parse().unwrap(),
        "test-token",
    );
    LcnClient::new(config).unwrap()
}

fn ada() -> ProfileId {
    ProfileId::new("ada").unwrap()
}

// -- POST /profile/create -----------------------------------------------------

#[tokio::test]
async fn create_profile_sends_bearer_token_and_returns_did() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/profile/create"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({"profileId": "ada", "displayName": "Ada"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!("did:web:network.learncard.com:users:ada")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let mut req = CreateProfileRequest::new(ada());
    req.details.display_name = Some("Ada".into());

    let did = client.profiles().create_profile(&req).await.unwrap();
    assert_eq!(did, "did:web:network.learncard.com:users:ada");
}

#[tokio::test]
async fn create_profile_surfaces_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/profile/create"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Profile already exists!",
            "code": "CONFLICT"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .profiles()
        .create_profile(&CreateProfileRequest::new(ada()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    match err {
        LcnApiError::ApiError { endpoint, body, .. } => {
            assert_eq!(endpoint, "POST /profile/create");
            assert!(body.contains("already exists"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

// -- GET /profile -------------------------------------------------------------

#[tokio::test]
async fn get_profile_returns_profile_with_unknown_keys() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profileId": "ada",
            "did": "did:web:network.learncard.com:users:ada",
            "displayName": "Ada",
            "isServiceProfile": false,
            "highlightedCredentials": [],
            "newField": {"nested": true}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let profile = client.profiles().get_profile().await.unwrap().unwrap();

    assert_eq!(profile.profile_id, "ada");
    assert_eq!(profile.parsed_did().unwrap().method(), "web");
    assert_eq!(profile.details.display_name.as_deref(), Some("Ada"));
    assert_eq!(profile.details.additional_properties["newField"], json!({"nested": true}));
}

#[tokio::test]
async fn get_profile_without_profile_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.profiles().get_profile().await.unwrap().is_none());
}

#[tokio::test]
async fn get_other_profile_404_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"code": "NOT_FOUND"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .profiles()
        .get_other_profile(&ProfileId::new("nobody").unwrap())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn get_profile_keeps_identifiers_the_client_would_not_accept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profileId": "ada lovelace",
            "did": "did:WEB:x"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let profile = client.profiles().get_profile().await.unwrap().unwrap();
    assert_eq!(profile.profile_id, "ada lovelace");
    assert_eq!(profile.did, "did:WEB:x");
    assert!(profile.parsed_profile_id().is_err());
    assert!(profile.parsed_did().is_err());
}

#[tokio::test]
async fn get_profile_with_wrong_shape_is_deserialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profileId": 42,
            "did": "did:web:x"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.profiles().get_profile().await.unwrap_err();
    assert!(matches!(err, LcnApiError::Deserialization { .. }));
}

// -- POST /profile ------------------------------------------------------------

#[tokio::test]
async fn update_profile_sends_only_set_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/profile"))
        .and(body_json(json!({"shortBio": "Analyst"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let mut req = UpdateProfileRequest::default();
    req.details.short_bio = Some("Analyst".into());
    assert!(client.profiles().update_profile(&req).await.unwrap());
}

// -- GET /search/profiles/{input} ----------------------------------------------

#[tokio::test]
async fn search_profiles_passes_flags_and_reads_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search/profiles/bo"))
        .and(query_param("limit", "5"))
        .and(query_param("includeConnectionStatus", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "profileId": "bob",
                "did": "did:web:network.learncard.com:users:bob",
                "connectionStatus": "CONNECTED"
            },
            {
                "profileId": "bonnie",
                "did": "did:web:network.learncard.com:users:bonnie",
                "connectionStatus": "BLOCKED"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let opts = SearchProfilesOptions {
        limit: Some(5),
        include_connection_status: Some(true),
        ..Default::default()
    };
    let hits = client.profiles().search_profiles("bo", &opts).await.unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].connection_status, Some(ConnectionStatus::Connected));
    assert_eq!(
        hits[1].connection_status,
        Some(ConnectionStatus::Other("BLOCKED".into()))
    );
}

// -- Connections --------------------------------------------------------------

#[tokio::test]
async fn connect_with_posts_to_profile_action() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/profile/ada/connect"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.profiles().connect_with(&ada()).await.unwrap());
}

#[tokio::test]
async fn connections_reads_page_and_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile/connections/paginated"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hasMore": true,
            "cursor": "c1",
            "records": [{
                "profileId": "bob",
                "did": "did:web:network.learncard.com:users:bob"
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .profiles()
        .connections(&PaginationOptions::with_limit(1))
        .await
        .unwrap();

    assert_eq!(page.records.len(), 1);
    assert_eq!(page.next_cursor(), Some("c1"));
}

#[tokio::test]
async fn pending_connections_clamps_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile/pending-connections/paginated"))
        .and(query_param("limit", "99"))
        .and(query_param("cursor", "c0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hasMore": false,
            "records": [{"profileId": "bob", "did": "did:web:network.learncard.com:users:bob"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .profiles()
        .pending_connections(&PaginationOptions::with_limit(1000).after("c0"))
        .await
        .unwrap();

    assert_eq!(page.records[0].profile_id, "bob");
    assert_eq!(page.next_cursor(), None);
}

#[tokio::test]
async fn connection_requests_reads_incoming_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile/connection-requests/paginated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hasMore": true,
            "cursor": "c1",
            "records": [
                {"profileId": "carol", "did": "did:web:network.learncard.com:users:carol"},
                {"profileId": "dan", "did": "did:web:network.learncard.com:users:dan"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .profiles()
        .connection_requests(&PaginationOptions::default())
        .await
        .unwrap();

    let ids: Vec<_> = page.records.iter().map(|p| p.profile_id.as_str()).collect();
    assert_eq!(ids, ["carol", "dan"]);
    assert_eq!(page.next_cursor(), Some("c1"));
}

#[tokio::test]
async fn block_and_unblock_post_to_profile_action() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/profile/ada/block"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/profile/ada/unblock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(false)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.profiles().block_profile(&ada()).await.unwrap());
    assert!(!client.profiles().unblock_profile(&ada()).await.unwrap());
}

#[tokio::test]
async fn blocked_profiles_reads_bare_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile/blocked"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"profileId": "mallory", "did": "did:web:network.learncard.com:users:mallory"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let blocked = client.profiles().blocked_profiles().await.unwrap();
    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].profile_id, "mallory");
}

#[tokio::test]
async fn generate_invite_reads_never_expiring_invite() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/profile/generate-invite"))
        .and(body_json(json!({"expiration": 0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profileId": "ada",
            "challenge": "9f3c",
            "expiresIn": null
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let invite = client
        .profiles()
        .generate_invite(&GenerateInviteRequest {
            expiration: Some(0),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(invite.challenge, "9f3c");
    assert_eq!(invite.expires_in, None);
}

#[tokio::test]
async fn invites_reads_unlimited_and_counted_invites() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile/invites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"challenge": "9f3c", "expiresIn": null, "usesRemaining": null, "maxUses": null},
            {"challenge": "a1b2", "expiresIn": 3600, "usesRemaining": 2, "maxUses": 5, "note": "team"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let invites = client.profiles().invites().await.unwrap();

    assert_eq!(invites.len(), 2);
    assert_eq!(invites[0].uses_remaining, None);
    assert_eq!(invites[0].expires_in, None);
    assert_eq!(invites[1].expires_in, Some(3600));
    assert_eq!(invites[1].uses_remaining, Some(2));
    assert_eq!(invites[1].max_uses, Some(5));
    assert_eq!(invites[1].additional_properties["note"], "team");
}

#[tokio::test]
async fn invalidate_invite_puts_challenge_in_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/profile/invite/9f3c/invalidate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.profiles().invalidate_invite("9f3c").await.unwrap());
}

#[tokio::test]
async fn connect_with_invite_puts_challenge_in_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/profile/ada/connect/9f3c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.profiles().connect_with_invite(&ada(), "9f3c").await.unwrap());
}

// -- Managed profiles ---------------------------------------------------------

#[tokio::test]
async fn managed_service_profile_create_and_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/profile/create-managed-service"))
        .and(body_json(json!({"profileId": "acme-bot", "displayName": "Acme"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!("did:web:network.learncard.com:users:acme-bot")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/profile/managed-services"))
        .and(query_param("id", "mgr-1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hasMore": false,
            "records": [{
                "profileId": "acme-bot",
                "did": "did:web:network.learncard.com:users:acme-bot",
                "isServiceProfile": true
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let mut req = CreateProfileRequest::new(ProfileId::new("acme-bot").unwrap());
    req.details.display_name = Some("Acme".into());
    let did = client
        .profiles()
        .create_managed_service_profile(&req)
        .await
        .unwrap();
    assert_eq!(did, "did:web:network.learncard.com:users:acme-bot");

    let page = client
        .profiles()
        .managed_service_profiles(&PaginationOptions::with_limit(10), Some("mgr-1"))
        .await
        .unwrap();
    assert_eq!(page.records[0].profile_id, "acme-bot");
}

#[tokio::test]
async fn available_profiles_sends_default_limit_and_reads_managers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/profile/available-profiles"))
        .and(body_json(json!({"limit": 25, "query": {"displayName": "Acme"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hasMore": false,
            "records": [
                {"profile": {"profileId": "ada", "did": "did:web:network.learncard.com:users:ada"}},
                {
                    "profile": {"profileId": "acme", "did": "did:web:network.learncard.com:users:acme"},
                    "manager": {
                        "id": "mgr-1",
                        "created": "2024-03-01T00:00:00Z",
                        "displayName": "Acme Admins",
                        "did": "did:web:network.learncard.com:manager:mgr-1"
                    }
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let mut query = serde_json::Map::new();
    query.insert("displayName".into(), json!("Acme"));
    let page = client
        .profiles()
        .available_profiles(&PaginationOptions::default(), Some(&query))
        .await
        .unwrap();

    assert!(page.records[0].manager.is_none());
    let manager = page.records[1].manager.as_ref().unwrap();
    assert_eq!(manager.id, "mgr-1");
    assert_eq!(manager.display_name.as_deref(), Some("Acme Admins"));
}

// -- Signing authorities ------------------------------------------------------

#[tokio::test]
async fn signing_authority_register_and_lookup() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/profile/signing-authority/register"))
        .and(body_json(json!({
            "endpoint": "https://sa.learncard.com",
            "name": "main",
            "did": "did:key:z6Mkabc"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/profile/signing-authority/get"))
        .and(query_param("endpoint", "https://sa.learncard.com"))
        .and(query_param("name", "main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "signingAuthority": {"endpoint": "https://sa.learncard.com"},
            "relationship": {"name": "main", "did": "did:key:z6Mkabc", "isPrimary": true}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let registered = client
        .profiles()
        .register_signing_authority(&RegisterSigningAuthorityRequest {
            endpoint: "https://sa.learncard.com".into(),
            name: SigningAuthorityName::new("main").unwrap(),
            did: Did::new("did:key:z6Mkabc").unwrap(),
        })
        .await
        .unwrap();
    assert!(registered);

    let sa = client
        .profiles()
        .signing_authority("https://sa.learncard.com", "main")
        .await
        .unwrap()
        .unwrap();
    assert!(sa.is_primary());
    assert_eq!(sa.relationship.did, "did:key:z6Mkabc");
}

#[tokio::test]
async fn signing_authority_primary_absent_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile/signing-authority/get-primary"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client
        .profiles()
        .primary_signing_authority()
        .await
        .unwrap()
        .is_none());
}
