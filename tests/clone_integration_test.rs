use httpmock::prelude::*;
use kloni::config::AuthSettings;
use kloni::{CloneForm, CloneOutcome, Dashboard, ErrorKind, FormState, Settings};

fn static_token_settings(api_url: String) -> Settings {
    Settings {
        api_url,
        timeout_seconds: 5,
        auth: AuthSettings {
            access_token: Some("tok-123".to_string()),
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn test_clone_posts_titles_and_revalidates_search() {
    let server = MockServer::start();

    let clone_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/announcement")
            .header("Authorization", "Bearer tok-123")
            .json_body(serde_json::json!({
                "root_id": "MLB1",
                "titles": ["Camiseta Azul P", "Camiseta Azul M"]
            }));
        then.status(201);
    });

    let search_mock = server.mock(|when, then| {
        when.method(GET).path("/announcement/CAM-AZ");
        then.status(200).json_body(serde_json::json!([
            {
                "id": "MLB1", "title": "Camiseta Azul", "quantity": 4, "status": "active",
                "price": 59.9, "picture": "", "sku": "CAM-AZ", "link": "",
                "account": {"id": "acc-1", "name": "Loja Centro"}
            }
        ]));
    });

    let dashboard = Dashboard::from_settings(&static_token_settings(server.base_url())).unwrap();

    let mut form = CloneForm::new("MLB1", "CAM-AZ");
    form.set_title(0, "Camiseta Azul P");
    form.add_input();
    form.set_title(1, "Camiseta Azul M ");

    let report = dashboard.submit_clone(FormState::default(), &form).await.unwrap();

    clone_mock.assert();
    search_mock.assert();
    match report.outcome {
        CloneOutcome::Redirect { location, .. } => assert_eq!(location, "/?q=CAM-AZ"),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(report.refreshed.unwrap().announcements.len(), 1);
}

#[tokio::test]
async fn test_clone_failure_shows_banner_and_counts() {
    let server = MockServer::start();
    let clone_mock = server.mock(|when, then| {
        when.method(POST).path("/announcement");
        then.status(500);
    });

    let dashboard = Dashboard::from_settings(&static_token_settings(server.base_url())).unwrap();
    let form = CloneForm::with_titles("MLB1", "CAM-AZ", ["Camiseta Azul G"]);

    let first = dashboard.submit_clone(FormState::default(), &form).await.unwrap();
    assert!(first.refreshed.is_none());
    let state = match first.outcome {
        CloneOutcome::Failed { state, banner } => {
            assert_eq!(banner.message, "Falha ao clonar. Por favor, tente novamente.");
            assert_eq!(banner.kind, ErrorKind::InternalServerError);
            state
        }
        other => panic!("unexpected outcome {:?}", other),
    };

    // resubmitting is the only retry
    let second = dashboard.submit_clone(state, &form).await.unwrap();
    assert!(matches!(
        second.outcome,
        CloneOutcome::Failed { state: FormState { fails: 2 }, .. }
    ));
    clone_mock.assert_hits(2);
}

#[tokio::test]
async fn test_clone_with_zero_titles_is_rejected() {
    let server = MockServer::start();
    let clone_mock = server.mock(|when, then| {
        when.method(POST).path("/announcement");
        then.status(201);
    });

    let dashboard = Dashboard::from_settings(&static_token_settings(server.base_url())).unwrap();
    let form = CloneForm::with_titles("MLB1", "CAM-AZ", Vec::<String>::new());

    let err = dashboard.submit_clone(FormState::default(), &form).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EmptyField);
    assert_eq!(err.exit_code(), 2);
    clone_mock.assert_hits(0);
}

#[tokio::test]
async fn test_clone_with_client_credentials_token() -> anyhow::Result<()> {
    let idp = MockServer::start();
    let token_mock = idp.mock(|when, then| {
        when.method(POST).path("/oauth/token");
        then.status(200).json_body(serde_json::json!({
            "access_token": "idp-token",
            "expires_in": 3600,
            "token_type": "Bearer"
        }));
    });

    let api = MockServer::start();
    let clone_mock = api.mock(|when, then| {
        when.method(POST)
            .path("/announcement")
            .header("Authorization", "Bearer idp-token");
        then.status(200);
    });
    let search_mock = api.mock(|when, then| {
        when.method(GET)
            .path("/announcement/CAM")
            .header("Authorization", "Bearer idp-token");
        then.status(404);
    });

    let settings = Settings {
        api_url: api.base_url(),
        timeout_seconds: 5,
        auth: AuthSettings {
            access_token: None,
            issuer_base_url: Some(idp.base_url()),
            client_id: Some("dash".to_string()),
            client_secret: Some("s3cret".to_string()),
            audience: Some("https://api.example.com".to_string()),
        },
    };

    let dashboard = Dashboard::from_settings(&settings)?;
    let form = CloneForm::with_titles("MLB7", "CAM", ["Caneca Branca"]);
    let report = dashboard.submit_clone(FormState::default(), &form).await?;

    assert!(report.outcome.is_success());
    assert!(report.refreshed.map(|r| r.is_empty()).unwrap_or(false));
    clone_mock.assert();
    search_mock.assert();
    token_mock.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_dashboard_rejects_missing_configuration() {
    let settings = Settings {
        api_url: String::new(),
        ..Default::default()
    };
    let err = Dashboard::from_settings(&settings).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(err.exit_code(), 3);
}
