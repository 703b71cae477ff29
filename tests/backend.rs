//! End-to-end checks of the HTTP client and page controllers against a mock
//! Endless backend. Each test drives a controller exactly like the view does:
//! `begin_*`, await the backend only if a request was produced, `finish_*`.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use endless_chat::client::HttpBackend;
use endless_chat::controller::assistant::{AssistantList, AssistantPanel, AssistantView};
use endless_chat::controller::chat::{ChatPanel, Role, CLEARED_PLACEHOLDER};
use endless_chat::controller::completion::{CompletionPanel, CompletionView};
use endless_chat::controller::login::LoginForm;
use endless_chat::controller::workspace::{Indicator, Workspace};
use endless_chat::controller::{Effect, Field, Page};
use endless_chat::error::ApiError;

const GOOD_KEY: &str = "sk-test-0123456789abcdef";

fn backend(server: &MockServer) -> HttpBackend {
    HttpBackend::new(server.uri()).unwrap()
}

async fn send_chat(chat: &mut ChatPanel, backend: &HttpBackend) -> Option<Vec<Effect>> {
    let (request, _) = chat.begin_send()?;
    let result = backend.chat(&request).await;
    Some(chat.finish_send(result))
}

#[tokio::test]
async fn login_session_cookie_is_reused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "api_key": GOOD_KEY })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc123; Path=/")
                .set_body_json(json!({ "success": true, "message": "ok" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logged_in": true,
            "status": "running",
            "api_key_masked": "sk-tes...cdef"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend(&server);
    let mut form = LoginForm::default();
    form.api_key = GOOD_KEY.to_string();
    let request = form.begin_submit().expect("valid key");
    let effects = form.finish_submit(backend.login(&request).await);
    assert_eq!(effects, vec![Effect::Navigate(Page::Home)]);

    let mut workspace = Workspace::default();
    let effects = workspace.finish_status(backend.status().await);
    assert!(effects.is_empty());
    assert_eq!(workspace.indicator(), Indicator::Online);
    assert_eq!(workspace.api_key_masked(), "sk-tes...cdef");
}

#[tokio::test]
async fn invalid_keys_never_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&server)
        .await;

    let backend = backend(&server);
    for key in ["", "pk-0123456789abcdefghij", "sk-tooshort"] {
        let mut form = LoginForm::default();
        form.api_key = key.to_string();
        if let Some(request) = form.begin_submit() {
            form.finish_submit(backend.login(&request).await);
        }
        assert!(form.error().is_some(), "key {key:?} should be rejected");
    }
}

#[tokio::test]
async fn rejected_login_surfaces_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "API key is invalid or expired" })),
        )
        .mount(&server)
        .await;

    let backend = backend(&server);
    let mut form = LoginForm::default();
    form.api_key = GOOD_KEY.to_string();
    let request = form.begin_submit().unwrap();
    let effects = form.finish_submit(backend.login(&request).await);
    assert_eq!(effects, vec![Effect::Focus(Field::ApiKey)]);
    assert_eq!(form.error(), Some("API key is invalid or expired"));
}

#[tokio::test]
async fn chat_round_trip_appends_user_then_assistant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({
            "message": "hello",
            "model": "gpt-3.5-turbo",
            "max_tokens": 1000,
            "temperature": 0.7
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Hi! How can I help?",
            "model": "gpt-3.5-turbo",
            "usage": { "total_tokens": 30, "prompt_tokens": 10, "completion_tokens": 20 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend(&server);
    let mut chat = ChatPanel::default();
    chat.input = "hello".to_string();

    let effects = send_chat(&mut chat, &backend).await.unwrap();
    assert!(effects.contains(&Effect::Focus(Field::ChatInput)));

    let transcript = chat.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].role, Role::User);
    assert_eq!(transcript[0].content, "hello");
    assert_eq!(transcript[1].role, Role::Assistant);
    assert_eq!(transcript[1].content, "Hi! How can I help?");
}

#[tokio::test]
async fn empty_chat_message_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "?" })))
        .expect(0)
        .mount(&server)
        .await;

    let backend = backend(&server);
    let mut chat = ChatPanel::default();
    chat.input = "   ".to_string();
    assert!(send_chat(&mut chat, &backend).await.is_none());
    assert!(chat.transcript().is_empty());
}

#[tokio::test]
async fn unauthorized_anywhere_redirects_to_login() {
    let server = MockServer::start().await;
    for route in ["/api/chat", "/api/completion", "/api/create_assistant", "/api/clear_history"] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Not logged in" })))
            .mount(&server)
            .await;
    }
    let backend = backend(&server);
    let login = Effect::Navigate(Page::Login);

    let mut chat = ChatPanel::default();
    chat.input = "hi".to_string();
    let effects = send_chat(&mut chat, &backend).await.unwrap();
    assert!(effects.contains(&login));

    assert!(chat.begin_clear());
    let effects = chat.finish_clear(backend.clear_history().await);
    assert!(effects.contains(&login));

    let mut completion = CompletionPanel::default();
    completion.prompt = "Once".to_string();
    let request = completion.begin_generate().unwrap();
    let effects = completion.finish_generate(backend.completion(&request).await);
    assert!(effects.contains(&login));

    let mut assistant = AssistantPanel::default();
    assistant.request = "a poet".to_string();
    let request = assistant.begin_create().unwrap();
    let effects = assistant.finish_create(backend.create_assistant(&request).await);
    assert!(effects.contains(&login));
}

#[tokio::test]
async fn clear_history_empties_transcript() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "pong" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/clear_history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend(&server);
    let mut chat = ChatPanel::default();
    chat.input = "ping".to_string();
    send_chat(&mut chat, &backend).await.unwrap();
    assert_eq!(chat.transcript().len(), 2);

    assert!(chat.begin_clear());
    let effects = chat.finish_clear(backend.clear_history().await);
    assert!(chat.transcript().is_empty());
    assert_eq!(chat.placeholder(), CLEARED_PLACEHOLDER);
    assert_eq!(effects, vec![Effect::Focus(Field::ChatInput)]);
}

#[tokio::test]
async fn completion_shows_generated_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/completion"))
        .and(body_json(json!({
            "prompt": "Roses are red",
            "model": "gpt-3.5-turbo-instruct",
            "max_tokens": 1000,
            "temperature": 0.7
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "completion": ", violets are blue",
            "usage": { "total_tokens": 1500, "prompt_tokens": 500, "completion_tokens": 1000 }
        })))
        .mount(&server)
        .await;

    let backend = backend(&server);
    let mut panel = CompletionPanel::default();
    panel.prompt = "Roses are red".to_string();
    let request = panel.begin_generate().unwrap();
    panel.finish_generate(backend.completion(&request).await);

    assert_eq!(
        panel.view(),
        &CompletionView::Text(", violets are blue".to_string())
    );
    assert_eq!(
        panel.usage_line().as_deref(),
        Some("Tokens: 1.5K (prompt 500, completion 1.0K)")
    );
}

#[tokio::test]
async fn assistant_creation_and_listing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create_assistant"))
        .and(body_json(json!({ "request": "a haiku poet", "model": "gpt-4" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "conversation": {
                "id": 12,
                "title": "Haiku Poet",
                "system_prompt": "You answer only in haiku.",
                "created_at": "2024-05-01T09:30:12.345678"
            },
            "message": "created"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/conversations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "conversations": [
                { "id": 3, "title": "New chat", "created_at": "2024-04-01T08:00:00",
                  "updated_at": "2024-04-01T08:00:00", "message_count": 4,
                  "is_custom_assistant": false },
                { "id": 12, "title": "Haiku Poet", "created_at": "2024-05-01T09:30:12.345678",
                  "updated_at": "2024-05-01T09:30:12.345678", "message_count": 0,
                  "is_custom_assistant": true,
                  "system_prompt_preview": "You answer only in haiku." }
            ]
        })))
        .mount(&server)
        .await;

    let backend = backend(&server);
    let mut panel = AssistantPanel::default();
    panel.request = "a haiku poet".to_string();

    let request = panel.begin_create().unwrap();
    let effects = panel.finish_create(backend.create_assistant(&request).await);
    assert_eq!(effects, vec![Effect::RefreshAssistants]);
    match panel.view() {
        AssistantView::Created(created) => assert_eq!(created.id, 12),
        other => panic!("unexpected view: {other:?}"),
    }

    panel.begin_load_assistants();
    panel.finish_load_assistants(backend.conversations().await);
    match panel.list() {
        AssistantList::Loaded(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].title, "Haiku Poet");
        }
        other => panic!("unexpected list: {other:?}"),
    }
}

#[tokio::test]
async fn empty_assistant_request_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create_assistant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&server)
        .await;

    let backend = backend(&server);
    let mut panel = AssistantPanel::default();
    panel.request = "\n".to_string();
    if let Some(request) = panel.begin_create() {
        panel.finish_create(backend.create_assistant(&request).await);
    }
    assert_eq!(panel.view(), &AssistantView::Placeholder);
}

#[tokio::test]
async fn server_error_without_body_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/conversations"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = backend(&server).conversations().await.unwrap_err();
    match &err {
        ApiError::Api { status, message } => {
            assert_eq!(*status, 502);
            assert_eq!(message, &None);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!err.is_unauthorized());
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let backend = HttpBackend::new("http://127.0.0.1:9/").unwrap();
    let err = backend.status().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.user_message(), "Network connection failed");

    let mut workspace = Workspace::default();
    assert!(workspace.finish_status(Err(err)).is_empty());
    assert_eq!(workspace.indicator(), Indicator::Offline);
}

#[tokio::test]
async fn login_without_server_reports_connection_problem() {
    let backend = HttpBackend::new("http://127.0.0.1:9").unwrap();
    let mut form = LoginForm::default();
    form.api_key = GOOD_KEY.to_string();
    let request = form.begin_submit().unwrap();
    let effects = form.finish_submit(backend.login(&request).await);
    assert_eq!(effects, vec![Effect::Focus(Field::ApiKey)]);
    assert_eq!(
        form.error(),
        Some("Network connection failed, please check your connection")
    );
    assert!(!form.is_loading());
}
