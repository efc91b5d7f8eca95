#![allow(clippy::unwrap_used)]

use serde_json::json;
use serviciudad::serviciudad::{
    models::AlertKind,
    navigator::PageHost,
    render::{render, Format},
    route::Page,
    session::SessionContext,
    ApiConfig, InquiryClient, InquiryError, InquiryState, MemoryStorage, Session, SessionGate,
};
use std::{net::TcpListener, time::Duration};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AUTHORIZATION: &str = "Basic c2VydmljaXVkYWQ6ZGV2MjAyNQ==";

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn config(base_url: &str) -> ApiConfig {
    let mut config = ApiConfig::with_base_url(base_url);
    config.redirect_delay = Duration::from_millis(5);
    config
}

async fn backend() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/actuator/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "UP" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/deuda/cliente/0001234567"))
        .and(header("Authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nombreCliente": "Ana Gómez",
            "clienteId": "0001234567",
            "fechaConsulta": "2025-10-17T14:30:00",
            "totalAPagar": 125000,
            "estadisticas": {
                "totalFacturasAcueducto": 2,
                "deudaAcumuladaAcueducto": 85000,
                "totalConsumoAcueducto": 30,
                "deudaAcumuladaEnergia": 40000,
                "totalConsumoEnergia": 210,
                "promedioConsumoAcueducto": 15
            },
            "alertas": ["VENCIDA: factura 10"],
            "facturasAcueducto": [{
                "id": 10,
                "periodo": "2025-09",
                "estado": "VENCIDA",
                "consumoMetrosCubicos": 15,
                "valorPagar": 42500,
                "fechaVencimiento": "2025-10-05",
                "diasHastaVencimiento": -12
            }],
            "consumosEnergia": [{
                "periodo": "2025-09",
                "valido": true,
                "consumoKwh": 210,
                "valorPagar": 40000,
                "fechaLectura": "2025-09-30"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn login_then_inquiry_renders_debt() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = backend().await;

    // Main page without a session bounces to login.
    let mut gate = SessionGate::new(
        config(&server.uri()),
        MemoryStorage::new(),
        PageHost::new(Page::from_path("/")),
    )
    .unwrap();
    assert!(!gate.check_session(Page::Main));
    assert_eq!(gate.navigator().current(), Page::Login);
    assert!(gate.probe().await.is_connected());

    let session = gate.login("serviciudad", "dev2025").await.unwrap();
    assert!(matches!(session, Session::Authenticated { .. }));
    assert_eq!(gate.navigator().current(), Page::Main);
    assert!(gate.check_session(Page::from_path("/index.html")));

    let mut client = InquiryClient::new(config(&server.uri())).unwrap();
    client.input("0001234567");
    let summary = client
        .submit(gate.session_context())
        .await
        .unwrap()
        .clone();
    assert_eq!(client.state(), InquiryState::Displaying);

    let alerts: Vec<AlertKind> = summary
        .alertas
        .iter()
        .map(|alert| AlertKind::classify(alert))
        .collect();
    assert_eq!(alerts, vec![AlertKind::Danger]);

    let html = render(&summary, Format::Html);
    assert!(html.contains("$ 125.000"));
    assert!(html.contains("Ana Gómez"));
    assert_eq!(html.matches("alert-danger").count(), 1);

    let text = render(&summary, Format::Text);
    assert!(text.contains("$ 42.500"));
    assert!(text.contains("17 de octubre de 2025, 14:30"));

    gate.logout();
    assert!(!gate.check_session(Page::Main));
}

#[tokio::test]
async fn malformed_id_is_rejected_offline() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/deuda/cliente/12345"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = SessionContext::new(MemoryStorage::new());
    session.establish("serviciudad", chrono::Utc::now());

    let mut client = InquiryClient::new(config(&server.uri())).unwrap();
    let err = client.consult(&session, "12345").await.unwrap_err();

    assert_eq!(err.title(), "Formato inválido");
    assert!(err.is_local());
    assert_eq!(client.state(), InquiryState::Idle);
}

#[tokio::test]
async fn no_debt_request_after_logout() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/actuator/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/deuda/cliente/0001234567"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut gate = SessionGate::new(
        config(&server.uri()),
        MemoryStorage::new(),
        PageHost::new(Page::Login),
    )
    .unwrap();
    gate.login("serviciudad", "dev2025").await.unwrap();
    let mut client = InquiryClient::new(config(&server.uri())).unwrap();

    gate.logout();
    assert!(!gate.session().is_authenticated());

    let err = client
        .consult(gate.session_context(), "0001234567")
        .await
        .unwrap_err();
    assert_eq!(err, InquiryError::SessionExpired);
    assert_eq!(client.state(), InquiryState::Idle);
}
