use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_test::{assert_err, assert_ok};

use car_configurator::catalog::{Engine, Model, Pack};
use car_configurator::solver::SolveOutcome;
use car_configurator::state::Banner;
use car_configurator::{Assignment, Configurator, HttpSolver, SolverBackend, SolverConfig, SolverError, Value, Variable};

type Received = Arc<Mutex<Vec<JsonValue>>>;

/// Stub solver service answering every request with `reply`
async fn serve(status: StatusCode, reply: JsonValue) -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    let handler = move |State(received): State<Received>, Json(body): Json<JsonValue>| {
        let reply = reply.clone();
        async move {
            received.lock().await.push(body);
            (status, Json(reply))
        }
    };

    let app = Router::new()
        .route("/propagate", post(handler.clone()))
        .route("/solve", post(handler))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), received)
}

fn solver_at(base_url: &str) -> HttpSolver {
    let config = SolverConfig {
        base_url: base_url.to_string(),
        timeout: Some(Duration::from_secs(5)),
    };
    HttpSolver::new(&config).unwrap()
}

#[tokio::test]
async fn test_propagate_sends_every_variable_and_decodes_domains() {
    let (url, received) = serve(
        StatusCode::OK,
        json!({
            "domains": {
                "model": ["civic", "golf"],
                "engine": ["petrol_1_5", "hybrid"],
                "pack": ["base"]
            },
            "valid": true
        }),
    )
    .await;
    let solver = solver_at(&url);

    let assignment = Assignment { model: Some(Model::Civic), ..Default::default() };
    let response = assert_ok!(solver.propagate(&assignment).await);

    assert!(response.valid);
    assert!(response.domains.contains(Value::Model(Model::Golf)));
    assert!(response.domains.contains(Value::Engine(Engine::Hybrid)));
    assert_eq!(response.domains.get(Variable::Pack).len(), 1);
    // Left out by the service: nothing reachable
    assert!(response.domains.get(Variable::Color).is_empty());

    let bodies = received.lock().await;
    assert_eq!(
        bodies[0],
        json!({
            "assignments": {
                "model": "civic",
                "engine": null,
                "transmission": null,
                "drivetrain": null,
                "color": null,
                "interior": null,
                "pack": null
            }
        })
    );
}

#[tokio::test]
async fn test_solve_decodes_complete_configuration() {
    let (url, _) = serve(
        StatusCode::OK,
        json!({
            "status": "FEASIBLE",
            "configuration": {
                "model": "330i",
                "engine": "petrol_2_0",
                "transmission": "automatic",
                "drivetrain": "rwd",
                "color": "black",
                "interior": "premium_leather",
                "pack": "luxury"
            }
        }),
    )
    .await;

    let outcome = assert_ok!(solver_at(&url).solve(&Assignment::default()).await);
    let configuration = outcome.configuration().copied().unwrap();
    assert_eq!(configuration.model, Model::Bmw330i);
    assert_eq!(configuration.pack, Pack::Luxury);
}

#[tokio::test]
async fn test_solve_infeasible_status() {
    let (url, _) = serve(StatusCode::OK, json!({ "status": "INFEASIBLE" })).await;

    let outcome = assert_ok!(solver_at(&url).solve(&Assignment::default()).await);
    assert_eq!(outcome, SolveOutcome::Infeasible);
}

#[tokio::test]
async fn test_error_status_is_reported_with_operation() {
    let (url, _) = serve(StatusCode::INTERNAL_SERVER_ERROR, json!({ "detail": "boom" })).await;

    let err = assert_err!(solver_at(&url).propagate(&Assignment::default()).await);
    assert_eq!(err, SolverError::Status { operation: "propagate", status: 500 });
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_unknown_token_fails_decoding() {
    let (url, _) = serve(StatusCode::OK, json!({ "domains": { "engine": ["v12"] }, "valid": true })).await;

    let err = assert_err!(solver_at(&url).propagate(&Assignment::default()).await);
    assert!(matches!(err, SolverError::Decode { operation: "propagate", .. }));
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = assert_err!(solver_at(&format!("http://{}", addr)).solve(&Assignment::default()).await);
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let solver = solver_at("http://127.0.0.1:8000/");
    assert_eq!(solver.base_url(), "http://127.0.0.1:8000");
}

#[tokio::test]
async fn test_configurator_over_http() {
    let (url, received) = serve(
        StatusCode::OK,
        json!({ "domains": { "model": ["x3"], "drivetrain": ["awd"] }, "valid": true }),
    )
    .await;
    let configurator = Configurator::new(Arc::new(solver_at(&url)));

    assert_ok!(configurator.select(Value::Model(Model::X3)).await);

    let session = configurator.snapshot().await;
    assert_eq!(session.banner(), Banner::Feasible);
    assert_eq!(session.assignment().model, Some(Model::X3));
    assert_eq!(received.lock().await[0]["assignments"]["model"], json!("x3"));
}
