//! End-to-end source loading against a local `tiny_http` fixture server.

use std::time::Duration;

use labref_config::SourcesConfig;
use labref_core::defaults;
use labref_sources::{SourceClient, SourceError};
use pretty_assertions::assert_eq;

struct Route {
    path: &'static str,
    status: u16,
    body: &'static str,
    delay: Duration,
}

const fn route(path: &'static str, status: u16, body: &'static str) -> Route {
    Route {
        path,
        status,
        body,
        delay: Duration::ZERO,
    }
}

/// Serve `routes` on a random local port; unknown paths get a 404.
fn serve(routes: Vec<Route>) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fixture server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .expect("fixture server port");

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let found = routes.iter().find(|r| r.path == request.url());
            let response = match found {
                Some(r) => {
                    std::thread::sleep(r.delay);
                    tiny_http::Response::from_string(r.body).with_status_code(r.status)
                }
                None => tiny_http::Response::from_string("not found").with_status_code(404),
            };
            let _ = request.respond(response);
        }
    });

    format!("http://127.0.0.1:{port}")
}

const HP_JSON: &str = r#"{
    "hpstatements": [
        { "code": "H225", "statement": "Líquido y vapores muy inflamables." },
        { "code": "h314", "statement": "Provoca quemaduras graves en la piel." },
        { "code": "P210", "statement": "Mantener alejado del calor." },
        { "code": "EUH014", "statement": "Reacciona violentamente con el agua." },
        { "code": "P280" }
    ]
}"#;

const GHS_JSON: &str = r#"{ "pictograms": [
    { "ghs_id": "GHS01", "descripcion": "Explosivo", "icon_url": "a.svg", "detalle": "Explosivo" },
    { "ghs_id": "GHS02", "descripcion": "Inflamable", "icon_url": "b.svg", "detalle": "Inflamable" }
] }"#;

const CAS_CSV: &str = "cas_id,nombre,categoria\n7732-18-5,Agua,Inorgánico\n123-45-6,,X\n";

fn client(timeout: Duration) -> SourceClient {
    SourceClient::new(timeout, "labref-test").expect("client builds")
}

#[tokio::test]
async fn loads_all_remote_datasets() {
    let base = serve(vec![
        route("/hp.json", 200, HP_JSON),
        route("/ghs.json", 200, GHS_JSON),
        route("/cas.csv", 200, CAS_CSV),
    ]);
    let config = SourcesConfig {
        hp_url: format!("{base}/hp.json"),
        pictograms_url: format!("{base}/ghs.json"),
        cas_url: format!("{base}/cas.csv"),
        ..SourcesConfig::default()
    };

    let set = client(Duration::from_secs(5))
        .load_all(&config)
        .await
        .expect("load succeeds");

    let hazards: Vec<&str> = set.hazard_codes.iter().map(|h| h.code.as_str()).collect();
    let precautions: Vec<&str> = set
        .precaution_codes
        .iter()
        .map(|p| p.code.as_str())
        .collect();
    assert_eq!(hazards, vec!["H225", "h314"]);
    assert_eq!(precautions, vec!["P210"]);
    assert_eq!(set.pictograms.len(), 2);
    assert_eq!(set.cas_entries.len(), 1);
    assert_eq!(set.cas_entries[0].nombre, "Agua");
}

#[tokio::test]
async fn builtin_defaults_when_only_statements_are_remote() {
    let base = serve(vec![route("/hp.json", 200, HP_JSON)]);
    let config = SourcesConfig {
        hp_url: format!("{base}/hp.json"),
        ..SourcesConfig::default()
    };

    let set = client(Duration::from_secs(5))
        .load_all(&config)
        .await
        .expect("load succeeds");
    assert_eq!(set.pictograms, defaults::pictograms());
    assert_eq!(set.cas_entries, defaults::cas_sample());
}

#[tokio::test]
async fn http_error_status_aborts_the_load() {
    let base = serve(vec![
        route("/hp.json", 200, HP_JSON),
        route("/ghs.json", 500, "upstream exploded"),
    ]);
    let config = SourcesConfig {
        hp_url: format!("{base}/hp.json"),
        pictograms_url: format!("{base}/ghs.json"),
        ..SourcesConfig::default()
    };

    let err = client(Duration::from_secs(5))
        .load_all(&config)
        .await
        .unwrap_err();
    assert!(
        matches!(err, SourceError::Api { status: 500, ref message } if message == "upstream exploded"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn missing_statement_dataset_is_fatal() {
    let base = serve(vec![]);
    let err = client(Duration::from_secs(5))
        .load_statement_codes(&format!("{base}/missing.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, SourceError::Api { status: 404, .. }));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let base = serve(vec![route("/hp.json", 200, "<html>maintenance</html>")]);
    let err = client(Duration::from_secs(5))
        .load_statement_codes(&format!("{base}/hp.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, SourceError::Json { .. }));
}

#[tokio::test]
async fn unrecognized_json_yields_empty_sets() {
    let base = serve(vec![route("/hp.json", 200, r#"{ "version": 3 }"#)]);
    let codes = client(Duration::from_secs(5))
        .load_statement_codes(&format!("{base}/hp.json"))
        .await
        .expect("shape drift is not an error");
    assert!(codes.hazards.is_empty());
    assert!(codes.precautions.is_empty());
}

#[tokio::test]
async fn slow_source_times_out() {
    let base = serve(vec![Route {
        path: "/slow.json",
        status: 200,
        body: "[]",
        delay: Duration::from_secs(3),
    }]);
    let err = client(Duration::from_millis(300))
        .load_statement_codes(&format!("{base}/slow.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, SourceError::Timeout { .. }), "unexpected error: {err}");
}
