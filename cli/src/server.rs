#[cfg(feature = "server")]
pub mod http {
    use crate::formatter::{variables_json, VariableJson};
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use labbook::{Engine, Evaluation, EvaluationOptions, Grammar, ResourceLimits};
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tracing::{info, warn};

    /// One engine per grammar, shared by all requests
    pub struct AppState {
        legacy: Engine,
        standard: Engine,
    }

    impl AppState {
        pub fn new(limits: ResourceLimits) -> Self {
            let options = EvaluationOptions::default().with_limits(limits);
            Self {
                legacy: Engine::with_options(options.clone().with_grammar(Grammar::Legacy)),
                standard: Engine::with_options(options.with_grammar(Grammar::Standard)),
            }
        }

        fn engine(&self, grammar: Grammar) -> &Engine {
            match grammar {
                Grammar::Legacy => &self.legacy,
                Grammar::Standard => &self.standard,
            }
        }
    }

    type SharedState = Arc<AppState>;

    #[derive(Debug, Deserialize)]
    struct EvaluateRequest {
        text: String,
        #[serde(default)]
        grammar: Option<Grammar>,
    }

    #[derive(Debug, Serialize)]
    struct EvaluateResponse {
        variables: Vec<VariableJson>,
        diagnostics: Vec<DiagnosticJson>,
        warnings: Vec<String>,
    }

    #[derive(Debug, Serialize)]
    struct DiagnosticJson {
        line: usize,
        source: String,
        message: String,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    pub fn router(state: SharedState) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/evaluate", post(evaluate_post))
            .with_state(state)
    }

    pub async fn start_server(limits: ResourceLimits, host: &str, port: u16) -> anyhow::Result<()> {
        let app = router(Arc::new(AppState::new(limits))).layer(CorsLayer::permissive());

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("LabBook server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "labbook",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn evaluate_post(
        State(state): State<SharedState>,
        Json(payload): Json<EvaluateRequest>,
    ) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
        let grammar = payload.grammar.unwrap_or_default();
        let engine = state.engine(grammar);

        engine.check_document_size(&payload.text).map_err(|e| {
            warn!("Rejected notebook: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

        let evaluation = engine.evaluate_lines(&payload.text);
        let response = convert_evaluation(&evaluation);

        info!(
            "Evaluated notebook with {} grammar: {} variables, {} dropped",
            grammar,
            response.variables.len(),
            response.diagnostics.len()
        );

        Ok(Json(response))
    }

    fn convert_evaluation(evaluation: &Evaluation) -> EvaluateResponse {
        let diagnostics = evaluation
            .dropped()
            .filter_map(|line| {
                line.error().map(|error| DiagnosticJson {
                    line: line.span.line,
                    source: line.source.clone(),
                    message: error.to_string(),
                })
            })
            .collect();

        EvaluateResponse {
            variables: variables_json(&evaluation.symbols),
            diagnostics,
            warnings: evaluation.warnings.iter().map(|w| w.message()).collect(),
        }
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _limits: labbook::ResourceLimits,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
