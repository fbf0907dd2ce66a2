use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;

use plainify::application::ports::{CacheStore, FileLoader, LlmClient};
use plainify::application::services::{InputResolver, SimplificationService, WordInfoService};
use plainify::infrastructure::cache::InMemoryCacheStore;
use plainify::infrastructure::llm::{MockLlmClient, OpenAiClient};
use plainify::infrastructure::observability::{TracingConfig, init_tracing};
use plainify::infrastructure::text_processing::CompositeFileLoader;
use plainify::presentation::access::AccessPolicy;
use plainify::presentation::config::{LlmProvider, LlmSettings};
use plainify::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let llm_client = build_llm_client(&settings.llm);
    let file_loader: Arc<dyn FileLoader> = Arc::new(CompositeFileLoader::with_document_limit(
        settings.limits.max_document_bytes(),
    ));
    let cache_store: Arc<dyn CacheStore> = Arc::new(InMemoryCacheStore::new());

    let simplification_service = Arc::new(SimplificationService::new(
        InputResolver::new(file_loader, settings.limits.word_limit),
        Arc::clone(&llm_client),
        cache_store,
    ));
    let word_info_service = Arc::new(WordInfoService::new(Arc::clone(&llm_client)));

    let access_policy = AccessPolicy::from_settings(&settings.access);
    if settings.access.allowed_origins.is_empty() {
        tracing::warn!("No allowed origins configured; only loopback and the extension are allowed");
    }

    let state = AppState {
        simplification_service,
        word_info_service,
        access_policy: Arc::new(access_policy),
        max_upload_bytes: settings.limits.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = settings
        .bind_address()
        .parse()
        .with_context(|| format!("invalid bind address {}", settings.bind_address()))?;

    if settings.server.deploy {
        let tls = settings
            .server
            .tls
            .as_ref()
            .context("server.deploy requires server.tls.cert_path and server.tls.key_path")?;
        let rustls_config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
            .await
            .context("failed to load TLS certificate or key")?;

        tracing::info!(%addr, "Listening with TLS");
        axum_server::bind_rustls(addr, rustls_config)
            .serve(router.into_make_service())
            .await?;
    } else {
        tracing::info!(%addr, "Listening");
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;
    }

    Ok(())
}

fn build_llm_client(settings: &LlmSettings) -> Arc<dyn LlmClient> {
    match settings.provider {
        LlmProvider::OpenAi => {
            if settings.api_key.is_empty() {
                tracing::warn!("llm.api_key is empty; the completion API will reject requests");
            }
            tracing::info!(
                model = %settings.chat_model,
                base_url = %settings.base_url,
                "Using OpenAI-compatible client"
            );
            Arc::new(OpenAiClient::from_settings(settings))
        }
        LlmProvider::Mock => {
            tracing::warn!("Using mock LLM client; replies are canned");
            Arc::new(MockLlmClient::default())
        }
    }
}
