use axum::response::Html;
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use shared::adapters::openapi::API_VERSION_TAG;

use crate::router::TextService;

pub const SERVICE_ROUTE_KEY: &str = "guide";

const GUIDE_HTML: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="utf-8">
    <title>Plumier</title>
    <style>
        body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
        code { background: #f2f2f2; padding: 0.1rem 0.3rem; border-radius: 3px; }
        li { margin: 0.5rem 0; }
    </style>
</head>
<body>
    <h1>Plumier</h1>
    <p>Passerelle de traitement de texte basée sur l'API Sapling.</p>
    <h2>Routes disponibles</h2>
    <ul>
        <li><code>GET /rephrase?sapling=votre+texte</code> : reformule un texte informel en langage soutenu.</li>
        <li><code>GET /sapling_grammar?edite=votre+texte</code> : corrige la grammaire et l'orthographe d'un texte.</li>
        <li><code>GET /autocomplete?sapling_phras=votre+phrase</code> : propose la suite d'une phrase incomplète.</li>
        <li><code>GET /ai?detection=votre+texte</code> : estime la probabilité qu'un texte soit généré par une IA.</li>
        <li><code>POST /summarize</code> avec le corps JSON <code>{"text": "votre texte"}</code> : résume un texte.</li>
    </ul>
    <p>Chaque réponse est renvoyée au format JSON. En cas de paramètre manquant, la passerelle répond
    <code>400</code> avec un champ <code>error</code> décrivant le paramètre attendu.</p>
</body>
</html>
"#;

pub fn create_router() -> OpenApiRouter<Arc<TextService>> {
    OpenApiRouter::new().routes(routes!(route_guide))
}

#[utoipa::path(
    get,
    path = "/",
    tags = [SERVICE_ROUTE_KEY, API_VERSION_TAG],
    responses(
        (status = 200, description = "Usage guide", content_type = "text/html", body = String),
    ),
    summary = "Usage guide",
    description = "HTML page describing every gateway route",
    operation_id = "usage-guide",
)]
async fn route_guide() -> Html<&'static str> {
    Html(GUIDE_HTML)
}
