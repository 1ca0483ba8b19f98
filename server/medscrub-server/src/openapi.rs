use utoipa::OpenApi;

use crate::error::ApiErrorResponse;
use crate::handlers::{anonymize, health};

/// OpenAPI documentation for the MedScrub API
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::version_info,
        anonymize::anonymize_text,
        anonymize::anonymize_audio,
    ),
    components(schemas(
        health::HealthResponse,
        health::VersionResponse,
        anonymize::AnonymizeTextRequest,
        anonymize::AnonymizeTextResponse,
        anonymize::AnonymizeAudioResponse,
        anonymize::DetectedEntity,
        ApiErrorResponse,
    )),
    tags(
        (name = "health", description = "Service health and version"),
        (name = "anonymize", description = "Medical note anonymization")
    ),
    info(
        title = "MedScrub Engine API",
        description = "Transcribe medical note audio and anonymize sensitive entities"
    )
)]
pub struct ApiDoc;
