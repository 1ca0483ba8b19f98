use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use anonymization_service::AnonymizationResult;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::server::MedscrubServer;

/// Request body for text anonymization
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnonymizeTextRequest {
    /// Medical note text to anonymize
    #[schema(example = "Patient John Doe visited on March 5th.")]
    pub text: String,
}

/// An entity the recognizer reported
#[derive(Debug, Serialize, ToSchema)]
pub struct DetectedEntity {
    /// Entity label
    #[schema(example = "PERSON")]
    pub label: String,
    /// Surface text the label was assigned to
    #[schema(example = "John Doe")]
    pub text: String,
    /// Whether occurrences of the surface text were replaced
    pub replaced: bool,
}

/// Response for text anonymization
#[derive(Debug, Serialize, ToSchema)]
pub struct AnonymizeTextResponse {
    /// Anonymized note text
    #[schema(example = "Patient [PERSON] visited on [DATE].")]
    pub anonymized_text: String,
    /// Entities the recognizer reported
    pub entities: Vec<DetectedEntity>,
    /// Recognition engine that produced the spans
    #[schema(example = "pattern")]
    pub recognizer: String,
}

/// Response for audio anonymization
#[derive(Debug, Serialize, ToSchema)]
pub struct AnonymizeAudioResponse {
    /// Raw transcript returned by the speech-to-text provider; empty when
    /// the provider call failed or returned an unexpected shape
    pub transcript: String,
    /// Anonymized transcript
    pub anonymized_transcript: String,
    /// Transcription provider used
    #[schema(example = "deepgram")]
    pub provider: String,
    /// Entities the recognizer reported in the transcript
    pub entities: Vec<DetectedEntity>,
}

fn detected_entities(result: &AnonymizationResult) -> Vec<DetectedEntity> {
    result
        .entities
        .iter()
        .map(|span| DetectedEntity {
            label: span.label.to_string(),
            text: span.text.clone(),
            replaced: span.label.is_sensitive(),
        })
        .collect()
}

/// Anonymize pasted medical note text
#[utoipa::path(
    post,
    path = "/api/v1/anonymize/text",
    tag = "anonymize",
    request_body = AnonymizeTextRequest,
    responses(
        (status = 200, description = "Note anonymized", body = AnonymizeTextResponse),
        (status = 400, description = "Empty note text", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn anonymize_text(
    State(server): State<MedscrubServer>,
    Json(request): Json<AnonymizeTextRequest>,
) -> Result<Json<ApiResponse<AnonymizeTextResponse>>, ApiError> {
    // The anonymizer is never invoked for empty input; reject up front.
    if request.text.trim().is_empty() {
        return Err(ApiError::validation("Please enter some text to anonymize"));
    }

    let result = server.anonymizer.anonymize(&request.text);
    info!(
        entity_count = result.entities.len(),
        "Anonymized pasted note"
    );

    let entities = detected_entities(&result);
    Ok(Json(api_success(AnonymizeTextResponse {
        anonymized_text: result.text,
        entities,
        recognizer: result.recognizer,
    })))
}

/// Transcribe and anonymize an uploaded medical note recording.
///
/// Accepts `multipart/form-data` with the recording in an `audio` field.
/// The transcript is best effort: a failed provider call produces an empty
/// transcript, not an error.
#[utoipa::path(
    post,
    path = "/api/v1/anonymize/audio",
    tag = "anonymize",
    responses(
        (status = 200, description = "Recording transcribed and anonymized", body = AnonymizeAudioResponse),
        (status = 400, description = "Missing, empty, or oversized audio upload", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn anonymize_audio(
    State(server): State<MedscrubServer>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<AnonymizeAudioResponse>>, ApiError> {
    let mut audio: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart payload: {}", e)))?
    {
        if field.name() == Some("audio") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read audio field: {}", e)))?;
            audio = Some(bytes.to_vec());
        }
    }

    let audio = audio
        .ok_or_else(|| ApiError::validation("Upload an audio file in the 'audio' field"))?;

    if audio.is_empty() {
        return Err(ApiError::validation("Uploaded audio file is empty"));
    }

    let max_audio_bytes = server.transcription.max_audio_bytes();
    if audio.len() > max_audio_bytes {
        return Err(ApiError::validation(format!(
            "Audio upload exceeds the {} byte limit",
            max_audio_bytes
        )));
    }

    let transcript = server.transcription.transcribe_audio(&audio).await;
    let result = server.anonymizer.anonymize(&transcript.text);
    info!(
        provider = %transcript.provider,
        transcript_len = transcript.text.len(),
        entity_count = result.entities.len(),
        "Transcribed and anonymized recording"
    );

    let entities = detected_entities(&result);
    Ok(Json(api_success(AnonymizeAudioResponse {
        transcript: transcript.text,
        anonymized_transcript: result.text,
        provider: transcript.provider,
        entities,
    })))
}
