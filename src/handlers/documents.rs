use crate::helpers::documents::detect_format;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, UploadReceipt};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use tracing::{info, instrument, warn};

/// Accept a policy document for later analysis
///
/// Receipt only: the file is read off the wire and acknowledged, but no
/// parsing or benefit extraction happens yet. PDF and CSV are the only
/// accepted formats, matching what the renewal-letter intake expects.
#[utoipa::path(
    post,
    path = "/api/v1/documents",
    tag = "documents",
    responses(
        (status = 202, description = "Document received", body = ApiResponse<UploadReceipt>),
        (status = 400, description = "Missing or unreadable file field", body = ErrorResponse),
        (status = 415, description = "Unsupported document format", body = ErrorResponse)
    )
)]
#[instrument(skip(multipart))]
pub async fn upload_document(
    State(_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadReceipt>>), (StatusCode, Json<ErrorResponse>)> {
    // Find the "file" part; other parts are ignored
    while let Some(field) = multipart.next_field().await.map_err(|_| {
        intake_error(
            StatusCode::BAD_REQUEST,
            "MALFORMED_MULTIPART",
            "Could not read the multipart request body",
        )
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("document").to_string();
        let content_type = field.content_type().map(|ct| ct.to_string());

        let format = match detect_format(&file_name, content_type.as_deref()) {
            Some(format) => format,
            None => {
                warn!(%file_name, ?content_type, "Rejected document with unsupported format");
                return Err(intake_error(
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "UNSUPPORTED_FORMAT",
                    "Only PDF and CSV documents are accepted",
                ));
            }
        };

        let bytes = field.bytes().await.map_err(|_| {
            intake_error(
                StatusCode::BAD_REQUEST,
                "UNREADABLE_FILE",
                "Could not read the uploaded file",
            )
        })?;

        info!(
            %file_name,
            size_bytes = bytes.len(),
            format = format.as_str(),
            "Policy document received"
        );

        let receipt = UploadReceipt {
            file_name,
            size_bytes: bytes.len(),
            format: format.as_str().to_string(),
            status: "received".to_string(),
        };

        let response = ApiResponse {
            data: receipt,
            message: "File uploaded successfully! Analysis running...".to_string(),
            success: true,
        };

        return Ok((StatusCode::ACCEPTED, Json(response)));
    }

    // No "file" part in the request
    Err(intake_error(
        StatusCode::BAD_REQUEST,
        "MISSING_FILE",
        "Multipart request did not contain a \"file\" field",
    ))
}

fn intake_error(
    status: StatusCode,
    code: &str,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
            code: code.to_string(),
            success: false,
        }),
    )
}
