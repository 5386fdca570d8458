use crate::config::Settings;
use crate::error::UploadError;
use crate::ingest::{ingest_kind, Outcome};
use crate::services::uploads::report;
use crate::store::Store;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::kind::UploadKind;
use futures_util::StreamExt;
use log::info;
use uuid::Uuid;

const FILE_FIELD: &str = "file";

pub async fn summary_sales(
    payload: Multipart,
    store: web::Data<Store>,
    settings: web::Data<Settings>,
) -> impl Responder {
    process(UploadKind::SummarySales, payload, store, settings).await
}

pub async fn sales_ledger(
    payload: Multipart,
    store: web::Data<Store>,
    settings: web::Data<Settings>,
) -> impl Responder {
    process(UploadKind::SalesLedger, payload, store, settings).await
}

pub async fn tank_reading(
    payload: Multipart,
    store: web::Data<Store>,
    settings: web::Data<Settings>,
) -> impl Responder {
    process(UploadKind::TankReading, payload, store, settings).await
}

/// `POST /kind/{kind}`: the kind is taken from the path.
pub async fn by_kind(
    kind: web::Path<String>,
    payload: Multipart,
    store: web::Data<Store>,
    settings: web::Data<Settings>,
) -> HttpResponse {
    match kind.parse::<UploadKind>() {
        Ok(kind) => process(kind, payload, store, settings).await,
        Err(e) => report::unknown_kind(&e),
    }
}

/// Runs one upload and converts its result to the JSON envelope.
pub async fn process(
    kind: UploadKind,
    payload: Multipart,
    store: web::Data<Store>,
    settings: web::Data<Settings>,
) -> HttpResponse {
    let upload_id = Uuid::new_v4().to_string();
    info!("[{}] {} upload started", upload_id, kind);

    match upload(kind, payload, &store, settings.max_upload_bytes, &upload_id).await {
        Ok(outcome) => report::outcome(kind, &upload_id, outcome),
        Err(e) => report::failure(&upload_id, e),
    }
}

async fn upload(
    kind: UploadKind,
    payload: Multipart,
    store: &Store,
    limit: usize,
    upload_id: &str,
) -> Result<Outcome, UploadError> {
    let bytes = read_file_field(payload, limit).await?;
    let text = decode(&bytes);

    let store = store.clone();
    let upload_id = upload_id.to_string();
    tokio::task::spawn_blocking(move || ingest_kind(kind, &store, &text, &upload_id))
        .await
        .map_err(|e| UploadError::Task(e.to_string()))?
}

/// Collects the bytes of the `file` field, failing once they pass `limit`.
/// Other fields are drained and ignored.
async fn read_file_field(mut payload: Multipart, limit: usize) -> Result<Vec<u8>, UploadError> {
    let mut file: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match field_name.as_deref() {
            Some(FILE_FIELD) => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    if bytes.len() + chunk.len() > limit {
                        return Err(UploadError::FileTooLarge { limit });
                    }
                    bytes.extend_from_slice(&chunk);
                }
                file = Some(bytes);
            }
            _ => {
                while let Some(chunk) = field.next().await {
                    chunk?;
                }
            }
        }
    }

    file.ok_or(UploadError::MissingFile)
}

/// Decodes the upload as UTF-8, replacing invalid sequences and dropping a BOM.
fn decode(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&*text).to_string()
}
