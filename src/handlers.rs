use crate::errors::AppError;
use crate::models::{NewEntryRequest, StreaksResponse, WordEntry};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::streaks::build_streaks;
use crate::ui::render_index;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use chrono::{DateTime, Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let streaks = build_streaks(&data);
    Html(render_index(&today_string(), &streaks))
}

pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<WordEntry>>, AppError> {
    let data = state.data.lock().await;
    let mut entries = data.entries.clone();
    entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    Ok(Json(entries))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryRequest>,
) -> Result<(StatusCode, Json<WordEntry>), AppError> {
    let date = parse_entry_date(&payload.date)?;
    let description = payload
        .description
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    let mut data = state.data.lock().await;
    let entry = WordEntry {
        id: data.next_id(),
        word_count: payload.word_count,
        date,
        description,
    };
    data.entries.push(entry.clone());

    persist_data(&state.data_path, &data).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_streaks(State(state): State<AppState>) -> Result<Json<StreaksResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_streaks(&data)))
}

/// Accepts an RFC 3339 instant (the form posts local midnight) or a bare
/// calendar date; only the calendar date survives.
fn parse_entry_date(raw: &str) -> Result<NaiveDate, AppError> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be RFC 3339 or YYYY-MM-DD"))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
