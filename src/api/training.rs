use axum::{extract::State, response::Html, Extension};

use crate::error::AppError;
use crate::models::PublicUser;
use crate::services::TrainingService;
use crate::views::{render, TrainingPage};

/// Training catalog. Only reachable behind `require_auth`.
#[tracing::instrument(skip_all)]
pub async fn training_page(
    State(trainings): State<TrainingService>,
    Extension(user): Extension<PublicUser>,
) -> Result<Html<String>, AppError> {
    let trainings = trainings.get_trainings().await?;
    render(&TrainingPage::new(user, trainings))
}
