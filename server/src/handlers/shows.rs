use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::Form;

use super::rejected;
use crate::utils::flash::Flash;
use crate::db;
use crate::forms::{FieldErrors, ShowForm};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::page;
use crate::views;

pub async fn list_shows(State(state): State<AppState>, flash: Flash) -> Result<Response, AppError> {
    let shows = db::shows::list(&state.db).await?;
    Ok(page(views::shows::listing(&flash.take(), &shows)))
}

pub async fn create_show_form(State(state): State<AppState>, flash: Flash) -> Response {
    page(views::forms::show_form(
        &flash.take(),
        &ShowForm::starting_at(state.clock.now()),
        &FieldErrors::default(),
    ))
}

pub async fn create_show_submission(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<ShowForm>,
) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(errors = %errors, "Rejected show submission");
            return rejected(views::forms::show_form(&flash.take(), &form, &errors));
        }
    };

    match db::shows::create(&state.db, &input).await {
        Ok(_) => flash.push("Show was successfully listed!"),
        Err(e) => {
            e.log();
            flash.push("An error occurred. Show could not be listed.");
        }
    }

    page(views::pages::home(&flash.take()))
}
