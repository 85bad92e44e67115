use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::Form;

use super::{rejected, RecordId, SearchForm};
use crate::db;
use crate::forms::{FieldErrors, VenueForm};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::flash::Flash;
use crate::utils::response::{page, see_other};
use crate::views;
use crate::views::forms::FormTarget;

pub async fn list_venues(State(state): State<AppState>, flash: Flash) -> Result<Response, AppError> {
    let areas = db::venues::list_grouped(&state.db, state.clock.now()).await?;
    Ok(page(views::venues::listing(&flash.take(), &areas)))
}

pub async fn search_venues(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let results = db::venues::search(&state.db, &form.search_term, state.clock.now()).await?;
    Ok(page(views::venues::search(
        &flash.take(),
        &form.search_term,
        &results,
    )))
}

pub async fn show_venue(
    State(state): State<AppState>,
    flash: Flash,
    RecordId(venue_id): RecordId,
) -> Result<Response, AppError> {
    let venue = db::venues::detail(&state.db, venue_id, state.clock.now()).await?;
    Ok(page(views::venues::detail(&flash.take(), &venue)))
}

pub async fn create_venue_form(flash: Flash) -> Response {
    page(views::forms::venue_form(
        &flash.take(),
        FormTarget::Create,
        &VenueForm::default(),
        &FieldErrors::default(),
    ))
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<VenueForm>,
) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(errors = %errors, "Rejected venue submission");
            return rejected(views::forms::venue_form(
                &flash.take(),
                FormTarget::Create,
                &form,
                &errors,
            ));
        }
    };

    match db::venues::create(&state.db, &input).await {
        Ok(_) => flash.push(format!("Venue {} was successfully listed!", input.name)),
        Err(e) => {
            e.log();
            flash.push(format!(
                "An error occurred. Venue {} could not be listed.",
                input.name
            ));
        }
    }

    page(views::pages::home(&flash.take()))
}

pub async fn delete_venue(
    State(state): State<AppState>,
    flash: Flash,
    RecordId(venue_id): RecordId,
) -> Response {
    match db::venues::delete(&state.db, venue_id).await {
        Ok(true) => flash.push(format!("Venue {venue_id} was successfully deleted.")),
        Ok(false) => flash.push(format!("Venue {venue_id} does not exist, nothing was deleted.")),
        Err(e) => {
            e.log();
            flash.push(format!(
                "An error occurred. Venue {venue_id} could not be deleted."
            ));
        }
    }

    page(views::pages::home(&flash.take()))
}

pub async fn edit_venue(
    State(state): State<AppState>,
    flash: Flash,
    RecordId(venue_id): RecordId,
) -> Result<Response, AppError> {
    let venue = db::venues::find(&state.db, venue_id).await?;
    Ok(page(views::forms::venue_form(
        &flash.take(),
        FormTarget::Edit {
            id: venue.id,
            name: &venue.name,
        },
        &VenueForm::from_venue(&venue),
        &FieldErrors::default(),
    )))
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    flash: Flash,
    RecordId(venue_id): RecordId,
    Form(form): Form<VenueForm>,
) -> Result<Response, AppError> {
    let venue = db::venues::find(&state.db, venue_id).await?;

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(venue_id, errors = %errors, "Rejected venue edit");
            return Ok(rejected(views::forms::venue_form(
                &flash.take(),
                FormTarget::Edit {
                    id: venue.id,
                    name: &venue.name,
                },
                &form,
                &errors,
            )));
        }
    };

    match db::venues::update(&state.db, venue_id, &input).await {
        Ok(()) => flash.push(format!("Venue {} was successfully updated!", input.name)),
        Err(e @ AppError::NotFound(_)) => return Err(e),
        Err(e) => {
            e.log();
            flash.push(format!(
                "An error occurred. Venue {} could not be updated.",
                venue.name
            ));
        }
    }

    Ok(see_other(&format!("/venues/{venue_id}")))
}
