use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::Form;

use super::{rejected, RecordId, SearchForm};
use crate::db;
use crate::forms::{ArtistForm, FieldErrors};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::flash::Flash;
use crate::utils::response::{page, see_other};
use crate::views;
use crate::views::forms::FormTarget;

pub async fn list_artists(State(state): State<AppState>, flash: Flash) -> Result<Response, AppError> {
    let artists = db::artists::list(&state.db).await?;
    Ok(page(views::artists::listing(&flash.take(), &artists)))
}

pub async fn search_artists(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let results = db::artists::search(&state.db, &form.search_term, state.clock.now()).await?;
    Ok(page(views::artists::search(
        &flash.take(),
        &form.search_term,
        &results,
    )))
}

pub async fn show_artist(
    State(state): State<AppState>,
    flash: Flash,
    RecordId(artist_id): RecordId,
) -> Result<Response, AppError> {
    let artist = db::artists::detail(&state.db, artist_id, state.clock.now()).await?;
    Ok(page(views::artists::detail(&flash.take(), &artist)))
}

pub async fn create_artist_form(flash: Flash) -> Response {
    page(views::forms::artist_form(
        &flash.take(),
        FormTarget::Create,
        &ArtistForm::default(),
        &FieldErrors::default(),
    ))
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<ArtistForm>,
) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(errors = %errors, "Rejected artist submission");
            return rejected(views::forms::artist_form(
                &flash.take(),
                FormTarget::Create,
                &form,
                &errors,
            ));
        }
    };

    match db::artists::create(&state.db, &input).await {
        Ok(_) => flash.push(format!("Artist {} was successfully listed!", input.name)),
        Err(e) => {
            e.log();
            flash.push(format!(
                "An error occurred. Artist {} could not be listed.",
                input.name
            ));
        }
    }

    page(views::pages::home(&flash.take()))
}

pub async fn edit_artist(
    State(state): State<AppState>,
    flash: Flash,
    RecordId(artist_id): RecordId,
) -> Result<Response, AppError> {
    let artist = db::artists::find(&state.db, artist_id).await?;
    Ok(page(views::forms::artist_form(
        &flash.take(),
        FormTarget::Edit {
            id: artist.id,
            name: &artist.name,
        },
        &ArtistForm::from_artist(&artist),
        &FieldErrors::default(),
    )))
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    flash: Flash,
    RecordId(artist_id): RecordId,
    Form(form): Form<ArtistForm>,
) -> Result<Response, AppError> {
    let artist = db::artists::find(&state.db, artist_id).await?;

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(artist_id, errors = %errors, "Rejected artist edit");
            return Ok(rejected(views::forms::artist_form(
                &flash.take(),
                FormTarget::Edit {
                    id: artist.id,
                    name: &artist.name,
                },
                &form,
                &errors,
            )));
        }
    };

    match db::artists::update(&state.db, artist_id, &input).await {
        Ok(()) => flash.push(format!("Artist {} was successfully updated!", input.name)),
        Err(e @ AppError::NotFound(_)) => return Err(e),
        Err(e) => {
            e.log();
            flash.push(format!(
                "An error occurred. Artist {} could not be updated.",
                artist.name
            ));
        }
    }

    Ok(see_other(&format!("/artists/{artist_id}")))
}
