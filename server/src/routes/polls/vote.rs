use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{
    get_conn,
    models::{Choice, Question, NO_CHOICE_SELECTED},
    DbPool,
};
use errors::Error;

use super::results::{load_results, ResultsResponse};
use crate::validate::validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct VoteParams {
    #[validate(
        required(message = "You didn't select a choice."),
        range(min = 1, message = "choice must be a positive id")
    )]
    #[serde(default)]
    pub choice: Option<i32>,
}

pub async fn vote(
    question_id: Path<i32>,
    pool: Data<DbPool>,
    params: Json<VoteParams>,
) -> Result<Json<ResultsResponse>, Error> {
    validate(&params.0)?;

    let question_id = question_id.into_inner();
    let choice_id = params
        .choice
        .ok_or_else(|| Error::BadRequest(NO_CHOICE_SELECTED.to_string()))?;

    let response = block(move || -> Result<ResultsResponse, Error> {
        let mut conn = get_conn(&pool)?;
        let question = Question::find_published(&mut conn, question_id, Utc::now())?;
        Choice::vote(&mut conn, question.id, choice_id)?;

        load_results(&mut conn, question)
    })
    .await??;

    Ok(Json(response))
}
