use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, Question},
    Connection, DbPool,
};
use errors::Error;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ChoiceResult {
    pub id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ResultsResponse {
    pub id: i32,
    pub question_text: String,
    pub choices: Vec<ChoiceResult>,
}

/// Vote counts for every choice of `question`.
pub fn load_results(conn: &mut Connection, question: Question) -> Result<ResultsResponse, Error> {
    let choices = Choice::find_by_question(conn, &question)?;

    Ok(ResultsResponse {
        id: question.id,
        question_text: question.question_text,
        choices: choices
            .into_iter()
            .map(|choice| ChoiceResult {
                id: choice.id,
                choice_text: choice.choice_text,
                votes: choice.votes,
            })
            .collect(),
    })
}

pub async fn results(
    question_id: Path<i32>,
    pool: Data<DbPool>,
) -> Result<Json<ResultsResponse>, Error> {
    let question_id = question_id.into_inner();

    let response = block(move || -> Result<ResultsResponse, Error> {
        let mut conn = get_conn(&pool)?;
        let question = Question::find_published(&mut conn, question_id, Utc::now())?;

        load_results(&mut conn, question)
    })
    .await??;

    Ok(Json(response))
}
