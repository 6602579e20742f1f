use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, Question},
    DbPool,
};
use errors::Error;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ChoiceDetails {
    pub id: i32,
    pub choice_text: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DetailResponse {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
    pub choices: Vec<ChoiceDetails>,
}

pub async fn detail(
    question_id: Path<i32>,
    pool: Data<DbPool>,
) -> Result<Json<DetailResponse>, Error> {
    let question_id = question_id.into_inner();

    let (question, choices) = block(move || -> Result<(Question, Vec<Choice>), Error> {
        let mut conn = get_conn(&pool)?;
        let question = Question::find_published(&mut conn, question_id, Utc::now())?;
        let choices = Choice::find_by_question(&mut conn, &question)?;

        Ok((question, choices))
    })
    .await??;

    Ok(Json(DetailResponse {
        was_published_recently: question.was_published_recently(),
        id: question.id,
        question_text: question.question_text,
        pub_date: question.pub_date,
        choices: choices
            .into_iter()
            .map(|choice| ChoiceDetails {
                id: choice.id,
                choice_text: choice.choice_text,
            })
            .collect(),
    }))
}
