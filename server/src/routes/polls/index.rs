use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, DbPool};
use errors::Error;

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<Question>,
    pub message: Option<String>,
}

impl From<Vec<Question>> for IndexResponse {
    fn from(latest_question_list: Vec<Question>) -> Self {
        let message = if latest_question_list.is_empty() {
            Some(NO_POLLS_MESSAGE.to_string())
        } else {
            None
        };

        IndexResponse {
            latest_question_list,
            message,
        }
    }
}

pub async fn index(pool: Data<DbPool>) -> Result<Json<IndexResponse>, Error> {
    let questions = block(move || -> Result<Vec<Question>, Error> {
        let mut conn = get_conn(&pool)?;
        Question::published(&mut conn, Utc::now())
    })
    .await??;

    Ok(Json(questions.into()))
}

#[cfg(test)]
mod tests {
    use db::{get_conn, models::Question};

    use super::{IndexResponse, NO_POLLS_MESSAGE};
    use crate::tests::helpers::tests::{test_get, test_pool};

    #[actix_rt::test]
    async fn test_no_questions() {
        let (_dir, pool) = test_pool();

        let res: (u16, IndexResponse) = test_get(&pool, "/polls").await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.message, Some(NO_POLLS_MESSAGE.to_string()));
        assert!(res.1.latest_question_list.is_empty());
    }

    #[actix_rt::test]
    async fn test_future_question_not_displayed() {
        let (_dir, pool) = test_pool();
        let mut conn = get_conn(&pool).unwrap();
        Question::create_with_days_offset(&mut conn, "future question", 30).unwrap();

        let res: (u16, IndexResponse) = test_get(&pool, "/polls").await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.message, Some(NO_POLLS_MESSAGE.to_string()));
        assert!(res.1.latest_question_list.is_empty());
    }

    #[actix_rt::test]
    async fn test_past_question_displayed() {
        let (_dir, pool) = test_pool();
        let mut conn = get_conn(&pool).unwrap();
        let question = Question::create_with_days_offset(&mut conn, "past question", -10).unwrap();

        let res: (u16, IndexResponse) = test_get(&pool, "/polls").await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.message, None);
        assert_eq!(res.1.latest_question_list, vec![question]);
    }

    #[actix_rt::test]
    async fn test_future_and_past_question() {
        let (_dir, pool) = test_pool();
        let mut conn = get_conn(&pool).unwrap();
        let past = Question::create_with_days_offset(&mut conn, "past question", -30).unwrap();
        Question::create_with_days_offset(&mut conn, "future question", 30).unwrap();

        let res: (u16, IndexResponse) = test_get(&pool, "/polls").await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.latest_question_list, vec![past]);
    }

    #[actix_rt::test]
    async fn test_two_future_questions() {
        let (_dir, pool) = test_pool();
        let mut conn = get_conn(&pool).unwrap();
        Question::create_with_days_offset(&mut conn, "question1", 10).unwrap();
        Question::create_with_days_offset(&mut conn, "question2", 20).unwrap();

        let res: (u16, IndexResponse) = test_get(&pool, "/polls").await;
        assert_eq!(res.0, 200);
        assert!(res.1.latest_question_list.is_empty());
    }

    #[actix_rt::test]
    async fn test_two_past_questions() {
        let (_dir, pool) = test_pool();
        let mut conn = get_conn(&pool).unwrap();
        let older = Question::create_with_days_offset(&mut conn, "question1", -30).unwrap();
        let newer = Question::create_with_days_offset(&mut conn, "question2", -5).unwrap();

        let res: (u16, IndexResponse) = test_get(&pool, "/polls").await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.latest_question_list, vec![newer, older]);
    }
}
