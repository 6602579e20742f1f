use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use diesel::deserialize::{self, Queryable};
use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};
use diesel::{self, sql_types};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions::{self, table};

/// How many questions the index lists.
pub const LATEST_QUESTIONS_LIMIT: i64 = 5;

pub const QUESTION_NOT_FOUND: &str = "No Question matches the given query.";

#[derive(Debug, Deserialize, Identifiable, PartialEq, Serialize)]
#[diesel(table_name = questions)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

// pub_date is stored as a naive UTC timestamp
impl Queryable<(sql_types::Integer, sql_types::Text, sql_types::Timestamp), Sqlite> for Question {
    type Row = (i32, String, NaiveDateTime);

    fn build((id, question_text, pub_date): Self::Row) -> deserialize::Result<Self> {
        Ok(Question {
            id,
            question_text,
            pub_date: Utc.from_utc_datetime(&pub_date),
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestion<'a> {
    pub question_text: &'a str,
    pub pub_date: NaiveDateTime,
}

impl Question {
    /// A question counts as recent when it was published within the last day,
    /// up to and including `now`. Anything scheduled for later is not recent.
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }

    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    pub fn create(
        conn: &mut SqliteConnection,
        question_text: &str,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(table)
            .values(NewQuestion {
                question_text,
                pub_date: pub_date.naive_utc(),
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// Creates a question published `days` away from now. Negative values
    /// land in the past, positive ones in the future.
    pub fn create_with_days_offset(
        conn: &mut SqliteConnection,
        question_text: &str,
        days: i64,
    ) -> Result<Question, Error> {
        Question::create(conn, question_text, Utc::now() + Duration::days(days))
    }

    /// Latest questions visible at `now`, newest first.
    pub fn published(
        conn: &mut SqliteConnection,
        now: DateTime<Utc>,
    ) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{pub_date, questions as questions_table};

        let results = questions_table
            .filter(pub_date.le(now.naive_utc()))
            .order(pub_date.desc())
            .limit(LATEST_QUESTIONS_LIMIT)
            .load::<Question>(conn)?;

        Ok(results)
    }

    /// Looks up a question that is visible at `now`. Questions scheduled for
    /// the future are reported the same way as missing ones.
    pub fn find_published(
        conn: &mut SqliteConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use crate::schema::questions::dsl::{pub_date, questions as questions_table};

        questions_table
            .find(question_id)
            .filter(pub_date.le(now.naive_utc()))
            .first::<Question>(conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(QUESTION_NOT_FOUND.to_string()))
    }
}
