#[macro_use]
extern crate log;

use dotenv::dotenv;

use db::{
    get_conn,
    models::{Choice, Question},
    new_pool, run_migrations,
};
use errors::Error;

// (question, days from now, choices)
const POLLS: &[(&str, i64, &[&str])] = &[
    ("What's up?", -1, &["Not much", "The sky", "Just hacking again"]),
    (
        "Which course should we record next?",
        -3,
        &["Rust web services", "Databases", "Testing"],
    ),
    ("Best time for the meetup?", -10, &["Morning", "Afternoon", "Evening"]),
    ("Who wins the next award?", 7, &["Ana", "Luis", "Marta"]),
];

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let pool = new_pool()?;
    run_migrations(&pool)?;
    let mut conn = get_conn(&pool)?;

    for (question_text, days, choices) in POLLS {
        let question = Question::create_with_days_offset(&mut conn, question_text, *days)?;
        for choice_text in choices.iter() {
            Choice::create(&mut conn, question.id, choice_text)?;
        }
        info!("Seeded \"{}\" published {}", question.question_text, question.pub_date);
    }

    Ok(())
}
