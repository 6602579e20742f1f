use validator::{Validate, ValidationErrors};

use errors::Error;

// One message per failed rule, sorted so responses are stable.
fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match error.message {
                Some(ref message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();
    messages
}

pub fn validate<T>(params: &T) -> Result<(), Error>
where
    T: Validate,
{
    params
        .validate()
        .map_err(|errors| Error::ValidationError(collect_messages(&errors)))
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use errors::Error;

    use super::validate;

    #[derive(Validate)]
    struct Params {
        #[validate(required(message = "name is required"))]
        name: Option<String>,
        #[validate(range(min = 1))]
        count: i32,
    }

    #[test]
    fn test_validate_ok() {
        let params = Params {
            name: Some("poll".to_string()),
            count: 1,
        };
        assert_eq!(validate(&params), Ok(()));
    }

    #[test]
    fn test_validate_collects_messages() {
        let params = Params {
            name: None,
            count: 0,
        };
        assert_eq!(
            validate(&params),
            Err(Error::ValidationError(vec![
                "count is invalid".to_string(),
                "name is required".to_string()
            ]))
        );
    }
}
