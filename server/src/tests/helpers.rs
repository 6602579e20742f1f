#[cfg(test)]
pub mod tests {
    use actix_web::{test, web::Data, App};
    use serde::{de::DeserializeOwned, Serialize};
    use serde_json;

    use db::DbPool;

    use crate::routes::routes;

    pub use db::test_helpers::test_pool;

    fn parse_body<R>(body: &[u8], status: u16) -> R
    where
        R: DeserializeOwned,
    {
        serde_json::from_slice(body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        })
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(pool: &DbPool, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, parse_body(&body, status))
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(pool: &DbPool, route: &str, params: T) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::post().set_json(&params).uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, parse_body(&body, status))
    }
}
