use super::*;

pub mod prelude {

    pub use cdb_core::prelude::*;

    use crate::web::sqlite;

    pub use crate::web::tests::prelude::*;

    pub fn setup() -> (Client, sqlite::Connections) {
        crate::web::tests::rocket_test_setup(vec![("/", crate::web::api::routes())])
    }

    pub fn setup_with_broken_storage() -> (Client, sqlite::Connections) {
        crate::web::tests::rocket_test_setup_without_schema(vec![(
            "/",
            crate::web::api::routes(),
        )])
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn seed_comment(db: &sqlite::Connections, id: &str, created_at: i64, text: &str) {
        db.exclusive()
            .unwrap()
            .create_comment(
                Comment::build()
                    .id(id)
                    .created_at(created_at)
                    .text(text)
                    .finish(),
            )
            .unwrap();
    }

    pub fn seed_comment_by(
        db: &sqlite::Connections,
        id: &str,
        created_at: i64,
        text: &str,
        user_id: &str,
    ) {
        db.exclusive()
            .unwrap()
            .create_comment(
                Comment::build()
                    .id(id)
                    .created_at(created_at)
                    .text(text)
                    .created_by(user_id)
                    .finish(),
            )
            .unwrap();
    }

    pub fn seed_user(db: &sqlite::Connections, id: &str, name: &str) {
        db.exclusive()
            .unwrap()
            .create_user(User::build().id(id).name(name).finish())
            .unwrap();
    }
}

use self::prelude::*;

#[test]
fn unmatched_routes_render_json_errors() {
    let (client, _db) = setup();
    let response = client.get("/nonexistent").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    test_json(&response);
    let err: json::Error = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(err.http_status, 404);
}

#[test]
fn unsupported_methods_render_json_errors() {
    let (client, _db) = setup();
    let response = client.put("/comments/c1").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    test_json(&response);
}
