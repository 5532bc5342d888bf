#[macro_use]
extern crate log;

use cdb_db_sqlite::Connections;

mod web;

pub async fn run(connections: Connections, enable_cors: bool) {
    web::run(connections.into(), enable_cors).await;
}
