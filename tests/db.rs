mod common;

use common::TestDb;

#[test]
fn test_db_creates_and_cleans_up_files() {
    let filename = "test_dinedesk_lifecycle.db";
    {
        let db = TestDb::new(filename);
        let mut conn = db.pool().get().expect("pool should hand out a connection");

        diesel::connection::SimpleConnection::batch_execute(&mut conn, "SELECT 1;")
            .expect("database should answer a trivial query");
        assert!(std::path::Path::new(filename).exists());
    }
    assert!(!std::path::Path::new(filename).exists());
}
