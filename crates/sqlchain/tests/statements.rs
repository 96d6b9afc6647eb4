//! End-to-end statement rendering through the public API.

use sqlchain::{
    BuilderError, Direction, NoopSink, Operator, PlaceholderStyle, RenderConfig, StatementBuilder,
    StatementKind, Value, table,
};

#[test]
fn insert_then_save() -> Result<(), BuilderError> {
    let sql = table("users")
        .insert_values([("id", Value::from(1)), ("username", Value::from("ngt"))])
        .save()?;
    assert!(sql.starts_with("insert into `users`"));
    assert!(sql.ends_with('\n'));
    Ok(())
}

#[test]
fn update_with_where() -> Result<(), BuilderError> {
    let sql = table("users")
        .set("username", "benito")
        .set("id", 2)
        .where_eq("id", "1")
        .update()?;
    assert_eq!(
        sql,
        "update `users` set `username` = 'benito', `id` = 2 where id = 1\n"
    );
    Ok(())
}

#[test]
fn delete_with_where() -> Result<(), BuilderError> {
    let sql = table("users").where_eq("username", "benito").delete()?;
    assert_eq!(sql, "delete from `users` where username = benito\n");
    Ok(())
}

#[test]
fn select_forms() -> Result<(), BuilderError> {
    let expected = "select * from `users`\n";
    assert_eq!(table("users").fetch_all()?, expected);
    assert_eq!(table("users").fetch("*")?, expected);
    assert_eq!(table("users").fetch(["*"])?, expected);
    Ok(())
}

#[test]
fn select_offset_and_limit() -> Result<(), BuilderError> {
    assert_eq!(
        table("users").offset(10).fetch_all()?,
        "select * from `users` offset 10\n"
    );
    assert_eq!(
        table("users").limit(10).fetch_all()?,
        "select * from `users` limit 10\n"
    );
    Ok(())
}

#[test]
fn missing_state_is_reported() {
    let err = StatementBuilder::new().insert().unwrap_err();
    assert!(matches!(err, BuilderError::PreconditionNotMet(_)));

    let err = table("users").update().unwrap_err();
    assert!(matches!(err, BuilderError::PreconditionNotMet(_)));

    let err = table("users")
        .where_with("id", "=", 1, "nor")
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid argument: Invalid where type \"nor\"");

    let err = table("users").where_op("id", "===", 1).unwrap_err();
    assert_eq!(err.to_string(), "Invalid argument: Illegal operator \"===\"");
}

#[test]
fn full_select_chain() -> Result<(), BuilderError> {
    let sql = table("posts")
        .sink(NoopSink)
        .where_op("published", "=", 1)?
        .and_where("views", Operator::Gt, 100)
        .or_where_op("title", "REGEXP", "^rust")?
        .order_by("created_at", Direction::Desc)
        .order_by("id", "asc")
        .offset(20)
        .limit(10)
        .fetch(vec!["id", "title"])?;
    assert_eq!(
        sql,
        "select id, title from `posts` where published = 1 and views > 100 or title REGEXP ^rust \
         order by created_at desc, id asc offset 20 limit 10\n"
    );
    Ok(())
}

#[test]
fn placeholder_build_matches_literal_shape() -> Result<(), BuilderError> {
    let qb = table("users")
        .config(RenderConfig::new().with_placeholder(PlaceholderStyle::Dollar))
        .set("username", "benito")
        .where_op("id", "<=", 10)?
        .with_mode(StatementKind::Update);

    assert_eq!(
        qb.render(),
        "update `users` set `username` = 'benito' where id <= 10\n"
    );

    let built = qb.build();
    assert_eq!(built.sql(), "update `users` set `username` = $1 where id <= $2");
    assert_eq!(built.params(), [Value::from("benito"), Value::Int(10)]);
    Ok(())
}

#[test]
fn built_statement_serializes() -> Result<(), BuilderError> {
    let built = table("users")
        .insert_values([("id", 1)])
        .with_mode(StatementKind::Insert)
        .build();
    let json = serde_json::to_value(&built).map_err(BuilderError::from)?;
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "insert",
            "sql": "insert into `users` (`id`) values (?)",
            "params": [1],
        })
    );
    Ok(())
}
