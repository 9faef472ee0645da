use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use sqlexpr::prelude::*;

fn sample() -> BoolExpression {
    let age = table_column::<IntegerExpression>("users", "age");
    let name = table_column::<StringExpression>("users", "name");
    let active = table_column::<BoolExpression>("users", "active");

    age.add(int(1))
        .gt(int(21))
        .and(name.concat(text("!")).not_like(text("%bot%")))
        .or(active.is_true())
}

#[test]
fn test_parametrized_int_position() {
    let rendered = int(42).to_sql().unwrap();
    assert_eq!(rendered.sql, "$1");
    assert_eq!(rendered.args, vec![Value::Int(42)]);

    let nested = int_exp(raw("a"))
        .mul(int_exp(raw("b")).add(int(42)))
        .eq(int_exp(raw("c")));
    let rendered = nested.to_sql().unwrap();
    assert_eq!(rendered.sql, "((a * (b + $1)) = c)");
    assert_eq!(rendered.args, vec![Value::Int(42)]);
}

#[test]
fn test_constant_int_inline() {
    let rendered = int(42).constant().to_sql().unwrap();
    assert_eq!(rendered.sql, "42");
    assert!(rendered.args.is_empty());
}

#[test]
fn test_full_expression() {
    let rendered = sample().to_sql().unwrap();
    assert_eq!(
        rendered.sql,
        "((((users.age + $1) > $2) AND ((users.name || $3) NOT LIKE $4)) OR (users.active) IS TRUE)"
    );
    assert_eq!(
        rendered.args,
        vec![
            Value::Int(1),
            Value::Int(21),
            Value::from("!"),
            Value::from("%bot%"),
        ]
    );
}

#[test]
fn test_render_is_idempotent() {
    let expr = sample();
    assert_eq!(expr.to_sql().unwrap(), expr.to_sql().unwrap());
}

#[test]
fn test_concurrent_renders_share_tree() {
    let expr: ExprRef = Arc::new(sample());
    let expected = expr.to_sql().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let expr = Arc::clone(&expr);
            thread::spawn(move || expr.to_sql().unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_placeholder_styles() {
    let expr = int(1).add(int(2));

    let mysql = expr.to_sql_with(&RenderConfig::new(Dialect::MySql)).unwrap();
    assert_eq!(mysql.sql, "(? + ?)");

    let colon = RenderConfig::default().with_placeholder(PlaceholderStyle::Colon);
    assert_eq!(expr.to_sql_with(&colon).unwrap().sql, "(:1 + :2)");

    let mssql = expr.to_sql_with(&RenderConfig::new(Dialect::SqlServer)).unwrap();
    assert_eq!(mssql.sql, "(@p1 + @p2)");
    assert_eq!(mssql.args, mysql.args);
}

#[test]
fn test_skip_top_level_wrap() {
    let config = RenderConfig::default().with_skip_wrap(true);
    let expr = int(1).add(int(2)).mul(int(3));
    let rendered = expr.to_sql_with(&config).unwrap();
    assert_eq!(rendered.sql, "($1 + $2) * $3");
    assert_eq!(rendered.args, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_config_from_toml_drives_render() {
    let config = RenderConfig::from_toml(
        r#"
        [render]
        dialect = "mysql"
        "#,
    )
    .unwrap();
    let expr = table_column::<StringExpression>("order", "status").eq(text("paid"));
    assert_eq!(expr.to_sql_with(&config).unwrap().sql, "(`order`.status = ?)");
}

#[test]
fn test_insert_statement_context() {
    let id = table_column::<IntegerExpression>("users", "id");
    let name = table_column::<StringExpression>("users", "name");
    let columns: [ExprRef; 2] = [id.into(), name.into()];
    let list = wrap(columns);
    let rendered = render(&list, StatementType::Insert, &RenderConfig::default()).unwrap();
    assert_eq!(rendered.sql, "(id, name)");
}

#[test]
fn test_wrap_args_left_to_right() {
    let items: Vec<ExprRef> = vec![int(1).into(), int(2).constant().into(), text("c").into()];
    let expr = wrap(items);
    let rendered = expr.to_sql().unwrap();
    assert_eq!(rendered.sql, "($1, 2, $2)");
    assert_eq!(rendered.args, vec![Value::Int(1), Value::from("c")]);
}

#[test]
fn test_failed_render_returns_no_output() {
    let expr = float(1.0).add(float(f64::INFINITY).constant());
    let err = expr.to_sql().unwrap_err();
    assert!(matches!(err, SqlExprError::MalformedTree(_)));
}

#[test]
fn test_collect_literals_matches_render_order() {
    let expr = sample();
    let rendered = expr.to_sql().unwrap();
    assert_eq!(collect_parameters(&expr), rendered.args);

    let with_constant = int(1).add(int(2).constant());
    assert_eq!(collect_literals(&with_constant), vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(collect_parameters(&with_constant), vec![Value::Int(1)]);
}

#[test]
fn test_walk_counts_nodes() {
    let expr = bool_exp(raw("x")).and(bool_exp(raw("y"))).not();
    let mut count = 0;
    walk(&expr, &mut |_: &dyn Expression| count += 1);
    // NOT -> AND -> x, y
    assert_eq!(count, 4);
}

#[test]
fn test_args_serialize_to_json() {
    let rendered = int(7).eq(int(8)).and(boolean(true)).to_sql().unwrap();
    let json = serde_json::to_value(&rendered).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "sql": "(($1 = $2) AND $3)",
            "args": [{"Int": 7}, {"Int": 8}, {"Bool": true}],
        })
    );
}

#[test]
fn test_mysql_constant_string_cannot_close_literal() {
    let name = table_column::<StringExpression>("users", "name");
    let expr = name.eq(text("\\' OR 1=1 -- ").constant());
    let rendered = expr.to_sql_with(&RenderConfig::new(Dialect::MySql)).unwrap();
    assert_eq!(rendered.sql, "(users.name = '\\\\'' OR 1=1 -- ')");
    assert!(rendered.args.is_empty());

    let rendered = expr.to_sql().unwrap();
    assert_eq!(rendered.sql, "(users.name = '\\'' OR 1=1 -- ')");
}

#[test]
fn test_mysql_operator_spelling() {
    let mysql = RenderConfig::new(Dialect::MySql);

    let flags = column::<IntegerExpression>("flags");
    let expr = flags.bit_xor(int(4)).eq(int(0));
    assert_eq!(expr.to_sql_with(&mysql).unwrap().sql, "((flags ^ ?) = ?)");
    assert_eq!(expr.to_sql().unwrap().sql, "((flags # $1) = $2)");

    let name = table_column::<StringExpression>("users", "name");
    let rendered = name.concat(text("!")).eq(text("a!")).to_sql_with(&mysql).unwrap();
    assert_eq!(rendered.sql, "(CONCAT(users.name, ?) = ?)");
    assert_eq!(rendered.args, vec![Value::from("!"), Value::from("a!")]);

    let power = column::<FloatExpression>("x").pow(float(2.0));
    assert_eq!(power.to_sql_with(&mysql).unwrap().sql, "POW(x, ?)");
}

#[test]
fn test_sqlserver_booleans_and_concat() {
    let mssql = RenderConfig::new(Dialect::SqlServer);

    let active = column::<BoolExpression>("active");
    let rendered = active.eq(boolean(true).constant()).to_sql_with(&mssql).unwrap();
    assert_eq!(rendered.sql, "(active = 1)");

    let name = column::<StringExpression>("name");
    let rendered = name.concat(text("!")).to_sql_with(&mssql).unwrap();
    assert_eq!(rendered.sql, "(name + @p1)");

    let err = active.is_true().to_sql_with(&mssql).unwrap_err();
    assert!(matches!(err, SqlExprError::UnsupportedOperator { .. }));
}

#[test]
fn test_sqlite_distinct_from() {
    let sqlite = RenderConfig::new(Dialect::Sqlite);
    let a = column::<IntegerExpression>("a");
    let b = column::<IntegerExpression>("b");
    assert_eq!(a.is_distinct_from(b.clone()).to_sql_with(&sqlite).unwrap().sql, "(a IS NOT b)");
    assert_eq!(a.is_not_distinct_from(b).to_sql_with(&sqlite).unwrap().sql, "(a IS b)");
}

#[test]
fn test_unsupported_operator_fails_render() {
    let name = column::<StringExpression>("name");
    let expr = name.similar_to(text("a%"));
    let err = expr.to_sql_with(&RenderConfig::new(Dialect::MySql)).unwrap_err();
    assert!(matches!(
        err,
        SqlExprError::UnsupportedOperator { dialect: Dialect::MySql, .. }
    ));
    assert_eq!(expr.to_sql().unwrap().sql, "(name SIMILAR TO $1)");
}
