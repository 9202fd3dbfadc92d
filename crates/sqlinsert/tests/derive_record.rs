use chrono::NaiveDateTime;
use sqlinsert::{Field, Insert, InsertConfig, Record, TokenKind};

#[derive(Debug, Clone, Record)]
struct CandyInsert {
    #[col = "id"]
    id: String,
    #[col = "candy_name"]
    name: String,
    #[col = "form_factor"]
    form_factor: String,
    #[col = "description"]
    description: String,
    #[col = "manufacturer"]
    mfr: String,
    #[col = "weight_grams"]
    #[tag(db = "WEIGHT", json = "weight")]
    weight: f64,
    #[col("ts")]
    timestamp: NaiveDateTime,
}

#[derive(Record)]
struct Note {
    #[col = "id"]
    id: i64,
    body: Option<String>,
}

#[derive(Record)]
struct Tagged<T> {
    #[col = "key"]
    key: String,
    #[col = "value"]
    value: T,
}

const TBL: &str = "candy";

fn epoch() -> NaiveDateTime {
    chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc()
}

fn rec(tag: &str, weight: f64) -> CandyInsert {
    CandyInsert {
        id: tag.to_string(),
        name: tag.to_string(),
        form_factor: tag.to_string(),
        description: tag.to_string(),
        mfr: tag.to_string(),
        weight,
        timestamp: epoch(),
    }
}

fn five_recs() -> Vec<CandyInsert> {
    vec![rec("a", 1.1), rec("b", 2.1), rec("c", 3.1), rec("d", 4.1), rec("e", 5.1)]
}

#[test]
fn derive_emits_fields_in_declaration_order() {
    let fields = CandyInsert::fields();
    assert_eq!(fields.len(), 7);
    assert_eq!(fields[0], Field::new("id", &[("col", "id")]));
    assert_eq!(fields[5].ident(), "weight");
    assert_eq!(
        fields[5].tags(),
        &[("col", "weight_grams"), ("db", "WEIGHT"), ("json", "weight")]
    );
    assert_eq!(fields[6].name("col"), "ts");
}

#[test]
fn derived_candy_sql_ordinal() {
    let candy = rec("c0600afd-78a7-4a1a-87c5-1bc48cafd14e", 1.1618);
    let ins = Insert::one(TBL, &candy).with_config(InsertConfig::new());
    assert_eq!(
        ins.sql(TokenKind::OrdinalNumber),
        "INSERT INTO candy (id, candy_name, form_factor, description, manufacturer, weight_grams, ts) VALUES ($1, $2, $3, $4, $5, $6, $7)"
    );
}

#[test]
fn derived_candy_batches_by_value_and_reference() {
    let values = five_recs();
    let refs: Vec<&CandyInsert> = values.iter().collect();
    let boxed: Vec<Box<CandyInsert>> = values.iter().cloned().map(Box::new).collect();

    let expected = format!(
        "INSERT INTO candy (id, candy_name, form_factor, description, manufacturer, weight_grams, ts) VALUES {}",
        ["(@id, @candy_name, @form_factor, @description, @manufacturer, @weight_grams, @ts)"; 5]
            .join(", ")
    );

    let cfg = InsertConfig::new();
    assert_eq!(Insert::many(TBL, &values).with_config(cfg.clone()).sql(TokenKind::AtColumnName), expected);
    assert_eq!(Insert::many(TBL, &refs).with_config(cfg.clone()).sql(TokenKind::AtColumnName), expected);
    assert_eq!(Insert::many(TBL, &boxed).with_config(cfg).sql(TokenKind::AtColumnName), expected);
}

#[test]
fn derived_args_are_row_major() {
    let values = five_recs();
    let args = Insert::many(TBL, &values).with_config(InsertConfig::new()).args();
    assert_eq!(args.len(), 35);

    let rendered: Vec<String> = args.iter().map(|v| format!("{v:?}")).collect();
    for (row, tag) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        assert_eq!(rendered[row * 7], format!("{tag:?}"));
        assert_eq!(rendered[row * 7 + 6], format!("{:?}", epoch()));
    }
    assert_eq!(rendered[5], "1.1");
    assert_eq!(rendered[33], "5.1");
}

#[test]
fn unannotated_field_renders_empty_name() {
    let note = Note { id: 1, body: None };
    let ins = Insert::one("notes", &note).with_config(InsertConfig::new());
    assert_eq!(ins.columns(), "(id, )");
    assert_eq!(ins.params(TokenKind::Colon), "(:id, :)");
    assert_eq!(format!("{:?}", ins.args()), "[1, None]");
}

#[test]
fn alternate_tag_key() {
    let candy = rec("x", 2.5);
    let ins = Insert::one(TBL, &candy).with_config(InsertConfig::new().tag_key("db").compact());
    assert_eq!(ins.columns(), "(,,,,,WEIGHT,)");
    assert_eq!(ins.sql(TokenKind::QuestionMark), "INSERT INTO candy (,,,,,WEIGHT,) VALUES (?,?,?,?,?,?,?)");
}

#[test]
fn generic_record() {
    let rows = vec![
        Tagged { key: "a".to_string(), value: 1_i32 },
        Tagged { key: "b".to_string(), value: 2_i32 },
    ];
    let ins = Insert::many("kv", &rows).with_config(InsertConfig::new());
    assert_eq!(ins.sql(TokenKind::QuestionMark), "INSERT INTO kv (key, value) VALUES (?, ?), (?, ?)");
    assert_eq!(format!("{:?}", ins.args()), r#"["a", 1, "b", 2]"#);
}

#[test]
fn pair_round_trip() {
    #[derive(Record)]
    struct Pair {
        #[col = "id"]
        id: &'static str,
        #[col = "weight"]
        weight: f64,
    }

    let pair = Pair { id: "x", weight: 1.5 };
    let ins = Insert::one("t", &pair).with_config(InsertConfig::new());
    assert_eq!(ins.sql(TokenKind::QuestionMark), "INSERT INTO t (id, weight) VALUES (?, ?)");
    assert_eq!(format!("{:?}", ins.args()), r#"["x", 1.5]"#);
}
