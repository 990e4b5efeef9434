#[cfg(test)]
mod tests {
    use crate::mapping::{ColumnMap, to_map};
    use crate::shape::IntrospectError;
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    #[derive(Clone, Default)]
    struct Person {
        name: String,
        age: i64,
    }

    crate::db_record! {
        impl Person {
            name: { db: "name", orig: "Name" },
            age:  { db: "age",  orig: "Age" },
        }
    }

    #[derive(Clone)]
    struct Mixed {
        id: u64,
        nickname: Option<String>,
        score: f64,
        active: bool,
        memo: String,
        created_at: time::OffsetDateTime,
        scratch: Vec<u8>,
    }

    impl Default for Mixed {
        fn default() -> Self {
            Self {
                id: 0,
                nickname: None,
                score: 0.0,
                active: false,
                memo: String::new(),
                created_at: crate::record::ZERO_TIME,
                scratch: Vec::new(),
            }
        }
    }

    crate::db_record! {
        impl Mixed {
            id:         { db: "id" },
            nickname:   { db: "nickname" },
            score:      { db: "score" },
            active:     { db: "active" },
            memo:       {},
            created_at: { db: "created_at" },
            scratch:    { orig: "Scratch" },
        }
    }

    #[derive(Clone, Default)]
    struct Base {
        id: i64,
    }

    crate::db_record! {
        impl Base {
            id: { db: "id" },
        }
    }

    #[derive(Clone, Default)]
    struct Post {
        base: Base,
        title: String,
    }

    crate::db_record! {
        impl Post {
            base:  { embed: Base },
            title: { db: "title" },
        }
    }

    fn map_of(entries: &[(&str, SqlValue)]) -> ColumnMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn zero_name_is_excluded() {
        let p = Person {
            name: String::new(),
            age: 30,
        };
        assert_eq!(to_map(&p).unwrap(), map_of(&[("age", SqlValue::I64(30))]));
    }

    #[test]
    fn one_level_of_reference_is_accepted() {
        let p = Person {
            name: "ann".to_string(),
            age: 0,
        };
        let expected = map_of(&[("name", SqlValue::from("ann"))]);
        assert_eq!(to_map(&&p).unwrap(), expected);
        assert_eq!(to_map(&Box::new(p)).unwrap(), expected);
    }

    #[test]
    fn all_zero_record_yields_empty_map() {
        assert!(to_map(&Mixed::default()).unwrap().is_empty());
    }

    #[test]
    fn tagged_non_zero_fields_map_one_to_one() {
        let now = time::OffsetDateTime::UNIX_EPOCH;
        let m = Mixed {
            id: 7,
            nickname: Some(String::new()),
            score: 0.0,
            active: true,
            memo: "never mapped".to_string(),
            created_at: now,
            scratch: vec![1, 2, 3],
        };

        let got = to_map(&m).unwrap();
        assert_eq!(
            got,
            map_of(&[
                ("id", SqlValue::U64(7)),
                // Some("") 不是零值：只有 None 才算未设置。
                ("nickname", SqlValue::from("")),
                ("active", SqlValue::Bool(true)),
                ("created_at", SqlValue::DateTime(now)),
            ])
        );
        assert!(!got.contains_key("memo"));
        assert!(!got.contains_key("Scratch"));
        assert!(!got.contains_key("score"));
    }

    #[test]
    fn embedded_records_are_not_flattened_into_the_map() {
        let p = Post {
            base: Base { id: 9 },
            title: "hello".to_string(),
        };
        assert_eq!(
            to_map(&p).unwrap(),
            map_of(&[("title", SqlValue::from("hello"))])
        );
    }

    #[test]
    fn non_struct_inputs_are_rejected() {
        assert_eq!(
            to_map(&42_i32),
            Err(IntrospectError::Shape {
                op: "ToMap",
                got: "i32"
            })
        );
        assert!(to_map(&"text".to_string()).is_err());
        assert!(to_map(&Some(1_i64)).is_err());

        let p = Person::default();
        let r = &p;
        assert!(matches!(
            to_map(&&r),
            Err(IntrospectError::Shape { op: "ToMap", .. })
        ));
    }
}
