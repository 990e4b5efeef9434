#[cfg(test)]
mod tests {
    use crate::cond::{And, Cond, Eq, Gt, and, build_cond_with_flavor};
    use crate::flavor::Flavor;
    use crate::mapping::ColumnMap;
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    fn map_of(entries: &[(&str, SqlValue)]) -> ColumnMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn eq_sorts_keys_and_numbers_placeholders() {
        let eq = Eq(map_of(&[
            ("name", SqlValue::from("ann")),
            ("age", SqlValue::I64(30)),
        ]));

        let (sql, args) = build_cond_with_flavor(&eq, Flavor::PostgreSQL);
        assert_eq!(sql, "age = $1 AND name = $2");
        assert_eq!(args, vec![SqlValue::I64(30), SqlValue::from("ann")]);

        let (sql, _) = build_cond_with_flavor(&eq, Flavor::MySQL);
        assert_eq!(sql, "age = ? AND name = ?");
    }

    #[test]
    fn eq_renders_null_as_is_null() {
        let eq = Eq(map_of(&[("deleted_at", SqlValue::Null)]));
        let (sql, args) = build_cond_with_flavor(&eq, Flavor::PostgreSQL);
        assert_eq!(sql, "deleted_at IS NULL");
        assert!(args.is_empty());
    }

    #[test]
    fn gt_renders_greater_than() {
        let gt = Gt(map_of(&[("score", SqlValue::F64(1.5)), ("id", SqlValue::U64(3))]));
        let (sql, args) = build_cond_with_flavor(&gt, Flavor::SQLServer);
        assert_eq!(sql, "id > @p1 AND score > @p2");
        assert_eq!(args, vec![SqlValue::U64(3), SqlValue::F64(1.5)]);
    }

    #[test]
    fn empty_conditions_render_nothing() {
        let (sql, args) = build_cond_with_flavor(&Eq::default(), Flavor::PostgreSQL);
        assert_eq!(sql, "");
        assert!(args.is_empty());

        let empty_and = and([Box::new(Gt::default()) as Box<dyn Cond>]);
        assert!(!empty_and.is_valid());
        assert_eq!(build_cond_with_flavor(&empty_and, Flavor::MySQL).0, "");
    }

    #[test]
    fn and_wraps_multiple_valid_parts() {
        let c = And(vec![
            Box::new(Eq(map_of(&[("a", SqlValue::I64(1)), ("b", SqlValue::I64(2))])))
                as Box<dyn Cond>,
            Box::new(Eq::default()),
            Box::new(Gt(map_of(&[("c", SqlValue::I64(3))]))),
        ]);

        let (sql, args) = build_cond_with_flavor(&c, Flavor::PostgreSQL);
        assert_eq!(sql, "(a = $1 AND b = $2) AND (c > $3)");
        assert_eq!(
            args,
            vec![SqlValue::I64(1), SqlValue::I64(2), SqlValue::I64(3)]
        );
    }

    #[test]
    fn and_with_single_part_is_not_wrapped() {
        let c = and([
            Box::new(Eq(map_of(&[("a", SqlValue::Bool(true))]))) as Box<dyn Cond>,
            Box::new(Gt::default()),
        ]);
        let (sql, _) = build_cond_with_flavor(&c, Flavor::SQLite);
        assert_eq!(sql, "a = ?");
    }

    #[test]
    fn boxed_conditions_are_cloneable() {
        let c: Box<dyn Cond> = Box::new(Eq(map_of(&[("x", SqlValue::I64(1))])));
        let copy = c.clone();
        assert_eq!(
            build_cond_with_flavor(&*copy, Flavor::MySQL),
            build_cond_with_flavor(&*c, Flavor::MySQL)
        );
    }
}
