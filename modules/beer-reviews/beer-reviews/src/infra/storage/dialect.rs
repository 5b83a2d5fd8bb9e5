//! Backend-specific expression fragments.
//!
//! Everything else the repositories emit is portable `sea_query`; these are
//! the few places where Postgres, `MySQL` and `SQLite` disagree.

use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::DbBackend;

/// Calendar year of a timestamp column, as a 64-bit integer.
///
/// Custom templates use the builder's own placeholder: `$N` on Postgres, `?`
/// elsewhere.
pub(crate) fn year_of(backend: DbBackend, ts: SimpleExpr) -> SimpleExpr {
    match backend {
        DbBackend::Postgres => Expr::cust_with_exprs("CAST(EXTRACT(YEAR FROM $1) AS BIGINT)", [ts]),
        DbBackend::MySql => Expr::cust_with_exprs("CAST(YEAR(?) AS SIGNED)", [ts]),
        DbBackend::Sqlite => Expr::cust_with_exprs("CAST(strftime('%Y', ?) AS INTEGER)", [ts]),
    }
}

/// A timestamp column as something that orders by instant.
///
/// `SQLite` keeps timestamps as RFC 3339 text with their offset, so text order
/// is not time order across offsets; `julianday` normalizes to UTC.
pub(crate) fn instant_of(backend: DbBackend, ts: SimpleExpr) -> SimpleExpr {
    match backend {
        DbBackend::Sqlite => Func::cust(Alias::new("julianday")).arg(ts).into(),
        DbBackend::Postgres | DbBackend::MySql => ts,
    }
}

/// `AVG(expr)` as a double on every backend.
///
/// Postgres returns NUMERIC and `MySQL` DECIMAL for integer input.
pub(crate) fn avg_of(backend: DbBackend, expr: SimpleExpr) -> SimpleExpr {
    let avg = Func::avg(expr);
    match backend {
        DbBackend::Postgres => Func::cast_as(avg, Alias::new("DOUBLE PRECISION")).into(),
        DbBackend::MySql => Func::cast_as(avg, Alias::new("DOUBLE")).into(),
        DbBackend::Sqlite => avg.into(),
    }
}

pub(crate) fn count_distinct(expr: SimpleExpr) -> SimpleExpr {
    Func::count_distinct(expr).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::{PostgresQueryBuilder, Query, SqliteQueryBuilder};

    fn render(expr: SimpleExpr, pg: bool) -> String {
        let stmt = Query::select().expr(expr).to_owned();
        if pg {
            stmt.to_string(PostgresQueryBuilder)
        } else {
            stmt.to_string(SqliteQueryBuilder)
        }
    }

    #[test]
    fn year_extraction_per_backend() {
        let col = || Expr::col(Alias::new("time")).into();
        assert_eq!(
            render(year_of(DbBackend::Sqlite, col()), false),
            r#"SELECT CAST(strftime('%Y', "time") AS INTEGER)"#
        );
        assert_eq!(
            render(year_of(DbBackend::Postgres, col()), true),
            r#"SELECT CAST(EXTRACT(YEAR FROM "time") AS BIGINT)"#
        );
    }

    #[test]
    fn count_distinct_keeps_its_column() {
        let col = || Expr::col(Alias::new("beer")).into();
        assert_eq!(
            render(count_distinct(col()), false),
            r#"SELECT COUNT(DISTINCT "beer")"#
        );
        assert_eq!(
            render(count_distinct(col()), true),
            r#"SELECT COUNT(DISTINCT "beer")"#
        );
    }

    #[test]
    fn sqlite_orders_timestamps_by_julian_day() {
        let col = || Expr::col(Alias::new("time")).into();
        assert_eq!(
            render(instant_of(DbBackend::Sqlite, col()), false),
            r#"SELECT julianday("time")"#
        );
        assert_eq!(
            render(instant_of(DbBackend::Postgres, col()), true),
            r#"SELECT "time""#
        );
    }

    #[test]
    fn average_is_cast_on_postgres_only() {
        let col = || Expr::col(Alias::new("rating")).into();
        assert_eq!(
            render(avg_of(DbBackend::Sqlite, col()), false),
            r#"SELECT AVG("rating")"#
        );
        assert_eq!(
            render(avg_of(DbBackend::Postgres, col()), true),
            r#"SELECT CAST(AVG("rating") AS DOUBLE PRECISION)"#
        );
    }
}
