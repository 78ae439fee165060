use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::admin::dto::{OrderListQuery, OrderListRow, SubscriptionListQuery, SubscriptionListRow};
use crate::error::ApiError;

/// Turn a raw search term into an ILIKE pattern, escaping the LIKE
/// metacharacters so a literal `%` or `_` in the term matches itself.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("%{escaped}%")
}

pub async fn list_subscriptions(
    db: &PgPool,
    q: &SubscriptionListQuery,
) -> Result<Vec<SubscriptionListRow>, ApiError> {
    let mut qb = QueryBuilder::<Postgres>::new(
        "SELECT s.id, s.menu_id, m.title AS menu_title, s.days, s.weekdays_only, \
                ds.delivery_vendor, s.price_menu, s.price_delivery, s.price_total, \
                m.calories_daily AS menu_calories_daily, s.created_at \
         FROM subscriptions s \
         JOIN menus m ON m.id = s.menu_id \
         JOIN delivery_schedules ds ON ds.id = s.delivery_schedule_id \
         WHERE TRUE",
    );

    if let Some(menu_id) = q.menu_id {
        qb.push(" AND s.menu_id = ").push_bind(menu_id);
    }
    if let Some(vendor) = &q.delivery_vendor {
        qb.push(" AND ds.delivery_vendor = ").push_bind(vendor);
    }
    if let Some(min) = q.price_total_min {
        qb.push(" AND s.price_total >= ").push_bind(min);
    }
    if let Some(max) = q.price_total_max {
        qb.push(" AND s.price_total <= ").push_bind(max);
    }
    if let Some(min) = q.menu_calories_daily_min {
        qb.push(" AND m.calories_daily >= ").push_bind(min);
    }
    if let Some(max) = q.menu_calories_daily_max {
        qb.push(" AND m.calories_daily <= ").push_bind(max);
    }
    if let Some(term) = &q.q {
        let pattern = like_pattern(term);
        qb.push(" AND (m.title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR m.description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    qb.push(" ORDER BY s.created_at DESC LIMIT ")
        .push_bind(q.limit)
        .push(" OFFSET ")
        .push_bind(q.offset);

    let rows = qb
        .build_query_as::<SubscriptionListRow>()
        .fetch_all(db)
        .await?;
    Ok(rows)
}

pub async fn list_orders(db: &PgPool, q: &OrderListQuery) -> Result<Vec<OrderListRow>, ApiError> {
    let mut qb = QueryBuilder::<Postgres>::new(
        "SELECT o.id, o.profile_id, p.first_name AS profile_first_name, \
                p.last_name AS profile_last_name, o.subscription_id, \
                ds.delivery_vendor, o.data_start, o.data_end, o.price, o.status, o.created_at \
         FROM orders o \
         JOIN profiles p ON p.id = o.profile_id \
         JOIN subscriptions s ON s.id = o.subscription_id \
         JOIN delivery_schedules ds ON ds.id = s.delivery_schedule_id \
         WHERE TRUE",
    );

    if let Some(status) = q.status {
        qb.push(" AND o.status = ").push_bind(status);
    }
    if let Some(min) = q.price_min {
        qb.push(" AND o.price >= ").push_bind(min);
    }
    if let Some(max) = q.price_max {
        qb.push(" AND o.price <= ").push_bind(max);
    }
    if let Some(after) = q.created_after {
        qb.push(" AND o.created_at::date >= ").push_bind(after);
    }
    if let Some(before) = q.created_before {
        qb.push(" AND o.created_at::date <= ").push_bind(before);
    }
    if let Some(after) = q.data_end_after {
        qb.push(" AND o.data_end >= ").push_bind(after);
    }
    if let Some(before) = q.data_end_before {
        qb.push(" AND o.data_end <= ").push_bind(before);
    }
    if let Some(vendor) = &q.delivery_vendor {
        qb.push(" AND ds.delivery_vendor = ").push_bind(vendor);
    }
    if let Some(term) = &q.q {
        let pattern = like_pattern(term);
        qb.push(" AND (p.first_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR p.last_name ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    qb.push(" ORDER BY o.created_at DESC LIMIT ")
        .push_bind(q.limit)
        .push(" OFFSET ")
        .push_bind(q.offset);

    let rows = qb.build_query_as::<OrderListRow>().fetch_all(db).await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_terms_escape_like_metacharacters() {
        assert_eq!(like_pattern("kim"), "%kim%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }
}
