use super::{Condition, Op, Value};
use lightbnb_core::{params, types};
use log::trace;

/// Columns of the `properties` table, in the order the listing record expects them.
pub const PROPERTY_COLUMNS: &str = "properties.id, properties.owner_id, properties.title, \
     properties.description, properties.thumbnail_photo_url, properties.cover_photo_url, \
     properties.cost_per_night, properties.parking_spaces, properties.number_of_bathrooms, \
     properties.number_of_bedrooms, properties.country, properties.street, properties.city, \
     properties.province, properties.post_code";

pub mod col {
    pub const CITY: &str = "properties.city";
    pub const OWNER_ID: &str = "properties.owner_id";
    pub const COST_PER_NIGHT: &str = "properties.cost_per_night";
}

const AVERAGE_RATING: &str = "AVG(property_reviews.rating)::float8";

/// A rendered statement: SQL text plus the values bound to its `$n` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<Value>,
}

impl Statement {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameter values, the value at index `i` is bound to placeholder `$i+1`.
    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {} params", self.sql, self.params.len())
    }
}

/// Builder for the property listing statement.
///
/// Each property comes with the mean rating of its reviews. Properties without
/// reviews are kept (left join) with a `NULL` rating, unless a minimum rating
/// is requested: the rating filter is applied after aggregation and `NULL`
/// never satisfies it.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyQuery {
    conditions: Vec<Condition>,
    minimum_rating: Option<f64>,
    limit: u32,
}

impl Default for PropertyQuery {
    fn default() -> Self {
        Self::new(params::DEFAULT_LIMIT)
    }
}

impl PropertyQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            conditions: Vec::new(),
            minimum_rating: None,
            limit,
        }
    }

    /// Translates search options into a query. Row-level filters are added in
    /// a fixed order: city, owner, minimum price, maximum price.
    pub fn from_search(search: &types::PropertySearch, limit: Option<u32>) -> Self {
        let mut query = Self::new(limit.unwrap_or(params::DEFAULT_LIMIT));

        if let Some(city) = search.city() {
            query = query.with_condition(Condition::contains_ignore_case(col::CITY, city));
        }

        if let Some(owner_id) = search.owner_id {
            query = query.with_condition(Condition::new(col::OWNER_ID, Op::Eq, owner_id));
        }

        if let Some(price) = search.minimum_price_per_night {
            query = query.with_condition(Condition::new(col::COST_PER_NIGHT, Op::Geq, price));
        }

        if let Some(price) = search.maximum_price_per_night {
            query = query.with_condition(Condition::new(col::COST_PER_NIGHT, Op::Leq, price));
        }

        if let Some(rating) = search.minimum_rating {
            query = query.with_minimum_rating(rating);
        }

        query
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Renders SQL text and parameters in a single pass.
    pub fn build(&self) -> Statement {
        let mut params: Vec<Value> = Vec::with_capacity(self.conditions.len() + 2);
        let mut sql = format!(
            "SELECT {PROPERTY_COLUMNS}, {AVERAGE_RATING} AS average_rating \
             FROM properties \
             LEFT JOIN property_reviews ON properties.id = property_reviews.property_id"
        );

        for (idx, condition) in self.conditions.iter().enumerate() {
            let keyword = if idx == 0 { "WHERE" } else { "AND" };
            params.push(condition.value().clone());
            sql.push_str(&format!(" {keyword} {}", condition.render(params.len())));
        }

        // Needed by the rating aggregate
        sql.push_str(" GROUP BY properties.id");

        if let Some(rating) = self.minimum_rating {
            params.push(Value::Float(rating));
            sql.push_str(&format!(" HAVING {AVERAGE_RATING} >= ${}", params.len()));
        }

        params.push(Value::BigInt(i64::from(self.limit)));
        sql.push_str(&format!(
            " ORDER BY {} ASC, properties.id ASC LIMIT ${}",
            col::COST_PER_NIGHT,
            params.len()
        ));

        let stmt = Statement { sql, params };
        trace!("property query :: {stmt}");

        stmt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbnb_core::types::PropertySearch;

    /// Builds every combination of the four row-level filters
    fn all_row_filter_subsets() -> Vec<(PropertySearch, usize)> {
        (0u8..16)
            .map(|mask| {
                let mut search = PropertySearch::new();
                if mask & 0b0001 != 0 {
                    search = search.with_city("Vancouver");
                }
                if mask & 0b0010 != 0 {
                    search = search.with_owner_id(3);
                }
                if mask & 0b0100 != 0 {
                    search = search.with_minimum_price_per_night(50);
                }
                if mask & 0b1000 != 0 {
                    search = search.with_maximum_price_per_night(500);
                }
                (search, mask.count_ones() as usize)
            })
            .collect()
    }

    #[test]
    fn condition_keywords_for_every_subset() {
        for (search, n) in all_row_filter_subsets() {
            let stmt = PropertyQuery::from_search(&search, None).build();
            let sql = stmt.sql();

            assert_eq!(sql.matches(" WHERE ").count(), usize::from(n > 0), "{sql}");
            assert_eq!(sql.matches(" AND ").count(), n.saturating_sub(1), "{sql}");

            // One parameter per condition plus the limit
            assert_eq!(stmt.params().len(), n + 1);
            if n > 0 {
                assert!(
                    sql.find(" WHERE ").unwrap() < sql.find(" GROUP BY ").unwrap(),
                    "{sql}"
                );
            }
        }
    }

    #[test]
    fn placeholders_follow_parameter_positions() {
        for (search, n) in all_row_filter_subsets() {
            let stmt = PropertyQuery::from_search(&search.with_minimum_rating(4.0), Some(5)).build();
            let sql = stmt.sql();

            for idx in 1..=stmt.params().len() {
                assert!(sql.contains(&format!("${idx}")), "{sql}");
            }
            assert!(!sql.contains(&format!("${}", n + 3)), "{sql}");
        }
    }

    #[test]
    fn no_filters() {
        let stmt = PropertyQuery::from_search(&PropertySearch::new(), None).build();

        assert!(!stmt.sql().contains("WHERE"));
        assert!(!stmt.sql().contains("HAVING"));
        assert!(stmt.sql().contains("LEFT JOIN property_reviews"));
        assert!(stmt.sql().ends_with(
            "GROUP BY properties.id ORDER BY properties.cost_per_night ASC, properties.id ASC LIMIT $1"
        ));
        assert_eq!(
            stmt.params(),
            &[Value::BigInt(i64::from(params::DEFAULT_LIMIT))]
        );
    }

    #[test]
    fn filters_are_added_in_fixed_order() {
        let search = PropertySearch::new()
            .with_maximum_price_per_night(300)
            .with_minimum_rating(4.5)
            .with_minimum_price_per_night(100)
            .with_owner_id(12)
            .with_city("Toronto");

        let stmt = PropertyQuery::from_search(&search, Some(20)).build();

        assert_eq!(
            stmt.params(),
            &[
                Value::Text("%Toronto%".to_owned()),
                Value::Integer(12),
                Value::Integer(100),
                Value::Integer(300),
                Value::Float(4.5),
                Value::BigInt(20),
            ]
        );

        let sql = stmt.sql();
        assert!(sql.contains(" WHERE properties.city ILIKE $1"));
        assert!(sql.contains(" AND properties.owner_id = $2"));
        assert!(sql.contains(" AND properties.cost_per_night >= $3"));
        assert!(sql.contains(" AND properties.cost_per_night <= $4"));
        assert!(sql.contains(" LIMIT $6"));
    }

    #[test]
    fn rating_filter_follows_grouping() {
        let search = PropertySearch::new().with_city("Vancouver").with_minimum_rating(4.0);
        let stmt = PropertyQuery::from_search(&search, None).build();
        let sql = stmt.sql();

        let group_by = sql.find(" GROUP BY ").unwrap();
        let having = sql.find(" HAVING ").unwrap();
        let order_by = sql.find(" ORDER BY ").unwrap();

        assert!(group_by < having && having < order_by, "{sql}");
        assert!(sql.contains("HAVING AVG(property_reviews.rating)::float8 >= $2"));
        // The rating is not a row-level condition
        assert_eq!(sql.matches(" AND ").count(), 0);
        assert_eq!(stmt.params()[1], Value::Float(4.0));
    }

    #[test]
    fn values_are_never_inlined() {
        let city = "Vancouver' OR '1'='1'; DROP TABLE users; --";
        let search = PropertySearch::new()
            .with_city(city)
            .with_owner_id(424242)
            .with_minimum_price_per_night(313131)
            .with_maximum_price_per_night(929292)
            .with_minimum_rating(4.25);

        let stmt = PropertyQuery::from_search(&search, Some(7777)).build();
        let sql = stmt.sql();

        for literal in ["Vancouver", "DROP TABLE", "'", "424242", "313131", "929292", "4.25", "7777"] {
            assert!(!sql.contains(literal), "`{literal}` found in `{sql}`");
        }
        assert_eq!(stmt.params()[0], Value::Text(format!("%{city}%")));
    }

    #[test]
    fn builder_is_not_consumed_by_build() {
        let query = PropertyQuery::default().with_condition(Condition::new(col::OWNER_ID, Op::Eq, 1));

        let first = query.build();
        let second = query.with_limit(3).build();

        assert_eq!(first.sql(), second.sql());
        assert_eq!(first.params()[1], Value::BigInt(10));
        assert_eq!(second.params()[1], Value::BigInt(3));
    }

    #[test]
    fn display_reports_parameter_count() {
        let stmt = PropertyQuery::from_search(&PropertySearch::new().with_owner_id(1), None).build();

        let shown = stmt.to_string();

        assert!(shown.starts_with(stmt.sql()));
        assert!(shown.ends_with(" -- 2 params"));
    }
}
