//! `WHERE` clause builder.

/// The restriction every entity kind's filter supports: membership of a
/// grouping column (meeting, location, ...) and a visible-only toggle.
pub trait GroupFilter {
    /// Grouping ids to restrict to. Empty means unrestricted.
    fn group_ids(&self) -> &[i64];

    fn visible_only(&self) -> bool;
}

/// Append the filter's predicates to `query`.
///
/// Returns the (possibly unchanged) statement together with the values for
/// its `?` placeholders, in order. `group_column` must come from an entity
/// descriptor, never from the request.
pub fn apply_filter<F>(query: &str, group_column: &str, filter: Option<&F>) -> (String, Vec<i64>)
where
    F: GroupFilter + ?Sized,
{
    let mut query = query.to_owned();
    let mut args = Vec::new();

    let Some(filter) = filter else {
        return (query, args);
    };

    let mut clauses: Vec<String> = Vec::new();

    let ids = filter.group_ids();
    if !ids.is_empty() {
        let placeholders = vec!["?"; ids.len()].join(", ");
        clauses.push(format!("{group_column} IN ({placeholders})"));
        args.extend_from_slice(ids);
    }

    if filter.visible_only() {
        clauses.push("visible = 1".to_owned());
    }

    if !clauses.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&clauses.join(" AND "));
    }

    (query, args)
}
