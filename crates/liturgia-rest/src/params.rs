use liturgia_core::EventQuery;

/// PostgREST query-string pairs for `query`, filter and ordering included.
///
/// A column may appear more than once (`date=gte.…&date=lte.…`); PostgREST
/// combines repeated filters with AND.
pub fn query_params(query: &EventQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("select", "*".to_string())];

    match query {
        EventQuery::OnDate(date) => {
            params.push(("date", format!("eq.{}", date)));
            params.push(("order", "rank.desc".to_string()));
            return params;
        }
        EventQuery::InRange(_) => {}
        EventQuery::ByType {
            celebration_type, ..
        } => params.push(("celebration_type", format!("eq.{}", celebration_type))),
        EventQuery::BySeason { season, .. } => {
            params.push(("liturgical_season", format!("eq.{}", season)))
        }
        EventQuery::ByLocality { is_local, .. } => {
            params.push(("is_local_celebration", format!("eq.{}", is_local)))
        }
        EventQuery::Search { text, .. } => {
            let pattern = quoted(&format!("*{}*", text));
            params.push((
                "or",
                format!(
                    "(title.ilike.{p},description.ilike.{p},patron_of.ilike.{p})",
                    p = pattern
                ),
            ));
        }
    }

    let range = query.range();
    params.push(("date", format!("gte.{}", range.start)));
    params.push(("date", format!("lte.{}", range.end)));

    let order = match query {
        EventQuery::Search { .. } => "rank.desc,date.asc",
        _ => "date.asc,rank.desc",
    };
    params.push(("order", order.to_string()));
    params
}

/// Double-quote a filter value so commas and parentheses stay literal.
fn quoted(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
