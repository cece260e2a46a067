use crate::metrics::ScenarioResult;

pub(crate) fn find_most_profitable_impl(results: &[ScenarioResult]) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.net_revenue
                .partial_cmp(&b.net_revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(index, _)| index)
}
