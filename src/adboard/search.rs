use crate::model::Ad;

/// Sorts a copy of `ads` newest first.
///
/// The sort is stable, so ads sharing a timestamp keep their store order.
pub fn sorted_newest_first(ads: &[Ad]) -> Vec<Ad> {
    let mut list = ads.to_vec();
    list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    list
}

/// Derives the displayed list: newest first, narrowed to ads whose title,
/// description or phone contains `query` (case-insensitive).
pub fn filter_ads(ads: &[Ad], query: &str) -> Vec<Ad> {
    let needle = query.trim().to_lowercase();
    let list = sorted_newest_first(ads);
    if needle.is_empty() {
        return list;
    }
    list.into_iter().filter(|ad| matches(ad, &needle)).collect()
}

/// `needle` must already be lower-cased.
fn matches(ad: &Ad, needle: &str) -> bool {
    [&ad.title, &ad.description, &ad.phone]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
