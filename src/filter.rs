//! Event filter and sort engine
//!
//! Pure selection and ordering over event collections. Every supplied
//! criterion must hold for an event to pass; the result is then ordered by
//! the requested sort key with a stable sort, so events that compare equal
//! keep their original relative order.

use crate::models::{Event, EventsFilter, SortKey};

/// Narrow `events` to those matching every supplied criterion in `filter`,
/// then order the result. The input collection is left untouched.
#[must_use]
pub fn filter_events(events: &[Event], filter: &EventsFilter) -> Vec<Event> {
    let mut selected: Vec<Event> = events
        .iter()
        .filter(|event| matches(event, filter))
        .cloned()
        .collect();

    if let Some(key) = filter.sort_by {
        sort_events(&mut selected, key);
    }

    selected
}

/// Check a single event against every supplied criterion
fn matches(event: &Event, filter: &EventsFilter) -> bool {
    if let Some(from) = filter.date_from
        && event.start_date < from
    {
        return false;
    }

    if let Some(to) = filter.date_to
        && event.start_date > to
    {
        return false;
    }

    if let Some(categories) = &filter.categories
        && !categories.is_empty()
        && !categories.contains(&event.category)
    {
        return false;
    }

    // An event without a price can match neither a free-only nor a
    // price-range criterion.
    if let Some(want_free) = filter.is_free
        && !event.price.as_ref().is_some_and(|p| p.is_free == want_free)
    {
        return false;
    }

    if let Some((min, max)) = filter.price_range
        && !event
            .price
            .as_ref()
            .is_some_and(|p| p.value >= min && p.value <= max)
    {
        return false;
    }

    if let Some(term) = &filter.search_term
        && !term.is_empty()
    {
        let term = term.to_lowercase();
        if !event.name.to_lowercase().contains(&term)
            && !event.description.to_lowercase().contains(&term)
        {
            return false;
        }
    }

    true
}

/// Order events in place by the given key. `sort_by` is stable, so ties
/// preserve input order.
fn sort_events(events: &mut [Event], key: SortKey) {
    match key {
        SortKey::Date => events.sort_by(|a, b| a.start_date.cmp(&b.start_date)),
        SortKey::Popularity => events.sort_by(|a, b| b.attending_count.cmp(&a.attending_count)),
        SortKey::Price => events.sort_by(|a, b| price_value(a).total_cmp(&price_value(b))),
    }
}

fn price_value(event: &Event) -> f64 {
    event.price.as_ref().map_or(0.0, |p| p.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventCategory, EventPrice, Place};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn event(id: &str, category: EventCategory, day: u32, price: Option<EventPrice>) -> Event {
        Event {
            id: id.to_string(),
            name: format!("{} Event {id}", category.label()),
            description: format!("A great {} event in the city.", category.label()),
            start_date: NaiveDate::from_ymd_opt(2026, 7, day).unwrap(),
            end_date: None,
            location: Place::new("Venue"),
            category,
            image_url: None,
            url: None,
            price,
            organizer: "Organizer".to_string(),
            attending_count: 100 * day,
            rating: 4.0,
            tags: Vec::new(),
            is_featured: false,
        }
    }

    fn sample_events() -> Vec<Event> {
        vec![
            event("1", EventCategory::Music, 5, Some(EventPrice::paid(40.0, "USD"))),
            event("2", EventCategory::Food, 3, Some(EventPrice::free("USD"))),
            event("3", EventCategory::Music, 8, None),
            event("4", EventCategory::Sports, 1, Some(EventPrice::paid(15.0, "USD"))),
        ]
    }

    #[test]
    fn test_empty_filter_preserves_order() {
        let events = sample_events();
        let result = filter_events(&events, &EventsFilter::default());
        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_category_filter_only_returns_matching_categories() {
        let filter = EventsFilter {
            categories: Some(vec![EventCategory::Music]),
            ..EventsFilter::default()
        };
        let result = filter_events(&sample_events(), &filter);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.category == EventCategory::Music));
    }

    #[test]
    fn test_empty_category_set_applies_no_filtering() {
        let filter = EventsFilter {
            categories: Some(Vec::new()),
            ..EventsFilter::default()
        };
        assert_eq!(filter_events(&sample_events(), &filter).len(), 4);
    }

    #[rstest]
    #[case(1, 3, vec!["2", "4"])]
    #[case(5, 31, vec!["1", "3"])]
    #[case(3, 5, vec!["1", "2"])]
    fn test_date_bounds_are_inclusive(
        #[case] from_day: u32,
        #[case] to_day: u32,
        #[case] expected: Vec<&str>,
    ) {
        let filter = EventsFilter {
            date_from: NaiveDate::from_ymd_opt(2026, 7, from_day),
            date_to: NaiveDate::from_ymd_opt(2026, 7, to_day),
            ..EventsFilter::default()
        };
        let result = filter_events(&sample_events(), &filter);
        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_price_range_is_inclusive_and_skips_unpriced() {
        let filter = EventsFilter {
            price_range: Some((15.0, 40.0)),
            ..EventsFilter::default()
        };
        let result = filter_events(&sample_events(), &filter);
        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        // Event 3 has no price and must not pass; 0-priced free event fails
        // the lower bound.
        assert_eq!(ids, vec!["1", "4"]);
        assert!(result.iter().all(|e| {
            let value = e.price.as_ref().unwrap().value;
            (15.0..=40.0).contains(&value)
        }));
    }

    #[test]
    fn test_free_filter_excludes_unpriced_events() {
        let filter = EventsFilter {
            is_free: Some(false),
            ..EventsFilter::default()
        };
        let result = filter_events(&sample_events(), &filter);
        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_search_term_is_case_insensitive() {
        let filter = EventsFilter {
            search_term: Some("SPORTS".to_string()),
            ..EventsFilter::default()
        };
        let result = filter_events(&sample_events(), &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "4");
    }

    #[test]
    fn test_empty_search_term_applies_no_filtering() {
        let filter = EventsFilter {
            search_term: Some(String::new()),
            ..EventsFilter::default()
        };
        assert_eq!(filter_events(&sample_events(), &filter).len(), 4);
    }

    #[test]
    fn test_sort_by_date_is_non_decreasing() {
        let filter = EventsFilter {
            sort_by: Some(SortKey::Date),
            ..EventsFilter::default()
        };
        let result = filter_events(&sample_events(), &filter);
        assert!(result.windows(2).all(|w| w[0].start_date <= w[1].start_date));
    }

    #[test]
    fn test_sort_by_popularity_is_non_increasing() {
        let filter = EventsFilter {
            sort_by: Some(SortKey::Popularity),
            ..EventsFilter::default()
        };
        let result = filter_events(&sample_events(), &filter);
        assert!(
            result
                .windows(2)
                .all(|w| w[0].attending_count >= w[1].attending_count)
        );
    }

    #[test]
    fn test_sort_by_price_treats_missing_price_as_zero() {
        let filter = EventsFilter {
            sort_by: Some(SortKey::Price),
            ..EventsFilter::default()
        };
        let result = filter_events(&sample_events(), &filter);
        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        // Free (0) and unpriced (treated as 0) sort ahead of paid events,
        // keeping their relative order.
        assert_eq!(ids, vec!["2", "3", "4", "1"]);
    }
}
