use tracing::debug;

use super::Transcript;
use crate::collection::{OrderedUniqueSet, Sequence};
use crate::geometry::{Point, RangePredicate};

/// Sorts points, searches them with range predicates and collects the
/// matches into an [`OrderedUniqueSet`].
///
/// The closing lines report how many elements of the combined list fall in
/// `[2, 5] x [3, 10]`, and whether any falls in `[3, 8] x [1, 5]` (`1` or
/// `0`).
#[must_use]
pub fn filtering() -> Transcript {
    let mut transcript = Transcript::new("filtering");
    let window = RangePredicate::new(2.0, 5.0, 3.0, 10.0).as_fn::<Point>();
    let wide_window = RangePredicate::new(3.0, 8.0, 1.0, 5.0).as_fn::<Point>();

    let mut list: Sequence<Point> = [(1.0, 3.0), (2.0, 4.0), (1.0, 1.0), (7.0, 4.0), (4.0, 9.0)]
        .into_iter()
        .map(Point::from)
        .collect();
    list.sort_ascending();
    list.reverse();
    transcript.push_line(&list);

    let position = list.find_first_matching(0, window);
    if let Some(found) = list.get(position) {
        debug!(position, %found, "first point in range");
        transcript.push_value(found);
    }

    let set = OrderedUniqueSet::build_from(&list, window);
    transcript.push_line(&set);

    list.sort_ascending();
    transcript.push_line(&list);
    transcript.push_line(&set);

    let mut combined = Sequence::with_capacity(list.len() + set.len());
    combined.append_range(&list);
    combined.append_range(&set);
    transcript.push_line(&combined);

    let count = combined.count_matching(window);
    debug!(count, length = combined.len(), "counted points in range");
    transcript.push_value(count);
    let any_in_wide_window = combined.any_matching(wide_window);
    debug!(any_in_wide_window, "searched the wide window");
    // Printed as a console flag, `1` or `0`.
    transcript.push_value(u8::from(any_in_wide_window));

    transcript
}
