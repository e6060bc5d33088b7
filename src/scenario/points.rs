use tracing::debug;

use super::Transcript;
use crate::collection::Sequence;
use crate::geometry::Point;

/// Edits a list of points by position.
///
/// The second element is replaced with `Point(8, 4)`, then everything from
/// position 3 on is replaced with a second list.
#[must_use]
pub fn points() -> Transcript {
    let mut transcript = Transcript::new("points");

    let mut list: Sequence<Point> = [
        (1.0, 2.0),
        (5.0, 3.0),
        (1.0, 0.0),
        (6.0, 9.0),
        (7.0, 2.0),
        (0.0, -5.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect();
    transcript.push_line(&list);

    let removed = list.remove_at(1);
    list.insert_at(1, Point::new(8.0, 4.0));
    debug!(%removed, "replaced the second point");
    transcript.push_line(&list);

    let tail: Sequence<Point> = [(15.0, 76.0), (54.0, 90.0), (43.0, 85.0)]
        .into_iter()
        .map(Point::from)
        .collect();
    list.erase_range(3..);
    list.append_range(&tail);
    debug!(length = list.len(), "replaced the tail");
    transcript.push_line(&list);
    transcript.push_line(&tail);

    transcript
}
