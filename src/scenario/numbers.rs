use tracing::debug;

use super::Transcript;
use crate::collection::Sequence;

/// Edits a list of integers by value and by position.
///
/// ```text
/// 1   6   2   8   2   0
/// 1   7   2   8   2   0
/// 1   7   2   15  42  64
/// 15  42  64
/// ```
#[must_use]
pub fn numbers() -> Transcript {
    let mut transcript = Transcript::new("numbers");

    let mut list: Sequence<i32> = [1, 6, 2, 8, 2, 0].into_iter().collect();
    transcript.push_line(&list);

    let removed = list.remove(&6);
    list.insert_at(1, 7);
    debug!(removed, length = list.len(), "replaced 6 with 7");
    transcript.push_line(&list);

    let tail: Sequence<i32> = [15, 42, 64].into_iter().collect();
    list.erase_range(3..);
    list.append_range(&tail);
    debug!(length = list.len(), "replaced the tail");
    transcript.push_line(&list);
    transcript.push_line(&tail);

    transcript
}
