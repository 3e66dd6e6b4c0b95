/// Balanced-column layout for the GIF grid
///
/// Splits an ordered run of GIFs into a fixed number of columns whose
/// rendered heights come out roughly equal, even though GIFs have wildly
/// different aspect ratios. Heights are compared by aspect ratio rather
/// than pixel height because every image is scaled to the column width,
/// so the rendered height of a tile is proportional to height/width.

use crate::state::data::GifImage;

/// Distribute `images` into `columns_count` columns using greedy
/// shortest-column placement.
///
/// Each image goes to the column with the smallest accumulated height at
/// the moment it is placed; ties go to the lowest column index. The whole
/// partition is recomputed from scratch on every call rather than patched
/// incrementally, so the result is deterministic for a given input order
/// and column count.
///
/// An empty input produces `columns_count` empty columns.
pub fn balance(images: &[GifImage], columns_count: usize) -> Vec<Vec<&GifImage>> {
    let columns_count = columns_count.max(1);
    let mut columns: Vec<Vec<&GifImage>> = vec![Vec::new(); columns_count];
    let mut heights = vec![0.0_f32; columns_count];

    for image in images {
        let shortest = shortest_column(&heights);
        columns[shortest].push(image);
        heights[shortest] += aspect_ratio(image);
    }

    columns
}

/// Aspect ratio (height / width) used as the stand-in for rendered height.
///
/// A malformed record with zero width contributes no height instead of
/// poisoning the accumulator with a non-finite value.
pub fn aspect_ratio(image: &GifImage) -> f32 {
    if image.preview_width == 0 {
        return 0.0;
    }
    image.preview_height as f32 / image.preview_width as f32
}

/// Index of the column with the smallest accumulated height.
/// Ties resolve to the lowest index.
fn shortest_column(heights: &[f32]) -> usize {
    let mut shortest = 0;
    for (i, &height) in heights.iter().enumerate().skip(1) {
        if height < heights[shortest] {
            shortest = i;
        }
    }
    shortest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gif(id: &str, width: u32, height: u32) -> GifImage {
        GifImage {
            id: id.to_owned(),
            url: format!("https://media.tenor.com/{id}.gif"),
            description: format!("gif {id}"),
            preview_width: width,
            preview_height: height,
        }
    }

    fn ids(column: &[&GifImage]) -> Vec<String> {
        column.iter().map(|img| img.id.clone()).collect()
    }

    #[test]
    fn test_partition_has_no_omissions_or_duplicates() {
        let images = vec![
            gif("a", 200, 100),
            gif("b", 100, 300),
            gif("c", 150, 150),
            gif("d", 120, 480),
            gif("e", 400, 100),
            gif("f", 90, 200),
            gif("g", 250, 250),
        ];

        for columns_count in 1..=4 {
            let columns = balance(&images, columns_count);
            assert_eq!(columns.len(), columns_count);

            let mut placed: Vec<String> = columns.iter().flat_map(|col| ids(col)).collect();
            assert_eq!(placed.len(), images.len());

            placed.sort();
            let mut expected: Vec<String> = images.iter().map(|img| img.id.clone()).collect();
            expected.sort();
            assert_eq!(placed, expected);
        }
    }

    #[test]
    fn test_single_column_preserves_input_order() {
        let images = vec![gif("a", 100, 300), gif("b", 100, 100), gif("c", 100, 200)];
        let columns = balance(&images, 1);

        assert_eq!(columns.len(), 1);
        assert_eq!(ids(&columns[0]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_greedy_tie_breaks_to_lowest_index() {
        // Three square images over two columns: the first goes to column 0,
        // the second to column 1 (height 0 < 1), and the third back to
        // column 0 because equal heights resolve to the lowest index.
        let images = vec![gif("a", 100, 100), gif("b", 100, 100), gif("c", 100, 100)];
        let columns = balance(&images, 2);

        assert_eq!(ids(&columns[0]), vec!["a", "c"]);
        assert_eq!(ids(&columns[1]), vec!["b"]);
    }

    #[test]
    fn test_tall_image_diverts_following_images() {
        // One very tall image should leave its column alone until the other
        // column catches up.
        let images = vec![
            gif("tall", 100, 500),
            gif("a", 100, 100),
            gif("b", 100, 100),
            gif("c", 100, 100),
        ];
        let columns = balance(&images, 2);

        assert_eq!(ids(&columns[0]), vec!["tall"]);
        assert_eq!(ids(&columns[1]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_zero_width_contributes_no_height() {
        // A zero-width record must not produce a non-finite accumulator; it
        // lands in a column but leaves that column's height unchanged.
        let images = vec![
            gif("broken", 0, 500),
            gif("a", 100, 100),
            gif("b", 100, 100),
            gif("c", 100, 100),
        ];
        let columns = balance(&images, 2);

        // "broken" takes column 0 at zero height, so "a" joins it there; the
        // remaining squares then alternate normally.
        assert_eq!(ids(&columns[0]), vec!["broken", "a"]);
        assert_eq!(ids(&columns[1]), vec!["b", "c"]);
    }

    #[test]
    fn test_empty_input_yields_empty_columns() {
        let columns = balance(&[], 3);

        assert_eq!(columns.len(), 3);
        assert!(columns.iter().all(|col| col.is_empty()));
    }

    #[test]
    fn test_zero_columns_clamps_to_one() {
        let images = vec![gif("a", 100, 100)];
        let columns = balance(&images, 0);

        assert_eq!(columns.len(), 1);
        assert_eq!(ids(&columns[0]), vec!["a"]);
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let images = vec![
            gif("a", 200, 100),
            gif("b", 100, 300),
            gif("c", 150, 150),
            gif("d", 120, 480),
        ];

        let first = balance(&images, 3);
        let second = balance(&images, 3);

        for (left, right) in first.iter().zip(second.iter()) {
            assert_eq!(ids(left), ids(right));
        }
    }

    #[test]
    fn test_aspect_ratio_of_malformed_record_is_zero() {
        assert_eq!(aspect_ratio(&gif("broken", 0, 500)), 0.0);
        assert_eq!(aspect_ratio(&gif("wide", 200, 100)), 0.5);
    }
}
