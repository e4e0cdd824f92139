//! Thumbnail selection from a set of image renditions

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// An image rendition as reported by a media source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Pixel height, when the source reports one. Sources report it as any
    /// JSON number, e.g. `480` or `480.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub url: String,
}

impl Image {
    pub fn new(url: impl Into<String>, height: Option<f64>) -> Self {
        Self {
            height,
            url: url.into(),
        }
    }

    /// Height used for ranking; missing and NaN heights rank as zero
    fn sort_height(&self) -> f64 {
        match self.height {
            // `+ 0.0` folds -0.0 into 0.0 so both rank equal under total_cmp
            Some(height) if !height.is_nan() => height + 0.0,
            _ => 0.0,
        }
    }
}

/// Retrieve the smallest image at least `size` pixels tall
///
/// Falls back to the largest image when none is big enough. Images without
/// a height, or with a NaN height, rank as zero. The input slice is left in
/// its original order.
///
/// # Returns
///
/// URL of the selected image, or `None` when there are no images
///
/// # Examples
///
/// ```
/// use infogata_utils::{get_thumbnail_image, Image};
///
/// let images = vec![
///     Image::new("small.jpg", Some(50.0)),
///     Image::new("medium.jpg", Some(100.0)),
///     Image::new("large.jpg", Some(200.0)),
/// ];
/// assert_eq!(get_thumbnail_image(Some(&images), 100.0), Some("medium.jpg"));
/// ```
pub fn get_thumbnail_image(images: Option<&[Image]>, size: f64) -> Option<&str> {
    let images = images.filter(|images| !images.is_empty())?;

    let mut sorted: Vec<&Image> = images.iter().collect();
    sorted.sort_by(|a, b| a.sort_height().total_cmp(&b.sort_height()));

    let selected: &Image = *sorted
        .iter()
        .find(|image| image.sort_height() >= size)
        .or_else(|| sorted.last())?;

    debug!(
        url = %selected.url,
        height = selected.sort_height(),
        size,
        "Selected thumbnail image"
    );
    Some(selected.url.as_str())
}

/// Parse a JSON array of image descriptors
pub fn parse_images(json: &str) -> Result<Vec<Image>> {
    serde_json::from_str(json).map_err(|e| {
        debug!("Failed to parse image descriptors: {}", e);
        e.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn images(specs: &[(Option<f64>, &str)]) -> Vec<Image> {
        specs
            .iter()
            .map(|(height, url)| Image::new(*url, *height))
            .collect()
    }

    #[test]
    fn test_empty_or_missing_images() {
        assert_eq!(get_thumbnail_image(Some(&[]), 100.0), None);
        assert_eq!(get_thumbnail_image(None, 100.0), None);
        assert_eq!(get_thumbnail_image(None, 0.0), None);
    }

    #[test]
    fn test_smallest_image_meeting_size() {
        let images = images(&[
            (Some(50.0), "small.jpg"),
            (Some(100.0), "medium.jpg"),
            (Some(200.0), "large.jpg"),
        ]);
        assert_eq!(get_thumbnail_image(Some(&images), 100.0), Some("medium.jpg"));
    }

    #[test]
    fn test_largest_image_when_none_big_enough() {
        let images = images(&[(Some(50.0), "small.jpg"), (Some(80.0), "medium.jpg")]);
        assert_eq!(get_thumbnail_image(Some(&images), 100.0), Some("medium.jpg"));
    }

    #[test]
    fn test_missing_height_ranks_lowest() {
        let images = images(&[(None, "noheight.jpg"), (Some(100.0), "medium.jpg")]);
        assert_eq!(get_thumbnail_image(Some(&images), 50.0), Some("medium.jpg"));
        assert_eq!(get_thumbnail_image(Some(&images), 0.0), Some("noheight.jpg"));
    }

    #[test]
    fn test_unsorted_input_is_not_reordered() {
        let images = images(&[
            (Some(300.0), "xl.jpg"),
            (Some(60.0), "small.jpg"),
            (Some(120.0), "medium.jpg"),
        ]);
        let before = images.clone();

        assert_eq!(get_thumbnail_image(Some(&images), 100.0), Some("medium.jpg"));
        assert_eq!(images, before);
    }

    #[test]
    fn test_equal_heights_keep_input_order() {
        let images = images(&[
            (Some(100.0), "first.jpg"),
            (Some(100.0), "second.jpg"),
            (Some(40.0), "tiny.jpg"),
        ]);
        assert_eq!(get_thumbnail_image(Some(&images), 90.0), Some("first.jpg"));
        assert_eq!(get_thumbnail_image(Some(&images), 500.0), Some("second.jpg"));
    }

    #[test]
    fn test_parse_images() {
        let json = r#"[{"height": 64, "url": "a.jpg"}, {"url": "b.jpg"}]"#;
        let parsed = parse_images(json).unwrap();
        assert_eq!(
            parsed,
            vec![Image::new("a.jpg", Some(64.0)), Image::new("b.jpg", None)]
        );
    }

    #[test]
    fn test_parse_images_accepts_float_heights() {
        let json = r#"[{"height": 480.0, "url": "sd.jpg"}, {"height": 720.5, "url": "hd.jpg"}]"#;
        let parsed = parse_images(json).unwrap();
        assert_eq!(parsed[0].height, Some(480.0));
        assert_eq!(get_thumbnail_image(Some(&parsed), 500.0), Some("hd.jpg"));
    }

    #[test]
    fn test_nan_height_ranks_as_zero() {
        let images = images(&[
            (Some(120.0), "medium.jpg"),
            (Some(f64::NAN), "broken.jpg"),
            (Some(10.0), "tiny.jpg"),
        ]);
        assert_eq!(get_thumbnail_image(Some(&images), 0.0), Some("broken.jpg"));
        assert_eq!(get_thumbnail_image(Some(&images), 1000.0), Some("medium.jpg"));
    }

    #[test]
    fn test_fractional_size() {
        let images = images(&[(Some(99.5), "almost.jpg"), (Some(100.0), "exact.jpg")]);
        assert_eq!(get_thumbnail_image(Some(&images), 99.5), Some("almost.jpg"));
        assert_eq!(get_thumbnail_image(Some(&images), 99.75), Some("exact.jpg"));
    }

    #[test]
    fn test_parse_images_rejects_missing_url() {
        let result = parse_images(r#"[{"height": 64}]"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
