//! Client-side filters for image results.

use super::types::ImageResult;
use crate::config::GridDbConfig;

/// A predicate over image results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFilter {
    /// Keep images of one style, e.g. `alternate` or `material`.
    Style(String),
    /// Keep vertical poster grids (600x900 aspect).
    Vertical,
    /// Keep horizontal banner grids (920x430 aspect).
    Horizontal,
}

impl ImageFilter {
    pub fn style(style: impl Into<String>) -> Self {
        ImageFilter::Style(style.into())
    }

    pub fn matches(&self, image: &ImageResult) -> bool {
        match self {
            ImageFilter::Style(style) => image.style == *style,
            ImageFilter::Vertical => has_aspect(image, GridDbConfig::VERTICAL_GRID),
            ImageFilter::Horizontal => has_aspect(image, GridDbConfig::HORIZONTAL_GRID),
        }
    }
}

/// Keep only the images every filter accepts, preserving order.
pub fn apply_filters(images: Vec<ImageResult>, filters: &[ImageFilter]) -> Vec<ImageResult> {
    images
        .into_iter()
        .filter(|image| filters.iter().all(|f| f.matches(image)))
        .collect()
}

/// Exact aspect-ratio match, compared by cross-multiplying.
fn has_aspect(image: &ImageResult, (width, height): (u32, u32)) -> bool {
    if image.width == 0 || image.height == 0 {
        return false;
    }
    u64::from(image.width) * u64::from(height) == u64::from(image.height) * u64::from(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: u64, style: &str, width: u32, height: u32) -> ImageResult {
        ImageResult {
            id,
            style: style.to_string(),
            width,
            height,
            url: format!("https://cdn/{}.png", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_style_filter() {
        let images = vec![image(1, "alternate", 600, 900), image(2, "material", 600, 900)];
        let kept = apply_filters(images, &[ImageFilter::style("material")]);
        assert_eq!(kept.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_aspect_filters() {
        let images = vec![
            image(1, "alternate", 600, 900),
            image(2, "alternate", 920, 430),
            image(3, "alternate", 1200, 1800),
            image(4, "alternate", 460, 215),
            image(5, "alternate", 0, 0),
        ];

        let vertical = apply_filters(images.clone(), &[ImageFilter::Vertical]);
        assert_eq!(vertical.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);

        let horizontal = apply_filters(images, &[ImageFilter::Horizontal]);
        assert_eq!(horizontal.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_filters_combine() {
        let images = vec![image(1, "alternate", 600, 900), image(2, "blurred", 600, 900)];
        let kept = apply_filters(
            images,
            &[ImageFilter::Vertical, ImageFilter::style("blurred")],
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 2);
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let images = vec![image(1, "a", 1, 1), image(2, "b", 2, 3)];
        assert_eq!(apply_filters(images.clone(), &[]), images);
    }
}
