//! # Photo
//!
//! The picture shown on the affirmative path. The image file is supplied
//! by whoever deploys the page; when it is missing or cannot be decoded a
//! heart placeholder is drawn in the same region instead.
//!
//! Images are drawn with upper-half-block cells: the foreground color is
//! the upper pixel and the background color the lower one, which doubles
//! the vertical resolution of a terminal cell.

use image::RgbaImage;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use std::path::Path;

/// Default location of the photo, relative to the working directory.
pub const DEFAULT_IMAGE_PATH: &str = "valentines-photo.jpg";

/// Glyph drawn when the photo is unavailable.
pub const PLACEHOLDER_GLYPH: &str = "♥";

const HALF_BLOCK: &str = "▀";

#[derive(Debug, Clone)]
pub enum Photo {
    Loaded(RgbaImage),
    Placeholder,
}

impl Photo {
    /// Load and decode the image at `path`, falling back to the placeholder
    /// on any failure.
    pub fn load(path: &Path) -> Self {
        match image::open(path) {
            Ok(decoded) => Photo::Loaded(decoded.to_rgba8()),
            Err(_) => Photo::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Photo::Placeholder)
    }
}

/// Widget that draws a [`Photo`] into a region.
pub struct PhotoView<'a> {
    photo: &'a Photo,
    placeholder_bg: Color,
    placeholder_fg: Color,
}

impl<'a> PhotoView<'a> {
    pub fn new(photo: &'a Photo) -> Self {
        Self {
            photo,
            placeholder_bg: Color::Reset,
            placeholder_fg: Color::Red,
        }
    }

    pub fn placeholder_colors(mut self, bg: Color, fg: Color) -> Self {
        self.placeholder_bg = bg;
        self.placeholder_fg = fg;
        self
    }
}

impl Widget for PhotoView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        match self.photo {
            Photo::Loaded(img) if img.width() > 0 && img.height() > 0 => {
                render_half_blocks(img, area, buf);
            }
            _ => {
                buf.set_style(area, Style::default().bg(self.placeholder_bg));
                let x = area.x + area.width / 2;
                let y = area.y + area.height / 2;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(PLACEHOLDER_GLYPH).set_style(
                        Style::default()
                            .fg(self.placeholder_fg)
                            .bg(self.placeholder_bg)
                            .add_modifier(Modifier::BOLD),
                    );
                }
            }
        }
    }
}

/// Nearest-neighbour sample of `img` stretched over `area`, two pixel rows
/// per cell.
fn render_half_blocks(img: &RgbaImage, area: Rect, buf: &mut Buffer) {
    let cols = u32::from(area.width);
    let rows = u32::from(area.height) * 2;

    for cy in 0..area.height {
        for cx in 0..area.width {
            let px = u32::from(cx) * img.width() / cols;
            let top = u32::from(cy) * 2 * img.height() / rows;
            let bottom = (u32::from(cy) * 2 + 1) * img.height() / rows;

            if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                cell.set_symbol(HALF_BLOCK)
                    .set_fg(pixel_color(img, px, top))
                    .set_bg(pixel_color(img, px, bottom));
            }
        }
    }
}

fn pixel_color(img: &RgbaImage, x: u32, y: u32) -> Color {
    let [r, g, b, _] = img.get_pixel(x, y).0;
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_falls_back_to_placeholder() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let photo = Photo::load(&temp_dir.path().join("nope.jpg"));
        assert!(photo.is_placeholder());
    }

    #[test]
    fn test_undecodable_file_falls_back_to_placeholder() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").expect("write");
        assert!(Photo::load(&path).is_placeholder());
    }

    #[test]
    fn test_valid_png_loads() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("photo.png");
        RgbaImage::from_pixel(4, 4, Rgba([200, 10, 60, 255]))
            .save(&path)
            .expect("save png");

        match Photo::load(&path) {
            Photo::Loaded(img) => assert_eq!(img.dimensions(), (4, 4)),
            Photo::Placeholder => panic!("expected decoded image"),
        }
    }

    #[test]
    fn test_placeholder_draws_heart_in_middle() {
        let area = Rect::new(0, 0, 9, 5);
        let mut buf = Buffer::empty(area);
        PhotoView::new(&Photo::Placeholder).render(area, &mut buf);
        assert_eq!(buf[(4, 2)].symbol(), PLACEHOLDER_GLYPH);
    }

    #[test]
    fn test_loaded_image_uses_upper_and_lower_pixels() {
        // Top half red, bottom half blue
        let mut img = RgbaImage::new(1, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
        let photo = Photo::Loaded(img);

        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        PhotoView::new(&photo).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), HALF_BLOCK);
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }
}
