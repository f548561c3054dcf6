//! Terminal implementation of the rendering engine boundary.
//!
//! [`TerminalSurface`] keeps the latest declarative description handed over
//! by the render adapter and draws it into terminal cells, scaling
//! panel-local units to the target area at render time. It also maps
//! pointer positions back to activation indices for the host's hit
//! testing.

use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::PANEL_HEIGHT;
use crate::models::KeyRegion;
use crate::render::UiSurface;
use crate::services::geometry::PANEL_BODY;
use crate::tui::Theme;

/// A keyboard panel drawn into terminal cells.
pub struct TerminalSurface {
    regions: Vec<KeyRegion>,
    content: HashMap<usize, String>,
    visible: bool,
    position: (f32, f32),
    hovered: Option<usize>,
    panel_width: f32,
}

impl TerminalSurface {
    /// Creates an empty surface for a panel of the given width. The region
    /// and content description arrives through [`UiSurface::rebuild`].
    #[must_use]
    pub fn new(panel_width: f32) -> Self {
        Self {
            regions: Vec::new(),
            content: HashMap::new(),
            visible: false,
            position: (0.0, 0.0),
            hovered: None,
            panel_width,
        }
    }

    /// Marks the key under the pointer so it renders with its hover color.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index;
    }

    /// Maps a terminal cell inside `area` to the activation index of the
    /// key region covering it, if any.
    ///
    /// Returns `None` while hidden, outside the area, on panel background
    /// between keys, and on the zero-width reserved slot.
    #[must_use]
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        if !self.visible || area.width == 0 || area.height == 0 {
            return None;
        }
        if column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }

        // Sample the cell center in panel-local units
        let px = (f32::from(column - area.x) + 0.5) / f32::from(area.width) * self.panel_width;
        let py = (f32::from(row - area.y) + 0.5) / f32::from(area.height) * PANEL_HEIGHT;

        self.regions
            .iter()
            .find(|region| self.content.contains_key(&region.index) && region.contains(px, py))
            .map(|region| region.index)
    }

    /// Draws the panel into `area`. Hidden surfaces draw nothing.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible || area.width == 0 || area.height == 0 {
            return;
        }

        let body = Block::default().style(Style::default().bg(PANEL_BODY.to_ratatui_color()));
        f.render_widget(body, area);

        for region in &self.regions {
            let Some(glyph) = self.content.get(&region.index) else {
                continue;
            };
            let Some(key_rect) = self.cell_rect(region, area) else {
                continue;
            };

            let background = if self.hovered == Some(region.index) {
                region.hover
            } else {
                region.background
            };
            let style = Style::default()
                .fg(theme.text)
                .bg(background.to_ratatui_color());

            f.render_widget(Block::default().style(style), key_rect);

            // Center the glyph on the key's middle line
            let label_rect = Rect {
                x: key_rect.x,
                y: key_rect.y + key_rect.height / 2,
                width: key_rect.width,
                height: 1,
            };
            f.render_widget(
                Paragraph::new(glyph.as_str())
                    .alignment(Alignment::Center)
                    .style(style),
                label_rect,
            );
        }
    }

    /// Scales a region from panel-local units to terminal cells within
    /// `area`, snapping so neighboring keys keep a visible gap.
    fn cell_rect(&self, region: &KeyRegion, area: Rect) -> Option<Rect> {
        if region.width <= 0.0 || region.height <= 0.0 || self.panel_width <= 0.0 {
            return None;
        }

        let sx = f32::from(area.width) / self.panel_width;
        let sy = f32::from(area.height) / PANEL_HEIGHT;

        let x = area.x + (region.x * sx).round() as u16;
        let y = area.y + (region.y * sy).round() as u16;
        let width = ((region.width * sx).round() as u16).max(1);
        let height = ((region.height * sy).round() as u16).max(1);

        // Clamp to the panel area
        if x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }
        let width = width.min(area.x + area.width - x);
        let height = height.min(area.y + area.height - y);

        Some(Rect {
            x,
            y,
            width,
            height,
        })
    }
}

impl UiSurface for TerminalSurface {
    fn rebuild(&mut self, regions: &[KeyRegion], content: &HashMap<usize, String>) {
        self.regions = regions.to_vec();
        self.content = content.clone();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn position(&self) -> (f32, f32) {
        self.position
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.position = (x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;
    use crate::services::{content_for, generate_regions};

    const PANEL_WIDTH: f32 = 512.0;

    fn built_surface() -> TerminalSurface {
        let mut surface = TerminalSurface::new(PANEL_WIDTH);
        let regions = generate_regions(PANEL_WIDTH);
        let content = content_for(Language::En, crate::models::LayoutVariant::Lower);
        surface.rebuild(&regions, &content);
        surface.set_visible(true);
        surface
    }

    #[test]
    fn test_hit_test_finds_corner_keys() {
        let surface = built_surface();
        let area = Rect {
            x: 0,
            y: 0,
            width: 64,
            height: 16,
        };

        // Near the top-left: the `q` key
        assert_eq!(surface.hit_test(area, 3, 1), Some(0));
        // Near the bottom-right: the enter key
        assert_eq!(surface.hit_test(area, 60, 14), Some(34));
    }

    #[test]
    fn test_hit_test_outside_area() {
        let surface = built_surface();
        let area = Rect {
            x: 10,
            y: 5,
            width: 64,
            height: 16,
        };
        assert_eq!(surface.hit_test(area, 0, 0), None);
        assert_eq!(surface.hit_test(area, 74, 5), None);
    }

    #[test]
    fn test_hit_test_hidden_surface() {
        let mut surface = built_surface();
        surface.set_visible(false);
        let area = Rect {
            x: 0,
            y: 0,
            width: 64,
            height: 16,
        };
        assert_eq!(surface.hit_test(area, 3, 1), None);
    }

    #[test]
    fn test_position_roundtrip() {
        let mut surface = TerminalSurface::new(PANEL_WIDTH);
        surface.set_position(4.0, -2.5);
        assert_eq!(surface.position(), (4.0, -2.5));
    }
}
