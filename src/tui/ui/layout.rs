//! Dynamic layout builder for flexible UI composition
//!
//! Provides a builder pattern for creating layouts that can show/hide sections
//! dynamically based on application state.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::collections::HashMap;

/// Section identifiers for layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Content and sidebar together
    Body,
    Content,
    Outline,
    Status,
    Help,
}

/// A dynamic layout that maps section IDs to their rendered areas
pub struct DynamicLayout {
    areas: HashMap<Section, Rect>,
}

impl DynamicLayout {
    /// Start building a vertical layout
    pub fn vertical(area: Rect) -> DynamicLayoutBuilder {
        DynamicLayoutBuilder::new(area, Direction::Vertical)
    }

    /// Start building a horizontal layout
    pub fn horizontal(area: Rect) -> DynamicLayoutBuilder {
        DynamicLayoutBuilder::new(area, Direction::Horizontal)
    }

    /// Get the area for a section by ID
    pub fn get(&self, id: Section) -> Option<Rect> {
        self.areas.get(&id).copied()
    }

    /// Area of a section that is always added; empty if it was not.
    pub fn require(&self, id: Section) -> Rect {
        self.get(id).unwrap_or_default()
    }
}

/// Builder for creating dynamic layouts
pub struct DynamicLayoutBuilder {
    area: Rect,
    direction: Direction,
    sections: Vec<LayoutSection>,
}

struct LayoutSection {
    id: Section,
    constraint: Constraint,
    visible: bool,
}

impl DynamicLayoutBuilder {
    fn new(area: Rect, direction: Direction) -> Self {
        Self {
            area,
            direction,
            sections: Vec::new(),
        }
    }

    /// Add a section that is always visible
    pub fn section(self, id: Section, constraint: Constraint) -> Self {
        self.section_if(true, id, constraint)
    }

    /// Add a section that is conditionally visible
    pub fn section_if(mut self, visible: bool, id: Section, constraint: Constraint) -> Self {
        self.sections.push(LayoutSection {
            id,
            constraint,
            visible,
        });
        self
    }

    pub fn build(self) -> DynamicLayout {
        let visible: Vec<&LayoutSection> = self.sections.iter().filter(|s| s.visible).collect();

        let chunks = Layout::default()
            .direction(self.direction)
            .constraints(visible.iter().map(|s| s.constraint))
            .split(self.area);

        let areas = visible
            .iter()
            .zip(chunks.iter())
            .map(|(section, rect)| (section.id, *rect))
            .collect();

        DynamicLayout { areas }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_visible() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = DynamicLayout::vertical(area)
            .section(Section::Body, Constraint::Min(0))
            .section(Section::Status, Constraint::Length(1))
            .build();

        assert_eq!(layout.require(Section::Body).height, 49);
        assert_eq!(layout.require(Section::Status).height, 1);
    }

    #[test]
    fn test_conditional_section_hidden() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = DynamicLayout::vertical(area)
            .section(Section::Body, Constraint::Min(0))
            .section(Section::Status, Constraint::Length(1))
            .section_if(false, Section::Help, Constraint::Length(8))
            .build();

        assert!(layout.get(Section::Help).is_none());
        assert_eq!(layout.require(Section::Help), Rect::default());
    }

    #[test]
    fn test_conditional_section_visible() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = DynamicLayout::vertical(area)
            .section(Section::Body, Constraint::Min(0))
            .section(Section::Status, Constraint::Length(1))
            .section_if(true, Section::Help, Constraint::Length(8))
            .build();

        assert_eq!(layout.require(Section::Help).height, 8);
        assert_eq!(layout.require(Section::Body).height, 41);
    }

    #[test]
    fn test_horizontal_split() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = DynamicLayout::horizontal(area)
            .section(Section::Content, Constraint::Min(0))
            .section_if(true, Section::Outline, Constraint::Length(30))
            .build();

        assert_eq!(layout.require(Section::Content).width, 90);
        assert_eq!(layout.require(Section::Outline).x, 90);
    }
}
