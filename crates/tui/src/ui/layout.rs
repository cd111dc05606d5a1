use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::panel::{Panel, PanelType};

const MIN_SUMMARY_WIDTH: u16 = 20;
const MAX_SUMMARY_WIDTH: u16 = 50;
const MIN_BODY_WIDTH: u16 = 30;
const TOPBAR_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 3;

pub struct LayoutState {
    summary_width: u16,
    cached_panels: Vec<Panel>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(30)
    }
}

impl LayoutState {
    pub fn new(summary_width: u16) -> Self {
        Self {
            summary_width: summary_width.clamp(MIN_SUMMARY_WIDTH, MAX_SUMMARY_WIDTH),
            cached_panels: Vec::new(),
        }
    }

    pub fn summary_width(&self) -> u16 {
        self.summary_width
    }

    pub fn calculate_layout(&mut self, area: Rect) -> &[Panel] {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOPBAR_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let content_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(MIN_BODY_WIDTH),
                Constraint::Length(self.summary_width),
            ])
            .split(main_layout[1]);

        self.cached_panels = vec![
            Panel {
                panel_type: PanelType::Topbar,
                rect: main_layout[0],
            },
            Panel {
                panel_type: PanelType::Body,
                rect: content_layout[0],
            },
            Panel {
                panel_type: PanelType::Summary,
                rect: content_layout[1],
            },
            Panel {
                panel_type: PanelType::Footer,
                rect: main_layout[2],
            },
        ];

        &self.cached_panels
    }

    pub fn get_panels(&self) -> &[Panel] {
        &self.cached_panels
    }
}
